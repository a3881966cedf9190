//! Error types for the `almanac-world` crate.
//!
//! The generator is total apart from static argument errors, which are
//! reported through [`RngError`] instead of being clamped.

/// Errors raised by the bounded sampler and its derived operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RngError {
    /// `next_int` was called with a bound that is zero or negative.
    #[error("bound must be positive, got {bound}")]
    NonPositiveBound {
        /// The rejected bound.
        bound: i32,
    },

    /// The span `max - min` of a ranged draw does not fit in an `i32`.
    #[error("range [{min}, {max}) exceeds the 32-bit sampling range")]
    RangeOverflow {
        /// Inclusive lower end of the requested range.
        min: i32,
        /// Exclusive upper end of the requested range.
        max: i32,
    },
}
