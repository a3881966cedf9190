//! Deterministic 48-bit linear congruential generator.
//!
//! [`JavaRandom`] reproduces `java.util.Random` bit for bit, so every value
//! derived from it matches other implementations of the calendar given the
//! same seed.
//!
//! # Algorithm
//!
//! - Seeding: `state = (seed ^ 0x5DEECE66D) & (2^48 - 1)`
//! - Step: `state = (state * 0x5DEECE66D + 0xB) & (2^48 - 1)`
//! - Output: the top `bits` bits of the new state, read as a signed `i32`
//!
//! # Determinism
//!
//! All state arithmetic is fixed-width `u64` with explicit wrapping. The
//! rejection check in [`JavaRandom::next_int`] deliberately uses 32-bit
//! signed wrapping, because the set of rejected draws depends on where that
//! sum overflows.

use crate::error::RngError;

/// Multiplier of the LCG step. Doubles as the seed scrambler.
pub const MULTIPLIER: u64 = 0x5_DEEC_E66D;

/// Increment of the LCG step.
pub const ADDEND: u64 = 0xB;

/// Mask selecting the low 48 bits of the state.
pub const MASK: u64 = (1 << 48) - 1;

/// Width of the generator state in bits.
const STATE_BITS: u32 = 48;

/// Reinterpret a `u64` as a two's-complement `i64` without changing bits.
///
/// Seeds are 64-bit signed values; unsigned day and event counters are
/// passed through this conversion.
pub const fn seed_from_u64(value: u64) -> i64 {
    i64::from_ne_bytes(value.to_ne_bytes())
}

/// A `java.util.Random`-compatible generator instance.
///
/// Instances are cheap, owned by a single caller, and never shared. Every
/// top-level operation in this crate creates its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaRandom {
    /// The 48-bit state. Bits 48..64 are always zero.
    state: u64,
}

impl JavaRandom {
    /// Create a generator from a 64-bit seed.
    ///
    /// Only the low 48 bits of the scrambled seed survive.
    pub const fn new(seed: i64) -> Self {
        let raw = u64::from_ne_bytes(seed.to_ne_bytes());
        Self {
            state: (raw ^ MULTIPLIER) & MASK,
        }
    }

    /// Return the current 48-bit state.
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Advance the state and return its top `bits` bits as a signed value.
    ///
    /// `bits` is expected in `1..=32`; larger values are treated as 32. With
    /// 32 bits the result spans the full `i32` range, with 31 or fewer it is
    /// always non-negative.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn next(&mut self, bits: u32) -> i32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        let bits = if bits > 32 { 32 } else { bits };
        // Truncating to 32 bits keeps bit 31 of the shifted value as the sign.
        self.state.wrapping_shr(STATE_BITS.saturating_sub(bits)) as u32 as i32
    }

    /// Return a uniformly distributed value in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::NonPositiveBound`] if `bound <= 0`.
    pub fn next_int(&mut self, bound: i32) -> Result<i32, RngError> {
        if bound <= 0 {
            return Err(RngError::NonPositiveBound { bound });
        }
        Ok(self.bounded(bound))
    }

    /// Bounded draw for a bound already known to be positive.
    pub(crate) fn bounded(&mut self, bound: i32) -> i32 {
        // Power of two: take the high bits of a 31-bit draw.
        if bound & bound.wrapping_sub(1) == 0 {
            let product = i64::from(bound).wrapping_mul(i64::from(self.next(31)));
            // bound <= 2^30 and the draw is < 2^31, so the shifted product fits.
            return i32::try_from(product.wrapping_shr(31)).unwrap_or(0);
        }

        loop {
            let bits = self.next(31);
            // bound > 0 here, so the remainder always exists.
            let val = bits.checked_rem(bound).unwrap_or(0);
            if bits.wrapping_sub(val).wrapping_add(bound.wrapping_sub(1)) >= 0 {
                return val;
            }
        }
    }

    /// Return the next value over the full `i32` range.
    pub const fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    /// Return the next 64-bit value, built from two 32-bit draws.
    #[allow(clippy::cast_lossless)]
    pub const fn next_i64(&mut self) -> i64 {
        let high = self.next(32) as i64;
        let low = self.next(32) as i64;
        high.wrapping_shl(32).wrapping_add(low)
    }

    /// Return the next boolean from a single-bit draw.
    pub const fn next_bool(&mut self) -> bool {
        self.next(1) != 0
    }

    /// Shuffle `items` in place with a descending Fisher-Yates pass.
    ///
    /// For `i` from `len - 1` down to 1, swaps `items[i]` with
    /// `items[next_int(i + 1)]`. The order of draws matches
    /// `java.util.Collections.shuffle`.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        // A Java list never holds more than i32::MAX elements.
        let len = i32::try_from(items.len()).unwrap_or(i32::MAX);
        for i in (1..len).rev() {
            let j = self.bounded(i.saturating_add(1));
            let (Ok(a), Ok(b)) = (usize::try_from(i), usize::try_from(j)) else {
                continue;
            };
            items.swap(a, b);
        }
    }
}
