//! Stage sampling: several independent-looking values from one seed.
//!
//! A per-day seed feeds many decisions (rain chance, is-raining,
//! temperature, ...). Rather than storing one generator per decision, each
//! decision owns a [`Stage`](almanac_types::Stage) ordinal: a fresh
//! generator is built from the seed, `stage` draws are discarded, and the
//! next draw is returned. Stage `k` is therefore the `(k + 1)`-th draw of a
//! single generator seeded with the same seed.
//!
//! Any `u32` stage is accepted. Ordinals beyond the named slots simply
//! discard more draws.

use std::convert::Infallible;

use crate::error::RngError;
use crate::rng::JavaRandom;

/// Bound used for percentage rolls.
const PERCENT: i32 = 100;

/// Draw `stage + 1` values from a fresh generator and return the last.
///
/// # Errors
///
/// Propagates the first error returned by `draw`.
pub fn sample_at_stage<T, E, F>(seed: i64, stage: u32, mut draw: F) -> Result<T, E>
where
    F: FnMut(&mut JavaRandom) -> Result<T, E>,
{
    let mut rng = JavaRandom::new(seed);
    let mut out = draw(&mut rng)?;
    for _ in 0..stage {
        out = draw(&mut rng)?;
    }
    Ok(out)
}

/// Return an integer in `[min, max)` taken at the given stage.
///
/// # Errors
///
/// Returns [`RngError::NonPositiveBound`] if `max <= min`, or
/// [`RngError::RangeOverflow`] if `max - min` does not fit in an `i32`.
pub fn random_int(seed: i64, stage: u32, min: i32, max: i32) -> Result<i32, RngError> {
    let span = max
        .checked_sub(min)
        .ok_or(RngError::RangeOverflow { min, max })?;
    let offset = sample_at_stage(seed, stage, |rng| rng.next_int(span))?;
    min.checked_add(offset)
        .ok_or(RngError::RangeOverflow { min, max })
}

/// Return whether a percentage roll at the given stage lands below
/// `percentage`.
///
/// A percentage of 0 or less is never hit; 100 or more is always hit.
pub fn boolean_from_percentage(seed: i64, stage: u32, percentage: i32) -> bool {
    let Ok(roll) = sample_at_stage(seed, stage, |rng| Ok::<_, Infallible>(rng.bounded(PERCENT)));
    roll < percentage
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use almanac_types::Stage;

    use super::*;

    fn percent_roll(seed: i64, stage: u32) -> i32 {
        sample_at_stage(seed, stage, |rng| rng.next_int(PERCENT)).unwrap()
    }

    #[test]
    fn stage_k_is_the_k_plus_first_draw() {
        for seed in [0_i64, 42, 1000, -3] {
            let mut single = JavaRandom::new(seed);
            for stage in 0_u32..7 {
                let expected = single.next_int(PERCENT).unwrap();
                assert_eq!(
                    percent_roll(seed, stage),
                    expected,
                    "seed {seed} stage {stage}"
                );
            }
        }
    }

    #[test]
    fn stage_rolls_for_known_seeds() {
        let rolls: Vec<i32> = (0..7).map(|stage| percent_roll(42, stage)).collect();
        assert_eq!(rolls, [30, 63, 48, 84, 70, 25, 5]);
        let rolls: Vec<i32> = (0..7).map(|stage| percent_roll(1000, stage)).collect();
        assert_eq!(rolls, [87, 35, 76, 24, 92, 49, 41]);
    }

    #[test]
    fn random_int_offsets_by_min() {
        let values: Vec<i32> = (0..5)
            .map(|stage| random_int(42, stage, -5, 5).unwrap())
            .collect();
        assert_eq!(values, [-5, -2, 3, -1, -5]);
        assert_eq!(random_int(42, Stage::Temperature.index(), 5, 20).unwrap(), 8);
    }

    #[test]
    fn random_int_power_of_two_span() {
        let values: Vec<i32> = (0..3)
            .map(|stage| random_int(7, stage, 0, 16).unwrap())
            .collect();
        assert_eq!(values, [11, 10, 11]);
    }

    #[test]
    fn random_int_rejects_empty_and_inverted_ranges() {
        assert_eq!(
            random_int(1, 0, 5, 5),
            Err(RngError::NonPositiveBound { bound: 0 })
        );
        assert_eq!(
            random_int(1, 0, 10, 3),
            Err(RngError::NonPositiveBound { bound: -7 })
        );
    }

    #[test]
    fn random_int_rejects_overflowing_span() {
        assert_eq!(
            random_int(1, 0, i32::MIN, i32::MAX),
            Err(RngError::RangeOverflow {
                min: i32::MIN,
                max: i32::MAX
            })
        );
    }

    #[test]
    fn boolean_from_percentage_thresholds() {
        // Seed 0, stage 0 rolls 60.
        assert!(boolean_from_percentage(0, 0, 61));
        assert!(!boolean_from_percentage(0, 0, 60));
        // Stage 1 rolls 48.
        assert!(boolean_from_percentage(0, Stage::IsRaining.index(), 49));
        assert!(!boolean_from_percentage(0, Stage::IsRaining.index(), 48));
    }

    #[test]
    fn boolean_from_percentage_extremes() {
        for seed in 0_i64..200 {
            assert!(!boolean_from_percentage(seed, 3, 0));
            assert!(boolean_from_percentage(seed, 3, 100));
        }
    }

    #[test]
    fn out_of_range_stage_only_discards_more() {
        let mut single = JavaRandom::new(11);
        let mut expected = 0;
        for _ in 0..=20 {
            expected = single.next_int(PERCENT).unwrap();
        }
        assert_eq!(percent_roll(11, 20), expected);
    }
}
