//! Cross-implementation golden vectors and randomized range checks.
//!
//! The literal values here were produced by the reference 48-bit generator.
//! Any change to them means the value stream is no longer compatible.

#![allow(clippy::unwrap_used)]

use almanac_types::{CropType, EventId, Season, Stage};
use almanac_world::{
    JavaRandom, RngError, boolean_from_percentage, contest_crops, event_id, random_int,
    sample_at_stage, weather,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn seed_zero_reference_stream() {
    let mut rng = JavaRandom::new(0);
    let draws: Vec<i32> = (0..5).map(|_| rng.next(32)).collect();
    assert_eq!(
        draws,
        [-1_155_484_576, -723_955_400, 1_033_096_058, -1_690_734_402, -1_557_280_266]
    );
}

#[test]
fn equal_seeds_produce_equal_streams() {
    let mut seeds = StdRng::seed_from_u64(0xA1_3A_2A_C0);
    for _ in 0..100 {
        let seed: i64 = seeds.random();
        let mut a = JavaRandom::new(seed);
        let mut b = JavaRandom::new(seed);
        for _ in 0..20 {
            assert_eq!(a.next_int(1_000).unwrap(), b.next_int(1_000).unwrap());
        }
    }
}

#[test]
fn next_int_stays_within_bound() {
    let mut params = StdRng::seed_from_u64(7);
    for _ in 0..2_000 {
        let seed: i64 = params.random();
        let bound: i32 = params.random_range(1..=1_000_000);
        let mut rng = JavaRandom::new(seed);
        for _ in 0..8 {
            let value = rng.next_int(bound).unwrap();
            assert!((0..bound).contains(&value), "seed {seed} bound {bound} gave {value}");
        }
    }
}

#[test]
fn high_rejection_bounds_reference_streams() {
    let cases: [(i64, i32, [i32; 6]); 3] = [
        (
            1,
            (1 << 30) + 1,
            [215_764_588, 880_641_847, 874_970_313, 446_064_254, 77_814_904, 714_504_434],
        ),
        (
            123,
            i32::MAX,
            [1_553_004_782, 509_477_450, 2_127_939_176, 647_624_789, 543_942_795, 1_232_933_657],
        ),
        (
            -5,
            1_500_000_001,
            [578_319_411, 780_466_721, 717_457_953, 737_996_328, 817_965_352, 1_486_179_385],
        ),
    ];
    for (seed, bound, expected) in cases {
        let mut rng = JavaRandom::new(seed);
        let draws: Vec<i32> = (0..6).map(|_| rng.next_int(bound).unwrap()).collect();
        assert_eq!(draws, expected, "seed {seed} bound {bound}");
    }
}

#[test]
fn small_and_power_of_two_bounds_stay_in_range() {
    for bound in 1..=64 {
        let mut rng = JavaRandom::new(i64::from(bound));
        for _ in 0..200 {
            let value = rng.next_int(bound).unwrap();
            assert!((0..bound).contains(&value));
        }
    }
}

#[test]
fn stage_sampling_replays_a_single_stream() {
    let mut seeds = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let seed: i64 = seeds.random();
        let mut single = JavaRandom::new(seed);
        for stage in 0_u32..7 {
            let expected = single.next(32);
            let staged: Result<i32, RngError> =
                sample_at_stage(seed, stage, |rng| Ok(rng.next(32)));
            assert_eq!(staged.unwrap(), expected);
        }
    }
}

#[test]
fn event_id_reference_points() {
    assert_eq!(event_id(0), EventId(0));
    assert_eq!(event_id(3), EventId(1));
    assert_eq!(event_id(5), EventId(1));
    assert_eq!(event_id(6), EventId(2));
}

#[test]
fn crops_for_event_zero_as_json() {
    let crops = contest_crops(event_id(0));
    assert_eq!(
        serde_json::to_string(&crops).unwrap(),
        r#"["COCOA_BEANS","CARROT","MUSHROOM"]"#
    );
}

#[test]
fn crops_are_members_of_the_fixed_set() {
    let mut ids = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let id: u64 = ids.random();
        let crops = contest_crops(EventId(id));
        for crop in crops {
            assert!(CropType::ALL.contains(&crop));
        }
        let [a, b, c] = crops;
        assert!(a != b && b != c && a != c, "duplicate crop for event {id}");
    }
}

#[test]
fn later_events_reference_vectors() {
    assert_eq!(
        contest_crops(EventId(12_345)),
        [CropType::Beetroot, CropType::Mushroom, CropType::Melon]
    );
    assert_eq!(
        contest_crops(EventId(8)),
        [CropType::Cactus, CropType::Mushroom, CropType::Potato]
    );
}

#[test]
fn derived_operations_agree_with_stage_sampler() {
    assert_eq!(random_int(42, Stage::Temperature.index(), 5, 20).unwrap(), 8);
    // Seed 42 rolls 63 at stage 1.
    assert!(boolean_from_percentage(42, Stage::IsRaining.index(), 64));
    assert!(!boolean_from_percentage(42, Stage::IsRaining.index(), 63));
}

#[test]
fn winter_rain_is_snow() {
    assert_eq!(weather(304, Season::Winter), almanac_types::Weather::Snow);
}
