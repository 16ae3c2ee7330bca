//! Checkpoint Tests - Save/Restore Generator State
//!
//! Critical invariants tested:
//! - Determinism: a restored generator continues the exact stream
//! - Validation: malformed snapshots are rejected, never silently accepted

use proptest::prelude::*;
use reference_rng_core::{Mt19937_64, MtSnapshot, ReferenceRng, RngError, Xoshiro256StarStar};

#[test]
fn test_mt_resume_mid_batch() {
    let mut original = Mt19937_64::new(2024);
    original.take_u64(100);

    let mut restored = Mt19937_64::from_snapshot(&original.snapshot()).unwrap();
    assert_eq!(restored, original);

    for _ in 0..1000 {
        assert_eq!(restored.next_u64(), original.next_u64());
    }
    assert_eq!(restored.batches_generated(), original.batches_generated());
}

#[test]
fn test_mt_json_round_trip() {
    let mut original = Mt19937_64::from_key(&[1, 2, 3]).unwrap();
    original.take_u64(313);

    let json = serde_json::to_string(&original).unwrap();
    let mut restored: Mt19937_64 = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.index(), 1);
    assert_eq!(restored.batches_generated(), 2);
    assert_eq!(restored.next_u64(), original.next_u64());
}

#[test]
fn test_mt_snapshot_wrong_length_rejected() {
    let snapshot = MtSnapshot {
        words: vec![1; 311],
        index: 0,
        batches: 0,
    };
    assert_eq!(
        Mt19937_64::from_snapshot(&snapshot),
        Err(RngError::StateLength {
            expected: 312,
            actual: 311
        })
    );
}

#[test]
fn test_mt_snapshot_index_out_of_range_rejected() {
    let mut snapshot = Mt19937_64::new(1).snapshot();
    snapshot.index = 313;
    assert_eq!(
        Mt19937_64::from_snapshot(&snapshot),
        Err(RngError::IndexOutOfRange {
            index: 313,
            max: 312
        })
    );
}

#[test]
fn test_mt_snapshot_zero_state_rejected() {
    let snapshot = MtSnapshot {
        words: vec![0; 312],
        index: 312,
        batches: 0,
    };
    assert_eq!(
        Mt19937_64::from_snapshot(&snapshot),
        Err(RngError::ZeroState)
    );

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(serde_json::from_str::<Mt19937_64>(&json).is_err());
}

#[test]
fn test_mt_snapshot_batches_optional_in_json() {
    let snapshot = Mt19937_64::new(3).snapshot();
    let json = serde_json::json!({ "words": snapshot.words, "index": 312 });

    let restored: Mt19937_64 = serde_json::from_value(json).unwrap();
    assert_eq!(restored.batches_generated(), 0);
    assert_eq!(restored, Mt19937_64::new(3));
}

#[test]
fn test_xoshiro_json_round_trip() {
    let mut original = Xoshiro256StarStar::new([1, 2, 3, 4]).unwrap();
    original.next_u64();

    let json = serde_json::to_string(&original).unwrap();
    assert_eq!(json, "[7,0,262146,211106232532992]");

    let mut restored: Xoshiro256StarStar = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.next_u64(), original.next_u64());
}

#[test]
fn test_xoshiro_zero_state_json_rejected() {
    assert!(serde_json::from_str::<Xoshiro256StarStar>("[0,0,0,0]").is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_mt_snapshot_resume(seed in any::<u64>(), drawn in 0usize..1000) {
        let mut original = Mt19937_64::new(seed);
        original.take_u64(drawn);

        let mut restored = Mt19937_64::from_snapshot(&original.snapshot()).unwrap();
        for _ in 0..400 {
            prop_assert_eq!(restored.next_u64(), original.next_u64());
        }
    }
}
