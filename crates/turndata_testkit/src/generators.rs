//! Property-based test generators using proptest.
//!
//! Provides strategies for generating turn records and stores. Lane data
//! ids are biased towards [`INVALID_LANE_DATAID`] so both sides of
//! `has_lane_data` show up in every run.

use proptest::prelude::*;
use turndata_core::{
    DirectionModifier, EntryClassId, LaneDataId, TurnBearing, TurnDataContainer, TurnInstruction,
    TurnRecord, TurnType, INVALID_LANE_DATAID,
};

/// Strategy for generating known turn types.
pub fn turn_type_strategy() -> impl Strategy<Value = TurnType> {
    (0u8..=TurnType::Sliproad.code()).prop_map(|code| {
        TurnType::from_code(code).unwrap_or(TurnType::Invalid)
    })
}

/// Strategy for generating direction modifiers.
pub fn direction_modifier_strategy() -> impl Strategy<Value = DirectionModifier> {
    (0u8..8).prop_map(DirectionModifier::from_code)
}

/// Strategy for generating turn instructions.
///
/// Mostly well-formed instructions, with some raw bytes whose type code
/// has no [`TurnType`].
pub fn turn_instruction_strategy() -> impl Strategy<Value = TurnInstruction> {
    prop_oneof![
        9 => (turn_type_strategy(), direction_modifier_strategy())
            .prop_map(|(turn_type, modifier)| TurnInstruction::new(turn_type, modifier)),
        1 => any::<u8>().prop_map(TurnInstruction::from_byte),
    ]
}

/// Strategy for generating lane data ids, including the invalid sentinel.
pub fn lane_data_id_strategy() -> impl Strategy<Value = LaneDataId> {
    prop_oneof![
        3 => (0..u16::MAX).prop_map(LaneDataId::new),
        1 => Just(INVALID_LANE_DATAID),
    ]
}

/// Strategy for generating entry class ids.
pub fn entry_class_id_strategy() -> impl Strategy<Value = EntryClassId> {
    any::<u16>().prop_map(EntryClassId::new)
}

/// Strategy for generating bearings over the full encoded range.
pub fn bearing_strategy() -> impl Strategy<Value = TurnBearing> {
    any::<u8>().prop_map(TurnBearing::from_raw)
}

/// Strategy for generating a single turn record.
pub fn turn_record_strategy() -> impl Strategy<Value = TurnRecord> {
    (
        turn_instruction_strategy(),
        lane_data_id_strategy(),
        entry_class_id_strategy(),
        bearing_strategy(),
        bearing_strategy(),
    )
        .prop_map(|(instruction, lane, entry, pre, post)| {
            TurnRecord::new(instruction, lane, entry, pre, post)
        })
}

/// Strategy for generating record sequences of length in `min..max`.
pub fn turn_records_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<TurnRecord>> {
    prop::collection::vec(turn_record_strategy(), min..max)
}

/// Strategy for generating owning stores of length in `min..max`.
pub fn turn_store_strategy(min: usize, max: usize) -> impl Strategy<Value = TurnDataContainer> {
    turn_records_strategy(min, max).prop_map(|records| records.into_iter().collect())
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
