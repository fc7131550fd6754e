//! Benchmark utilities.

use rand::Rng;
use turndata_core::{
    DirectionModifier, EdgeId, EntryClassId, LaneDataId, TurnBearing, TurnDataContainer,
    TurnInstruction, TurnRecord, TurnType, INVALID_LANE_DATAID,
};

/// Record counts used across benchmarks.
pub const SIZES: &[usize] = &[1_000, 100_000, 1_000_000];

/// Generate a random turn record. About a third have no lane data.
pub fn random_record(rng: &mut impl Rng) -> TurnRecord {
    let turn_type = TurnType::from_code(rng.gen_range(0..=TurnType::Sliproad.code()))
        .unwrap_or(TurnType::Invalid);
    let lane = if rng.gen_ratio(1, 3) {
        INVALID_LANE_DATAID
    } else {
        LaneDataId::new(rng.gen_range(0..u16::MAX))
    };
    TurnRecord::new(
        TurnInstruction::new(turn_type, DirectionModifier::from_code(rng.gen())),
        lane,
        EntryClassId::new(rng.gen()),
        TurnBearing::from_raw(rng.gen()),
        TurnBearing::from_raw(rng.gen()),
    )
}

/// Generate `count` random turn records.
pub fn random_records(count: usize) -> Vec<TurnRecord> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| random_record(&mut rng)).collect()
}

/// Generate an owning store of `count` random records.
pub fn random_store(count: usize) -> TurnDataContainer {
    random_records(count).into_iter().collect()
}

/// Generate `count` random edge ids below `len`, for lookup benchmarks.
pub fn random_edge_ids(len: usize, count: usize) -> Vec<EdgeId> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| EdgeId::new(rng.gen_range(0..len as u32)))
        .collect()
}
