//! The logical turn record.

use crate::instruction::TurnInstruction;
use crate::types::{EntryClassId, LaneDataId, TurnBearing, INVALID_LANE_DATAID};

/// Turn metadata for entering one directed edge.
///
/// Stores keep the five fields in separate columns; a `TurnRecord` is the
/// row view used when appending and by tooling that walks a whole store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnRecord {
    /// Maneuver type and direction.
    pub turn_instruction: TurnInstruction,
    /// Lane description, or [`INVALID_LANE_DATAID`].
    pub lane_data_id: LaneDataId,
    /// Permitted approach directions.
    pub entry_class_id: EntryClassId,
    /// Bearing when approaching the turn.
    pub pre_turn_bearing: TurnBearing,
    /// Bearing when leaving the turn.
    pub post_turn_bearing: TurnBearing,
}

impl TurnRecord {
    /// Creates a new record.
    #[must_use]
    pub const fn new(
        turn_instruction: TurnInstruction,
        lane_data_id: LaneDataId,
        entry_class_id: EntryClassId,
        pre_turn_bearing: TurnBearing,
        post_turn_bearing: TurnBearing,
    ) -> Self {
        Self {
            turn_instruction,
            lane_data_id,
            entry_class_id,
            pre_turn_bearing,
            post_turn_bearing,
        }
    }

    /// Creates a record for a turn without lane data.
    #[must_use]
    pub const fn without_lanes(
        turn_instruction: TurnInstruction,
        entry_class_id: EntryClassId,
        pre_turn_bearing: TurnBearing,
        post_turn_bearing: TurnBearing,
    ) -> Self {
        Self::new(
            turn_instruction,
            INVALID_LANE_DATAID,
            entry_class_id,
            pre_turn_bearing,
            post_turn_bearing,
        )
    }

    /// Returns true if the record references lane data.
    #[must_use]
    pub const fn has_lane_data(&self) -> bool {
        self.lane_data_id.is_valid()
    }
}

/// A `NO_TURN` record without lane data.
impl Default for TurnRecord {
    fn default() -> Self {
        Self::without_lanes(
            TurnInstruction::NO_TURN,
            EntryClassId::new(0),
            TurnBearing::default(),
            TurnBearing::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::{DirectionModifier, TurnType};

    #[test]
    fn without_lanes_uses_sentinel() {
        let record = TurnRecord::without_lanes(
            TurnInstruction::new(TurnType::Continue, DirectionModifier::Straight),
            EntryClassId::new(1),
            TurnBearing::from_degrees(10.0),
            TurnBearing::from_degrees(12.0),
        );
        assert_eq!(record.lane_data_id, INVALID_LANE_DATAID);
        assert!(!record.has_lane_data());
    }

    #[test]
    fn default_has_no_lanes() {
        let record = TurnRecord::default();
        assert_eq!(record.turn_instruction, TurnInstruction::NO_TURN);
        assert!(!record.has_lane_data());
    }

    #[test]
    fn with_lanes() {
        let record = TurnRecord::new(
            TurnInstruction::NO_TURN,
            LaneDataId::new(0),
            EntryClassId::new(0),
            TurnBearing::default(),
            TurnBearing::default(),
        );
        assert!(record.has_lane_data());
    }
}
