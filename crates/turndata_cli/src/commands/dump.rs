//! Dump command implementation.

use serde::Serialize;
use std::path::Path;
use turndata_core::{files, EdgeId, LoadConfig, Ownership, TurnStore};
use turndata_storage::MappedRegion;

/// One edge's turn record, prepared for output.
#[derive(Debug, Serialize)]
pub struct RecordInfo {
    /// Edge id.
    pub edge: u32,
    /// Packed instruction byte.
    pub instruction: u8,
    /// Turn type name.
    pub turn_type: String,
    /// Direction modifier name.
    pub modifier: String,
    /// Lane data id, absent if the turn has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lane_data_id: Option<u16>,
    /// Entry class id.
    pub entry_class_id: u16,
    /// Pre-turn bearing in degrees.
    pub pre_turn_bearing: f64,
    /// Post-turn bearing in degrees.
    pub post_turn_bearing: f64,
}

/// Runs the dump command.
///
/// The file is memory-mapped and read through a view, so only the
/// requested records are decoded.
pub fn run(
    path: &Path,
    limit: Option<usize>,
    start: u32,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err("Turn data file not found".into());
    }

    let region = MappedRegion::open(path)?;
    let (view, _) = files::view_turn_data(region.as_bytes(), &LoadConfig::new())?;
    let records = collect_records(&view, start, limit);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        _ => {
            print_text_output(&records);
        }
    }

    Ok(())
}

fn collect_records<O: Ownership>(
    store: &TurnStore<O>,
    start: u32,
    limit: Option<usize>,
) -> Vec<RecordInfo> {
    let end = u32::try_from(store.len()).unwrap_or(u32::MAX);
    (start..end)
        .take(limit.unwrap_or(usize::MAX))
        .map(|edge| {
            let record = store.record(EdgeId::new(edge));
            let instruction = record.turn_instruction;
            RecordInfo {
                edge,
                instruction: instruction.as_byte(),
                turn_type: instruction.turn_type().to_string(),
                modifier: instruction.direction_modifier().to_string(),
                lane_data_id: record
                    .has_lane_data()
                    .then(|| record.lane_data_id.as_u16()),
                entry_class_id: record.entry_class_id.as_u16(),
                pre_turn_bearing: record.pre_turn_bearing.degrees(),
                post_turn_bearing: record.post_turn_bearing.degrees(),
            }
        })
        .collect()
}

fn print_text_output(records: &[RecordInfo]) {
    println!("Turn records ({} shown)", records.len());
    println!("======================");
    println!();

    for r in records {
        let lanes = r
            .lane_data_id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        println!(
            "[{:>10}] {:<32} lanes={:<6} entry={:<6} bearings={:>6.1}->{:>6.1}",
            r.edge,
            format!("{} {}", r.turn_type, r.modifier),
            lanes,
            r.entry_class_id,
            r.pre_turn_bearing,
            r.post_turn_bearing
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turndata_core::{
        DirectionModifier, EntryClassId, LaneDataId, TurnBearing, TurnDataContainer,
        TurnInstruction, TurnRecord, TurnType, INVALID_LANE_DATAID,
    };

    fn store(n: u16) -> TurnDataContainer {
        (0..n)
            .map(|i| {
                TurnRecord::new(
                    TurnInstruction::new(TurnType::Merge, DirectionModifier::SlightLeft),
                    if i == 0 {
                        INVALID_LANE_DATAID
                    } else {
                        LaneDataId::new(i)
                    },
                    EntryClassId::new(i),
                    TurnBearing::from_raw(64),
                    TurnBearing::from_raw(128),
                )
            })
            .collect()
    }

    #[test]
    fn offset_and_limit_select_a_window() {
        let records = collect_records(&store(10), 3, Some(4));
        let edges: Vec<u32> = records.iter().map(|r| r.edge).collect();
        assert_eq!(edges, vec![3, 4, 5, 6]);
    }

    #[test]
    fn offset_past_end_is_empty() {
        assert!(collect_records(&store(3), 5, None).is_empty());
    }

    #[test]
    fn record_fields_are_rendered() {
        let records = collect_records(&store(2), 0, None);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].lane_data_id, None);
        assert_eq!(records[1].lane_data_id, Some(1));
        assert_eq!(records[1].turn_type, "merge");
        assert_eq!(records[1].modifier, "slight left");
        assert_eq!(records[1].pre_turn_bearing, 90.0);
        assert_eq!(records[1].post_turn_bearing, 180.0);

        let json = serde_json::to_value(&records[0]).unwrap();
        assert!(json.get("lane_data_id").is_none());
    }
}
