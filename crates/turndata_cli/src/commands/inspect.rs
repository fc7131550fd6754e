//! Inspect command implementation.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use turndata_core::{files, LoadConfig, Ownership, TurnDataLayout, TurnStore};
use turndata_storage::MappedRegion;

/// Turn data file inspection result.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// File path.
    pub path: String,
    /// File size in bytes.
    pub file_size: u64,
    /// Connectivity checksum, hex-encoded.
    pub checksum: String,
    /// Number of edge records.
    pub record_count: usize,
    /// Records that reference lane data.
    pub lane_data_count: usize,
    /// Records whose maneuver belongs to the roundabout family.
    pub roundabout_count: usize,
    /// Section blocks in file order.
    pub blocks: Vec<BlockInfo>,
    /// Record count per turn type.
    pub turn_types: BTreeMap<String, usize>,
}

/// Position of one block in the file.
#[derive(Debug, Serialize)]
pub struct BlockInfo {
    /// Block name.
    pub name: &'static str,
    /// Byte offset from the start of the file.
    pub offset: usize,
    /// Length in bytes.
    pub len: usize,
}

/// Runs the inspect command.
pub fn run(path: &Path, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("No turn data file found at {:?}", path).into());
    }

    let region = MappedRegion::open(path)?;
    let (view, checksum) = files::view_turn_data(region.as_bytes(), &LoadConfig::new())?;
    let result = inspect(&view, checksum, path, region.len() as u64)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            print_text_output(&result);
        }
    }

    Ok(())
}

fn inspect<O: Ownership>(
    store: &TurnStore<O>,
    checksum: u32,
    path: &Path,
    file_size: u64,
) -> Result<InspectResult, Box<dyn std::error::Error>> {
    let count = u32::try_from(store.len())?;
    let layout = TurnDataLayout::new(count)?;

    let mut turn_types = BTreeMap::new();
    let mut roundabout_count = 0;
    for record in store.iter() {
        let turn_type = record.turn_instruction.turn_type();
        if turn_type.is_roundabout() {
            roundabout_count += 1;
        }
        *turn_types.entry(turn_type.to_string()).or_insert(0) += 1;
    }

    Ok(InspectResult {
        path: path.display().to_string(),
        file_size,
        checksum: format!("{checksum:08x}"),
        record_count: store.len(),
        lane_data_count: store.lane_data_count(),
        roundabout_count,
        blocks: layout
            .blocks()
            .into_iter()
            .map(|(name, block)| BlockInfo {
                name,
                offset: block.offset,
                len: block.len,
            })
            .collect(),
        turn_types,
    })
}

fn print_text_output(result: &InspectResult) {
    println!("Turn Data Inspection");
    println!("====================");
    println!();
    println!("Path:      {}", result.path);
    println!("Size:      {} bytes", format_size(result.file_size));
    println!("Checksum:  {}", result.checksum);
    println!();
    println!("Records:");
    println!("  Edges:          {}", result.record_count);
    println!(
        "  With lane data: {} ({})",
        result.lane_data_count,
        percent(result.lane_data_count, result.record_count)
    );
    println!(
        "  Roundabouts:    {} ({})",
        result.roundabout_count,
        percent(result.roundabout_count, result.record_count)
    );
    println!();
    println!("Layout:");
    for block in &result.blocks {
        println!(
            "  {:<20} offset {:>10}  len {:>10}",
            block.name, block.offset, block.len
        );
    }

    if !result.turn_types.is_empty() {
        println!();
        println!("Turn types:");
        for (name, count) in &result.turn_types {
            println!("  {:<40} {}", name, count);
        }
    }
}

fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        "-".to_string()
    } else {
        format!("{:.1}%", part as f64 * 100.0 / total as f64)
    }
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{}", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turndata_core::{
        DirectionModifier, EntryClassId, LaneDataId, TurnBearing, TurnDataContainer,
        TurnInstruction, TurnRecord, TurnType,
    };

    #[test]
    fn inspect_counts_and_layout() {
        let turn = TurnInstruction::new(TurnType::Turn, DirectionModifier::Left);
        let fork = TurnInstruction::new(TurnType::Fork, DirectionModifier::SlightRight);
        let rotary = TurnInstruction::new(TurnType::EnterRotary, DirectionModifier::Right);
        let north = TurnBearing::default();
        let entry = EntryClassId::new(0);
        let store: TurnDataContainer = [
            TurnRecord::new(turn, LaneDataId::new(1), entry, north, north),
            TurnRecord::without_lanes(turn, entry, north, north),
            TurnRecord::without_lanes(fork, entry, north, north),
            TurnRecord::without_lanes(rotary, entry, north, north),
        ]
        .into_iter()
        .collect();

        let result = inspect(&store, 0xab, Path::new("g.turns"), 36).unwrap();
        assert_eq!(result.checksum, "000000ab");
        assert_eq!(result.record_count, 4);
        assert_eq!(result.lane_data_count, 1);
        assert_eq!(result.roundabout_count, 1);
        assert_eq!(result.blocks.len(), 6);
        assert_eq!(result.blocks[5].offset + result.blocks[5].len, 36);
        assert_eq!(result.turn_types.get("turn"), Some(&2));
        assert_eq!(result.turn_types.get("fork"), Some(&1));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["blocks"][1]["name"], "turn_instructions");
        assert_eq!(json["roundabout_count"], 1);
    }

    #[test]
    fn size_and_percent_formatting() {
        assert_eq!(format_size(512), "512");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
        assert_eq!(percent(1, 4), "25.0%");
        assert_eq!(percent(0, 0), "-");
    }
}
