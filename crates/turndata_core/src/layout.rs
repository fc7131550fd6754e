//! Byte layout of a serialized turn data section.
//!
//! A section is a fixed 8 byte header followed by the five columns:
//!
//! ```text
//! +----------+-------+-------------------+---------------+-----------------+------------------+-------------------+
//! | checksum | count | turn_instructions | lane_data_ids | entry_class_ids | pre_turn_bearings| post_turn_bearings|
//! |   u32    |  u32  |    count x u8     | count x u16   |   count x u16   |   count x u8     |    count x u8     |
//! +----------+-------+-------------------+---------------+-----------------+------------------+-------------------+
//! ```
//!
//! All integers are little-endian and columns are packed without padding.

use crate::instruction::TurnInstruction;
use crate::types::{EntryClassId, LaneDataId, TurnBearing};
use turndata_codec::{CodecError, CodecResult, FixedWidth};

/// Size of the section header: checksum (4) + count (4).
pub const HEADER_SIZE: usize = 8;

/// A byte range within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Offset from the start of the section.
    pub offset: usize,
    /// Length in bytes.
    pub len: usize,
}

impl Block {
    /// Offset one past the last byte.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Borrows this block from `region`, with the section starting at `base`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnexpectedEof`] if the block extends past the
    /// end of `region`.
    pub fn slice<'a>(&self, region: &'a [u8], base: usize) -> CodecResult<&'a [u8]> {
        let start = base.checked_add(self.offset);
        let end = start.and_then(|start| start.checked_add(self.len));
        match (start, end) {
            (Some(start), Some(end)) if end <= region.len() => Ok(&region[start..end]),
            _ => Err(CodecError::UnexpectedEof {
                needed: self.len,
                remaining: region.len().saturating_sub(base.saturating_add(self.offset)),
            }),
        }
    }
}

/// Offsets of every block in a section holding `count` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnDataLayout {
    count: u32,
    /// Checksum and count.
    pub header: Block,
    /// Turn instruction column.
    pub turn_instructions: Block,
    /// Lane data id column.
    pub lane_data_ids: Block,
    /// Entry class id column.
    pub entry_class_ids: Block,
    /// Pre-turn bearing column.
    pub pre_turn_bearings: Block,
    /// Post-turn bearing column.
    pub post_turn_bearings: Block,
}

impl TurnDataLayout {
    /// Computes the layout for `count` records.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::LengthOverflow`] if the section would not fit
    /// in the address space.
    pub fn new(count: u32) -> CodecResult<Self> {
        let n = usize::try_from(count).map_err(|_| CodecError::LengthOverflow {
            count: usize::MAX,
            width: 1,
        })?;

        let header = Block {
            offset: 0,
            len: HEADER_SIZE,
        };
        let turn_instructions = next_block::<TurnInstruction>(header, n)?;
        let lane_data_ids = next_block::<LaneDataId>(turn_instructions, n)?;
        let entry_class_ids = next_block::<EntryClassId>(lane_data_ids, n)?;
        let pre_turn_bearings = next_block::<TurnBearing>(entry_class_ids, n)?;
        let post_turn_bearings = next_block::<TurnBearing>(pre_turn_bearings, n)?;

        Ok(Self {
            count,
            header,
            turn_instructions,
            lane_data_ids,
            entry_class_ids,
            pre_turn_bearings,
            post_turn_bearings,
        })
    }

    /// Number of records described by this layout.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Total size of the section in bytes.
    #[must_use]
    pub const fn total_size(&self) -> usize {
        self.post_turn_bearings.end()
    }

    /// Bytes used per record across all columns.
    #[must_use]
    pub const fn record_width() -> usize {
        TurnInstruction::WIDTH
            + LaneDataId::WIDTH
            + EntryClassId::WIDTH
            + TurnBearing::WIDTH
            + TurnBearing::WIDTH
    }

    /// Named blocks in section order.
    #[must_use]
    pub fn blocks(&self) -> [(&'static str, Block); 6] {
        [
            ("header", self.header),
            ("turn_instructions", self.turn_instructions),
            ("lane_data_ids", self.lane_data_ids),
            ("entry_class_ids", self.entry_class_ids),
            ("pre_turn_bearings", self.pre_turn_bearings),
            ("post_turn_bearings", self.post_turn_bearings),
        ]
    }
}

fn next_block<T: FixedWidth>(previous: Block, count: usize) -> CodecResult<Block> {
    let overflow = CodecError::LengthOverflow {
        count,
        width: T::WIDTH,
    };
    let len = count.checked_mul(T::WIDTH).ok_or(overflow.clone())?;
    let offset = previous.end();
    offset.checked_add(len).ok_or(overflow)?;
    Ok(Block { offset, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_layout_is_header_only() {
        let layout = TurnDataLayout::new(0).unwrap();
        assert_eq!(layout.count(), 0);
        assert_eq!(layout.total_size(), HEADER_SIZE);
        for (_, block) in &layout.blocks()[1..] {
            assert_eq!(block.len, 0);
            assert_eq!(block.offset, HEADER_SIZE);
        }
    }

    #[test]
    fn blocks_are_contiguous() {
        let layout = TurnDataLayout::new(3).unwrap();
        let blocks = layout.blocks();
        for pair in blocks.windows(2) {
            assert_eq!(pair[0].1.end(), pair[1].1.offset);
        }
        assert_eq!(layout.turn_instructions, Block { offset: 8, len: 3 });
        assert_eq!(layout.lane_data_ids, Block { offset: 11, len: 6 });
        assert_eq!(layout.entry_class_ids, Block { offset: 17, len: 6 });
        assert_eq!(layout.pre_turn_bearings, Block { offset: 23, len: 3 });
        assert_eq!(layout.post_turn_bearings, Block { offset: 26, len: 3 });
        assert_eq!(layout.total_size(), 29);
    }

    #[test]
    fn record_width_matches_layout() {
        let layout = TurnDataLayout::new(100).unwrap();
        assert_eq!(TurnDataLayout::record_width(), 7);
        assert_eq!(
            layout.total_size(),
            HEADER_SIZE + 100 * TurnDataLayout::record_width()
        );
    }

    #[test]
    fn block_slice_with_base_offset() {
        let region: Vec<u8> = (0..20).collect();
        let block = Block { offset: 2, len: 3 };
        assert_eq!(block.slice(&region, 10).unwrap(), &[12, 13, 14]);
        assert!(matches!(
            block.slice(&region, 16),
            Err(CodecError::UnexpectedEof { needed: 3, remaining: 2 })
        ));
        assert!(block.slice(&region, usize::MAX).is_err());
    }
}
