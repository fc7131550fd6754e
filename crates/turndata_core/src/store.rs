//! The columnar turn store.

use crate::column::{Column, ColumnView, External, Ownership, Owned, View};
use crate::error::{TurnDataError, TurnDataResult};
use crate::instruction::TurnInstruction;
use crate::layout::TurnDataLayout;
use crate::record::TurnRecord;
use crate::types::{EdgeId, EntryClassId, LaneDataId, TurnBearing, INVALID_LANE_DATAID};
use std::fmt;

/// Turn metadata for every directed edge of a graph, stored column-wise.
///
/// Row `i` describes the turn taken when entering edge `i`. The five
/// columns always have the same length.
///
/// The ownership mode `O` decides where the columns live:
/// - [`TurnDataContainer`] owns growable vectors and is filled during
///   preprocessing with [`push`](TurnStore::push) and
///   [`append`](TurnStore::append).
/// - [`TurnDataView`] borrows one serialized section, usually a
///   memory-mapped file.
/// - [`TurnDataExternal`] borrows five separately supplied buffers.
///
/// Every mode has the same read accessors. Views are immutable; there are
/// no mutators to call on them.
///
/// # Edge ids
///
/// Accessors take an [`EdgeId`] that must be less than [`len`](Self::len).
/// Passing a larger id is a bug in the caller: debug builds fail the
/// assertion with the id and the length, release builds panic on the
/// column bounds check.
pub struct TurnStore<O: Ownership> {
    turn_instructions: O::Buffer<TurnInstruction>,
    lane_data_ids: O::Buffer<LaneDataId>,
    entry_class_ids: O::Buffer<EntryClassId>,
    pre_turn_bearings: O::Buffer<TurnBearing>,
    post_turn_bearings: O::Buffer<TurnBearing>,
}

/// Owning, growable turn store used while building a graph.
pub type TurnDataContainer = TurnStore<Owned>;

/// Read-only turn store borrowed from one serialized section.
pub type TurnDataView<'a> = TurnStore<View<'a>>;

/// Read-only turn store assembled from independently supplied buffers.
pub type TurnDataExternal<'a> = TurnStore<External<'a>>;

/// Borrowed access to the raw columns, for serialization.
pub(crate) struct RawColumns<'s, O: Ownership> {
    pub(crate) turn_instructions: &'s O::Buffer<TurnInstruction>,
    pub(crate) lane_data_ids: &'s O::Buffer<LaneDataId>,
    pub(crate) entry_class_ids: &'s O::Buffer<EntryClassId>,
    pub(crate) pre_turn_bearings: &'s O::Buffer<TurnBearing>,
    pub(crate) post_turn_bearings: &'s O::Buffer<TurnBearing>,
}

impl<O: Ownership> TurnStore<O> {
    /// Builds a store from five columns.
    ///
    /// # Errors
    ///
    /// Returns [`TurnDataError::ColumnLengthMismatch`] naming the first
    /// column whose length differs from `turn_instructions`.
    pub fn from_columns(
        turn_instructions: O::Buffer<TurnInstruction>,
        lane_data_ids: O::Buffer<LaneDataId>,
        entry_class_ids: O::Buffer<EntryClassId>,
        pre_turn_bearings: O::Buffer<TurnBearing>,
        post_turn_bearings: O::Buffer<TurnBearing>,
    ) -> TurnDataResult<Self> {
        let expected = turn_instructions.len();
        let lengths = [
            ("lane_data_ids", lane_data_ids.len()),
            ("entry_class_ids", entry_class_ids.len()),
            ("pre_turn_bearings", pre_turn_bearings.len()),
            ("post_turn_bearings", post_turn_bearings.len()),
        ];
        if let Some(&(column, actual)) = lengths.iter().find(|(_, len)| *len != expected) {
            return Err(TurnDataError::ColumnLengthMismatch {
                column,
                expected,
                actual,
            });
        }

        Ok(Self {
            turn_instructions,
            lane_data_ids,
            entry_class_ids,
            pre_turn_bearings,
            post_turn_bearings,
        })
    }

    /// Number of edges described by this store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turn_instructions.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn row(&self, id: EdgeId) -> usize {
        let index = id.as_usize();
        debug_assert!(
            index < self.len(),
            "{id} out of range for turn data with {} records",
            self.len()
        );
        index
    }

    /// Returns the turn instruction for entering `id`.
    #[inline]
    #[must_use]
    pub fn turn_instruction(&self, id: EdgeId) -> TurnInstruction {
        self.turn_instructions.get(self.row(id))
    }

    /// Returns the lane data id for `id`, possibly [`INVALID_LANE_DATAID`].
    #[inline]
    #[must_use]
    pub fn lane_data_id(&self, id: EdgeId) -> LaneDataId {
        self.lane_data_ids.get(self.row(id))
    }

    /// Returns true if the turn onto `id` has lane data.
    #[inline]
    #[must_use]
    pub fn has_lane_data(&self, id: EdgeId) -> bool {
        self.lane_data_id(id) != INVALID_LANE_DATAID
    }

    /// Returns the lane data id for `id`, or `None` if there is none.
    #[inline]
    #[must_use]
    pub fn lane_data(&self, id: EdgeId) -> Option<LaneDataId> {
        Some(self.lane_data_id(id)).filter(|lane_data_id| lane_data_id.is_valid())
    }

    /// Returns the entry class id for `id`.
    #[inline]
    #[must_use]
    pub fn entry_class_id(&self, id: EdgeId) -> EntryClassId {
        self.entry_class_ids.get(self.row(id))
    }

    /// Returns the bearing when approaching the turn onto `id`.
    #[inline]
    #[must_use]
    pub fn pre_turn_bearing(&self, id: EdgeId) -> TurnBearing {
        self.pre_turn_bearings.get(self.row(id))
    }

    /// Returns the bearing when leaving the turn onto `id`.
    #[inline]
    #[must_use]
    pub fn post_turn_bearing(&self, id: EdgeId) -> TurnBearing {
        self.post_turn_bearings.get(self.row(id))
    }

    /// Collects all five fields for `id` into a record.
    #[must_use]
    pub fn record(&self, id: EdgeId) -> TurnRecord {
        let row = self.row(id);
        TurnRecord {
            turn_instruction: self.turn_instructions.get(row),
            lane_data_id: self.lane_data_ids.get(row),
            entry_class_id: self.entry_class_ids.get(row),
            pre_turn_bearing: self.pre_turn_bearings.get(row),
            post_turn_bearing: self.post_turn_bearings.get(row),
        }
    }

    /// Checked variant of [`record`](Self::record).
    #[must_use]
    pub fn get(&self, id: EdgeId) -> Option<TurnRecord> {
        (id.as_usize() < self.len()).then(|| self.record(id))
    }

    /// Iterates over all records in edge id order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = TurnRecord> + '_ {
        // len() fits in u32: pushes and sections are both limited to u32 ids
        (0..self.len()).map(move |row| self.record(EdgeId::new(row as u32)))
    }

    /// Counts the records that reference lane data.
    #[must_use]
    pub fn lane_data_count(&self) -> usize {
        (0..self.len())
            .filter(|&row| self.lane_data_ids.get(row).is_valid())
            .count()
    }

    pub(crate) fn columns(&self) -> RawColumns<'_, O> {
        RawColumns {
            turn_instructions: &self.turn_instructions,
            lane_data_ids: &self.lane_data_ids,
            entry_class_ids: &self.entry_class_ids,
            pre_turn_bearings: &self.pre_turn_bearings,
            post_turn_bearings: &self.post_turn_bearings,
        }
    }
}

impl TurnStore<Owned> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            turn_instructions: Vec::with_capacity(capacity),
            lane_data_ids: Vec::with_capacity(capacity),
            entry_class_ids: Vec::with_capacity(capacity),
            pre_turn_bearings: Vec::with_capacity(capacity),
            post_turn_bearings: Vec::with_capacity(capacity),
        }
    }

    /// Reserves room for `additional` more records.
    pub fn reserve(&mut self, additional: usize) {
        self.turn_instructions.reserve(additional);
        self.lane_data_ids.reserve(additional);
        self.entry_class_ids.reserve(additional);
        self.pre_turn_bearings.reserve(additional);
        self.post_turn_bearings.reserve(additional);
    }

    /// Appends the record for the next edge id.
    ///
    /// # Panics
    ///
    /// Panics if the store already holds `u32::MAX` records, the most a
    /// graph can address.
    pub fn push(&mut self, record: TurnRecord) {
        assert!(
            self.len() < u32::MAX as usize,
            "turn data cannot hold more than {} records",
            u32::MAX
        );
        self.turn_instructions.push(record.turn_instruction);
        self.lane_data_ids.push(record.lane_data_id);
        self.entry_class_ids.push(record.entry_class_id);
        self.pre_turn_bearings.push(record.pre_turn_bearing);
        self.post_turn_bearings.push(record.post_turn_bearing);
    }

    /// Appends records in order, as if by repeated [`push`](Self::push).
    pub fn append(&mut self, records: &[TurnRecord]) {
        self.reserve(records.len());
        records.iter().for_each(|record| self.push(*record));
    }
}

impl<'a> TurnStore<External<'a>> {
    /// Wraps five encoded column buffers without copying.
    ///
    /// Each buffer holds the little-endian encoding of one column, exactly
    /// as it appears in a serialized section.
    ///
    /// # Errors
    ///
    /// Returns a codec error if a buffer is not a whole number of elements,
    /// or [`TurnDataError::ColumnLengthMismatch`] if the element counts
    /// differ.
    pub fn from_buffers(
        turn_instructions: &'a [u8],
        lane_data_ids: &'a [u8],
        entry_class_ids: &'a [u8],
        pre_turn_bearings: &'a [u8],
        post_turn_bearings: &'a [u8],
    ) -> TurnDataResult<Self> {
        Self::from_columns(
            ColumnView::new(turn_instructions)?,
            ColumnView::new(lane_data_ids)?,
            ColumnView::new(entry_class_ids)?,
            ColumnView::new(pre_turn_bearings)?,
            ColumnView::new(post_turn_bearings)?,
        )
    }

    /// Wraps the columns of a section that starts at `base` inside a larger
    /// shared region, using offsets from `layout`.
    ///
    /// The header at `base` is not read; the layout supplies the count.
    ///
    /// # Errors
    ///
    /// Returns a codec error if any column extends past the end of `region`.
    pub fn from_region(
        region: &'a [u8],
        base: usize,
        layout: &TurnDataLayout,
    ) -> TurnDataResult<Self> {
        Self::from_buffers(
            layout.turn_instructions.slice(region, base)?,
            layout.lane_data_ids.slice(region, base)?,
            layout.entry_class_ids.slice(region, base)?,
            layout.pre_turn_bearings.slice(region, base)?,
            layout.post_turn_bearings.slice(region, base)?,
        )
    }
}

impl<O: Ownership> Default for TurnStore<O> {
    fn default() -> Self {
        Self {
            turn_instructions: Default::default(),
            lane_data_ids: Default::default(),
            entry_class_ids: Default::default(),
            pre_turn_bearings: Default::default(),
            post_turn_bearings: Default::default(),
        }
    }
}

impl<O: Ownership> Clone for TurnStore<O> {
    fn clone(&self) -> Self {
        Self {
            turn_instructions: self.turn_instructions.clone(),
            lane_data_ids: self.lane_data_ids.clone(),
            entry_class_ids: self.entry_class_ids.clone(),
            pre_turn_bearings: self.pre_turn_bearings.clone(),
            post_turn_bearings: self.post_turn_bearings.clone(),
        }
    }
}

impl<O: Ownership> fmt::Debug for TurnStore<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnStore")
            .field("mode", &O::NAME)
            .field("len", &self.len())
            .finish()
    }
}

/// Stores are equal when they hold the same records, whatever their modes.
impl<A: Ownership, B: Ownership> PartialEq<TurnStore<B>> for TurnStore<A> {
    fn eq(&self, other: &TurnStore<B>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Extend<TurnRecord> for TurnStore<Owned> {
    fn extend<I: IntoIterator<Item = TurnRecord>>(&mut self, records: I) {
        let records = records.into_iter();
        self.reserve(records.size_hint().0);
        records.for_each(|record| self.push(record));
    }
}

impl FromIterator<TurnRecord> for TurnStore<Owned> {
    fn from_iter<I: IntoIterator<Item = TurnRecord>>(records: I) -> Self {
        let mut store = Self::new();
        store.extend(records);
        store
    }
}
