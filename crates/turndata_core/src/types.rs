//! Identifier and bearing types.

use std::fmt;
use turndata_codec::FixedWidth;

/// Identifier of a directed edge in the edge-based graph.
///
/// Edge ids are dense: a graph with `N` edges uses ids `0..N`, and the id
/// is also the row index into a turn store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub u32);

impl EdgeId {
    /// Creates a new edge ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the ID as a row index.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for EdgeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge:{}", self.0)
    }
}

/// Index into the external lane description table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LaneDataId(pub u16);

/// Sentinel meaning "this turn has no lane data".
pub const INVALID_LANE_DATAID: LaneDataId = LaneDataId(u16::MAX);

impl LaneDataId {
    /// Creates a new lane data ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns false for [`INVALID_LANE_DATAID`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != INVALID_LANE_DATAID.0
    }
}

impl fmt::Display for LaneDataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "lanes:{}", self.0)
        } else {
            f.write_str("lanes:none")
        }
    }
}

/// Index into the external entry class table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryClassId(pub u16);

/// Entry class id that refers to no entry class.
pub const INVALID_ENTRY_CLASSID: EntryClassId = EntryClassId(u16::MAX);

impl EntryClassId {
    /// Creates a new entry class ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for EntryClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry:{}", self.0)
    }
}

/// A compass bearing quantized to one byte.
///
/// One step is 360/256 degrees, so encoding truncates to the step below
/// and [`TurnBearing::degrees`] returns the lower edge of that step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TurnBearing(u8);

impl TurnBearing {
    /// Degrees per encoded step.
    pub const SCALE: f64 = 360.0 / 256.0;

    /// Creates a bearing from degrees clockwise from north.
    ///
    /// Angles outside `[0, 360)` are wrapped; NaN maps to north.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        let wrapped = degrees.rem_euclid(360.0);
        // wrapped / SCALE lies in [0, 256); the cast truncates and saturates
        Self((wrapped / Self::SCALE) as u8)
    }

    /// Creates a bearing from its encoded value.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the encoded value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns the bearing in degrees, in `[0, 360)`.
    #[must_use]
    pub fn degrees(self) -> f64 {
        f64::from(self.0) * Self::SCALE
    }
}

impl fmt::Display for TurnBearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.degrees())
    }
}

macro_rules! impl_fixed_width_newtype {
    ($($ty:ident($inner:ty)),* $(,)?) => {$(
        impl FixedWidth for $ty {
            const WIDTH: usize = <$inner as FixedWidth>::WIDTH;

            #[inline]
            fn write_le(self, out: &mut [u8]) {
                self.0.write_le(out);
            }

            #[inline]
            fn read_le(bytes: &[u8]) -> Self {
                Self(<$inner>::read_le(bytes))
            }
        }
    )*};
}

impl_fixed_width_newtype!(LaneDataId(u16), EntryClassId(u16), TurnBearing(u8));
