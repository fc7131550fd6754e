//! Turn instructions.
//!
//! A [`TurnInstruction`] packs a [`TurnType`] (low 5 bits) and a
//! [`DirectionModifier`] (high 3 bits) into one byte. The byte is stored
//! verbatim, so values written by a newer producer with type codes this
//! crate does not know still round-trip unchanged.

use std::fmt;
use turndata_codec::FixedWidth;

const TYPE_MASK: u8 = 0x1f;
const MODIFIER_SHIFT: u32 = 5;

/// The kind of maneuver performed when entering an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum TurnType {
    Invalid = 0,
    NewName,
    Continue,
    Turn,
    Merge,
    OnRamp,
    OffRamp,
    Fork,
    EndOfRoad,
    Notification,
    EnterRoundabout,
    EnterAndExitRoundabout,
    EnterRotary,
    EnterAndExitRotary,
    EnterRoundaboutIntersection,
    EnterAndExitRoundaboutIntersection,
    UseLane,
    NoTurn,
    Suppressed,
    EnterRoundaboutAtExit,
    ExitRoundabout,
    EnterRotaryAtExit,
    ExitRotary,
    EnterRoundaboutIntersectionAtExit,
    ExitRoundaboutIntersection,
    StayOnRoundabout,
    Sliproad,
}

impl TurnType {
    const ALL: [TurnType; 27] = [
        TurnType::Invalid,
        TurnType::NewName,
        TurnType::Continue,
        TurnType::Turn,
        TurnType::Merge,
        TurnType::OnRamp,
        TurnType::OffRamp,
        TurnType::Fork,
        TurnType::EndOfRoad,
        TurnType::Notification,
        TurnType::EnterRoundabout,
        TurnType::EnterAndExitRoundabout,
        TurnType::EnterRotary,
        TurnType::EnterAndExitRotary,
        TurnType::EnterRoundaboutIntersection,
        TurnType::EnterAndExitRoundaboutIntersection,
        TurnType::UseLane,
        TurnType::NoTurn,
        TurnType::Suppressed,
        TurnType::EnterRoundaboutAtExit,
        TurnType::ExitRoundabout,
        TurnType::EnterRotaryAtExit,
        TurnType::ExitRotary,
        TurnType::EnterRoundaboutIntersectionAtExit,
        TurnType::ExitRoundaboutIntersection,
        TurnType::StayOnRoundabout,
        TurnType::Sliproad,
    ];

    /// Looks up a type by its 5-bit code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Returns the 5-bit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns true for the roundabout, rotary and roundabout
    /// intersection family of maneuvers.
    #[must_use]
    pub fn is_roundabout(self) -> bool {
        (TurnType::EnterRoundabout.code()..=TurnType::EnterAndExitRoundaboutIntersection.code())
            .contains(&self.code())
            || (TurnType::EnterRoundaboutAtExit.code()..=TurnType::StayOnRoundabout.code())
                .contains(&self.code())
    }

    fn name(self) -> &'static str {
        match self {
            TurnType::Invalid => "invalid",
            TurnType::NewName => "new name",
            TurnType::Continue => "continue",
            TurnType::Turn => "turn",
            TurnType::Merge => "merge",
            TurnType::OnRamp => "on ramp",
            TurnType::OffRamp => "off ramp",
            TurnType::Fork => "fork",
            TurnType::EndOfRoad => "end of road",
            TurnType::Notification => "notification",
            TurnType::EnterRoundabout => "enter roundabout",
            TurnType::EnterAndExitRoundabout => "enter and exit roundabout",
            TurnType::EnterRotary => "enter rotary",
            TurnType::EnterAndExitRotary => "enter and exit rotary",
            TurnType::EnterRoundaboutIntersection => "enter roundabout intersection",
            TurnType::EnterAndExitRoundaboutIntersection => {
                "enter and exit roundabout intersection"
            }
            TurnType::UseLane => "use lane",
            TurnType::NoTurn => "no turn",
            TurnType::Suppressed => "suppressed",
            TurnType::EnterRoundaboutAtExit => "enter roundabout at exit",
            TurnType::ExitRoundabout => "exit roundabout",
            TurnType::EnterRotaryAtExit => "enter rotary at exit",
            TurnType::ExitRotary => "exit rotary",
            TurnType::EnterRoundaboutIntersectionAtExit => {
                "enter roundabout intersection at exit"
            }
            TurnType::ExitRoundaboutIntersection => "exit roundabout intersection",
            TurnType::StayOnRoundabout => "stay on roundabout",
            TurnType::Sliproad => "sliproad",
        }
    }
}

impl fmt::Display for TurnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The direction of a maneuver relative to the approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum DirectionModifier {
    UTurn = 0,
    SharpRight,
    Right,
    SlightRight,
    Straight,
    SlightLeft,
    Left,
    SharpLeft,
}

impl DirectionModifier {
    /// Decodes a 3-bit code; higher bits are ignored.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code & 0x07 {
            0 => DirectionModifier::UTurn,
            1 => DirectionModifier::SharpRight,
            2 => DirectionModifier::Right,
            3 => DirectionModifier::SlightRight,
            4 => DirectionModifier::Straight,
            5 => DirectionModifier::SlightLeft,
            6 => DirectionModifier::Left,
            _ => DirectionModifier::SharpLeft,
        }
    }

    /// Returns the 3-bit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for DirectionModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DirectionModifier::UTurn => "uturn",
            DirectionModifier::SharpRight => "sharp right",
            DirectionModifier::Right => "right",
            DirectionModifier::SlightRight => "slight right",
            DirectionModifier::Straight => "straight",
            DirectionModifier::SlightLeft => "slight left",
            DirectionModifier::Left => "left",
            DirectionModifier::SharpLeft => "sharp left",
        })
    }
}

/// A maneuver type plus direction, packed into one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnInstruction(u8);

impl TurnInstruction {
    /// The all-zero instruction.
    pub const INVALID: Self = Self::new(TurnType::Invalid, DirectionModifier::UTurn);

    /// Instruction for an edge entered without any maneuver.
    pub const NO_TURN: Self = Self::new(TurnType::NoTurn, DirectionModifier::UTurn);

    /// Packs a type and a modifier.
    #[must_use]
    pub const fn new(turn_type: TurnType, modifier: DirectionModifier) -> Self {
        Self(turn_type.code() | (modifier.code() << MODIFIER_SHIFT))
    }

    /// Wraps an encoded byte without validation.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    /// Returns the encoded byte.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// Returns the maneuver type; unknown codes report [`TurnType::Invalid`].
    #[must_use]
    pub fn turn_type(self) -> TurnType {
        TurnType::from_code(self.0 & TYPE_MASK).unwrap_or(TurnType::Invalid)
    }

    /// Returns the direction modifier.
    #[must_use]
    pub const fn direction_modifier(self) -> DirectionModifier {
        DirectionModifier::from_code(self.0 >> MODIFIER_SHIFT)
    }
}

impl Default for TurnInstruction {
    fn default() -> Self {
        Self::NO_TURN
    }
}

impl fmt::Display for TurnInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.turn_type(), self.direction_modifier())
    }
}

impl FixedWidth for TurnInstruction {
    const WIDTH: usize = 1;

    #[inline]
    fn write_le(self, out: &mut [u8]) {
        out[0] = self.0;
    }

    #[inline]
    fn read_le(bytes: &[u8]) -> Self {
        Self(bytes[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_unpack() {
        let instruction = TurnInstruction::new(TurnType::Turn, DirectionModifier::SlightLeft);
        assert_eq!(instruction.as_byte(), 3 | (5 << 5));
        assert_eq!(instruction.turn_type(), TurnType::Turn);
        assert_eq!(instruction.direction_modifier(), DirectionModifier::SlightLeft);
    }

    #[test]
    fn every_type_and_modifier_survives_packing() {
        for turn_type in TurnType::ALL {
            for code in 0..8 {
                let modifier = DirectionModifier::from_code(code);
                let instruction = TurnInstruction::new(turn_type, modifier);
                assert_eq!(instruction.turn_type(), turn_type);
                assert_eq!(instruction.direction_modifier(), modifier);
            }
        }
    }

    #[test]
    fn unknown_type_code_reads_as_invalid_but_keeps_byte() {
        let instruction = TurnInstruction::from_byte(0x1f | (2 << 5));
        assert_eq!(instruction.turn_type(), TurnType::Invalid);
        assert_eq!(instruction.direction_modifier(), DirectionModifier::Right);
        assert_eq!(instruction.as_byte(), 0x5f);
    }

    #[test]
    fn constants() {
        assert_eq!(TurnInstruction::INVALID.as_byte(), 0);
        assert_eq!(TurnInstruction::default(), TurnInstruction::NO_TURN);
        assert_eq!(TurnInstruction::NO_TURN.turn_type(), TurnType::NoTurn);
        assert_eq!(TurnType::from_code(26), Some(TurnType::Sliproad));
        assert_eq!(TurnType::from_code(27), None);
    }

    #[test]
    fn roundabout_family() {
        assert!(TurnType::EnterRotary.is_roundabout());
        assert!(TurnType::StayOnRoundabout.is_roundabout());
        assert!(!TurnType::UseLane.is_roundabout());
        assert!(!TurnType::Sliproad.is_roundabout());
    }

    #[test]
    fn display() {
        let instruction = TurnInstruction::new(TurnType::OffRamp, DirectionModifier::SlightRight);
        assert_eq!(instruction.to_string(), "off ramp slight right");
    }
}
