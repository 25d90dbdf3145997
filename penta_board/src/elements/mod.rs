//! Identifiers and element definitions for the board.

mod components;
mod figure;
mod parse;

pub use components::*;
pub use figure::*;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::kinds::{FieldKind, LegSide, StopRing};
use crate::sizes::{ARMS, LEGS};

/// Number of legs, and therefore of corners and of junctions.
pub const LEG_COUNT: u8 = 5;

/// Legacy field numbers at or above this value name corners, below it junctions.
pub const FIELD_BOUNDARY: u8 = 6;

/// Index of a corner or junction, always in `0..5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FieldId(u8);

impl FieldId {
    pub fn new(index: u8) -> Result<Self> {
        if index < LEG_COUNT {
            Ok(Self(index))
        } else {
            Err(BoardError::InvalidArgument(format!(
                "field index {index} is outside 0..{LEG_COUNT}"
            )))
        }
    }

    /// Index reduced modulo five, so `-1` names the last field.
    pub fn wrapping(index: i32) -> Self {
        Self(index.rem_euclid(i32::from(LEG_COUNT)) as u8)
    }

    pub fn index(&self) -> u8 {
        self.0
    }

    /// Field `offset` steps further along the cycle.
    pub fn offset(&self, offset: i32) -> Self {
        Self::wrapping(i32::from(self.0) + offset)
    }

    /// Every field index in order.
    pub fn all() -> impl Iterator<Item = FieldId> {
        (0..LEG_COUNT).map(FieldId)
    }
}

impl TryFrom<u8> for FieldId {
    type Error = BoardError;

    fn try_from(index: u8) -> Result<Self> {
        Self::new(index)
    }
}

impl From<FieldId> for u8 {
    fn from(id: FieldId) -> Self {
        id.0
    }
}

/// Identifier of a stop.
///
/// `leg` and `sub` follow the numbering of the ring: outer stops use legs
/// `0..=4`, arm stops `1..=5` and leg stops `6..=10`. Leg stops additionally
/// carry an `end` index, always `leg - 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct StopId {
    ring: StopRing,
    leg: u8,
    sub: u8,
    end: Option<u8>,
}

impl StopId {
    /// Outer ring stop between corner `leg` and the previous corner.
    pub fn outer(leg: u8, sub: u8) -> Result<Self> {
        check_range("outer stop leg", leg, 0, LEG_COUNT - 1)?;
        check_range("outer stop sub", sub, 1, ARMS)?;
        Ok(Self {
            ring: StopRing::Outer,
            leg,
            sub,
            end: None,
        })
    }

    /// Arm stop on the inner pentagon.
    pub fn arm(leg: u8, sub: u8) -> Result<Self> {
        check_range("arm stop leg", leg, 1, LEG_COUNT)?;
        check_range("arm stop sub", sub, 1, ARMS)?;
        Ok(Self {
            ring: StopRing::Arm,
            leg,
            sub,
            end: None,
        })
    }

    /// Leg stop on one branch of a corner.
    pub fn leg(side: LegSide, leg: u8, sub: u8) -> Result<Self> {
        check_range(
            "leg stop leg",
            leg,
            FIELD_BOUNDARY,
            FIELD_BOUNDARY + LEG_COUNT - 1,
        )?;
        check_range("leg stop sub", sub, 1, LEGS)?;
        Ok(Self {
            ring: StopRing::Leg(side),
            leg,
            sub,
            end: Some(leg - 2),
        })
    }

    pub fn ring(&self) -> StopRing {
        self.ring
    }

    pub fn leg_index(&self) -> u8 {
        self.leg
    }

    /// Position within the run, starting at 1.
    pub fn sub(&self) -> u8 {
        self.sub
    }

    pub fn end(&self) -> Option<u8> {
        self.end
    }

    /// The stop with the same ring and leg but another sub index, if valid.
    pub fn with_sub(&self, sub: u8) -> Option<StopId> {
        match self.ring {
            StopRing::Outer => StopId::outer(self.leg, sub).ok(),
            StopRing::Arm => StopId::arm(self.leg, sub).ok(),
            StopRing::Leg(side) => StopId::leg(side, self.leg, sub).ok(),
        }
    }
}

impl std::fmt::Display for StopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.ring, self.end) {
            (StopRing::Outer, _) => write!(f, "s-{}-{}", self.leg, self.sub),
            (StopRing::Arm, _) => write!(f, "s-a-{}-{}", self.leg, self.sub),
            (StopRing::Leg(side), end) => write!(
                f,
                "s-{}-{}-{}-{}",
                side.marker(),
                self.leg,
                self.sub,
                end.unwrap_or(self.leg - 2)
            ),
        }
    }
}

/// Identifier of any board element.
///
/// Serialized as its canonical string form, see [`ElementId::from_str`](std::str::FromStr).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ElementId {
    Corner(FieldId),
    Junction(FieldId),
    Stop(StopId),
}

impl ElementId {
    pub fn corner(index: u8) -> Result<Self> {
        FieldId::new(index).map(ElementId::Corner)
    }

    pub fn junction(index: u8) -> Result<Self> {
        FieldId::new(index).map(ElementId::Junction)
    }

    pub fn field(kind: FieldKind, id: FieldId) -> Self {
        match kind {
            FieldKind::Corner => ElementId::Corner(id),
            FieldKind::Junction => ElementId::Junction(id),
        }
    }

    /// Resolve a legacy field number: `1..=5` are junctions, `6..=10` corners.
    pub fn from_legacy(number: u8) -> Option<Self> {
        match number {
            1..=5 => Some(ElementId::Junction(FieldId(number - 1))),
            6..=10 => Some(ElementId::Corner(FieldId(number - FIELD_BOUNDARY))),
            _ => None,
        }
    }

    /// Legacy field number of a corner or junction.
    pub fn legacy_number(&self) -> Option<u8> {
        self.field_kind()
            .zip(self.field_id())
            .map(|(kind, id)| kind.legacy_base() + id.index())
    }

    pub fn field_kind(&self) -> Option<FieldKind> {
        match self {
            ElementId::Corner(_) => Some(FieldKind::Corner),
            ElementId::Junction(_) => Some(FieldKind::Junction),
            ElementId::Stop(_) => None,
        }
    }

    pub fn field_id(&self) -> Option<FieldId> {
        match self {
            ElementId::Corner(id) | ElementId::Junction(id) => Some(*id),
            ElementId::Stop(_) => None,
        }
    }

    pub fn as_stop(&self) -> Option<&StopId> {
        match self {
            ElementId::Stop(stop) => Some(stop),
            _ => None,
        }
    }

    /// Category name: `corner`, `junction` or `stop`.
    pub fn category(&self) -> &'static str {
        match self {
            ElementId::Corner(_) => "corner",
            ElementId::Junction(_) => "junction",
            ElementId::Stop(_) => "stop",
        }
    }
}

impl From<StopId> for String {
    fn from(id: StopId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for StopId {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self> {
        match value.parse::<ElementId>()? {
            ElementId::Stop(stop) => Ok(stop),
            other => Err(BoardError::parse(
                &value,
                format!("expected a stop, found a {}", other.category()),
            )),
        }
    }
}

impl From<StopId> for ElementId {
    fn from(stop: StopId) -> Self {
        ElementId::Stop(stop)
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementId::Corner(id) => write!(f, "c-{}", id.index()),
            ElementId::Junction(id) => write!(f, "j-{}", id.index()),
            ElementId::Stop(stop) => write!(f, "{stop}"),
        }
    }
}

impl From<ElementId> for String {
    fn from(id: ElementId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ElementId {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

fn check_range(what: &str, value: u8, min: u8, max: u8) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(BoardError::InvalidArgument(format!(
            "{what} {value} is outside {min}..={max}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_id_bounds() {
        assert!(FieldId::new(4).is_ok());
        assert!(matches!(
            FieldId::new(5),
            Err(BoardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_field_id_wraps() {
        assert_eq!(FieldId::wrapping(-1).index(), 4);
        assert_eq!(FieldId::wrapping(5).index(), 0);
        assert_eq!(FieldId::wrapping(2).offset(3).index(), 0);
    }

    #[test]
    fn test_legacy_numbers() {
        let junction = ElementId::from_legacy(1).unwrap();
        assert_eq!(junction, ElementId::junction(0).unwrap());
        let corner = ElementId::from_legacy(10).unwrap();
        assert_eq!(corner, ElementId::corner(4).unwrap());
        assert!(ElementId::from_legacy(0).is_none());
        assert!(ElementId::from_legacy(11).is_none());

        for number in 1..=10 {
            let id = ElementId::from_legacy(number).unwrap();
            assert_eq!(id.legacy_number(), Some(number));
        }
    }

    #[test]
    fn test_stop_ranges() {
        assert!(StopId::outer(0, 1).is_ok());
        assert!(StopId::outer(5, 1).is_err());
        assert!(StopId::outer(0, 4).is_err());
        assert!(StopId::arm(0, 1).is_err());
        assert!(StopId::arm(5, 3).is_ok());
        assert!(StopId::leg(LegSide::Left, 5, 1).is_err());
        assert!(StopId::leg(LegSide::Left, 10, 6).is_ok());
    }

    #[test]
    fn test_leg_stop_end_index() {
        let stop = StopId::leg(LegSide::Right, 8, 3).unwrap();
        assert_eq!(stop.end(), Some(6));
        assert_eq!(stop.to_string(), "s-r-8-3-6");
    }

    #[test]
    fn test_with_sub() {
        let stop = StopId::outer(2, 2).unwrap();
        assert_eq!(stop.with_sub(3), Some(StopId::outer(2, 3).unwrap()));
        assert_eq!(stop.with_sub(4), None);
    }

    #[test]
    fn test_element_id_serializes_as_string() {
        let id = ElementId::Stop(StopId::arm(3, 1).unwrap());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""s-a-3-1""#);
        let back: ElementId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
