//! Placed board elements: points, fields and stops.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ElementId, FieldId, StopId, FIELD_BOUNDARY};
use crate::geometry::Position;
use crate::kinds::{FieldKind, StopRing};

/// A placed point. Never changes after the board is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: ElementId,
    x: f64,
    y: f64,
    /// Angle in degrees the point was placed at, before any shift.
    angle: f64,
    /// Additional named attributes for renderers.
    #[serde(default)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl Point {
    pub fn new(id: ElementId, position: Position, angle: f64) -> Self {
        Self {
            id,
            x: position.x,
            y: position.y,
            angle,
            extra: BTreeMap::new(),
        }
    }

    /// Attach a named attribute.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn extra(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.extra
    }
}

/// A corner or junction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    kind: FieldKind,
    index: FieldId,
    point: Point,
    /// Successor field of the same kind.
    next: FieldId,
    color: String,
}

impl Field {
    pub fn new(kind: FieldKind, index: FieldId, point: Point, color: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            point,
            next: index.offset(1),
            color: color.into(),
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn index(&self) -> FieldId {
        self.index
    }

    pub fn id(&self) -> ElementId {
        ElementId::field(self.kind, self.index)
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    pub fn next(&self) -> ElementId {
        ElementId::field(self.kind, self.next)
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

/// Second identifier shape recorded for a stop, `s-start-counter[-end]`.
///
/// Arm stops keep the raw tag `(leg + 2, sub, leg + 1)` and leg stops the
/// storage key `(leg, sub, leg + 5 + sub)`, both in terms of the leg being
/// built. Outer stops use `(leg, sub)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StopTag {
    pub start: u8,
    pub counter: u8,
    pub end: Option<u8>,
}

impl StopTag {
    pub fn new(start: u8, counter: u8, end: Option<u8>) -> Self {
        Self {
            start,
            counter,
            end,
        }
    }
}

impl std::fmt::Display for StopTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end {
            Some(end) => write!(f, "s-{}-{}-{}", self.start, self.counter, end),
            None => write!(f, "s-{}-{}", self.start, self.counter),
        }
    }
}

/// The stretch between two fields a stop lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub from: ElementId,
    pub to: ElementId,
    /// Position of the stop counted from `from`, starting at 1.
    pub step: u8,
    pub length: u8,
}

impl Run {
    /// True if this run connects the two fields, in either direction.
    pub fn connects(&self, a: ElementId, b: ElementId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Position of the stop counted from `field`, if `field` is an end of this run.
    pub fn step_from(&self, field: ElementId) -> Option<u8> {
        if field == self.from {
            Some(self.step)
        } else if field == self.to {
            Some(self.length + 1 - self.step)
        } else {
            None
        }
    }
}

/// An intermediate position between two fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: StopId,
    point: Point,
    alias: StopTag,
    run: Run,
}

impl Stop {
    pub fn new(id: StopId, point: Point, alias: StopTag, run: Run) -> Self {
        Self {
            id,
            point,
            alias,
            run,
        }
    }

    pub fn id(&self) -> StopId {
        self.id
    }

    pub fn ring(&self) -> StopRing {
        self.id.ring()
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    pub fn alias(&self) -> StopTag {
        self.alias
    }

    pub fn run(&self) -> Run {
        self.run
    }

    /// The two indices that place this stop on either side of the leg/arm boundary.
    pub fn boundary(&self) -> Option<(u8, u8)> {
        match self.id.ring() {
            StopRing::Outer => None,
            StopRing::Arm => self.alias.end.map(|end| (self.alias.start, end)),
            StopRing::Leg(_) => self.id.end().map(|end| (self.id.leg_index(), end)),
        }
    }

    /// One boundary index is a corner number and the other is not.
    pub fn straddles_boundary(&self) -> bool {
        self.boundary()
            .is_some_and(|(start, end)| (start >= FIELD_BOUNDARY) != (end >= FIELD_BOUNDARY))
    }

    /// Only stops that are neither run ends nor across the boundary connect laterally.
    pub fn is_pass_through(&self) -> bool {
        !self.straddles_boundary() && !matches!(self.id.sub(), 1 | 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::LegSide;

    fn stop(id: StopId, alias: StopTag) -> Stop {
        let corner = ElementId::corner(0).unwrap();
        let junction = ElementId::junction(0).unwrap();
        Stop::new(
            id,
            Point::new(id.into(), Position::default(), 0.0),
            alias,
            Run {
                from: corner,
                to: junction,
                step: id.sub(),
                length: id.ring().run_length(),
            },
        )
    }

    #[test]
    fn test_point_extra() {
        let point = Point::new(ElementId::corner(1).unwrap(), Position::new(1.0, 2.0), -72.0)
            .with_extra("leg", 1)
            .with_extra("legacy", "7");
        assert_eq!(point.extra().len(), 2);
        assert_eq!(point.extra()["leg"], serde_json::json!(1));
        assert_eq!(point.position(), Position::new(1.0, 2.0));
    }

    #[test]
    fn test_field_next_wraps() {
        let index = FieldId::new(4).unwrap();
        let point = Point::new(ElementId::Corner(index), Position::default(), 0.0);
        let field = Field::new(FieldKind::Corner, index, point, "red");
        assert_eq!(field.next(), ElementId::corner(0).unwrap());
        assert_eq!(field.id(), ElementId::corner(4).unwrap());
    }

    #[test]
    fn test_stop_tag_display() {
        assert_eq!(StopTag::new(3, 1, Some(2)).to_string(), "s-3-1-2");
        assert_eq!(StopTag::new(0, 2, None).to_string(), "s-0-2");
    }

    #[test]
    fn test_run_steps() {
        let a = ElementId::corner(0).unwrap();
        let b = ElementId::junction(3).unwrap();
        let run = Run {
            from: a,
            to: b,
            step: 2,
            length: 6,
        };
        assert!(run.connects(b, a));
        assert_eq!(run.step_from(a), Some(2));
        assert_eq!(run.step_from(b), Some(5));
        assert_eq!(run.step_from(ElementId::corner(1).unwrap()), None);
    }

    #[test]
    fn test_boundary_straddle() {
        // arm stop of leg 4: raw tag (6, x, 5)
        let arm = stop(StopId::arm(5, 2).unwrap(), StopTag::new(6, 2, Some(5)));
        assert!(arm.straddles_boundary());
        assert!(!arm.is_pass_through());

        let arm = stop(StopId::arm(2, 2).unwrap(), StopTag::new(3, 2, Some(2)));
        assert!(!arm.straddles_boundary());
        assert!(arm.is_pass_through());

        // leg stops of leg 0 and 1 end below the boundary
        let leg = stop(
            StopId::leg(LegSide::Left, 7, 2).unwrap(),
            StopTag::new(1, 2, Some(8)),
        );
        assert!(leg.straddles_boundary());

        let leg = stop(
            StopId::leg(LegSide::Left, 8, 2).unwrap(),
            StopTag::new(2, 2, Some(9)),
        );
        assert!(!leg.straddles_boundary());
    }

    #[test]
    fn test_run_ends_are_not_pass_through() {
        let first = stop(StopId::outer(1, 1).unwrap(), StopTag::new(1, 1, None));
        let middle = stop(StopId::outer(1, 2).unwrap(), StopTag::new(1, 2, None));
        let last = stop(StopId::outer(1, 3).unwrap(), StopTag::new(1, 3, None));
        assert!(!first.is_pass_through());
        assert!(middle.is_pass_through());
        assert!(!last.is_pass_through());
    }
}
