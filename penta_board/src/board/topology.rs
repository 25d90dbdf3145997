//! Which two fields every stop lies between, and how it is numbered.

use crate::elements::{ElementId, FieldId, Run, StopId, StopTag};
use crate::error::Result;
use crate::kinds::LegSide;
use crate::sizes::{ARMS, LEGS};

/// Identifiers and run of one stop, before it has a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopPlan {
    pub id: StopId,
    pub alias: StopTag,
    pub run: Run,
}

/// Outer ring stop `sub` of leg `leg`, between corner `leg` and corner `leg - 1`.
pub fn outer_stop(leg: FieldId, sub: u8) -> Result<StopPlan> {
    let i = leg.index();
    Ok(StopPlan {
        id: StopId::outer(i, sub)?,
        alias: StopTag::new(i, sub, None),
        run: Run {
            from: ElementId::Corner(leg),
            to: ElementId::Corner(leg.offset(-1)),
            step: sub,
            length: ARMS,
        },
    })
}

/// Arm stop `sub` next to junction `junction`, towards junction `junction + 1`.
pub fn arm_stop(junction: FieldId, sub: u8) -> Result<StopPlan> {
    let i = junction.index();
    Ok(StopPlan {
        id: StopId::arm(i + 1, sub)?,
        alias: StopTag::new(i + 2, sub, Some(i + 1)),
        run: Run {
            from: ElementId::Junction(junction),
            to: ElementId::Junction(junction.offset(1)),
            step: sub,
            length: ARMS,
        },
    })
}

/// Leg stop `sub` on one branch of corner `corner`.
///
/// The left branch runs towards junction `corner + 3`, the right one towards
/// junction `corner + 2`.
pub fn leg_stop(corner: FieldId, side: LegSide, sub: u8) -> Result<StopPlan> {
    let i = corner.index();
    let towards = match side {
        LegSide::Left => corner.offset(3),
        LegSide::Right => corner.offset(2),
    };
    Ok(StopPlan {
        id: StopId::leg(side, i + 6, sub)?,
        alias: StopTag::new(i, sub, Some(i + 5 + sub)),
        run: Run {
            from: ElementId::Corner(corner),
            to: ElementId::Junction(towards),
            step: sub,
            length: LEGS,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::StopRing;

    fn field(index: u8) -> FieldId {
        FieldId::new(index).unwrap()
    }

    #[test]
    fn test_outer_stop_numbering() {
        let plan = outer_stop(field(0), 2).unwrap();
        assert_eq!(plan.id.to_string(), "s-0-2");
        assert_eq!(plan.run.to, ElementId::corner(4).unwrap());
    }

    #[test]
    fn test_arm_stop_keeps_raw_tag() {
        let plan = arm_stop(field(4), 1).unwrap();
        assert_eq!(plan.id, StopId::arm(5, 1).unwrap());
        assert_eq!(plan.alias, StopTag::new(6, 1, Some(5)));
        assert_eq!(plan.run.to, ElementId::junction(0).unwrap());
    }

    #[test]
    fn test_leg_stop_keys() {
        let plan = leg_stop(field(1), LegSide::Left, 6).unwrap();
        assert_eq!(plan.id.ring(), StopRing::Leg(LegSide::Left));
        assert_eq!(plan.id.leg_index(), 7);
        assert_eq!(plan.id.end(), Some(5));
        assert_eq!(plan.alias, StopTag::new(1, 6, Some(12)));
        assert_eq!(plan.run.to, ElementId::junction(4).unwrap());

        let right = leg_stop(field(1), LegSide::Right, 6).unwrap();
        assert_eq!(right.run.to, ElementId::junction(3).unwrap());
        assert_ne!(plan.id, right.id);
    }

    #[test]
    fn test_out_of_range_sub_rejected() {
        assert!(outer_stop(field(0), 4).is_err());
        assert!(arm_stop(field(0), 0).is_err());
        assert!(leg_stop(field(0), LegSide::Right, 7).is_err());
    }
}
