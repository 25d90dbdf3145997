//! Neighbour rules for fields and stops.

use std::collections::BTreeSet;

use super::Board;
use crate::elements::{ElementId, FieldId, Stop};
use crate::kinds::FieldKind;

/// Neighbours of a corner or junction: the fields at the far end of every
/// run touching it. Indices wrap around at five.
///
/// Corner `i` touches corners `i - 1`, `i + 1` along the outer ring and
/// junctions `i + 2`, `i + 3` along its two legs. Junction `j` touches
/// junctions `j - 1`, `j + 1` along the arms and corners `j - 2`, `j - 3`.
pub(crate) fn field_neighbours(kind: FieldKind, index: FieldId) -> BTreeSet<ElementId> {
    let neighbours = match kind {
        FieldKind::Corner => [
            ElementId::Corner(index.offset(-1)),
            ElementId::Corner(index.offset(1)),
            ElementId::Junction(index.offset(2)),
            ElementId::Junction(index.offset(3)),
        ],
        FieldKind::Junction => [
            ElementId::Junction(index.offset(-1)),
            ElementId::Junction(index.offset(1)),
            ElementId::Corner(index.offset(-2)),
            ElementId::Corner(index.offset(-3)),
        ],
    };
    neighbours.into_iter().collect()
}

/// Lateral neighbours of a stop within its own run.
///
/// Stops across the leg/arm boundary and stops at counter 1 or 3 have none.
pub(crate) fn stop_neighbours(board: &Board, stop: &Stop) -> BTreeSet<ElementId> {
    if !stop.is_pass_through() {
        return BTreeSet::new();
    }

    let id = stop.id();
    [id.sub() - 1, id.sub() + 1]
        .into_iter()
        .filter_map(|sub| id.with_sub(sub))
        .filter(|neighbour| board.stop(neighbour).is_some())
        .map(ElementId::Stop)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_neighbours_wrap() {
        let neighbours = field_neighbours(FieldKind::Corner, FieldId::new(4).unwrap());
        let expected: BTreeSet<_> = [
            ElementId::corner(3).unwrap(),
            ElementId::corner(0).unwrap(),
            ElementId::junction(1).unwrap(),
            ElementId::junction(2).unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(neighbours, expected);
    }

    #[test]
    fn test_junction_neighbours_wrap() {
        let neighbours = field_neighbours(FieldKind::Junction, FieldId::new(1).unwrap());
        let expected: BTreeSet<_> = [
            ElementId::junction(0).unwrap(),
            ElementId::junction(2).unwrap(),
            ElementId::corner(4).unwrap(),
            ElementId::corner(3).unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(neighbours, expected);
    }

    #[test]
    fn test_field_adjacency_is_symmetric() {
        for index in FieldId::all() {
            for kind in [FieldKind::Corner, FieldKind::Junction] {
                let me = ElementId::field(kind, index);
                for other in field_neighbours(kind, index) {
                    let back = field_neighbours(
                        other.field_kind().unwrap(),
                        other.field_id().unwrap(),
                    );
                    assert!(back.contains(&me), "{other} does not list {me}");
                }
            }
        }
    }
}
