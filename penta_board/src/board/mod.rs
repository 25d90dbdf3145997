//! The built board: fields, stops and the figures standing on them.

mod adjacency;
mod roster;
mod topology;

pub use topology::*;

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

use crate::elements::{
    ElementId, Field, FieldId, Figure, FigureId, Point, Stop, StopId, StopTag, LEG_COUNT,
};
use crate::error::{BoardError, Result};
use crate::geometry::Position;
use crate::kinds::{FieldKind, LegSide, StopRing};
use crate::palette::Palette;
use crate::sizes::{SizeSet, ARMS, LEGS};
use roster::Roster;

/// Stops on the outer ring of a board.
pub const OUTER_STOPS: usize = LEG_COUNT as usize * ARMS as usize;
/// Stops on the inner pentagon of a board.
pub const ARM_STOPS: usize = LEG_COUNT as usize * ARMS as usize;
/// Stops on the pentagram lines of a board.
pub const LEG_STOPS: usize = LEG_COUNT as usize * 2 * LEGS as usize;

/// Everything a builder produces for one board.
#[derive(Debug, Clone)]
pub struct BoardParts {
    pub sizes: SizeSet,
    pub center: Position,
    pub shift: bool,
    pub palette: Palette,
    pub corners: Vec<Field>,
    pub junctions: Vec<Field>,
    /// Stops in placement order.
    pub stops: Vec<Stop>,
}

/// A built board.
///
/// The layout never changes after construction; a new scale or shift means a
/// new board. Figures are kept behind a lock so moves from several threads
/// are serialized.
#[derive(Debug, Serialize)]
pub struct Board {
    sizes: SizeSet,
    center: Position,
    shift: bool,
    palette: Palette,
    corners: Vec<Field>,
    junctions: Vec<Field>,
    stops: Vec<Stop>,
    #[serde(skip)]
    stop_index: HashMap<StopId, usize>,
    #[serde(skip)]
    roster: RwLock<Roster>,
}

impl Board {
    /// Assemble a board, checking the fixed element counts.
    pub fn from_parts(parts: BoardParts) -> Result<Self> {
        let BoardParts {
            sizes,
            center,
            shift,
            palette,
            mut corners,
            mut junctions,
            stops,
        } = parts;

        corners.sort_by_key(Field::index);
        junctions.sort_by_key(Field::index);
        check_fields(FieldKind::Corner, &corners)?;
        check_fields(FieldKind::Junction, &junctions)?;

        let mut stop_index = HashMap::with_capacity(stops.len());
        for (position, stop) in stops.iter().enumerate() {
            if stop_index.insert(stop.id(), position).is_some() {
                return Err(BoardError::InternalInconsistency(format!(
                    "stop {} placed twice",
                    stop.id()
                )));
            }
        }

        let count = |ring: fn(&StopRing) -> bool| stops.iter().filter(|s| ring(&s.ring())).count();
        let counts = [
            ("outer", count(|r| *r == StopRing::Outer), OUTER_STOPS),
            ("arm", count(|r| *r == StopRing::Arm), ARM_STOPS),
            ("leg", count(StopRing::is_leg), LEG_STOPS),
        ];
        for (ring, found, expected) in counts {
            if found != expected {
                return Err(BoardError::InternalInconsistency(format!(
                    "expected {expected} {ring} stops, found {found}"
                )));
            }
        }

        Ok(Self {
            sizes,
            center,
            shift,
            palette,
            corners,
            junctions,
            stops,
            stop_index,
            roster: RwLock::new(Roster::default()),
        })
    }

    pub fn sizes(&self) -> &SizeSet {
        &self.sizes
    }

    pub fn center(&self) -> Position {
        self.center
    }

    pub fn is_shifted(&self) -> bool {
        self.shift
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn corners(&self) -> &[Field] {
        &self.corners
    }

    pub fn junctions(&self) -> &[Field] {
        &self.junctions
    }

    pub fn corner(&self, index: FieldId) -> &Field {
        &self.corners[usize::from(index.index())]
    }

    pub fn junction(&self, index: FieldId) -> &Field {
        &self.junctions[usize::from(index.index())]
    }

    pub fn field(&self, kind: FieldKind, index: FieldId) -> &Field {
        match kind {
            FieldKind::Corner => self.corner(index),
            FieldKind::Junction => self.junction(index),
        }
    }

    /// All stops in placement order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stop(&self, id: &StopId) -> Option<&Stop> {
        self.stop_index.get(id).map(|&index| &self.stops[index])
    }

    /// Stops of one ring, in placement order.
    pub fn stops_in(&self, ring: StopRing) -> impl Iterator<Item = &Stop> {
        self.stops.iter().filter(move |stop| stop.ring() == ring)
    }

    /// Leg stops of one branch.
    pub fn leg_stops(&self, side: LegSide) -> impl Iterator<Item = &Stop> {
        self.stops_in(StopRing::Leg(side))
    }

    /// Stops recorded under a legacy tag. Both branches of a leg share a tag.
    pub fn stops_by_alias(&self, alias: StopTag) -> impl Iterator<Item = &Stop> {
        self.stops.iter().filter(move |stop| stop.alias() == alias)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.point(id).is_some()
    }

    pub fn point(&self, id: &ElementId) -> Option<&Point> {
        match id {
            ElementId::Corner(index) => Some(self.corner(*index).point()),
            ElementId::Junction(index) => Some(self.junction(*index).point()),
            ElementId::Stop(stop) => self.stop(stop).map(Stop::point),
        }
    }

    /// Neighbours of a board element, sorted.
    pub fn adjacent(&self, id: &ElementId) -> Result<BTreeSet<ElementId>> {
        match id {
            ElementId::Corner(index) => Ok(adjacency::field_neighbours(FieldKind::Corner, *index)),
            ElementId::Junction(index) => {
                Ok(adjacency::field_neighbours(FieldKind::Junction, *index))
            }
            ElementId::Stop(stop) => self
                .stop(stop)
                .map(|stop| adjacency::stop_neighbours(self, stop))
                .ok_or_else(|| not_found(id)),
        }
    }

    /// Interpret a `[field, step, field]` path.
    ///
    /// Step 0 names a field: the first one, or the last one when the first is
    /// 0. Otherwise the path names the stop `step` positions away from the
    /// first field on the run between the two fields.
    pub fn locate_path(&self, path: [u8; 3]) -> Result<ElementId> {
        let [start, step, end] = path;
        if step == 0 {
            let number = if start == 0 { end } else { start };
            return legacy_field(number);
        }
        let from = legacy_field(start)?;
        let to = legacy_field(end)?;

        self.stops
            .iter()
            .find(|stop| stop.run().connects(from, to) && stop.run().step_from(from) == Some(step))
            .map(|stop| ElementId::Stop(stop.id()))
            .ok_or_else(|| {
                BoardError::NotFound(format!("stop {step} on the run from {from} to {to}"))
            })
    }

    /// The figure standing on `id`, if any.
    pub fn occupant(&self, id: &ElementId) -> Result<Option<Figure>> {
        self.ensure_contains(id)?;
        Ok(self.read_roster()?.occupant(id)?.cloned())
    }

    pub fn is_empty(&self, id: &ElementId) -> Result<bool> {
        self.occupant(id).map(|occupant| occupant.is_none())
    }

    /// Put a new figure on the board.
    pub fn add_figure(&self, figure: Figure) -> Result<FigureId> {
        let at = figure.position();
        self.ensure_contains(&at)?;

        let mut roster = self.write_roster()?;
        if roster.get(figure.id()).is_some() {
            return Err(BoardError::InvalidArgument(format!(
                "figure {} is already on the board",
                figure.id()
            )));
        }
        if let Some(occupant) = roster.occupant(&at)? {
            return Err(BoardError::Conflict {
                target: at,
                occupant: occupant.id(),
            });
        }

        let id = figure.id();
        debug!(figure = %id, kind = ?figure.kind(), at = %at, "figure placed");
        roster.insert(figure);
        Ok(id)
    }

    /// Move a figure onto an empty element.
    ///
    /// The occupancy check and the move happen under one write lock.
    pub fn move_figure(&self, figure: FigureId, target: &ElementId) -> Result<()> {
        self.ensure_contains(target)?;

        let mut roster = self.write_roster()?;
        if roster.get(figure).is_none() {
            return Err(BoardError::NotFound(format!("figure {figure}")));
        }
        if let Some(occupant) = roster.occupant(target)? {
            warn!(figure = %figure, target = %target, occupant = %occupant.id(), "move rejected");
            return Err(BoardError::Conflict {
                target: *target,
                occupant: occupant.id(),
            });
        }

        let entry = roster
            .get_mut(figure)
            .ok_or_else(|| BoardError::NotFound(format!("figure {figure}")))?;
        let from = entry.position();
        entry.relocate(*target);
        info!(figure = %figure, from = %from, to = %target, "figure moved");
        Ok(())
    }

    pub fn remove_figure(&self, figure: FigureId) -> Result<Figure> {
        self.write_roster()?
            .remove(figure)
            .ok_or_else(|| BoardError::NotFound(format!("figure {figure}")))
    }

    pub fn figure(&self, figure: FigureId) -> Result<Figure> {
        self.read_roster()?
            .get(figure)
            .cloned()
            .ok_or_else(|| BoardError::NotFound(format!("figure {figure}")))
    }

    /// A copy of every figure, grouped by kind.
    pub fn figures(&self) -> Result<Vec<Figure>> {
        Ok(self.read_roster()?.iter().cloned().collect())
    }

    pub fn figure_count(&self) -> Result<usize> {
        Ok(self.read_roster()?.len())
    }

    fn ensure_contains(&self, id: &ElementId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    fn read_roster(&self) -> Result<RwLockReadGuard<'_, Roster>> {
        self.roster.read().map_err(|_| poisoned())
    }

    fn write_roster(&self) -> Result<RwLockWriteGuard<'_, Roster>> {
        self.roster.write().map_err(|_| poisoned())
    }
}

fn check_fields(kind: FieldKind, fields: &[Field]) -> Result<()> {
    let indices: Vec<u8> = fields.iter().map(|field| field.index().index()).collect();
    let expected: Vec<u8> = (0..LEG_COUNT).collect();
    if indices != expected || fields.iter().any(|field| field.kind() != kind) {
        return Err(BoardError::InternalInconsistency(format!(
            "expected {LEG_COUNT} {} fields indexed 0..{LEG_COUNT}, found {indices:?}",
            kind.as_str()
        )));
    }
    Ok(())
}

fn legacy_field(number: u8) -> Result<ElementId> {
    ElementId::from_legacy(number)
        .ok_or_else(|| BoardError::NotFound(format!("field number {number}")))
}

fn not_found(id: &ElementId) -> BoardError {
    BoardError::NotFound(format!("{} {id}", id.category()))
}

fn poisoned() -> BoardError {
    BoardError::InternalInconsistency("figure roster lock poisoned".to_string())
}
