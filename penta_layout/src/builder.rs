//! Places every board element for one scale.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use penta_board::{
    arm_stop, leg_stop, outer_stop, place, resolve_sizes, Board, BoardParts, ElementId, Field,
    FieldId, FieldKind, LegSide, Palette, Point, Position, Result, SizeSet, Stop, StopPlan,
    StopRing, ARMS, LEGS, LEG_COUNT, THETA,
};

/// Degrees between two neighbouring corners.
const CORNER_STEP: f64 = -72.0;

/// Options for [`build`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Colors to use instead of the default palette.
    #[serde(default)]
    pub palette: Option<Palette>,
    /// Rotate the whole board by half a theta unit.
    #[serde(default)]
    pub shift: bool,
}

impl BuildOptions {
    pub fn shifted() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }
}

/// Build a board for `scale`.
///
/// Fails with `InvalidArgument` for a scale that is not a finite positive
/// number; no partial board is ever returned.
pub fn build(scale: f64, options: &BuildOptions) -> Result<Board> {
    let sizes = resolve_sizes(scale)?;
    let mut builder = BoardBuilder::new(
        sizes,
        Position::new(scale * 0.5, scale * 0.5),
        options.shift,
        options.palette.clone().unwrap_or_default(),
    );

    // Legs are placed from the last to the first.
    for leg in (0..LEG_COUNT).rev() {
        builder.place_leg(FieldId::new(leg)?)?;
    }

    let board = builder.finish()?;
    info!(
        scale,
        shift = options.shift,
        stops = board.stops().len(),
        "board built"
    );
    Ok(board)
}

struct BoardBuilder {
    sizes: SizeSet,
    center: Position,
    shift: bool,
    palette: Palette,
    corners: Vec<Field>,
    junctions: Vec<Field>,
    stops: Vec<Stop>,
}

impl BoardBuilder {
    fn new(sizes: SizeSet, center: Position, shift: bool, palette: Palette) -> Self {
        Self {
            sizes,
            center,
            shift,
            palette,
            corners: Vec::with_capacity(usize::from(LEG_COUNT)),
            junctions: Vec::with_capacity(usize::from(LEG_COUNT)),
            stops: Vec::new(),
        }
    }

    fn place_leg(&mut self, leg: FieldId) -> Result<()> {
        let sizes = self.sizes;
        let i = leg.index();

        let corner_angle = f64::from(i) * CORNER_STEP;
        let corner_at = place(self.center, sizes.outer_radius, corner_angle, self.shift);
        let junction_angle = corner_angle + 180.0;
        let junction_at = place(self.center, sizes.inner_radius, junction_angle, self.shift);

        // stops go in before the fields so renderers draw fields on top
        for x in 1..=ARMS {
            let angle = corner_angle + THETA * f64::from(x);
            let at = place(self.center, sizes.outer_radius, angle, self.shift);
            self.push_stop(outer_stop(leg, x)?, at, angle);

            let angle = junction_angle - THETA * 7.0;
            let radius = sizes.stop_radius * f64::from(x) + sizes.junction_radius / 4.0;
            let at = place(junction_at, radius, angle, self.shift);
            self.push_stop(arm_stop(leg, x)?, at, angle);
        }

        for x in (1..=LEGS).rev() {
            let radius = sizes.stop_radius * f64::from(x)
                + sizes.corner_radius / 4.0
                + sizes.line_width * 1.5;
            for side in LegSide::ALL {
                let angle = side.sign() * THETA + 180.0 + corner_angle;
                let at = place(corner_at, radius, angle, self.shift);
                self.push_stop(leg_stop(leg, side, x)?, at, angle);
            }
        }
        debug!(leg = i, stops = self.stops.len(), "leg placed");

        let color = self.palette.field_color(i).to_string();
        self.corners.push(Field::new(
            FieldKind::Corner,
            leg,
            field_point(FieldKind::Corner, leg, corner_at, corner_angle),
            color.clone(),
        ));
        self.junctions.push(Field::new(
            FieldKind::Junction,
            leg,
            field_point(FieldKind::Junction, leg, junction_at, junction_angle),
            color,
        ));
        Ok(())
    }

    fn push_stop(&mut self, plan: StopPlan, at: Position, angle: f64) {
        let ring = match plan.id.ring() {
            StopRing::Outer => "outer",
            StopRing::Arm => "arm",
            StopRing::Leg(_) => "leg",
        };
        let point = Point::new(plan.id.into(), at, angle)
            .with_extra("ring", ring)
            .with_extra("alias", plan.alias.to_string());
        self.stops
            .push(Stop::new(plan.id, point, plan.alias, plan.run));
    }

    fn finish(self) -> Result<Board> {
        Board::from_parts(BoardParts {
            sizes: self.sizes,
            center: self.center,
            shift: self.shift,
            palette: self.palette,
            corners: self.corners,
            junctions: self.junctions,
            stops: self.stops,
        })
    }
}

fn field_point(kind: FieldKind, index: FieldId, at: Position, angle: f64) -> Point {
    let id = ElementId::field(kind, index);
    let mut point = Point::new(id, at, angle).with_extra("leg", index.index());
    if let Some(number) = id.legacy_number() {
        point = point.with_extra("legacy", number);
    }
    point
}
