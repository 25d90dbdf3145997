//! Symmetry constants and the sizes derived from them.
//!
//! Every size is expressed relative to the stop unit `s = 1` and only turned
//! into absolute lengths for a concrete scale by [`resolve_sizes`].

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// Stops along one leg (corner to junction).
pub const LEGS: u8 = 6;
/// Stops along one arm (junction to junction, or corner to corner on the outer ring).
pub const ARMS: u8 = 3;
/// Angular unit in degrees separating stops along the outer ring.
pub const THETA: f64 = 18.0;
/// Fraction of the scale actually used, so the outer ring does not touch the canvas edge.
pub const MARGIN: f64 = 0.8;

/// Scale-independent constants of the pentagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymmetryConstants {
    pub legs: u8,
    pub arms: u8,
    pub theta: f64,
    /// Inner shape factor `p`.
    pub inner_factor: f64,
    pub golden: f64,
}

impl Default for SymmetryConstants {
    fn default() -> Self {
        let sqrt5 = 5f64.sqrt();
        Self {
            legs: LEGS,
            arms: ARMS,
            theta: THETA,
            inner_factor: ((25.0 - 11.0 * sqrt5) / (5.0 - sqrt5)).sqrt(),
            golden: (sqrt5 + 1.0) / 2.0,
        }
    }
}

/// Sizes relative to one stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeSizes {
    pub stop: f64,
    pub corner: f64,
    pub junction: f64,
    /// Pentagram diameter `r`.
    pub pentagram: f64,
    /// Entire board `R = r + c`.
    pub total: f64,
    /// Stroke width of the outer background circle.
    pub outer_stroke: f64,
    /// Radius of the junction ring.
    pub inner: f64,
    /// Radius of the corner ring.
    pub outer: f64,
}

impl Default for RelativeSizes {
    fn default() -> Self {
        Self::compute(&SymmetryConstants::default())
    }
}

impl RelativeSizes {
    pub fn compute(constants: &SymmetryConstants) -> Self {
        let sqrt5 = 5f64.sqrt();
        let stop = 1.0;
        let corner = sqrt5;
        let junction = (9.0 - 2.0 * sqrt5) / sqrt5;
        let pentagram = (2.0 / 5.0) * (1570.0 + 698.0 * sqrt5).sqrt();
        let total = pentagram + corner;
        let inner = ((f64::from(constants.arms) + junction) * (1.0 + corner))
            / (2.0 * (5.0 + corner)).sqrt();
        // scale / c + 3.5 line widths, expressed in units of scale / R
        let outer = total / corner + 0.35;

        Self {
            stop,
            corner,
            junction,
            pentagram,
            total,
            outer_stroke: (pentagram / total) * 0.2,
            inner,
            outer,
        }
    }
}

/// Absolute sizes for one scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeSet {
    /// Scale requested by the caller.
    pub scale: f64,
    /// Scale after the [`MARGIN`] has been applied.
    pub effective_scale: f64,
    pub constants: SymmetryConstants,
    pub relative: RelativeSizes,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub junction_radius: f64,
    pub corner_radius: f64,
    pub stop_radius: f64,
    pub line_width: f64,
    /// Diameter of the filled background disc.
    pub background_diameter: f64,
    pub stop_stroke: f64,
    pub field_stroke: f64,
}

impl SizeSet {
    fn unit(&self) -> f64 {
        self.effective_scale / self.relative.total
    }

    /// Absolute length of a size given in stop units.
    pub fn absolute(&self, relative: f64) -> f64 {
        self.unit() * relative
    }
}

/// Derive every absolute size for `scale`.
///
/// Fails with [`BoardError::InvalidArgument`] unless `scale` is finite and positive.
pub fn resolve_sizes(scale: f64) -> Result<SizeSet> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(BoardError::InvalidArgument(format!(
            "scale must be a finite positive number, got {scale}"
        )));
    }

    let constants = SymmetryConstants::default();
    let relative = RelativeSizes::compute(&constants);
    let effective_scale = scale * MARGIN;
    let unit = effective_scale / relative.total;
    let line_width = (0.1 / relative.total) * effective_scale;

    Ok(SizeSet {
        scale,
        effective_scale,
        constants,
        relative,
        outer_radius: unit * relative.outer,
        inner_radius: unit * relative.inner,
        junction_radius: unit * relative.junction,
        corner_radius: unit * relative.corner,
        stop_radius: unit * relative.stop,
        line_width,
        background_diameter: effective_scale + line_width * 5.0,
        stop_stroke: line_width * 0.5,
        field_stroke: line_width * 0.75,
    })
}
