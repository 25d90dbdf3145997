//! Kinds of board elements and figures.

use serde::{Deserialize, Serialize};

/// The two kinds of primary fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Outer tip of the pentagram.
    Corner,
    /// Inner crossing of two pentagram lines.
    Junction,
}

impl FieldKind {
    /// Legacy field numbers start at 1 for junctions and 6 for corners.
    pub fn legacy_base(&self) -> u8 {
        match self {
            FieldKind::Junction => 1,
            FieldKind::Corner => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Corner => "corner",
            FieldKind::Junction => "junction",
        }
    }
}

/// Which branch of a corner a leg stop sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegSide {
    /// Branch at `+theta` from the direction towards the board center.
    Left,
    /// Branch at `-theta` from the direction towards the board center.
    Right,
}

impl LegSide {
    pub const ALL: [LegSide; 2] = [LegSide::Left, LegSide::Right];

    /// Sign applied to theta for this branch.
    pub fn sign(&self) -> f64 {
        match self {
            LegSide::Left => 1.0,
            LegSide::Right => -1.0,
        }
    }

    /// Short marker used in the string form of leg stop identifiers.
    pub fn marker(&self) -> &'static str {
        match self {
            LegSide::Left => "l",
            LegSide::Right => "r",
        }
    }
}

/// The ring a stop belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopRing {
    /// Stops on the outer circle between two corners.
    Outer,
    /// Stops on the inner pentagon between two junctions.
    Arm,
    /// Stops on a pentagram line between a corner and a junction.
    Leg(LegSide),
}

impl StopRing {
    /// Number of stops in one run of this ring.
    pub fn run_length(&self) -> u8 {
        match self {
            StopRing::Outer | StopRing::Arm => crate::sizes::ARMS,
            StopRing::Leg(_) => crate::sizes::LEGS,
        }
    }

    pub fn is_leg(&self) -> bool {
        matches!(self, StopRing::Leg(_))
    }
}

/// Figures that can stand on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum FigureKind {
    #[default]
    Player,
    BlackStopper,
    GrayStopper,
}

impl FigureKind {
    /// Color used when no explicit color is supplied.
    pub fn default_color(&self) -> &'static str {
        match self {
            FigureKind::Player => "white",
            FigureKind::BlackStopper => "black",
            FigureKind::GrayStopper => "gray",
        }
    }
}
