//! Figure definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ElementId;
use crate::kinds::FigureKind;

/// Unique identifier for figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FigureId(pub Uuid);

impl FigureId {
    /// Create a new random figure ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for FigureId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FigureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A piece standing on the board.
///
/// The position is only changed by the board that owns the figure, see
/// [`Board::move_figure`](crate::board::Board::move_figure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    id: FigureId,
    kind: FigureKind,
    color: String,
    position: ElementId,
}

impl Figure {
    /// Create a figure standing on `position`, with the kind's default color.
    pub fn new(kind: FigureKind, position: ElementId) -> Self {
        Self {
            id: FigureId::new(),
            kind,
            color: kind.default_color().to_string(),
            position,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_id(mut self, id: FigureId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> FigureId {
        self.id
    }

    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn position(&self) -> ElementId {
        self.position
    }

    pub fn is_at(&self, id: &ElementId) -> bool {
        self.position == *id
    }

    pub(crate) fn relocate(&mut self, to: ElementId) {
        self.position = to;
    }
}
