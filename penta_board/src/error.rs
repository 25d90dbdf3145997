//! Error type shared by every board operation.

use crate::elements::{ElementId, FigureId};

/// Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur while building or querying a board.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    /// A scale, index or option is outside its valid domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot parse identifier {input:?}: {reason}")]
    Parse { input: String, reason: String },

    /// A renderer tag that both branches of a leg share.
    #[error("identifier {input:?} matches {} stops", .candidates.len())]
    Ambiguous {
        input: String,
        candidates: Vec<ElementId>,
    },

    /// The element or figure does not exist on this board.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("{target} is already occupied by figure {occupant}")]
    Conflict {
        target: ElementId,
        occupant: FigureId,
    },

    /// The board broke one of its own invariants.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),
}

impl BoardError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        BoardError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
