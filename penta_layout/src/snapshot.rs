//! Import of remote game state.
//!
//! A snapshot arrives as JSON shaped like
//! `{"figures": [{"position": [a, b, c], ...}], ...}`. Each position is a path
//! `[field, step, field]` using legacy field numbers, see
//! [`Board::locate_path`]. Paths may arrive with their ends swapped and are
//! normalized before they are interpreted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

use penta_board::{Board, Figure, FigureId, FigureKind};

use crate::error::Result;

/// Remote game state as delivered by a server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(default)]
    pub figures: Vec<FigureRecord>,
    /// Every other top-level key, kept as is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One figure of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureRecord {
    pub position: [u8; 3],
    #[serde(default)]
    pub kind: FigureKind,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub id: Option<Uuid>,
}

impl GameSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FigureRecord {
    /// Position with the lower field number first.
    pub fn normalized_position(&self) -> [u8; 3] {
        normalize_position(self.position)
    }

    fn to_figure(&self, board: &Board) -> Result<Figure> {
        let at = board.locate_path(self.normalized_position())?;
        let mut figure = Figure::new(self.kind, at);
        if let Some(color) = &self.color {
            figure = figure.with_color(color.clone());
        }
        if let Some(id) = self.id {
            figure = figure.with_id(FigureId::from_uuid(id));
        }
        Ok(figure)
    }
}

/// Swap the two ends of a path when the first is larger than the last.
pub fn normalize_position(position: [u8; 3]) -> [u8; 3] {
    let [start, step, end] = position;
    if start > end {
        debug!(?position, "reordering path");
        [end, step, start]
    } else {
        position
    }
}

/// Place every figure of `snapshot` onto `board`.
///
/// All paths are resolved before anything is placed. If a figure cannot be
/// placed, the figures placed before it are taken off again, so a failed
/// import leaves the board as it was.
pub fn apply_snapshot(board: &Board, snapshot: &GameSnapshot) -> Result<Vec<FigureId>> {
    let figures = snapshot
        .figures
        .iter()
        .map(|record| record.to_figure(board))
        .collect::<Result<Vec<_>>>()?;

    let mut placed = Vec::with_capacity(figures.len());
    for figure in figures {
        match board.add_figure(figure) {
            Ok(id) => placed.push(id),
            Err(err) => {
                debug!(rolled_back = placed.len(), error = %err, "snapshot rejected");
                for id in placed {
                    board.remove_figure(id)?;
                }
                return Err(err.into());
            }
        }
    }
    debug!(figures = placed.len(), "snapshot applied");
    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build, BuildOptions};
    use crate::error::LayoutError;
    use penta_board::{BoardError, ElementId};

    fn id(input: &str) -> ElementId {
        input.parse().unwrap()
    }

    #[test]
    fn test_normalize_position() {
        assert_eq!(normalize_position([9, 2, 3]), [3, 2, 9]);
        assert_eq!(normalize_position([3, 2, 9]), [3, 2, 9]);
        assert_eq!(normalize_position([7, 0, 0]), [0, 0, 7]);
    }

    #[test]
    fn test_parse_snapshot_keeps_extra_keys() {
        let snapshot = GameSnapshot::from_json(
            r#"{"figures": [{"position": [6, 1, 10], "kind": "gray_stopper"}], "turn": 4}"#,
        )
        .unwrap();
        assert_eq!(snapshot.figures.len(), 1);
        assert_eq!(snapshot.figures[0].kind, FigureKind::GrayStopper);
        assert_eq!(snapshot.extra["turn"], serde_json::json!(4));
    }

    #[test]
    fn test_malformed_snapshot() {
        let err = GameSnapshot::from_json(r#"{"figures": [{"position": [1, 2]}]}"#).unwrap_err();
        assert!(matches!(err, LayoutError::Snapshot(_)));
    }

    #[test]
    fn test_apply_snapshot() {
        let board = build(1000.0, &BuildOptions::default()).unwrap();
        let snapshot = GameSnapshot::from_json(
            r#"{"figures": [
                {"position": [10, 1, 6], "color": "red"},
                {"position": [8, 0, 0], "kind": "black_stopper"},
                {"position": [4, 1, 6]}
            ]}"#,
        )
        .unwrap();

        let placed = apply_snapshot(&board, &snapshot).unwrap();
        assert_eq!(placed.len(), 3);

        // [10, 1, 6] is reordered to [6, 1, 10]: first stop after corner 0
        let first = board.figure(placed[0]).unwrap();
        assert_eq!(first.position(), id("s-0-1"));
        assert_eq!(first.color(), "red");

        // [8, 0, 0] becomes [0, 0, 8], still corner 2
        assert_eq!(board.figure(placed[1]).unwrap().position(), id("c-2"));
        assert_eq!(board.figure(placed[2]).unwrap().position(), id("s-l-6-6-4"));
    }

    #[test]
    fn test_apply_snapshot_with_ids() {
        let board = build(1000.0, &BuildOptions::default()).unwrap();
        let uuid = Uuid::new_v4();
        let snapshot = GameSnapshot {
            figures: vec![FigureRecord {
                position: [7, 0, 7],
                kind: FigureKind::Player,
                color: None,
                id: Some(uuid),
            }],
            extra: BTreeMap::new(),
        };
        let placed = apply_snapshot(&board, &snapshot).unwrap();
        assert_eq!(placed, vec![FigureId::from_uuid(uuid)]);
        assert_eq!(board.occupant(&id("c-1")).unwrap().unwrap().color(), "white");
    }

    #[test]
    fn test_unknown_path_fails() {
        let board = build(1000.0, &BuildOptions::default()).unwrap();
        let snapshot = GameSnapshot::from_json(r#"{"figures": [{"position": [6, 2, 8]}]}"#).unwrap();
        assert!(matches!(
            apply_snapshot(&board, &snapshot),
            Err(LayoutError::Board(BoardError::NotFound(_)))
        ));
    }

    #[test]
    fn test_failed_import_leaves_board_untouched() {
        let board = build(1000.0, &BuildOptions::default()).unwrap();
        let bad_path = GameSnapshot::from_json(
            r#"{"figures": [{"position": [6, 0, 0]}, {"position": [6, 9, 8]}]}"#,
        )
        .unwrap();
        assert!(apply_snapshot(&board, &bad_path).is_err());
        assert_eq!(board.figure_count().unwrap(), 0);

        let stacked = GameSnapshot::from_json(
            r#"{"figures": [{"position": [7, 0, 0]}, {"position": [6, 1, 10]}, {"position": [7, 0, 0]}]}"#,
        )
        .unwrap();
        assert!(matches!(
            apply_snapshot(&board, &stacked),
            Err(LayoutError::Board(BoardError::Conflict { .. }))
        ));
        assert_eq!(board.figure_count().unwrap(), 0);

        // the same board still takes a valid snapshot afterwards
        let fixed = GameSnapshot::from_json(
            r#"{"figures": [{"position": [6, 0, 0]}, {"position": [6, 1, 10]}]}"#,
        )
        .unwrap();
        assert_eq!(apply_snapshot(&board, &fixed).unwrap().len(), 2);
        assert_eq!(board.figure_count().unwrap(), 2);
    }

    #[test]
    fn test_stacked_snapshot_conflicts() {
        let board = build(1000.0, &BuildOptions::default()).unwrap();
        let snapshot = GameSnapshot::from_json(
            r#"{"figures": [{"position": [6, 0, 6]}, {"position": [6, 0, 6]}]}"#,
        )
        .unwrap();
        assert!(matches!(
            apply_snapshot(&board, &snapshot),
            Err(LayoutError::Board(BoardError::Conflict { .. }))
        ));
    }
}
