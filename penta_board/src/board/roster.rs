//! Figures standing on a board, grouped by kind.

use std::collections::BTreeMap;

use crate::elements::{ElementId, Figure, FigureId};
use crate::error::{BoardError, Result};
use crate::kinds::FigureKind;

#[derive(Debug, Default)]
pub(crate) struct Roster {
    collections: BTreeMap<FigureKind, Vec<Figure>>,
}

impl Roster {
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Figure> {
        self.collections.values().flatten()
    }

    /// The figure standing on `at`. More than one match is an error.
    pub(crate) fn occupant(&self, at: &ElementId) -> Result<Option<&Figure>> {
        let mut matches = self.iter().filter(|figure| figure.is_at(at));
        match (matches.next(), matches.next()) {
            (Some(first), Some(second)) => Err(BoardError::InternalInconsistency(format!(
                "{at} is occupied by both {} and {}",
                first.id(),
                second.id()
            ))),
            (first, _) => Ok(first),
        }
    }

    pub(crate) fn get(&self, id: FigureId) -> Option<&Figure> {
        self.iter().find(|figure| figure.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: FigureId) -> Option<&mut Figure> {
        self.collections
            .values_mut()
            .flatten()
            .find(|figure| figure.id() == id)
    }

    pub(crate) fn insert(&mut self, figure: Figure) {
        self.collections.entry(figure.kind()).or_default().push(figure);
    }

    pub(crate) fn remove(&mut self, id: FigureId) -> Option<Figure> {
        for figures in self.collections.values_mut() {
            if let Some(index) = figures.iter().position(|figure| figure.id() == id) {
                return Some(figures.remove(index));
            }
        }
        None
    }

    pub(crate) fn len(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }
}
