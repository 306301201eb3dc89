//! Subject card canvas: placement, drag handling and position write-back.
//!
//! # Responsibility
//! - Turn stored subjects into draggable cards with an initial layout.
//! - Convert pointer drag deltas into card positions and persist them on
//!   release.
//!
//! # Invariants
//! - Card positions never go below zero on either axis.
//! - Positions are persisted only on drag end (and for the initial fallback
//!   layout), never during a drag.
//! - All state lives on the UI thread; nothing here is `Send`.

use crate::model::subject::{Position, SubjectId};
use crate::repo::{RepoError, RepoResult};
use std::cell::Cell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub mod card;
pub mod controller;
pub mod grid;

/// Write-back capability handed to every card.
pub trait PositionSink {
    fn persist(&self, subject_id: SubjectId, position: Position) -> RepoResult<()>;
}

/// Shared "snap to grid" switch read by every card when a drag ends.
#[derive(Debug, Clone)]
pub struct SnapToggle(Rc<Cell<bool>>);

impl SnapToggle {
    pub fn new(enabled: bool) -> Self {
        Self(Rc::new(Cell::new(enabled)))
    }

    pub fn is_enabled(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, enabled: bool) {
        self.0.set(enabled);
    }
}

impl Default for SnapToggle {
    fn default() -> Self {
        Self::new(true)
    }
}

#[derive(Debug)]
pub enum CanvasError {
    UnknownCard(SubjectId),
    Persist {
        subject_id: SubjectId,
        source: RepoError,
    },
}

impl Display for CanvasError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCard(id) => write!(f, "no card for subject {id}"),
            Self::Persist { subject_id, source } => {
                write!(f, "failed to persist position of subject {subject_id}: {source}")
            }
        }
    }
}

impl Error for CanvasError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownCard(_) => None,
            Self::Persist { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SnapToggle;

    #[test]
    fn snap_toggle_clones_share_state() {
        let toggle = SnapToggle::default();
        let seen_by_card = toggle.clone();
        assert!(seen_by_card.is_enabled());

        toggle.set(false);
        assert!(!seen_by_card.is_enabled());
    }
}
