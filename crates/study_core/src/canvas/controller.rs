//! Canvas assembly and event routing.
//!
//! # Invariants
//! - Cards are ordered by subject id ascending.
//! - The first card keeps the origin; every later card found at the origin
//!   is moved to its fallback grid slot and persisted during `build`. The
//!   first-card exemption mirrors long-standing desk behavior and looks like
//!   an off-by-one; it is kept so existing desks do not reshuffle.

use crate::canvas::card::{CardView, DragEvent, SubjectCard};
use crate::canvas::grid::{CanvasPoint, GridSpec};
use crate::canvas::{CanvasError, PositionSink, SnapToggle};
use crate::model::subject::{Subject, SubjectId};
use log::info;
use std::rc::Rc;

pub struct CanvasController {
    cards: Vec<SubjectCard>,
    snap: SnapToggle,
    grid: GridSpec,
}

impl CanvasController {
    /// Builds one card per subject, applying and persisting the fallback
    /// layout first.
    pub fn build(
        mut subjects: Vec<Subject>,
        grid: GridSpec,
        snap: SnapToggle,
        sink: Rc<dyn PositionSink>,
    ) -> Result<Self, CanvasError> {
        let arranged = apply_fallback_layout(&mut subjects, &grid);
        for id in &arranged {
            if let Some(subject) = subjects.iter().find(|subject| subject.id == *id) {
                sink.persist(subject.id, subject.position)
                    .map_err(|source| CanvasError::Persist {
                        subject_id: subject.id,
                        source,
                    })?;
            }
        }

        info!(
            "event=canvas_build module=canvas status=ok cards={} auto_arranged={}",
            subjects.len(),
            arranged.len()
        );

        let cards = subjects
            .into_iter()
            .map(|subject| SubjectCard::new(subject, grid, snap.clone(), Rc::clone(&sink)))
            .collect();
        Ok(Self { cards, snap, grid })
    }

    pub fn cards(&self) -> &[SubjectCard] {
        &self.cards
    }

    pub fn card(&self, subject_id: SubjectId) -> Option<&SubjectCard> {
        self.cards
            .iter()
            .find(|card| card.subject_id() == subject_id)
    }

    pub fn views(&self) -> Vec<CardView> {
        self.cards.iter().map(SubjectCard::view).collect()
    }

    pub fn snap_toggle(&self) -> &SnapToggle {
        &self.snap
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    /// Routes a gesture event to the card for `subject_id`.
    pub fn handle(
        &mut self,
        subject_id: SubjectId,
        event: DragEvent,
    ) -> Result<CanvasPoint, CanvasError> {
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.subject_id() == subject_id)
            .ok_or(CanvasError::UnknownCard(subject_id))?;
        card.handle(event)
    }
}

/// Sorts `subjects` by id and moves every unplaced subject except the first
/// to its fallback slot. Returns the ids that moved.
pub fn apply_fallback_layout(subjects: &mut [Subject], grid: &GridSpec) -> Vec<SubjectId> {
    subjects.sort_by_key(|subject| subject.id);

    let mut arranged = Vec::new();
    for (index, subject) in subjects.iter_mut().enumerate() {
        if index == 0 || !subject.position.is_origin() {
            continue;
        }
        subject.position = grid.fallback_position(index);
        arranged.push(subject.id);
    }
    arranged
}
