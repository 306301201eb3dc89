//! One draggable subject card and its drag lifecycle.
//!
//! `Idle --start/update--> Dragging --end--> (settle) --> Idle`
//!
//! Settling snaps the placement when the shared toggle is on and writes the
//! result through the card's position sink.

use crate::canvas::grid::{CanvasPoint, GridSpec, CARD_HEIGHT};
use crate::canvas::{CanvasError, PositionSink, SnapToggle};
use crate::model::subject::{Position, Subject, SubjectId};
use log::{debug, warn};
use serde::Serialize;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragState {
    Idle,
    Dragging,
}

/// Pointer gesture events dispatched by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Start,
    Update { dx: f64, dy: f64 },
    End,
}

/// Render data for one card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub subject_id: SubjectId,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub schedule: String,
    pub left: f64,
    pub top: f64,
    pub width: u32,
    pub height: u32,
    pub state: DragState,
}

pub struct SubjectCard {
    subject: Subject,
    placement: CanvasPoint,
    state: DragState,
    grid: GridSpec,
    snap: SnapToggle,
    sink: Rc<dyn PositionSink>,
}

impl SubjectCard {
    /// Creates an idle card at the subject's stored position.
    pub fn new(
        subject: Subject,
        grid: GridSpec,
        snap: SnapToggle,
        sink: Rc<dyn PositionSink>,
    ) -> Self {
        let placement = CanvasPoint::from(subject.position);
        Self {
            subject,
            placement,
            state: DragState::Idle,
            grid,
            snap,
            sink,
        }
    }

    pub fn subject_id(&self) -> SubjectId {
        self.subject.id
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn placement(&self) -> CanvasPoint {
        self.placement
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn view(&self) -> CardView {
        CardView {
            subject_id: self.subject.id,
            name: self.subject.name.clone(),
            color: self.subject.color.clone(),
            icon: self.subject.icon.clone(),
            schedule: self.subject.schedule.clone(),
            left: self.placement.left,
            top: self.placement.top,
            width: self.grid.card_width,
            height: CARD_HEIGHT,
            state: self.state,
        }
    }

    /// Applies one gesture event and returns the placement to render.
    pub fn handle(&mut self, event: DragEvent) -> Result<CanvasPoint, CanvasError> {
        match event {
            DragEvent::Start => {
                self.state = DragState::Dragging;
                Ok(self.placement)
            }
            DragEvent::Update { dx, dy } => Ok(self.drag_update(dx, dy)),
            DragEvent::End => self.drag_end().map(|_| self.placement),
        }
    }

    /// Moves the card by a pointer delta. Hosts that skip the start event
    /// enter `Dragging` here. Non-finite deltas are dropped.
    pub fn drag_update(&mut self, dx: f64, dy: f64) -> CanvasPoint {
        self.state = DragState::Dragging;
        if !(dx.is_finite() && dy.is_finite()) {
            warn!(
                "event=card_drag module=canvas status=ignored subject_id={} reason=non_finite_delta",
                self.subject.id
            );
            return self.placement;
        }
        self.placement = self.placement.offset_clamped(dx, dy);
        self.placement
    }

    /// Settles the card and persists its position.
    ///
    /// Pointer-up always settles, even without a preceding update. On a sink
    /// failure the on-screen placement is kept and the card still returns to
    /// `Idle`.
    pub fn drag_end(&mut self) -> Result<Position, CanvasError> {
        self.state = DragState::Idle;
        if self.snap.is_enabled() {
            self.placement = self.grid.snap(self.placement);
        }

        let position = self.placement.to_position();
        self.subject.position = position;
        match self.sink.persist(self.subject.id, position) {
            Ok(()) => {
                debug!(
                    "event=card_settle module=canvas status=ok subject_id={} x={} y={} snapped={}",
                    self.subject.id,
                    position.x,
                    position.y,
                    self.snap.is_enabled()
                );
                Ok(position)
            }
            Err(source) => {
                warn!(
                    "event=card_settle module=canvas status=error subject_id={} error={}",
                    self.subject.id, source
                );
                Err(CanvasError::Persist {
                    subject_id: self.subject.id,
                    source,
                })
            }
        }
    }
}
