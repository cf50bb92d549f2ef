//! Drag gesture state machine.
//!
//! The machine only does pixel math. It hands back what the control should
//! display or commit and never touches the committed times itself.

use crate::geometry::{TrackGeometry, time_for_offset};

/// Half-width of the band around the knob center that captures a press.
pub const DEFAULT_DRAG_CAPTURE_DELTA: f64 = 22.0;

/// Anchor of one gesture, recorded when the press is captured.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragSession {
    pub initial_pointer_x: f64,
    /// Elapsed-region width at the moment of the press.
    pub initial_elapsed_offset: f64,
}

impl DragSession {
    /// Elapsed offset under `pointer_x`, kept inside the usable range.
    fn adjusted_offset(&self, pointer_x: f64, available_width: f64) -> f64 {
        let offset = self.initial_elapsed_offset + (pointer_x - self.initial_pointer_x);
        offset.min(available_width).max(0.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Press captured, pointer has not moved yet.
    Pressed(DragSession),
    /// Pointer is moving the knob.
    Dragging(DragSession),
}

/// How a gesture that reached `end_tracking` resolves.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DragRelease {
    /// Pointer lifted normally; commit this time.
    Commit(f64),
    /// Gesture was cancelled; restore the committed display.
    Revert,
}

#[derive(Debug, Clone)]
pub struct DragStateMachine {
    state: DragState,
    capture_delta: f64,
}

impl Default for DragStateMachine {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_CAPTURE_DELTA)
    }
}

impl DragStateMachine {
    pub fn new(capture_delta: f64) -> Self {
        Self {
            state: DragState::Idle,
            capture_delta,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// True once the pointer has moved after a captured press.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// True while any gesture is captured, moved or not.
    pub fn is_tracking(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    pub fn capture_delta(&self) -> f64 {
        self.capture_delta
    }

    pub fn set_capture_delta(&mut self, capture_delta: f64) {
        self.capture_delta = capture_delta;
    }

    /// Try to capture a press at `pointer_x`.
    ///
    /// The press is captured only strictly inside the band of
    /// `capture_delta` pixels either side of the knob center.
    pub fn begin_tracking(
        &mut self,
        pointer_x: f64,
        geometry: &TrackGeometry,
        elapsed_offset: f64,
    ) -> bool {
        let center = geometry.knob_center_x(elapsed_offset);
        let captured = pointer_x > center - self.capture_delta
            && pointer_x < center + self.capture_delta;

        if captured {
            tracing::debug!(pointer_x, center, "drag captured");
            self.state = DragState::Pressed(DragSession {
                initial_pointer_x: pointer_x,
                initial_elapsed_offset: elapsed_offset,
            });
        } else {
            tracing::debug!(pointer_x, center, "press outside capture band");
        }
        captured
    }

    /// Follow the pointer. Returns the time to preview, or `None` when no
    /// gesture is captured.
    pub fn continue_tracking(
        &mut self,
        pointer_x: f64,
        available_width: f64,
        total_time: f64,
    ) -> Option<f64> {
        let session = match self.state {
            DragState::Idle => return None,
            DragState::Pressed(session) | DragState::Dragging(session) => session,
        };
        self.state = DragState::Dragging(session);

        let offset = session.adjusted_offset(pointer_x, available_width);
        let time = time_for_offset(offset, total_time, available_width);
        tracing::trace!(pointer_x, offset, time, "drag moved");
        Some(time)
    }

    /// Finish the gesture. `None` pointer means the system cancelled it.
    ///
    /// Returns `None` when there was no captured gesture to end.
    pub fn end_tracking(
        &mut self,
        pointer_x: Option<f64>,
        available_width: f64,
        total_time: f64,
    ) -> Option<DragRelease> {
        let session = match std::mem::take(&mut self.state) {
            DragState::Idle => return None,
            DragState::Pressed(session) | DragState::Dragging(session) => session,
        };

        let release = match pointer_x {
            Some(x) => {
                let offset = session.adjusted_offset(x, available_width);
                DragRelease::Commit(time_for_offset(offset, total_time, available_width))
            }
            None => DragRelease::Revert,
        };
        tracing::debug!(?release, "drag ended");
        Some(release)
    }

    /// Drop any captured gesture. Returns `true` if one was active.
    pub fn cancel_tracking(&mut self) -> bool {
        let was_tracking = self.is_tracking();
        if was_tracking {
            tracing::debug!("drag cancelled");
        }
        self.state = DragState::Idle;
        was_tracking
    }
}
