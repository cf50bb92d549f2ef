//! `SliderControl`: committed state, display updates and the event surface.

use std::sync::mpsc::Sender;

use crate::format::{DEFAULT_FALLBACK, format_time, format_time_with};
use crate::geometry::{clamp_time, normalized};
use crate::style::{Color, LabelFont, SliderStyle, StyleAttribute};

use super::binder::{PointerTracking, SliderEvent, ViewBinder};
use super::drag::{DragRelease, DragStateMachine};

/// Snapshot of the control's state.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SliderState {
    /// Last committed position. `None` means not yet known.
    pub current_time: Option<f64>,
    /// Media length. `None` means not yet loaded and counts as zero.
    pub total_time: Option<f64>,
    /// Whether a knob drag currently owns the display.
    pub dragging_in_progress: bool,
}

/// Scrubber showing elapsed and remaining time either side of a knob.
///
/// All mutation goes through explicit setters that clamp and redisplay
/// synchronously. While a drag is in progress the finger owns the display:
/// `set_current_time` still stores the new value, but it is only shown once
/// the gesture ends. A committed drag supersedes it; a cancelled drag
/// reveals it.
pub struct SliderControl<B: ViewBinder> {
    binder: B,
    current_time: Option<f64>,
    total_time: Option<f64>,
    drag: DragStateMachine,
    style: SliderStyle,
    /// Elapsed-region width last written to the binder.
    elapsed_offset: f64,
    events: Option<Sender<SliderEvent>>,
}

impl<B: ViewBinder> SliderControl<B> {
    /// Create a control with the default style and capture band.
    pub fn new(binder: B) -> Self {
        Self::with_style(binder, SliderStyle::default(), super::DEFAULT_DRAG_CAPTURE_DELTA)
    }

    /// Create a control, apply `style` and render the empty state.
    pub fn with_style(binder: B, style: SliderStyle, drag_capture_delta: f64) -> Self {
        let mut control = Self {
            binder,
            current_time: None,
            total_time: None,
            drag: DragStateMachine::new(drag_capture_delta),
            style: SliderStyle::default(),
            elapsed_offset: 0.0,
            events: None,
        };
        control.apply_style(style);
        control.refresh();
        control
    }

    /// Route `Pressed`/`ValueChanged`/`Released` notifications to `tx`.
    pub fn set_event_sender(&mut self, tx: Sender<SliderEvent>) {
        self.events = Some(tx);
    }

    pub fn binder(&self) -> &B {
        &self.binder
    }

    pub fn binder_mut(&mut self) -> &mut B {
        &mut self.binder
    }

    pub fn current_time(&self) -> Option<f64> {
        self.current_time
    }

    pub fn total_time(&self) -> Option<f64> {
        self.total_time
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn state(&self) -> SliderState {
        SliderState {
            current_time: self.current_time,
            total_time: self.total_time,
            dragging_in_progress: self.drag.is_dragging(),
        }
    }

    /// Set the media length and redisplay the committed position against it.
    ///
    /// Negative lengths are treated as zero and non-finite ones as unknown.
    /// This redisplays even mid-drag; the next pointer move shows the
    /// finger's position again.
    pub fn set_total_time(&mut self, total_time: Option<f64>) {
        self.total_time = total_time.filter(|t| t.is_finite()).map(|t| t.max(0.0));
        self.refresh();
    }

    /// Set the committed position.
    ///
    /// Shown clamped to `[0, total_time]` right away unless a drag owns the
    /// display, in which case it is stored and shown when the drag ends.
    pub fn set_current_time(&mut self, current_time: Option<f64>) {
        self.current_time = current_time;
        if self.drag.is_dragging() {
            tracing::debug!(?current_time, "position stored while dragging");
            return;
        }
        self.refresh();
    }

    /// Committed position clamped to the track, as displayed.
    pub fn displayed_current_time(&self) -> f64 {
        clamp_time(self.current_time.unwrap_or(0.0), self.total())
    }

    /// Redisplay the committed state, e.g. after the host re-rendered.
    pub fn refresh(&mut self) {
        let total = self.total();
        self.redisplay(self.displayed_current_time(), total);
    }

    /// Write `time` of `total` to the binder: elapsed width and both labels.
    ///
    /// This is the display path only; it never changes committed state.
    pub fn redisplay(&mut self, time: f64, total: f64) {
        let available_width = self.binder.geometry().available_width();
        self.elapsed_offset = normalized(time, total) * available_width;

        self.binder.set_elapsed_width(self.elapsed_offset);
        self.binder.set_elapsed_text(&format_time(time));
        self.binder
            .set_remaining_text(&format_time_with(total - time, "-", DEFAULT_FALLBACK));
    }

    /// Layout changed (resize, rotation, first pass).
    ///
    /// A captured gesture is cancelled first since its pixel anchor no
    /// longer matches the track.
    pub fn geometry_changed(&mut self) {
        tracing::debug!(geometry = ?self.binder.geometry(), "geometry changed");
        if self.drag.is_tracking() {
            self.cancel_tracking();
        } else {
            self.refresh();
        }
    }

    /// Abort any captured gesture and show the committed state again.
    ///
    /// `Released` is still sent for a captured gesture; `ValueChanged` never is.
    pub fn cancel_tracking(&mut self) {
        if self.drag.cancel_tracking() {
            self.emit(SliderEvent::Released);
        }
        self.refresh();
    }

    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    /// Apply every option of `style`.
    pub fn apply_style(&mut self, style: SliderStyle) {
        for attribute in style.attributes() {
            self.binder.apply_style(&attribute);
        }
        self.style = style;
    }

    pub fn set_elapsed_region_color(&mut self, color: Color) {
        self.style.elapsed_region_color = color;
        self.binder
            .apply_style(&StyleAttribute::ElapsedRegionColor(color));
    }

    pub fn set_knob_color(&mut self, color: Color) {
        self.style.knob_color = color;
        self.binder.apply_style(&StyleAttribute::KnobColor(color));
    }

    pub fn set_elapsed_text_color(&mut self, color: Color) {
        self.style.elapsed_text_color = color;
        self.binder
            .apply_style(&StyleAttribute::ElapsedTextColor(color));
    }

    pub fn set_remaining_text_color(&mut self, color: Color) {
        self.style.remaining_text_color = color;
        self.binder
            .apply_style(&StyleAttribute::RemainingTextColor(color));
    }

    pub fn set_top_separator_color(&mut self, color: Color) {
        self.style.top_separator_color = color;
        self.binder
            .apply_style(&StyleAttribute::TopSeparatorColor(color));
    }

    pub fn set_bottom_separator_color(&mut self, color: Color) {
        self.style.bottom_separator_color = color;
        self.binder
            .apply_style(&StyleAttribute::BottomSeparatorColor(color));
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.style.background_color = color;
        self.binder
            .apply_style(&StyleAttribute::BackgroundColor(color));
    }

    pub fn set_label_font(&mut self, font: LabelFont) {
        self.binder
            .apply_style(&StyleAttribute::LabelFont(font.clone()));
        self.style.label_font = font;
    }

    pub fn drag_capture_delta(&self) -> f64 {
        self.drag.capture_delta()
    }

    pub fn set_drag_capture_delta(&mut self, delta: f64) {
        self.drag.set_capture_delta(delta);
    }

    fn total(&self) -> f64 {
        self.total_time.unwrap_or(0.0)
    }

    /// Store a drag result as the committed position and notify the host.
    fn commit(&mut self, time: f64) {
        tracing::debug!(time, "seek committed");
        self.set_current_time(Some(time));
        self.emit(SliderEvent::ValueChanged);
    }

    fn emit(&self, event: SliderEvent) {
        if let Some(tx) = &self.events {
            // A host that dropped its receiver simply stops listening.
            let _ = tx.send(event);
        }
    }
}

impl<B: ViewBinder> PointerTracking for SliderControl<B> {
    fn on_press_start(&mut self, x: f64) -> bool {
        // A press while a gesture is still open means its release was lost.
        if self.drag.is_tracking() {
            self.cancel_tracking();
        }
        let geometry = self.binder.geometry();
        let captured = self.drag.begin_tracking(x, &geometry, self.elapsed_offset);
        if captured {
            self.emit(SliderEvent::Pressed);
        }
        captured
    }

    fn on_press_move(&mut self, x: f64) -> bool {
        let available_width = self.binder.geometry().available_width();
        let total = self.total();
        match self.drag.continue_tracking(x, available_width, total) {
            Some(time) => {
                self.redisplay(time, total);
                true
            }
            None => false,
        }
    }

    fn on_press_end(&mut self, x: Option<f64>) {
        let available_width = self.binder.geometry().available_width();
        let total = self.total();
        let Some(release) = self.drag.end_tracking(x, available_width, total) else {
            return;
        };

        match release {
            DragRelease::Commit(time) => self.commit(time),
            DragRelease::Revert => self.refresh(),
        }
        self.emit(SliderEvent::Released);
    }
}
