//! Host-facing seams of the slider.

use crate::geometry::TrackGeometry;
use crate::style::StyleAttribute;

/// Rendering side of the control, supplied by the host.
///
/// The core reads widths from it on every pass and pushes display values
/// back; it never assumes a particular rendering technology.
pub trait ViewBinder {
    /// Current widths of the control and its fixed parts.
    fn geometry(&self) -> TrackGeometry;

    /// Width in pixels of the elapsed region (the knob sits at its right edge).
    fn set_elapsed_width(&mut self, width: f64);

    /// Text of the left (elapsed) label.
    fn set_elapsed_text(&mut self, text: &str);

    /// Text of the right (remaining) label.
    fn set_remaining_text(&mut self, text: &str);

    /// Apply one visual attribute.
    fn apply_style(&mut self, attribute: &StyleAttribute);
}

/// Pointer hooks invoked by whatever input layer owns pointer capture.
///
/// `x` is always in control-local coordinates.
pub trait PointerTracking {
    /// Pointer went down. Returns `true` when the gesture is captured.
    fn on_press_start(&mut self, x: f64) -> bool;

    /// Pointer moved while down. Returns `true` while the gesture stays captured.
    fn on_press_move(&mut self, x: f64) -> bool;

    /// Pointer lifted at `x`, or `None` when the system cancelled the gesture.
    fn on_press_end(&mut self, x: Option<f64>);
}

/// Notifications emitted to the host. Query the control for the values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SliderEvent {
    /// A press landed on the knob and was captured.
    Pressed,
    /// A seek was committed to `current_time`.
    ValueChanged,
    /// A captured gesture ended, committed or not.
    Released,
}
