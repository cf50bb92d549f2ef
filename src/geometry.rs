//! Track geometry and pixel/time conversion.
//!
//! The control lays out as `[left label][elapsed region][knob][rest][right label]`.
//! Only the span left over after the labels and the knob is usable for
//! seeking; `available_width` is that span and every offset in this module is
//! measured from its left edge.

/// Widths reported by the view binder for one layout pass.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct TrackGeometry {
    /// Full width of the control.
    pub total_width: f64,
    /// Width reserved for the elapsed-time label on the left.
    pub left_reserved_width: f64,
    /// Width reserved for the remaining-time label on the right.
    pub right_reserved_width: f64,
    /// Width of the draggable knob.
    pub knob_width: f64,
}

impl TrackGeometry {
    pub fn new(
        total_width: f64,
        left_reserved_width: f64,
        right_reserved_width: f64,
        knob_width: f64,
    ) -> Self {
        Self {
            total_width,
            left_reserved_width,
            right_reserved_width,
            knob_width,
        }
    }

    /// Usable drag range in pixels. Never negative, including before the
    /// first layout pass when every width may still be zero.
    pub fn available_width(&self) -> f64 {
        let width = self.total_width
            - self.left_reserved_width
            - self.right_reserved_width
            - self.knob_width;
        if width.is_finite() { width.max(0.0) } else { 0.0 }
    }

    /// Control-local x of the knob's center when the elapsed region is
    /// `elapsed_offset` wide.
    pub fn knob_center_x(&self, elapsed_offset: f64) -> f64 {
        self.left_reserved_width + elapsed_offset + self.knob_width / 2.0
    }
}

/// Fraction of `total_time` that `time` represents; zero for an empty track.
pub fn normalized(time: f64, total_time: f64) -> f64 {
    if total_time > 0.0 {
        time / total_time
    } else {
        0.0
    }
}

/// Pixel offset of the elapsed-region edge for `current_time`.
pub fn offset_for_time(current_time: f64, total_time: f64, available_width: f64) -> f64 {
    available_width * normalized(current_time, total_time)
}

/// Time under `offset`, clamping the offset into the usable range first.
pub fn time_for_offset(offset: f64, total_time: f64, available_width: f64) -> f64 {
    if available_width <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset.clamp(0.0, available_width) / available_width) * total_time
}

/// Clamp `time` into `[0, total_time]`. Non-finite input maps to zero.
pub fn clamp_time(time: f64, total_time: f64) -> f64 {
    if !time.is_finite() {
        return 0.0;
    }
    time.min(total_time).max(0.0)
}
