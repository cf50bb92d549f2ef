//! A media scrubber control: elapsed and remaining time either side of a
//! draggable knob, with drag-to-seek.
//!
//! The crate holds the logic only. Rendering and pointer capture belong to
//! the host, which plugs in through [`ViewBinder`] and drives the control
//! through [`PointerTracking`].
//!
//! ```
//! use mediaslider::geometry::TrackGeometry;
//! use mediaslider::style::StyleAttribute;
//! use mediaslider::{PointerTracking, SliderControl, ViewBinder};
//!
//! #[derive(Default)]
//! struct Labels {
//!     left: String,
//!     right: String,
//! }
//!
//! impl ViewBinder for Labels {
//!     fn geometry(&self) -> TrackGeometry {
//!         TrackGeometry::new(320.0, 50.0, 50.0, 20.0)
//!     }
//!     fn set_elapsed_width(&mut self, _width: f64) {}
//!     fn set_elapsed_text(&mut self, text: &str) {
//!         self.left = text.to_string();
//!     }
//!     fn set_remaining_text(&mut self, text: &str) {
//!         self.right = text.to_string();
//!     }
//!     fn apply_style(&mut self, _attribute: &StyleAttribute) {}
//! }
//!
//! let mut slider = SliderControl::new(Labels::default());
//! slider.set_total_time(Some(125.0));
//! slider.set_current_time(Some(65.0));
//! assert_eq!(slider.binder().left, "1:05");
//! assert_eq!(slider.binder().right, "-1:00");
//!
//! // Press away from the knob: ignored.
//! assert!(!slider.on_press_start(10.0));
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod slider;
pub mod style;

pub use slider::{
    DragState, DragStateMachine, PointerTracking, SliderControl, SliderEvent, SliderState,
    ViewBinder,
};
