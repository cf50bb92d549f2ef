//! The scrubber control: state, drag handling and the seams to its host.
//!
//! `SliderControl` owns the committed times and the drag state machine. It
//! reads geometry from and writes display values to a [`ViewBinder`], and
//! receives pointer input through [`PointerTracking`].

mod binder;
mod control;
mod drag;

pub use binder::*;
pub use control::*;
pub use drag::*;
