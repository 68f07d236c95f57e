//! Background rendering of catalog selections.
//!
//! One worker thread owns the in-flight grid walk. Submitting a new selection cancels the
//! walk in progress, so at most one walk ever writes to a canvas, and only the newest
//! completed frame reaches the presenter port.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::RenderController;
pub use events::render_event::RenderEvent;
pub use ports::RenderPresenterPort;
