//! GPUI integration for gpui_telemetry.
//!
//! [`DashboardView`] draws a [`Dashboard`](crate::dashboard::Dashboard) into a
//! GPUI window every frame: widgets record into a
//! [`RecordingCanvas`](crate::render::RecordingCanvas) during prepaint and the
//! resulting render list is painted with GPUI primitives.

mod paint;
mod text;
mod view;

pub use paint::paint_render_list;
pub use text::GpuiTextMeasurer;
pub use view::{DashboardHandle, DashboardView};
