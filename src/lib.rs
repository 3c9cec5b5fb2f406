//! gpui_telemetry records live telemetry into bounded buffers and draws it as
//! collapsible scrolling line charts.
//!
//! Producers call [`Series::record`] (or a [`Recorder`] from another thread)
//! at any rate. Once per frame, expanded series drain their pending samples
//! into a [`SampleBuffer`] that compresses collinear runs, keeps a sliding
//! time window, and tracks extrema for axis scaling. Drawing goes through the
//! [`Canvas`] trait; the optional `gpui` feature paints into a GPUI window.

#![forbid(unsafe_code)]

pub mod axis;
pub mod config;
pub mod dashboard;
pub mod datasource;
pub mod geom;
pub mod interaction;
pub mod panel;
pub mod render;
pub mod series;
pub mod style;
pub mod transform;
pub mod view;

#[cfg(feature = "gpui")]
pub mod gpui_backend;

pub use axis::{AxisFormatter, GridLine, MonospaceMeasurer, TextMeasurer, grid_lines};
pub use config::{ConfigError, DEFAULT_QUEUE_CAPACITY, DEFAULT_TIME_WINDOW, SeriesConfig};
pub use dashboard::{Dashboard, DashboardBuilder};
pub use datasource::{MAX_SAMPLES, PendingQueue, Recorder, Sample, SampleBuffer};
pub use geom::{ScreenPoint, ScreenRect};
pub use interaction::Hover;
pub use panel::{Panel, PanelGroup, PanelId, PanelState};
pub use render::{
    Canvas, Color, LineSegment, LineStyle, RecordingCanvas, RectStyle, RenderCommand, RenderList,
    TextAnchor, TextStyle,
};
pub use series::Series;
pub use style::Theme;
pub use transform::Transform;
pub use view::{Range, Viewport};

#[cfg(feature = "gpui")]
pub use gpui_backend::{DashboardHandle, DashboardView, GpuiTextMeasurer, paint_render_list};
