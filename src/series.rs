//! Live telemetry series: ingestion orchestration and panel rendering.

use std::sync::{Arc, Mutex};

use log::debug;

use crate::config::{ConfigError, SeriesConfig};
use crate::datasource::{PendingQueue, Recorder, Sample, SampleBuffer, SharedQueue, lock_queue};
use crate::geom::{ScreenPoint, ScreenRect};
use crate::interaction::Hover;
use crate::panel::{Panel, PanelGroup};
use crate::render::chart::draw_chart;
use crate::render::{Canvas, Color, RectStyle, TextAnchor, TextStyle};
use crate::style::Theme;

const TITLE_MARGIN: f32 = 4.0;
const TITLE_GAP: f32 = 2.0;
const DIVIDER_HEIGHT: f32 = 1.0;
const TEXT_PADDING: f32 = 6.0;
const DESCRIPTION_MARGIN: f32 = 2.0;

/// A named telemetry signal drawn as a collapsible scrolling line chart.
///
/// Recording only appends to a pending queue. The queue is drained into the
/// sample buffer during [`draw`](Self::draw), and only while the panel is
/// expanded, so hidden series cost no compression or extrema work.
#[derive(Debug)]
pub struct Series {
    title: String,
    description: Option<String>,
    buffer: SampleBuffer,
    queue: SharedQueue,
    panel: Panel,
    config: SeriesConfig,
    theme: Theme,
    hover: Option<Hover>,
}

impl Series {
    /// Create a collapsed series with the default configuration in a group
    /// of its own.
    pub fn new(title: impl Into<String>) -> Self {
        let config = SeriesConfig::default();
        Self {
            title: title.into(),
            description: None,
            buffer: SampleBuffer::new(),
            queue: Arc::new(Mutex::new(PendingQueue::new(config.queue_capacity))),
            panel: Panel::standalone(),
            config,
            theme: Theme::default(),
            hover: None,
        }
    }

    /// Create a series in a group of its own.
    pub fn with_config(title: impl Into<String>, config: SeriesConfig) -> Result<Self, ConfigError> {
        Self::with_group(title, &PanelGroup::new(), config)
    }

    /// Create a series that shares accordion state with `group`.
    pub fn with_group(
        title: impl Into<String>,
        group: &PanelGroup,
        config: SeriesConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let buffer = SampleBuffer::with_time_window(config.time_window)?;
        let panel = Panel::new(group);
        if config.expanded {
            panel.expand();
        }
        Ok(Self {
            title: title.into(),
            description: None,
            buffer,
            queue: Arc::new(Mutex::new(PendingQueue::new(config.queue_capacity))),
            panel,
            config,
            theme: Theme::default(),
            hover: None,
        })
    }

    /// Set a description line drawn below the plot.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace or clear the description line.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Replace the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Series title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description line, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Active configuration.
    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    /// Active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Queue a sample with the default color.
    pub fn record(&self, t: f64, y: f64) {
        self.record_with_color(t, y, self.config.default_color);
    }

    /// Queue a sample with an annotation color for the segment ending at it.
    pub fn record_with_color(&self, t: f64, y: f64, color: Color) {
        lock_queue(&self.queue).push(Sample::new(t, y, color));
    }

    /// A producer handle that can record from other threads.
    pub fn recorder(&self) -> Recorder {
        Recorder::new(Arc::clone(&self.queue), self.config.default_color)
    }

    /// Re-derive window and extrema immediately instead of on the next draw.
    pub fn mark_dirty(&mut self) {
        self.buffer.rebuild();
    }

    /// Visible time window width.
    pub fn time_window(&self) -> f64 {
        self.buffer.time_window()
    }

    /// Change the visible time window. A new width re-derives the window and
    /// extrema right away.
    pub fn set_time_window(&mut self, width: f64) -> Result<(), ConfigError> {
        self.buffer.set_time_window(width)?;
        self.config.time_window = width;
        Ok(())
    }

    /// Panel membership.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Move the series into another accordion group, collapsed.
    pub fn join_group(&mut self, group: &PanelGroup) {
        self.panel.join(group);
    }

    /// Expand the panel, collapsing the other members of its group.
    pub fn expand(&self) {
        self.panel.expand();
    }

    /// Collapse the panel.
    pub fn collapse(&self) {
        self.panel.collapse();
    }

    /// Check whether the panel is expanded.
    pub fn is_expanded(&self) -> bool {
        self.panel.is_expanded()
    }

    /// Samples recorded but not yet drained into the buffer.
    pub fn pending_len(&self) -> usize {
        lock_queue(&self.queue).len()
    }

    /// Samples dropped because the pending queue overflowed.
    pub fn dropped_samples(&self) -> u64 {
        lock_queue(&self.queue).dropped()
    }

    /// The committed samples.
    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    /// Smallest committed value.
    pub fn min_y(&self) -> f64 {
        self.buffer.min_y()
    }

    /// Largest committed value.
    pub fn max_y(&self) -> f64 {
        self.buffer.max_y()
    }

    /// Oldest committed timestamp.
    pub fn min_t(&self) -> Option<f64> {
        self.buffer.min_t()
    }

    /// Newest committed timestamp.
    pub fn max_t(&self) -> Option<f64> {
        self.buffer.max_t()
    }

    /// Number of committed samples.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Whether the buffer holds enough samples to plot.
    pub fn is_ready(&self) -> bool {
        self.buffer.is_ready()
    }

    /// Sample under the pointer during the most recent draw.
    pub fn hovered(&self) -> Option<Sample> {
        self.hover.map(|hover| hover.sample)
    }

    /// Draw the panel at the top of `area` and shrink `area` by the height
    /// consumed.
    ///
    /// While expanded, pending samples are drained into the buffer first.
    /// A collapsed panel draws only its title row.
    pub fn draw(&mut self, area: &mut ScreenRect, canvas: &mut impl Canvas) {
        let top = area.min.y;
        self.hover = None;

        let (_, title_height) = canvas.measure_text(&self.title, self.theme.title_size);
        let title_row = area.take_top(title_height + 2.0 * TITLE_MARGIN);
        self.panel.draw_title(title_row, &self.title, canvas, &self.theme);

        if self.panel.is_expanded() {
            self.ingest_pending();
            area.take_top(TITLE_GAP);
            if self.buffer.is_ready() && self.buffer.len() > self.config.min_plot_samples {
                self.draw_body(area, canvas);
            }
        }

        let consumed = ScreenRect::new(
            ScreenPoint::new(area.min.x, top),
            ScreenPoint::new(area.max.x, area.min.y),
        );
        canvas.draw_rect(consumed, RectStyle::outlined(self.theme.panel_border, 1.0));
    }

    fn draw_body(&mut self, area: &mut ScreenRect, canvas: &mut impl Canvas) {
        let header = area.take_top(self.config.header_height);
        let divider = area.take_top(DIVIDER_HEIGHT);
        canvas.draw_rect(divider, RectStyle::filled(self.theme.divider));

        let plot = area.take_top(self.config.plot_height);
        self.hover = draw_chart(&self.buffer, plot, canvas, &self.theme, &self.config);
        self.draw_header(header, canvas);

        if let Some(description) = &self.description {
            let (_, height) = canvas.measure_text(description, self.theme.label_size);
            let row = area.take_top(height + 2.0 * DESCRIPTION_MARGIN);
            let style = TextStyle {
                color: self.theme.muted_text,
                size: self.theme.label_size,
                anchor: TextAnchor::Left,
            };
            canvas.draw_text(row.inset_x(TEXT_PADDING), description, &style);
        }
    }

    fn draw_header(&self, row: ScreenRect, canvas: &mut impl Canvas) {
        let Some(min_t) = self.buffer.min_t() else {
            return;
        };
        let row = row.inset_x(TEXT_PADDING);
        let times = &self.config.time_formatter;
        let style = TextStyle {
            color: self.theme.text,
            size: self.theme.label_size,
            anchor: TextAnchor::Left,
        };

        canvas.draw_text(row, &format!("Min T: {}", times.format(min_t)), &style);
        if let Some(hover) = &self.hover {
            let current = format!(
                "Current:({}, {})",
                times.format(hover.sample.t),
                self.config.readout_formatter.format(hover.sample.y)
            );
            canvas.draw_text(row, &current, &style.clone().anchored(TextAnchor::Center));
        }
        let max_t = min_t + self.buffer.range_t();
        canvas.draw_text(
            row,
            &format!("Max T: {}", times.format(max_t)),
            &style.anchored(TextAnchor::Right),
        );
    }

    fn ingest_pending(&mut self) {
        let pending = lock_queue(&self.queue).take_all();
        if pending.is_empty() {
            return;
        }
        debug!("draining {} pending samples into {:?}", pending.len(), self.title);
        for sample in pending {
            self.buffer.add(sample);
        }
        self.buffer.rebuild();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::MonospaceMeasurer;
    use crate::render::RecordingCanvas;

    fn viewport() -> ScreenRect {
        ScreenRect::from_origin_size(0.0, 0.0, 400.0, 200.0)
    }

    fn expanded_config() -> SeriesConfig {
        SeriesConfig {
            expanded: true,
            ..SeriesConfig::default()
        }
    }

    fn record_sine(series: &Series, count: usize) {
        for i in 0..count {
            let t = i as f64;
            series.record(t, t.sin());
        }
    }

    fn draw(series: &mut Series, pointer: Option<ScreenPoint>) -> (ScreenRect, Vec<String>) {
        let mut area = viewport();
        let mut canvas = RecordingCanvas::new(MonospaceMeasurer::default()).with_pointer(pointer);
        series.draw(&mut area, &mut canvas);
        let texts = canvas
            .render_list()
            .texts()
            .map(str::to_string)
            .collect();
        (area, texts)
    }

    #[test]
    fn record_only_queues() {
        let series = Series::new("cpu");
        record_sine(&series, 10);
        assert_eq!(series.pending_len(), 10);
        assert!(series.is_empty());
    }

    #[test]
    fn collapsed_panel_does_not_drain() {
        let mut series = Series::new("cpu");
        record_sine(&series, 30);
        let (area, texts) = draw(&mut series, None);
        assert_eq!(series.pending_len(), 30);
        assert!(series.is_empty());
        assert_eq!(texts, vec!["Collapsed", "cpu"]);
        // Only the title row: 12px text is 14.4px tall plus margins.
        assert!((area.min.y - 22.4).abs() < 1e-3);
    }

    #[test]
    fn expanded_panel_drains_and_plots() {
        let mut series = Series::with_config("cpu", expanded_config()).expect("valid config");
        record_sine(&series, 30);
        let (area, texts) = draw(&mut series, None);
        assert_eq!(series.pending_len(), 0);
        assert_eq!(series.len(), 30);
        assert!(texts.iter().any(|text| text == "Min T: 0"));
        assert!(texts.iter().any(|text| text == "Max T: 29"));
        assert!(!texts.iter().any(|text| text.starts_with("Current")));
        // Title, gap, header, divider, and plot.
        assert!((area.min.y - (22.4 + 2.0 + 15.0 + 1.0 + 100.0)).abs() < 1e-3);
    }

    #[test]
    fn too_few_samples_skip_the_plot() {
        let mut series = Series::with_config("cpu", expanded_config()).expect("valid config");
        record_sine(&series, 20);
        let (area, texts) = draw(&mut series, None);
        assert_eq!(series.len(), 20);
        assert!(series.is_ready());
        assert_eq!(texts, vec!["Expanded", "cpu"]);
        assert!((area.min.y - 24.4).abs() < 1e-3);
    }

    #[test]
    fn plot_appears_once_the_threshold_is_passed() {
        let mut series = Series::with_config("cpu", expanded_config()).expect("valid config");
        record_sine(&series, 24);
        let (_, texts) = draw(&mut series, None);
        assert_eq!(series.len(), 24);
        assert_eq!(texts, vec!["Expanded", "cpu"]);

        series.record(24.0, 24.0_f64.sin());
        let (area, texts) = draw(&mut series, None);
        assert_eq!(series.len(), 25);
        assert!(texts.iter().any(|text| text == "Min T: 0"));
        assert!((area.min.y - 140.4).abs() < 1e-3);
    }

    #[test]
    fn hover_reports_current_frame_sample() {
        let mut series = Series::with_config("cpu", expanded_config()).expect("valid config");
        record_sine(&series, 30);
        let (_, texts) = draw(&mut series, Some(ScreenPoint::new(300.0, 100.0)));
        let hovered = series.hovered().expect("pointer is over the plot");
        assert_eq!(hovered.t, 21.0);
        assert!(texts.iter().any(|text| text == "Current:(21, 0.8367)"));

        draw(&mut series, None);
        assert!(series.hovered().is_none());
    }

    #[test]
    fn description_is_drawn_below_the_plot() {
        let mut series = Series::with_config("cpu", expanded_config())
            .expect("valid config")
            .with_description("load average");
        record_sine(&series, 30);
        let (area, texts) = draw(&mut series, None);
        assert_eq!(texts.last().map(String::as_str), Some("load average"));
        assert!(area.min.y > 140.4);
    }

    #[test]
    fn set_time_window_validates_and_trims() {
        let mut series = Series::with_config("cpu", expanded_config()).expect("valid config");
        assert!(matches!(
            series.set_time_window(0.0),
            Err(ConfigError::InvalidTimeWindow(_))
        ));
        record_sine(&series, 30);
        draw(&mut series, None);
        series.set_time_window(10.0).expect("valid window");
        assert_eq!(series.time_window(), 10.0);
        assert_eq!(series.min_t(), Some(19.0));
        assert_eq!(series.max_t(), Some(29.0));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SeriesConfig {
            queue_capacity: 0,
            ..SeriesConfig::default()
        };
        assert_eq!(
            Series::with_config("cpu", config).err(),
            Some(ConfigError::ZeroQueueCapacity)
        );
    }

    #[test]
    fn recorder_feeds_the_same_queue() {
        let series = Series::new("net");
        let recorder = series.recorder();
        std::thread::spawn(move || {
            for i in 0..5 {
                recorder.record(i as f64, 1.0);
            }
        })
        .join()
        .expect("producer thread");
        assert_eq!(series.pending_len(), 5);
    }

    #[test]
    fn clicking_the_title_expands_and_drains() {
        let mut series = Series::new("cpu");
        record_sine(&series, 30);
        let mut area = viewport();
        let mut canvas = RecordingCanvas::new(MonospaceMeasurer::default())
            .with_pointer(Some(ScreenPoint::new(10.0, 10.0)))
            .with_click(true);
        series.draw(&mut area, &mut canvas);
        assert!(series.is_expanded());
        assert_eq!(series.len(), 30);
    }
}
