//! A vertical stack of series panels sharing one accordion group.

use crate::config::{ConfigError, SeriesConfig};
use crate::geom::ScreenRect;
use crate::panel::PanelGroup;
use crate::render::Canvas;
use crate::series::Series;
use crate::style::Theme;

const DEFAULT_GAP: f32 = 4.0;

/// Series panels drawn top-down, at most one of them expanded.
#[derive(Debug)]
pub struct Dashboard {
    group: PanelGroup,
    theme: Theme,
    config: SeriesConfig,
    gap: f32,
    series: Vec<Series>,
}

impl Dashboard {
    /// Create an empty dashboard with default configuration.
    pub fn new() -> Self {
        Self {
            group: PanelGroup::new(),
            theme: Theme::default(),
            config: SeriesConfig::default(),
            gap: DEFAULT_GAP,
            series: Vec::new(),
        }
    }

    /// Start building a dashboard with custom configuration.
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }

    /// The accordion group shared by every series.
    pub fn group(&self) -> &PanelGroup {
        &self.group
    }

    /// Theme applied to new series.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Configuration applied to new series.
    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    /// Vertical gap between panels.
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Create a series with the dashboard configuration and append it.
    pub fn add_series(&mut self, title: impl Into<String>) -> Result<&mut Series, ConfigError> {
        let series =
            Series::with_group(title, &self.group, self.config.clone())?.with_theme(self.theme.clone());
        let index = self.series.len();
        self.series.push(series);
        Ok(&mut self.series[index])
    }

    /// Append an existing series, moving it into this dashboard's group.
    pub fn push_series(&mut self, mut series: Series) {
        series.join_group(&self.group);
        self.series.push(series);
    }

    /// Look a series up by title.
    pub fn series(&self, title: &str) -> Option<&Series> {
        self.series.iter().find(|series| series.title() == title)
    }

    /// Look a series up by title, mutably.
    pub fn series_mut(&mut self, title: &str) -> Option<&mut Series> {
        self.series.iter_mut().find(|series| series.title() == title)
    }

    /// All series in drawing order.
    pub fn all_series(&self) -> &[Series] {
        &self.series
    }

    /// The expanded series, if any.
    pub fn expanded(&self) -> Option<&Series> {
        self.series.iter().find(|series| series.is_expanded())
    }

    /// Expand the series with `title`, collapsing the rest. Returns whether
    /// such a series exists.
    pub fn expand(&self, title: &str) -> bool {
        match self.series(title) {
            Some(series) => {
                series.expand();
                true
            }
            None => false,
        }
    }

    /// Collapse every series.
    pub fn collapse_all(&self) {
        self.group.collapse_all();
    }

    /// Draw every series top-down and shrink `area` by the height consumed.
    pub fn draw(&mut self, area: &mut ScreenRect, canvas: &mut impl Canvas) {
        for (index, series) in self.series.iter_mut().enumerate() {
            if index > 0 {
                area.take_top(self.gap);
            }
            series.draw(area, canvas);
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring a dashboard before construction.
#[derive(Debug)]
pub struct DashboardBuilder {
    theme: Theme,
    config: SeriesConfig,
    gap: f32,
    titles: Vec<String>,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            config: SeriesConfig::default(),
            gap: DEFAULT_GAP,
            titles: Vec::new(),
        }
    }
}

impl DashboardBuilder {
    /// Set the theme used by every series.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the configuration used by every series.
    pub fn config(mut self, config: SeriesConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the vertical gap between panels.
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    /// Add a series by title.
    pub fn series(mut self, title: impl Into<String>) -> Self {
        self.titles.push(title.into());
        self
    }

    /// Build the dashboard.
    ///
    /// When the configuration asks for expanded panels only the first series
    /// starts expanded.
    pub fn build(self) -> Result<Dashboard, ConfigError> {
        self.config.validate()?;
        let mut dashboard = Dashboard {
            group: PanelGroup::new(),
            theme: self.theme,
            config: SeriesConfig {
                expanded: false,
                ..self.config.clone()
            },
            gap: self.gap,
            series: Vec::with_capacity(self.titles.len()),
        };
        for title in self.titles {
            dashboard.add_series(title)?;
        }
        if self.config.expanded {
            if let Some(first) = dashboard.series.first() {
                first.expand();
            }
        }
        Ok(dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::MonospaceMeasurer;
    use crate::geom::ScreenPoint;
    use crate::render::RecordingCanvas;

    fn dashboard() -> Dashboard {
        Dashboard::builder()
            .series("cpu")
            .series("memory")
            .series("network")
            .build()
            .expect("valid config")
    }

    #[test]
    fn builder_creates_collapsed_series_in_one_group() {
        let dashboard = dashboard();
        assert_eq!(dashboard.all_series().len(), 3);
        assert_eq!(dashboard.group().members().len(), 3);
        assert!(dashboard.expanded().is_none());
    }

    #[test]
    fn expanded_config_opens_only_the_first_series() {
        let dashboard = Dashboard::builder()
            .config(SeriesConfig {
                expanded: true,
                ..SeriesConfig::default()
            })
            .series("cpu")
            .series("memory")
            .build()
            .expect("valid config");
        assert_eq!(dashboard.expanded().map(Series::title), Some("cpu"));
    }

    #[test]
    fn expanding_by_title_is_exclusive() {
        let dashboard = dashboard();
        assert!(dashboard.expand("cpu"));
        assert!(dashboard.expand("network"));
        assert!(!dashboard.expand("disk"));
        let expanded: Vec<_> = dashboard
            .all_series()
            .iter()
            .filter(|series| series.is_expanded())
            .map(Series::title)
            .collect();
        assert_eq!(expanded, vec!["network"]);
    }

    #[test]
    fn collapsed_stack_consumes_title_rows_and_gaps() {
        let mut dashboard = dashboard();
        let mut area = ScreenRect::from_origin_size(0.0, 0.0, 300.0, 400.0);
        let mut canvas = RecordingCanvas::new(MonospaceMeasurer::default());
        dashboard.draw(&mut area, &mut canvas);
        assert!((area.min.y - (3.0 * 22.4 + 2.0 * DEFAULT_GAP)).abs() < 1e-3);
    }

    #[test]
    fn clicking_a_title_moves_expansion() {
        let mut dashboard = dashboard();
        dashboard.expand("cpu");
        // cpu draws its title and gap (24.4px), then the gap, then memory.
        let click = ScreenPoint::new(10.0, 24.4 + DEFAULT_GAP + 10.0);
        let mut area = ScreenRect::from_origin_size(0.0, 0.0, 300.0, 400.0);
        let mut canvas = RecordingCanvas::new(MonospaceMeasurer::default())
            .with_pointer(Some(click))
            .with_click(true);
        dashboard.draw(&mut area, &mut canvas);
        assert_eq!(dashboard.expanded().map(Series::title), Some("memory"));
    }

    #[test]
    fn pushed_series_joins_the_group() {
        let mut dashboard = dashboard();
        let series = Series::new("disk");
        series.expand();
        dashboard.push_series(series);
        assert_eq!(dashboard.group().members().len(), 4);
        let disk = dashboard.series_mut("disk").expect("pushed series");
        disk.expand();
        assert_eq!(dashboard.expanded().map(Series::title), Some("disk"));
    }
}
