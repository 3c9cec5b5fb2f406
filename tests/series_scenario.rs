use gpui_telemetry::{
    Color, Dashboard, MonospaceMeasurer, RecordingCanvas, ScreenPoint, ScreenRect, Series,
    SeriesConfig,
};

fn expanded(time_window: f64) -> SeriesConfig {
    SeriesConfig {
        time_window,
        expanded: true,
        ..SeriesConfig::default()
    }
}

fn draw_series(series: &mut Series) -> RecordingCanvas<MonospaceMeasurer> {
    let mut area = ScreenRect::from_origin_size(0.0, 0.0, 400.0, 200.0);
    let mut canvas = RecordingCanvas::new(MonospaceMeasurer::default());
    series.draw(&mut area, &mut canvas);
    canvas
}

#[test]
fn sine_wave_end_to_end() {
    let mut series = Series::with_config("sine", expanded(100.0)).expect("valid config");
    let values: Vec<f64> = (0..30).map(|i| (i as f64).sin()).collect();
    for (i, y) in values.iter().enumerate() {
        series.record(i as f64, *y);
    }

    let canvas = draw_series(&mut series);

    assert!(series.is_ready());
    assert!((17..=30).contains(&series.len()));
    let true_min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let true_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!((series.min_y() - true_min).abs() < 1e-9);
    assert!((series.max_y() - true_max).abs() < 1e-9);
    assert_eq!(series.min_t(), Some(0.0));
    assert_eq!(series.max_t(), Some(29.0));
    assert!(canvas.render_list().segment_count() > 6);
}

#[test]
fn linear_ramp_compresses_after_bootstrap() {
    let mut series = Series::with_config("ramp", expanded(1000.0)).expect("valid config");
    for i in 0..200 {
        series.record(i as f64, 2.0 * i as f64);
    }
    draw_series(&mut series);
    assert!(series.len() < 20);
    assert_eq!(series.min_y(), 0.0);
    assert_eq!(series.max_y(), 398.0);
    assert_eq!(series.max_t(), Some(199.0));
}

#[test]
fn color_changes_are_kept_as_segment_boundaries() {
    let mut series = Series::with_config("load", expanded(1000.0)).expect("valid config");
    let busy = Color::new(1.0, 0.3, 0.2, 1.0);
    for i in 0..100 {
        let color = if (i / 10) % 2 == 0 { Color::CYAN } else { busy };
        series.record_with_color(i as f64, 1.0, color);
    }
    draw_series(&mut series);
    let colors: Vec<Color> = series.buffer().iter().map(|sample| sample.color).collect();
    let switches = colors.windows(2).filter(|pair| pair[0] != pair[1]).count();
    assert_eq!(switches, 9);
}

#[test]
fn sliding_window_keeps_recent_samples() {
    let mut series = Series::with_config("window", expanded(50.0)).expect("valid config");
    for i in 0..=300 {
        let t = i as f64;
        series.record(t, (t * 0.7).sin() * t);
    }
    draw_series(&mut series);
    let first = series.min_t().expect("samples");
    assert!((first - 250.0).abs() < 1e-9);
    assert_eq!(series.max_t(), Some(300.0));

    let brute_max = series
        .buffer()
        .iter()
        .map(|sample| sample.y)
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(series.max_y() >= brute_max - 1e-9);
}

#[test]
fn collapsed_panels_keep_samples_pending() {
    let mut dashboard = Dashboard::builder()
        .series("cpu")
        .series("memory")
        .build()
        .expect("valid config");
    dashboard.expand("cpu");
    for i in 0..40 {
        let t = i as f64;
        for title in ["cpu", "memory"] {
            dashboard
                .series(title)
                .expect("series exists")
                .record(t, t.cos());
        }
    }

    let mut area = ScreenRect::from_origin_size(0.0, 0.0, 400.0, 600.0);
    let mut canvas = RecordingCanvas::new(MonospaceMeasurer::default());
    dashboard.draw(&mut area, &mut canvas);

    let cpu = dashboard.series("cpu").expect("cpu");
    let memory = dashboard.series("memory").expect("memory");
    assert_eq!(cpu.pending_len(), 0);
    assert!(cpu.is_ready());
    assert_eq!(memory.pending_len(), 40);
    assert!(memory.is_empty());

    dashboard.expand("memory");
    dashboard.draw(
        &mut ScreenRect::from_origin_size(0.0, 0.0, 400.0, 600.0),
        &mut RecordingCanvas::new(MonospaceMeasurer::default()),
    );
    assert!(!dashboard.series("cpu").expect("cpu").is_expanded());
    assert_eq!(dashboard.series("memory").expect("memory").pending_len(), 0);
}

#[test]
fn hovering_the_plot_reports_a_sample() {
    let mut series = Series::with_config("sine", expanded(100.0)).expect("valid config");
    for i in 0..30 {
        let t = i as f64;
        series.record(t, t.sin());
    }
    let mut area = ScreenRect::from_origin_size(0.0, 0.0, 400.0, 200.0);
    let mut canvas = RecordingCanvas::new(MonospaceMeasurer::default())
        .with_pointer(Some(ScreenPoint::new(394.0, 100.0)));
    series.draw(&mut area, &mut canvas);
    assert_eq!(series.hovered().map(|sample| sample.t), Some(29.0));
}
