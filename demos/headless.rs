//! Records a few synthetic signals, draws them without a window, and prints
//! what was drawn.
//!
//! Run with `RUST_LOG=debug` to see queue drains and panel changes.

use std::thread;

use gpui_telemetry::{
    Color, Dashboard, MonospaceMeasurer, RecordingCanvas, RenderCommand, ScreenPoint, ScreenRect,
    SeriesConfig,
};

fn main() {
    env_logger::init();

    let mut dashboard = Dashboard::builder()
        .config(SeriesConfig {
            time_window: 120.0,
            expanded: true,
            ..SeriesConfig::default()
        })
        .series("frame time")
        .series("worker load")
        .build()
        .expect("valid dashboard config");

    if let Some(series) = dashboard.series_mut("frame time") {
        series.set_description(Some("milliseconds per frame".to_string()));
    }

    let recorder = dashboard
        .series("worker load")
        .expect("worker series")
        .recorder();
    let busy = Color::new(1.0, 0.45, 0.2, 1.0);
    let producer = thread::spawn(move || {
        for i in 0..400 {
            let t = i as f64;
            let color = if (i / 25) % 2 == 0 { Color::CYAN } else { busy };
            recorder.record_with_color(t, if color == busy { 0.9 } else { 0.2 }, color);
        }
    });

    if let Some(series) = dashboard.series("frame time") {
        for i in 0..400 {
            let t = i as f64;
            series.record(t, 16.6 + (t * 0.15).sin() * 2.0);
        }
    }
    producer.join().expect("producer thread");

    for frame in 0..2 {
        let mut area = ScreenRect::from_origin_size(0.0, 0.0, 640.0, 480.0);
        let mut canvas = RecordingCanvas::new(MonospaceMeasurer::default())
            .with_pointer(Some(ScreenPoint::new(400.0, 90.0)));
        dashboard.draw(&mut area, &mut canvas);
        let list = canvas.into_render_list();
        let rects = list
            .commands()
            .iter()
            .filter(|command| matches!(command, RenderCommand::Rect { .. }))
            .count();
        println!(
            "frame {frame}: {} commands, {} segments, {rects} rects, {:.1}px used",
            list.len(),
            list.segment_count(),
            area.min.y
        );
        for text in list.texts() {
            println!("  {text}");
        }
        dashboard.expand("worker load");
    }

    for series in dashboard.all_series() {
        println!(
            "{}: {} samples, y in [{:.3}, {:.3}], {} pending, hovered {:?}",
            series.title(),
            series.len(),
            series.min_y(),
            series.max_y(),
            series.pending_len(),
            series.hovered().map(|sample| (sample.t, sample.y)),
        );
    }
}
