use std::time::Duration;

use gpui::{
    AppContext, Application, AsyncWindowContext, Bounds, Timer, WindowBounds, WindowOptions, px,
    size,
};

use gpui_telemetry::{Color, Dashboard, DashboardView, Recorder, SeriesConfig};

fn build_dashboard() -> (Dashboard, Recorder, Recorder) {
    let dashboard = Dashboard::builder()
        .config(SeriesConfig {
            time_window: 600.0,
            expanded: true,
            ..SeriesConfig::default()
        })
        .series("frame time")
        .series("worker load")
        .build()
        .expect("valid dashboard config");
    let frame_time = dashboard
        .series("frame time")
        .expect("frame time series")
        .recorder();
    let load = dashboard
        .series("worker load")
        .expect("worker load series")
        .recorder();
    (dashboard, frame_time, load)
}

fn spawn_updates(
    window: &mut gpui::Window,
    cx: &mut gpui::App,
    view: gpui::Entity<DashboardView>,
    frame_time: Recorder,
    load: Recorder,
) {
    let busy = Color::new(0.95, 0.45, 0.2, 1.0);
    window
        .spawn(cx, move |cx: &mut AsyncWindowContext| {
            let mut cx = cx.clone();
            async move {
                let mut tick = 0_u64;
                loop {
                    Timer::after(Duration::from_millis(16)).await;
                    let t = tick as f64;
                    frame_time.record(t, 16.6 + (t * 0.05).sin() * 2.5);
                    if (tick / 90) % 2 == 0 {
                        load.record_with_color(t, 0.25, Color::CYAN);
                    } else {
                        load.record_with_color(t, 0.9, busy);
                    }
                    tick += 1;

                    if cx
                        .update(|_, cx| view.update(cx, |_view, view_cx| view_cx.notify()))
                        .is_err()
                    {
                        break;
                    }
                }
            }
        })
        .detach();
}

fn main() {
    env_logger::init();
    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(720.0), px(480.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |window, cx| {
            let (dashboard, frame_time, load) = build_dashboard();
            let view = cx.new(|_| DashboardView::new(dashboard));
            spawn_updates(window, cx, view.clone(), frame_time, load);
            view
        })
        .expect("open window");
    });
}
