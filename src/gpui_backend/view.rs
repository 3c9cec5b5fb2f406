use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use gpui::prelude::*;
use gpui::{MouseButton, MouseMoveEvent, MouseUpEvent, Pixels, Point, Window, canvas, div};

use crate::dashboard::Dashboard;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::RecordingCanvas;

use super::paint::{paint_render_list, to_hsla};
use super::text::GpuiTextMeasurer;

#[derive(Debug, Default)]
struct PointerState {
    position: Option<ScreenPoint>,
    clicked: bool,
}

impl PointerState {
    fn moved(&mut self, position: ScreenPoint) {
        self.position = Some(position);
    }

    fn released(&mut self, position: ScreenPoint) {
        self.position = Some(position);
        self.clicked = true;
    }

    fn left(&mut self) {
        self.position = None;
        self.clicked = false;
    }
}

/// A GPUI view that draws a [`Dashboard`] and feeds it pointer input.
///
/// Pointer moves drive hover readouts; a left click on a title row toggles
/// that panel. Call `cx.notify()` on the owning entity after recording new
/// samples so the view redraws.
#[derive(Clone)]
pub struct DashboardView {
    dashboard: Arc<RwLock<Dashboard>>,
    pointer: Arc<RwLock<PointerState>>,
}

impl DashboardView {
    /// Create a view for the given dashboard.
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(dashboard)),
            pointer: Arc::new(RwLock::new(PointerState::default())),
        }
    }

    /// Get a handle for reading and mutating the dashboard.
    pub fn dashboard_handle(&self) -> DashboardHandle {
        DashboardHandle {
            dashboard: Arc::clone(&self.dashboard),
        }
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        write(&self.pointer).moved(screen_point(ev.position));
        cx.notify();
    }

    fn on_mouse_up(&mut self, ev: &MouseUpEvent, cx: &mut Context<Self>) {
        write(&self.pointer).released(screen_point(ev.position));
        cx.notify();
    }

    fn on_hover(&mut self, hovered: bool, cx: &mut Context<Self>) {
        if !hovered {
            write(&self.pointer).left();
            cx.notify();
        }
    }
}

impl Render for DashboardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let dashboard = Arc::clone(&self.dashboard);
        let pointer = Arc::clone(&self.pointer);
        let background = read(&self.dashboard).theme().plot_background;

        div()
            .id("telemetry-dashboard")
            .size_full()
            .bg(to_hsla(background))
            .child(
                canvas(
                    move |bounds, window, _| {
                        let (position, clicked) = {
                            let mut pointer = write(&pointer);
                            let clicked = std::mem::take(&mut pointer.clicked);
                            (pointer.position, clicked)
                        };
                        let mut area = ScreenRect::new(
                            screen_point(bounds.origin),
                            screen_point(bounds.bottom_right()),
                        );
                        let mut recording =
                            RecordingCanvas::new(GpuiTextMeasurer::new(window))
                                .with_pointer(position.filter(|point| area.contains(*point)))
                                .with_click(clicked);
                        write(&dashboard).draw(&mut area, &mut recording);
                        recording.into_render_list()
                    },
                    move |_, list, window, cx| {
                        paint_render_list(&list, window, cx);
                    },
                )
                .size_full(),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
            .on_hover(cx.listener(|this, hovered: &bool, _, cx| {
                this.on_hover(*hovered, cx);
            }))
    }
}

/// A handle for mutating a [`Dashboard`] held inside a [`DashboardView`].
///
/// The handle clones cheaply and can be moved into async tasks. Recording
/// from other threads is better served by [`Series::recorder`](crate::series::Series::recorder).
#[derive(Clone)]
pub struct DashboardHandle {
    dashboard: Arc<RwLock<Dashboard>>,
}

impl DashboardHandle {
    /// Read the dashboard state.
    ///
    /// The dashboard is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&Dashboard) -> R) -> R {
        f(&read(&self.dashboard))
    }

    /// Mutate the dashboard state.
    ///
    /// The dashboard is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut Dashboard) -> R) -> R {
        f(&mut write(&self.dashboard))
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f32::from(point.x), f32::from(point.y))
}
