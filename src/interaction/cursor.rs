use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent};
use yew::prelude::*;

use super::lifecycle::MountGuard;

/// Fraction of the remaining distance the trailing ring closes each frame.
pub const CURSOR_SMOOTHING: f64 = 0.15;
pub const DOT_DIAMETER: f64 = 12.0;
pub const RING_DIAMETER: f64 = 40.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Exponential smoothing of a follower point toward the latest pointer sample.
#[derive(Clone, Debug)]
pub struct PointerSmoother {
    raw: Point,
    smoothed: Point,
    alpha: f64,
}

impl PointerSmoother {
    /// Both points start at the origin. `alpha` outside `(0, 1]` falls back
    /// to [`CURSOR_SMOOTHING`] or is capped at 1.
    pub fn new(alpha: f64) -> Self {
        let alpha = if alpha.is_finite() && alpha > 0.0 {
            alpha.min(1.0)
        } else {
            CURSOR_SMOOTHING
        };
        Self {
            raw: Point::ORIGIN,
            smoothed: Point::ORIGIN,
            alpha,
        }
    }

    pub fn record(&mut self, sample: Point) {
        self.raw = sample;
    }

    pub fn step(&mut self) -> Point {
        self.smoothed.x += (self.raw.x - self.smoothed.x) * self.alpha;
        self.smoothed.y += (self.raw.y - self.smoothed.y) * self.alpha;
        self.smoothed
    }

    pub fn raw(&self) -> Point {
        self.raw
    }
}

impl Default for PointerSmoother {
    fn default() -> Self {
        Self::new(CURSOR_SMOOTHING)
    }
}

/// CSS transform that centres a round marker of `diameter` on `point`.
pub fn marker_transform(point: Point, diameter: f64) -> String {
    let half = diameter / 2.0;
    format!("translate3d({}px, {}px, 0)", point.x - half, point.y - half)
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn schedule_frame(callback: &FrameCallback) -> Option<i32> {
    let win = window()?;
    let callback = callback.borrow();
    let callback = callback.as_ref()?;
    win.request_animation_frame(callback.as_ref().unchecked_ref()).ok()
}

fn place_marker(node: &NodeRef, point: Point, diameter: f64) {
    if let Some(marker) = node.cast::<HtmlElement>() {
        let _ = marker
            .style()
            .set_property("transform", &marker_transform(point, diameter));
    }
}

/// Dot that sits on the pointer plus a ring that trails it.
///
/// Marker positions are written straight to the elements' inline style from
/// a `requestAnimationFrame` loop. Going through component state would
/// re-render the whole tree every frame.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let dot_ref = use_node_ref();
    let ring_ref = use_node_ref();

    {
        let dot_ref = dot_ref.clone();
        let ring_ref = ring_ref.clone();
        use_effect_with_deps(
            move |_| {
                let guard = MountGuard::new();
                let smoother = Rc::new(RefCell::new(PointerSmoother::default()));
                let frame_handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
                let frame_callback: FrameCallback = Rc::new(RefCell::new(None));

                let move_listener = {
                    let guard = guard.clone();
                    let smoother = smoother.clone();
                    Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
                        guard.run(|| {
                            smoother
                                .borrow_mut()
                                .record(Point::new(e.client_x() as f64, e.client_y() as f64));
                        });
                    })
                };

                let document = window().and_then(|w| w.document());
                match &document {
                    Some(document) => {
                        if document
                            .add_event_listener_with_callback(
                                "mousemove",
                                move_listener.as_ref().unchecked_ref(),
                            )
                            .is_err()
                        {
                            warn!("Could not attach cursor mousemove listener");
                        }
                    }
                    None => debug!("No document, custom cursor stays at the origin"),
                }

                {
                    let guard = guard.clone();
                    let next_frame = frame_callback.clone();
                    let frame_handle = frame_handle.clone();
                    *frame_callback.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
                        if !guard.is_live() {
                            return;
                        }
                        let (raw, smoothed) = {
                            let mut smoother = smoother.borrow_mut();
                            let smoothed = smoother.step();
                            (smoother.raw(), smoothed)
                        };
                        place_marker(&dot_ref, raw, DOT_DIAMETER);
                        place_marker(&ring_ref, smoothed, RING_DIAMETER);
                        frame_handle.set(schedule_frame(&next_frame));
                    }));
                }
                frame_handle.set(schedule_frame(&frame_callback));

                move || {
                    guard.release();
                    if let (Some(win), Some(handle)) = (window(), frame_handle.take()) {
                        let _ = win.cancel_animation_frame(handle);
                    }
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "mousemove",
                            move_listener.as_ref().unchecked_ref(),
                        );
                    }
                    // The frame closure holds an Rc to its own slot
                    frame_callback.borrow_mut().take();
                }
            },
            (),
        );
    }

    let ring_style = format!(
        "position: fixed; top: 0; left: 0; width: {d}px; height: {d}px; border-radius: 9999px; \
         background: #38b6ff; opacity: 0.3; pointer-events: none; z-index: 9999; \
         transition: transform 0.1s ease-out; will-change: transform;",
        d = RING_DIAMETER
    );
    let dot_style = format!(
        "position: fixed; top: 0; left: 0; width: {d}px; height: {d}px; border-radius: 9999px; \
         background: #38b6ff; pointer-events: none; z-index: 9999; will-change: transform;",
        d = DOT_DIAMETER
    );

    html! {
        <>
            <div ref={ring_ref} class="cursor-ring" style={ring_style}></div>
            <div ref={dot_ref} class="cursor-dot" style={dot_style}></div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    impl Point {
        fn distance_to(self, other: Point) -> f64 {
            (self.x - other.x).hypot(self.y - other.y)
        }
    }

    impl PointerSmoother {
        fn starting_at(alpha: f64, raw: Point, smoothed: Point) -> Self {
            Self {
                raw,
                smoothed,
                ..Self::new(alpha)
            }
        }

        fn smoothed(&self) -> Point {
            self.smoothed
        }

        fn alpha(&self) -> f64 {
            self.alpha
        }
    }

    #[test]
    fn test_first_step_closes_fifteen_percent() {
        let mut smoother =
            PointerSmoother::starting_at(0.15, Point::new(100.0, 100.0), Point::ORIGIN);
        let p = smoother.step();
        assert!((p.x - 15.0).abs() < EPS);
        assert!((p.y - 15.0).abs() < EPS);
    }

    #[test]
    fn test_ten_steps_within_twenty_five() {
        let target = Point::new(100.0, 100.0);
        let mut smoother = PointerSmoother::starting_at(0.15, target, Point::ORIGIN);
        for _ in 0..10 {
            smoother.step();
        }
        assert!(smoother.smoothed().distance_to(target) < 25.0);
    }

    #[test]
    fn test_distance_shrinks_monotonically_without_overshoot() {
        let starts = [
            (Point::new(100.0, 100.0), Point::ORIGIN),
            (Point::new(-40.0, 300.0), Point::new(250.0, -10.0)),
            (Point::new(0.5, 0.5), Point::new(0.0, 1.0)),
        ];
        for alpha in [0.05, 0.15, 0.5, 1.0] {
            for (raw, smoothed) in starts {
                let mut smoother = PointerSmoother::starting_at(alpha, raw, smoothed);
                let initial = smoothed.distance_to(raw);
                let mut previous = initial;
                let mut steps = 0;
                while previous > 1e-6 && steps < 10_000 {
                    let next = smoother.step().distance_to(raw);
                    assert!(next < previous, "alpha {alpha}: {next} !< {previous}");
                    assert!(next <= initial);
                    previous = next;
                    steps += 1;
                }
                assert!(previous <= 1e-6);
            }
        }
    }

    #[test]
    fn test_alpha_one_snaps_to_pointer() {
        let mut smoother = PointerSmoother::new(1.0);
        smoother.record(Point::new(42.0, -7.0));
        assert_eq!(smoother.step(), Point::new(42.0, -7.0));
    }

    #[test]
    fn test_invalid_alpha_falls_back() {
        assert_eq!(PointerSmoother::new(0.0).alpha(), CURSOR_SMOOTHING);
        assert_eq!(PointerSmoother::new(-2.0).alpha(), CURSOR_SMOOTHING);
        assert_eq!(PointerSmoother::new(f64::NAN).alpha(), CURSOR_SMOOTHING);
        assert_eq!(PointerSmoother::new(3.0).alpha(), 1.0);
    }

    #[test]
    fn test_no_samples_stays_at_origin() {
        let mut smoother = PointerSmoother::default();
        assert_eq!(smoother.step(), Point::ORIGIN);
        assert_eq!(smoother.raw(), Point::ORIGIN);
    }

    #[test]
    fn test_marker_transform_centres_marker() {
        assert_eq!(
            marker_transform(Point::new(100.0, 50.0), RING_DIAMETER),
            "translate3d(80px, 30px, 0)"
        );
        assert_eq!(
            marker_transform(Point::ORIGIN, DOT_DIAMETER),
            "translate3d(-6px, -6px, 0)"
        );
    }
}
