use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryList, MediaQueryListEvent};
use yew::prelude::*;

use super::lifecycle::MountGuard;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaQuery {
    MaxWidth(u32),
    MinWidth(u32),
}

/// Layouts switch to their stacked variants at or below this width.
pub const MOBILE_BREAKPOINT: MediaQuery = MediaQuery::MaxWidth(768);
/// Wide grids show every column from here up.
pub const DESKTOP_BREAKPOINT: MediaQuery = MediaQuery::MinWidth(1024);

impl MediaQuery {
    pub fn to_css(self) -> String {
        match self {
            MediaQuery::MaxWidth(px) => format!("(max-width: {px}px)"),
            MediaQuery::MinWidth(px) => format!("(min-width: {px}px)"),
        }
    }

    /// Same inclusive bounds the browser applies to width media features.
    pub fn matches_width(self, width: f64) -> bool {
        match self {
            MediaQuery::MaxWidth(px) => width <= px as f64,
            MediaQuery::MinWidth(px) => width >= px as f64,
        }
    }
}

/// Breakpoint value that only reports real flips.
#[derive(Clone, Debug)]
pub struct BreakpointTracker {
    query: MediaQuery,
    matches: bool,
}

impl BreakpointTracker {
    pub fn new(query: MediaQuery, matches: bool) -> Self {
        Self { query, matches }
    }

    pub fn matches(&self) -> bool {
        self.matches
    }

    /// Re-evaluates the query for a viewport `width`. Returns true when the
    /// value flipped.
    pub fn update(&mut self, width: f64) -> bool {
        self.record(self.query.matches_width(width))
    }

    /// Takes the browser's own answer when no width is available.
    pub fn record(&mut self, matches: bool) -> bool {
        let flipped = matches != self.matches;
        self.matches = matches;
        flipped
    }
}

fn media_query_list(query: MediaQuery) -> Option<MediaQueryList> {
    window()?.match_media(&query.to_css()).ok().flatten()
}

fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

/// Current answer from `matchMedia`, or `false` outside a browser.
pub fn current_match(query: MediaQuery) -> bool {
    media_query_list(query)
        .map(|list| list.matches())
        .unwrap_or(false)
}

/// Live "does the viewport satisfy `query`" flag.
///
/// The first render already carries the real value. One `change` listener
/// is registered per instance and removed on unmount; it re-renders only
/// when the tracker reports a flip.
#[hook]
pub fn use_media_query(query: MediaQuery) -> bool {
    let matches = use_state_eq(|| current_match(query));

    {
        let matches = matches.clone();
        use_effect_with_deps(
            move |query| {
                let query = *query;
                let guard = MountGuard::new();
                let list = media_query_list(query);
                let listener = list.as_ref().map(|list| {
                    let mut tracker = BreakpointTracker::new(query, list.matches());
                    matches.set(list.matches());

                    let guard = guard.clone();
                    let matches = matches.clone();
                    let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
                        move |event: MediaQueryListEvent| {
                            guard.run(|| {
                                let flipped = match viewport_width() {
                                    Some(width) => tracker.update(width),
                                    None => tracker.record(event.matches()),
                                };
                                if flipped {
                                    matches.set(tracker.matches());
                                }
                            });
                        },
                    );
                    if list
                        .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("Could not subscribe to {}", query.to_css());
                    }
                    listener
                });
                if list.is_none() {
                    debug!("matchMedia unavailable, {} stays false", query.to_css());
                }

                move || {
                    guard.release();
                    if let (Some(list), Some(listener)) = (list, listener) {
                        let _ = list.remove_event_listener_with_callback(
                            "change",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            query,
        );
    }

    *matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_text() {
        assert_eq!(MOBILE_BREAKPOINT.to_css(), "(max-width: 768px)");
        assert_eq!(MediaQuery::MinWidth(1024).to_css(), "(min-width: 1024px)");
    }

    #[test]
    fn test_max_width_matches() {
        assert!(MOBILE_BREAKPOINT.matches_width(500.0));
        assert!(MOBILE_BREAKPOINT.matches_width(768.0));
        assert!(!MOBILE_BREAKPOINT.matches_width(1024.0));
    }

    #[test]
    fn test_min_width_matches() {
        assert!(DESKTOP_BREAKPOINT.matches_width(1024.0));
        assert!(!DESKTOP_BREAKPOINT.matches_width(1023.5));
    }

    #[test]
    fn test_recorded_browser_answer_flips_once() {
        let mut tracker = BreakpointTracker::new(DESKTOP_BREAKPOINT, false);
        let flips = [false, true, true, true]
            .into_iter()
            .filter(|matches| tracker.record(*matches))
            .count();
        assert_eq!(flips, 1);
        assert!(tracker.matches());
    }

    #[test]
    fn test_shrinking_viewport_flips_once() {
        let mut tracker = BreakpointTracker::new(MOBILE_BREAKPOINT, false);
        assert!(!tracker.update(1024.0));
        assert!(!tracker.matches());

        let flips = [900.0, 800.0, 500.0, 480.0, 320.0]
            .into_iter()
            .filter(|width| tracker.update(*width))
            .count();

        assert_eq!(flips, 1);
        assert!(tracker.matches());
    }

    #[test]
    fn test_resize_without_crossing_is_silent() {
        let mut tracker = BreakpointTracker::new(MOBILE_BREAKPOINT, true);
        assert!(!tracker.update(500.0));
        assert!(!tracker.update(600.0));
        assert!(!tracker.update(768.0));
        assert!(tracker.update(769.0));
        assert!(!tracker.matches());
    }
}
