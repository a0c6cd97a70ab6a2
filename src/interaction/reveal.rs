use std::cell::RefCell;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::lifecycle::MountGuard;

pub const TITLE_THRESHOLD: f64 = 0.3;
pub const DIVIDER_THRESHOLD: f64 = 0.5;

/// One-way UNREVEALED -> REVEALED switch.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    /// Feeds one intersection sample. Ignored once revealed.
    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> bool {
        if !self.revealed {
            self.revealed = if self.threshold > 0.0 {
                ratio >= self.threshold
            } else {
                intersecting
            };
        }
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Observer plus the JS callback it calls. Dropping disconnects.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(
    target: &Element,
    threshold: f64,
    guard: MountGuard,
    on_reveal: impl Fn() + 'static,
) -> Result<RevealObserver, JsValue> {
    let latch = RefCell::new(RevealLatch::new(threshold));
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            if !guard.is_live() {
                observer.disconnect();
                return;
            }
            let mut latch = latch.borrow_mut();
            if latch.is_revealed() {
                return;
            }
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                latch.observe(entry.intersection_ratio(), entry.is_intersecting());
            }
            if latch.is_revealed() {
                observer.disconnect();
                on_reveal();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // The first callback arrives with the current ratio, so content that is
    // already on screen reveals without a scroll.
    observer.observe(target);

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// Flips to true the first time `node` is at least `threshold` visible and
/// stays true. Observation ends on reveal and on unmount.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node| {
                let guard = MountGuard::new();
                let observer = match node.cast::<Element>() {
                    Some(target) => {
                        let setter = revealed.clone();
                        match observe_once(&target, threshold, guard.clone(), move || setter.set(true)) {
                            Ok(observer) => Some(observer),
                            Err(err) => {
                                warn!("IntersectionObserver unavailable, showing content: {:?}", err);
                                revealed.set(true);
                                None
                            }
                        }
                    }
                    None => {
                        revealed.set(true);
                        None
                    }
                };

                move || {
                    guard.release();
                    drop(observer);
                }
            },
            node,
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    impl RevealLatch {
        fn threshold(&self) -> f64 {
            self.threshold
        }
    }

    #[test]
    fn test_latch_never_reverts() {
        let mut latch = RevealLatch::new(TITLE_THRESHOLD);
        let states: Vec<bool> = [0.0, 0.4, 0.0, 0.0]
            .into_iter()
            .map(|ratio| latch.observe(ratio, ratio > 0.0))
            .collect();
        assert_eq!(states, vec![false, true, true, true]);
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut latch = RevealLatch::new(DIVIDER_THRESHOLD);
        assert!(!latch.observe(0.1, true));
        assert!(!latch.observe(0.49, true));
        assert!(latch.observe(0.5, true));
    }

    #[test]
    fn test_above_the_fold_reveals_on_first_sample() {
        let mut latch = RevealLatch::new(TITLE_THRESHOLD);
        assert!(latch.observe(1.0, true));
    }

    #[test]
    fn test_zero_threshold_uses_intersecting_flag() {
        let mut latch = RevealLatch::new(0.0);
        assert!(!latch.observe(0.0, false));
        assert!(latch.observe(0.0, true));
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealLatch::new(1.7).threshold(), 1.0);
        assert_eq!(RevealLatch::new(-0.2).threshold(), 0.0);
    }
}
