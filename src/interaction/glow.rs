use std::rc::Rc;

use web_sys::{Element, MouseEvent};
use yew::prelude::*;

/// Diameter of the spotlight that follows the pointer inside a card.
pub const GLOW_DIAMETER: f64 = 250.0;
pub const GLOW_FADE_MS: u32 = 500;
const GLOW_OPACITY: f64 = 0.6;

/// Pointer position relative to a hovered container plus the hover flag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlowState {
    pub local_x: f64,
    pub local_y: f64,
    pub hovering: bool,
}

pub enum GlowAction {
    Enter,
    Leave,
    Move {
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
    },
    Recenter {
        width: f64,
        height: f64,
    },
}

/// When the pointer position is followed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlowMode {
    /// Follow the pointer whenever it is over the container.
    Hover,
    /// Follow only while the wrapped field has focus. Leaving re-centres
    /// the glow.
    Focus { focused: bool },
}

impl GlowMode {
    pub fn tracks_pointer(self) -> bool {
        match self {
            GlowMode::Hover => true,
            GlowMode::Focus { focused } => focused,
        }
    }

    pub fn recenters_on_leave(self) -> bool {
        matches!(self, GlowMode::Focus { .. })
    }
}

impl GlowState {
    pub fn enter(self) -> Self {
        Self {
            hovering: true,
            ..self
        }
    }

    pub fn leave(self) -> Self {
        Self {
            hovering: false,
            ..self
        }
    }

    /// `left`/`top` are the container's current bounding box origin in
    /// client coordinates, so page scroll cancels out.
    pub fn track(self, client_x: f64, client_y: f64, left: f64, top: f64) -> Self {
        Self {
            local_x: client_x - left,
            local_y: client_y - top,
            ..self
        }
    }

    pub fn recenter(self, width: f64, height: f64) -> Self {
        Self {
            local_x: width / 2.0,
            local_y: height / 2.0,
            ..self
        }
    }

    pub fn opacity(&self) -> f64 {
        if self.hovering {
            GLOW_OPACITY
        } else {
            0.0
        }
    }

    /// Shows at once, fades out over [`GLOW_FADE_MS`].
    pub fn transition(&self) -> String {
        if self.hovering {
            "none".to_string()
        } else {
            format!("opacity {GLOW_FADE_MS}ms")
        }
    }

    pub fn overlay_style(&self, diameter: f64) -> String {
        let radius = diameter / 2.0;
        format!(
            "position: absolute; width: {diameter}px; height: {diameter}px; \
             left: {left}px; top: {top}px; \
             background: linear-gradient(to right, #38b6ff, #1a4aff, #000433); \
             border-radius: 9999px; filter: blur(48px); mix-blend-mode: screen; \
             pointer-events: none; z-index: 5; \
             transition: {transition}; opacity: {opacity};",
            left = self.local_x - radius,
            top = self.local_y - radius,
            transition = self.transition(),
            opacity = self.opacity(),
        )
    }
}

impl Reducible for GlowState {
    type Action = GlowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            GlowAction::Enter => self.enter(),
            GlowAction::Leave => self.leave(),
            GlowAction::Move {
                client_x,
                client_y,
                left,
                top,
            } => self.track(client_x, client_y, left, top),
            GlowAction::Recenter { width, height } => self.recenter(width, height),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Everything a container needs to drive its own glow overlay.
pub struct HoverGlowHandle {
    pub node: NodeRef,
    pub state: GlowState,
    pub onmouseenter: Callback<MouseEvent>,
    pub onmousemove: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

/// Per-instance hover glow. Each call owns its own state.
#[hook]
pub fn use_hover_glow() -> HoverGlowHandle {
    use_glow(GlowMode::Hover)
}

/// Glow for a form field: follows the pointer only while `focused`.
#[hook]
pub fn use_focus_glow(focused: bool) -> HoverGlowHandle {
    use_glow(GlowMode::Focus { focused })
}

#[hook]
fn use_glow(mode: GlowMode) -> HoverGlowHandle {
    let node = use_node_ref();
    let glow = use_reducer(GlowState::default);

    let onmouseenter = {
        let glow = glow.dispatcher();
        Callback::from(move |_: MouseEvent| glow.dispatch(GlowAction::Enter))
    };

    let onmouseleave = {
        let glow = glow.dispatcher();
        let node = node.clone();
        Callback::from(move |_: MouseEvent| {
            glow.dispatch(GlowAction::Leave);
            if !mode.recenters_on_leave() {
                return;
            }
            let (width, height) = node
                .cast::<Element>()
                .map(|container| {
                    let rect = container.get_bounding_client_rect();
                    (rect.width(), rect.height())
                })
                .unwrap_or((0.0, 0.0));
            glow.dispatch(GlowAction::Recenter { width, height });
        })
    };

    let onmousemove = {
        let glow = glow.dispatcher();
        let node = node.clone();
        Callback::from(move |e: MouseEvent| {
            if !mode.tracks_pointer() {
                return;
            }
            let Some(container) = node.cast::<Element>() else {
                return;
            };
            let rect = container.get_bounding_client_rect();
            glow.dispatch(GlowAction::Move {
                client_x: e.client_x() as f64,
                client_y: e.client_y() as f64,
                left: rect.left(),
                top: rect.top(),
            });
        })
    };

    HoverGlowHandle {
        node,
        state: *glow,
        onmouseenter,
        onmousemove,
        onmouseleave,
    }
}

#[derive(Properties, PartialEq)]
pub struct GlowOverlayProps {
    pub state: GlowState,
    #[prop_or(GLOW_DIAMETER)]
    pub diameter: f64,
}

#[function_component(GlowOverlay)]
pub fn glow_overlay(props: &GlowOverlayProps) -> Html {
    html! {
        <div class="glow-overlay" style={props.state.overlay_style(props.diameter)}></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_position_subtracts_container_origin() {
        let state = GlowState::default().track(120.0, 80.0, 50.0, 50.0);
        assert_eq!((state.local_x, state.local_y), (70.0, 30.0));
    }

    #[test]
    fn test_fresh_rect_absorbs_scroll() {
        // Page scrolled by 300px: the container's client rect moved up
        let state = GlowState::default().track(120.0, 80.0, 50.0, -250.0);
        assert_eq!((state.local_x, state.local_y), (70.0, 330.0));
    }

    #[test]
    fn test_enter_and_leave_toggle_hover_only() {
        let tracked = GlowState::default().track(10.0, 20.0, 0.0, 0.0);
        let entered = tracked.enter();
        assert!(entered.hovering);
        assert_eq!((entered.local_x, entered.local_y), (10.0, 20.0));

        let left = entered.leave();
        assert!(!left.hovering);
        assert_eq!(left.opacity(), 0.0);
    }

    #[test]
    fn test_reducer_keeps_instances_independent() {
        let a = Rc::new(GlowState::default());
        let b = Rc::new(GlowState::default());

        let a = a.reduce(GlowAction::Enter);
        let a = a.reduce(GlowAction::Move {
            client_x: 120.0,
            client_y: 80.0,
            left: 50.0,
            top: 50.0,
        });

        assert!(a.hovering);
        assert_eq!((a.local_x, a.local_y), (70.0, 30.0));
        assert_eq!(*b, GlowState::default());
    }

    #[test]
    fn test_reducer_reuses_unchanged_state() {
        let state = Rc::new(GlowState::default());
        let same = state.clone().reduce(GlowAction::Leave);
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn test_overlay_centred_on_pointer() {
        let style = GlowState::default()
            .track(200.0, 150.0, 0.0, 0.0)
            .enter()
            .overlay_style(GLOW_DIAMETER);
        assert!(style.contains("left: 75px;"));
        assert!(style.contains("top: 25px;"));
        assert!(style.contains("width: 250px;"));
        assert!(style.contains("opacity: 0.6;"));
    }

    #[test]
    fn test_shows_instantly_and_fades_on_hide() {
        let shown = GlowState::default().enter();
        assert!(shown.overlay_style(GLOW_DIAMETER).contains("transition: none;"));

        let hidden = shown.leave();
        assert!(hidden
            .overlay_style(GLOW_DIAMETER)
            .contains("transition: opacity 500ms;"));
    }

    #[test]
    fn test_focus_mode_tracks_only_while_focused() {
        assert!(GlowMode::Hover.tracks_pointer());
        assert!(!GlowMode::Hover.recenters_on_leave());
        assert!(!GlowMode::Focus { focused: false }.tracks_pointer());
        assert!(GlowMode::Focus { focused: true }.tracks_pointer());
        assert!(GlowMode::Focus { focused: false }.recenters_on_leave());
    }

    #[test]
    fn test_recenter_moves_glow_to_middle() {
        let state = Rc::new(GlowState::default().track(5.0, 7.0, 0.0, 0.0).enter());
        let state = state.reduce(GlowAction::Leave);
        let state = state.reduce(GlowAction::Recenter {
            width: 300.0,
            height: 48.0,
        });
        assert!(!state.hovering);
        assert_eq!((state.local_x, state.local_y), (150.0, 24.0));
    }
}
