use yew::prelude::*;

use super::section::{ACCENT_BLUE, DEEP_BLUE, LIGHT_GREY};
use crate::interaction::{use_hover_glow, use_media_query, GlowOverlay, MOBILE_BREAKPOINT};

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub image: Option<AttrValue>,
    /// Delay before the lift transition starts.
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(AnimatedCard)]
pub fn animated_card(props: &AnimatedCardProps) -> Html {
    let glow = use_hover_glow();
    let hovered = glow.state.hovering;

    let style = format!(
        "background-color: {DEEP_BLUE}; padding: 30px; border-radius: 15px; \
         box-shadow: {shadow}; border: 1px solid {border}; transform: {transform}; \
         transition: transform 0.6s ease-out {delay}ms, box-shadow 0.4s ease-out, border 0.4s ease-out; \
         display: flex; flex-direction: column; align-items: center; text-align: center; \
         position: relative; overflow: hidden;",
        shadow = if hovered {
            format!("0 8px 30px rgba(0, 0, 0, 0.7), 0 0 20px {ACCENT_BLUE}80")
        } else {
            "0 4px 15px rgba(0, 0, 0, 0.4)".to_string()
        },
        border = if hovered {
            ACCENT_BLUE.to_string()
        } else {
            format!("{ACCENT_BLUE}20")
        },
        transform = if hovered {
            "translateY(-10px) scale(1.02)"
        } else {
            "translateY(0) scale(1)"
        },
        delay = props.delay_ms,
    );

    html! {
        <div
            ref={glow.node}
            class="animated-card"
            style={style}
            onmouseenter={glow.onmouseenter}
            onmousemove={glow.onmousemove}
            onmouseleave={glow.onmouseleave}
        >
            <GlowOverlay state={glow.state} />
            <div style="position: relative; z-index: 10; display: flex; flex-direction: column; align-items: center; width: 100%;">
                if let Some(image) = &props.image {
                    <img src={image.clone()} alt={props.title.clone()} loading="lazy"
                        style="width: 100%; border-radius: 10px; margin-bottom: 20px; max-height: 180px; object-fit: cover;" />
                }
                if let Some(icon) = &props.icon {
                    <div style={format!("font-size: 3.5rem; color: {ACCENT_BLUE}; margin-bottom: 20px;")}>{icon}</div>
                }
                if !props.title.is_empty() {
                    <h3 style={format!("color: {ACCENT_BLUE}; margin-bottom: 15px; font-size: 1.5rem; font-weight: 700;")}>
                        {&props.title}
                    </h3>
                }
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProcessStepCardProps {
    pub step: ProcessStep,
    pub index: usize,
    #[prop_or_default]
    pub is_last: bool,
}

/// Blob-shaped numbered step with a floating arrow toward the next one.
#[function_component(ProcessStepCard)]
pub fn process_step_card(props: &ProcessStepCardProps) -> Html {
    let glow = use_hover_glow();
    let is_mobile = use_media_query(MOBILE_BREAKPOINT);
    let hovered = glow.state.hovering;

    let style = format!(
        "background: radial-gradient(circle at 30% 30%, {ACCENT_BLUE}25, {DEEP_BLUE}); \
         border-radius: 50% 40% 60% 50% / 50% 60% 40% 50%; padding: 40px 25px; \
         height: 230px; width: 230px; color: #ffffff; display: flex; flex-direction: column; \
         align-items: center; justify-content: center; box-shadow: {}; \
         transition: transform 0.3s ease, box-shadow 0.3s ease; transform: {}; \
         position: relative; overflow: hidden;",
        if hovered {
            "0 0 30px rgba(56,182,255,0.4)"
        } else {
            "0 0 20px rgba(56,182,255,0.25)"
        },
        if hovered { "scale(1.05)" } else { "scale(1)" },
    );

    html! {
        <div class="process-step" style="display: flex; align-items: center; justify-content: center; flex-direction: column; text-align: center; flex: 1 1 260px; max-width: 280px; position: relative;">
            <div
                ref={glow.node}
                style={style}
                onmouseenter={glow.onmouseenter}
                onmousemove={glow.onmousemove}
                onmouseleave={glow.onmouseleave}
            >
                <GlowOverlay state={glow.state} />
                <div style="position: relative; z-index: 10;">
                    <div style="font-size: 2rem; margin-bottom: 10px;">{props.step.icon}</div>
                    <h3 style={format!("font-size: 1.1rem; color: {ACCENT_BLUE}; margin-bottom: 8px;")}>
                        {format!("{}. {}", props.index + 1, props.step.title)}
                    </h3>
                    <p style={format!("color: {LIGHT_GREY}; font-size: 0.9rem; margin: 0;")}>{props.step.desc}</p>
                </div>
            </div>
            if !props.is_last && !is_mobile {
                <div style={format!("font-size: 2rem; color: {ACCENT_BLUE}; margin-top: 10px; animation: floatArrow 2s infinite ease-in-out;")}>
                    {"➜"}
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceLeafCardProps {
    pub service: ServiceItem,
}

#[function_component(ServiceLeafCard)]
pub fn service_leaf_card(props: &ServiceLeafCardProps) -> Html {
    let glow = use_hover_glow();
    let hovered = glow.state.hovering;

    let style = format!(
        "background: linear-gradient(145deg, #000000, {DEEP_BLUE}); border: 1px solid {ACCENT_BLUE}40; \
         border-radius: 70% 30% 60% 40% / 40% 60% 30% 70%; padding: 50px 30px; color: #ffffff; \
         box-shadow: {}; display: flex; flex-direction: column; align-items: center; \
         text-align: center; position: relative; overflow: hidden; \
         transition: box-shadow 0.4s ease, transform 0.4s ease; transform: {};",
        if hovered {
            "0 0 30px #000433"
        } else {
            "0 0 30px rgba(56,182,255,0.1)"
        },
        if hovered { "translateY(-6px)" } else { "translateY(0)" },
    );

    html! {
        <div
            ref={glow.node}
            class="service-leaf"
            style={style}
            onmouseenter={glow.onmouseenter}
            onmousemove={glow.onmousemove}
            onmouseleave={glow.onmouseleave}
        >
            <GlowOverlay state={glow.state} />
            <div style="position: relative; z-index: 10;">
                <div style="font-size: 2.5rem; margin-bottom: 15px; animation: floatIcon 3s infinite ease-in-out;">
                    {props.service.icon}
                </div>
                <h3 style={format!("color: {ACCENT_BLUE}; font-size: 1.3rem; margin-bottom: 10px;")}>{props.service.title}</h3>
                <p style={format!("color: {LIGHT_GREY}; font-size: 0.95rem; line-height: 1.6;")}>{props.service.desc}</p>
            </div>
        </div>
    }
}
