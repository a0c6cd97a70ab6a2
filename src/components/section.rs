use yew::prelude::*;

use crate::interaction::{
    use_media_query, use_reveal, DIVIDER_THRESHOLD, MOBILE_BREAKPOINT, TITLE_THRESHOLD,
};

pub const ACCENT_BLUE: &str = "#38b6ff";
pub const DEEP_BLUE: &str = "#000433";
pub const LIGHT_GREY: &str = "#bbbbbb";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Center,
    Left,
}

impl Align {
    fn text_align(self) -> &'static str {
        match self {
            Align::Center => "center",
            Align::Left => "left",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub children: Children,
    #[prop_or_default]
    pub align: Align,
    /// Extra inline declarations appended after the defaults.
    #[prop_or_default]
    pub style: AttrValue,
}

/// Heading that fades and slides in the first time it scrolls into view.
#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), TITLE_THRESHOLD);
    let is_mobile = use_media_query(MOBILE_BREAKPOINT);

    let style = format!(
        "font-size: {}; font-weight: 800; color: #ffffff; padding-top: {}; padding-bottom: 20px; \
         text-align: {}; letter-spacing: -0.5px; opacity: {}; transform: {}; \
         transition: opacity 0.6s ease-out, transform 0.6s ease-out; {}",
        if is_mobile { "2.2rem" } else { "3rem" },
        if is_mobile { "40px" } else { "60px" },
        props.align.text_align(),
        if visible { 1 } else { 0 },
        if visible { "translateY(0)" } else { "translateY(20px)" },
        props.style,
    );

    html! {
        <h2 ref={node} class="section-title" style={style}>
            { for props.children.iter() }
        </h2>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccentDividerProps {
    #[prop_or_default]
    pub align: Align,
}

/// Underline bar that grows from 0 to 100px once half of it is visible.
#[function_component(AccentDivider)]
pub fn accent_divider(props: &AccentDividerProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), DIVIDER_THRESHOLD);

    let style = format!(
        "width: {}; height: 4px; background-color: {}; margin: {}; \
         transition: width 0.6s ease-out; border-radius: 2px;",
        if visible { "100px" } else { "0px" },
        ACCENT_BLUE,
        match props.align {
            Align::Center => "0 auto 50px auto",
            Align::Left => "0 0 50px 0",
        },
    );

    html! { <div ref={node} class="accent-divider" style={style}></div> }
}
