use yew::prelude::*;

use crate::components::enquiry_form::EnquiryForm;
use crate::components::section::{AccentDivider, Align, SectionTitle, ACCENT_BLUE, LIGHT_GREY};
use crate::interaction::{use_hover_glow, use_media_query, GlowOverlay, MOBILE_BREAKPOINT};

const DETAILS: [(&str, &str, &str); 3] = [
    ("📞", "Call us", "+91 90000 00000"),
    ("✉️", "Email", "hello@ucentric.in"),
    ("📍", "Visit", "Kochi, Kerala, India"),
];

#[derive(Properties, PartialEq)]
struct DetailRowProps {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
}

#[function_component(DetailRow)]
fn detail_row(props: &DetailRowProps) -> Html {
    let glow = use_hover_glow();

    html! {
        <div
            ref={glow.node}
            class="contact-detail"
            style="position: relative; overflow: hidden; display: flex; gap: 16px; align-items: center; padding: 20px; border-radius: 12px; border: 1px solid rgba(56,182,255,0.2); background: #000814;"
            onmouseenter={glow.onmouseenter}
            onmousemove={glow.onmousemove}
            onmouseleave={glow.onmouseleave}
        >
            <GlowOverlay state={glow.state} />
            <span style="position: relative; z-index: 10; font-size: 1.75rem;">{props.icon}</span>
            <div style="position: relative; z-index: 10;">
                <p style={format!("color: {ACCENT_BLUE}; font-weight: 600;")}>{props.label}</p>
                <p style={format!("color: {LIGHT_GREY};")}>{props.value}</p>
            </div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let is_mobile = use_media_query(MOBILE_BREAKPOINT);

    html! {
        <div class="contact-page" style="background: #000; color: #fff; padding-top: 96px;">
            <div style={format!(
                "display: grid; gap: 48px; max-width: 72rem; margin: 0 auto; padding: 48px 24px; grid-template-columns: {};",
                if is_mobile { "1fr" } else { "1fr 1.3fr" }
            )}>
                <section>
                    <SectionTitle align={Align::Left}>{"Let's Talk"}</SectionTitle>
                    <AccentDivider align={Align::Left} />
                    <p style={format!("color: {LIGHT_GREY}; line-height: 1.8; margin-bottom: 32px;")}>
                        {"Tell us what you are building. We reply to every enquiry within one working day."}
                    </p>
                    <div style="display: flex; flex-direction: column; gap: 16px;">
                        { for DETAILS.iter().map(|(icon, label, value)| html! {
                            <DetailRow icon={*icon} label={*label} value={*value} />
                        }) }
                    </div>
                </section>
                <EnquiryForm />
            </div>
        </div>
    }
}
