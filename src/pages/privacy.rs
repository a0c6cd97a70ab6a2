use yew::prelude::*;

use crate::components::section::{AccentDivider, SectionTitle, ACCENT_BLUE, LIGHT_GREY};

const SECTIONS: [(&str, &str); 6] = [
    ("Information we collect", "When you send an enquiry we receive the name, email address, phone number, service of interest and project description you enter. We do not collect anything else through this site."),
    ("How we use it", "Enquiry details are used only to reply to you and to prepare a proposal. We never sell or rent your information."),
    ("Form processing", "Enquiries are delivered to us by email through a third-party form relay. The relay processes the submission solely to forward it."),
    ("Cookies", "This site does not set tracking cookies. Your browser may cache assets to load pages faster."),
    ("Your choices", "You can ask us to correct or delete the details you sent at any time by emailing hello@ucentric.in."),
    ("Changes", "If this policy changes we will update this page and the date below."),
];

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="privacy-page" style="background: #000; color: #fff; padding: 96px 24px 64px;">
            <SectionTitle>{"Privacy Policy"}</SectionTitle>
            <AccentDivider />
            <div style="max-width: 48rem; margin: 0 auto;">
                { for SECTIONS.iter().map(|(heading, body)| html! {
                    <section style="margin-bottom: 32px;">
                        <h3 style={format!("color: {ACCENT_BLUE}; font-size: 1.3rem; margin-bottom: 8px;")}>{*heading}</h3>
                        <p style={format!("color: {LIGHT_GREY}; line-height: 1.8;")}>{*body}</p>
                    </section>
                }) }
                <p style="color: #666; font-size: 0.85rem;">{"Last updated: January 2025"}</p>
            </div>
        </div>
    }
}
