use yew::prelude::*;
use yew_router::prelude::*;

use crate::interaction::{use_media_query, MOBILE_BREAKPOINT};
use crate::Route;

const SERVICE_LINKS: [(&str, Route); 5] = [
    ("Website Design", Route::WebsiteDesign),
    ("Ecommerce", Route::Ecommerce),
    ("Mobile Apps", Route::MobileApp),
    ("Digital Marketing", Route::DigitalMarketing),
    ("Student Projects", Route::StudentProjects),
];

const COMPANY_LINKS: [(&str, Route); 4] = [
    ("About Us", Route::About),
    ("Portfolio", Route::Portfolio),
    ("Contact", Route::Contact),
    ("Privacy Policy", Route::PrivacyPolicy),
];

fn link_column(heading: &'static str, links: &[(&'static str, Route)]) -> Html {
    html! {
        <div class="footer-column">
            <h4 style="color: #38b6ff; font-size: 1.1rem; margin-bottom: 16px;">{heading}</h4>
            <ul style="list-style: none; padding: 0; display: flex; flex-direction: column; gap: 10px;">
                { for links.iter().map(|(label, route)| html! {
                    <li>
                        <Link<Route> to={route.clone()} classes="footer-link">{*label}</Link<Route>>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let is_mobile = use_media_query(MOBILE_BREAKPOINT);

    let grid_style = format!(
        "max-width: 72rem; margin: 0 auto; display: grid; gap: 40px; grid-template-columns: {};",
        if is_mobile { "1fr" } else { "2fr 1fr 1fr 1.5fr" }
    );

    html! {
        <footer class="site-footer" style="background: #000; color: #bbbbbb; padding: 64px 24px 24px; border-top: 1px solid rgba(56,182,255,0.15);">
            <div style={grid_style}>
                <div>
                    <img src="/assets/logo.svg" alt="logo" style="width: 110px; margin-bottom: 16px;" />
                    <p style="line-height: 1.7;">
                        {"We design, build and grow digital products for ambitious brands."}
                    </p>
                </div>
                { link_column("Services", &SERVICE_LINKS) }
                { link_column("Company", &COMPANY_LINKS) }
                <div class="footer-column">
                    <h4 style="color: #38b6ff; font-size: 1.1rem; margin-bottom: 16px;">{"Get in touch"}</h4>
                    <p><a href="mailto:hello@ucentric.in" style="color: inherit;">{"hello@ucentric.in"}</a></p>
                    <p><a href="tel:+919000000000" style="color: inherit;">{"+91 90000 00000"}</a></p>
                </div>
            </div>
            <p style="text-align: center; margin-top: 48px; font-size: 0.85rem; color: #666;">
                {"© Ucentric. All rights reserved."}
            </p>
        </footer>
    }
}
