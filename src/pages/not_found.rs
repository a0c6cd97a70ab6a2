use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::section::{AccentDivider, SectionTitle};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found" style="background: #000; color: #fff; min-height: 70vh; padding-top: 120px; text-align: center;">
            <SectionTitle>{"Page not found"}</SectionTitle>
            <AccentDivider />
            <Link<Route> to={Route::Home} classes="hero-cta animate-gradient">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
