use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::window;

mod config;
mod styles;
mod interaction;
mod contact {
    pub mod relay;
}
mod components {
    pub mod toast;
    pub mod section;
    pub mod cards;
    pub mod faq;
    pub mod stat;
    pub mod nav;
    pub mod footer;
    pub mod enquiry_form;
    pub mod testimonials;
}
mod pages {
    pub mod service_detail;
    pub mod home;
    pub mod about;
    pub mod services;
    pub mod contact;
    pub mod ecommerce;
    pub mod mobile_app;
    pub mod website_design;
    pub mod digital_marketing;
    pub mod portfolio;
    pub mod student_projects;
    pub mod privacy;
    pub mod not_found;
}

use components::{footer::Footer, nav::Navbar, toast::Toaster};
use interaction::CustomCursor;
use pages::{
    about::About,
    contact::Contact,
    digital_marketing::DigitalMarketing,
    ecommerce::Ecommerce,
    home::Home,
    mobile_app::MobileApp,
    not_found::NotFound,
    portfolio::Portfolio,
    privacy::PrivacyPolicy,
    services::Services,
    student_projects::StudentProjects,
    website_design::WebsiteDesign,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/About")]
    About,
    #[at("/ServicePage")]
    Services,
    #[at("/Contact")]
    Contact,
    #[at("/Ecommerce")]
    Ecommerce,
    #[at("/Mobileapp")]
    MobileApp,
    #[at("/Websitedesign")]
    WebsiteDesign,
    #[at("/Digitalmarketing")]
    DigitalMarketing,
    #[at("/Portfolio")]
    Portfolio,
    #[at("/StudentProjects")]
    StudentProjects,
    #[at("/PrivacyPolicy")]
    PrivacyPolicy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Ecommerce => {
            info!("Rendering Ecommerce page");
            html! { <Ecommerce /> }
        }
        Route::MobileApp => {
            info!("Rendering Mobile App page");
            html! { <MobileApp /> }
        }
        Route::WebsiteDesign => {
            info!("Rendering Website Design page");
            html! { <WebsiteDesign /> }
        }
        Route::DigitalMarketing => {
            info!("Rendering Digital Marketing page");
            html! { <DigitalMarketing /> }
        }
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        }
        Route::StudentProjects => {
            info!("Rendering Student Projects page");
            html! { <StudentProjects /> }
        }
        Route::PrivacyPolicy => {
            info!("Rendering Privacy Policy page");
            html! { <PrivacyPolicy /> }
        }
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        }
    }
}

/// Jumps back to the top of the page whenever the route path changes.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let path = use_location().map(|location| location.path().to_string());

    use_effect_with_deps(
        |_| {
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        path,
    );

    html! {}
}

#[function_component]
fn App() -> Html {
    html! {
        <div class="app" style="cursor: none;">
            <Toaster>
                <BrowserRouter>
                    <ScrollToTop />
                    <Navbar />
                    <Switch<Route> render={switch} />
                    <Footer />
                </BrowserRouter>
            </Toaster>
            <CustomCursor />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");
    styles::install_global_styles();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
