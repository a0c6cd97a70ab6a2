use yew::prelude::*;
use yew_router::prelude::*;

use super::service_detail::grid_style;
use crate::components::cards::AnimatedCard;
use crate::components::enquiry_form::EnquiryForm;
use crate::components::faq::{FaqEntry, FaqList};
use crate::components::section::{AccentDivider, SectionTitle, LIGHT_GREY};
use crate::components::stat::StatGrid;
use crate::interaction::{use_media_query, MOBILE_BREAKPOINT};
use crate::Route;

pub const STATS: &[(&str, &str)] = &[
    ("2+", "Years of Expertise"),
    ("56+", "Clients Globally"),
    ("150+", "Dedicated Customers"),
    ("70+", "Completed Projects"),
];

const SERVICES: [(&str, &str, &str, Route); 4] = [
    ("🎨", "Website Design", "Responsive, accessible sites that convert visitors into leads.", Route::WebsiteDesign),
    ("🛒", "Ecommerce", "Storefronts with secure checkout and tidy admin tools.", Route::Ecommerce),
    ("📱", "Mobile Apps", "iOS and Android apps from prototype to store listing.", Route::MobileApp),
    ("📈", "Digital Marketing", "SEO, ads and social campaigns measured in revenue.", Route::DigitalMarketing),
];

const HOME_FAQS: [FaqEntry; 3] = [
    FaqEntry { question: "What services do you offer?", answer: "Web design and development, ecommerce, mobile apps, digital marketing and academic project mentoring." },
    FaqEntry { question: "Do you provide support after project completion?", answer: "Yes! We provide continuous support and upgrades post-project." },
    FaqEntry { question: "How do you decide the best technology for my project?", answer: "We look at your goals, requirements and budget and pick technology that stays fast and maintainable." },
];

#[function_component(Hero)]
fn hero() -> Html {
    let is_mobile = use_media_query(MOBILE_BREAKPOINT);

    html! {
        <header id="hero" style="position: relative; min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; overflow: hidden; color: #fff;">
            <video autoplay={true} loop={true} muted={true} playsinline={true}
                style="position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; z-index: 0;">
                <source src="/assets/bg_video.mp4" type="video/mp4" />
            </video>
            <div style="position: relative; z-index: 10; display: flex; flex-direction: column; align-items: center; gap: 24px; padding: 0 24px; text-align: center; max-width: 1200px;">
                <h1 class="animate-gradient" style={format!(
                    "font-size: {}; font-weight: 500; line-height: 1.1; background-image: linear-gradient(to right, #000433, #38b6ff); -webkit-background-clip: text; color: transparent; animation: fadeInUp 0.6s ease-out 0.8s both;",
                    if is_mobile { "3rem" } else { "5.5rem" }
                )}>
                    {"Shaping imagination into digital success."}
                </h1>
                <p style="font-size: 1.1rem; color: rgba(255,255,255,0.75); max-width: 600px; animation: fadeInUp 0.5s ease-out 1s both;">
                    {"Empowering digital growth and transforming imagination into meaningful interactive experiences."}
                </p>
            </div>
        </header>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let is_mobile = use_media_query(MOBILE_BREAKPOINT);

    html! {
        <div class="home-page" style="background: #000; color: #fff;">
            <Hero />

            <section class="home-services">
                <SectionTitle>{"What We Do"}</SectionTitle>
                <AccentDivider />
                <div style={grid_style(is_mobile, 240)}>
                    { for SERVICES.iter().enumerate().map(|(i, (icon, title, desc, route))| html! {
                        <Link<Route> to={route.clone()} classes="service-link">
                            <AnimatedCard title={*title} icon={Some(AttrValue::Static(*icon))} delay_ms={i as u32 * 100}>
                                <p style={format!("color: {LIGHT_GREY}; line-height: 1.6;")}>{*desc}</p>
                            </AnimatedCard>
                        </Link<Route>>
                    }) }
                </div>
            </section>

            <section class="home-stats" style="padding: 80px 24px;">
                <StatGrid stats={STATS} />
            </section>

            <FaqList items={HOME_FAQS.to_vec()} />

            <section class="home-enquiry" style="max-width: 48rem; margin: 0 auto; padding: 40px 24px 80px;">
                <EnquiryForm />
            </section>
        </div>
    }
}
