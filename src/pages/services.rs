use yew::prelude::*;
use yew_router::prelude::*;

use super::service_detail::grid_style;
use crate::components::cards::AnimatedCard;
use crate::components::faq::{FaqEntry, FaqList};
use crate::components::section::{AccentDivider, SectionTitle, LIGHT_GREY};
use crate::components::testimonials::Testimonials;
use crate::interaction::{use_media_query, MOBILE_BREAKPOINT};
use crate::Route;

const CATALOGUE: [(&str, &str, &str, Route); 6] = [
    ("/assets/website_design_hero.webp", "Website Design", "Custom, WordPress and landing page design.", Route::WebsiteDesign),
    ("/assets/ecommerce_hero.webp", "Ecommerce", "Stores, payments and catalogue management.", Route::Ecommerce),
    ("/assets/mobile_app_hero.webp", "Mobile Apps", "Cross-platform apps with native polish.", Route::MobileApp),
    ("/assets/digital_marketing_hero.webp", "Digital Marketing", "SEO, ads, social and automation.", Route::DigitalMarketing),
    ("/assets/portfolio_hero.webp", "Portfolio Websites", "Personal sites for students and creators.", Route::Portfolio),
    ("/assets/student_projects_hero.webp", "Student Projects", "Mentored academic projects with documentation.", Route::StudentProjects),
];

const SERVICE_FAQS: [FaqEntry; 5] = [
    FaqEntry { question: "What services do you offer?", answer: "We offer web development, LMS solutions, server management, and cybersecurity services." },
    FaqEntry { question: "Do you provide support after project completion?", answer: "Yes! We provide continuous support and upgrades post-project." },
    FaqEntry { question: "What security standards do you follow for web designing?", answer: "We follow strict protocols ensuring client data is fully protected at every stage, with thorough security checks and utmost confidentiality." },
    FaqEntry { question: "How do you decide the best technology for my project?", answer: "We analyze your project goals, requirements, and budget to select technologies ensuring scalability, performance, and maintainability." },
    FaqEntry { question: "How are resources assigned to a new project?", answer: "Resources are assigned based on project scope and expertise required. Skilled designers, developers, and managers are allocated for timely, quality delivery." },
];

#[function_component(Services)]
pub fn services() -> Html {
    let is_mobile = use_media_query(MOBILE_BREAKPOINT);

    html! {
        <div class="services-page" style="background: #000; color: #fff; padding-top: 96px;">
            <SectionTitle>{"Our Services"}</SectionTitle>
            <AccentDivider />
            <div style={grid_style(is_mobile, 300)}>
                { for CATALOGUE.iter().enumerate().map(|(i, (image, title, desc, route))| html! {
                    <Link<Route> to={route.clone()} classes="service-link">
                        <AnimatedCard title={*title} image={Some(AttrValue::Static(*image))} delay_ms={i as u32 * 80}>
                            <p style={format!("color: {LIGHT_GREY}; line-height: 1.6;")}>{*desc}</p>
                        </AnimatedCard>
                    </Link<Route>>
                }) }
            </div>
            <Testimonials />
            <FaqList items={SERVICE_FAQS.to_vec()} />
        </div>
    }
}
