use yew::prelude::*;

use super::service_detail::{Feature, ServiceContent, ServiceDetail};
use crate::components::cards::{ProcessStep, ServiceItem};
use crate::components::faq::FaqEntry;

static WEBSITE_DESIGN: ServiceContent = ServiceContent {
    title: "Website Design",
    tagline: "Sites that look sharp, read clearly and turn visitors into enquiries.",
    hero_image: "/assets/website_design_hero.webp",
    intro: "Every site starts from your audience and your goals. We design responsive, accessible \
            websites with the content structure, motion and performance that make a brand feel current.",
    features_heading: "Design That Works",
    features: &[
        Feature { icon: "📐", title: "Responsive layouts", desc: "Pixel-checked from small phones to wide monitors." },
        Feature { icon: "♿", title: "Accessible", desc: "Contrast, keyboard navigation and semantic markup throughout." },
        Feature { icon: "🔎", title: "Search ready", desc: "Fast pages, clean URLs and structured metadata." },
    ],
    process_heading: "From Brief To Launch",
    process: &[
        ProcessStep { icon: "📝", title: "Brief", desc: "Goals, audience and tone." },
        ProcessStep { icon: "🗺️", title: "Sitemap", desc: "Structure and content plan." },
        ProcessStep { icon: "🎨", title: "Design", desc: "Mockups and motion studies." },
        ProcessStep { icon: "💻", title: "Build", desc: "Responsive development." },
        ProcessStep { icon: "🚀", title: "Launch", desc: "Go-live and handover." },
    ],
    offerings_heading: "Website Design Services",
    offerings: &[
        ServiceItem { icon: "🎯", title: "Custom Web Design", desc: "Bespoke designs with no templates." },
        ServiceItem { icon: "📰", title: "WordPress Design", desc: "Themes your team can edit with confidence." },
        ServiceItem { icon: "🧩", title: "Web UI/UX", desc: "Flows tested with real users." },
        ServiceItem { icon: "🛍️", title: "E-commerce Website Design", desc: "Storefronts that guide buyers to checkout." },
        ServiceItem { icon: "🚩", title: "Landing Page Design", desc: "Campaign pages focused on one action." },
        ServiceItem { icon: "⚙️", title: "Web App Design / AMP", desc: "Dashboards and lightning-fast mobile pages." },
    ],
    faqs: &[
        FaqEntry { question: "Will I be able to update the site myself?", answer: "Yes. We set up a content workflow that fits your team and walk you through it at handover." },
        FaqEntry { question: "Do you write the content?", answer: "We can. Our copywriters work alongside design so words and layout are planned together." },
    ],
};

#[function_component(WebsiteDesign)]
pub fn website_design() -> Html {
    html! { <ServiceDetail content={&WEBSITE_DESIGN} /> }
}
