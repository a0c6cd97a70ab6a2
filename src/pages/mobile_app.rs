use yew::prelude::*;

use super::service_detail::{Feature, ServiceContent, ServiceDetail};
use crate::components::cards::{ProcessStep, ServiceItem};
use crate::components::faq::FaqEntry;

static MOBILE_APP: ServiceContent = ServiceContent {
    title: "Mobile App Development",
    tagline: "Native-feeling apps for iOS and Android, built once and shipped with care.",
    hero_image: "/assets/mobile_app_hero.webp",
    intro: "We take app ideas from sketch to store listing: product strategy, interface design, \
            cross-platform development, release management and the support that keeps ratings high.",
    features_heading: "What You Get",
    features: &[
        Feature { icon: "📱", title: "Cross-platform", desc: "One codebase for iOS and Android without giving up native polish." },
        Feature { icon: "🔔", title: "Engagement built in", desc: "Push notifications, deep links and analytics from day one." },
        Feature { icon: "☁️", title: "Scalable backends", desc: "APIs and cloud services sized for launch day and beyond." },
    ],
    process_heading: "How We Build Apps",
    process: &[
        ProcessStep { icon: "🧭", title: "Discovery & Strategy", desc: "Users, goals and scope." },
        ProcessStep { icon: "🎨", title: "UI/UX Design", desc: "Flows and interactive prototypes." },
        ProcessStep { icon: "💻", title: "Development", desc: "Sprints with weekly builds." },
        ProcessStep { icon: "🧪", title: "Testing & QA", desc: "Real devices, real networks." },
        ProcessStep { icon: "🚀", title: "Deployment & Support", desc: "Store release and upkeep." },
    ],
    offerings_heading: "App Services",
    offerings: &[
        ServiceItem { icon: "🛠️", title: "Custom App Development", desc: "Apps shaped around your business logic." },
        ServiceItem { icon: "✏️", title: "App UI/UX Design", desc: "Interfaces that feel obvious on first use." },
        ServiceItem { icon: "🔧", title: "Maintenance & Support", desc: "OS updates, fixes and new features." },
    ],
    faqs: &[
        FaqEntry { question: "Do you publish to the app stores?", answer: "Yes. We prepare listings, handle review feedback and manage releases on both stores." },
        FaqEntry { question: "Can the app work offline?", answer: "Where it makes sense we cache data locally and sync when the connection returns." },
    ],
};

#[function_component(MobileApp)]
pub fn mobile_app() -> Html {
    html! { <ServiceDetail content={&MOBILE_APP} /> }
}
