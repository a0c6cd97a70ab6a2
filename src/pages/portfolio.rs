use yew::prelude::*;

use super::service_detail::{Feature, ServiceContent, ServiceDetail};
use crate::components::cards::{ProcessStep, ServiceItem};
use crate::components::faq::FaqEntry;

static PORTFOLIO: ServiceContent = ServiceContent {
    title: "Portfolio Websites",
    tagline: "A personal site that shows your best work the way you want it seen.",
    hero_image: "/assets/portfolio_hero.webp",
    intro: "Students, creators and professionals all need a home on the web that is theirs. \
            We design portfolio sites that put your work first and are easy to keep current.",
    features_heading: "Made For Showing Off",
    features: &[
        Feature { icon: "🖼️", title: "Work-first layouts", desc: "Galleries and case studies that let projects speak." },
        Feature { icon: "🪪", title: "Your own domain", desc: "Domain, hosting and email set up for you." },
        Feature { icon: "✏️", title: "Easy updates", desc: "Add new projects in minutes without touching code." },
    ],
    process_heading: "How It Comes Together",
    process: &[
        ProcessStep { icon: "☕", title: "Consultation", desc: "Your story and your audience." },
        ProcessStep { icon: "🎨", title: "Design", desc: "A look that matches you." },
        ProcessStep { icon: "💻", title: "Build", desc: "Fast, responsive pages." },
        ProcessStep { icon: "🚀", title: "Publish", desc: "Live on your domain." },
    ],
    offerings_heading: "Who We Build For",
    offerings: &[
        ServiceItem { icon: "🎓", title: "College Students & Graduates", desc: "Stand out in placements and applications." },
        ServiceItem { icon: "🏢", title: "Corporates & Small Businesses", desc: "Team and company showcases." },
        ServiceItem { icon: "📸", title: "Influencers & Content Creators", desc: "Media kits and brand collaborations." },
        ServiceItem { icon: "👔", title: "Personal Branding Professionals", desc: "Speakers, coaches and consultants." },
        ServiceItem { icon: "🌟", title: "Celebrities & Public Figures", desc: "Official sites with press sections." },
        ServiceItem { icon: "🧩", title: "Custom portfolio", desc: "Anything else you have in mind." },
    ],
    faqs: &[
        FaqEntry { question: "How fast can my portfolio go live?", answer: "Most portfolio sites are ready within two weeks once we have your content." },
        FaqEntry { question: "Can I move it later?", answer: "Yes. You own the domain and the content, and we hand over everything you need." },
    ],
};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! { <ServiceDetail content={&PORTFOLIO} /> }
}
