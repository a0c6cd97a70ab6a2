use yew::prelude::*;

use super::service_detail::{Feature, ServiceContent, ServiceDetail};
use crate::components::cards::{ProcessStep, ServiceItem};
use crate::components::faq::FaqEntry;

static DIGITAL_MARKETING: ServiceContent = ServiceContent {
    title: "Digital Marketing",
    tagline: "Campaigns measured in leads and revenue, not just impressions.",
    hero_image: "/assets/digital_marketing_hero.webp",
    intro: "Search, social, content and automation planned as one system. We audit where you are, \
            decide where the growth is and report on it every month in plain numbers.",
    features_heading: "Growth, Measured",
    features: &[
        Feature { icon: "🎯", title: "Targeted", desc: "Audiences built from your best customers, not guesses." },
        Feature { icon: "📊", title: "Transparent", desc: "Dashboards and monthly reports you can actually read." },
        Feature { icon: "🤖", title: "Automated", desc: "Nurture flows and chatbots that follow up for you." },
    ],
    process_heading: "Our Marketing Cycle",
    process: &[
        ProcessStep { icon: "🔍", title: "Research & Audit", desc: "Channels, competitors, baseline." },
        ProcessStep { icon: "🗂️", title: "Strategy & Planning", desc: "Targets and channel mix." },
        ProcessStep { icon: "🚀", title: "Execution", desc: "Campaigns go live." },
        ProcessStep { icon: "🔧", title: "Optimization", desc: "Test, learn, reallocate." },
        ProcessStep { icon: "📈", title: "Reporting & Growth", desc: "Results and next steps." },
    ],
    offerings_heading: "Marketing Services",
    offerings: &[
        ServiceItem { icon: "🔎", title: "SEO", desc: "Technical fixes, content and links." },
        ServiceItem { icon: "💰", title: "SEM / PPC", desc: "Search and shopping ads tuned for ROAS." },
        ServiceItem { icon: "📱", title: "Social Media Marketing", desc: "Content calendars and paid social." },
        ServiceItem { icon: "💼", title: "LinkedIn Marketing", desc: "B2B reach and lead forms." },
        ServiceItem { icon: "✍️", title: "Content Marketing", desc: "Articles, guides and case studies." },
        ServiceItem { icon: "📧", title: "Email Marketing", desc: "Newsletters and lifecycle journeys." },
        ServiceItem { icon: "🤝", title: "Influencer & Affiliate", desc: "Partnerships that convert." },
        ServiceItem { icon: "⭐", title: "Online Reputation (ORM)", desc: "Reviews and brand mentions." },
        ServiceItem { icon: "🧪", title: "Conversion Rate (CRO)", desc: "Experiments on key pages." },
        ServiceItem { icon: "📉", title: "Analytics & Reporting", desc: "Tracking you can trust." },
        ServiceItem { icon: "💬", title: "WhatsApp & Chatbot", desc: "Conversational sales and support." },
        ServiceItem { icon: "🎬", title: "Video & Reels Marketing", desc: "Short-form video that travels." },
        ServiceItem { icon: "🧲", title: "Lead Generation", desc: "Funnels built for qualified leads." },
        ServiceItem { icon: "🧠", title: "AI-Powered Marketing", desc: "Smarter targeting and creative." },
    ],
    faqs: &[
        FaqEntry { question: "How soon will I see results?", answer: "Paid campaigns show data within days. SEO and content usually compound over three to six months." },
        FaqEntry { question: "Do you lock us into long contracts?", answer: "No. Engagements run month to month once the initial setup is complete." },
    ],
};

#[function_component(DigitalMarketing)]
pub fn digital_marketing() -> Html {
    html! { <ServiceDetail content={&DIGITAL_MARKETING} /> }
}
