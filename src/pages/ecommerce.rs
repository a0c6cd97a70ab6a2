use yew::prelude::*;

use super::service_detail::{Feature, ServiceContent, ServiceDetail};
use crate::components::cards::{ProcessStep, ServiceItem};
use crate::components::faq::FaqEntry;

static ECOMMERCE: ServiceContent = ServiceContent {
    title: "Ecommerce Development",
    tagline: "Storefronts that load fast, sell more and scale with your catalogue.",
    hero_image: "/assets/ecommerce_hero.webp",
    intro: "From a first online shop to a multi-vendor marketplace, we plan, design and build \
            ecommerce platforms with secure checkout, clean admin tools and the integrations \
            your operations already depend on.",
    features_heading: "Why Sell With Us",
    features: &[
        Feature { icon: "🛒", title: "Conversion-first UX", desc: "Product pages, carts and checkouts shaped around how your customers actually buy." },
        Feature { icon: "⚡", title: "Performance", desc: "Image pipelines, caching and lean pages keep load times low on every device." },
        Feature { icon: "🔒", title: "Secure by default", desc: "PCI-aware payment flows, hardened admin access and regular security reviews." },
    ],
    process_heading: "Our Ecommerce Process",
    process: &[
        ProcessStep { icon: "🔍", title: "Discovery & Planning", desc: "Goals, catalogue and audience." },
        ProcessStep { icon: "📈", title: "Market Strategy", desc: "Positioning and pricing research." },
        ProcessStep { icon: "🎨", title: "Design Phase", desc: "Wireframes to polished UI." },
        ProcessStep { icon: "💻", title: "Development", desc: "Storefront, admin and integrations." },
        ProcessStep { icon: "🧐", title: "Code Review", desc: "Peer review on every change." },
        ProcessStep { icon: "🧪", title: "Testing & QA", desc: "Checkout, load and device testing." },
        ProcessStep { icon: "🚀", title: "Launch", desc: "Zero-downtime go-live." },
        ProcessStep { icon: "🤝", title: "Support", desc: "Ongoing care and upgrades." },
    ],
    offerings_heading: "Ecommerce Services",
    offerings: &[
        ServiceItem { icon: "📦", title: "Product Catalog Management", desc: "Variants, bulk imports and inventory sync." },
        ServiceItem { icon: "💳", title: "Payment Gateway Integration", desc: "UPI, cards, wallets and EMI options." },
        ServiceItem { icon: "👥", title: "Customer Management", desc: "Accounts, wishlists and order history." },
        ServiceItem { icon: "📊", title: "Admin Dashboard", desc: "Orders, revenue and stock at a glance." },
        ServiceItem { icon: "📣", title: "Marketing & SEO", desc: "Structured data, feeds and campaigns." },
        ServiceItem { icon: "🛡️", title: "Advanced Security", desc: "Fraud checks, backups and monitoring." },
    ],
    faqs: &[
        FaqEntry { question: "Which platforms do you build on?", answer: "Custom builds as well as Shopify and WooCommerce, chosen to fit your catalogue size and budget." },
        FaqEntry { question: "Can you migrate my existing store?", answer: "Yes. Products, customers and order history are migrated with redirects to protect your search rankings." },
        FaqEntry { question: "How long does a store take?", answer: "A focused storefront typically launches in six to ten weeks depending on integrations." },
    ],
};

#[function_component(Ecommerce)]
pub fn ecommerce() -> Html {
    html! { <ServiceDetail content={&ECOMMERCE} /> }
}
