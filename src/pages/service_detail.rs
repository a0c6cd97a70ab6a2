use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::{AnimatedCard, ProcessStep, ProcessStepCard, ServiceItem, ServiceLeafCard};
use crate::components::faq::{FaqEntry, FaqList};
use crate::components::section::{AccentDivider, SectionTitle, ACCENT_BLUE, LIGHT_GREY};
use crate::interaction::{use_media_query, MOBILE_BREAKPOINT};
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// Copy for one service landing page. Every service page renders through
/// [`ServiceDetail`].
#[derive(Debug, PartialEq)]
pub struct ServiceContent {
    pub title: &'static str,
    pub tagline: &'static str,
    pub hero_image: &'static str,
    pub intro: &'static str,
    pub features_heading: &'static str,
    pub features: &'static [Feature],
    pub process_heading: &'static str,
    pub process: &'static [ProcessStep],
    pub offerings_heading: &'static str,
    pub offerings: &'static [ServiceItem],
    pub faqs: &'static [FaqEntry],
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub content: &'static ServiceContent,
}

pub fn grid_style(is_mobile: bool, min_width: u32) -> String {
    format!(
        "display: grid; gap: 30px; max-width: 72rem; margin: 0 auto; padding: 0 24px; \
         grid-template-columns: {};",
        if is_mobile {
            "1fr".to_string()
        } else {
            format!("repeat(auto-fit, minmax({min_width}px, 1fr))")
        }
    )
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let content = props.content;
    let is_mobile = use_media_query(MOBILE_BREAKPOINT);

    html! {
        <div class="service-detail" style="background: #000; color: #fff; padding-top: 96px;">
            <header class="service-hero" style={format!(
                "display: flex; flex-direction: {}; align-items: center; gap: 48px; max-width: 72rem; margin: 0 auto; padding: 48px 24px;",
                if is_mobile { "column" } else { "row" }
            )}>
                <div style="flex: 1; animation: fadeInUp 0.8s ease-out;">
                    <h1 class="animate-gradient" style={format!(
                        "font-size: {}; font-weight: 800; background-image: linear-gradient(to right, {ACCENT_BLUE}, #1a4aff, #000433); -webkit-background-clip: text; color: transparent;",
                        if is_mobile { "2.5rem" } else { "4rem" }
                    )}>
                        {content.title}
                    </h1>
                    <p style={format!("color: {LIGHT_GREY}; font-size: 1.15rem; line-height: 1.7; margin: 24px 0;")}>
                        {content.tagline}
                    </p>
                    <Link<Route> to={Route::Contact} classes="hero-cta animate-gradient">
                        {"Start your project ➜"}
                    </Link<Route>>
                </div>
                <img src={content.hero_image} alt={content.title} loading="lazy"
                    style="flex: 1; width: 100%; max-width: 520px; border-radius: 16px; animation: floatIcon 6s infinite ease-in-out;" />
            </header>

            <section style="max-width: 56rem; margin: 0 auto; padding: 0 24px; text-align: center;">
                <p style={format!("color: {LIGHT_GREY}; font-size: 1.1rem; line-height: 1.8;")}>{content.intro}</p>
            </section>

            <section class="service-features">
                <SectionTitle>{content.features_heading}</SectionTitle>
                <AccentDivider />
                <div style={grid_style(is_mobile, 260)}>
                    { for content.features.iter().enumerate().map(|(i, feature)| html! {
                        <AnimatedCard title={feature.title} icon={Some(AttrValue::Static(feature.icon))} delay_ms={i as u32 * 100}>
                            <p style={format!("color: {LIGHT_GREY}; line-height: 1.6;")}>{feature.desc}</p>
                        </AnimatedCard>
                    }) }
                </div>
            </section>

            <section class="service-process">
                <SectionTitle>{content.process_heading}</SectionTitle>
                <AccentDivider />
                <div style="display: flex; flex-wrap: wrap; justify-content: center; gap: 24px; max-width: 80rem; margin: 0 auto; padding: 0 24px;">
                    { for content.process.iter().enumerate().map(|(index, step)| html! {
                        <ProcessStepCard step={step.clone()} index={index} is_last={index + 1 == content.process.len()} />
                    }) }
                </div>
            </section>

            <section class="service-offerings">
                <SectionTitle>{content.offerings_heading}</SectionTitle>
                <AccentDivider />
                <div style={grid_style(is_mobile, 280)}>
                    { for content.offerings.iter().map(|service| html! {
                        <ServiceLeafCard service={service.clone()} />
                    }) }
                </div>
            </section>

            <FaqList items={content.faqs.to_vec()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_collapses_on_mobile() {
        assert!(grid_style(true, 260).contains("grid-template-columns: 1fr;"));
        assert!(grid_style(false, 260).contains("minmax(260px, 1fr)"));
    }
}
