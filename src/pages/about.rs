use yew::prelude::*;

use super::home::STATS;
use super::service_detail::grid_style;
use crate::components::cards::AnimatedCard;
use crate::components::section::{AccentDivider, Align, SectionTitle, LIGHT_GREY};
use crate::components::stat::StatGrid;
use crate::interaction::{use_media_query, MOBILE_BREAKPOINT};

const VALUES: [(&str, &str, &str); 4] = [
    ("🤝", "Partnership", "We work as an extension of your team, not a vendor at arm's length."),
    ("🎯", "Clarity", "Plain language, honest timelines and no surprises on the invoice."),
    ("🚀", "Craft", "Details matter. We sweat performance, accessibility and polish."),
    ("🌱", "Growth", "We build things that keep paying off long after launch day."),
];

#[function_component(About)]
pub fn about() -> Html {
    let is_mobile = use_media_query(MOBILE_BREAKPOINT);

    html! {
        <div class="about-page" style="background: #000; color: #fff; padding-top: 96px;">
            <section style="max-width: 64rem; margin: 0 auto; padding: 48px 24px;">
                <SectionTitle align={Align::Left}>{"About Ucentric"}</SectionTitle>
                <AccentDivider align={Align::Left} />
                <p style={format!("color: {LIGHT_GREY}; font-size: 1.15rem; line-height: 1.8;")}>
                    {"We are a digital studio of designers, developers and marketers. Since our first project we have helped \
                      startups, local businesses and students put ideas online and turn them into something people use."}
                </p>
            </section>

            <section>
                <SectionTitle>{"What We Value"}</SectionTitle>
                <AccentDivider />
                <div style={grid_style(is_mobile, 220)}>
                    { for VALUES.iter().enumerate().map(|(i, (icon, title, desc))| html! {
                        <AnimatedCard title={*title} icon={Some(AttrValue::Static(*icon))} delay_ms={i as u32 * 100}>
                            <p style={format!("color: {LIGHT_GREY}; line-height: 1.6;")}>{*desc}</p>
                        </AnimatedCard>
                    }) }
                </div>
            </section>

            <section style="padding: 80px 24px;">
                <SectionTitle>{"Our Numbers"}</SectionTitle>
                <AccentDivider />
                <StatGrid stats={STATS} />
            </section>
        </div>
    }
}
