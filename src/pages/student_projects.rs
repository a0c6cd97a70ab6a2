use yew::prelude::*;

use super::service_detail::{Feature, ServiceContent, ServiceDetail};
use crate::components::cards::{ProcessStep, ServiceItem};
use crate::components::faq::FaqEntry;

static STUDENT_PROJECTS: ServiceContent = ServiceContent {
    title: "Student Projects",
    tagline: "Final-year and mini projects with real code, real guidance and full documentation.",
    hero_image: "/assets/student_projects_hero.webp",
    intro: "We mentor students through academic projects end to end: choosing a topic that impresses, \
            building it properly and explaining every part so you can present it with confidence.",
    features_heading: "Why Students Choose Us",
    features: &[
        Feature { icon: "🧑‍🏫", title: "Guided, not handed over", desc: "Walkthroughs so you understand what you submit." },
        Feature { icon: "📚", title: "Complete documentation", desc: "Reports, diagrams and presentation decks included." },
        Feature { icon: "⏱️", title: "On time", desc: "Milestones planned around your academic calendar." },
    ],
    process_heading: "Project Journey",
    process: &[
        ProcessStep { icon: "💡", title: "Consultation & Topic Finalization", desc: "Pick a topic that fits." },
        ProcessStep { icon: "🗓️", title: "Project Planning", desc: "Scope and milestones." },
        ProcessStep { icon: "💻", title: "Development & Testing", desc: "Build and verify." },
        ProcessStep { icon: "📄", title: "Report & Documentation", desc: "Write-up and slides." },
        ProcessStep { icon: "🎉", title: "Review & Launch", desc: "Demo rehearsal and handover." },
    ],
    offerings_heading: "Project Domains",
    offerings: &[
        ServiceItem { icon: "🌐", title: "Web Applications", desc: "Full-stack projects with modern frameworks." },
        ServiceItem { icon: "📱", title: "Mobile Apps", desc: "Android and cross-platform apps." },
        ServiceItem { icon: "🤖", title: "Machine Learning", desc: "Models, datasets and evaluation." },
        ServiceItem { icon: "🔌", title: "IoT", desc: "Sensors, boards and dashboards." },
    ],
    faqs: &[
        FaqEntry { question: "Do you help with the viva?", answer: "Yes. We run a mock review and go through likely questions with you." },
        FaqEntry { question: "Is the source code mine?", answer: "Completely. You receive the full source, setup guide and documentation." },
    ],
};

#[function_component(StudentProjects)]
pub fn student_projects() -> Html {
    html! { <ServiceDetail content={&STUDENT_PROJECTS} /> }
}
