use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::section::{AccentDivider, SectionTitle, LIGHT_GREY};
use crate::interaction::{use_media_query, MOBILE_BREAKPOINT};

const ROTATE_MS: u32 = 5000;

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub feedback: &'static str,
}

pub const CLIENTS: &[&str] = &[
    "Phoenix Fire",
    "All In All Avva",
    "Balaji Agencies",
    "Arohi Designer",
    "MD Wood Works",
    "Flowers",
    "Balaji Pawn Shop",
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sathish K",
        role: "Founder - Phoenix Fire",
        feedback: "Ucentric delivered a modern, fast, and visually appealing website that truly reflects our brand identity.",
    },
    Testimonial {
        name: "Uma Deve",
        role: "Director - All In All Avva",
        feedback: "Their team was professional, proactive, and very responsive. Our online presence has never looked better!",
    },
    Testimonial {
        name: "Arjun Balaji",
        role: "Owner - Balaji Agencies",
        feedback: "The website design and functionality exceeded our expectations. We received numerous compliments from clients.",
    },
    Testimonial {
        name: "Vijayalakxmi",
        role: "Creative Head - Arohi Designer",
        feedback: "Ucentric transformed our ideas into a beautiful digital experience. The support and communication were excellent.",
    },
    Testimonial {
        name: "Madan",
        role: "CEO - MD Wood Works",
        feedback: "From concept to delivery, their expertise was outstanding. The project was completed on time and to our satisfaction.",
    },
    Testimonial {
        name: "Sneha F",
        role: "Manager - Flowers",
        feedback: "The team provided innovative solutions and helped us elevate our brand digitally. Very happy with their work!",
    },
    Testimonial {
        name: "Ramesh P",
        role: "Owner - Balaji Pawn Shop",
        feedback: "Professional, creative, and reliable. Ucentric delivered a smooth, user-friendly website with excellent support.",
    },
];

/// Index shown after `current`, wrapping at `len`. Stays at 0 for an empty list.
pub fn next_testimonial(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Rotation {
    current: usize,
    len: usize,
}

impl Reducible for Rotation {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Self {
            current: next_testimonial(self.current, self.len),
            ..*self
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    #[prop_or(CLIENTS)]
    pub clients: &'static [&'static str],
    #[prop_or(TESTIMONIALS)]
    pub testimonials: &'static [Testimonial],
}

/// Client name grid plus one quote that rotates every five seconds.
#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let is_mobile = use_media_query(MOBILE_BREAKPOINT);
    let len = props.testimonials.len();
    let rotation = use_reducer(|| Rotation { current: 0, len });

    {
        let rotate = rotation.dispatcher();
        use_effect_with_deps(
            move |len| {
                let interval = (*len > 1).then(|| Interval::new(ROTATE_MS, move || rotate.dispatch(())));
                move || drop(interval)
            },
            len,
        );
    }

    let grid_style = format!(
        "display: grid; gap: 24px; max-width: 72rem; margin: 0 auto 48px; grid-template-columns: {};",
        if is_mobile { "repeat(3, 1fr)" } else { "repeat(7, 1fr)" }
    );

    html! {
        <section id="clients" class="testimonials" style="padding: 80px 24px; background: #000; color: #fff; text-align: center;">
            <SectionTitle>{"They Trust Us"}</SectionTitle>
            <AccentDivider />
            <p style={format!("color: {LIGHT_GREY}; max-width: 42rem; margin: 0 auto 48px;")}>
                {"Join the ranks of our satisfied clients who rely on Ucentric for exceptional digital solutions."}
            </p>
            <div style={grid_style}>
                { for props.clients.iter().map(|name| html! {
                    <div class="client-name" style="background: rgba(0,8,20,0.4); padding: 16px; border-radius: 12px; font-size: 0.875rem; color: #d1d5db; display: flex; align-items: center; justify-content: center;">
                        {*name}
                    </div>
                }) }
            </div>
            if let Some(quote) = props.testimonials.get(rotation.current) {
                <div style="max-width: 48rem; margin: 0 auto;">
                    <SectionTitle>{"Client Testimonial"}</SectionTitle>
                    <AccentDivider />
                    <div key={rotation.current} class="testimonial" style="background: rgba(0,8,20,0.6); border-radius: 16px; padding: 24px; box-shadow: 0 10px 30px rgba(0,0,0,0.4); animation: fadeInUp 0.4s ease-out;">
                        <p style="color: #d1d5db; margin-bottom: 16px;">{format!("“{}”", quote.feedback)}</p>
                        <strong>{format!("{}, {}", quote.name, quote.role)}</strong>
                    </div>
                </div>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps_around() {
        assert_eq!(next_testimonial(0, 7), 1);
        assert_eq!(next_testimonial(6, 7), 0);
        assert_eq!(next_testimonial(0, 1), 0);
    }

    #[test]
    fn test_empty_list_stays_at_zero() {
        assert_eq!(next_testimonial(0, 0), 0);
        assert_eq!(next_testimonial(3, 0), 0);
    }

    #[test]
    fn test_rotation_cycles_through_every_quote() {
        let mut rotation = Rc::new(Rotation {
            current: 0,
            len: TESTIMONIALS.len(),
        });
        let mut seen = vec![rotation.current];
        for _ in 1..TESTIMONIALS.len() {
            rotation = rotation.reduce(());
            seen.push(rotation.current);
        }
        assert_eq!(seen, (0..TESTIMONIALS.len()).collect::<Vec<_>>());
        assert_eq!(rotation.reduce(()).current, 0);
    }
}
