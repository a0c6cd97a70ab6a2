use web_sys::MouseEvent;
use yew::prelude::*;

use super::section::{AccentDivider, SectionTitle};

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// At most one answer is open. Clicking the open one closes it.
pub fn next_open_index(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub items: Vec<FaqEntry>,
    #[prop_or(AttrValue::Static("FAQs"))]
    pub heading: AttrValue,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faqs" class="faq-section" style="padding: 80px 24px; background: #000; color: #fff;">
            <SectionTitle>{&props.heading}</SectionTitle>
            <AccentDivider />
            <div style="max-width: 48rem; margin: 0 auto; display: flex; flex-direction: column; gap: 16px;">
                { for props.items.iter().enumerate().map(|(index, item)| {
                    let is_open = *open == Some(index);
                    let toggle = {
                        let open = open.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            open.set(next_open_index(*open, index));
                        })
                    };
                    html! {
                        <div key={index} class={classes!("faq-item", is_open.then(|| "open"))}
                            style="border: 1px solid rgba(26, 74, 255, 0.2); border-radius: 12px; overflow: hidden;">
                            <button class="faq-question" onclick={toggle}
                                style="width: 100%; display: flex; justify-content: space-between; align-items: center; text-align: left; padding: 16px 24px; font-size: 1.1rem; background: rgba(0, 8, 20, 0.6); color: inherit; border: none;">
                                <span>{item.question}</span>
                                <span style={format!("color: #9ca3af; transition: transform 0.3s; transform: rotate({}deg);", if is_open { 180 } else { 0 })}>
                                    {"▼"}
                                </span>
                            </button>
                            if is_open {
                                <div class="faq-answer" style="padding: 0 24px 16px; color: #d1d5db; font-size: 0.95rem; background: rgba(0, 8, 20, 0.5); animation: fadeInUp 0.3s ease-out;">
                                    {item.answer}
                                </div>
                            }
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_another_item_closes_current() {
        assert_eq!(next_open_index(None, 2), Some(2));
        assert_eq!(next_open_index(Some(2), 4), Some(4));
    }

    #[test]
    fn test_clicking_open_item_closes_it() {
        assert_eq!(next_open_index(Some(1), 1), None);
    }
}
