use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::toast::use_toast;
use crate::contact::relay::{resolve_submission, submit_enquiry, EnquiryFields};
use crate::interaction::use_focus_glow;

pub const SERVICE_OPTIONS: [&str; 6] = [
    "Website Design",
    "Ecommerce",
    "Mobile App",
    "Digital Marketing",
    "Student Project",
    "Other",
];

#[derive(Properties, PartialEq)]
struct GlowFieldProps {
    label: AttrValue,
    children: Children,
}

/// Input wrapper whose inner glow follows the pointer while focused.
#[function_component(GlowField)]
fn glow_field(props: &GlowFieldProps) -> Html {
    let focused = use_state_eq(|| false);
    let glow = use_focus_glow(*focused);

    let onfocusin = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onfocusout = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };

    let glow_style = format!(
        "position: absolute; inset: 0; border-radius: 6px; z-index: 10; pointer-events: none; \
         transition: opacity 0.3s; opacity: {}; \
         background-image: radial-gradient(circle at {}px {}px, rgba(56, 182, 255, 0.2) 0%, transparent 40%);",
        if *focused { 1 } else { 0 },
        glow.state.local_x,
        glow.state.local_y,
    );
    let ring_style = format!(
        "position: absolute; inset: 0; border-radius: 6px; z-index: 0; pointer-events: none; \
         transition: opacity 0.3s; opacity: {}; \
         box-shadow: 0 0 20px 4px rgba(56,182,255,0.7), inset 0 0 10px rgba(56,182,255,0.3);",
        if *focused { 1 } else { 0 },
    );

    html! {
        <div class="glow-field">
            <p style="margin-bottom: 4px; font-size: 0.875rem; font-weight: 500;">{&props.label}</p>
            <div
                ref={glow.node}
                style="position: relative; border-radius: 6px; box-shadow: 0 0 3px rgba(56,182,255,0.1);"
                onmouseenter={glow.onmouseenter}
                onmousemove={glow.onmousemove}
                onmouseleave={glow.onmouseleave}
                onfocusin={onfocusin}
                onfocusout={onfocusout}
            >
                <div style={glow_style}></div>
                <div style={ring_style}></div>
                <div style="position: relative; z-index: 20; width: 100%;">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

const INPUT_STYLE: &str = "width: 100%; font-size: 0.875rem; outline: none; background: transparent; \
    color: #fff; border: 1px solid rgba(255,255,255,0.2); border-radius: 6px; padding: 12px;";

#[function_component(EnquiryForm)]
pub fn enquiry_form() -> Html {
    let fields = use_state(EnquiryFields::default);
    let submitting = use_state(|| false);
    let toasts = use_toast();

    let on_text = |apply: fn(&mut EnquiryFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*fields).clone();
            apply(&mut next, value);
            fields.set(next);
        })
    };

    let on_description = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            let mut next = (*fields).clone();
            next.description = value;
            fields.set(next);
        })
    };

    let on_service = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*fields).clone();
            next.services = value;
            fields.set(next);
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let fields = fields.clone();
            let submitting = submitting.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let mut current = (*fields).clone();
                let result = submit_enquiry(&current).await;
                resolve_submission(result, &mut current, &toasts);
                fields.set(current);
                submitting.set(false);
            });
        })
    };

    let busy = *submitting;

    html! {
        <div class="enquiry-form" style="padding: 48px 32px; position: relative; overflow: hidden; border-radius: 12px; background: #000; color: #fff; animation: fadeInUp 0.8s ease-out;">
            <h2 class="animate-gradient" style="font-size: 1.875rem; margin-bottom: 48px; font-weight: 600; background-image: linear-gradient(to right, #38b6ff, #000433); -webkit-background-clip: text; color: transparent;">
                {"Send us an enquiry"}
            </h2>
            <form onsubmit={onsubmit} style="display: flex; flex-direction: column; gap: 24px;">
                <GlowField label="Your name">
                    <input type="text" name="name" placeholder="Enter your name" required={true}
                        disabled={busy} style={INPUT_STYLE}
                        value={fields.name.clone()}
                        oninput={on_text(|f, v| f.name = v)} />
                </GlowField>
                <GlowField label="Phone number">
                    <div style="display: flex; align-items: center;">
                        <span style="color: rgba(255,255,255,0.6); font-size: 0.875rem; padding: 0 8px 0 12px; border-right: 1px solid rgba(255,255,255,0.3);">
                            {"+91 (IN)"}
                        </span>
                        <input type="tel" name="phone_number" placeholder="98765 43210" required={true}
                            disabled={busy} style={INPUT_STYLE}
                            value={fields.phone_number.clone()}
                            oninput={on_text(|f, v| f.phone_number = v)} />
                    </div>
                </GlowField>
                <GlowField label="Email">
                    <input type="email" name="email" placeholder="you@company.com" required={true}
                        disabled={busy} style={INPUT_STYLE}
                        value={fields.email.clone()}
                        oninput={on_text(|f, v| f.email = v)} />
                </GlowField>
                <GlowField label="Service">
                    <select name="services" required={true} disabled={busy} style={INPUT_STYLE} onchange={on_service}>
                        <option value="" selected={fields.services.is_empty()} disabled={true}>{"Choose a service"}</option>
                        { for SERVICE_OPTIONS.iter().map(|option| html! {
                            <option value={*option} selected={fields.services == *option}>{*option}</option>
                        }) }
                    </select>
                </GlowField>
                <GlowField label="Project details">
                    <textarea name="description" rows="5" placeholder="Tell us about your project" required={true}
                        disabled={busy} style={INPUT_STYLE}
                        value={fields.description.clone()}
                        oninput={on_description} />
                </GlowField>
                <button type="submit" class="animate-gradient" disabled={busy}
                    style="align-self: flex-start; padding: 12px 32px; border-radius: 9999px; border: none; color: #fff; font-weight: 600; background-image: linear-gradient(to right, #38b6ff, #000433);">
                    { if busy { "Sending..." } else { "Submit" } }
                </button>
            </form>
        </div>
    }
}
