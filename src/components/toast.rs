use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

/// Fire-and-forget "show this message".
pub trait Notify {
    fn notify(&self, toast: Toast);
}

/// Context value handed to anything below [`Toaster`].
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    push: Callback<Toast>,
}

impl Notify for ToastHandle {
    fn notify(&self, toast: Toast) {
        self.push.emit(toast);
    }
}

impl Default for ToastHandle {
    fn default() -> Self {
        Self {
            push: Callback::noop(),
        }
    }
}

/// Falls back to a no-op handle outside a [`Toaster`].
#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().unwrap_or_default()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    pub items: Vec<(u32, Toast)>,
}

pub enum ToastAction {
    Push(u32, Toast),
    Dismiss(u32),
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Push(id, toast) => items.push((id, toast)),
            ToastAction::Dismiss(id) => items.retain(|(existing, _)| *existing != id),
        }
        Rc::new(Self { items })
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub children: Children,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let stack = use_reducer(ToastStack::default);

    let handle = {
        let dispatcher = stack.dispatcher();
        use_memo(
            move |_| {
                let next_id = Rc::new(Cell::new(0u32));
                ToastHandle {
                    push: Callback::from(move |toast: Toast| {
                        let id = next_id.get();
                        next_id.set(id.wrapping_add(1));
                        dispatcher.dispatch(ToastAction::Push(id, toast));

                        let dispatcher = dispatcher.clone();
                        Timeout::new(TOAST_LIFETIME_MS, move || {
                            dispatcher.dispatch(ToastAction::Dismiss(id));
                        })
                        .forget();
                    }),
                }
            },
            (),
        )
    };

    html! {
        <ContextProvider<ToastHandle> context={(*handle).clone()}>
            { for props.children.iter() }
            <div class="toast-stack" style="position: fixed; top: 16px; left: 50%; transform: translateX(-50%); z-index: 10000; display: flex; flex-direction: column; gap: 8px;">
                { for stack.items.iter().map(|(id, toast)| {
                    let accent = match toast.kind {
                        ToastKind::Success => "#22c55e",
                        ToastKind::Error => "#ef4444",
                    };
                    html! {
                        <div key={*id} class="toast" role="status"
                            style={format!("background: #111; color: #fff; padding: 12px 18px; border-radius: 8px; border-left: 4px solid {}; box-shadow: 0 8px 24px rgba(0,0,0,0.4); animation: fadeInUp 0.3s ease-out;", accent)}>
                            {&toast.text}
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_then_dismiss() {
        let stack = Rc::new(ToastStack::default());
        let stack = stack.reduce(ToastAction::Push(0, Toast::success("saved")));
        let stack = stack.reduce(ToastAction::Push(1, Toast::error("nope")));
        assert_eq!(stack.items.len(), 2);

        let stack = stack.reduce(ToastAction::Dismiss(0));
        assert_eq!(stack.items, vec![(1, Toast::error("nope"))]);
    }

    #[test]
    fn test_dismiss_unknown_is_harmless() {
        let stack = Rc::new(ToastStack::default()).reduce(ToastAction::Push(3, Toast::success("hi")));
        let stack = stack.reduce(ToastAction::Dismiss(99));
        assert_eq!(stack.items.len(), 1);
    }
}
