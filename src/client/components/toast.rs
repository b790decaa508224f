//! Dismissible toast notifications shared through context.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "alert-info",
            ToastKind::Success => "alert-success",
            ToastKind::Error => "alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle to the toast queue, provided once by the app root
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl Toasts {
    /// Must be called inside a component scope
    pub fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        let id = *self.next_id.peek();
        self.next_id.set(id.wrapping_add(1));

        self.items.write().push(Toast {
            id,
            kind,
            message: message.into(),
        });

        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> u32 {
        self.show(ToastKind::Info, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> u32 {
        self.show(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u32 {
        self.show(ToastKind::Error, message)
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.write().retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> Vec<Toast> {
        self.items.read().clone()
    }
}

/// Access the toast queue provided by the app root
pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastContainer() -> Element {
    let mut toasts = use_toast();

    rsx!(
        div { class: "toast toast-end z-20",
            for toast in toasts.items() {
                div {
                    key: "{toast.id}",
                    class: format!("alert {} flex justify-between gap-4", toast.kind.class()),
                    span { "{toast.message}" }
                    button {
                        class: "btn btn-ghost btn-xs",
                        aria_label: "Dismiss",
                        onclick: move |_| toasts.dismiss(toast.id),
                        "✕"
                    }
                }
            }
        }
    )
}
