//! Toast service — transient notifications for action results.
//!
//! Every mutation call site reports its outcome here: success gets a short
//! green toast, failure shows the server-provided message (or the generic
//! fallback) in red. Toasts dismiss themselves after a few seconds.

use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    /// "success" | "error"
    pub variant: &'static str,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(vec![]),
            next_id: RwSignal::new(0),
        }
    }

    fn push(&self, text: String, variant: &'static str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|list| list.push(Toast { id, text, variant }));

        let toasts = self.toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(text.into(), "success");
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(text.into(), "error");
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Fixed-position stack rendering the active toasts. Mounted once at the
/// application root.
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_toast();
    let toasts = service.toasts;

    view! {
        <div class="toaster">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast toast--{}", toast.variant);
                    view! {
                        <div class=class on:click=move |_| service.dismiss(id)>
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
