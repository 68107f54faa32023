//! Toast stack and the handle pages use to raise toasts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every action boundary (booking, venue save/delete, profile edit, login)
//! reports success or failure here instead of crashing the view.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Copyable toast handle, provided at the app root.
#[derive(Clone, Copy, Debug)]
pub struct Toaster {
    state: RwSignal<ToastState>,
}

impl Toaster {
    pub fn new() -> Self {
        Self { state: RwSignal::new(ToastState::default()) }
    }

    pub fn success(self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn info(self, message: impl Into<String>) {
        self.show(ToastKind::Info, message.into());
    }

    pub fn dismiss(self, id: u64) {
        self.state.update(|state| state.dismiss(id));
    }

    fn show(self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.state.update(|state| id = state.push(kind, message));
        crate::net::spawn(async move {
            #[cfg(feature = "csr")]
            gloo_timers::future::TimeoutFuture::new(crate::config::TOAST_DURATION_MS).await;
            self.dismiss(id);
        });
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Toaster from context.
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let items = move || toaster.state.get().items;

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For each=items key=|toast| toast.id let:toast>
                <div class=toast.kind.css_class()>
                    <span class="toast__message">{toast.message.clone()}</span>
                    <button
                        class="toast__close"
                        aria-label="Dismiss"
                        on:click=move |_| toaster.dismiss(toast.id)
                    >
                        "×"
                    </button>
                </div>
            </For>
        </div>
    }
}
