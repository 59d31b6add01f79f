//! Toast host and helpers for raising notifications from event handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ToastState` lives in context as `RwSignal<ToastState>`. Handlers call
//! [`notify`] / [`resolve`] instead of touching the queue directly so expiry
//! is always scheduled.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// Queue `toast` and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, toast: Toast) -> u64 {
    let duration = toast.duration_ms;
    let id = toasts.try_update(|q| q.push(toast)).unwrap_or_default();
    schedule_dismiss(toasts, id, duration);
    id
}

/// Turn toast `id` (usually a loading toast) into its final outcome.
pub fn resolve(toasts: RwSignal<ToastState>, id: u64, toast: Toast) {
    let duration = toast.duration_ms;
    let shown = toasts
        .try_update(|q| if q.replace(id, toast) { id } else { q.entries.last().map_or(id, |e| e.id) })
        .unwrap_or(id);
    schedule_dismiss(toasts, shown, duration);
}

fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64, duration_ms: Option<u32>) {
    let Some(ms) = duration_ms else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(ms).await;
        toasts.update(|q| q.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, id, ms);
    }
}

/// Stack of visible toasts, newest at the bottom.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().entries
                key=|entry| (entry.id, entry.toast.kind.css_modifier(), entry.toast.message.clone())
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div class=format!("toast {}", entry.toast.kind.css_modifier()) role="status">
                            <span class="toast__message">{entry.toast.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|q| q.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
