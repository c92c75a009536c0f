//! Transient toast notifications with automatic dismissal.

use leptos::prelude::*;

use crate::state::toast::{ToastSeverity, ToastState};

/// How long a toast stays visible before auto-dismissing.
#[cfg(feature = "hydrate")]
const TOAST_TIMEOUT_MS: u32 = 4000;

/// Fixed-position toast stack. Every pushed toast is scheduled for
/// automatic dismissal; the close button dismisses it early.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Schedule one dismiss timer per newly pushed toast. Ids are issued
    // by a counter, so tracking the highest id seen is enough to tell
    // new toasts from re-renders.
    #[cfg(feature = "hydrate")]
    {
        let seen = StoredValue::new(0_u64);
        Effect::new(move || {
            let fresh: Vec<u64> = toasts
                .get()
                .toasts
                .iter()
                .map(|toast| toast.id)
                .filter(|id| *id > seen.get_value())
                .collect();
            if let Some(max) = fresh.iter().max() {
                seen.set_value(*max);
            }
            for id in fresh {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
                    toasts.update(|state| state.dismiss(id));
                });
            }
        });
    }

    view! {
        <div class="toast-stack" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = toast_class(toast.severity);
                        let title = toast.title.clone();
                        let description = toast.description.clone();
                        view! {
                            <div class=class role="status">
                                <div class="toast__body">
                                    <p class="toast__title">{title}</p>
                                    <p class="toast__description">{description}</p>
                                </div>
                                <button
                                    class="toast__close"
                                    title="Fechar"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

fn toast_class(severity: ToastSeverity) -> String {
    format!("toast toast--{}", severity.class_suffix())
}
