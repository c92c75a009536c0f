//! Result card: placeholder, loading hint, or the generated rhyme with a
//! copy action.

use leptos::prelude::*;

use crate::state::rhyme::{RequestPhase, RhymeState};
use crate::util::emphasis::parse_emphasis;

/// Result area below the form. The copy button only exists in the
/// success branch, so copying without a result is unrepresentable.
#[component]
pub fn RhymeCard(on_copy: Callback<()>) -> impl IntoView {
    let rhyme = expect_context::<RwSignal<RhymeState>>();

    let on_copy_click = move |_| on_copy.run(());

    view! {
        <section class="rhyme-card">
            {move || match rhyme.get().phase {
                RequestPhase::Loading => view! {
                    <div class="rhyme-card__loading">
                        <span class="rhyme-card__spinner"></span>
                        <p>"Nossa IA está criando versos mágicos para você..."</p>
                    </div>
                }
                    .into_any(),
                RequestPhase::Success(text) => {
                    let segments = parse_emphasis(&text);
                    view! {
                        <div class="rhyme-card__result">
                            <div class="rhyme-card__header">
                                <h3 class="rhyme-card__heading">"Sua rima genial:"</h3>
                                <button
                                    class="btn rhyme-card__copy"
                                    title="Copiar rima"
                                    on:click=on_copy_click
                                >
                                    "Copiar"
                                </button>
                            </div>
                            // pre-wrap container keeps the webhook's line breaks.
                            <p class="rhyme-card__text">
                                {segments
                                    .into_iter()
                                    .map(|segment| {
                                        if segment.emphasized {
                                            view! { <strong>{segment.text}</strong> }.into_any()
                                        } else {
                                            view! { <span>{segment.text}</span> }.into_any()
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </p>
                        </div>
                    }
                        .into_any()
                }
                RequestPhase::Idle | RequestPhase::Failed(_) => view! {
                    <div class="rhyme-card__empty">
                        <p>"Sua rima genial aparecerá aqui..."</p>
                        <p class="rhyme-card__hint">
                            "Digite suas palavras-chave e clique em \"Criar Rima!\" para começar"
                        </p>
                    </div>
                }
                    .into_any(),
            }}
        </section>
    }
}
