//! Home page — the keyword form, result card, and the generate/copy flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It owns the input signal, drives the request
//! state machine through the webhook call, and emits a toast for every
//! outcome. Validation failures never reach the network.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::keyword_form::KeywordForm;
use crate::components::rhyme_card::RhymeCard;
use crate::components::toast_stack::ToastStack;
use crate::state::rhyme::RhymeState;
use crate::state::toast::{ToastSeverity, ToastState};

/// Inline error shown under the textarea for empty input.
pub(crate) const VALIDATION_MESSAGE: &str = "Por favor, digite pelo menos uma palavra.";
/// Inline error shown when the webhook call fails, whatever the cause.
pub(crate) const GENERIC_FAILURE_MESSAGE: &str =
    "Ocorreu um erro e nossa IA tropeçou nos versos. Tente novamente!";

/// Trim the keywords and require a non-empty value.
fn validate_keywords(input: &str) -> Result<String, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(VALIDATION_MESSAGE)
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Home page — heading, keyword form, result card, toast stack.
#[component]
pub fn HomePage() -> impl IntoView {
    let rhyme = expect_context::<RwSignal<RhymeState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let input = RwSignal::new(String::new());

    let on_generate = Callback::new(move |()| {
        if rhyme.get_untracked().is_loading() {
            return;
        }
        let words = match validate_keywords(&input.get_untracked()) {
            Ok(words) => words,
            Err(message) => {
                rhyme.update(|state| state.fail_validation(message.to_owned()));
                toasts.update(|state| {
                    state.push(
                        "Atenção",
                        "Por favor, digite pelo menos uma palavra para criar sua rima!",
                        ToastSeverity::Warning,
                    );
                });
                return;
            }
        };

        let mut token = 0;
        rhyme.update(|state| token = state.begin());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_rhyme(&words).await {
                Ok(text) => {
                    let mut applied = false;
                    rhyme.update(|state| applied = state.resolve_success(token, text));
                    if applied {
                        toasts.update(|state| {
                            state.push(
                                "Rima criada!",
                                "Sua rima foi gerada com sucesso. Que tal compartilhar?",
                                ToastSeverity::Success,
                            );
                        });
                    }
                }
                Err(err) => {
                    log::error!("rhyme generation failed: {err}");
                    let mut applied = false;
                    rhyme.update(|state| {
                        applied = state.resolve_failure(token, GENERIC_FAILURE_MESSAGE.to_owned());
                    });
                    if applied {
                        toasts.update(|state| {
                            state.push(
                                "Ops! Algo deu errado",
                                "Nossa IA tropeçou nos versos. Tente novamente em alguns instantes!",
                                ToastSeverity::Error,
                            );
                        });
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (words, token);
    });

    let on_copy = Callback::new(move |()| {
        let Some(text) = rhyme.get_untracked().result().map(str::to_owned) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::util::clipboard::copy_text(&text).await {
                Ok(()) => {
                    toasts.update(|state| {
                        state.push(
                            "Copiado!",
                            "Sua rima foi copiada para a área de transferência.",
                            ToastSeverity::Success,
                        );
                    });
                }
                Err(err) => {
                    log::warn!("clipboard copy failed: {err}");
                    toasts.update(|state| {
                        state.push(
                            "Erro ao copiar",
                            "Não foi possível copiar o texto. Tente selecionar e copiar manualmente.",
                            ToastSeverity::Error,
                        );
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    });

    view! {
        <main class="home-page">
            <header class="home-page__hero">
                <h1 class="home-page__title">"Transforme Suas Palavras em Rimas com IA"</h1>
                <p class="home-page__subtitle">
                    "Diga adeus ao bloqueio criativo. Digite suas palavras-chave e deixe nossa \
                     inteligência artificial criar a rima perfeita para sua música, poema ou post \
                     em segundos."
                </p>
            </header>

            <KeywordForm input=input on_submit=on_generate/>
            <RhymeCard on_copy=on_copy/>

            <footer class="home-page__footer">
                <p class="home-page__tip">
                    "Dica: use palavras relacionadas ao tema da sua criação para obter rimas mais relevantes"
                </p>
            </footer>

            <ToastStack/>
        </main>
    }
}
