//! Keyword input form with validation feedback and submit gating.

use leptos::prelude::*;

use crate::state::rhyme::RhymeState;

/// Labelled textarea plus the generate button. Both are disabled while a
/// request is in flight; Enter (without Shift) submits.
#[component]
pub fn KeywordForm(input: RwSignal<String>, on_submit: Callback<()>) -> impl IntoView {
    let rhyme = expect_context::<RwSignal<RhymeState>>();

    let loading = move || rhyme.get().is_loading();
    let error = move || rhyme.get().error().map(str::to_owned);

    let on_click = move |_| on_submit.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_submit.run(());
        }
    };

    view! {
        <section class="keyword-form">
            <label class="keyword-form__label" for="keywords-input">
                "Digite as palavras que devem estar na rima:"
            </label>
            <textarea
                id="keywords-input"
                class="keyword-form__input"
                placeholder="Ex: noite, luar, mar, canção, coração"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
                disabled=loading
            ></textarea>
            <Show when=move || error().is_some()>
                <p class="keyword-form__error">{move || error().unwrap_or_default()}</p>
            </Show>
            <button
                class="btn btn--primary keyword-form__submit"
                on:click=on_click
                disabled=loading
            >
                {move || if loading() { "Criando sua rima..." } else { "Criar Rima!" }}
            </button>
        </section>
    }
}
