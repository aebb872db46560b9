//! Suggest Input Component
//!
//! Text input with a fuzzy-matched dropdown over a server-supplied vocabulary.
//! Used for task names (free text with hints) and for tags (Enter commits).

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use contract_core::state::{committed_text, suggest};

const MAX_SUGGESTIONS: usize = 5;

fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Input with autocomplete suggestions
///
/// Props:
/// - value: current text, owned by the parent
/// - candidates: vocabulary to match against
/// - exclude: entries never suggested (already chosen tags)
/// - on_input: every keystroke and every picked suggestion
/// - on_commit: Enter pressed; receives the suggestion the user arrowed onto,
///   otherwise the typed text unchanged
#[component]
pub fn SuggestInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] candidates: Signal<Vec<String>>,
    #[prop(into, optional)] exclude: Signal<Vec<String>>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into, optional)] on_commit: Option<Callback<String>>,
    #[prop(into, optional)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let (focused, set_focused) = signal(false);
    // Nothing is highlighted until the user moves onto a suggestion
    let (highlighted, set_highlighted) = signal(None::<usize>);

    let suggestions = Memo::new(move |_| {
        if !focused.get() {
            return vec![];
        }
        let current = value.get();
        let list = suggest(&current, &candidates.get(), &exclude.get(), MAX_SUGGESTIONS);
        // Nothing to offer when the only match is what's already typed
        if list.len() == 1 && list[0] == current {
            return vec![];
        }
        list
    });

    let pick = move |name: String| {
        on_input.run(name);
        set_highlighted.set(None);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions.get_untracked();
        let current = highlighted.get_untracked();

        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                if sugg.is_empty() {
                    return;
                }
                let next = current.map_or(0, |i| (i + 1).min(sugg.len() - 1));
                set_highlighted.set(Some(next));
            }
            "ArrowUp" => {
                ev.prevent_default();
                set_highlighted.set(current.and_then(|i| i.checked_sub(1)));
            }
            "Tab" => {
                if let Some(name) = sugg.get(current.unwrap_or(0)) {
                    ev.prevent_default();
                    pick(name.clone());
                }
            }
            "Enter" => {
                // Never submit the surrounding form from here
                ev.prevent_default();
                match on_commit {
                    Some(commit) => {
                        commit.run(committed_text(&value.get_untracked(), &sugg, current));
                        set_highlighted.set(None);
                    }
                    None => {
                        if let Some(name) = current.and_then(|i| sugg.get(i)) {
                            pick(name.clone());
                        }
                    }
                }
            }
            "Escape" => set_focused.set(false),
            _ => {}
        }
    };

    view! {
        <div class="suggest-input-wrapper">
            <input
                type="text"
                class="form-control"
                placeholder=placeholder
                required=required
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_input.run(input_value(&ev));
                    set_highlighted.set(None);
                    set_focused.set(true);
                }
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| set_focused.set(false)
                on:keydown=on_keydown
            />

            {move || {
                let sugg = suggestions.get();
                if sugg.is_empty() {
                    view! { <div></div> }.into_any()
                } else {
                    let selected = highlighted.get();
                    view! {
                        <div class="autocomplete-list">
                            {sugg.into_iter().enumerate().map(|(i, name)| {
                                let name_for_click = name.clone();
                                view! {
                                    <button
                                        type="button"
                                        class=if selected == Some(i) { "autocomplete-item selected" } else { "autocomplete-item" }
                                        // mousedown fires before the input's blur
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            match on_commit {
                                                Some(commit) => commit.run(name_for_click.clone()),
                                                None => pick(name_for_click.clone()),
                                            }
                                        }
                                    >
                                        {name}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
