//! Contract Form Component
//!
//! Create/edit form: contract name, a dynamic task list and tag chips.
//! Field edits go through `ContractFormState`; suggestions are fetched fresh
//! every time the form is opened.

use leptos::prelude::*;
use leptos::task::spawn_local;

use contract_core::domain::FormError;
use contract_core::state::{ContractFormState, SubmitOutcome, SuggestionLists};
use contract_core::Contract;

use crate::api;
use crate::components::SuggestInput;
use crate::context::AppContext;
use crate::dialog::alert;

fn amount_text(amount: f64) -> String {
    if amount.is_nan() { String::new() } else { amount.to_string() }
}

/// Contract create/edit form
///
/// Props:
/// - contract: `Some` switches the form to update mode and pre-fills it
/// - open: whether the surrounding modal is showing
/// - on_saved: called after a successful create or update
#[component]
pub fn ContractForm(
    #[prop(into)] contract: Signal<Option<Contract>>,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_saved: Callback<SubmitOutcome>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let form = RwSignal::new(ContractFormState::new());
    let suggestions = RwSignal::new(SuggestionLists::default());
    let tag_input = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    // Pre-fill from the contract being edited, again on every open so an
    // abandoned edit does not linger
    Effect::new(move |_| {
        let is_open = open.get();
        if let Some(existing) = contract.get() {
            if is_open || !form.with_untracked(ContractFormState::is_edit) {
                form.set(ContractFormState::editing(&existing));
            }
        }
    });

    // Fresh vocabularies per open
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        spawn_local(async move {
            let (lists, failures) = SuggestionLists::fetch(&api::client()).await;
            suggestions.set(lists);
            for failure in failures {
                if ctx.handle_auth_error(&failure.error) {
                    break;
                }
                alert(failure.message);
            }
        });
    });

    let task_count = Memo::new(move |_| form.with(|f| f.tasks.len()));
    let task_names = Signal::derive(move || suggestions.with(|s| s.tasks.clone()));
    let tag_names = Signal::derive(move || suggestions.with(|s| s.tags.clone()));
    let chosen_tags = Signal::derive(move || form.with(|f| f.tags.clone()));

    let commit_tags = move |text: String| {
        let known = suggestions.with_untracked(|s| s.tags.clone());
        let added = form.try_update(|f| f.add_tags_from_input(&text, &known)).unwrap_or(0);
        if added > 0 {
            log::debug!("added {} tag(s)", added);
        }
        tag_input.set(String::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let mut draft = form.get_untracked();
        let fallback = if draft.is_edit() {
            "Failed to update contract. Please try again later."
        } else {
            "Failed to create contract. Please try again later."
        };

        submitting.set(true);
        spawn_local(async move {
            let result = draft.submit(&api::client()).await;
            submitting.set(false);
            match result {
                Ok(outcome) => {
                    form.set(draft);
                    on_saved.run(outcome);
                }
                Err(FormError::Invalid(e)) => alert(&e.to_string()),
                Err(FormError::Request(e)) => {
                    if !ctx.handle_auth_error(&e) {
                        alert(&e.user_message(fallback));
                    }
                }
            }
        });
    };

    view! {
        <form class="contract-form" on:submit=on_submit>
            <div class="form-group">
                <label>"Contract Name"</label>
                <input
                    type="text"
                    class="form-control"
                    required
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label>"Tasks"</label>
                <For
                    each=move || 0..task_count.get()
                    key=|index| *index
                    children=move |index| {
                        let name = Signal::derive(move || {
                            form.with(|f| f.tasks.get(index).map(|t| t.name.clone()).unwrap_or_default())
                        });
                        view! {
                            <div class="task-row">
                                <SuggestInput
                                    value=name
                                    candidates=task_names
                                    on_input=move |text: String| form.update(|f| f.set_task_name(index, text))
                                    placeholder="Task name"
                                    required=true
                                />
                                <input
                                    type="number"
                                    class="form-control amount-input"
                                    step="0.01"
                                    min="0"
                                    placeholder="Amount"
                                    required
                                    prop:value=move || {
                                        form.with(|f| f.tasks.get(index).map(|t| amount_text(t.amount)).unwrap_or_default())
                                    }
                                    on:change=move |ev| {
                                        let text = event_target_value(&ev);
                                        form.update(|f| f.set_task_amount_input(index, &text));
                                    }
                                />
                                <button
                                    type="button"
                                    class="btn btn-danger btn-small"
                                    on:click=move |_| form.update(|f| f.remove_task(index))
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    }
                />
                <button type="button" class="btn btn-secondary" on:click=move |_| form.update(|f| f.add_task())>
                    "Add Task"
                </button>
            </div>

            <div class="form-group">
                <label>"Tags"</label>
                <div class="tag-chips">
                    <For
                        each=move || chosen_tags.get()
                        key=|tag| tag.clone()
                        children=move |tag| {
                            let tag_for_remove = tag.clone();
                            view! {
                                <span class="tag-chip">
                                    {tag}
                                    <button
                                        type="button"
                                        class="tag-remove"
                                        on:click=move |_| form.update(|f| f.remove_tag(&tag_for_remove))
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        }
                    />
                </div>
                <div class="tag-input-row">
                    <SuggestInput
                        value=tag_input
                        candidates=tag_names
                        exclude=chosen_tags
                        on_input=move |text: String| tag_input.set(text)
                        on_commit=commit_tags
                        placeholder="Add tags (semicolon separates several)"
                    />
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| commit_tags(tag_input.get_untracked())
                    >
                        "Add"
                    </button>
                </div>
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                {move || form.with(|f| f.submit_label())}
            </button>
        </form>
    }
}
