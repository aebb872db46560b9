//! Contract Detail Component
//!
//! One contract with its tasks and tags, an edit modal and inline delete
//! confirmation. After an edit the contract is fetched again rather than
//! trusting the form's copy.

use leptos::prelude::*;
use leptos::task::spawn_local;

use contract_core::state::{delete_contract, DeleteOutcome, LoadState, SubmitOutcome};
use contract_core::{Contract, ContractService};

use crate::api;
use crate::components::{ContractForm, DeleteConfirmButton, LoadFailed, Modal};
use crate::context::AppContext;
use crate::dialog::alert;
use crate::format::format_amount;

#[component]
pub fn ContractDetail(contract_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = StoredValue::new(contract_id);
    let (detail, set_detail) = signal(LoadState::<Contract>::Loading);
    let (refetch, set_refetch) = signal(0u32);
    let (show_edit, set_show_edit) = signal(false);
    let (deleting, set_deleting) = signal(false);

    Effect::new(move |_| {
        refetch.track();
        if detail.with_untracked(|d| d.error().is_some()) {
            set_detail.set(LoadState::Loading);
        }
        let id = id.get_value();
        spawn_local(async move {
            let result = api::client().get_contract(&id).await;
            if let Err(e) = &result {
                log::error!("There was an error fetching contract {}: {}", id, e);
                if ctx.handle_auth_error(e) {
                    return;
                }
            }
            set_detail.set(LoadState::from_result(
                result.map_err(|_| "Failed to fetch contract. Please try again later."),
            ));
        });
    });

    let editing = Signal::derive(move || detail.with(|d| d.loaded().cloned()));

    let on_delete = move || {
        set_deleting.set(true);
        let id = id.get_value();
        spawn_local(async move {
            match delete_contract(&api::client(), &id).await {
                DeleteOutcome::Deleted { next } => {
                    log::info!("deleted contract {}", id);
                    ctx.reload();
                    ctx.navigate(next);
                }
                DeleteOutcome::Failed { message, error } => {
                    set_deleting.set(false);
                    if !ctx.handle_auth_error(&error) {
                        alert(&message);
                    }
                }
            }
        });
    };

    view! {
        <div class="contract-detail">
            <a class="back-link" href="#/">"← Back to contracts"</a>

            {move || match detail.get() {
                LoadState::Loading => view! {
                    <p class="loading">"Loading contract..."</p>
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <LoadFailed message=message on_retry=move || set_refetch.update(|n| *n += 1) />
                }.into_any(),
                LoadState::Loaded(contract) => view! {
                    <div class="detail-card">
                        <div class="detail-header">
                            <h2>{contract.name.clone()}</h2>
                            <div class="detail-actions">
                                <button class="btn btn-primary" on:click=move |_| set_show_edit.set(true)>
                                    "Edit"
                                </button>
                                <DeleteConfirmButton
                                    prompt="Delete this contract?"
                                    busy=deleting
                                    on_confirm=on_delete
                                />
                            </div>
                        </div>

                        <table class="task-table">
                            <thead>
                                <tr><th>"Task"</th><th>"Amount"</th></tr>
                            </thead>
                            <tbody>
                                {contract.tasks.iter().map(|task| view! {
                                    <tr>
                                        <td>{task.name.clone()}</td>
                                        <td>{format_amount(task.amount)}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                            <tfoot>
                                <tr>
                                    <th>"Total"</th>
                                    <th>{format_amount(contract.total_amount)}</th>
                                </tr>
                            </tfoot>
                        </table>

                        <div class="tag-chips">
                            {contract.tags.iter().map(|tag| view! {
                                <span class="tag-chip">{tag.clone()}</span>
                            }).collect_view()}
                        </div>
                    </div>
                }.into_any(),
            }}

            <Modal
                title="Edit Contract"
                open=show_edit
                on_close=move || set_show_edit.set(false)
            >
                <ContractForm
                    contract=editing
                    open=show_edit
                    on_saved=move |_: SubmitOutcome| {
                        set_show_edit.set(false);
                        set_refetch.update(|n| *n += 1);
                        ctx.reload();
                    }
                />
            </Modal>
        </div>
    }
}
