//! Summary View Component
//!
//! Aggregate counts across all contracts.

use leptos::prelude::*;
use leptos::task::spawn_local;

use contract_core::state::LoadState;
use contract_core::{ContractService, SummaryData};

use crate::api;
use crate::components::LoadFailed;
use crate::context::AppContext;
use crate::format::format_amount;

fn ranked_list(title: &'static str, entries: Vec<(String, u64)>) -> impl IntoView {
    let body = if entries.is_empty() {
        view! { <p class="empty-state">"Nothing yet."</p> }.into_any()
    } else {
        view! {
            <ul class="summary-list">
                {entries.into_iter().map(|(name, count)| view! {
                    <li>
                        <span class="summary-name">{name}</span>
                        <span class="summary-count">{count}</span>
                    </li>
                }).collect_view()}
            </ul>
        }.into_any()
    };

    view! {
        <section class="summary-section">
            <h3>{title}</h3>
            {body}
        </section>
    }
}

#[component]
pub fn SummaryView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (summary, set_summary) = signal(LoadState::<SummaryData>::Loading);
    let (retry, set_retry) = signal(0u32);

    Effect::new(move |_| {
        retry.track();
        ctx.reload_trigger.track();
        spawn_local(async move {
            let result = api::client().get_summary().await;
            if let Err(e) = &result {
                log::error!("There was an error fetching the summary: {}", e);
                if ctx.handle_auth_error(e) {
                    return;
                }
            }
            set_summary.set(LoadState::from_result(
                result.map_err(|_| "Failed to fetch summary. Please try again later."),
            ));
        });
    });

    view! {
        <div class="summary-view">
            <h2>"Summary"</h2>
            {move || match summary.get() {
                LoadState::Loading => view! {
                    <p class="loading">"Loading summary..."</p>
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <LoadFailed
                        message=message
                        on_retry=move || {
                            set_summary.set(LoadState::Loading);
                            set_retry.update(|n| *n += 1);
                        }
                    />
                }.into_any(),
                LoadState::Loaded(data) => view! {
                    <div class="summary-totals">
                        <div class="summary-stat">
                            <span class="stat-label">"Total contracts"</span>
                            <span class="stat-value">{data.total_contracts}</span>
                        </div>
                        <div class="summary-stat">
                            <span class="stat-label">"Total amount"</span>
                            <span class="stat-value">{format_amount(data.total_amount)}</span>
                        </div>
                    </div>
                    {ranked_list("Contracts by tag", data.ranked_tags())}
                    {ranked_list("Contracts by task", data.ranked_tasks())}
                }.into_any(),
            }}
        </div>
    }
}
