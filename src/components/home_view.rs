//! Home View Component
//!
//! Paginated contract listing with search and tag filters. Every distinct
//! (page, tags, search) combination issues one request; responses to
//! superseded requests are dropped by `ListingState`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use contract_core::state::{ListingState, LoadState};
use contract_core::{Contract, ContractService, Route, PAGE_SIZE};

use crate::api;
use crate::components::{LoadFailed, Pagination, TagFilter};
use crate::context::AppContext;
use crate::dialog::alert;
use crate::format::format_amount;

#[component]
fn ContractCard(contract: Contract) -> impl IntoView {
    let href = format!("#{}", Route::Contract(contract.id.clone()).path());
    let task_count = contract.tasks.len();

    view! {
        <a class="contract-card" href=href>
            <h3 class="contract-card-title">{contract.name}</h3>
            <p class="contract-card-total">{format_amount(contract.total_amount)}</p>
            <p class="contract-card-tasks">
                {task_count} {if task_count == 1 { " task" } else { " tasks" }}
            </p>
            <div class="tag-chips">
                {contract.tags.into_iter().map(|tag| view! {
                    <span class="tag-chip">{tag}</span>
                }).collect_view()}
            </div>
        </a>
    }
}

#[component]
pub fn HomeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let listing = RwSignal::new(ListingState::new(PAGE_SIZE));
    let (tag_options, set_tag_options) = signal(Vec::<String>::new());
    let (retry, set_retry) = signal(0u32);

    // Tag vocabulary for the filter, once per mount
    spawn_local(async move {
        match api::client().list_tag_names().await {
            Ok(tags) => set_tag_options.set(tags),
            Err(e) => {
                log::error!("There was an error fetching the tags: {}", e);
                if !ctx.handle_auth_error(&e) {
                    alert("Failed to fetch tags. Please try again later.");
                }
            }
        }
    });

    // One fetch per distinct query, plus explicit reloads and retries
    let query = Memo::new(move |_| listing.with(|s| s.query()));
    Effect::new(move |_| {
        query.track();
        ctx.reload_trigger.track();
        retry.track();

        let Some(request) = listing.try_update(|s| s.begin_fetch()) else {
            return;
        };
        log::debug!("fetching contracts: {:?}", request.query.params());
        spawn_local(async move {
            let result = api::client().list_contracts(&request.query).await;
            if let Err(e) = &result {
                if ctx.handle_auth_error(e) {
                    return;
                }
            }
            listing.update(|s| {
                s.finish_fetch(request.seq, result);
            });
        });
    });

    let selected_tags = Signal::derive(move || listing.with(|s| s.selected_tags.clone()));

    view! {
        <div class="home-view">
            <div class="filters">
                <input
                    type="search"
                    class="form-control search-input"
                    placeholder="Search contracts..."
                    prop:value=move || listing.with(|s| s.search_term.clone())
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        listing.update(|s| {
                            s.set_search(term);
                        });
                    }
                />
                <TagFilter
                    options=tag_options
                    selected=selected_tags
                    on_toggle=move |tag: String| {
                        listing.update(|s| {
                            s.toggle_tag(&tag);
                        });
                    }
                />
            </div>

            {move || {
                let contracts = listing.with(|s| s.contracts.clone());
                match contracts {
                    LoadState::Loading => view! {
                        <p class="loading">"Loading contracts..."</p>
                    }.into_any(),
                    LoadState::Failed(message) => view! {
                        <LoadFailed message=message on_retry=move || set_retry.update(|n| *n += 1) />
                    }.into_any(),
                    LoadState::Loaded(list) if list.is_empty() => view! {
                        <p class="empty-state">"No contracts found."</p>
                    }.into_any(),
                    LoadState::Loaded(list) => view! {
                        <div class="contract-grid">
                            {list.into_iter().map(|contract| view! {
                                <ContractCard contract=contract />
                            }).collect_view()}
                        </div>
                    }.into_any(),
                }
            }}

            <Pagination listing=listing />
        </div>
    }
}
