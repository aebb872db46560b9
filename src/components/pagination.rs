//! Pagination Component

use leptos::prelude::*;

use contract_core::state::ListingState;

/// Range label plus previous / numbered / next page buttons.
/// Out-of-range moves are disabled here, never sent to the server.
#[component]
pub fn Pagination(listing: RwSignal<ListingState>) -> impl IntoView {
    let total_pages = Memo::new(move |_| listing.with(|s| s.total_pages()));
    let current = Memo::new(move |_| listing.with(|s| s.page));

    view! {
        <div class="pagination-bar">
            <span class="range-label">{move || listing.with(|s| s.range_label())}</span>
            <div class="pagination">
                <button
                    class="page-btn"
                    disabled=move || !listing.with(|s| s.can_go_previous())
                    on:click=move |_| {
                        listing.update(|s| {
                            s.previous_page();
                        });
                    }
                >
                    "Previous"
                </button>
                <For
                    each=move || 1..=total_pages.get()
                    key=|page| *page
                    children=move |page| {
                        view! {
                            <button
                                class=move || if current.get() == page { "page-btn active" } else { "page-btn" }
                                on:click=move |_| {
                                    listing.update(|s| {
                                        s.go_to_page(page);
                                    });
                                }
                            >
                                {page}
                            </button>
                        }
                    }
                />
                <button
                    class="page-btn"
                    disabled=move || !listing.with(|s| s.can_go_next())
                    on:click=move |_| {
                        listing.update(|s| {
                            s.next_page();
                        });
                    }
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
