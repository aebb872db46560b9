//! Tag Filter Component
//!
//! Toggle chips for filtering the contract listing by tag.

use leptos::prelude::*;

#[component]
pub fn TagFilter(
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="tag-filter">
            <For
                each=move || options.get()
                key=|tag| tag.clone()
                children=move |tag| {
                    let name = tag.clone();
                    let is_selected = move || selected.with(|s| s.contains(&name));
                    let tag_for_click = tag.clone();
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "tag-chip filter active" } else { "tag-chip filter" }
                            on:click=move |_| on_toggle.run(tag_for_click.clone())
                        >
                            {tag}
                        </button>
                    }
                }
            />
        </div>
    }
}
