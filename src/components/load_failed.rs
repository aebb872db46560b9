//! Load Failure Component
//!
//! Shown instead of the loading placeholder when a fetch failed.

use leptos::prelude::*;

#[component]
pub fn LoadFailed(#[prop(into)] message: String, #[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="load-failed">
            <p class="error-text">{message}</p>
            <button class="btn btn-secondary" on:click=move |_| on_retry.run(())>"Retry"</button>
        </div>
    }
}
