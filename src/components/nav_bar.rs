//! Navigation Bar Component
//!
//! Brand link plus the actions available to a signed-in user.

use leptos::prelude::*;

use contract_core::Route;

use crate::context::AppContext;

/// Top navigation bar
#[component]
pub fn NavBar(#[prop(into)] on_create: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let nav_class = move |target: Route| {
        if ctx.route.get() == target { "nav-link active" } else { "nav-link" }
    };

    view! {
        <nav class="navbar">
            <a class="navbar-brand" href="#/">"LensContract"</a>
            <Show
                when=move || ctx.authenticated.get()
                fallback=move || view! {
                    <div class="navbar-actions">
                        <a class=move || nav_class(Route::Login) href="#/login">"Login"</a>
                        <a class=move || nav_class(Route::Register) href="#/register">"Register"</a>
                    </div>
                }
            >
                <div class="navbar-actions">
                    <a class=move || nav_class(Route::Home) href="#/">"Contracts"</a>
                    <a class=move || nav_class(Route::Summary) href="#/summary">"Summary"</a>
                    <button class="btn btn-primary" on:click=move |_| on_create.run(())>
                        "Create Contract"
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| ctx.logout()>"Logout"</button>
                </div>
            </Show>
        </nav>
    }
}
