//! Contract Manager App
//!
//! Root component: nav bar, create modal and the guarded route switch.

use leptos::ev;
use leptos::prelude::*;

use contract_core::route::guard;
use contract_core::state::SubmitOutcome;
use contract_core::{Contract, Route};

use crate::api;
use crate::components::{
    ContractDetail, ContractForm, HomeView, LoginView, Modal, NavBar, RegisterView, SummaryView,
};
use crate::context::{current_hash, AppContext};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (route, set_route) = signal(Route::parse(&current_hash()));
    let (authenticated, set_authenticated) = signal(api::session().is_authenticated());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (show_create, set_show_create) = signal(false);

    let ctx = AppContext::new(
        (route, set_route),
        (authenticated, set_authenticated),
        (reload_trigger, set_reload_trigger),
    );
    provide_context(ctx);

    // Back/forward buttons and hand-edited URLs
    let _ = window_event_listener(ev::Custom::<web_sys::Event>::new("hashchange"), move |_| ctx.follow_location());

    // Unauthenticated navigation to a protected view lands on the login view
    Effect::new(move |_| {
        let current = route.get();
        let allowed = guard(current.clone(), authenticated.get());
        if allowed != current {
            log::debug!("redirecting {} to {}", current.path(), allowed.path());
            ctx.navigate(allowed);
        }
    });

    view! {
        <NavBar on_create=move || set_show_create.set(true) />

        <Modal
            title="Create Contract"
            open=show_create
            on_close=move || set_show_create.set(false)
        >
            <ContractForm
                contract=Signal::stored(None::<Contract>)
                open=show_create
                on_saved=move |_: SubmitOutcome| {
                    set_show_create.set(false);
                    ctx.reload();
                }
            />
        </Modal>

        <main class="container">
            {move || match guard(route.get(), authenticated.get()) {
                Route::Home => view! { <HomeView /> }.into_any(),
                Route::Contract(id) => view! { <ContractDetail contract_id=id /> }.into_any(),
                Route::Summary => view! { <SummaryView /> }.into_any(),
                Route::Login => view! { <LoginView /> }.into_any(),
                Route::Register => view! { <RegisterView /> }.into_any(),
            }}
        </main>
    }
}
