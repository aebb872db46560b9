//! Login View Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use contract_core::session::sign_in;
use contract_core::Credentials;

use crate::api;
use crate::context::AppContext;

#[component]
pub fn LoginView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let credentials = Credentials::new(username.get_untracked(), password.get_untracked());
        set_submitting.set(true);
        set_error.set(None);

        spawn_local(async move {
            let session = api::session();
            let result = sign_in(&api::client(), &session, &credentials).await;
            set_submitting.set(false);
            match result {
                Ok(next) => {
                    ctx.signed_in();
                    ctx.navigate(next);
                }
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="auth-view">
            <h2>"Login"</h2>
            <form class="auth-form" on:submit=on_submit>
                <div class="form-group">
                    <label>"Username"</label>
                    <input
                        type="text"
                        class="form-control"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Password"</label>
                    <input
                        type="password"
                        class="form-control"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                {move || error.get().map(|message| view! { <p class="error-text">{message}</p> })}
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    "Login"
                </button>
            </form>
            <p class="auth-switch">
                "No account? " <a href="#/register">"Register"</a>
            </p>
        </div>
    }
}
