//! Register View Component
//!
//! On success the message stays up briefly, then the login view is shown.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contract_core::session::sign_up;
use contract_core::{Registration, Route, REGISTER_REDIRECT_DELAY_MS};

use crate::api;
use crate::context::AppContext;

#[component]
pub fn RegisterView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (success, set_success) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let registration = Registration::from_form(
            &username.get_untracked(),
            &password.get_untracked(),
            &email.get_untracked(),
            &full_name.get_untracked(),
        );
        set_submitting.set(true);
        set_error.set(None);
        set_success.set(None);

        spawn_local(async move {
            match sign_up(&api::client(), &registration).await {
                Ok(message) => {
                    set_success.set(Some(message));
                    TimeoutFuture::new(REGISTER_REDIRECT_DELAY_MS).await;
                    ctx.navigate(Route::Login);
                }
                Err(message) => {
                    set_submitting.set(false);
                    set_error.set(Some(message));
                }
            }
        });
    };

    let text_field = move |label: &'static str,
                           kind: &'static str,
                           required: bool,
                           value: ReadSignal<String>,
                           set_value: WriteSignal<String>| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type=kind
                    class="form-control"
                    required=required
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="auth-view">
            <h2>"Register"</h2>
            <form class="auth-form" on:submit=on_submit>
                {text_field("Username", "text", true, username, set_username)}
                {text_field("Password", "password", true, password, set_password)}
                {text_field("Email", "email", false, email, set_email)}
                {text_field("Full Name", "text", false, full_name, set_full_name)}
                {move || error.get().map(|message| view! { <p class="error-text">{message}</p> })}
                {move || success.get().map(|message| view! { <p class="success-text">{message}</p> })}
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    "Register"
                </button>
            </form>
            <p class="auth-switch">
                "Already registered? " <a href="#/login">"Login"</a>
            </p>
        </div>
    }
}
