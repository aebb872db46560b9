//! Application Context
//!
//! Shared state provided via Leptos Context API: the current route, whether a
//! session token is held, and a reload trigger for views that list contracts.

use leptos::prelude::*;

use contract_core::{ClientError, Route};

use crate::api;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current view - read
    pub route: ReadSignal<Route>,
    /// Current view - write
    set_route: WriteSignal<Route>,
    /// Whether a token is stored - read
    pub authenticated: ReadSignal<bool>,
    /// Whether a token is stored - write
    set_authenticated: WriteSignal<bool>,
    /// Bumped after any successful create/update/delete - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after any successful create/update/delete - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        authenticated: (ReadSignal<bool>, WriteSignal<bool>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            authenticated: authenticated.0,
            set_authenticated: authenticated.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Show `route` and mirror it into the URL hash.
    pub fn navigate(&self, route: Route) {
        let path = route.path();
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&path);
        }
    }

    /// Follow a hash change made outside the app (back button, typed URL).
    pub fn follow_location(&self) {
        let route = Route::parse(&current_hash());
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    /// Trigger a reload of contract listings
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// A token was just stored
    pub fn signed_in(&self) {
        self.set_authenticated.set(true);
    }

    /// Drop the token and return to the login view
    pub fn logout(&self) {
        if let Err(e) = api::session().logout() {
            log::error!("could not clear session: {}", e);
        }
        self.set_authenticated.set(false);
        self.navigate(Route::Login);
    }

    /// Treat a 401 from any authenticated call as an ended session.
    /// Returns true when the error was handled that way.
    pub fn handle_auth_error(&self, err: &ClientError) -> bool {
        if err.is_unauthorized() {
            log::warn!("session rejected by server, signing out");
            self.logout();
            true
        } else {
            false
        }
    }
}

/// The URL fragment, e.g. `#/contracts/65a1`
pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}
