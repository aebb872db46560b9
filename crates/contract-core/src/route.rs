//! Routes and Route Guard
//!
//! The app's view switch as a plain enum so the guard and the path mapping
//! can be tested without a browser.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in a single path segment; RFC 3986 unreserved ones pass.
pub(crate) const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Top-level views
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Contract listing
    #[default]
    Home,
    /// Detail view of one contract
    Contract(String),
    Summary,
    Login,
    Register,
}

impl Route {
    /// Parse a path such as `/contracts/65a1`. Unknown paths map to `Home`.
    pub fn parse(path: &str) -> Self {
        let path = path.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["contracts", id] => {
                let id = percent_decode_str(id).decode_utf8_lossy().to_string();
                Route::Contract(id)
            }
            ["summary"] => Route::Summary,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            _ => Route::Home,
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Contract(id) => format!("/contracts/{}", utf8_percent_encode(id, PATH_SEGMENT)),
            Route::Summary => "/summary".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
        }
    }

    /// Whether rendering this view needs a stored token.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }
}

/// Route guard: a pure token-presence check, no validation or expiry.
pub fn guard(route: Route, authenticated: bool) -> Route {
    if route.requires_auth() && !authenticated {
        Route::Login
    } else {
        route
    }
}
