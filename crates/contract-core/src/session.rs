//! Session
//!
//! The bearer token lives in client-local persistent storage under a fixed
//! key; its presence is the only authentication signal. The token is opaque.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{ClientError, ClientResult, Credentials, Registration};
use crate::route::Route;
use crate::service::AuthService;

/// Persistent key-value slot for the token
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;
}

/// In-memory store (tests, or when browser storage is unavailable)
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        self.token.borrow_mut().take();
        Ok(())
    }
}

/// Explicit login/logout transitions over a token store
#[derive(Debug, Clone)]
pub struct Session<S: TokenStore> {
    store: S,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn login(&self, token: &str) -> ClientResult<()> {
        if token.is_empty() {
            return Err(ClientError::Decode("empty access token".to_string()));
        }
        self.store.save(token)
    }

    pub fn logout(&self) -> ClientResult<()> {
        self.store.clear()
    }
}

/// Submit credentials; on success persist the token and return the view to
/// show next. On failure nothing is stored and the message to display is
/// returned.
pub async fn sign_in<A, S>(api: &A, session: &Session<S>, credentials: &Credentials) -> Result<Route, String>
where
    A: AuthService + ?Sized,
    S: TokenStore,
{
    let response = api.login(credentials).await.map_err(|e| {
        log::warn!("login failed for {}: {}", credentials.username, e);
        e.user_message("Login failed")
    })?;

    session.login(&response.access_token).map_err(|e| {
        log::error!("could not persist session: {}", e);
        "Login failed".to_string()
    })?;

    log::info!("signed in as {}", credentials.username);
    Ok(Route::Home)
}

/// Register a new account; returns the success message to show.
pub async fn sign_up<A>(api: &A, registration: &Registration) -> Result<String, String>
where
    A: AuthService + ?Sized,
{
    match api.register(registration).await {
        Ok(()) => Ok("Registration successful! You can now log in.".to_string()),
        Err(e) => {
            log::warn!("registration failed for {}: {}", registration.username, e);
            Err(e.user_message("Registration failed"))
        }
    }
}
