//! API Wrappers
//!
//! Frontend access to the REST client, built per call from the build-time
//! config and whatever token is currently stored.

use contract_core::{ApiClient, ApiConfig, Session};

use crate::storage::LocalStorageTokenStore;

/// Session over the browser's local storage
pub fn session() -> Session<LocalStorageTokenStore> {
    let config = ApiConfig::from_build_env();
    Session::new(LocalStorageTokenStore::new(config.token_key))
}

/// Client carrying the stored bearer token, if any
pub fn client() -> ApiClient {
    ApiClient::new(ApiConfig::from_build_env()).with_token(session().token())
}
