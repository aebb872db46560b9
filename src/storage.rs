//! Browser Token Storage
//!
//! `TokenStore` backed by `window.localStorage`.

use contract_core::{ClientError, ClientResult, TokenStore};

#[derive(Debug, Clone)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> ClientResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| ClientError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|_| ClientError::Storage("localStorage access denied".to_string()))?
            .ok_or_else(|| ClientError::Storage("localStorage unavailable".to_string()))
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage().ok()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        Self::storage()?
            .set_item(&self.key, token)
            .map_err(|_| ClientError::Storage("could not write token".to_string()))
    }

    fn clear(&self) -> ClientResult<()> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|_| ClientError::Storage("could not remove token".to_string()))
    }
}
