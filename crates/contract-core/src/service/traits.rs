//! Service Layer - Core Traits
//!
//! Thin request/response mapping over the REST API. No retry, no caching:
//! every method returns the parsed body or the transport/server error as-is.
//! Futures are `?Send` because the browser fetch binding is single-threaded.

use async_trait::async_trait;

use crate::domain::{
    ClientResult, Contract, ContractPage, ContractPayload, CreatedContract, Credentials,
    Registration, SummaryData, TokenResponse,
};
use crate::service::ContractQuery;

/// Contract CRUD plus suggestion and summary lookups
#[async_trait(?Send)]
pub trait ContractService {
    /// `GET /contracts` with pagination and AND-combined filters
    async fn list_contracts(&self, query: &ContractQuery) -> ClientResult<ContractPage>;

    /// `GET /contracts/{id}`
    async fn get_contract(&self, id: &str) -> ClientResult<Contract>;

    /// `POST /contracts`
    async fn create_contract(&self, payload: &ContractPayload) -> ClientResult<CreatedContract>;

    /// `PUT /contracts/{id}`, whole-object replace
    async fn update_contract(&self, id: &str, payload: &ContractPayload) -> ClientResult<()>;

    /// `DELETE /contracts/{id}`
    async fn delete_contract(&self, id: &str) -> ClientResult<()>;

    /// `GET /tasks`: known task names
    async fn list_task_names(&self) -> ClientResult<Vec<String>>;

    /// `GET /tags`: known tag names
    async fn list_tag_names(&self) -> ClientResult<Vec<String>>;

    /// `GET /summary`
    async fn get_summary(&self) -> ClientResult<SummaryData>;
}

/// Token issuance and account creation
#[async_trait(?Send)]
pub trait AuthService {
    /// `POST /token`, form-encoded
    async fn login(&self, credentials: &Credentials) -> ClientResult<TokenResponse>;

    /// `POST /register`
    async fn register(&self, registration: &Registration) -> ClientResult<()>;
}
