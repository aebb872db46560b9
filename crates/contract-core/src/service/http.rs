//! REST Client
//!
//! reqwest-backed implementation of the service traits. On wasm32 reqwest
//! goes through the browser's fetch; on the host it is used by the tests.

use async_trait::async_trait;
use percent_encoding::utf8_percent_encode;
use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::domain::{
    ClientError, ClientResult, Contract, ContractPage, ContractPayload, CreatedContract,
    Credentials, Registration, SummaryData, TokenResponse,
};
use crate::route::PATH_SEGMENT;
use crate::service::{AuthService, ContractQuery, ContractService};

/// HTTP client for the contract API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    /// Create an unauthenticated client.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            token: None,
        }
    }

    /// Attach a bearer token to every subsequent request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    /// Build a request, adding `Authorization` when a token is held.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        req
    }

    /// Send and turn non-success statuses into `ClientError`.
    async fn send(&self, req: RequestBuilder) -> ClientResult<Response> {
        let response = req
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ClientError::from_status(status.as_u16(), &body);
        log::warn!("request failed: {}", err);
        Err(err)
    }

    async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        self.send(req)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

fn contract_path(id: &str) -> String {
    format!("/contracts/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

#[async_trait(?Send)]
impl ContractService for ApiClient {
    async fn list_contracts(&self, query: &ContractQuery) -> ClientResult<ContractPage> {
        log::debug!(
            "listing contracts page={} tags={:?} search={:?}",
            query.page,
            query.tags,
            query.search
        );
        let req = self.request(Method::GET, "/contracts").query(&query.params());
        let page: ContractPage = self.send_json(req).await?;
        log::debug!("loaded {} of {} contracts", page.contracts.len(), page.total_count);
        Ok(page)
    }

    async fn get_contract(&self, id: &str) -> ClientResult<Contract> {
        log::debug!("fetching contract {}", id);
        self.send_json(self.request(Method::GET, &contract_path(id))).await
    }

    async fn create_contract(&self, payload: &ContractPayload) -> ClientResult<CreatedContract> {
        log::debug!("creating contract {:?} with {} tasks", payload.name, payload.tasks.len());
        let req = self.request(Method::POST, "/contracts").json(payload);
        let created: CreatedContract = self.send_json(req).await?;
        log::info!("created contract {}", created.inserted_id);
        Ok(created)
    }

    async fn update_contract(&self, id: &str, payload: &ContractPayload) -> ClientResult<()> {
        log::debug!("updating contract {}", id);
        let req = self.request(Method::PUT, &contract_path(id)).json(payload);
        self.send(req).await?;
        log::info!("updated contract {}", id);
        Ok(())
    }

    async fn delete_contract(&self, id: &str) -> ClientResult<()> {
        log::debug!("deleting contract {}", id);
        self.send(self.request(Method::DELETE, &contract_path(id))).await?;
        log::info!("deleted contract {}", id);
        Ok(())
    }

    async fn list_task_names(&self) -> ClientResult<Vec<String>> {
        self.send_json(self.request(Method::GET, "/tasks")).await
    }

    async fn list_tag_names(&self) -> ClientResult<Vec<String>> {
        self.send_json(self.request(Method::GET, "/tags")).await
    }

    async fn get_summary(&self) -> ClientResult<SummaryData> {
        self.send_json(self.request(Method::GET, "/summary")).await
    }
}

#[async_trait(?Send)]
impl AuthService for ApiClient {
    async fn login(&self, credentials: &Credentials) -> ClientResult<TokenResponse> {
        let req = self.request(Method::POST, "/token").form(credentials);
        self.send_json(req).await
    }

    async fn register(&self, registration: &Registration) -> ClientResult<()> {
        let req = self.request(Method::POST, "/register").json(registration);
        self.send(req).await?;
        log::info!("registered {}", registration.username);
        Ok(())
    }
}
