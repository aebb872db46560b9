//! Mock service for deterministic testing.
//!
//! Records every call and answers from configurable canned results.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::domain::{
    ClientError, ClientResult, Contract, ContractPage, ContractPayload, CreatedContract,
    Credentials, Registration, SummaryData, TokenResponse,
};
use crate::service::{AuthService, ContractQuery, ContractService};

/// One recorded call
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
    List(ContractQuery),
    Get(String),
    Create(ContractPayload),
    Update(String, ContractPayload),
    Delete(String),
    ListTaskNames,
    ListTagNames,
    Summary,
    Login(String),
    Register(String),
}

#[derive(Debug, Clone)]
struct MockResponses {
    page: ClientResult<ContractPage>,
    contract: Option<ClientResult<Contract>>,
    create: ClientResult<CreatedContract>,
    update: ClientResult<()>,
    delete: ClientResult<()>,
    task_names: ClientResult<Vec<String>>,
    tag_names: ClientResult<Vec<String>>,
    summary: ClientResult<SummaryData>,
    login: ClientResult<String>,
    register: ClientResult<()>,
}

impl Default for MockResponses {
    fn default() -> Self {
        Self {
            page: Ok(ContractPage::default()),
            contract: None,
            create: Ok(CreatedContract {
                inserted_id: "mock-1".to_string(),
            }),
            update: Ok(()),
            delete: Ok(()),
            task_names: Ok(Vec::new()),
            tag_names: Ok(Vec::new()),
            summary: Ok(SummaryData::default()),
            login: Ok("mock-token".to_string()),
            register: Ok(()),
        }
    }
}

/// Recording in-memory implementation of both service traits.
///
/// Clones share the same call log and responses.
#[derive(Debug, Clone, Default)]
pub struct MockContractService {
    responses: Rc<RefCell<MockResponses>>,
    call_log: Rc<RefCell<Vec<ServiceCall>>>,
}

impl MockContractService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.call_log.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.call_log.borrow().len()
    }

    pub fn clear_calls(&self) {
        self.call_log.borrow_mut().clear();
    }

    pub fn set_page(&self, result: ClientResult<ContractPage>) {
        self.responses.borrow_mut().page = result;
    }

    pub fn set_contract(&self, result: ClientResult<Contract>) {
        self.responses.borrow_mut().contract = Some(result);
    }

    pub fn set_create(&self, result: ClientResult<CreatedContract>) {
        self.responses.borrow_mut().create = result;
    }

    pub fn set_update(&self, result: ClientResult<()>) {
        self.responses.borrow_mut().update = result;
    }

    pub fn set_delete(&self, result: ClientResult<()>) {
        self.responses.borrow_mut().delete = result;
    }

    pub fn set_task_names(&self, result: ClientResult<Vec<String>>) {
        self.responses.borrow_mut().task_names = result;
    }

    pub fn set_tag_names(&self, result: ClientResult<Vec<String>>) {
        self.responses.borrow_mut().tag_names = result;
    }

    pub fn set_summary(&self, result: ClientResult<SummaryData>) {
        self.responses.borrow_mut().summary = result;
    }

    /// Token returned by a successful login, or the login failure.
    pub fn set_login(&self, result: ClientResult<String>) {
        self.responses.borrow_mut().login = result;
    }

    pub fn set_register(&self, result: ClientResult<()>) {
        self.responses.borrow_mut().register = result;
    }

    fn record(&self, call: ServiceCall) {
        self.call_log.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl ContractService for MockContractService {
    async fn list_contracts(&self, query: &ContractQuery) -> ClientResult<ContractPage> {
        self.record(ServiceCall::List(query.clone()));
        self.responses.borrow().page.clone()
    }

    async fn get_contract(&self, id: &str) -> ClientResult<Contract> {
        self.record(ServiceCall::Get(id.to_string()));
        self.responses.borrow().contract.clone().unwrap_or_else(|| {
            Err(ClientError::Api {
                status: 404,
                detail: Some("Contract not found".to_string()),
            })
        })
    }

    async fn create_contract(&self, payload: &ContractPayload) -> ClientResult<CreatedContract> {
        self.record(ServiceCall::Create(payload.clone()));
        self.responses.borrow().create.clone()
    }

    async fn update_contract(&self, id: &str, payload: &ContractPayload) -> ClientResult<()> {
        self.record(ServiceCall::Update(id.to_string(), payload.clone()));
        self.responses.borrow().update.clone()
    }

    async fn delete_contract(&self, id: &str) -> ClientResult<()> {
        self.record(ServiceCall::Delete(id.to_string()));
        self.responses.borrow().delete.clone()
    }

    async fn list_task_names(&self) -> ClientResult<Vec<String>> {
        self.record(ServiceCall::ListTaskNames);
        self.responses.borrow().task_names.clone()
    }

    async fn list_tag_names(&self) -> ClientResult<Vec<String>> {
        self.record(ServiceCall::ListTagNames);
        self.responses.borrow().tag_names.clone()
    }

    async fn get_summary(&self) -> ClientResult<SummaryData> {
        self.record(ServiceCall::Summary);
        self.responses.borrow().summary.clone()
    }
}

#[async_trait(?Send)]
impl AuthService for MockContractService {
    async fn login(&self, credentials: &Credentials) -> ClientResult<TokenResponse> {
        self.record(ServiceCall::Login(credentials.username.clone()));
        self.responses
            .borrow()
            .login
            .clone()
            .map(|access_token| TokenResponse {
                access_token,
                token_type: Some("bearer".to_string()),
            })
    }

    async fn register(&self, registration: &Registration) -> ClientResult<()> {
        self.record(ServiceCall::Register(registration.username.clone()));
        self.responses.borrow().register.clone()
    }
}
