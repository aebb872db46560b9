//! Contract Manager Core
//!
//! Everything the browser app needs that does not touch the DOM:
//! - domain: Contract, Task, summary and auth payloads, error types
//! - service: REST client and the traits views program against
//! - state: form, listing, detail and load-state machines
//! - session / route: token handling and the route guard

pub mod config;
pub mod domain;
pub mod route;
pub mod service;
pub mod session;
pub mod state;

pub use config::{ApiConfig, PAGE_SIZE, REGISTER_REDIRECT_DELAY_MS};
pub use domain::{
    ClientError, ClientResult, Contract, ContractPage, ContractPayload, CreatedContract,
    Credentials, FormError, Registration, SummaryData, Task, TokenResponse, ValidationError,
};
pub use route::Route;
pub use service::{ApiClient, AuthService, ContractQuery, ContractService};
pub use session::{MemoryTokenStore, Session, TokenStore};
