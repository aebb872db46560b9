//! Service Layer
//!
//! The traits views program against and the reqwest-backed implementation.

mod http;
mod query;
mod traits;

#[cfg(test)]
pub mod mock;

pub use http::ApiClient;
pub use query::ContractQuery;
pub use traits::{AuthService, ContractService};
