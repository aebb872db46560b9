//! Domain Layer
//!
//! Wire types shared with the REST API plus the client-side error taxonomy.
//! This layer has no I/O.

mod auth;
mod contract;
mod error;
mod summary;

pub use auth::{Credentials, Registration, TokenResponse};
pub use contract::{Contract, ContractPage, ContractPayload, CreatedContract, Task};
pub use error::{ClientError, ClientResult, FormError, ValidationError};
pub use summary::SummaryData;
