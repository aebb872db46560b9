//! Contract Entity
//!
//! A named collection of priced tasks plus free-form tags. `total_amount`
//! is computed by the backend and only ever read back.

use serde::{Deserialize, Serialize};

/// A named line item with a monetary amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub amount: f64,
}

impl Task {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Contract as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Backend-assigned identifier
    pub id: String,
    pub name: String,
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Sum of task amounts, derived server-side
    #[serde(default)]
    pub total_amount: f64,
}

impl Contract {
    /// The create/update body for this contract as it stands.
    pub fn payload(&self) -> ContractPayload {
        ContractPayload {
            name: self.name.clone(),
            tasks: self.tasks.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// Body of `POST /contracts` and `PUT /contracts/{id}`
///
/// Never carries `id` or `total_amount`; updates replace the whole object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractPayload {
    pub name: String,
    pub tasks: Vec<Task>,
    pub tags: Vec<String>,
}

/// One page of `GET /contracts`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractPage {
    pub contracts: Vec<Contract>,
    pub total_count: usize,
}

/// Response of `POST /contracts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedContract {
    pub inserted_id: String,
}
