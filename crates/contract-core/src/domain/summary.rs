//! Summary Data
//!
//! Aggregate statistics, recomputed entirely server-side.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryData {
    pub total_contracts: u64,
    pub total_amount: f64,
    #[serde(default)]
    pub contracts_by_tags: BTreeMap<String, u64>,
    #[serde(default)]
    pub contracts_by_tasks: BTreeMap<String, u64>,
}

impl SummaryData {
    /// Tag counts, most used first.
    pub fn ranked_tags(&self) -> Vec<(String, u64)> {
        ranked(&self.contracts_by_tags)
    }

    /// Task-name counts, most used first.
    pub fn ranked_tasks(&self) -> Vec<(String, u64)> {
        ranked(&self.contracts_by_tasks)
    }
}

/// Entries by count descending, ties broken by name.
fn ranked(counts: &BTreeMap<String, u64>) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}
