//! Contract Form State
//!
//! Name, ordered task list and tag set for the create/edit form. The mode
//! decides whether a submit creates or updates.

use crate::domain::{ClientError, Contract, ContractPayload, FormError, Task, ValidationError};
use crate::service::ContractService;
use crate::state::same_name;

/// Create a new contract or replace an existing one
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(String),
}

/// A task row while it is being edited
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub name: String,
    /// NaN when the amount field holds something that is not a number
    pub amount: f64,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            amount: 0.0,
        }
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            amount: task.amount,
        }
    }
}

/// Server-supplied vocabularies for the autocomplete inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionLists {
    pub tasks: Vec<String>,
    pub tags: Vec<String>,
}

/// What a successful submit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { id: String },
    Updated { id: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContractFormState {
    pub mode: FormMode,
    pub name: String,
    pub tasks: Vec<TaskDraft>,
    pub tags: Vec<String>,
}

impl ContractFormState {
    /// Empty form in create mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-populated from an existing contract, submitting as an update.
    pub fn editing(contract: &Contract) -> Self {
        Self {
            mode: FormMode::Edit(contract.id.clone()),
            name: contract.name.clone(),
            tasks: contract.tasks.iter().map(TaskDraft::from).collect(),
            tags: contract.tags.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Update Contract"
        } else {
            "Create Contract"
        }
    }

    // ========================
    // Tasks
    // ========================

    pub fn add_task(&mut self) {
        self.tasks.push(TaskDraft::default());
    }

    pub fn remove_task(&mut self, index: usize) {
        if index < self.tasks.len() {
            self.tasks.remove(index);
        }
    }

    pub fn set_task_name(&mut self, index: usize, name: impl Into<String>) {
        if let Some(task) = self.tasks.get_mut(index) {
            task.name = name.into();
        }
    }

    pub fn set_task_amount(&mut self, index: usize, amount: f64) {
        if let Some(task) = self.tasks.get_mut(index) {
            task.amount = amount;
        }
    }

    /// Set an amount from raw input text.
    pub fn set_task_amount_input(&mut self, index: usize, input: &str) {
        let amount = input.trim().parse::<f64>().unwrap_or(f64::NAN);
        self.set_task_amount(index, amount);
    }

    // ========================
    // Tags
    // ========================

    /// Create-or-select: reuse the spelling of a known tag when the name
    /// matches one case-insensitively, otherwise keep the typed name.
    /// Blank names and duplicates are ignored. Returns whether a tag was added.
    pub fn add_tag(&mut self, name: &str, known: &[String]) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        if self.tags.iter().any(|t| same_name(t, name)) {
            return false;
        }
        let tag = known
            .iter()
            .find(|k| same_name(k, name))
            .cloned()
            .unwrap_or_else(|| name.to_string());
        self.tags.push(tag);
        true
    }

    /// Add every `;`-separated name in `input`; returns how many were new.
    pub fn add_tags_from_input(&mut self, input: &str, known: &[String]) -> usize {
        input
            .split(';')
            .filter(|name| self.add_tag(name, known))
            .count()
    }

    pub fn remove_tag(&mut self, name: &str) {
        self.tags.retain(|t| t != name);
    }

    // ========================
    // Submission
    // ========================

    /// Check the form and build the request body.
    ///
    /// The name is sent exactly as typed; trimming is only used to reject
    /// blank values.
    pub fn validate(&self) -> Result<ContractPayload, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.tasks.is_empty() {
            return Err(ValidationError::NoTasks);
        }
        for (index, task) in self.tasks.iter().enumerate() {
            if task.name.trim().is_empty() {
                return Err(ValidationError::EmptyTaskName { index });
            }
            // NaN fails this comparison too
            if !(task.amount > 0.0) {
                return Err(ValidationError::NonPositiveAmount { index });
            }
        }

        Ok(ContractPayload {
            name: self.name.clone(),
            tasks: self
                .tasks
                .iter()
                .map(|t| Task::new(t.name.clone(), t.amount))
                .collect(),
            tags: self.tags.clone(),
        })
    }

    /// Validate, then issue exactly one create or update.
    ///
    /// Validation failures make no request. A successful create clears the
    /// form for reuse; an update or any failure leaves it populated.
    pub async fn submit<S>(&mut self, service: &S) -> Result<SubmitOutcome, FormError>
    where
        S: ContractService + ?Sized,
    {
        let payload = self.validate()?;

        match self.mode.clone() {
            FormMode::Create => {
                let created = service.create_contract(&payload).await.map_err(|e| {
                    log::error!("There was an error creating the contract: {}", e);
                    e
                })?;
                *self = Self::new();
                Ok(SubmitOutcome::Created {
                    id: created.inserted_id,
                })
            }
            FormMode::Edit(id) => {
                service.update_contract(&id, &payload).await.map_err(|e| {
                    log::error!("There was an error updating the contract: {}", e);
                    e
                })?;
                Ok(SubmitOutcome::Updated { id })
            }
        }
    }
}

impl SuggestionLists {
    /// Fetch both vocabularies. Each list that fails to load comes back
    /// empty; the failure is reported with the message to show for it.
    pub async fn fetch<S>(service: &S) -> (Self, Vec<SuggestionFailure>)
    where
        S: ContractService + ?Sized,
    {
        let mut failures = Vec::new();

        let tasks = service.list_task_names().await.unwrap_or_else(|error| {
            log::error!("There was an error fetching task suggestions: {}", error);
            failures.push(SuggestionFailure {
                message: "Failed to fetch task suggestions.",
                error,
            });
            Vec::new()
        });
        let tags = service.list_tag_names().await.unwrap_or_else(|error| {
            log::error!("There was an error fetching tag suggestions: {}", error);
            failures.push(SuggestionFailure {
                message: "Failed to fetch tag suggestions.",
                error,
            });
            Vec::new()
        });

        (Self { tasks, tags }, failures)
    }
}

/// A suggestion list that could not be loaded
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionFailure {
    pub message: &'static str,
    pub error: ClientError,
}
