//! View State
//!
//! Plain state machines behind each view. Components hold these in signals
//! and call into them; all decisions that can be tested live here.

mod detail;
mod form;
mod listing;
mod load;
mod suggest;

pub use detail::{delete_contract, DeleteOutcome};
pub use form::{
    ContractFormState, FormMode, SubmitOutcome, SuggestionFailure, SuggestionLists, TaskDraft,
};
pub use listing::{ListRequest, ListingState};
pub use load::LoadState;
pub use suggest::{committed_text, fuzzy_match, same_name, suggest};
