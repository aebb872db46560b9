//! UI Components
//!
//! Views and the reusable pieces they are built from.

mod contract_detail;
mod contract_form;
mod delete_confirm_button;
mod home_view;
mod load_failed;
mod login_view;
mod modal;
mod nav_bar;
mod pagination;
mod register_view;
mod suggest_input;
mod summary_view;
mod tag_filter;

pub use contract_detail::ContractDetail;
pub use contract_form::ContractForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use home_view::HomeView;
pub use load_failed::LoadFailed;
pub use login_view::LoginView;
pub use modal::Modal;
pub use nav_bar::NavBar;
pub use pagination::Pagination;
pub use register_view::RegisterView;
pub use suggest_input::SuggestInput;
pub use summary_view::SummaryView;
pub use tag_filter::TagFilter;
