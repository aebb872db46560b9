//! Listing State
//!
//! State machine over (page, selected tags, search term) driving a single
//! derived list request. Filter changes snap back to page 1. Every request
//! carries a sequence number and only the newest response is applied, so a
//! slow stale response cannot overwrite fresher results.

use crate::config::PAGE_SIZE;
use crate::domain::{ClientResult, Contract, ContractPage};
use crate::service::ContractQuery;
use crate::state::LoadState;

/// A list request tagged with its sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub seq: u64,
    pub query: ContractQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    pub page: usize,
    pub page_size: usize,
    pub selected_tags: Vec<String>,
    pub search_term: String,
    /// Total matching contracts reported by the last applied response
    pub total_count: usize,
    pub contracts: LoadState<Vec<Contract>>,
    issued: u64,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl ListingState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            selected_tags: Vec::new(),
            search_term: String::new(),
            total_count: 0,
            contracts: LoadState::Loading,
            issued: 0,
        }
    }

    // ========================
    // Filter transitions
    // ========================

    /// Change the search term. Resets to page 1; returns whether the query changed.
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        let changed = term != self.search_term || self.page != 1;
        self.search_term = term;
        self.page = 1;
        changed
    }

    /// Replace the tag selection. Resets to page 1; returns whether the query changed.
    pub fn set_tags(&mut self, tags: Vec<String>) -> bool {
        let changed = tags != self.selected_tags || self.page != 1;
        self.selected_tags = tags;
        self.page = 1;
        changed
    }

    /// Add or remove one tag from the selection.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let mut tags = self.selected_tags.clone();
        if let Some(pos) = tags.iter().position(|t| t == tag) {
            tags.remove(pos);
        } else {
            tags.push(tag.to_string());
        }
        self.set_tags(tags)
    }

    // ========================
    // Pagination
    // ========================

    /// `ceil(total_count / page_size)`
    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size)
    }

    fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    /// Jump to `page` if it is within `1..=total_pages`; out-of-range
    /// requests are ignored the way a disabled button would ignore them.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.last_page() || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn previous_page(&mut self) -> bool {
        self.can_go_previous() && self.go_to_page(self.page - 1)
    }

    pub fn next_page(&mut self) -> bool {
        self.can_go_next() && self.go_to_page(self.page + 1)
    }

    /// "Showing contracts X - Y of N", computed from page, page size and
    /// total only; the size of the returned page is not consulted.
    pub fn range_label(&self) -> String {
        let total = self.total_count;
        let start = if total == 0 {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        };
        let end = (self.page * self.page_size).min(total);
        format!("Showing contracts {} - {} of {}", start, end, total)
    }

    // ========================
    // Fetching
    // ========================

    /// The request the current state implies.
    pub fn query(&self) -> ContractQuery {
        ContractQuery {
            page: self.page,
            page_size: self.page_size,
            tags: self.selected_tags.clone(),
            search: self.search_term.clone(),
        }
    }

    /// Issue the next request; older in-flight requests become stale.
    pub fn begin_fetch(&mut self) -> ListRequest {
        self.issued += 1;
        if self.contracts.error().is_some() {
            self.contracts = LoadState::Loading;
        }
        ListRequest {
            seq: self.issued,
            query: self.query(),
        }
    }

    /// Apply a response if it answers the newest request. Returns whether it
    /// was applied.
    ///
    /// When the new total leaves the current page past the end, the page
    /// moves to the last one, which changes `query()` and calls for a refetch.
    pub fn finish_fetch(&mut self, seq: u64, result: ClientResult<ContractPage>) -> bool {
        if seq != self.issued {
            log::debug!("discarding stale listing response {} (latest {})", seq, self.issued);
            return false;
        }
        match result {
            Ok(page) => {
                self.total_count = page.total_count;
                self.contracts = LoadState::Loaded(page.contracts);
                // A reload can shrink the listing under the current page
                if self.page > self.last_page() {
                    log::debug!("page {} no longer exists, moving to {}", self.page, self.last_page());
                    self.page = self.last_page();
                }
            }
            Err(e) => {
                log::error!("There was an error fetching the contracts: {}", e);
                self.contracts = LoadState::Failed("Failed to fetch contracts. Please try again later.".to_string());
            }
        }
        true
    }
}

/// Fetch the page the state currently describes and apply the result.
#[cfg(test)]
pub(crate) async fn refresh<S>(state: &mut ListingState, service: &S) -> bool
where
    S: crate::service::ContractService + ?Sized,
{
    let request = state.begin_fetch();
    let result = service.list_contracts(&request.query).await;
    state.finish_fetch(request.seq, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClientError, ContractPayload, Task};
    use crate::service::mock::{MockContractService, ServiceCall};
    use crate::state::ContractFormState;

    fn contract(id: &str) -> Contract {
        Contract {
            id: id.to_string(),
            name: format!("Contract {}", id),
            tasks: vec![Task::new("Design", 100.0)],
            tags: vec![],
            total_amount: 100.0,
        }
    }

    fn page_of(count: usize, total: usize) -> ContractPage {
        ContractPage {
            contracts: (0..count).map(|i| contract(&i.to_string())).collect(),
            total_count: total,
        }
    }

    #[test]
    fn test_range_label_first_page() {
        let mut state = ListingState::default();
        let req = state.begin_fetch();
        state.finish_fetch(req.seq, Ok(page_of(9, 20)));
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.range_label(), "Showing contracts 1 - 9 of 20");
    }

    #[test]
    fn test_range_label_last_and_empty_page() {
        let mut state = ListingState::default();
        let req = state.begin_fetch();
        state.finish_fetch(req.seq, Ok(page_of(9, 20)));
        assert!(state.go_to_page(3));
        assert_eq!(state.range_label(), "Showing contracts 19 - 20 of 20");

        let empty = ListingState::default();
        assert_eq!(empty.total_pages(), 0);
        assert_eq!(empty.range_label(), "Showing contracts 0 - 0 of 0");
    }

    #[test]
    fn test_shrunk_total_moves_to_last_page() {
        let mut state = ListingState::default();
        let req = state.begin_fetch();
        state.finish_fetch(req.seq, Ok(page_of(9, 20)));
        assert!(state.go_to_page(3));

        let req = state.begin_fetch();
        assert_eq!(req.query.page, 3);
        assert!(state.finish_fetch(req.seq, Ok(page_of(0, 10))));

        assert_eq!(state.page, 2);
        assert_eq!(state.query().page, 2);
        assert_eq!(state.range_label(), "Showing contracts 10 - 10 of 10");
        assert!(!state.can_go_next());

        let req = state.begin_fetch();
        state.finish_fetch(req.seq, Ok(page_of(0, 0)));
        assert_eq!(state.page, 1);
        assert_eq!(state.range_label(), "Showing contracts 0 - 0 of 0");
    }

    #[test]
    fn test_page_bounds() {
        let mut state = ListingState::default();
        state.total_count = 20;
        assert!(!state.can_go_previous());
        assert!(!state.previous_page());
        assert!(!state.go_to_page(0));
        assert!(!state.go_to_page(4));
        assert!(state.next_page());
        assert!(state.next_page());
        assert!(!state.can_go_next());
        assert!(!state.next_page());
        assert_eq!(state.page, 3);
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut state = ListingState::default();
        state.total_count = 50;
        state.go_to_page(4);

        assert!(state.set_search("acme"));
        assert_eq!(state.page, 1);

        state.go_to_page(2);
        assert!(state.toggle_tag("priority"));
        assert_eq!(state.page, 1);
        assert_eq!(state.selected_tags, vec!["priority".to_string()]);

        assert!(!state.set_search("acme"));
        assert!(state.toggle_tag("priority"));
        assert!(state.selected_tags.is_empty());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = ListingState::default();
        let first = state.begin_fetch();
        state.set_search("new");
        let second = state.begin_fetch();

        assert!(state.finish_fetch(second.seq, Ok(page_of(1, 1))));
        assert!(!state.finish_fetch(first.seq, Ok(page_of(9, 40))));

        assert_eq!(state.total_count, 1);
        assert_eq!(state.contracts.loaded().map(Vec::len), Some(1));
        assert_eq!(second.query.search, "new");
    }

    #[test]
    fn test_failure_is_a_distinct_state() {
        let mut state = ListingState::default();
        let req = state.begin_fetch();
        state.finish_fetch(req.seq, Err(ClientError::Network("down".into())));
        assert_eq!(
            state.contracts.error(),
            Some("Failed to fetch contracts. Please try again later.")
        );

        state.begin_fetch();
        assert!(state.contracts.is_loading());
    }

    #[tokio::test]
    async fn test_filter_change_issues_one_request_at_page_one() {
        let service = MockContractService::new();
        service.set_page(Ok(page_of(9, 30)));
        let mut state = ListingState::default();
        refresh(&mut state, &service).await;
        state.go_to_page(3);
        refresh(&mut state, &service).await;
        service.clear_calls();

        state.set_tags(vec!["legal".to_string()]);
        refresh(&mut state, &service).await;

        assert_eq!(
            service.calls(),
            vec![ServiceCall::List(ContractQuery {
                page: 1,
                page_size: 9,
                tags: vec!["legal".to_string()],
                search: String::new(),
            })]
        );
    }

    #[tokio::test]
    async fn test_create_then_list_refresh() {
        let service = MockContractService::new();
        let mut listing = ListingState::default();
        let mut form = ContractFormState::new();
        form.name = "Acme Deal".to_string();
        form.add_task();
        form.set_task_name(0, "Design");
        form.set_task_amount(0, 500.0);
        form.add_tag("priority", &[]);

        form.submit(&service).await.unwrap();
        service.set_page(Ok(ContractPage {
            contracts: vec![contract("new")],
            total_count: 1,
        }));
        refresh(&mut listing, &service).await;

        let calls = service.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0],
            ServiceCall::Create(ContractPayload {
                name: "Acme Deal".to_string(),
                tasks: vec![Task::new("Design", 500.0)],
                tags: vec!["priority".to_string()],
            })
        );
        assert!(matches!(calls[1], ServiceCall::List(_)));
        assert_eq!(listing.total_count, 1);
    }
}
