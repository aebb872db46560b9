//! Listing Query
//!
//! Page/filter parameters for `GET /contracts`.

/// Parameters of one listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractQuery {
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    /// Match contracts carrying at least one of these tags (empty = any)
    pub tags: Vec<String>,
    /// Case-insensitive name filter (empty = any)
    pub search: String,
}

impl ContractQuery {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            tags: Vec::new(),
            search: String::new(),
        }
    }

    pub fn skip(&self) -> usize {
        self.page.saturating_sub(1) * self.page_size
    }

    /// Query-string pairs in the order the API documents them.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("skip", self.skip().to_string()),
            ("limit", self.page_size.to_string()),
        ];
        if !self.tags.is_empty() {
            params.push(("tags", self.tags.join(",")));
        }
        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        params
    }
}
