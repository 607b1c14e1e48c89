use crate::catalog::{Product, SearchPage};

/// UI state for the product listing page.
///
/// Two-state machine: displaying and loading. Entered into loading on mount
/// or on a detected query change; a completed fetch transitions back to
/// displaying in a single step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingState {
    pub loading: bool,
    pub total_items_count: Option<u64>,
    pub items: Vec<Product>,
    pub error: Option<String>,
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading state. Items and total keep the values from the
    /// previous completed fetch; the view shows the progress indicator
    /// instead of consulting them.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Commit a completed search. Items, total and the loading flag change
    /// together, so no partially updated state is ever observable.
    pub fn complete_fetch(&mut self, page: SearchPage) {
        self.items = page.data;
        self.loading = false;
        self.total_items_count = Some(page.total_length);
    }

    /// Leave the loading state with an error message. The previous items
    /// and total stay as they were.
    pub fn fail_fetch(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

/// Issues monotonically increasing tickets for in-flight searches.
///
/// When the query string changes while a search is still pending, both
/// requests complete independently; only the response holding the latest
/// ticket may be committed, so a slow stale response can never overwrite a
/// newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchSequencer {
    latest: u64,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}
