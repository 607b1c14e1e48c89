//! End-to-end flow of the product listing page against a stub search
//! service: mount fetch, query-change refetch policy, the mutation
//! callback's merge-and-navigate behavior, and the overlapping-fetch guard.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;

use async_trait::async_trait;

use shopfront::catalog::{CatalogError, Product, SearchCapability, SearchPage};
use shopfront::listing::{FetchSequencer, ListingState};
use shopfront::query::{should_refetch, QueryParams};
use shopfront::ui::navigation::{Navigate, NavigationHandle};

struct StubSearch {
    pages: Mutex<Vec<SearchPage>>,
    calls: Mutex<Vec<QueryParams>>,
}

impl StubSearch {
    fn returning(pages: Vec<SearchPage>) -> Self {
        Self {
            pages: Mutex::new(pages),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchCapability for StubSearch {
    async fn search_items(&self, params: &QueryParams) -> Result<SearchPage, CatalogError> {
        self.calls.lock().unwrap().push(params.clone());
        Ok(self.pages.lock().unwrap().remove(0))
    }
}

struct RecordingNavigate {
    paths: RefCell<Vec<String>>,
}

impl Navigate for RecordingNavigate {
    fn navigate(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }
}

fn product(id: &str) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        category: None,
        price: None,
        thumb: None,
    }
}

fn page(ids: &[&str], total: u64) -> SearchPage {
    SearchPage {
        data: ids.iter().map(|id| product(id)).collect(),
        total_length: total,
    }
}

/// Replays the listing page's render cycle: decide whether to refetch from
/// the previous and current query strings, then run the fetch to completion.
struct PageDriver<'a> {
    search: &'a StubSearch,
    state: ListingState,
    seen_query: Option<QueryParams>,
    sequencer: FetchSequencer,
}

impl<'a> PageDriver<'a> {
    fn new(search: &'a StubSearch) -> Self {
        Self {
            search,
            state: ListingState::new(),
            seen_query: None,
            sequencer: FetchSequencer::new(),
        }
    }

    async fn render(&mut self, raw_query: &str) {
        let params = QueryParams::parse(raw_query);
        let refetch = should_refetch(self.seen_query.as_ref(), &params);
        self.seen_query = Some(params.clone());

        if !refetch {
            return;
        }

        let ticket = self.sequencer.issue();
        self.state.begin_fetch();
        assert!(self.state.loading, "loading must be set before the await");

        let outcome = self.search.search_items(&params).await;
        if !self.sequencer.is_current(ticket) {
            return;
        }
        match outcome {
            Ok(page) => self.state.complete_fetch(page),
            Err(e) => self.state.fail_fetch(format!("Search failed: {e}")),
        }
    }
}

#[tokio::test]
async fn mount_fetches_exactly_once_even_with_empty_query() {
    let search = StubSearch::returning(vec![page(&["p-1", "p-2"], 2)]);
    let mut driver = PageDriver::new(&search);

    driver.render("").await;

    assert_eq!(search.call_count(), 1);
    assert_eq!(
        driver.state,
        ListingState {
            loading: false,
            total_items_count: Some(2),
            items: vec![product("p-1"), product("p-2")],
            error: None,
        }
    );
}

#[tokio::test]
async fn rerender_with_equivalent_query_does_not_refetch() {
    let search = StubSearch::returning(vec![page(&["p-1"], 1)]);
    let mut driver = PageDriver::new(&search);

    driver.render("category=shoes&page=2").await;
    driver.render("page=2&category=shoes").await;

    assert_eq!(search.call_count(), 1);
}

#[tokio::test]
async fn query_change_triggers_refetch() {
    let search = StubSearch::returning(vec![page(&["p-1"], 41), page(&["p-9"], 41)]);
    let mut driver = PageDriver::new(&search);

    driver.render("category=shoes&page=2").await;
    driver.render("category=shoes&page=3").await;

    assert_eq!(search.call_count(), 2);
    assert_eq!(driver.state.items, vec![product("p-9")]);

    let sent = &search.calls.lock().unwrap()[1];
    assert_eq!(sent.get("page"), Some("3"));
}

#[tokio::test]
async fn stale_items_survive_while_next_fetch_is_loading() {
    let search = StubSearch::returning(vec![page(&["p-1"], 1)]);
    let mut driver = PageDriver::new(&search);

    driver.render("page=1").await;
    assert_eq!(driver.state.items, vec![product("p-1")]);

    // Enter the loading state without completing; previous results remain.
    driver.state.begin_fetch();
    assert!(driver.state.loading);
    assert_eq!(driver.state.items, vec![product("p-1")]);
    assert_eq!(driver.state.total_items_count, Some(1));
}

#[tokio::test]
async fn superseded_response_is_never_committed() {
    let search = StubSearch::returning(vec![page(&["stale"], 1), page(&["fresh"], 1)]);
    let mut state = ListingState::new();
    let mut sequencer = FetchSequencer::new();

    // Two fetches issued back to back; the second completes first.
    let first = sequencer.issue();
    state.begin_fetch();
    let first_outcome = search.search_items(&QueryParams::parse("page=1")).await;

    let second = sequencer.issue();
    state.begin_fetch();
    let second_outcome = search.search_items(&QueryParams::parse("page=2")).await;

    if sequencer.is_current(second) {
        state.complete_fetch(second_outcome.unwrap());
    }

    // The slow first response arrives last; the guard must drop it.
    let first_page = first_outcome.unwrap();
    assert_eq!(first_page.data[0].id, "stale");
    if sequencer.is_current(first) {
        state.complete_fetch(first_page);
    }

    assert_eq!(state.items, vec![product("fresh")]);
}

#[test]
fn mutation_callback_merges_overrides_and_navigates() {
    let recorder = Rc::new(RecordingNavigate {
        paths: RefCell::new(Vec::new()),
    });
    let navigation = NavigationHandle::new(recorder.clone());

    // What the page's shared callback does for a pager click.
    let update_query = |raw: &str, overrides: QueryParams| {
        let merged = QueryParams::parse(raw).merged(&overrides);
        navigation.navigate(&format!("/?{}", merged.to_query_string()));
    };

    update_query(
        "category=shoes&page=2",
        QueryParams::from_pairs([("page", "3")]),
    );
    update_query(
        "page=1",
        QueryParams::from_pairs([("category", "hats"), ("page", "1")]),
    );

    let paths = recorder.paths.borrow();
    assert_eq!(paths.len(), 2);

    let first = QueryParams::parse(paths[0].trim_start_matches("/?"));
    assert_eq!(first, QueryParams::from_pairs([("category", "shoes"), ("page", "3")]));

    let second = QueryParams::parse(paths[1].trim_start_matches("/?"));
    assert_eq!(second, QueryParams::from_pairs([("page", "1"), ("category", "hats")]));
}
