use dioxus::prelude::*;
use tracing::debug;

use crate::listing::{FetchSequencer, ListingState};
use crate::query::{should_refetch, QueryParams};
use crate::ui::catalog_context::use_catalog;
use crate::ui::navigation::use_navigation;

use super::item::ItemCard;
use super::paging::Paging;
use super::products_header::ProductsHeader;

/// Product listing page.
///
/// This component is responsible for fetching products, and it determines
/// from the URL query string which products to fetch. Most of the state for
/// this page and its children lives in the query string (category of
/// products, page, sort order): on user action the query string is
/// rewritten, and the new products are refetched from there. The URL is
/// consulted on initial mount and again whenever it changes.
#[component]
pub fn ProductList(query: ReadSignal<String>) -> Element {
    debug!("Component rendering");

    let catalog = use_catalog();
    let navigation = use_navigation();

    let mut state = use_signal(ListingState::new);
    let mut seen_query = use_signal(|| None::<QueryParams>);
    let mut sequencer = use_signal(FetchSequencer::new);

    // Fetch on mount, then again on every render where the query string
    // semantically changed since the previous one.
    use_effect(move || {
        let params = QueryParams::parse(&query());
        let refetch = should_refetch(seen_query.peek().as_ref(), &params);
        seen_query.set(Some(params.clone()));

        if !refetch {
            return;
        }

        let catalog = catalog.clone();
        spawn(async move {
            let ticket = sequencer.write().issue();
            state.write().begin_fetch();

            let outcome = catalog.get().search_items(&params).await;

            if !sequencer.peek().is_current(ticket) {
                debug!(ticket, "Dropping superseded search response");
                return;
            }

            match outcome {
                Ok(page) => state.write().complete_fetch(page),
                Err(e) => state.write().fail_fetch(format!("Search failed: {e}")),
            }
        });
    });

    // Shared by the header and the pager: merge the given overrides onto the
    // current parsed query string and navigate to the resulting URL.
    let on_update_query = use_callback(move |overrides: QueryParams| {
        let merged = QueryParams::parse(&query.peek()).merged(&overrides);
        navigation.navigate(&format!("/?{}", merged.to_query_string()));
    });

    let parsed = QueryParams::parse(&query());
    let ListingState {
        loading,
        total_items_count,
        items,
        error,
    } = state();

    rsx! {
        if loading {
            div { class: "flex justify-center items-center py-12",
                div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500" }
            }
        } else if let Some(error) = error {
            div { class: "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded m-4",
                "{error}"
            }
        } else {
            div { class: "h-full flex flex-col",
                ProductsHeader {
                    params: parsed.clone(),
                    total_items_count,
                    on_update_query,
                }

                div { class: "flex-1 overflow-y-auto",
                    for item in items {
                        ItemCard { key: "{item.id}", item }
                    }
                }

                Paging {
                    params: parsed,
                    total_items_count,
                    on_update_query,
                }
            }
        }
    }
}
