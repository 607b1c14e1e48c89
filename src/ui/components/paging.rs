use dioxus::prelude::*;

use crate::config::Config;
use crate::query::QueryParams;

/// Pagination controls under the product list. Page changes go through
/// `on_update_query` like every other control.
#[component]
pub fn Paging(
    params: QueryParams,
    total_items_count: Option<u64>,
    on_update_query: EventHandler<QueryParams>,
) -> Element {
    let config = use_context::<Config>();

    let total = total_items_count.unwrap_or(0);
    let pages = page_count(total, config.page_size);
    let current = current_page(&params);

    if pages <= 1 {
        return rsx! {};
    }

    rsx! {
        div { class: "flex justify-center items-center space-x-2 p-4 border-t border-gray-200 bg-white",
            button {
                class: "px-3 py-1 rounded border border-gray-300 disabled:opacity-50",
                disabled: current <= 1,
                onclick: move |_| {
                    on_update_query.call(QueryParams::from_pairs([
                        ("page", (current - 1).to_string()),
                    ]));
                },
                "Previous"
            }

            for page in 1..=pages {
                button {
                    class: if page == current {
                        "px-3 py-1 rounded bg-blue-600 text-white"
                    } else {
                        "px-3 py-1 rounded border border-gray-300 hover:bg-gray-100"
                    },
                    onclick: move |_| {
                        on_update_query.call(QueryParams::from_pairs([
                            ("page", page.to_string()),
                        ]));
                    },
                    "{page}"
                }
            }

            button {
                class: "px-3 py-1 rounded border border-gray-300 disabled:opacity-50",
                disabled: current >= pages,
                onclick: move |_| {
                    on_update_query.call(QueryParams::from_pairs([
                        ("page", (current + 1).to_string()),
                    ]));
                },
                "Next"
            }
        }
    }
}

fn page_count(total_items_count: u64, page_size: u64) -> u64 {
    total_items_count.div_ceil(page_size)
}

/// Current page from the query params, defaulting to the first page when
/// absent or unparseable.
fn current_page(params: &QueryParams) -> u64 {
    params
        .get("page")
        .and_then(|page| page.parse().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}
