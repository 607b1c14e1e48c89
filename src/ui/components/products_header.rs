use dioxus::prelude::*;

use crate::query::QueryParams;

/// Header above the product list: active category, result count and a sort
/// control. All interaction funnels through `on_update_query`; the header
/// never fetches anything itself.
#[component]
pub fn ProductsHeader(
    params: QueryParams,
    total_items_count: Option<u64>,
    on_update_query: EventHandler<QueryParams>,
) -> Element {
    let category = params.get("category").unwrap_or("All products").to_string();
    let sort = params.get("sort").unwrap_or("relevance").to_string();

    rsx! {
        div { class: "flex items-center justify-between p-4 border-b border-gray-200 bg-white",
            div {
                h1 { class: "text-2xl font-bold", "{category}" }
                if let Some(count) = total_items_count {
                    p { class: "text-sm text-gray-500", "{count} products" }
                }
            }

            select {
                class: "border border-gray-300 rounded p-2",
                value: "{sort}",
                onchange: move |event| {
                    // Changing the sort order restarts from the first page
                    on_update_query.call(QueryParams::from_pairs([
                        ("sort", event.value()),
                        ("page", "1".to_string()),
                    ]));
                },
                option { value: "relevance", "Relevance" }
                option { value: "price_asc", "Price: low to high" }
                option { value: "price_desc", "Price: high to low" }
            }
        }
    }
}
