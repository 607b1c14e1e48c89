use dioxus::prelude::*;

use crate::catalog::Product;

/// Card for a single product in the listing.
#[component]
pub fn ItemCard(item: Product) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow-md p-4 m-2 flex items-center space-x-4 hover:shadow-lg transition-shadow",
            if let Some(thumb) = &item.thumb {
                img {
                    src: "{thumb}",
                    alt: "{item.name}",
                    class: "w-16 h-16 object-cover rounded",
                }
            } else {
                div { class: "w-16 h-16 bg-gray-200 rounded flex items-center justify-center",
                    span { class: "text-gray-500 text-xs", "No image" }
                }
            }

            div { class: "flex-1",
                h3 { class: "font-bold", "{item.name}" }
                if let Some(category) = &item.category {
                    p { class: "text-sm text-gray-500", "{category}" }
                }
            }

            if let Some(price) = item.price {
                span { class: "font-medium", {format!("${price:.2}")} }
            }
        }
    }
}
