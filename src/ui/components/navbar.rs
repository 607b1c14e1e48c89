use dioxus::prelude::*;

use crate::ui::navigation::NavigationProvider;
use crate::ui::Route;

/// Layout component wrapping every page with the store chrome.
#[component]
pub fn StoreLayout() -> Element {
    rsx! {
        NavigationProvider {
            div { class: "min-h-screen flex flex-col bg-gray-50",
                StoreNavbar {}
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn StoreNavbar() -> Element {
    rsx! {
        div { class: "bg-gray-800 text-white p-4 flex items-center space-x-6",
            Link {
                to: Route::ProductList { query: String::new() },
                class: "text-xl font-bold hover:text-blue-300 transition-colors",
                "shopfront"
            }
        }
    }
}
