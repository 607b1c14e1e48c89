use std::rc::Rc;

use dioxus::prelude::*;
use dioxus::router::Navigator;
use tracing::debug;

/// Something that can move the app to a new URL.
///
/// The listing page and its controls only ever talk to this seam; rewriting
/// the query string through it is the sole way they affect fetched data.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

/// Cloneable handle around the active [`Navigate`] implementation.
#[derive(Clone)]
pub struct NavigationHandle {
    inner: Rc<dyn Navigate>,
}

impl NavigationHandle {
    pub fn new(navigate: Rc<dyn Navigate>) -> Self {
        Self { inner: navigate }
    }

    pub fn navigate(&self, path: &str) {
        debug!(path, "Navigating");
        self.inner.navigate(path);
    }
}

impl PartialEq for NavigationHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Router-backed navigation: pushes onto the history stack, no reload.
struct RouterNavigate {
    navigator: Navigator,
}

impl Navigate for RouterNavigate {
    fn navigate(&self, path: &str) {
        self.navigator.push(path.to_string());
    }
}

/// Provider component making navigation available to the subtree.
#[component]
pub fn NavigationProvider(children: Element) -> Element {
    let navigator = use_navigator();
    use_context_provider(|| NavigationHandle::new(Rc::new(RouterNavigate { navigator })));

    rsx! {
        {children}
    }
}

/// Hook to access the navigation handle from components.
pub fn use_navigation() -> NavigationHandle {
    use_context::<NavigationHandle>()
}
