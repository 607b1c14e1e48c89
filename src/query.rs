use std::borrow::Cow;
use std::collections::BTreeMap;

use urlencoding::{decode, encode};

/// Key/value parameters parsed from a URL query string.
///
/// Depth-1 only: values are plain strings and ordering carries no meaning.
/// Most of the listing page's state lives here rather than in component
/// state (category, page, sort), so this type round-trips between the URL
/// and the search service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the query component of a URL. A leading `?` is tolerated,
    /// empty segments are skipped and a bare key maps to the empty string.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim_start_matches('?');
        let mut entries = BTreeMap::new();

        for pair in raw.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            entries.insert(decode_component(key), decode_component(value));
        }

        Self { entries }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    /// Depth-1 merge: keys from `overrides` win on conflict.
    pub fn merged(&self, overrides: &QueryParams) -> QueryParams {
        let mut merged = self.clone();
        for (key, value) in overrides.iter() {
            merged.entries.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Serialize back to a query string (no leading `?`). Keys are emitted
    /// in sorted order so the same parameters always produce the same URL.
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Shallow equality as the storefront has always computed it: key counts
    /// must match, then every key of `self` must have the identical value in
    /// `other`. Keys present only in `other` are never inspected directly.
    /// This exact rule decides whether a URL change triggers a refetch, so
    /// it must not be generalized.
    pub fn same_params(&self, other: &QueryParams) -> bool {
        if self.entries.len() != other.entries.len() {
            return false;
        }
        for (key, value) in &self.entries {
            if other.entries.get(key) != Some(value) {
                return false;
            }
        }
        true
    }
}

/// Refetch policy for the listing page: the first render always fetches,
/// after that only a semantic change in the query string does.
pub fn should_refetch(previous: Option<&QueryParams>, current: &QueryParams) -> bool {
    match previous {
        None => true,
        Some(previous) => !current.same_params(previous),
    }
}

fn decode_component(component: &str) -> String {
    decode(component)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| component.to_string())
}
