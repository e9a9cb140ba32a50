//! Query-filter utilities for MyFantasyLeague export requests.
//!
//! Every MFL report is addressed by a base export URL plus an ordered list of
//! query parameters, most of them optional. This module provides [`FilterList`],
//! an ordered (name, value) list with explicit present-vs-absent semantics:
//! an omitted optional never reaches the wire, while a supplied zero or empty
//! string does. The distinction matters because several MFL filters (week 0,
//! franchise "0000") are meaningful falsy values.

use url::Url;

use crate::Result;

/// Ordered list of query parameters for one export request.
///
/// Order is preserved into the final query string so request URLs are
/// deterministic and easy to assert against in tests.
///
/// # Examples
///
/// ```rust
/// use mfl_api::core::filters::FilterList;
///
/// let mut filters = FilterList::new();
/// filters.push("TYPE", "players");
/// filters.push("JSON", 1);
/// filters.push_opt("SINCE", None::<u64>);
/// filters.push_opt("W", Some(0));
///
/// let url = filters.apply("https://api.myfantasyleague.com/2020/export").unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://api.myfantasyleague.com/2020/export?TYPE=players&JSON=1&W=0"
/// );
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterList {
    pairs: Vec<(String, String)>,
}

impl FilterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mandatory parameter.
    pub fn push(&mut self, name: &str, value: impl ToString) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    /// Append an optional parameter, skipping it entirely when absent.
    ///
    /// `Some(0)` and `Some("")` are present values and are kept; only `None`
    /// is omitted.
    pub fn push_opt(&mut self, name: &str, value: Option<impl ToString>) {
        if let Some(v) = value {
            self.push(name, v);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Serialize the list onto `base_url` as a query string.
    ///
    /// Values are percent-encoded. An empty list returns the base URL
    /// untouched, with no dangling `?`; a base URL that already carries a
    /// query keeps its existing parameters ahead of the appended ones.
    pub fn apply(&self, base_url: &str) -> Result<Url> {
        let mut url = Url::parse(base_url)?;
        if !self.pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (name, value) in &self.pairs {
                query.append_pair(name, value);
            }
        }
        Ok(url)
    }
}
