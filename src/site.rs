//! The host-facing data types: the [`Site`] handed to helpers for the span of
//! one render pass, and the [`Paginator`] describing the current page window.

use crate::post::Post;
use gtmpl::Value;
use serde::Deserialize;
use std::collections::HashMap;

/// The current page window for a paged listing. Constructed by the host per
/// render; read-only to helpers.
#[derive(Clone, Debug, Deserialize)]
pub struct Paginator {
    /// The current page number, starting at 1.
    pub page: usize,

    /// The total number of pages, at least 1.
    pub pages: usize,

    /// The previous page number; `None` on page 1.
    #[serde(default)]
    pub previous_page: Option<usize>,

    /// The next page number. May exceed [`Paginator::pages`]; renderers check
    /// before emitting a "Next" link.
    pub next_page: usize,
}

impl From<&Paginator> for Value {
    /// Converts a [`Paginator`] into a [`Value`] for templating. An absent
    /// previous page becomes `Nil` so it is falsy in conditionals.
    fn from(paginator: &Paginator) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("page".to_owned(), Value::from(paginator.page as u64));
        m.insert("pages".to_owned(), Value::from(paginator.pages as u64));
        m.insert(
            "previous_page".to_owned(),
            match paginator.previous_page {
                Some(p) => Value::from(p as u64),
                None => Value::Nil,
            },
        );
        m.insert(
            "next_page".to_owned(),
            Value::from(paginator.next_page as u64),
        );
        Value::Object(m)
    }
}

/// The host's view of the site for one render pass: the full post collection
/// (ordered newest first — the feed renderer relies on this) and the active
/// paginator. Helpers take `&Site` explicitly and never retain it beyond the
/// call.
#[derive(Clone, Debug)]
pub struct Site {
    /// All posts, newest first.
    pub posts: Vec<Post>,

    /// The paginator for the current render.
    pub paginator: Paginator,
}
