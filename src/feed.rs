//! Renders the site's Atom feed from the most recent posts.

use crate::fragment::{Fragment, Node};
use crate::render::{self, Result};
use crate::site::Site;
use gtmpl::Value;
use gtmpl_derive::Gtmpl;
use serde::Deserialize;
use std::collections::HashMap;

/// The number of feed entries emitted when the host doesn't ask for a
/// specific limit.
pub const DEFAULT_ENTRY_LIMIT: usize = 20;

/// Bundled configuration for creating a feed.
#[derive(Clone, Debug, Deserialize)]
pub struct FeedConfig {
    /// The feed title, also used as the feed's author name.
    pub title: String,

    /// The site's base URL. Doubles as the feed `id` and as the prefix for
    /// entry links and ids.
    pub site_url: String,

    /// The feed's own canonical URL, emitted as the self link.
    pub feed_url: String,

    /// The maximum number of entries to emit.
    #[serde(default = "default_entry_limit")]
    pub entry_limit: usize,
}

fn default_entry_limit() -> usize {
    DEFAULT_ENTRY_LIMIT
}

impl FeedConfig {
    /// Constructs a [`FeedConfig`] with the default entry limit.
    pub fn new(title: &str, site_url: &str, feed_url: &str) -> FeedConfig {
        FeedConfig {
            title: title.to_owned(),
            site_url: site_url.to_owned(),
            feed_url: feed_url.to_owned(),
            entry_limit: DEFAULT_ENTRY_LIMIT,
        }
    }
}

/// One feed entry, precomputed from a post. Dates travel as RFC 3339 strings
/// and are formatted by the `machine_date` helper inside the fragment.
#[derive(Clone, Gtmpl)]
struct Entry {
    title: String,
    link: String,
    id: String,
    date: String,
    content: String,
}

/// Renders the Atom feed document for the site's newest posts, up to
/// `config.entry_limit`, in the collection's existing order (newest first —
/// no re-sorting). The feed's `updated` element is the machine timestamp of
/// the newest post; entry links are the site URL concatenated with the post
/// URL, and entry ids additionally strip a single trailing slash from the
/// site URL first. Entry content is the HTML-escaped post body, marked
/// `type="html"`.
///
/// Precondition: `site.posts` must be non-empty — the newest-post access
/// faults otherwise. Callers guarantee at least one post before invoking.
pub fn atom(site: &Site, config: &FeedConfig) -> Result<String> {
    let id_base = config
        .site_url
        .strip_suffix('/')
        .unwrap_or(&config.site_url);

    let entries: Vec<Value> = site
        .posts
        .iter()
        .take(config.entry_limit)
        .map(|post| {
            Value::from(Entry {
                title: post.title.clone(),
                link: format!("{}{}", config.site_url, post.url),
                id: format!("{}{}", id_base, post.url),
                date: post.date.to_rfc3339(),
                content: post.content.clone(),
            })
        })
        .collect();

    let mut locals: HashMap<String, Value> = HashMap::new();
    locals.insert("title".to_owned(), Value::from(config.title.clone()));
    locals.insert("url".to_owned(), Value::from(config.site_url.clone()));
    locals.insert("feed".to_owned(), Value::from(config.feed_url.clone()));
    locals.insert("paginator".to_owned(), Value::from(&site.paginator));
    locals.insert(
        "updated".to_owned(),
        Value::from(site.posts[0].date.to_rfc3339()),
    );
    locals.insert("entries".to_owned(), Value::Array(entries));

    render::render(&fragment(), Value::Object(locals))
}

fn fragment() -> Fragment {
    Fragment::new(vec![
        Node::text("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"),
        Node::text("<feed xmlns=\"http://www.w3.org/2005/Atom\">\n  <title>"),
        Node::interp("escape .title"),
        Node::text("</title>\n  <link href=\""),
        Node::interp(".feed"),
        Node::text("\" rel=\"self\"/>\n  <link href=\""),
        Node::interp(".url"),
        Node::text("\"/>\n  <updated>"),
        Node::interp("machine_date .updated"),
        Node::text("</updated>\n  <id>"),
        Node::interp(".url"),
        Node::text("</id>\n  <author>\n    <name>"),
        Node::interp("escape .title"),
        Node::text("</name>\n  </author>\n"),
        Node::each(
            ".entries",
            vec![
                Node::text("  <entry>\n    <title>"),
                Node::interp("escape .title"),
                Node::text("</title>\n    <link href=\""),
                Node::interp(".link"),
                Node::text("\"/>\n    <updated>"),
                Node::interp("machine_date .date"),
                Node::text("</updated>\n    <id>"),
                Node::interp(".id"),
                Node::text("</id>\n    <content type=\"html\">"),
                Node::interp("escape .content"),
                Node::text("</content>\n  </entry>\n"),
            ],
        ),
        Node::text("</feed>\n"),
    ])
}
