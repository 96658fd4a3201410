//! Defines the [`Post`] type. Posts are loaded by the host (typically from
//! frontmatter or a metadata file — hence the serde derive) and are read-only
//! to every helper in this crate. See [`From<&Post>`] for how a post is
//! exposed to template expressions.

use chrono::{DateTime, FixedOffset};
use gtmpl::Value;
use serde::Deserialize;
use std::collections::HashMap;

/// A single blog post, immutable once loaded.
#[derive(Clone, Debug, Deserialize)]
pub struct Post {
    /// The post's title, inserted into fragments as raw markup.
    pub title: String,

    /// The site-relative URL of the rendered post page, e.g.
    /// `/posts/hello.html`.
    pub url: String,

    /// The publication date, carrying its own offset. Helpers format it
    /// without timezone conversion.
    pub date: DateTime<FixedOffset>,

    /// The author's display name.
    pub author: String,

    /// The post body as markup. Helpers insert it unescaped; trusting or
    /// pre-sanitizing the body is the loader's responsibility.
    #[serde(default)]
    pub content: String,

    /// The post's tags. An empty vector means the post is untagged.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Post> for Value {
    /// Converts a [`Post`] into a [`Value`] for templating. The date becomes
    /// an RFC 3339 string so the `short_date`/`machine_date` helpers can
    /// re-parse it; an empty tag list becomes `Nil` so `{{if .post.tags}}`
    /// is falsy for untagged posts.
    fn from(post: &Post) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("title".to_owned(), Value::from(post.title.clone()));
        m.insert("url".to_owned(), Value::from(post.url.clone()));
        m.insert("date".to_owned(), Value::from(post.date.to_rfc3339()));
        m.insert("author".to_owned(), Value::from(post.author.clone()));
        m.insert("content".to_owned(), Value::from(post.content.clone()));
        m.insert(
            "tags".to_owned(),
            match post.tags.is_empty() {
                true => Value::Nil,
                false => Value::Array(
                    post.tags.iter().map(|t| Value::from(t.clone())).collect(),
                ),
            },
        );
        Value::Object(m)
    }
}
