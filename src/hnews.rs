//! Renders a single post using the hNews microformat, based on the
//! Readability publisher guidelines: an `article.hentry` with a linked
//! title, a machine-readable timestamp next to the human-readable date, a
//! byline, the tag list when present, and the raw post body.

use crate::fragment::{Fragment, Node};
use crate::post::Post;
use crate::render::{self, Result};
use gtmpl::Value;
use std::collections::HashMap;

/// Renders `post` as an hNews article fragment. The title and body are
/// inserted as raw markup (the loader is responsible for trusting or
/// pre-sanitizing them); the author is HTML-escaped. The tags block is only
/// part of the fragment when the post has tags.
pub fn article(post: &Post) -> Result<String> {
    let mut locals: HashMap<String, Value> = HashMap::new();
    locals.insert("post".to_owned(), Value::from(post));
    render::render(&fragment(!post.tags.is_empty()), Value::Object(locals))
}

fn fragment(tagged: bool) -> Fragment {
    let mut nodes = vec![
        Node::text("<article class=\"hentry\">\n  <header>\n    <h1 class=\"entry-title\"><a href=\""),
        Node::interp(".post.url"),
        Node::text("\">"),
        Node::interp(".post.title"),
        Node::text("</a></h1>\n    <time class=\"updated\" datetime=\""),
        Node::interp("machine_date .post.date"),
        Node::text("\" pubdate>"),
        Node::interp("short_date .post.date"),
        Node::text("</time>\n    <p class=\"byline author vcard\">by <span class=\"fn\">"),
        Node::interp("escape .post.author"),
        Node::text("</span></p>\n"),
    ];
    if tagged {
        nodes.push(Node::text("    <div class=\"tags\">"));
        nodes.push(Node::interp("tag_links .post.tags"));
        nodes.push(Node::text("</div>\n"));
    }
    nodes.push(Node::text("  </header>\n  "));
    nodes.push(Node::interp(".post.content"));
    nodes.push(Node::text("\n</article>\n"));
    Fragment::new(nodes)
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::DateTime;

    fn post(tags: &[&str]) -> Post {
        Post {
            title: String::from("Hello, <em>world</em>"),
            url: String::from("/posts/hello.html"),
            date: DateTime::parse_from_rfc3339("2021-03-05T16:20:45+00:00").unwrap(),
            author: String::from("Fish & Chips"),
            content: String::from("<p>First.</p><p>Second.</p>"),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    #[test]
    fn test_header_dates_and_byline() -> Result<()> {
        let out = article(&post(&[]))?;

        // Raw title inside the link, machine timestamp in the attribute,
        // short date as the visible text, escaped author in the byline.
        assert!(out.contains(r#"<a href="/posts/hello.html">Hello, <em>world</em></a>"#));
        assert!(out.contains(
            r#"<time class="updated" datetime="2021-03-05T16:03:45+00:00" pubdate>05 March 2021</time>"#
        ));
        assert!(out.contains(r#"<span class="fn">Fish &amp; Chips</span>"#));
        Ok(())
    }

    #[test]
    fn test_body_inserted_raw() -> Result<()> {
        let out = article(&post(&[]))?;
        assert!(out.contains("<p>First.</p><p>Second.</p>"));
        Ok(())
    }

    #[test]
    fn test_tags_block_when_tagged() -> Result<()> {
        let out = article(&post(&["go", "rust"]))?;
        assert!(out.contains(
            r##"<div class="tags"><a href="/tags.html#go">go</a>, <a href="/tags.html#rust">rust</a></div>"##
        ));
        Ok(())
    }

    #[test]
    fn test_no_tags_block_when_untagged() -> Result<()> {
        let out = article(&post(&[]))?;
        assert!(!out.contains(r#"class="tags""#));
        Ok(())
    }
}
