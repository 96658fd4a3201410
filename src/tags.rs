//! Tag aggregation and formatting. Tags are plain strings on
//! [`crate::post::Post`]; nothing here is cached — both functions are pure
//! views over their input.

use crate::site::Site;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Characters left untouched when escaping a tag into an anchor target.
// Everything else is percent-encoded. Applies to the href only; the link
// text keeps the raw tag.
const ANCHOR_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'@')
    .remove(b'*')
    .remove(b'_')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'/');

/// Returns the distinct tags across all of the site's posts. Duplicates are
/// dropped by exact string identity (so `Go` and `go` both survive), but the
/// result is ordered by a case-insensitive comparison; the sort is stable, so
/// tags equal under case folding keep their first-seen order.
pub fn all_tags(site: &Site) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for post in &site.posts {
        for tag in &post.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    tags
}

/// Renders a tag list as comma-joined anchors into `/tags.html`. The anchor
/// target is escaped per [`ANCHOR_ESCAPE`]; the visible text is the raw tag.
pub fn links(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| {
            format!(
                r#"<a href="/tags.html#{}">{}</a>"#,
                utf8_percent_encode(tag, ANCHOR_ESCAPE),
                tag,
            )
        })
        .collect::<Vec<String>>()
        .join(", ")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::post::Post;
    use crate::site::Paginator;
    use chrono::DateTime;

    fn post_with_tags(tags: &[&str]) -> Post {
        Post {
            title: String::from("t"),
            url: String::from("/posts/t.html"),
            date: DateTime::parse_from_rfc3339("2021-03-05T00:00:00+00:00").unwrap(),
            author: String::from("a"),
            content: String::new(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    fn site(posts: Vec<Post>) -> Site {
        Site {
            posts,
            paginator: Paginator {
                page: 1,
                pages: 1,
                previous_page: None,
                next_page: 2,
            },
        }
    }

    #[test]
    fn test_all_tags_dedup_and_sort() {
        let site = site(vec![
            post_with_tags(&["go", "Go", "zig"]),
            post_with_tags(&["Zig"]),
        ]);
        // Exact-identity dedup keeps both casings; the case-insensitive sort
        // groups them, and stability keeps first-seen order within a group.
        assert_eq!(all_tags(&site), vec!["go", "Go", "zig", "Zig"]);
    }

    #[test]
    fn test_all_tags_skips_untagged_posts() {
        let site = site(vec![post_with_tags(&[]), post_with_tags(&["rust"])]);
        assert_eq!(all_tags(&site), vec!["rust"]);
    }

    #[test]
    fn test_all_tags_empty_site() {
        assert_eq!(all_tags(&site(Vec::new())), Vec::<String>::new());
    }

    #[test]
    fn test_links_escapes_href_only() {
        assert_eq!(
            links(&[String::from("rust lang"), String::from("c++")]),
            r##"<a href="/tags.html#rust%20lang">rust lang</a>, <a href="/tags.html#c++">c++</a>"##
        );
    }

    #[test]
    fn test_links_empty() {
        assert_eq!(links(&[]), "");
    }
}
