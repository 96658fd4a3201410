//! Pagination controls for paged listings: a "Previous" link, one entry per
//! page number, and a "Next" link, derived entirely from the active
//! [`Paginator`].

use crate::fragment::{Fragment, Node};
use crate::render::{self, Result};
use crate::site::Paginator;
use gtmpl::Value;
use gtmpl_derive::Gtmpl;
use std::collections::HashMap;

/// One numbered entry in the pagination strip. The current page renders as a
/// non-linked marker; every other entry links to its page URL.
#[derive(Clone, Gtmpl)]
struct PageEntry {
    number: u64,
    href: String,
    current: bool,
}

/// Renders the pagination fragment for `paginator`:
///
/// * a "Previous" link when there is a previous page, targeting the site root
///   when the previous page is page 1 (its canonical URL) and `/page/{n}/`
///   otherwise;
/// * when there is more than one page, an entry per page number in ascending
///   order — the current page as a `<strong>` marker, page 1 linked to the
///   site root, the rest to `/page/{n}/`;
/// * a "Next" link to `/page/{n}/` when the next page does not exceed the
///   page count.
///
/// Pure function of the paginator's fields; `page`/`pages` consistency is not
/// validated, so a paginator with `page > pages` simply produces no current
/// marker.
pub fn paginate(paginator: &Paginator) -> Result<String> {
    let previous = match paginator.previous_page {
        None => Value::Nil,
        Some(1) => Value::from("/"),
        Some(p) => Value::from(format!("/page/{}/", p)),
    };

    let entries: Vec<Value> = match paginator.pages > 1 {
        false => Vec::new(),
        true => (1..=paginator.pages)
            .map(|i| {
                Value::from(PageEntry {
                    number: i as u64,
                    href: match i == 1 {
                        true => String::from("/"),
                        false => format!("/page/{}/", i),
                    },
                    current: i == paginator.page,
                })
            })
            .collect(),
    };

    let next = match paginator.next_page <= paginator.pages {
        true => Value::from(format!("/page/{}/", paginator.next_page)),
        false => Value::Nil,
    };

    let mut locals: HashMap<String, Value> = HashMap::new();
    locals.insert("previous".to_owned(), previous);
    locals.insert("entries".to_owned(), Value::Array(entries));
    locals.insert("next".to_owned(), next);

    render::render(&fragment(), Value::Object(locals))
}

fn fragment() -> Fragment {
    Fragment::new(vec![
        Node::text(r#"<div class="pages">"#),
        Node::cond(
            ".previous",
            vec![
                Node::text(r#"<span class="prev_next"><span>&larr;</span> <a class="previous" href=""#),
                Node::interp(".previous"),
                Node::text(r#"">Previous</a></span> "#),
            ],
        ),
        Node::cond(
            ".entries",
            vec![
                Node::text(r#"<span class="prev_next">"#),
                Node::each(
                    ".entries",
                    vec![Node::cond_else(
                        ".current",
                        vec![
                            Node::text(r#"<strong class="page">"#),
                            Node::interp(".number"),
                            Node::text("</strong> "),
                        ],
                        vec![
                            Node::text(r#"<a class="page" href=""#),
                            Node::interp(".href"),
                            Node::text(r#"">"#),
                            Node::interp(".number"),
                            Node::text("</a> "),
                        ],
                    )],
                ),
                Node::text("</span>"),
            ],
        ),
        Node::cond(
            ".next",
            vec![
                Node::text(r#" <a class="next" href=""#),
                Node::interp(".next"),
                Node::text(r#"">Next</a> <span>&rarr;</span>"#),
            ],
        ),
        Node::text("</div>"),
    ])
}
