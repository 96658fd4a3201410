//! Template helpers for the `weft` blog renderer. The host templating layer
//! owns the post collection and the current paginator; this library turns that
//! data into self-contained markup fragments. The architecture can be broken
//! down into three layers:
//!
//! 1. Plain data supplied by the host ([`crate::post`], [`crate::site`])
//! 2. A structured fragment definition and its binding to the templating
//!    engine ([`crate::fragment`], [`crate::render`])
//! 3. The helpers themselves, each a pure function from data to a markup
//!    string ([`crate::page`], [`crate::feed`], [`crate::hnews`],
//!    [`crate::tags`], [`crate::date`], [`crate::text`])
//!
//! Of the three, the second layer does the interesting work: every renderer
//! assembles a [`crate::fragment::Fragment`] (a node tree of literal text,
//! interpolations, conditionals, and loops), and [`crate::render::render`]
//! parses it exactly once, installs the fixed helper namespace as template
//! functions, and executes it against a locals map. Helpers never perform I/O
//! and never mutate shared state; given the same inputs they produce the same
//! output.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod date;
pub mod feed;
pub mod fragment;
pub mod hnews;
pub mod page;
pub mod post;
pub mod render;
pub mod site;
pub mod tags;
pub mod text;
