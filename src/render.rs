//! Binds fragment definitions to the templating engine. [`render`] is the
//! single path from a [`Fragment`] plus a locals map to output markup: it
//! parses the fragment source, installs the helper namespace, and executes
//! the template synchronously.
//!
//! The helper namespace is a fixed, enumerated set of template functions —
//! `escape`, `short_date`, `machine_date`, `format_date`, `tag_links`, and
//! `truncate_paragraphs` — installed on every render, so any embedded
//! expression can call any helper by name without ambient lookup.

use crate::date;
use crate::fragment::Fragment;
use crate::tags;
use crate::text;
use chrono::{DateTime, FixedOffset};
use gtmpl::{Context, Template, Value};
use gtmpl_value::FuncError;
use std::fmt;

/// Renders a [`Fragment`] against a locals map. The locals value is the dot
/// of the template, so a fragment expression `.post.title` reads the `post`
/// entry of `locals`.
pub fn render(fragment: &Fragment, locals: Value) -> Result<String> {
    let mut template = Template::default();
    install_helpers(&mut template);
    template
        .parse(&fragment.source())
        .map_err(|err| Error::Parse(err.to_string()))?;
    let context = Context::from(locals);

    let mut rendered: Vec<u8> = Vec::new();
    template
        .execute(&mut rendered, &context)
        .map_err(|err| Error::Execute(err.to_string()))?;
    Ok(String::from_utf8(rendered)?)
}

/// Installs the helper namespace onto a template. Parsing resolves function
/// names eagerly, so this must run before [`Template::parse`].
fn install_helpers(template: &mut Template) {
    template.add_func("escape", escape_value);
    template.add_func("short_date", short_date_value);
    template.add_func("machine_date", machine_date_value);
    template.add_func("format_date", format_date_value);
    template.add_func("tag_links", tag_links_value);
    template.add_func("truncate_paragraphs", truncate_paragraphs_value);
}

/// Template binding for [`text::escape`]. Absent values (`Nil`/`NoValue`)
/// pass through unchanged rather than erroring.
fn escape_value(args: &[Value]) -> Result<Value, FuncError> {
    match args {
        [Value::Nil] => Ok(Value::Nil),
        [Value::NoValue] => Ok(Value::NoValue),
        [Value::String(text)] => Ok(Value::from(text::escape(text))),
        _ => Err(FuncError::ExactlyXArgs("escape".to_owned(), 1)),
    }
}

/// Template binding for [`date::short_date`].
fn short_date_value(args: &[Value]) -> Result<Value, FuncError> {
    match args {
        [value] => Ok(Value::from(date::short_date(&parse_date(value)?))),
        _ => Err(FuncError::ExactlyXArgs("short_date".to_owned(), 1)),
    }
}

/// Template binding for [`date::machine_date`].
fn machine_date_value(args: &[Value]) -> Result<Value, FuncError> {
    match args {
        [value] => Ok(Value::from(date::machine_date(&parse_date(value)?))),
        _ => Err(FuncError::ExactlyXArgs("machine_date".to_owned(), 1)),
    }
}

/// Template binding for [`date::format`]. Takes a date value and a pattern
/// string.
fn format_date_value(args: &[Value]) -> Result<Value, FuncError> {
    match args {
        [value, Value::String(pattern)] => {
            Ok(Value::from(date::format(&parse_date(value)?, pattern)))
        }
        _ => Err(FuncError::ExactlyXArgs("format_date".to_owned(), 2)),
    }
}

/// Template binding for [`tags::links`]. Takes an array of tag strings.
fn tag_links_value(args: &[Value]) -> Result<Value, FuncError> {
    match args {
        [Value::Array(values)] => {
            let mut names: Vec<String> = Vec::with_capacity(values.len());
            for value in values {
                match value {
                    Value::String(name) => names.push(name.clone()),
                    _ => return Err(FuncError::UnableToConvertFromValue),
                }
            }
            Ok(Value::from(tags::links(&names)))
        }
        _ => Err(FuncError::ExactlyXArgs("tag_links".to_owned(), 1)),
    }
}

/// Template binding for [`text::truncate_paragraphs`]. Takes the text, the
/// maximum paragraph count, and the "read more" suffix.
fn truncate_paragraphs_value(args: &[Value]) -> Result<Value, FuncError> {
    match args {
        [Value::String(text), Value::Number(max), Value::String(more)] => match max.as_u64() {
            Some(max) => Ok(Value::from(text::truncate_paragraphs(
                text, max as usize, more,
            ))),
            None => Err(FuncError::UnableToConvertFromValue),
        },
        _ => Err(FuncError::ExactlyXArgs(
            "truncate_paragraphs".to_owned(),
            3,
        )),
    }
}

// Dates travel through locals as RFC 3339 strings (see `post::Post`'s Value
// conversion) and are re-parsed at the helper boundary.
fn parse_date(value: &Value) -> Result<DateTime<FixedOffset>, FuncError> {
    match value {
        Value::String(raw) => {
            DateTime::parse_from_rfc3339(raw).map_err(|e| FuncError::Generic(e.to_string()))
        }
        _ => Err(FuncError::UnableToConvertFromValue),
    }
}

/// The result of a fallible render operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents a problem rendering a fragment.
#[derive(Debug)]
pub enum Error {
    /// Returned when the fragment's template source fails to parse.
    Parse(String),

    /// Returned when template execution fails, e.g. a helper rejects its
    /// arguments.
    Execute(String),

    /// Returned when the rendered bytes are not valid UTF-8.
    Utf8(std::string::FromUtf8Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "parsing fragment: {}", err),
            Error::Execute(err) => write!(f, "executing fragment: {}", err),
            Error::Utf8(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(_) => None,
            Error::Execute(_) => None,
            Error::Utf8(err) => Some(err),
        }
    }
}

impl From<String> for Error {
    /// Converts template execution errors ([`String`]) into [`Error`]. This
    /// allows us to use the `?` operator on fallible template operations.
    fn from(err: String) -> Error {
        Error::Execute(err)
    }
}

impl From<std::string::FromUtf8Error> for Error {
    /// Converts [`std::string::FromUtf8Error`]s into [`Error`]. This allows
    /// us to use the `?` operator when collecting rendered output.
    fn from(err: std::string::FromUtf8Error) -> Error {
        Error::Utf8(err)
    }
}
