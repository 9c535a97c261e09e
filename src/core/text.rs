//! Notation text helpers
//!
//! - Emmet text escaping shared by HTML and XML payloads
//! - JSON string escaping
//! - Bracketed attribute list rendering

use std::borrow::Cow;

use memchr::memchr3;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Escape `\`, `*` and `$`, then collapse whitespace runs to one space
pub fn escape_text(text: &str) -> String {
    let escaped: Cow<'_, str> = if memchr3(b'\\', b'*', b'$', text.as_bytes()).is_none() {
        Cow::Borrowed(text)
    } else {
        let mut out = String::with_capacity(text.len() + 8);
        for c in text.chars() {
            if matches!(c, '\\' | '*' | '$') {
                out.push('\\');
            }
            out.push(c);
        }
        Cow::Owned(out)
    };
    WHITESPACE_RUN.replace_all(&escaped, " ").into_owned()
}

/// Escape a JSON string payload (backslash, quote, newline, CR, tab)
pub fn escape_json(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// `key=value`, `key="value with spaces"` or bare `key`
pub fn format_attribute(key: &str, value: &str) -> String {
    if value.contains(' ') {
        format!("{}=\"{}\"", key, value)
    } else if value.is_empty() {
        key.to_string()
    } else {
        format!("{}={}", key, value)
    }
}

/// `[a=1 b="x y" c]`, or an empty string when there is nothing to show
pub fn render_attribute_list<'a, I>(attrs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let parts: Vec<String> = attrs
        .into_iter()
        .map(|(k, v)| format_attribute(k, v))
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("[{}]", parts.join(" "))
    }
}

/// Wrap a payload in braces
#[inline]
pub fn braced(prefix: &str, payload: &str) -> String {
    format!("{}{{{}}}", prefix, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_specials() {
        assert_eq!(escape_text(r"a\b*c$d"), r"a\\b\*c\$d");
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(escape_text("a  b\n\t c"), "a b c");
        assert_eq!(escape_text("  padded  "), " padded ");
    }

    #[test]
    fn test_escape_json() {
        assert_eq!(escape_json("say \"hi\"\n\tnow\r"), r#"say \"hi\"\n\tnow\r"#);
        assert_eq!(escape_json(r"c:\dir"), r"c:\\dir");
        // No Emmet escaping or whitespace collapsing for JSON payloads
        assert_eq!(escape_json("a  *$"), "a  *$");
    }

    #[test]
    fn test_format_attribute() {
        assert_eq!(format_attribute("href", "/x"), "href=/x");
        assert_eq!(format_attribute("title", "two words"), "title=\"two words\"");
        assert_eq!(format_attribute("disabled", ""), "disabled");
    }

    #[test]
    fn test_attribute_list() {
        assert_eq!(render_attribute_list(Vec::<(&str, &str)>::new()), "");
        assert_eq!(
            render_attribute_list(vec![("src", "a.jpg"), ("alt", "A cat")]),
            "[src=a.jpg alt=\"A cat\"]"
        );
    }

    #[test]
    fn test_braced() {
        assert_eq!(braced("cdata", "x"), "cdata{x}");
        assert_eq!(braced("", "x"), "{x}");
    }
}
