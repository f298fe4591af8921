use std::borrow::Cow;
use std::fmt::Write as _;

#[inline]
fn is_plain_text_byte(b: u8) -> bool {
    (0x20..0x7F).contains(&b) && !matches!(b, b'<' | b'>' | b'&')
}

/// Characters XML 1.0 cannot carry, not even as character references.
#[inline]
fn is_unrepresentable(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}

/// Escape element text content.
///
/// `<`, `>` and `&` become entities. Every other code point outside
/// printable ASCII is written as a decimal character reference. Quotes
/// pass through unchanged. Control characters XML cannot represent are
/// dropped.
///
/// # Examples
///
/// ```
/// use dmlcanvas::common::xml::escape_text;
/// assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
/// assert_eq!(escape_text("µ=\"2\""), "&#181;=\"2\"");
/// ```
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if s.bytes().all(is_plain_text_byte) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            ' '..='~' => out.push(c),
            c if is_unrepresentable(c) => {},
            c => {
                // Writing to a String cannot fail
                let _ = write!(out, "&#{};", c as u32);
            },
        }
    }
    Cow::Owned(out)
}

/// Escape a free-form string for use inside a double-quoted attribute.
///
/// Node attribute values are written verbatim, so callers run any
/// user-provided value (shape names, typefaces) through this first.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.bytes().any(|b| matches!(b, b'&' | b'<' | b'>' | b'"') || b < 0x20) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c if is_unrepresentable(c) => {},
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "&#{};", c as u32);
            },
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
