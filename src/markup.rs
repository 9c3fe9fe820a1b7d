//! Minimal scanning of the tag-structured files the evolution engine reads and writes.
//!
//! Only what the parameter and milestone files need: locating elements by tag
//! name, reading quoted attributes, and the byte range of an element body so it
//! can be replaced in place. Comments and CDATA are not handled; only the five
//! predefined entities are.

use std::borrow::Cow;
use std::ops::Range;

/// Element found by the scanner
pub(crate) struct Element<'a> {
    pub attributes: &'a str,
    /// Byte range of the body inside the scanned text; `None` for `<tag/>`
    pub body_range: Option<Range<usize>>,
    pub body: Option<&'a str>,
}

/// Find the `<tag ...>...</tag>` and `<tag .../>` elements of `text`, outermost first
pub(crate) fn elements<'a>(text: &'a str, tag: &str) -> Vec<Element<'a>> {
    let open = format!("<{}", tag);
    let close = format!("</{}>", tag);
    let mut found = Vec::new();
    let mut cursor = 0;

    while let Some(start) = text[cursor..].find(&open).map(|i| cursor + i) {
        let after_name = start + open.len();
        // Skip longer names sharing the prefix, e.g. <IndividualSet>
        let boundary = text[after_name..].chars().next();
        if !matches!(boundary, Some(c) if c.is_whitespace() || c == '>' || c == '/') {
            cursor = after_name;
            continue;
        }

        let Some(tag_end) = text[after_name..].find('>').map(|i| after_name + i) else {
            break;
        };

        let raw_attributes = &text[after_name..tag_end];
        if let Some(attributes) = raw_attributes.strip_suffix('/') {
            found.push(Element {
                attributes,
                body_range: None,
                body: None,
            });
            cursor = tag_end + 1;
            continue;
        }

        let body_start = tag_end + 1;
        let Some(body_end) = text[body_start..].find(&close).map(|i| body_start + i) else {
            break;
        };

        found.push(Element {
            attributes: raw_attributes,
            body_range: Some(body_start..body_end),
            body: Some(&text[body_start..body_end]),
        });
        cursor = body_end + close.len();
    }

    found
}

/// Value of a quoted attribute
pub(crate) fn attribute<'a>(attributes: &'a str, name: &str) -> Option<&'a str> {
    let mut rest = attributes;
    while let Some(eq) = rest.find('=') {
        let key = rest[..eq].split_whitespace().last().unwrap_or("");
        let value_part = rest[eq + 1..].trim_start();
        let quote = value_part.chars().next()?;
        if quote != '"' && quote != '\'' {
            return None;
        }
        let value_end = value_part[1..].find(quote)? + 1;
        if key == name {
            return Some(&value_part[1..value_end]);
        }
        rest = &value_part[value_end + 1..];
    }
    None
}

pub(crate) fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Inverse of [`escape`]; `&amp;` goes last so `&amp;lt;` stays `&lt;`
pub(crate) fn unescape(value: &str) -> Cow<'_, str> {
    if !value.contains('&') {
        return Cow::Borrowed(value);
    }
    Cow::Owned(
        value
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&amp;", "&"),
    )
}
