use std::fmt::Write;

use lazy_static::lazy_static;
use regex::Regex;

use crate::content::FrontMatter;

lazy_static! {
    // Header block: a `---` line at the very top, field lines, a closing `---`.
    static ref BLOCK_REGEX: Regex = Regex::new(r"^---\r?\n(?s)(.+?)\r?\n---").unwrap();

    // One recognized scalar field per line, double-quoted, backslash escapes.
    static ref FIELD_REGEX: Regex = Regex::new(
        r#"(?m)^(?P<key>title|slug|date|excerpt|category):[ \t]*"(?P<value>(?:\\.|[^"\\])*)"[ \t]*\r?$"#
    ).unwrap();

    static ref TAGS_REGEX: Regex = Regex::new(r"(?m)^tags:[ \t]*\[(?P<items>.*)\][ \t]*\r?$").unwrap();

    static ref QUOTED_REGEX: Regex = Regex::new(r#""((?:\\.|[^"\\])*)""#).unwrap();
}

/// Splits a post document into its header fields and markdown body.
///
/// This is a best-effort extraction over an allow-list of fields, not a YAML
/// parser. A line that does not match the expected `key: "value"` shape is
/// skipped without complaint. Multi-line values are not supported.
///
/// When the document has no opening `---` pair the mapping is empty and the
/// body is the input, byte for byte.
pub fn parse(text: &str) -> (FrontMatter, String) {
    let Some(caps) = BLOCK_REGEX.captures(text) else {
        return (FrontMatter::default(), text.to_string());
    };

    let block_end = caps.get(0).unwrap().end();
    let block = caps.get(1).unwrap().as_str();
    let body = text[block_end..].trim().to_string();

    let mut fields = FrontMatter::default();
    for field in FIELD_REGEX.captures_iter(block) {
        let value = unescape(&field["value"]);
        match &field["key"] {
            "title" => fields.title = Some(value),
            "slug" => fields.slug = Some(value),
            "date" => fields.date = Some(value),
            "excerpt" => fields.excerpt = Some(value),
            "category" => fields.category = Some(value),
            _ => {}
        }
    }

    if let Some(tags) = TAGS_REGEX.captures(block) {
        for item in QUOTED_REGEX.captures_iter(&tags["items"]) {
            fields.tags.push(unescape(item.get(1).unwrap().as_str()));
        }
    }

    (fields, body)
}

/// Renders fields and body back into a post document.
///
/// Only the fields actually present are written, each double-quoted with `"`
/// and `\` escaped so that `parse` recovers the original strings exactly.
/// With no fields present the body is returned alone, without a header block.
pub fn encode(fields: &FrontMatter, body: &str) -> String {
    let mut header = String::new();

    let scalars = [
        ("title", &fields.title),
        ("slug", &fields.slug),
        ("date", &fields.date),
        ("excerpt", &fields.excerpt),
        ("category", &fields.category),
    ];
    for (key, value) in scalars {
        if let Some(value) = value {
            let _ = writeln!(header, "{}: \"{}\"", key, escape(value));
        }
    }

    if !fields.tags.is_empty() {
        let items: Vec<String> = fields
            .tags
            .iter()
            .map(|tag| format!("\"{}\"", escape(tag)))
            .collect();
        let _ = writeln!(header, "tags: [{}]", items.join(", "));
    }

    if header.is_empty() {
        return body.to_string();
    }

    format!("---\n{}---\n\n{}", header, body)
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    out
}
