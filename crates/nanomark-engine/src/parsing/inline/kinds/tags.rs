//! Helpers for passes that run after earlier passes have emitted tags.
//!
//! Inline text is escaped before any pass runs, so every raw `<` in it
//! belongs to a generated tag.

use std::sync::LazyLock;

use regex::Regex;

pub static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("Invalid tag regex"));

/// Text content of `html`, with every tag removed.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// True when byte offset `pos` lies between a tag's `<` and its closing `>`,
/// i.e. inside the tag name or its attributes.
pub fn inside_tag(html: &str, pos: usize) -> bool {
    let before = &html[..pos];
    match (before.rfind('<'), before.rfind('>')) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    }
}

/// Whether a tag opens or closes an anchor element.
pub fn anchor_delta(tag: &str) -> isize {
    if tag == "<a>" || tag.starts_with("<a ") {
        1
    } else if tag == "</a>" {
        -1
    } else {
        0
    }
}
