//! XHTML post-processing of rendered HTML.

use std::sync::LazyLock;

use html_escape::decode_html_entities;
use regex::{Captures, Regex};

static VOID_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(img|br|hr)\b([^>]*?)\s*/?>").expect("Invalid void element regex")
});

static NAMED_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&([A-Za-z][A-Za-z0-9]*);").expect("Invalid entity regex"));

/// Entities XML knows, which stay encoded.
const XML_ENTITIES: [&str; 5] = ["lt", "gt", "amp", "quot", "apos"];

/// Closes void elements and replaces HTML-only named entities with their
/// characters. Safe to apply more than once.
pub fn to_xhtml(html: &str) -> String {
    let closed = VOID_ELEMENT.replace_all(html, "<${1}${2} />");
    NAMED_ENTITY
        .replace_all(&closed, |caps: &Captures| {
            let entity = &caps[0];
            if XML_ENTITIES
                .iter()
                .any(|name| name.eq_ignore_ascii_case(&caps[1]))
            {
                entity.to_string()
            } else {
                decode_html_entities(entity).into_owned()
            }
        })
        .into_owned()
}
