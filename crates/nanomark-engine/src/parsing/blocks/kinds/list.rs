use std::sync::LazyLock;

use regex::Regex;

/// A marker at the start of a line, with surrounding whitespace.
static ITEM_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[-#]\s*").expect("Invalid list item regex"));

/// Flat unordered list; `-` and `#` both start items. Lists do not nest:
/// indented items join the same list.
pub struct List;

impl List {
    pub const MARKERS: [char; 2] = ['-', '#'];

    pub fn detect(block: &str) -> bool {
        block.trim_start().starts_with(Self::MARKERS)
    }

    /// Item texts, trimmed, with empty items dropped.
    pub fn items(block: &str) -> impl Iterator<Item = &str> {
        ITEM_MARKER
            .split(block)
            .map(str::trim)
            .filter(|item| !item.is_empty())
    }

    /// Wraps already inline-rendered items.
    pub fn render(items: &[String]) -> String {
        let mut out = String::from("<ul>\n");
        for item in items {
            out.push_str(&format!("<li>{item}</li>\n"));
        }
        out.push_str("</ul>\n");
        out
    }
}
