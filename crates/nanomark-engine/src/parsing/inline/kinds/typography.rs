use std::sync::LazyLock;

use regex::Regex;

static DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)\s-{1,2}\s(\w)").expect("Invalid dash regex"));
static SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)\s/\s(\w)").expect("Invalid slash regex"));

/// Typographic replacements, applied in order. Ellipsis variants with a
/// neighbouring space are tried before the bare form.
const ELLIPSES: [(&str, &str); 3] = [
    (" ...", "&nbsp;&hellip;"),
    ("... ", "&hellip;&nbsp;"),
    ("...", "&hellip;"),
];

/// Backslash followed by a space.
const ESCAPED_SPACE: &str = "\\ ";

pub struct Typography;

impl Typography {
    pub fn apply(input: &str) -> String {
        let mut text = DASH
            .replace_all(input, "${1}&nbsp;&ndash; ${2}")
            .into_owned();
        text = SLASH.replace_all(&text, "${1}&nbsp;/ ${2}").into_owned();
        for (from, to) in ELLIPSES {
            text = text.replace(from, to);
        }
        text.replace(ESCAPED_SPACE, "&nbsp;")
    }
}
