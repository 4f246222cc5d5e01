use std::sync::LazyLock;

use regex::{Captures, Regex};

static GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.*?)\}").expect("Invalid keyboard regex"));

/// Key combination `{Ctrl Alt Del}`: every key in its own `<kbd>`, joined
/// with a plus and wrapped in an outer `<kbd>`.
pub struct Keyboard;

impl Keyboard {
    pub const JOINER: &'static str = "&nbsp;+ ";

    pub fn apply(input: &str) -> String {
        GROUP
            .replace_all(input, |caps: &Captures| {
                let keys: Vec<String> = caps[1]
                    .split_whitespace()
                    .map(|key| format!("<kbd>{key}</kbd>"))
                    .collect();
                format!("<kbd>{}</kbd>", keys.join(Self::JOINER))
            })
            .into_owned()
    }
}
