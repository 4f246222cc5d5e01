use std::sync::LazyLock;

use regex::Regex;

/// Two spaces at the end of a line.
static TRAILING_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)  $").expect("Invalid line break regex"));

pub struct LineBreak;

impl LineBreak {
    pub const HTML: &'static str = "<br>";

    /// In hard mode only lines ending in two spaces break and the newline is
    /// kept; otherwise every newline is replaced by a break.
    pub fn apply(input: &str, hard: bool) -> String {
        if hard {
            TRAILING_SPACES.replace_all(input, Self::HTML).into_owned()
        } else {
            input.replace('\n', Self::HTML)
        }
    }
}
