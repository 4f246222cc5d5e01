use std::sync::OnceLock;

use regex::{Captures, Regex};

/// A span enclosed by the same marker on both sides, rendered as a tag pair.
///
/// Matching is non-greedy and stays within one line.
pub struct Delimited {
    pattern: &'static str,
    open: &'static str,
    close: &'static str,
    regex: OnceLock<Regex>,
}

impl Delimited {
    const fn new(pattern: &'static str, open: &'static str, close: &'static str) -> Self {
        Self {
            pattern,
            open,
            close,
            regex: OnceLock::new(),
        }
    }

    pub fn apply(&self, input: &str) -> String {
        let re = self
            .regex
            .get_or_init(|| Regex::new(self.pattern).expect("Invalid delimited span regex"));
        re.replace_all(input, |caps: &Captures| {
            format!("{}{}{}", self.open, &caps[1], self.close)
        })
        .into_owned()
    }
}

pub static STRONG: Delimited = Delimited::new(r"\*\*(.+?)\*\*", "<strong>", "</strong>");
pub static EMPHASIS: Delimited = Delimited::new(r"\*(.+?)\*", "<em>", "</em>");
pub static UNDERLINE: Delimited = Delimited::new(r"_(.+?)_", "<u>", "</u>");
pub static STRIKE: Delimited = Delimited::new(r"~(.+?)~", "<del>", "</del>");
pub static CODE: Delimited = Delimited::new(r"`(.+?)`", "<code>", "</code>");
pub static VARIABLE: Delimited = Delimited::new(r"\$(.+?)\$", "<var>", "</var>");
pub static SUPERSCRIPT: Delimited = Delimited::new(r"\^(.+?)\^", "<sup>", "</sup>");
pub static SMALL_CAPS: Delimited =
    Delimited::new(r"\|(.+?)\|", "<span class=\"smallcaps\">", "</span>");
