//! Glossary terms declared as `*[TERM]: description` lines.
//!
//! Declarations are removed from the source before any other processing and
//! the terms are marked up with `<abbr>` after rendering, inside text nodes only.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::cursor::Cursor;

/// A declaration spans a whole line; `R` makes `$` stop before `\r\n` too,
/// since declarations are extracted before line endings are normalized.
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?imR)^\*\[([^\]]+)\]:[ \t]+(.+?)$").expect("Invalid abbreviation regex")
});

/// Text between the end of one tag and the start of the next.
static TEXT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">([^<>]+)<").expect("Invalid text run regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abbreviation {
    pub term: String,
    /// HTML-escaped, ready for a `title` attribute.
    pub description: String,
}

/// Per-document map from term to description.
///
/// Entries keep the position of their first registration; re-registering a
/// term only replaces its description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbreviationTable {
    entries: Vec<Abbreviation>,
}

impl AbbreviationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `term`, replacing the description of an existing entry.
    ///
    /// Both values are trimmed and the description is HTML-escaped. Terms
    /// that are empty after trimming are ignored.
    pub fn insert(&mut self, term: &str, description: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }
        let description = html_escape::encode_double_quoted_attribute(description.trim()).into_owned();

        match self.entries.iter_mut().find(|a| a.term == term) {
            Some(existing) => existing.description = description,
            None => self.entries.push(Abbreviation {
                term: term.to_string(),
                description,
            }),
        }
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.term == term)
            .map(|a| a.description.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Abbreviation> {
        self.entries.iter()
    }

    /// Records every declaration in `input` and returns the text without them.
    pub fn extract(&mut self, input: &str) -> String {
        DECLARATION
            .replace_all(input, |caps: &Captures| {
                self.insert(&caps[1], &caps[2]);
                String::new()
            })
            .into_owned()
    }

    /// Wraps known terms found in the text nodes of `html` in `<abbr>` tags.
    ///
    /// Each text node is scanned once, left to right. Where several terms
    /// match at the same position the longest wins, and inserted markup is
    /// never scanned again, so the result does not depend on registration order.
    pub fn apply(&self, html: &str) -> String {
        if self.entries.is_empty() {
            return html.to_string();
        }

        // Text nodes are escaped, so terms are matched in escaped form.
        let mut needles: Vec<(String, &Abbreviation)> = self
            .entries
            .iter()
            .map(|a| (html_escape::encode_text(&a.term).into_owned(), a))
            .collect();
        needles.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        TEXT_RUN
            .replace_all(html, |caps: &Captures| {
                format!(">{}<", mark_terms(&caps[1], &needles))
            })
            .into_owned()
    }
}

fn mark_terms(text: &str, needles: &[(String, &Abbreviation)]) -> String {
    let mut cur = Cursor::new(text);
    let mut out = String::with_capacity(text.len());
    let mut text_start = 0;

    while !cur.eof() {
        if let Some((needle, abbr)) = needles.iter().find(|(n, _)| cur.starts_with(n)) {
            out.push_str(&text[text_start..cur.pos()]);
            out.push_str(&format!(
                "<abbr title=\"{}\">{needle}</abbr>",
                abbr.description
            ));
            cur.bump_n(needle.len());
            text_start = cur.pos();
            continue;
        }
        cur.bump_char();
    }

    out.push_str(&text[text_start..]);
    out
}
