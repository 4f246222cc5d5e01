//! # Markup Parsing
//!
//! Converts plain-text markup into an HTML fragment in four stages:
//!
//! 1. **Abbreviations** (`abbreviations`): `*[TERM]: description` lines are
//!    collected into an [`AbbreviationTable`] and removed from the text
//! 2. **Normalization**: outer whitespace trimmed, line endings unified to `\n`,
//!    the whole text HTML-escaped
//! 3. **Blocks** (`blocks`): the escaped text is split on blank lines and each
//!    block is classified and rendered, delegating to `inline` for running text
//! 4. **Abbreviation markup**: known terms in rendered text nodes are wrapped
//!    in `<abbr>`
//!
//! ## Key Invariants
//!
//! - Escaping happens before classification, so every detector sees escaped
//!   text (a quote marker is `&gt; `, never `> `)
//! - Malformed markup is never an error; it passes through as literal text
//! - A parser holds per-document state and is not shared between conversions

pub mod abbreviations;
pub mod blocks;
pub mod cursor;
pub mod inline;

use serde::{Deserialize, Serialize};

use abbreviations::AbbreviationTable;
use blocks::{render_block, split_blocks};

/// Options controlling how markup is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Only lines ending in two spaces break; plain newlines inside a
    /// paragraph are kept as-is. When false every newline becomes `<br>`.
    pub hard_line_breaks: bool,
    /// Render links as anchors. When false, labelled links degrade to their label.
    pub enable_links: bool,
    /// Reserved; currently has no effect.
    pub enable_smart_quotes: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            hard_line_breaks: false,
            enable_links: true,
            enable_smart_quotes: true,
        }
    }
}

/// Parser for a single conversion.
///
/// Abbreviations declared in a parsed text stay registered on the instance,
/// so create a fresh parser for every document.
#[derive(Debug, Default)]
pub struct MarkupParser {
    options: ParserOptions,
    abbreviations: AbbreviationTable,
}

impl MarkupParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            options,
            abbreviations: AbbreviationTable::default(),
        }
    }

    /// Seeds the parser with an existing table, e.g. site-wide terms.
    pub fn with_abbreviations(mut self, abbreviations: AbbreviationTable) -> Self {
        self.abbreviations = abbreviations;
        self
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn abbreviations(&self) -> &AbbreviationTable {
        &self.abbreviations
    }

    /// Registers a term not declared in the text itself. Replaces any
    /// previous description for the same term.
    pub fn add_abbreviation(&mut self, term: &str, description: &str) {
        self.abbreviations.insert(term, description);
    }

    pub fn add_abbreviations<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (term, description) in entries {
            self.add_abbreviation(term.as_ref(), description.as_ref());
        }
    }

    /// Parses markup into an HTML fragment that can be embedded directly.
    pub fn parse(&mut self, input: &str) -> String {
        let input = self.abbreviations.extract(input);
        let input = normalize(&input);
        let input = html_escape::encode_double_quoted_attribute(&input);

        let mut output = String::with_capacity(input.len() * 2);
        let mut block_count = 0usize;
        for block in split_blocks(&input) {
            output.push_str(&render_block(block, &self.options));
            block_count += 1;
        }

        log::debug!(
            "rendered {block_count} blocks with {} abbreviations",
            self.abbreviations.len()
        );

        self.abbreviations.apply(&output)
    }
}

/// Trims outer whitespace and unifies line endings to `\n`.
fn normalize(input: &str) -> String {
    input.trim().replace("\r\n", "\n").replace('\r', "\n")
}
