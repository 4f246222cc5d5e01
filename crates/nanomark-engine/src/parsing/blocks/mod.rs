//! # Block Parsing
//!
//! Blocks are the units of normalized, escaped text between blank lines.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split_blocks`): the text is cut on runs of blank lines.
//!    Blank lines are unconditional boundaries, even inside a code fence.
//! 2. **Classification** (`classify`): each block gets exactly one [`BlockKind`],
//!    first match wins in fixed precedence order
//! 3. **Rendering** (`render_block`): each kind renders itself, delegating running
//!    text to the inline renderer
//!
//! ## Modules
//!
//! - **`classify`**: `BlockKind` and the precedence-ordered `classify` dispatch
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, Rule,
//!   CodeFence, BlockQuote, List, Paragraph)

pub mod classify;
pub mod kinds;

use std::sync::LazyLock;

use regex::Regex;

use super::{ParserOptions, inline::render_inline};

pub use classify::{BlockKind, classify};
use kinds::{BlockQuote, CodeFence, Heading, List, Paragraph, Rule};

/// A newline followed by one or more lines that are empty or whitespace only.
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n)+").expect("Invalid blank line regex"));

/// Splits normalized text into blocks. Empty text yields no blocks.
pub fn split_blocks(input: &str) -> impl Iterator<Item = &str> {
    BLANK_LINES.split(input).filter(|block| !block.is_empty())
}

/// Classifies and renders one block. The result always ends in a newline.
pub fn render_block(block: &str, options: &ParserOptions) -> String {
    let kind = classify(block);
    log::debug!("classified block as {kind:?}");

    match kind {
        BlockKind::Heading { level, text } => Heading::render(level, text),
        BlockKind::Rule => Rule::HTML.to_string(),
        BlockKind::FencedCode { lang, body } => CodeFence::render(lang, body),
        BlockKind::BlockQuote => {
            BlockQuote::render(&render_inline(&BlockQuote::strip_markers(block), options))
        }
        BlockKind::List => {
            let items: Vec<String> = List::items(block)
                .map(|item| render_inline(item, options))
                .collect();
            List::render(&items)
        }
        BlockKind::Paragraph => Paragraph::render(&render_inline(block, options)),
    }
}
