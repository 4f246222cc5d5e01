use super::kinds::{BlockQuote, CodeFence, Heading, List, Rule};

/// The kind of a block, borrowing any parts extracted during detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind<'a> {
    /// `# Title` up to `###### Title`. The text is not inline-rendered.
    Heading { level: usize, text: &'a str },
    /// A block made only of one repeated rule character.
    Rule,
    /// A block between triple-backtick fences.
    FencedCode {
        /// Info string after the opening fence, if any.
        lang: Option<&'a str>,
        /// Everything between the fences, verbatim.
        body: &'a str,
    },
    /// A block starting with the escaped quote marker.
    BlockQuote,
    /// A block starting with a `-` or `#` item marker.
    List,
    /// The default when nothing else matches.
    Paragraph,
}

/// Classifies an escaped block.
///
/// Precedence is fixed and first match wins: heading, rule, fenced code,
/// block quote, list, paragraph. A `#` block that is not a heading (e.g.
/// `#item` or several lines) therefore becomes a list, and `---` is a rule
/// rather than a list.
pub fn classify(block: &str) -> BlockKind<'_> {
    if let Some((level, text)) = Heading::detect(block) {
        return BlockKind::Heading { level, text };
    }
    if Rule::detect(block) {
        return BlockKind::Rule;
    }
    if let Some((lang, body)) = CodeFence::detect(block) {
        return BlockKind::FencedCode { lang, body };
    }
    if BlockQuote::detect(block) {
        return BlockKind::BlockQuote;
    }
    if List::detect(block) {
        return BlockKind::List;
    }
    BlockKind::Paragraph
}
