/// Blockquote block type with owned delimiter constant.
///
/// Blocks are classified after HTML escaping, so the marker is the escaped
/// form of `> `. Quotes do not nest.
pub struct BlockQuote;

impl BlockQuote {
    /// The quote marker as it appears in escaped text.
    pub const MARKER: &'static str = "&gt; ";

    pub fn detect(block: &str) -> bool {
        block.starts_with(Self::MARKER)
    }

    /// Removes one leading marker from every line that has one.
    pub fn strip_markers(block: &str) -> String {
        block
            .split('\n')
            .map(|line| line.strip_prefix(Self::MARKER).unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Wraps already inline-rendered content.
    pub fn render(content: &str) -> String {
        format!("<blockquote><p>{content}</p></blockquote>\n")
    }
}
