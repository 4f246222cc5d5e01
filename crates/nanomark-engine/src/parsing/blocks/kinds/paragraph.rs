/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// kind matches. Unsupported constructs such as tables end up here.
pub struct Paragraph;

impl Paragraph {
    /// Wraps already inline-rendered content.
    pub fn render(content: &str) -> String {
        format!("<p>{content}</p>\n")
    }
}
