/// ATX-style heading with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Detects a single-line heading, returning `(level, text)`.
    ///
    /// The markers must be followed by whitespace, except that a block of only
    /// markers is an empty heading. Multi-line blocks are never headings since
    /// `#` also starts list items.
    pub fn detect(block: &str) -> Option<(usize, &str)> {
        if block.contains('\n') {
            return None;
        }

        let level = block.bytes().take_while(|&b| b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }

        let rest = &block[level..];
        if rest.is_empty() {
            return Some((level, ""));
        }
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some((level, rest.trim()))
    }

    /// Renders heading text as-is; it is escaped but not inline-rendered.
    pub fn render(level: usize, text: &str) -> String {
        format!("<h{level}>{text}</h{level}>\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_levels() {
        assert_eq!(Heading::detect("# One"), Some((1, "One")));
        assert_eq!(Heading::detect("###### Six"), Some((6, "Six")));
        assert_eq!(Heading::detect("####### Seven"), None);
    }

    #[test]
    fn requires_whitespace_after_markers() {
        assert_eq!(Heading::detect("#hashtag"), None);
        assert_eq!(Heading::detect("#\tTabbed"), Some((1, "Tabbed")));
    }

    #[test]
    fn bare_markers_are_an_empty_heading() {
        assert_eq!(Heading::detect("#"), Some((1, "")));
        assert_eq!(Heading::detect("### "), Some((3, "")));
    }

    #[test]
    fn not_a_heading() {
        assert_eq!(Heading::detect("Title"), None);
        assert_eq!(Heading::detect("# Title\nmore"), None);
    }

    #[test]
    fn render_keeps_text_verbatim() {
        assert_eq!(Heading::render(2, "A &amp; *B*"), "<h2>A &amp; *B*</h2>\n");
    }
}
