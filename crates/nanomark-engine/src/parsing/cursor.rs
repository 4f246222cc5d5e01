/// A cursor for scanning text while keeping positions on char boundaries.
///
/// Used where a rule needs left-to-right scanning instead of a regex, such as
/// abbreviation marking where replaced text must never be rescanned.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Returns the unconsumed remainder.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Checks if the remaining input starts with the given pattern.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Advances past one char, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes. Callers pass the length of a matched pattern,
    /// which keeps the position on a char boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.bump_char(), Some('h'));
        assert_eq!(cur.pos(), 1);
        assert_eq!(cur.rest(), "ello");
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("CMS rocks");
        assert!(cur.starts_with("CMS"));
        assert!(!cur.starts_with("rocks"));
    }

    #[test]
    fn empty_string_input() {
        let mut cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.bump_char(), None);
        assert_eq!(cur.rest(), "");
    }

    #[test]
    fn bump_char_steps_over_multibyte_chars() {
        let mut cur = Cursor::new("äb");
        assert_eq!(cur.bump_char(), Some('ä'));
        assert_eq!(cur.pos(), 2);
        assert!(cur.starts_with("b"));
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("ab");
        assert!(!cur.starts_with("abcdef"));
        cur.bump_char();
        assert!(!cur.starts_with("bc"));
        assert!(cur.starts_with("b"));
    }

    #[test]
    fn bump_n_past_end() {
        // bump_n does not bounds check; rest() stays safe
        let mut cur = Cursor::new("hi");
        cur.bump_n(10);
        assert!(cur.eof());
        assert_eq!(cur.rest(), "");
        assert_eq!(cur.bump_char(), None);
    }
}
