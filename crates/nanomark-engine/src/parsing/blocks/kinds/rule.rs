/// Horizontal rule: one marker character repeated at least three times.
pub struct Rule;

impl Rule {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_REPEAT: usize = 3;
    pub const HTML: &'static str = "<hr>\n";

    /// True when the trimmed block is a single marker character repeated.
    /// Mixed markers (`-*-`) do not count.
    pub fn detect(block: &str) -> bool {
        let t = block.trim();
        let Some(first) = t.chars().next() else {
            return false;
        };
        Self::MARKERS.contains(&first)
            && t.chars().all(|c| c == first)
            && t.chars().count() >= Self::MIN_REPEAT
    }
}
