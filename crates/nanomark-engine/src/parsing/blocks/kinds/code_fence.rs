pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Detects a block opened and closed by backtick fences, returning
    /// `(lang, body)`. The body keeps its trailing newline.
    pub fn detect(block: &str) -> Option<(Option<&str>, &str)> {
        let rest = block.strip_prefix(Self::BACKTICKS)?;
        let (info, after) = rest.split_once('\n')?;
        let body = after.strip_suffix(Self::BACKTICKS)?;

        let lang = info.trim();
        Some(((!lang.is_empty()).then_some(lang), body))
    }

    /// The body is already escaped and is emitted verbatim.
    pub fn render(lang: Option<&str>, body: &str) -> String {
        match lang {
            Some(lang) => format!("<pre><code class=\"{lang}\">{body}</code></pre>\n"),
            None => format!("<pre><code>{body}</code></pre>\n"),
        }
    }
}
