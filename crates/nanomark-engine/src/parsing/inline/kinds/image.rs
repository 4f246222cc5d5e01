use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::tags::strip_tags;

/// `![alt](src "title")` after escaping, so the title quotes are `&quot;`.
static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(([^\) ]*)\s*(&quot;(.*?)&quot;)?\)").expect("Invalid image regex")
});

pub struct Image;

impl Image {
    /// Alt and title keep only the text of markup that earlier passes
    /// produced. A source rewritten by an earlier pass stays literal.
    pub fn apply(input: &str) -> String {
        IMAGE
            .replace_all(input, |caps: &Captures| {
                let src = &caps[2];
                if src.contains('<') {
                    return caps[0].to_string();
                }
                let alt = strip_tags(&caps[1]);
                match caps.get(4) {
                    Some(title) => format!(
                        "<img src=\"{src}\" alt=\"{alt}\" title=\"{}\">",
                        strip_tags(title.as_str())
                    ),
                    None => format!("<img src=\"{src}\" alt=\"{alt}\">"),
                }
            })
            .into_owned()
    }
}
