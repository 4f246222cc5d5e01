use std::sync::LazyLock;

use regex::Regex;

use super::tags::{TAG, anchor_delta, inside_tag};

/// `[label](url)`. The URL never spans a generated tag.
static LABELLED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[([^\]]+)\]\(([^)\s<>"]+)\)"#).expect("Invalid labelled link regex")
});

/// Bare HTTP/HTTPS URL
static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"]+"#).expect("Invalid URL regex"));

/// Schemes allowed in generated `href`s. URLs without a scheme are relative.
const SAFE_SCHEMES: [&str; 4] = ["http", "https", "mailto", "ftp"];

/// Escaped characters that end a bare URL.
const URL_TERMINATORS: [&str; 3] = ["&lt;", "&gt;", "&quot;"];

pub struct Link;

impl Link {
    /// With links enabled, labelled links become anchors and bare URLs that
    /// start a word are linked. With links disabled, labelled links degrade
    /// to their label and bare URLs stay plain text.
    ///
    /// Only element content is rewritten: attribute values of tags emitted by
    /// earlier passes, such as an image `alt`, are left alone, and no URL is
    /// linked inside an existing anchor.
    pub fn apply(input: &str, enabled: bool) -> String {
        let labelled = replace_labelled(input, enabled);
        if enabled {
            autolink(&labelled)
        } else {
            labelled
        }
    }
}

fn replace_labelled(html: &str, enabled: bool) -> String {
    let mut out = String::with_capacity(html.len());
    let mut last = 0;

    for caps in LABELLED.captures_iter(html) {
        let Some(m) = caps.get(0) else {
            continue;
        };
        if inside_tag(html, m.start()) || inside_tag(html, m.end()) {
            continue;
        }

        let (label, url) = (&caps[1], &caps[2]);
        out.push_str(&html[last..m.start()]);
        if enabled && is_safe_href(url) {
            out.push_str(&format!("<a href=\"{url}\">{label}</a>"));
        } else {
            out.push_str(label);
        }
        last = m.end();
    }

    out.push_str(&html[last..]);
    out
}

/// Links bare URLs in text outside anchors. A URL must start a word: it
/// follows whitespace, `(`, a line break or the start of the text.
///
/// URLs inside tags or directive arguments such as `[twitter:https://...]`
/// are not at a word start and are left alone.
fn autolink(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut anchor_depth = 0isize;
    let mut at_word_start = true;
    let mut last = 0;

    for tag in TAG.find_iter(html) {
        let text = &html[last..tag.start()];
        if anchor_depth == 0 {
            out.push_str(&autolink_text(text, at_word_start));
        } else {
            out.push_str(text);
        }
        out.push_str(tag.as_str());

        anchor_depth = (anchor_depth + anchor_delta(tag.as_str())).max(0);
        at_word_start = tag.as_str() == "<br>";
        last = tag.end();
    }

    let tail = &html[last..];
    if anchor_depth == 0 {
        out.push_str(&autolink_text(tail, at_word_start));
    } else {
        out.push_str(tail);
    }
    out
}

/// Links URLs in a run of text that contains no tags.
fn autolink_text(text: &str, at_word_start: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in BARE_URL.find_iter(text) {
        if !starts_word(&text[..m.start()], at_word_start) {
            continue;
        }
        let url = trim_url(m.as_str());
        out.push_str(&text[last..m.start()]);
        out.push_str(&format!("<a href=\"{url}\">{url}</a>"));
        last = m.start() + url.len();
    }

    out.push_str(&text[last..]);
    out
}

fn starts_word(before: &str, at_word_start: bool) -> bool {
    if before.is_empty() {
        return at_word_start;
    }
    before.ends_with(char::is_whitespace) || before.ends_with('(')
}

/// Cuts a bare URL at escaped delimiters and drops trailing punctuation that
/// usually belongs to the sentence.
fn trim_url(url: &str) -> &str {
    let mut end = URL_TERMINATORS
        .iter()
        .filter_map(|t| url.find(t))
        .min()
        .unwrap_or(url.len());

    while let Some(last) = url[..end].chars().last() {
        if matches!(last, '.' | ',' | ':' | '!' | '?' | ')' | ']' | '}') {
            end -= last.len_utf8();
        } else {
            break;
        }
    }
    &url[..end]
}

fn is_safe_href(url: &str) -> bool {
    let scheme_end = url.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if url[i..].starts_with(':') => {
            let scheme = url[..i].to_ascii_lowercase();
            SAFE_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}
