//! Media placeholders.
//!
//! After the markup is rendered, a paragraph that consists of nothing but a
//! directive such as `[youtube:https://www.youtube.com/watch?v=abc]` or
//! `[image:12:thumb]` is replaced by embed markup produced by a
//! [`PlaceholderResolver`].

use std::sync::LazyLock;

use html_escape::decode_html_entities;
use regex::Regex;

use super::ConvertOptions;
use crate::error::ConvertError;

/// A placeholder paragraph on its own line.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)<p>\[(youtube|album|image|download|twitter):([^\]]+?)\]</p>$")
        .expect("Invalid placeholder regex")
});

static YOUTUBE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v=([A-Za-z0-9_-]+)").expect("Invalid youtube id regex"));

static SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("Invalid script regex")
});

/// Replacement for a twitter placeholder the resolver could not find.
pub const POST_NOT_FOUND: &str = "<p>Embedded post not found!</p>";

/// A recognized media directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// Click-to-play video.
    Youtube { video_id: String },
    /// Gallery of a media album.
    Album { id: i64 },
    /// Preview image, optionally in a named format.
    Image { id: i64, format: Option<String> },
    /// Download link for a media file.
    Download { id: i64 },
    /// Embedded social-media post.
    Twitter { url: String },
}

impl Placeholder {
    /// Builds a placeholder from the directive type and its raw arguments.
    ///
    /// Returns `None` for unknown types and for youtube directives without a
    /// video id.
    pub fn parse(kind: &str, args: &str) -> Option<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "youtube" => YOUTUBE_ID.captures(args).map(|caps| Placeholder::Youtube {
                video_id: caps[1].to_string(),
            }),
            "album" => Some(Placeholder::Album {
                id: parse_leading_int(args),
            }),
            "image" => {
                let (id, format) = match args.split_once(':') {
                    Some((id, format)) => (id, Some(format.to_string())),
                    None => (args, None),
                };
                Some(Placeholder::Image {
                    id: parse_leading_int(id),
                    format,
                })
            }
            "download" => Some(Placeholder::Download {
                id: parse_leading_int(args),
            }),
            "twitter" => Some(Placeholder::Twitter {
                url: decode_html_entities(args.trim()).into_owned(),
            }),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Placeholder::Youtube { .. } => "youtube",
            Placeholder::Album { .. } => "album",
            Placeholder::Image { .. } => "image",
            Placeholder::Download { .. } => "download",
            Placeholder::Twitter { .. } => "twitter",
        }
    }
}

/// What a resolver knows about the token it is resolving.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderContext<'a> {
    /// The complete matched token, e.g. `<p>[album:3]</p>`.
    pub token: &'a str,
    pub id_prefix: Option<&'a str>,
}

/// Produces embed markup for media placeholders.
pub trait PlaceholderResolver {
    /// Returns the replacement markup, or `None` when the media is unknown.
    fn resolve(&self, placeholder: &Placeholder, context: &PlaceholderContext<'_>)
    -> Option<String>;
}

/// Replaces every placeholder paragraph in `html`.
///
/// Fails with [`ConvertError::MissingResolver`] if a token is found and no
/// resolver is configured; no partial output is returned in that case.
pub fn substitute(
    html: &str,
    resolver: Option<&dyn PlaceholderResolver>,
    options: &ConvertOptions,
) -> Result<String, ConvertError> {
    let mut out = String::with_capacity(html.len());
    let mut last = 0;

    for caps in TOKEN.captures_iter(html) {
        let Some(token) = caps.get(0) else {
            continue;
        };
        let Some(resolver) = resolver else {
            return Err(ConvertError::MissingResolver {
                placeholder: token.as_str().to_string(),
            });
        };

        let context = PlaceholderContext {
            token: token.as_str(),
            id_prefix: options.id_prefix.as_deref(),
        };
        out.push_str(&html[last..token.start()]);
        out.push_str(&replacement(&caps[1], &caps[2], resolver, &context));
        last = token.end();
    }

    out.push_str(&html[last..]);
    Ok(out)
}

fn replacement(
    kind: &str,
    args: &str,
    resolver: &dyn PlaceholderResolver,
    context: &PlaceholderContext<'_>,
) -> String {
    let Some(placeholder) = Placeholder::parse(kind, args) else {
        log::warn!("Dropping placeholder without a video id: {}", context.token);
        return String::new();
    };

    match (resolver.resolve(&placeholder, context), &placeholder) {
        (Some(embed), Placeholder::Twitter { .. }) => SCRIPT.replace_all(&embed, "").into_owned(),
        (Some(embed), _) => embed,
        (None, Placeholder::Twitter { url }) => {
            log::warn!("Embedded post not found: {url}");
            POST_NOT_FOUND.to_string()
        }
        (None, _) => {
            log::warn!("Resolver left {} placeholder unresolved", placeholder.kind());
            context.token.to_string()
        }
    }
}

/// Parses leading ASCII digits (after an optional sign), 0 if there are none.
/// Out-of-range values saturate.
fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

    if negative { -value } else { value }
}
