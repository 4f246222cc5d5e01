use nanomark_engine::{Placeholder, PlaceholderContext, PlaceholderResolver};

/// Offline resolver emitting generic embed containers.
///
/// There is no media library behind it, so ids are passed through as data
/// attributes for a site's scripts or stylesheets to pick up. Posts cannot be
/// fetched offline and are never resolved.
pub struct EmbedResolver;

impl EmbedResolver {
    fn element_id(context: &PlaceholderContext<'_>, suffix: &str) -> String {
        match context.id_prefix {
            Some(prefix) => format!(" id=\"{prefix}-{suffix}\""),
            None => String::new(),
        }
    }
}

impl PlaceholderResolver for EmbedResolver {
    fn resolve(&self, placeholder: &Placeholder, context: &PlaceholderContext<'_>) -> Option<String> {
        let embed = match placeholder {
            Placeholder::Youtube { video_id } => format!(
                "<div class=\"media-youtube\"{} data-video-id=\"{video_id}\">\
                 <a href=\"https://www.youtube.com/watch?v={video_id}\">Play video</a></div>",
                Self::element_id(context, &format!("youtube-{video_id}"))
            ),
            Placeholder::Album { id } => format!(
                "<div class=\"media-album\"{} data-album-id=\"{id}\"></div>",
                Self::element_id(context, &format!("album-{id}"))
            ),
            Placeholder::Image { id, format } => {
                let format = format
                    .as_deref()
                    .map(|f| format!(" data-format=\"{f}\""))
                    .unwrap_or_default();
                format!(
                    "<figure class=\"media-image\"{} data-image-id=\"{id}\"{format}></figure>",
                    Self::element_id(context, &format!("image-{id}"))
                )
            }
            Placeholder::Download { id } => format!(
                "<p class=\"media-download\"{}><a href=\"download/{id}\">Download</a></p>",
                Self::element_id(context, &format!("download-{id}"))
            ),
            Placeholder::Twitter { .. } => return None,
        };
        Some(embed)
    }
}
