pub mod converter;
pub mod error;
pub mod parsing;

// Re-export key types for easier usage
pub use converter::{
    ContentConverter, ConvertOptions, FnConverter,
    html::HtmlConverter,
    placeholder::{Placeholder, PlaceholderContext, PlaceholderResolver},
};
pub use error::ConvertError;
pub use parsing::{MarkupParser, ParserOptions, abbreviations::AbbreviationTable};

/// Converts markup to HTML with default options.
///
/// Runs only the parser: placeholder tokens are left as literal paragraphs.
/// Use [`HtmlConverter`] when placeholders must be resolved.
pub fn to_html(input: &str) -> String {
    MarkupParser::new().parse(input)
}
