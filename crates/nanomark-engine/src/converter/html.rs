use super::placeholder::{self, PlaceholderResolver};
use super::{ContentConverter, ConvertOptions, xhtml};
use crate::error::ConvertError;
use crate::parsing::{MarkupParser, ParserOptions, abbreviations::AbbreviationTable};

/// The markup stage: renders markup to HTML, substitutes media placeholders
/// and optionally rewrites the result as XHTML.
///
/// Every conversion uses a fresh [`MarkupParser`] seeded with a copy of the
/// converter's abbreviations, so terms declared in one document never leak
/// into the next.
#[derive(Default)]
pub struct HtmlConverter {
    parser_options: ParserOptions,
    abbreviations: AbbreviationTable,
    resolver: Option<Box<dyn PlaceholderResolver>>,
    generate_xhtml: bool,
    inner: Option<Box<dyn ContentConverter>>,
}

impl HtmlConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parser_options(mut self, options: ParserOptions) -> Self {
        self.parser_options = options;
        self
    }

    /// Site-wide abbreviations applied in addition to those a document declares.
    pub fn with_abbreviations(mut self, abbreviations: AbbreviationTable) -> Self {
        self.abbreviations = abbreviations;
        self
    }

    pub fn with_resolver(mut self, resolver: Box<dyn PlaceholderResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_xhtml(mut self, generate_xhtml: bool) -> Self {
        self.generate_xhtml = generate_xhtml;
        self
    }

    /// Runs `inner` on the input before this converter.
    pub fn with_inner(mut self, inner: Box<dyn ContentConverter>) -> Self {
        self.inner = Some(inner);
        self
    }

    pub fn parser_options(&self) -> &ParserOptions {
        &self.parser_options
    }

    pub fn generates_xhtml(&self) -> bool {
        self.generate_xhtml
    }
}

impl ContentConverter for HtmlConverter {
    fn inner(&self) -> Option<&dyn ContentConverter> {
        self.inner.as_deref()
    }

    fn transform(&self, input: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
        let mut parser = MarkupParser::with_options(self.parser_options.clone())
            .with_abbreviations(self.abbreviations.clone());
        let html = parser.parse(input);

        let html = placeholder::substitute(&html, self.resolver.as_deref(), options)?;

        Ok(if self.generate_xhtml {
            xhtml::to_xhtml(&html)
        } else {
            html
        })
    }
}
