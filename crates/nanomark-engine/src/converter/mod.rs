//! # Converter Chain
//!
//! A conversion is a chain of stages. Each stage may own one predecessor;
//! [`ContentConverter::convert`] runs the predecessor first and feeds its
//! output into the stage's own [`ContentConverter::transform`], so for a stage
//! `a` wrapping `b`:
//!
//! ```text
//! a.convert(x) == a.transform(b.convert(x))
//! ```
//!
//! [`html::HtmlConverter`] is the markup stage. [`FnConverter`] lifts a plain
//! closure into a stage for host-specific pre- or post-processing.

pub mod html;
pub mod placeholder;
pub mod xhtml;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Per-conversion options passed down the whole chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Prefix for element ids generated by decorating stages and resolvers.
    pub id_prefix: Option<String>,
}

impl ConvertOptions {
    pub fn with_id_prefix(prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: Some(prefix.into()),
        }
    }
}

/// One stage of a conversion chain.
pub trait ContentConverter {
    /// The wrapped stage that runs before this one, if any.
    fn inner(&self) -> Option<&dyn ContentConverter>;

    /// This stage's own transformation, without the predecessor.
    fn transform(&self, input: &str, options: &ConvertOptions) -> Result<String, ConvertError>;

    /// Runs the whole chain ending in this stage, innermost stage first.
    fn convert(&self, input: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
        match self.inner() {
            Some(inner) => {
                let converted = inner.convert(input, options)?;
                self.transform(&converted, options)
            }
            None => self.transform(input, options),
        }
    }
}

/// A stage backed by a closure.
pub struct FnConverter<F> {
    func: F,
    inner: Option<Box<dyn ContentConverter>>,
}

impl<F> FnConverter<F>
where
    F: Fn(&str, &ConvertOptions) -> String,
{
    pub fn new(func: F) -> Self {
        Self { func, inner: None }
    }

    pub fn with_inner(mut self, inner: Box<dyn ContentConverter>) -> Self {
        self.inner = Some(inner);
        self
    }
}

impl<F> ContentConverter for FnConverter<F>
where
    F: Fn(&str, &ConvertOptions) -> String,
{
    fn inner(&self) -> Option<&dyn ContentConverter> {
        self.inner.as_deref()
    }

    fn transform(&self, input: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
        Ok((self.func)(input, options))
    }
}
