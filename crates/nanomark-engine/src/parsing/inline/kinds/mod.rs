//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and patterns.
//! The pass list in the parent module calls these; it never hardcodes
//! delimiters itself.

pub mod delimited;
pub mod image;
pub mod keyboard;
pub mod line_break;
pub mod link;
pub mod tags;
pub mod typography;

pub use image::Image;
pub use keyboard::Keyboard;
pub use line_break::LineBreak;
pub use link::Link;
pub use typography::Typography;
