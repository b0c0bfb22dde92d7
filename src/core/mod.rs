//! Core data types for sources, thumbnails, and processing options.

pub mod options;
pub mod source;

pub use options::Options;
pub use source::{Dims, Source, Thumbnail};
