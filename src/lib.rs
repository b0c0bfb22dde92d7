//! Content-type sniffing and thumbnail dispatch for a media pipeline.
//!
//! This crate is the entry stage of a thumbnailing pipeline: it identifies
//! the MIME type of an arbitrary byte stream by inspecting a bounded prefix,
//! then routes the stream to a type-specific processor. Callers receive
//! either a recognized classification or a structured rejection carrying the
//! offending label.
//!
//! Detection runs an ordered ensemble of signature matchers over at most the
//! first 512 bytes of input; dispatch resolves a processor through an
//! exact-label override map, falling back to fixed image/audio/video
//! category handlers.

/// Core data types module
pub mod core;
/// Processor registry and dispatch
pub mod dispatch;
/// Error types
pub mod error;
/// Logging and tracing infrastructure
pub mod logging;
/// Content-type detection engine
pub mod sniff;

// Re-export primary types at the crate root for convenience.
pub use crate::core::{Dims, Options, Source, Thumbnail};
pub use crate::dispatch::{process, Category, Processor, ProcessorRegistry};
pub use crate::error::{Result, ThumbgateError};
pub use crate::sniff::{
    detect, detect_reader, Detection, ExactSig, MaskedSig, Matcher, MatcherRegistry,
};
