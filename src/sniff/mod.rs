//! Content-type detection engine.
//!
//! This module provides bounded prefix acquisition and an ordered ensemble
//! of signature matchers for classifying byte streams safely and
//! deterministically.

pub mod detect;
pub mod io;
pub mod matchers;
pub mod registry;

pub use detect::{detect, detect_reader, OCTET_STREAM};
pub use io::SNIFF_LEN;
pub use matchers::{Detection, ExactSig, MaskedSig, Matcher, Mp4Sig, WebmMkvSig};
pub use registry::MatcherRegistry;
