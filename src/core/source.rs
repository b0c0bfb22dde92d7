//! Source and thumbnail types flowing through the pipeline.
//!
//! A `Source` is produced by the caller before detection, labeled by the
//! detection engine, and consumed (possibly transformed) by a processor. A
//! `Thumbnail` is the derived artifact a processor hands back; this layer
//! treats its pixel content as opaque.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Pixel dimensions of an image-like artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dims {
    pub width: u32,
    pub height: u32,
}

impl Dims {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The subject being classified and processed.
///
/// Wraps the raw bytes plus the MIME label and canonical extension once
/// detection has run. The metadata fields are left empty by this layer and
/// filled in by processors that decode the media.
#[derive(Debug, Clone, Default)]
pub struct Source {
    /// Raw file content. Cheaply cloneable, never mutated by detection.
    pub data: Bytes,
    /// Detected MIME type. Empty until detection has run.
    pub mime: String,
    /// Canonical file extension for the detected type.
    pub extension: String,
    /// Source pixel dimensions, if a processor determined them.
    pub dims: Option<Dims>,
    /// Media duration in seconds for audio/video, if known.
    pub duration_secs: Option<f64>,
}

impl Source {
    /// A fresh, unclassified source over in-memory bytes.
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            ..Self::default()
        }
    }

    /// Whether detection has assigned a MIME label yet.
    pub fn is_classified(&self) -> bool {
        !self.mime.is_empty()
    }
}

/// Derived artifact produced by a processor.
#[derive(Debug, Clone, Default)]
pub struct Thumbnail {
    /// Encoded thumbnail image.
    pub data: Bytes,
    /// Thumbnail pixel dimensions.
    pub dims: Dims,
    /// True when the output is PNG (source had an alpha channel), false for
    /// JPEG output.
    pub is_png: bool,
}
