//! Processor registry and dispatch.
//!
//! Maps a classified source to the processor that thumbnails it. An
//! exact-label override always wins; otherwise a fixed membership table
//! routes the label to the image, audio, or video category handler supplied
//! at construction. The handlers themselves (the decoders) are opaque to
//! this layer.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::core::{Options, Source, Thumbnail};
use crate::error::{Result, ThumbgateError};
use crate::sniff::{detect, MatcherRegistry};

/// A specialized file processor for a specific MIME type or category.
///
/// Takes the classified source and processing options, and returns the
/// (possibly transformed) source together with the derived thumbnail.
pub type Processor = Box<dyn Fn(Source, &Options) -> Result<(Source, Thumbnail)> + Send + Sync>;

/// Media category a recognized MIME label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Image,
    Audio,
    Video,
}

// PDF routes through the image handler and OGG through the video handler.
static CATEGORIES: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    [
        ("image/jpeg", Category::Image),
        ("image/png", Category::Image),
        ("image/gif", Category::Image),
        ("image/webp", Category::Image),
        ("application/pdf", Category::Image),
        ("image/bmp", Category::Image),
        ("image/photoshop", Category::Image),
        ("image/tiff", Category::Image),
        ("image/x-icon", Category::Image),
        ("audio/mpeg", Category::Audio),
        ("audio/aac", Category::Audio),
        ("audio/wave", Category::Audio),
        ("audio/x-flac", Category::Audio),
        ("audio/midi", Category::Audio),
        ("application/ogg", Category::Video),
        ("video/webm", Category::Video),
        ("video/x-matroska", Category::Video),
        ("video/mp4", Category::Video),
        ("video/avi", Category::Video),
        ("video/quicktime", Category::Video),
        ("video/x-ms-wmv", Category::Video),
        ("video/x-flv", Category::Video),
    ]
    .into_iter()
    .collect()
});

impl Category {
    /// Category membership for a MIME label, if it has one.
    pub fn of(mime: &str) -> Option<Category> {
        CATEGORIES.get(mime).copied()
    }
}

/// Routes classified sources to processors.
///
/// Holds the per-label override map and the three category handlers. Like
/// the matcher registry, overrides are a setup-time mutation: `register`
/// takes `&mut self`, dispatch takes `&self`.
pub struct ProcessorRegistry {
    overrides: HashMap<String, Processor>,
    image: Processor,
    audio: Processor,
    video: Processor,
}

impl ProcessorRegistry {
    /// A registry with the given category handlers and no overrides.
    pub fn new(image: Processor, audio: Processor, video: Processor) -> Self {
        Self {
            overrides: HashMap::new(),
            image,
            audio,
            video,
        }
    }

    /// Registers a processor for a specific MIME type.
    ///
    /// Can be used to add support for additional MIME types or as an
    /// override: a registered processor takes precedence over the category
    /// handler for that label. Setup-time only: not safe to use concurrently
    /// with dispatch.
    pub fn register(&mut self, mime: impl Into<String>, processor: Processor) {
        self.overrides.insert(mime.into(), processor);
    }

    /// Routes a classified source to its processor.
    ///
    /// Resolution order: exact-label override, then category handler, else
    /// failure carrying the unhandled label.
    pub fn dispatch(&self, src: Source, opts: &Options) -> Result<(Source, Thumbnail)> {
        if let Some(processor) = self.overrides.get(&src.mime) {
            debug!(mime = %src.mime, "dispatching to override processor");
            return processor(src, opts);
        }
        match Category::of(&src.mime) {
            Some(Category::Image) => (self.image)(src, opts),
            Some(Category::Audio) => (self.audio)(src, opts),
            Some(Category::Video) => (self.video)(src, opts),
            None => {
                debug!(mime = %src.mime, "no processor for detected type");
                Err(ThumbgateError::UnsupportedMime(src.mime))
            }
        }
    }
}

/// Full pipeline entry: detect the source's type, then dispatch it.
///
/// The detected MIME label and canonical extension are written into the
/// source before it reaches the processor. `options.accepted_mime_types`
/// acts as the accept set for detection.
pub fn process(
    matchers: &MatcherRegistry,
    processors: &ProcessorRegistry,
    mut src: Source,
    opts: &Options,
) -> Result<(Source, Thumbnail)> {
    let detection = detect(matchers, &src.data, opts.accepted_mime_types.as_ref())?;
    src.mime = detection.mime;
    src.extension = detection.ext;
    processors.dispatch(src, opts)
}
