//! Processing options passed through detection and dispatch.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::source::Dims;

/// Options controlling thumbnail generation and type acceptance.
///
/// Passed by reference through dispatch into whichever processor handles the
/// source. Only `accepted_mime_types` is consulted by this layer; the rest
/// is carried for the processors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Target thumbnail bounding box.
    pub thumb_dims: Dims,
    /// Largest source dimensions a processor should accept. Zero disables
    /// the check.
    pub max_source_dims: Dims,
    /// JPEG output quality in [1, 100].
    pub jpeg_quality: u8,
    /// MIME types the caller will accept. `None` accepts every recognized
    /// type.
    pub accepted_mime_types: Option<HashSet<String>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            thumb_dims: Dims {
                width: 150,
                height: 150,
            },
            max_source_dims: Dims::default(),
            jpeg_quality: 90,
            accepted_mime_types: None,
        }
    }
}
