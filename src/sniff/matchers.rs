//! Signature matchers for content-based type detection.
//!
//! Three matching strategies, increasing in cost: exact byte prefixes,
//! masked patterns for RIFF-style containers whose fixed bytes are
//! interspersed with variable fields, and structural checks for formats
//! whose identity is buried inside nested framing (EBML doctypes, MP4
//! compatible-brand lists).

use memchr::memmem;
use serde::{Deserialize, Serialize};

/// A recognized (MIME type, canonical extension) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub mime: String,
    pub ext: String,
}

impl Detection {
    pub fn new(mime: impl Into<String>, ext: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            ext: ext.into(),
        }
    }
}

/// Examines up to the first 512 bytes of a file and reports the MIME type
/// and canonical extension it recognizes, if any.
///
/// Matchers are stateless: the result is a pure function of the prefix.
pub trait Matcher: Send + Sync {
    fn match_prefix(&self, prefix: &[u8]) -> Option<Detection>;
}

/// Matches when the prefix begins with a fixed byte sequence.
pub struct ExactSig {
    mime: String,
    ext: String,
    sig: Vec<u8>,
}

impl ExactSig {
    pub fn new(mime: impl Into<String>, ext: impl Into<String>, sig: impl Into<Vec<u8>>) -> Self {
        Self {
            mime: mime.into(),
            ext: ext.into(),
            sig: sig.into(),
        }
    }
}

impl Matcher for ExactSig {
    fn match_prefix(&self, prefix: &[u8]) -> Option<Detection> {
        if prefix.starts_with(&self.sig) {
            Some(Detection::new(&self.mime, &self.ext))
        } else {
            None
        }
    }
}

/// Matches when `prefix[i] & mask[i] == pattern[i]` for every mask position.
///
/// Zero mask bytes mark don't-care positions such as the RIFF chunk size
/// field. Fails closed when the prefix is shorter than the mask.
pub struct MaskedSig {
    mime: String,
    ext: String,
    mask: Vec<u8>,
    pattern: Vec<u8>,
}

impl MaskedSig {
    /// `mask` and `pattern` must be the same length.
    pub fn new(
        mime: impl Into<String>,
        ext: impl Into<String>,
        mask: impl Into<Vec<u8>>,
        pattern: impl Into<Vec<u8>>,
    ) -> Self {
        let mask = mask.into();
        let pattern = pattern.into();
        debug_assert_eq!(mask.len(), pattern.len());
        Self {
            mime: mime.into(),
            ext: ext.into(),
            mask,
            pattern,
        }
    }
}

impl Matcher for MaskedSig {
    fn match_prefix(&self, prefix: &[u8]) -> Option<Detection> {
        if prefix.len() < self.mask.len() {
            return None;
        }
        for (i, &mask) in self.mask.iter().enumerate() {
            if prefix[i] & mask != self.pattern[i] {
                return None;
            }
        }
        Some(Detection::new(&self.mime, &self.ext))
    }
}

const EBML_MAGIC: &[u8] = b"\x1A\x45\xDF\xA3";

/// Structural matcher for EBML containers: WebM and Matroska.
///
/// Both share the EBML magic at offset 0 and differ only in the doctype
/// string somewhere in the header, so the remainder of the prefix is scanned
/// for "webm" first, then "matroska".
pub struct WebmMkvSig;

impl Matcher for WebmMkvSig {
    fn match_prefix(&self, prefix: &[u8]) -> Option<Detection> {
        if prefix.len() < 8 || !prefix.starts_with(EBML_MAGIC) {
            return None;
        }
        let body = &prefix[4..];
        if memmem::find(body, b"webm").is_some() {
            Some(Detection::new("video/webm", "webm"))
        } else if memmem::find(body, b"matroska").is_some() {
            Some(Detection::new("video/x-matroska", "mkv"))
        } else {
            None
        }
    }
}

/// Structural matcher for the MP4 `ftyp` box.
///
/// Validates the leading box framing, then walks the 4-byte-aligned brand
/// codes for one starting with "mp4". The chunk at offset 12 is the minor
/// version field, not a brand, and is skipped. This models the
/// compatible-brands list without a general box parser.
pub struct Mp4Sig;

impl Matcher for Mp4Sig {
    fn match_prefix(&self, prefix: &[u8]) -> Option<Detection> {
        if prefix.len() < 12 {
            return None;
        }
        let box_size = u32::from_be_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize;
        if box_size % 4 != 0 || prefix.len() < box_size || &prefix[4..8] != b"ftyp" {
            return None;
        }
        let mut at = 8;
        while at < box_size {
            // minor version number
            if at != 12 && &prefix[at..at + 3] == b"mp4" {
                return Some(Detection::new("video/mp4", "mp4"));
            }
            at += 4;
        }
        None
    }
}
