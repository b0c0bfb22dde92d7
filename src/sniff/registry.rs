//! Ordered matcher registry with the built-in signature set.

use super::matchers::{ExactSig, MaskedSig, Matcher, Mp4Sig, WebmMkvSig};

/// Ordered collection of signature matchers. First match wins; there is no
/// scoring or conflict resolution, so registration order decides ambiguous
/// prefixes.
///
/// Built once at setup and shared immutably afterwards. `register` takes
/// `&mut self`, so the borrow checker enforces the populate-then-read-only
/// lifecycle: registration cannot interleave with concurrent detection.
pub struct MatcherRegistry {
    matchers: Vec<Box<dyn Matcher>>,
}

impl MatcherRegistry {
    /// An empty registry that recognizes nothing.
    pub fn empty() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// The built-in matcher set.
    ///
    /// Probably most common types first. More expensive checks are also
    /// positioned lower.
    pub fn with_builtins() -> Self {
        let mut r = Self::empty();
        r.register(ExactSig::new("image/jpeg", "jpg", &b"\xFF\xD8\xFF"[..]));
        r.register(ExactSig::new(
            "image/png",
            "png",
            &b"\x89\x50\x4E\x47\x0D\x0A\x1A\x0A"[..],
        ));
        r.register(ExactSig::new("image/gif", "gif", &b"GIF87a"[..]));
        r.register(ExactSig::new("image/gif", "gif", &b"GIF89a"[..]));
        r.register(MaskedSig::new(
            "image/webp",
            "webp",
            &b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF\xFF\xFF"[..],
            &b"RIFF\x00\x00\x00\x00WEBPVP"[..],
        ));
        r.register(MaskedSig::new(
            "application/ogg",
            "ogg",
            &b"OggS\x00"[..],
            &b"\x4F\x67\x67\x53\x00"[..],
        ));
        r.register(WebmMkvSig);
        r.register(ExactSig::new("application/pdf", "pdf", &b"%PDF-"[..]));
        r.register(MaskedSig::new(
            "audio/mpeg",
            "mp3",
            &b"\xFF\xFF\xFF"[..],
            &b"ID3"[..],
        ));
        r.register(Mp4Sig);
        r.register(ExactSig::new("audio/aac", "aac", &b"\xFF\xF1"[..]));
        r.register(ExactSig::new("audio/aac", "aac", &b"\xFF\xF9"[..]));
        r.register(ExactSig::new("image/bmp", "bmp", &b"BM"[..]));
        r.register(MaskedSig::new(
            "audio/wave",
            "wav",
            &b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF"[..],
            &b"RIFF\x00\x00\x00\x00WAVE"[..],
        ));
        r.register(MaskedSig::new(
            "video/avi",
            "avi",
            &b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF"[..],
            &b"RIFF\x00\x00\x00\x00AVI "[..],
        ));
        r.register(ExactSig::new("image/photoshop", "psd", &b"8BPS"[..]));
        r.register(ExactSig::new("audio/x-flac", "flac", &b"fLaC"[..]));
        r.register(ExactSig::new("image/tiff", "tiff", &b"II*\x00"[..]));
        r.register(ExactSig::new("image/tiff", "tiff", &b"MM\x00*"[..]));
        r.register(ExactSig::new(
            "video/quicktime",
            "mov",
            &b"\x00\x00\x00\x14ftyp"[..],
        ));
        r.register(ExactSig::new(
            "video/x-ms-wmv",
            "wmv",
            &[0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9][..],
        ));
        r.register(ExactSig::new("video/x-flv", "flv", &b"FLV\x01"[..]));
        r.register(ExactSig::new(
            "image/x-icon",
            "ico",
            &b"\x00\x00\x01\x00"[..],
        ));
        r.register(MaskedSig::new(
            "audio/midi",
            "midi",
            &b"\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF"[..],
            &b"MThd\x00\x00\x00\x06"[..],
        ));
        r
    }

    /// Appends an extra magic prefix-based matcher to the set.
    ///
    /// Setup-time only: not safe to use concurrently with detection.
    pub fn register(&mut self, matcher: impl Matcher + 'static) {
        self.matchers.push(Box::new(matcher));
    }

    /// Matchers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Matcher> {
        self.matchers.iter().map(|m| m.as_ref())
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
