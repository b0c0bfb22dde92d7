//! Classification of byte streams against the matcher registry.

use std::collections::HashSet;
use std::io::Read;

use tracing::debug;

use super::io::{clamp_prefix, read_prefix};
use super::matchers::Detection;
use super::registry::MatcherRegistry;
use crate::error::{Result, ThumbgateError};

/// Sentinel MIME label reported when no matcher recognizes the prefix.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Classify an in-memory buffer.
///
/// Only the first 512 bytes are inspected. When `accept` is given, a
/// detected type outside the set fails with the detected label, so callers
/// can tell "nothing recognized" from "recognized but rejected."
pub fn detect(
    registry: &MatcherRegistry,
    buf: &[u8],
    accept: Option<&HashSet<String>>,
) -> Result<Detection> {
    classify(registry, clamp_prefix(buf), accept)
}

/// Classify a readable source.
///
/// Issues exactly one read of up to 512 bytes; a short read shrinks the
/// sniffing window rather than triggering a refill. Read failures surface
/// verbatim.
pub fn detect_reader<R: Read>(
    registry: &MatcherRegistry,
    reader: &mut R,
    accept: Option<&HashSet<String>>,
) -> Result<Detection> {
    let prefix = read_prefix(reader)?;
    classify(registry, &prefix, accept)
}

fn classify(
    registry: &MatcherRegistry,
    prefix: &[u8],
    accept: Option<&HashSet<String>>,
) -> Result<Detection> {
    let hit = registry.iter().find_map(|m| m.match_prefix(prefix));
    let detection = match hit {
        Some(d) => d,
        None => {
            debug!(bytes = prefix.len(), "no signature matched");
            return Err(ThumbgateError::UnsupportedMime(OCTET_STREAM.to_string()));
        }
    };
    if let Some(accept) = accept {
        if !accept.contains(&detection.mime) {
            debug!(mime = %detection.mime, "detected type outside accept set");
            return Err(ThumbgateError::UnsupportedMime(detection.mime));
        }
    }
    debug!(mime = %detection.mime, ext = %detection.ext, "content detected");
    Ok(detection)
}
