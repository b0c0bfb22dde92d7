//! Bounded I/O for prefix acquisition.
//!
//! Detection only ever looks at a fixed-size window at the start of the
//! input, regardless of how much data the caller holds.

use std::io::{self, Read};
use tracing::debug;

/// Maximum number of leading bytes inspected during sniffing.
pub const SNIFF_LEN: usize = 512;

/// Read a sniffing prefix from a reader.
///
/// Performs exactly one `read()` call; a short read yields a shorter prefix
/// rather than looping to fill the buffer. Slow or chunked sources may
/// therefore sniff against fewer than `SNIFF_LEN` bytes.
pub fn read_prefix<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut buf = vec![0u8; SNIFF_LEN];
    let n = reader.read(&mut buf)?;
    buf.truncate(n);
    debug!(bytes = n, "sniff prefix acquired");
    Ok(buf)
}

/// Clamp an in-memory buffer to the sniffing window.
pub fn clamp_prefix(buf: &[u8]) -> &[u8] {
    &buf[..buf.len().min(SNIFF_LEN)]
}
