//! Signature classification - best-guess MIME type from leading bytes
//!
//! The classifier is a capability trait so the resolver can be tested with
//! fakes; the production implementation wraps the `infer` matcher set with
//! a registered MPEG transport stream matcher (`infer` does not ship one).

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Bytes of file prefix read for sniffing
pub const SNIFF_PREFIX_LEN: usize = 8192;

/// MPEG-TS packet size; sync byte 0x47 repeats at this stride
const TS_PACKET_LEN: usize = 188;

/// Best-guess MIME classification of a byte prefix
pub trait SignatureClassifier: Send + Sync {
    /// Returns the detected MIME type, or `None` when no signature matches
    fn classify(&self, prefix: &[u8]) -> Option<&'static str>;
}

/// Signature classifier backed by the `infer` matcher set
pub struct InferClassifier {
    inner: infer::Infer,
}

impl InferClassifier {
    pub fn new() -> Self {
        let mut inner = infer::Infer::new();
        // Custom matchers are consulted before the built-in set
        inner.add(super::extension_policy::MPEG_TS_MIME, "ts", is_mpeg_ts);
        Self { inner }
    }
}

impl Default for InferClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureClassifier for InferClassifier {
    fn classify(&self, prefix: &[u8]) -> Option<&'static str> {
        self.inner.get(prefix).map(|kind| kind.mime_type())
    }
}

/// MPEG-TS matcher: sync byte at the start of three consecutive packets
fn is_mpeg_ts(buf: &[u8]) -> bool {
    buf.len() > 2 * TS_PACKET_LEN
        && buf[0] == 0x47
        && buf[TS_PACKET_LEN] == 0x47
        && buf[2 * TS_PACKET_LEN] == 0x47
}

/// Read a bounded prefix of a file for sniffing
///
/// The handle is opened, read, and released before this returns; no handle
/// outlives the decision it informs.
pub fn read_sniff_prefix(path: &Path) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut prefix = Vec::with_capacity(SNIFF_PREFIX_LEN);
    file.take(SNIFF_PREFIX_LEN as u64).read_to_end(&mut prefix)?;
    Ok(prefix)
}
