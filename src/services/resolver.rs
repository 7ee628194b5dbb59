//! Candidate resolution - accepts or rejects one path as media
//!
//! Combines the extension policy with signature sniffing. Extensions in
//! the unambiguous set are trusted without touching file content; the
//! ambiguous family is accepted only when the leading bytes sniff as the
//! family's expected MIME type.

use std::io;
use std::path::Path;

use crate::types::{CandidateDecision, DecisionReason};

use super::extension_policy::{self, ExtensionClass};
use super::signature::{read_sniff_prefix, SignatureClassifier};

/// Resolves candidate paths against the extension policy and a signature
/// classifier
pub struct CandidateResolver<C: SignatureClassifier> {
    classifier: C,
}

impl<C: SignatureClassifier> CandidateResolver<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Decide whether `path` is a valid media file
    ///
    /// I/O errors (missing file, unreadable content) are returned so the
    /// caller can treat them as rejection; they are never fatal to a scan.
    /// The classifier is consulted only for ambiguous extensions, and its
    /// result is in hand before the decision is finalized.
    pub fn resolve(&self, path: &Path) -> io::Result<CandidateDecision> {
        let abs = path.canonicalize()?;
        if !abs.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a regular file: {}", abs.display()),
            ));
        }

        match extension_policy::classify(&abs) {
            ExtensionClass::Unsupported => Ok(CandidateDecision::rejected(
                abs,
                DecisionReason::ExtensionUnsupported,
            )),
            ExtensionClass::Unambiguous => Ok(CandidateDecision::accepted(
                abs,
                DecisionReason::DefinitelySupported,
            )),
            ExtensionClass::Ambiguous => {
                let ext = extension_policy::lowercase_extension(&abs).unwrap_or_default();
                let expected = extension_policy::expected_mime(&ext);

                let prefix = read_sniff_prefix(&abs)?;
                let detected = self.classifier.classify(&prefix);

                // No detectable signature rejects; it never crashes the scan
                if detected.is_some() && detected == expected {
                    Ok(CandidateDecision::accepted(abs, DecisionReason::SniffConfirmed))
                } else {
                    tracing::debug!(
                        path = %abs.display(),
                        detected = detected.unwrap_or("none"),
                        "ambiguous extension rejected by signature"
                    );
                    Ok(CandidateDecision::rejected(abs, DecisionReason::SniffRejected))
                }
            }
        }
    }
}
