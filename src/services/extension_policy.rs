//! Extension policy - partitions file suffixes into trust classes
//!
//! Extensions are either trusted outright, trusted only after signature
//! sniffing, or unsupported. `.ts` is the one ambiguous suffix: it is
//! shared historically with non-media formats, so only content that sniffs
//! as MPEG transport stream is accepted.

use std::path::Path;

/// MIME type an ambiguous `.ts` file must sniff as to be accepted
pub const MPEG_TS_MIME: &str = "video/mp2t";

/// Trust class for a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionClass {
    /// Not a supported media extension
    Unsupported,
    /// Trusted by extension alone
    Unambiguous,
    /// Requires signature sniffing to confirm true format
    Ambiguous,
}

/// Classify a path by its extension
///
/// Pure function of the path string: lowercase comparison, no separator,
/// extensionless paths are always `Unsupported`.
pub fn classify(path: &Path) -> ExtensionClass {
    let Some(ext) = lowercase_extension(path) else {
        return ExtensionClass::Unsupported;
    };

    if is_ambiguous_extension(&ext) {
        ExtensionClass::Ambiguous
    } else if is_unambiguous_extension(&ext) {
        ExtensionClass::Unambiguous
    } else {
        ExtensionClass::Unsupported
    }
}

/// Fast pre-filter: is the extension in the supported set at all?
pub fn is_supported(path: &Path) -> bool {
    classify(path) != ExtensionClass::Unsupported
}

/// Expected MIME type for an ambiguous extension family
pub fn expected_mime(ext: &str) -> Option<&'static str> {
    match ext {
        "ts" => Some(MPEG_TS_MIME),
        _ => None,
    }
}

/// Extension with the leading separator stripped, lowercased
pub fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

fn is_unambiguous_extension(ext: &str) -> bool {
    matches!(
        ext,
        "mp4" | "mkv" | "webm" | "mov" | "avi" | "m4v" | "flv" | "wmv" | "m2ts" | "mts"
            | "mpeg" | "mpg" | "3gp" | "3g2" | "ogv"
    )
}

fn is_ambiguous_extension(ext: &str) -> bool {
    ext == "ts"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unambiguous_extensions_classify_as_unambiguous() {
        for name in ["a.mp4", "b.mkv", "c.webm", "d.m2ts", "e.mts", "f.ogv"] {
            assert_eq!(classify(Path::new(name)), ExtensionClass::Unambiguous);
        }
    }

    #[test]
    fn ts_classifies_as_ambiguous() {
        assert_eq!(classify(Path::new("clip.ts")), ExtensionClass::Ambiguous);
    }

    #[test]
    fn unsupported_and_extensionless_classify_as_unsupported() {
        assert_eq!(classify(Path::new("notes.txt")), ExtensionClass::Unsupported);
        assert_eq!(classify(Path::new("README")), ExtensionClass::Unsupported);
        assert_eq!(classify(Path::new(".hidden")), ExtensionClass::Unsupported);
    }

    #[test]
    fn extension_comparison_is_case_insensitive() {
        assert_eq!(classify(Path::new("MOVIE.MP4")), ExtensionClass::Unambiguous);
        assert_eq!(classify(Path::new("CLIP.Ts")), ExtensionClass::Ambiguous);
    }

    #[test]
    fn expected_mime_only_for_ambiguous_family() {
        assert_eq!(expected_mime("ts"), Some(MPEG_TS_MIME));
        assert_eq!(expected_mime("mp4"), None);
        assert_eq!(expected_mime("txt"), None);
    }
}
