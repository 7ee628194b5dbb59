//! Pipeline components for media discovery and aggregation

pub mod aggregator;
pub mod extension_policy;
pub mod extractor;
pub mod resolver;
pub mod scanner;
pub mod signature;

pub use aggregator::Aggregator;
pub use extension_policy::ExtensionClass;
pub use extractor::{ExtractError, FfprobeExtractor, MetadataExtractor};
pub use resolver::CandidateResolver;
pub use scanner::{FolderScanner, ScanError};
pub use signature::{InferClassifier, SignatureClassifier};
