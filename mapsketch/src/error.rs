//! Error types used by the crate.

use thiserror::Error;

use crate::feature::FeatureType;

/// Mapsketch error type.
///
/// All variants are recoverable: a failed operation leaves the feature store
/// unchanged, records the error in the store's single error slot and resets
/// the active drawing session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SketchError {
    /// The per-type cap for this shape type is already reached.
    #[error("maximum {limit} {feature_type}s allowed, remove existing ones to add more")]
    LimitExceeded {
        /// Type of the rejected shape.
        feature_type: FeatureType,
        /// The configured cap for that type.
        limit: usize,
    },
    /// The candidate shape lies fully inside an existing shape.
    #[error("the new shape is fully contained within an existing shape")]
    FullyContained,
    /// The candidate shape would fully enclose an existing shape.
    #[error("the new shape would fully enclose an existing shape")]
    WouldEnclose,
    /// Trimming overlaps left the candidate with no area.
    #[error("no area is left after trimming overlaps with existing shapes")]
    EmptyAfterTrim,
    /// The candidate geometry is malformed - details are inside.
    #[error("invalid shape: {0}")]
    InvalidCandidate(String),
    /// Error serializing the export document.
    #[error("failed to serialize document: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SketchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value.to_string())
    }
}
