//! The canonical ordered collection of committed features.

use crate::error::SketchError;
use crate::feature::{DrawnFeature, FeatureId, FeatureType, ShapeLimits};
use crate::messenger::Messenger;
use crate::validation;

/// Owner of the committed feature list.
///
/// The store enforces per-type caps and the overlap rules (through
/// [`validation`]) on insertion, and keeps a single current error message
/// with overwrite semantics. Insertion order is the authoritative creation
/// order: it drives auto-naming and export order and is never reshuffled.
///
/// The store is meant to be driven by a single event-processing thread; all
/// reads are synchronous, and an optional [`Messenger`] prompts external
/// consumers to re-read after a change.
#[derive(Default)]
pub struct FeatureStore {
    features: Vec<DrawnFeature>,
    limits: ShapeLimits,
    error: Option<SketchError>,
    messenger: Option<Box<dyn Messenger>>,
}

impl FeatureStore {
    /// Creates an empty store with default shape limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given shape limits.
    pub fn with_limits(limits: ShapeLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Sets the messenger notified about state changes.
    pub fn set_messenger(&mut self, messenger: impl Messenger + 'static) {
        self.messenger = Some(Box::new(messenger));
    }

    /// Validates and appends a feature.
    ///
    /// Fails without mutating the feature list if the per-type cap is
    /// reached, the geometry is malformed, or the overlap rules reject the
    /// candidate. A partial overlap does not fail: the feature is committed
    /// with its overlap against existing shapes trimmed away.
    ///
    /// On success the current error is cleared and the committed feature's
    /// id is returned; on failure the error is recorded in the store.
    pub fn add(&mut self, mut feature: DrawnFeature) -> Result<FeatureId, SketchError> {
        let feature_type = feature.feature_type();
        let limit = self.limits.limit(feature_type);
        if self.count(feature_type) >= limit {
            return Err(self.fail(SketchError::LimitExceeded {
                feature_type,
                limit,
            }));
        }

        if let Err(err) = feature.check() {
            return Err(self.fail(err));
        }

        match validation::validate(&feature, &self.features) {
            Ok(None) => {}
            Ok(Some(trimmed)) => {
                log::debug!("trimmed overlap from '{}'", feature.name());
                feature.set_shape(trimmed);
            }
            Err(err) => return Err(self.fail(err)),
        }

        let id = feature.id();
        log::debug!("committed {} '{}'", feature_type, feature.name());
        self.features.push(feature);
        self.error = None;
        self.notify();
        Ok(id)
    }

    /// Removes the feature with the given id.
    ///
    /// Idempotent: removing an absent id is a no-op and not an error. The
    /// current error is cleared either way.
    pub fn remove(&mut self, id: FeatureId) {
        let before = self.features.len();
        self.features.retain(|feature| feature.id() != id);
        if self.features.len() != before {
            log::debug!("removed feature {id}");
        }

        self.error = None;
        self.notify();
    }

    /// The committed features in insertion order.
    pub fn features(&self) -> &[DrawnFeature] {
        &self.features
    }

    /// Number of committed features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if no features are committed.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Number of committed features of the given type.
    pub fn count(&self, feature_type: FeatureType) -> usize {
        self.features
            .iter()
            .filter(|feature| feature.feature_type() == feature_type)
            .count()
    }

    /// The configured cap for the given type.
    pub fn limit(&self, feature_type: FeatureType) -> usize {
        self.limits.limit(feature_type)
    }

    /// Features whose name or type tag contains the query,
    /// case-insensitively. Store order is preserved.
    pub fn filtered(&self, query: &str) -> Vec<&DrawnFeature> {
        let query = query.to_lowercase();
        self.features
            .iter()
            .filter(|feature| {
                feature.name().to_lowercase().contains(&query)
                    || feature.feature_type().tag().contains(&query)
            })
            .collect()
    }

    /// The current error, if any.
    pub fn error(&self) -> Option<&SketchError> {
        self.error.as_ref()
    }

    /// Records an error, overwriting any previous one.
    pub fn set_error(&mut self, error: SketchError) {
        self.error = Some(error);
        self.notify();
    }

    /// Clears the current error.
    pub fn clear_error(&mut self) {
        self.error = None;
        self.notify();
    }

    fn fail(&mut self, error: SketchError) -> SketchError {
        log::debug!("rejected candidate: {error}");
        self.error = Some(error.clone());
        self.notify();
        error
    }

    fn notify(&self) {
        if let Some(messenger) = &self.messenger {
            messenger.notify();
        }
    }
}
