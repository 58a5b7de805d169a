//! User interaction handling for drawing shapes on a map.
//!
//! Drawing input is processed in several steps:
//! 1. The hosting application converts its windowing events into
//!    [`PointerEvent`]s carrying geographic coordinates (the map surface owns
//!    the screen-to-geography conversion; this crate never sees pixels).
//! 2. Tool selection and cancellation are delivered as direct calls on the
//!    [`DrawingController`] (`select_tool`, `cancel`).
//! 3. The [`DrawingController`] folds the event stream into an in-progress
//!    drawing session. While the session is active it pushes live preview
//!    geometry through the [`PreviewSink`]; when a gesture finishes, the
//!    assembled candidate is handed to the
//!    [`FeatureStore`](crate::store::FeatureStore).
//!
//! All of this runs on a single event-processing thread; events are consumed
//! one at a time in arrival order.

use mapsketch_types::GeoPoint2d;

use crate::feature::{FeatureId, FeatureType};

mod session;

pub use session::DrawingController;

/// Active drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// Draw a polygon vertex by vertex, finished with a double click.
    Polygon,
    /// Draw a rectangle by two opposite corner clicks.
    Rectangle,
    /// Draw a circle by a center click and a boundary click.
    Circle,
    /// Draw a line string vertex by vertex, finished with a double click.
    LineString,
}

impl DrawMode {
    /// The feature type produced by this tool.
    pub fn feature_type(&self) -> FeatureType {
        match self {
            DrawMode::Polygon => FeatureType::Polygon,
            DrawMode::Rectangle => FeatureType::Rectangle,
            DrawMode::Circle => FeatureType::Circle,
            DrawMode::LineString => FeatureType::LineString,
        }
    }
}

/// Pointer interaction event in geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button click at the given position.
    Down(GeoPoint2d),
    /// Pointer moved to the given position without clicking.
    Moved(GeoPoint2d),
    /// Primary button double click.
    DoubleClick,
}

/// Uncommitted, visual-only geometry of the shape being drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Open path through the collected vertices and the cursor.
    Path(Vec<GeoPoint2d>),
    /// Closed outline, given as an open vertex sequence.
    Ring(Vec<GeoPoint2d>),
    /// Circle given by center and radius in meters.
    Circle {
        /// Center of the circle.
        center: GeoPoint2d,
        /// Radius in meters.
        radius_m: f64,
    },
}

/// Rendering interface for live preview geometry.
///
/// Implemented by the external map rendering collaborator. The controller
/// calls [`show_preview`](PreviewSink::show_preview) on every pointer move
/// while a session is in progress (each call replaces the previous preview)
/// and [`clear_preview`](PreviewSink::clear_preview) when the session ends
/// for any reason.
pub trait PreviewSink {
    /// Replaces the currently displayed preview with the given geometry.
    fn show_preview(&self, preview: Preview);
    /// Removes the currently displayed preview, if any.
    fn clear_preview(&self);
}

/// Result of processing a single pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// The event did not apply to the current tool or session state.
    Ignored,
    /// The session advanced without committing a feature.
    InProgress,
    /// A finished feature was committed to the store.
    Committed(FeatureId),
    /// The finished candidate was rejected; the error is recorded in the
    /// store.
    Rejected,
}
