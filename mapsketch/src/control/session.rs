use mapsketch_types::{distance_m, GeoPoint, GeoPoint2d, NewGeoPoint};

use crate::control::{DrawMode, EventOutcome, PointerEvent, Preview, PreviewSink};
use crate::feature::{DrawnFeature, FeatureType, Shape};
use crate::store::FeatureStore;

/// State of the in-progress drawing gesture.
#[derive(Debug, Clone, PartialEq)]
enum SessionState {
    /// No gesture in progress.
    Idle,
    /// Polygon or line string vertices collected so far.
    Collecting(Vec<GeoPoint2d>),
    /// First corner of a rectangle or center of a circle.
    AnchorSet(GeoPoint2d),
}

/// The drawing session state machine.
///
/// Exactly one controller (and so exactly one session) exists at a time. The
/// controller consumes a strictly ordered stream of pointer events together
/// with tool selection and cancellation commands, and produces at most one
/// committed feature per completed gesture. Every finished gesture ends in
/// either a committed feature or an error recorded in the store, never in a
/// silently dropped action.
///
/// Switching tools or cancelling while a gesture is in progress discards all
/// partial state unconditionally; nothing partial is ever visible to the
/// store.
#[derive(Default)]
pub struct DrawingController {
    mode: Option<DrawMode>,
    state: SessionState,
    preview: Option<Box<dyn PreviewSink>>,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}

impl DrawingController {
    /// Creates a controller with no active tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sink that receives live preview geometry.
    pub fn set_preview_sink(&mut self, sink: impl PreviewSink + 'static) {
        self.preview = Some(Box::new(sink));
    }

    /// The currently selected tool.
    pub fn mode(&self) -> Option<DrawMode> {
        self.mode
    }

    /// Returns true if a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.state != SessionState::Idle
    }

    /// Selects the active tool (or none), discarding any in-progress gesture
    /// and clearing the store's current error.
    pub fn select_tool(&mut self, mode: Option<DrawMode>, store: &mut FeatureStore) {
        log::debug!("tool selected: {mode:?}");
        self.mode = mode;
        self.reset_session();
        store.clear_error();
    }

    /// Cancels the in-progress gesture, discarding all collected state.
    pub fn cancel(&mut self) {
        if self.is_active() {
            log::debug!("drawing session cancelled");
        }
        self.reset_session();
    }

    /// Processes a single pointer event against the current session.
    pub fn handle_event(&mut self, event: &PointerEvent, store: &mut FeatureStore) -> EventOutcome {
        let Some(mode) = self.mode else {
            return EventOutcome::Ignored;
        };

        match mode {
            DrawMode::Polygon | DrawMode::LineString => self.handle_path_event(mode, event, store),
            DrawMode::Rectangle | DrawMode::Circle => {
                self.handle_two_click_event(mode, event, store)
            }
        }
    }

    fn handle_path_event(
        &mut self,
        mode: DrawMode,
        event: &PointerEvent,
        store: &mut FeatureStore,
    ) -> EventOutcome {
        match (std::mem::take(&mut self.state), event) {
            (SessionState::Idle, PointerEvent::Down(position)) => {
                log::trace!("collecting started at {position:?}");
                self.state = SessionState::Collecting(vec![*position]);
                EventOutcome::InProgress
            }
            (SessionState::Collecting(mut points), PointerEvent::Down(position)) => {
                points.push(*position);
                self.state = SessionState::Collecting(points);
                EventOutcome::InProgress
            }
            (SessionState::Collecting(points), PointerEvent::Moved(position)) => {
                let mut path = points.clone();
                path.push(*position);
                self.state = SessionState::Collecting(points);
                self.show_preview(Preview::Path(path));
                EventOutcome::InProgress
            }
            (SessionState::Collecting(points), PointerEvent::DoubleClick) => {
                if points.len() < 2 {
                    self.state = SessionState::Collecting(points);
                    return EventOutcome::Ignored;
                }

                let shape = match mode {
                    DrawMode::LineString => Shape::Line(points),
                    _ => Shape::Polygon(points),
                };
                self.finish(mode.feature_type(), shape, store)
            }
            (state, _) => {
                self.state = state;
                EventOutcome::Ignored
            }
        }
    }

    fn handle_two_click_event(
        &mut self,
        mode: DrawMode,
        event: &PointerEvent,
        store: &mut FeatureStore,
    ) -> EventOutcome {
        match (std::mem::take(&mut self.state), event) {
            (SessionState::Idle, PointerEvent::Down(position)) => {
                log::trace!("anchor set at {position:?}");
                self.state = SessionState::AnchorSet(*position);
                EventOutcome::InProgress
            }
            (SessionState::AnchorSet(anchor), PointerEvent::Down(position)) => {
                let shape = match mode {
                    DrawMode::Rectangle => Shape::Rectangle(rectangle_corners(anchor, *position)),
                    _ => Shape::Circle {
                        center: anchor,
                        radius_m: distance_m(anchor, *position),
                    },
                };
                self.finish(mode.feature_type(), shape, store)
            }
            (SessionState::AnchorSet(anchor), PointerEvent::Moved(position)) => {
                let preview = match mode {
                    DrawMode::Rectangle => {
                        Preview::Ring(rectangle_corners(anchor, *position).to_vec())
                    }
                    _ => Preview::Circle {
                        center: anchor,
                        radius_m: distance_m(anchor, *position),
                    },
                };
                self.state = SessionState::AnchorSet(anchor);
                self.show_preview(preview);
                EventOutcome::InProgress
            }
            (state, _) => {
                self.state = state;
                EventOutcome::Ignored
            }
        }
    }

    /// Commits the assembled candidate, resetting the session whether the
    /// store accepts it or not.
    fn finish(
        &mut self,
        feature_type: FeatureType,
        shape: Shape,
        store: &mut FeatureStore,
    ) -> EventOutcome {
        self.reset_session();

        let name = format!("{} {}", feature_type.label(), store.count(feature_type) + 1);
        let candidate = DrawnFeature::new(feature_type, shape, name);

        match store.add(candidate) {
            Ok(id) => EventOutcome::Committed(id),
            Err(_) => EventOutcome::Rejected,
        }
    }

    fn reset_session(&mut self) {
        self.state = SessionState::Idle;
        self.clear_preview();
    }

    fn show_preview(&self, preview: Preview) {
        if let Some(sink) = &self.preview {
            sink.show_preview(preview);
        }
    }

    fn clear_preview(&self) {
        if let Some(sink) = &self.preview {
            sink.clear_preview();
        }
    }
}

/// The axis-aligned (in latitude/longitude) rectangle with the given points
/// as opposite corners, as 4 ordered corner points.
fn rectangle_corners(start: GeoPoint2d, end: GeoPoint2d) -> [GeoPoint2d; 4] {
    [
        start,
        GeoPoint2d::latlon(start.lat(), end.lon()),
        end,
        GeoPoint2d::latlon(end.lat(), start.lon()),
    ]
}
