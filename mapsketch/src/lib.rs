//! Mapsketch is the geometric consistency core of an interactive map drawing
//! application. It lets a user draw polygons, rectangles, circles and line
//! strings by a sequence of pointer interactions, keeps area shapes from
//! overlapping each other, and exports the result as GeoJSON.
//!
//! # Main components
//!
//! Everything in this crate revolves around
//!
//! * [`FeatureStore`](store::FeatureStore), the ordered collection of
//!   committed [`DrawnFeature`](feature::DrawnFeature)s with per-type caps and
//!   a single current error slot;
//! * the [`validation`] module, which decides whether a candidate shape may be
//!   committed given the current store contents and trims away any overlap
//!   with existing shapes;
//! * the [`DrawingController`](control::DrawingController), a finite state
//!   machine that turns a strictly ordered stream of pointer and tool events
//!   into finished candidate features and live preview geometry;
//! * the [`export`] module, a pure codec from the store contents to a GeoJSON
//!   feature collection document.
//!
//! Rendering, UI chrome, geocoding and file downloads are external
//! collaborators: they observe the store through its synchronous read
//! accessors (optionally prompted by a [`Messenger`](messenger::Messenger))
//! and receive preview geometry through the narrow
//! [`PreviewSink`](control::PreviewSink) interface.
//!
//! The core is single threaded and event driven: pointer events, keyboard
//! commands and tool selections are processed one at a time in arrival order,
//! and no operation blocks. Cancelling a drawing session synchronously
//! discards all partial state; a partially drawn shape is never visible to
//! the store.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod control;
pub mod error;
pub mod export;
pub mod feature;
mod messenger;
pub mod store;
pub mod validation;

pub use error::SketchError;
pub use mapsketch_types;
pub use messenger::Messenger;
