//! Geographic geometry primitives used by the `mapsketch` drawing engine.
//!
//! This crate contains only pure data types and functions: a geographic point
//! type with latitude/longitude accessors, ring closure helpers, great-circle
//! distance and destination calculations, and circle discretization. Nothing
//! here has side effects or knows about features, stores or user input.

mod point;
pub use point::*;

mod ring;
pub use ring::*;

mod geodesic;
pub use geodesic::*;

mod circle;
pub use circle::*;

mod geo_types;
