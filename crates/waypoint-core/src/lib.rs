//! **waypoint-core** — geometry primitives for the *waypoint* pathfinding core.
//!
//! This crate provides the integer [`Point`] and half-open [`Range`] types
//! used to address cells of a square grid, together with row-major index
//! conversions.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
