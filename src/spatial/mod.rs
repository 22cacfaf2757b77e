//! Geometric data: points, polygons, transform sets and labeled output
//!
//! This module contains:
//! - Homogeneous points and polygons
//! - The ordered transform set supplied by the caller
//! - Labeled geometry returned by computations

/// Labeled output geometry, bounds and grouping by transform
pub mod geometry;
/// Homogeneous points and polygons
pub mod polygon;
/// Built-in transform sets
pub mod presets;
/// Ordered collection of weighted transforms
pub mod transform_set;

pub use polygon::{Point, Polygon};
pub use transform_set::TransformSet;
