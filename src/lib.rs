//! Iterated function system fractals from weighted planar affine maps
//!
//! The engine produces geometry two ways: deterministic subdivision of a
//! seed polygon (discrete mode) and weighted random point iteration, the
//! chaos game (continuous mode). Inputs are validated before any geometry
//! is computed, and every output item is labeled with the index of the
//! transform that produced it.

#![forbid(unsafe_code)]

/// Subdivision, chaos game, validation and mode dispatch
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Affine maps and weighted selection
pub mod math;
/// Points, polygons, transform sets and labeled geometry
pub mod spatial;

pub use algorithm::engine::{Computation, Engine, EngineConfig, Mode};
pub use io::error::{IfsError, Result};
pub use math::affine::AffineTransform;
pub use spatial::{Point, Polygon, TransformSet};
