//! Mathematical building blocks for the engine

/// Homogeneous affine maps and their parameters
pub mod affine;
/// Weight arithmetic and weighted random selection
pub mod probability;
