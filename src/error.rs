//! Errors raised when constructing shapes.

use glam::Vec3;
use thiserror::Error;

/// Invalid shape parameters.
///
/// Geometric query outcomes are never errors; only shape construction is
/// fallible.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("convex hull has no vertices")]
    EmptyHull,
    #[error("convex hull vertex {index} is not finite")]
    NonFiniteVertex { index: usize },
    #[error("sphere radius must be non-negative, got {0}")]
    NegativeRadius(f32),
    #[error("shape parameters must be finite")]
    NonFinite,
    #[error("box min {min} exceeds max {max}")]
    InvertedAabb { min: Vec3, max: Vec3 },
}
