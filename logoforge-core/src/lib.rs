//! Core data structures for logoforge
//!
//! This crate provides the shared types for the logo-extrusion pipeline:
//! binary raster masks sampled from logo images, closed 2D contours, the
//! triangle mesh the pipeline produces, and the common error type.

pub mod contour;
pub mod error;
pub mod mask;
pub mod mesh;

pub use contour::*;
pub use error::*;
pub use mask::*;
pub use mesh::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point2, Point3, Vector2, Vector3};

/// Common result type for logoforge operations
pub type Result<T> = std::result::Result<T, Error>;
