//! Contour tracing and simplification for logoforge
//!
//! This crate walks the foreground/background boundary of a [`RasterMask`]
//! into closed pixel-space loops and reduces their point density while
//! preserving topology:
//! - Boundary-edge tracing with index-based adjacency
//! - Collinear point removal
//! - Tolerance-based polyline simplification
//!
//! [`RasterMask`]: logoforge_core::RasterMask

pub mod simplify;
pub mod trace;

pub use simplify::*;
pub use trace::*;
