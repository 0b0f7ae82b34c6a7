//! Interactive rendering for extruded logos
//!
//! This crate turns a [`TriangleMesh`] built by `logoforge-shape` into a
//! live, pointer-reactive render:
//! - Quality presets resolved against the environment
//! - A testable session state machine (loading, ready, fallback, pause)
//! - Eased pointer-driven orientation
//! - A wgpu mesh renderer with an off-thread geometry loader
//!
//! [`TriangleMesh`]: logoforge_core::TriangleMesh

pub mod camera;
pub mod loader;
pub mod orientation;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod shaders;
pub mod viewer;

pub use camera::{logo_model_matrix, HeroCamera};
pub use loader::GeometryLoader;
pub use orientation::{Orientation, PointerOffset};
pub use renderer::{HeroRenderer, HeroUniforms, MeshVertex};
pub use session::{HeroSession, Phase};
pub use settings::{resolve_settings, HeroSettings, QualityTier, SettingsInput};
pub use viewer::HeroViewer;
