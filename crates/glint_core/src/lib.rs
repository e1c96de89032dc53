//! Glint Core - Scene description for the Glint raytracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Primitive` (`Sphere`, `Plane`, `Mesh`), `Light`, `Finish`
//! - **Scene files**: JSON scene loading with construction-time validation
//! - **Demo scenes**: ready-made scenes for examples and tests
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} primitives, {} lights",
//!     scene.primitive_count(),
//!     scene.light_count());
//! ```

pub mod demo;
pub mod light;
pub mod mesh;
pub mod primitive;
pub mod scene;
pub mod scene_file;

// Re-export commonly used types
pub use light::Light;
pub use mesh::Mesh;
pub use primitive::{Finish, Plane, Primitive, Sphere};
pub use scene::{Scene, SceneError, SceneResult};
pub use scene_file::{load_scene, load_scene_from_str};
