//! Parallax Core - model and image inputs for the renderer.
//!
//! This crate provides:
//!
//! - **Mesh**: indexed triangle geometry, loaded once before rendering
//! - **OBJ support**: Wavefront OBJ parsing (positions and faces)
//! - **EnvMap**: the panoramic background image, sampled by ray direction
//!
//! # Example
//!
//! ```ignore
//! use parallax_core::{load_obj, EnvMap};
//!
//! let mesh = load_obj("duck.obj")?;
//! let env = EnvMap::load("envmap.jpg")?;
//! println!("{} triangles, {}x{} background",
//!     mesh.triangle_count(), env.width(), env.height());
//! ```

pub mod envmap;
pub mod mesh;
pub mod obj;

// Re-export commonly used types
pub use envmap::{EnvMap, EnvMapError};
pub use mesh::Mesh;
pub use obj::{load_obj, ObjError};
