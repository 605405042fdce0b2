//! Recursive mirror-reflection ray tracer over a small fixed scene of spheres
//! and axis-aligned boxes, lit by a spherical lamp and a uniform ambient term.
//!
//! Rays start at the world origin, one per pixel (or per sample), and bounce
//! off every surface they hit until they reach a lamp, escape the scene or run
//! out of depth. Colors along the path are multiplied together.

pub mod camera;
pub mod config;
pub mod error;
pub mod object;
pub mod picture;
pub mod ray;
pub mod render;
pub mod scene;
pub mod terminal;

pub use config::RenderConfig;
pub use error::{Result, SceneError};
pub use picture::{Color, Picture};
pub use scene::Scene;
