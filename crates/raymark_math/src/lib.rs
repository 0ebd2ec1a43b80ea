// Re-export glam for convenience
pub use glam::{dvec3, DVec3};

/// 3-component double-precision vector used throughout the renderer.
pub type Vec3 = DVec3;

// Raymark math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;
