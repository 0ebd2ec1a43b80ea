//! Raymark renderer - recursive CPU ray tracing
//!
//! A Whitted-style recursive ray tracer for sphere scenes:
//! - Nearest-hit intersection over an ordered sphere list
//! - Jittered soft shadows from a deterministic sampler
//! - Lambert diffuse + Phong specular shading
//! - Bounded recursive reflection
//!
//! The frame driver reports primary-ray throughput, so a render pass
//! doubles as a CPU benchmark.

mod camera;
mod renderer;
mod sampler;
mod scene;
mod sphere;
mod tracer;

pub use camera::Camera;
pub use renderer::{color_to_rgb, render, PixelBuffer, RenderStats};
pub use sampler::Sampler;
pub use scene::{Hit, Scene};
pub use sphere::Sphere;
pub use tracer::{trace, MAX_DEPTH, SHADOW_SAMPLES};

/// Re-export math types from raymark_math
pub use raymark_math::{Interval, Ray, Vec3};
