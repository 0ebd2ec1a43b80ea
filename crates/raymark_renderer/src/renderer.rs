//! Frame driver: pixel loop, display conversion, and telemetry.

use crate::{trace, Camera, Sampler, Scene};
use log::debug;
use raymark_math::Vec3;
use std::time::{Duration, Instant};

/// Flat RGB pixel store: width*height*3 bytes, row-major, top row
/// first. Written once per pixel by the frame driver.
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new pixel buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 3) as usize],
        }
    }

    /// Write the pixel at (x, y), clamping each channel to [0, 1].
    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        let idx = ((y * self.width + x) * 3) as usize;
        self.pixels[idx..idx + 3].copy_from_slice(&color_to_rgb(color));
    }

    /// Read the pixel at (x, y) back as display bytes.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = ((y * self.width + x) * 3) as usize;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// The raw byte contents (for handing to an image encoder).
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the buffer, returning the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }
}

/// Convert a radiance value to 8-bit RGB.
///
/// Each channel is clamped to [0, 1] and scaled to 0-255. No gamma
/// correction is applied.
pub fn color_to_rgb(color: Vec3) -> [u8; 3] {
    let r = (color.x.clamp(0.0, 1.0) * 255.0) as u8;
    let g = (color.y.clamp(0.0, 1.0) * 255.0) as u8;
    let b = (color.z.clamp(0.0, 1.0) * 255.0) as u8;
    [r, g, b]
}

/// Telemetry for one completed render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderStats {
    /// Primary rays traced (one per pixel)
    pub primary_rays: u64,
    /// Wall time spent in the pixel loop
    pub elapsed: Duration,
    /// Primary-ray throughput
    pub rays_per_sec: f64,
}

/// Render the scene to a pixel buffer, single-threaded.
///
/// The sampler sequence is shared across pixels, so soft shadows
/// depend on draw order: a fixed seed pins the entire frame. Running
/// this loop in parallel would need a sampler per worker and would
/// change the reference output.
pub fn render(scene: &Scene, camera: &Camera, sampler: &mut Sampler) -> (PixelBuffer, RenderStats) {
    let mut image = PixelBuffer::new(camera.image_width, camera.image_height);
    let mut primary_rays: u64 = 0;
    let start = Instant::now();

    for y in 0..camera.image_height {
        if y % 100 == 0 {
            debug!("row {}/{}", y, camera.image_height);
        }
        for x in 0..camera.image_width {
            let ray = camera.primary_ray(x, y);
            let color = trace(scene, &ray, 0, sampler);
            primary_rays += 1;
            image.set(x, y, color);
        }
    }

    let elapsed = start.elapsed();
    let stats = RenderStats {
        primary_rays,
        elapsed,
        rays_per_sec: primary_rays as f64 / elapsed.as_secs_f64(),
    };

    (image, stats)
}
