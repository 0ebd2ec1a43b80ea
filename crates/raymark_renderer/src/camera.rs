//! Pinhole camera and primary ray generation.

use raymark_math::{Ray, Vec3};

/// Camera generating one primary ray per pixel.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    // Vertical field of view in degrees
    vfov: f64,

    // Cached computed values (set by initialize())
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    half_width: f64,
    half_height: f64,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 1920,
            image_height: 1080,
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 60.0,
            // Cached values (initialized to defaults)
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            half_width: 1.0,
            half_height: 1.0,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set vertical field of view in degrees.
    pub fn with_vfov(mut self, vfov: f64) -> Self {
        self.vfov = vfov;
        self
    }

    /// Build the view basis (must be called before generating rays).
    ///
    /// forward = normalize(at - from), right = normalize(forward x vup),
    /// up = right x forward. Degenerate configurations (vup parallel to
    /// the view direction, from == at) produce NaN components, which
    /// propagate; they are not guarded.
    pub fn initialize(&mut self) {
        self.forward = (self.look_at - self.look_from).normalize();
        self.right = self.forward.cross(self.vup).normalize();
        self.up = self.right.cross(self.forward);

        let theta = self.vfov.to_radians();
        self.half_height = (theta / 2.0).tan();
        self.half_width =
            self.half_height * (self.image_width as f64 / self.image_height as f64);
    }

    /// Primary ray through pixel (x, y), top-left origin.
    ///
    /// The direction is normalized so the specular exponent downstream
    /// stays meaningful.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let u = (2.0 * x as f64 / self.image_width as f64 - 1.0) * self.half_width;
        let v = (1.0 - 2.0 * y as f64 / self.image_height as f64) * self.half_height;

        let direction = (self.forward + self.right * u + self.up * v).normalize();
        Ray::new(self.look_from, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
