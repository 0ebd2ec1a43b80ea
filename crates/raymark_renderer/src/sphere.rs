//! Sphere primitive for ray tracing.

use raymark_math::{Interval, Ray, Vec3};

/// A sphere with its shading parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    /// Base color, each channel in [0, 1]
    pub color: Vec3,
    pub radius: f64,
    /// Mix weight in [0, 1] between direct shading and traced reflection
    pub reflectivity: f64,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, color: Vec3, radius: f64, reflectivity: f64) -> Self {
        Self {
            center,
            color,
            radius,
            reflectivity,
        }
    }

    /// Near-root hit test, solving `a*t^2 + 2*b*t + c = 0`.
    ///
    /// Only the near root `(-b - sqrt(disc)) / a` is considered, so a
    /// ray starting inside the sphere misses through the far side. A
    /// zero discriminant (grazing ray) also counts as a miss. Returns
    /// the root only if it lies strictly inside the window.
    pub fn hit(&self, ray: &Ray, window: Interval) -> Option<f64> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let root = (-b - discriminant.sqrt()) / a;
        if window.surrounds(root) {
            Some(root)
        } else {
            None
        }
    }

    /// Outward unit normal at a point on the sphere's surface.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center) / self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.5, 0.5, 0.5),
            0.5,
            0.0,
        );

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let window = Interval::new(0.001, f64::INFINITY);

        let t = sphere.hit(&ray, window).unwrap();
        assert!((t - 0.5).abs() < 1e-9); // Should hit at t=0.5
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.5, 0.5, 0.5),
            0.5,
            0.0,
        );

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        let window = Interval::new(0.001, f64::INFINITY);

        assert!(sphere.hit(&ray, window).is_none());
    }

    #[test]
    fn test_hit_from_inside_misses() {
        // Only the near root is considered, so a ray starting inside
        // does not register the far-side exit.
        let sphere = Sphere::new(Vec3::ZERO, Vec3::ONE, 2.0, 0.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let window = Interval::new(0.001, f64::INFINITY);

        assert!(sphere.hit(&ray, window).is_none());
    }

    #[test]
    fn test_normal_is_unit_and_outward() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ONE, 2.0, 0.0);
        let point = Vec3::new(3.0, 2.0, 3.0); // +X pole

        let normal = sphere.normal_at(point);
        assert!((normal.length() - 1.0).abs() < 1e-12);
        assert!((normal - Vec3::X).length() < 1e-12);
    }

    #[test]
    fn test_hit_respects_window() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), Vec3::ONE, 1.0, 0.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Near root is t=4; a window ending before it misses
        assert!(sphere.hit(&ray, Interval::new(0.001, 3.0)).is_none());
        assert!(sphere.hit(&ray, Interval::new(0.001, 10.0)).is_some());
    }
}
