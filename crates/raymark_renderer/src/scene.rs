//! Scene model and nearest-hit intersection.

use crate::Sphere;
use raymark_math::{Interval, Ray, Vec3};

/// Record of a ray-sphere intersection.
///
/// Transient: produced by [`Scene::intersect`] and consumed
/// immediately by the tracer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter where the intersection occurs
    pub t: f64,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit normal at the intersection
    pub normal: Vec3,
    /// Index of the hit sphere in the scene's list
    pub sphere_index: usize,
}

/// An ordered sphere list plus a single point light and ambient term.
///
/// Sphere order matters only as an intersection tie-break: when two
/// spheres produce exactly equal roots, the earlier index wins.
/// Constructed once before the render loop, read-only afterwards.
pub struct Scene {
    spheres: Vec<Sphere>,
    pub light_pos: Vec3,
    pub light_color: Vec3,
    pub ambient: f64,
}

impl Scene {
    /// Create an empty scene with the given light and ambient term.
    pub fn new(light_pos: Vec3, light_color: Vec3, ambient: f64) -> Self {
        Self {
            spheres: Vec::new(),
            light_pos,
            light_color,
            ambient,
        }
    }

    /// Append a sphere to the list.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// The spheres, in insertion order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Get the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene has no spheres.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Find the nearest hit strictly inside the depth window.
    ///
    /// Scans every sphere, keeping the strictly smallest root found so
    /// far, so exactly equal roots resolve to the earlier index.
    pub fn intersect(&self, ray: &Ray, window: Interval) -> Option<Hit> {
        let mut closest_so_far = window.max;
        let mut best: Option<(usize, f64)> = None;

        for (index, sphere) in self.spheres.iter().enumerate() {
            if let Some(t) = sphere.hit(ray, Interval::new(window.min, closest_so_far)) {
                closest_so_far = t;
                best = Some((index, t));
            }
        }

        best.map(|(sphere_index, t)| {
            let point = ray.at(t);
            Hit {
                t,
                point,
                normal: self.spheres[sphere_index].normal_at(point),
                sphere_index,
            }
        })
    }
}
