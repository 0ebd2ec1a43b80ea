//! Recursive radiance computation.
//!
//! Combines intersection, soft shadow sampling, diffuse/specular
//! shading, and reflection into a single recursive function. The
//! recursion is depth-bounded, so a trace terminates in at most
//! [`MAX_DEPTH`] calls.

use crate::{Sampler, Scene};
use raymark_math::{Interval, Ray, Vec3};

/// Maximum recursion depth for reflection rays.
pub const MAX_DEPTH: u32 = 5;
/// Occlusion tests per soft-shadow estimate.
pub const SHADOW_SAMPLES: u32 = 4;

/// Epsilon offset avoiding self-intersection on secondary rays.
const T_MIN: f64 = 1e-3;
/// Effectively infinite far bound.
const T_MAX: f64 = 1e20;

const SPECULAR_EXPONENT: i32 = 32;
const SPECULAR_WEIGHT: f64 = 0.3;

/// Sky gradient endpoints: horizon white, zenith blue.
const HORIZON: Vec3 = Vec3::new(1.0, 1.0, 1.0);
const ZENITH: Vec3 = Vec3::new(0.5, 0.7, 1.0);

/// Compute the radiance carried back along `ray`.
///
/// Returns a color in approximately [0, 1]^3; it is not clamped here.
/// Clamping to displayable range happens at pixel write time.
pub fn trace(scene: &Scene, ray: &Ray, depth: u32, sampler: &mut Sampler) -> Vec3 {
    if depth >= MAX_DEPTH {
        return Vec3::ZERO;
    }

    let Some(hit) = scene.intersect(ray, Interval::new(T_MIN, T_MAX)) else {
        return sky_gradient(ray);
    };

    let sphere = &scene.spheres()[hit.sphere_index];
    let shadow = shadow_factor(scene, hit.point, sampler);

    // Diffuse
    let to_light = (scene.light_pos - hit.point).normalize();
    let diffuse = hit.normal.dot(to_light).max(0.0);
    let mut color = sphere.color * (scene.ambient + diffuse * shadow);

    // Phong specular: the light direction mirrored about the normal
    let reflect_dir = reflect(to_light, hit.normal);
    let specular = ray
        .direction
        .normalize()
        .dot(reflect_dir.normalize())
        .max(0.0)
        .powi(SPECULAR_EXPONENT);
    color += scene.light_color * specular * shadow * SPECULAR_WEIGHT;

    // Reflection: blend direct shading with the recursively traced color
    if sphere.reflectivity > 0.0 {
        let reflected_dir = reflect(ray.direction, hit.normal).normalize();
        let reflect_ray = Ray::new(hit.point, reflected_dir);
        let reflected = trace(scene, &reflect_ray, depth + 1, sampler);
        color = color * (1.0 - sphere.reflectivity) + reflected * sphere.reflectivity;
    }

    color
}

/// Sky background: linear blend from horizon to zenith by the
/// vertical component of the normalized ray direction.
fn sky_gradient(ray: &Ray) -> Vec3 {
    let unit_direction = ray.direction.normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    HORIZON * (1.0 - t) + ZENITH * t
}

/// Fraction of jittered light samples visible from `point`, in [0, 1].
///
/// Each sample perturbs the light position per axis and bounds its
/// occlusion test by the distance to its own jittered position, so the
/// upper bound varies per sample. That per-sample distance is part of
/// the shadow softness behavior.
fn shadow_factor(scene: &Scene, point: Vec3, sampler: &mut Sampler) -> f64 {
    let mut lit = 0.0;
    for _ in 0..SHADOW_SAMPLES {
        let jitter = Vec3::new(
            sampler.next_f64() * 0.5 - 0.25,
            sampler.next_f64() * 0.5 - 0.25,
            sampler.next_f64() * 0.5 - 0.25,
        );
        let to_light = (scene.light_pos + jitter) - point;
        let light_dist = to_light.length();
        let shadow_ray = Ray::new(point, to_light.normalize());

        if scene
            .intersect(&shadow_ray, Interval::new(T_MIN, light_dist))
            .is_none()
        {
            lit += 1.0;
        }
    }
    lit / SHADOW_SAMPLES as f64
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
