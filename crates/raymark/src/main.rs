use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use raymark_math::Vec3;
use raymark_renderer::{render, Camera, Sampler, Scene, Sphere};

/// Recursive ray tracing benchmark: sphere scene with reflections and
/// soft shadows.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Seed for the shadow jitter sequence
    #[arg(long, default_value_t = 1)]
    seed: u32,
}

/// The compiled-in benchmark scene: a giant ground sphere, six feature
/// spheres, and a 5x4 grid of small ones.
fn build_scene() -> Scene {
    let mut scene = Scene::new(Vec3::new(5.0, 10.0, -5.0), Vec3::ONE, 0.1);

    // ground
    scene.add(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        Vec3::splat(0.5),
        1000.0,
        0.1,
    ));
    // center
    scene.add(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.8, 0.2, 0.2),
        1.0,
        0.5,
    ));
    // left
    scene.add(Sphere::new(
        Vec3::new(-2.5, 1.0, 0.0),
        Vec3::new(0.2, 0.8, 0.2),
        1.0,
        0.3,
    ));
    // right
    scene.add(Sphere::new(
        Vec3::new(2.5, 1.0, 0.0),
        Vec3::new(0.2, 0.2, 0.8),
        1.0,
        0.3,
    ));
    // small front
    scene.add(Sphere::new(
        Vec3::new(0.0, 0.5, -2.0),
        Vec3::new(0.8, 0.8, 0.2),
        0.5,
        0.7,
    ));
    // small back-left
    scene.add(Sphere::new(
        Vec3::new(-1.2, 0.5, 2.0),
        Vec3::new(0.8, 0.2, 0.8),
        0.5,
        0.2,
    ));
    // small back-right
    scene.add(Sphere::new(
        Vec3::new(1.2, 0.5, 2.0),
        Vec3::new(0.2, 0.8, 0.8),
        0.5,
        0.2,
    ));

    // Grid of small spheres behind the feature row
    for i in 0..20 {
        let x = (i % 5) as f64 * 2.0 - 4.0 + i as f64 * 0.1;
        let z = (i / 5) as f64 * 2.0 - 2.0;
        scene.add(Sphere::new(
            Vec3::new(x, 0.3, z + 4.0),
            Vec3::new(0.3 + i as f64 * 0.03, 0.5, 0.7 - i as f64 * 0.02),
            0.3,
            0.1,
        ));
    }

    scene
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!(
        "raymark {}x{}, seed {}",
        args.width, args.height, args.seed
    );

    let scene = build_scene();
    info!("scene: {} spheres", scene.len());

    let mut camera = Camera::new()
        .with_resolution(args.width, args.height)
        .with_position(
            Vec3::new(0.0, 3.0, -8.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::Y,
        )
        .with_vfov(60.0);
    camera.initialize();

    let mut sampler = Sampler::new(args.seed);
    let (image, stats) = render(&scene, &camera, &mut sampler);

    info!("total rays: {}", stats.primary_rays);
    info!("rays/sec: {:.0}", stats.rays_per_sec);
    info!("time: {:.3}s", stats.elapsed.as_secs_f64());
    debug!("pixel buffer: {} bytes", image.as_bytes().len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_scene_shape() {
        let scene = build_scene();
        // ground + 6 feature spheres + 20 grid spheres
        assert_eq!(scene.len(), 27);

        let ground = &scene.spheres()[0];
        assert_eq!(ground.radius, 1000.0);
        assert!(scene.spheres().iter().all(|s| s.radius > 0.0));
        assert!(scene
            .spheres()
            .iter()
            .all(|s| (0.0..=1.0).contains(&s.reflectivity)));
    }
}
