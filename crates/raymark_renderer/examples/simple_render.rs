//! Simple render example.
//!
//! Renders a small sphere scene and saves it as PPM. The renderer
//! itself only produces the flat RGB buffer; encoding lives here, in
//! the consumer.

use raymark_renderer::{render, Camera, PixelBuffer, Sampler, Scene, Sphere, Vec3};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    println!("Raymark - Simple Render Example");
    println!("===============================");

    let scene = build_scene();

    let mut camera = Camera::new()
        .with_resolution(320, 180)
        .with_position(
            Vec3::new(0.0, 3.0, -8.0), // look_from
            Vec3::new(0.0, 1.0, 0.0),  // look_at
            Vec3::Y,                   // vup
        )
        .with_vfov(60.0);
    camera.initialize();

    println!(
        "Rendering {}x{}...",
        camera.image_width, camera.image_height
    );

    let mut sampler = Sampler::new(1);
    let (image, stats) = render(&scene, &camera, &mut sampler);

    println!("Rendered in {:?}", stats.elapsed);
    println!(
        "{} primary rays, {:.0} rays/sec",
        stats.primary_rays, stats.rays_per_sec
    );

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new(Vec3::new(5.0, 10.0, -5.0), Vec3::ONE, 0.1);

    // Ground-plane surrogate
    scene.add(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        Vec3::splat(0.5),
        1000.0,
        0.1,
    ));

    // A mirror-ish centerpiece and two matte companions
    scene.add(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.8, 0.2, 0.2),
        1.0,
        0.5,
    ));
    scene.add(Sphere::new(
        Vec3::new(-2.5, 1.0, 0.0),
        Vec3::new(0.2, 0.8, 0.2),
        1.0,
        0.3,
    ));
    scene.add(Sphere::new(
        Vec3::new(2.5, 1.0, 0.0),
        Vec3::new(0.2, 0.2, 0.8),
        1.0,
        0.3,
    ));

    scene
}

/// Write the buffer as binary PPM (P6).
fn save_ppm(image: &PixelBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;
    writer.write_all(image.as_bytes())?;
    writer.flush()
}
