//! Simple raytracer example.
//!
//! Renders the showcase scene (mirror floor, color cube, green ball) with
//! both shading modes and saves each to PPM format.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use glint_core::demo::showcase_scene;
use glint_renderer::{render, ImageBuffer, RenderConfig, ShadingMode};

fn main() {
    env_logger::init();

    println!("Glint Raytracer - Simple Example");
    println!("================================");

    let (width, height) = (1280, 720);
    let scene = match showcase_scene(width, height) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Failed to build scene: {}", e);
            return;
        }
    };
    println!(
        "Scene '{}': {} primitives, {} triangles, {} lights",
        scene.name,
        scene.primitive_count(),
        scene.total_triangle_count(),
        scene.light_count()
    );

    for (mode, filename) in [
        (ShadingMode::Reflective, "output_reflective.ppm"),
        (ShadingMode::BlinnPhong, "output_blinn_phong.ppm"),
    ] {
        let config = RenderConfig::default().with_shading_mode(mode);

        let start = std::time::Instant::now();
        let image = match render(&scene, width, height, &config) {
            Ok(image) => image,
            Err(e) => {
                eprintln!("Render failed: {}", e);
                return;
            }
        };
        println!("{:?}: rendered in {:?}", mode, start.elapsed());

        match save_ppm(&image, filename) {
            Ok(()) => println!("Saved to {}", filename),
            Err(e) => eprintln!("Failed to save {}: {}", filename, e),
        }
    }
}

/// Write a binary PPM (alpha dropped).
fn save_ppm(image: &ImageBuffer, filename: &str) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write!(file, "P6\n{} {}\n255\n", image.width, image.height)?;
    for [r, g, b, _] in &image.pixels {
        file.write_all(&[*r, *g, *b])?;
    }
    file.flush()
}
