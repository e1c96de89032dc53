//! Example: Load and inspect a JSON scene file.
//!
//! Run with: cargo run --example load_scene -- scenes/sphere_on_plane.json

use std::env;

use glint_core::{load_scene, Primitive};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_scene <path-to-scene-json>");
        println!("\nExample:");
        println!("  cargo run --example load_scene -- scenes/sphere_on_plane.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("\n=== Scene: {} ===", scene.name);
            println!("Primitives: {}", scene.primitive_count());
            println!("Lights: {}", scene.light_count());
            println!("Total triangles: {}", scene.total_triangle_count());

            println!("\n--- Primitives ---");
            for (i, primitive) in scene.primitives().iter().enumerate() {
                let detail = match primitive {
                    Primitive::Sphere(s) => format!(
                        "center ({:.2}, {:.2}, {:.2}), radius {:.2}",
                        s.center.x, s.center.y, s.center.z, s.radius
                    ),
                    Primitive::Plane(p) => format!(
                        "normal ({:.2}, {:.2}, {:.2}), offset {:.2}",
                        p.normal.x, p.normal.y, p.normal.z, p.offset
                    ),
                    Primitive::Mesh(m) => format!(
                        "{} vertices, {} triangles",
                        m.vertex_count(),
                        m.triangle_count()
                    ),
                };
                println!(
                    "  [{}] {} - {} (specularity {:.2})",
                    i,
                    primitive.kind(),
                    detail,
                    primitive.finish().specularity
                );
            }

            let camera = scene.camera();
            println!("\n--- Camera ---");
            println!(
                "  Eye: ({:.2}, {:.2}, {:.2}) looking at ({:.2}, {:.2}, {:.2})",
                camera.position.x,
                camera.position.y,
                camera.position.z,
                camera.target.x,
                camera.target.y,
                camera.target.z
            );
            println!("  Screen: {}x{}", camera.screen_width, camera.screen_height);
        }
        Err(e) => {
            eprintln!("Error loading scene file: {}", e);
        }
    }
}
