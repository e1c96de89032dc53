use anyhow::{Context, Result};
use clap::Parser;
use glint_core::demo::{showcase_scene, sphere_on_plane_scene};
use glint_core::{load_scene, Scene};
use glint_renderer::{render, render_buckets, ImageBuffer, RenderSession};

mod cli;

use cli::{Args, DemoScene};

fn build_scene(args: &Args) -> Result<Scene> {
    let mut scene = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => match args.demo {
            DemoScene::Showcase => showcase_scene(args.width, args.height)?,
            DemoScene::SphereOnPlane => sphere_on_plane_scene(args.width, args.height)?,
        },
    };
    args.apply_camera(scene.camera_mut());
    Ok(scene)
}

fn save_png(image: &ImageBuffer, args: &Args) -> Result<()> {
    let png = image::RgbaImage::from_raw(image.width, image.height, image.to_rgba())
        .context("Pixel buffer does not match image dimensions")?;
    png.save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = args.render_config()?;
    let scene = build_scene(&args)?;

    log::info!(
        "Scene '{}': {} primitives ({} triangles), {} lights",
        scene.name,
        scene.primitive_count(),
        scene.total_triangle_count(),
        scene.light_count()
    );

    let image = if args.parallel {
        let session = RenderSession::new();
        let ticket = session.begin();
        render_buckets(&scene, args.width, args.height, &config, &ticket)?
            .context("Render pass was superseded")?
    } else {
        render(&scene, args.width, args.height, &config)?
    };

    save_png(&image, &args)?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
