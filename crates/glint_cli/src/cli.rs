use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glint_math::{Camera, Vec3};
use glint_renderer::{RenderConfig, ShadingMode};

/// Built-in scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoScene {
    /// Mirror floor, color cube and a small green ball
    Showcase,
    /// Green ball resting on a gray floor
    SphereOnPlane,
}

/// Shading mode as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shading {
    Reflective,
    BlinnPhong,
}

impl From<Shading> for ShadingMode {
    fn from(shading: Shading) -> Self {
        match shading {
            Shading::Reflective => ShadingMode::Reflective,
            Shading::BlinnPhong => ShadingMode::BlinnPhong,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "Render a scene with the Glint CPU raytracer")]
pub struct Args {
    /// JSON scene file; overrides --demo
    #[arg(long)]
    pub scene: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "showcase", help = "Built-in scene to render")]
    pub demo: DemoScene,

    #[arg(long, default_value = "1280", help = "Image width in pixels")]
    pub width: u32,

    #[arg(long, default_value = "720", help = "Image height in pixels")]
    pub height: u32,

    /// JSON render config; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Bounce budget for primary rays")]
    pub max_bounces: Option<u32>,

    #[arg(long, value_enum, help = "How specular surfaces are shaded")]
    pub shading: Option<Shading>,

    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, help = "Camera position as x,y,z")]
    pub eye: Option<Vec3>,

    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, help = "Camera target as x,y,z")]
    pub look_at: Option<Vec3>,

    /// Orbit around the target by latitude,longitude in degrees
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    pub orbit: Option<(f32, f32)>,

    #[arg(long, help = "Zoom toward the target by this factor (>1 moves closer)")]
    pub zoom: Option<f32>,

    #[arg(long, help = "Render buckets in parallel on all cores")]
    pub parallel: bool,

    #[arg(short, long, default_value = "output.png", help = "Output PNG path")]
    pub output: PathBuf,
}

impl Args {
    /// Config file (if any) with command-line overrides applied.
    pub fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RenderConfig::default(),
        };

        if let Some(max_bounces) = self.max_bounces {
            config.max_bounces = max_bounces;
        }
        if let Some(shading) = self.shading {
            config.shading_mode = shading.into();
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply eye, target, orbit and zoom flags in that order.
    pub fn apply_camera(&self, camera: &mut Camera) {
        camera.set_screen_size(self.width, self.height);

        if let Some(eye) = self.eye {
            camera.move_to(eye);
        }
        if let Some(target) = self.look_at {
            camera.look_at(target);
        }
        if let Some((lat, lng)) = self.orbit {
            camera.orbit_by(lat.to_radians(), lng.to_radians(), 0.0);
        }
        if let Some(factor) = self.zoom {
            camera.zoom_by(factor);
        }
    }
}

fn load_config(path: &Path) -> Result<RenderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f32; N], String> {
    let values = s
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("'{s}': {e}"))?;
    values
        .try_into()
        .map_err(|v: Vec<f32>| format!("'{s}': expected {N} comma-separated numbers, got {}", v.len()))
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    parse_floats::<3>(s).map(Vec3::from_array)
}

fn parse_pair(s: &str) -> Result<(f32, f32), String> {
    parse_floats::<2>(s).map(|[a, b]| (a, b))
}
