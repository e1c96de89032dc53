//! JSON scene description loading.
//!
//! A scene file holds a camera, a list of lights and a list of primitives
//! tagged by `"type"`:
//!
//! ```json
//! {
//!   "camera": { "position": [0, 0.75, -2], "screen_width": 1280, "screen_height": 720 },
//!   "lights": [ { "position": [0, 2, -2], "color": [1, 1, 1, 1] } ],
//!   "primitives": [
//!     { "type": "sphere", "position": [0, 0, 0], "radius": 1, "color": [0, 1, 0, 1], "specularity": 0.3 },
//!     { "type": "plane", "normal": [0, 1, 0], "offset": -1, "color": [0.3, 0.3, 0.3, 1] }
//!   ]
//! }
//! ```
//!
//! Kinds are checked while loading, so an unknown `"type"` fails the whole
//! file instead of turning into an object that is silently never hit.

use std::path::Path;

use glint_math::{Camera, Color4, Vec3};
use serde::Deserialize;
use serde_json::Value;

use crate::light::Light;
use crate::mesh::Mesh;
use crate::primitive::{Finish, Plane, Primitive, Sphere};
use crate::scene::{Scene, SceneError, SceneResult};

#[derive(Deserialize)]
struct SceneDesc {
    #[serde(default)]
    name: Option<String>,
    camera: Camera,
    #[serde(default)]
    lights: Vec<Light>,
    #[serde(default)]
    primitives: Vec<Value>,
}

#[derive(Deserialize)]
struct SphereDesc {
    position: Vec3,
    radius: f32,
    color: Color4,
    #[serde(flatten)]
    finish: Finish,
}

#[derive(Deserialize)]
struct PlaneDesc {
    normal: Vec3,
    offset: f32,
    color: Color4,
    #[serde(flatten)]
    finish: Finish,
}

#[derive(Deserialize)]
struct MeshDesc {
    positions: Vec<Vec3>,
    colors: Vec<Color4>,
    triangles: Vec<[u32; 3]>,
    #[serde(flatten)]
    finish: Finish,
}

/// Load a JSON scene file.
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<Scene> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&text)?;
    if scene.name.is_empty() {
        if let Some(stem) = path.file_stem() {
            scene.name = stem.to_string_lossy().into_owned();
        }
    }
    Ok(scene)
}

/// Load a scene from JSON text.
pub fn load_scene_from_str(text: &str) -> SceneResult<Scene> {
    let desc: SceneDesc = serde_json::from_str(text)?;

    let mut scene = Scene::new(desc.name.unwrap_or_default(), desc.camera);
    for light in desc.lights {
        scene.add_light(light);
    }
    for value in desc.primitives {
        scene.add(parse_primitive(value)?)?;
    }

    log::info!(
        "Loaded scene {:?}: {} primitives ({} triangles), {} lights",
        scene.name,
        scene.primitive_count(),
        scene.total_triangle_count(),
        scene.light_count()
    );
    Ok(scene)
}

fn parse_primitive(value: Value) -> SceneResult<Primitive> {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();

    let primitive = match kind.as_str() {
        "sphere" => {
            let d: SphereDesc = serde_json::from_value(value)?;
            Sphere::new(d.position, d.radius, d.color)
                .with_finish(d.finish)
                .into()
        }
        "plane" => {
            let d: PlaneDesc = serde_json::from_value(value)?;
            Plane::new(d.normal, d.offset, d.color)
                .with_finish(d.finish)
                .into()
        }
        "mesh" => {
            let d: MeshDesc = serde_json::from_value(value)?;
            Mesh::new(d.positions, d.colors, d.triangles)?
                .with_finish(d.finish)
                .into()
        }
        _ => return Err(SceneError::UnknownPrimitiveKind(kind)),
    };
    Ok(primitive)
}
