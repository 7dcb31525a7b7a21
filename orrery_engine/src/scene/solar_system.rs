/// The hand-authored solar system.
///
/// ```text
/// sky (x100, stars)
/// └── pivot (tiny spinning sun at the origin)
///     ├── sun        ── mercury, venus, earth ── moon, mars, jupiter, saturn,
///     │                 uranus, neptune
///     └── sun_two    ── pandora, coruscant, diana, anubis, loki
/// ```
///
/// Planets of `sun` are lit by `sun`; the bodies of `sun_two` are tagged
/// Primary and lit by `sun_two`.

use glam::Vec3;
use crate::error::Result;
use crate::engine_bail;
use crate::resource::MaterialDesc;
use super::builder::{BodyDesc, SceneBuilder};
use super::node::{LightRole, NodeKey};
use super::scene_graph::SceneGraph;
use super::orbit::{Orbit, OrbitalParams, Propagation};

/// Name of the shared sphere geometry used by every body
pub const SPHERE_GEOMETRY: &str = "sphere";

/// Body whose position is light 0
pub const PRIMARY_LIGHT_ANCHOR: &str = "sun_two";

/// Body whose position is light 1
pub const SECONDARY_LIGHT_ANCHOR: &str = "sun";

fn orbit(speed: f32, radius: f32, scale: f32) -> Orbit {
    Orbit::new(OrbitalParams::new(speed, radius, scale), Propagation::Fixed)
}

fn planet(name: &str, parent: &str, orbit: Orbit, ks: f32) -> BodyDesc {
    BodyDesc::new(name, SPHERE_GEOMETRY, MaterialDesc::lit(name, 0.2, 0.8, ks), orbit)
        .with_parent(parent)
        .with_light_role(LightRole::Secondary)
}

fn outer_body(name: &str, orbit: Orbit) -> BodyDesc {
    BodyDesc::new(name, SPHERE_GEOMETRY, MaterialDesc::lit(name, 0.2, 0.8, 0.5), orbit)
        .with_parent("sun_two")
        .with_light_role(LightRole::Primary)
}

/// Body table of the solar system, in draw order
pub fn solar_system() -> SceneBuilder {
    let sun_orbit = |radius: f32| {
        Orbit::new(OrbitalParams::new(0.1, radius, 2.0), Propagation::Orbit)
    };

    let mut earth = planet("earth", "sun",
        Orbit::new(OrbitalParams::new(0.9, -3.0, 0.3), Propagation::Orbit), 0.0);
    earth.material.kd = 0.9;

    SceneBuilder::new()
        .body(BodyDesc::new("sky", SPHERE_GEOMETRY, MaterialDesc::lit("stars", 1.0, 0.0, 0.0),
                Orbit::new(OrbitalParams::stationary(100.0), Propagation::Fixed))
            .with_light_role(LightRole::Secondary))
        .body(BodyDesc::new("pivot", SPHERE_GEOMETRY, MaterialDesc::emissive("sun"),
                orbit(1.0, 0.0, 0.001))
            .with_parent("sky"))
        .body(BodyDesc::new("sun", SPHERE_GEOMETRY, MaterialDesc::emissive("sun"), sun_orbit(-10.0))
            .with_parent("pivot"))
        .body(planet("mercury", "sun", orbit(2.0, -1.5, 0.1), 0.0))
        .body(planet("venus", "sun", orbit(1.0, -2.0, 0.25), 0.0))
        .body(earth)
        .body(planet("moon", "earth", orbit(3.0, -0.3, 0.12), 0.5))
        .body(planet("mars", "sun", orbit(0.8, -4.0, 0.27), 0.0))
        .body(planet("jupiter", "sun", orbit(0.6, -5.0, 0.4), 0.4))
        .body(planet("saturn", "sun", orbit(0.5, -6.0, 0.38), 0.3))
        .body(planet("uranus", "sun", orbit(0.4, -7.0, 0.3), 0.1))
        .body(planet("neptune", "sun", orbit(0.3, -8.0, 0.3), 0.0))
        .body(BodyDesc::new("sun_two", SPHERE_GEOMETRY, MaterialDesc::emissive("death_star"),
                sun_orbit(10.0))
            .with_parent("pivot"))
        .body(outer_body("pandora", orbit(0.7, 8.0, 0.01)))
        .body(outer_body("coruscant", Orbit::new(
            OrbitalParams::new(0.3, 3.0, 1.0).with_scale(Vec3::new(0.4, 0.4, 0.42)),
            Propagation::Fixed)))
        .body(outer_body("diana", Orbit::new(
            OrbitalParams::new(0.4, 6.0, 0.2).with_axis(Vec3::new(0.2, 1.0, 0.0)),
            Propagation::Fixed)))
        .body(outer_body("anubis", Orbit::new(
            OrbitalParams::new(0.6, 9.0, 0.39).with_axis(Vec3::new(0.4, 1.0, 0.0)),
            Propagation::Fixed)))
        .body(outer_body("loki", orbit(0.3, 7.0, 0.42)))
}

/// Distinct texture names the solar system needs, in first-use order
pub fn texture_names() -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for body in solar_system().bodies() {
        if let Some(texture) = &body.material.texture {
            if !names.contains(texture) {
                names.push(texture.clone());
            }
        }
    }
    names
}

/// Keys of the primary and secondary light anchors of a built solar system
pub fn light_anchors(graph: &SceneGraph) -> Result<[NodeKey; 2]> {
    match (graph.find(PRIMARY_LIGHT_ANCHOR), graph.find(SECONDARY_LIGHT_ANCHOR)) {
        (Some(primary), Some(secondary)) => Ok([primary, secondary]),
        _ => engine_bail!(@InvalidScene, "orrery::SolarSystem",
            "Scene lacks '{}' or '{}'", PRIMARY_LIGHT_ANCHOR, SECONDARY_LIGHT_ANCHOR),
    }
}

#[cfg(test)]
#[path = "solar_system_tests.rs"]
mod tests;
