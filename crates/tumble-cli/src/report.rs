// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use anyhow::{Context, Result};
use comfy_table::Table;
use serde::Serialize;
use tumble_app_core::settings::{SceneKind, SimSettings};
use tumble_core::math::{Quat, Vec3};
use tumble_core::{hash_to_hex, RigidBody};

/// Final state of one body.
#[derive(Debug, Serialize)]
pub struct BodyReport {
    pub id: usize,
    pub radius: f32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    pub orientation: Quat,
}

impl BodyReport {
    fn new(id: usize, body: &RigidBody) -> Self {
        Self {
            id,
            radius: body.radius(),
            position: body.position(),
            velocity: body.linear_velocity(),
            angular_velocity: body.angular_velocity(),
            orientation: body.orientation(),
        }
    }
}

/// Outcome of a headless run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub scene: SceneKind,
    pub steps: u32,
    pub dt: f32,
    pub sphere_contacts: usize,
    pub static_contacts: usize,
    pub state_hash: String,
    pub bodies: Vec<BodyReport>,
}

fn fmt_vec(v: Vec3) -> String {
    let [x, y, z] = v.to_array();
    format!("({x:.3}, {y:.3}, {z:.3})")
}

impl RunReport {
    pub fn to_table(&self) -> String {
        let mut table = Table::new();
        table.set_header(vec!["body", "radius", "position", "velocity", "spin"]);
        for body in &self.bodies {
            table.add_row(vec![
                body.id.to_string(),
                format!("{:.2}", body.radius),
                fmt_vec(body.position),
                fmt_vec(body.velocity),
                fmt_vec(body.angular_velocity),
            ]);
        }
        format!(
            "scene: {}\nsteps: {} (dt {})\nsphere contacts: {}\nstatic contacts: {}\nstate hash: {}\n{table}",
            self.scene.as_str(),
            self.steps,
            self.dt,
            self.sphere_contacts,
            self.static_contacts,
            self.state_hash,
        )
    }
}

/// Builds the configured scene, steps it and summarises the result.
pub fn run(settings: &SimSettings) -> Result<RunReport> {
    let mut scene = settings
        .build_scene()
        .with_context(|| format!("building scene {}", settings.scene.as_str()))?;

    let mut sphere_contacts = 0;
    let mut static_contacts = 0;
    for _ in 0..settings.steps {
        let step = scene.world.step(settings.dt, &scene.ground);
        sphere_contacts += step.sphere_contacts;
        static_contacts += step.static_contacts;
    }

    let world = &scene.world;
    Ok(RunReport {
        scene: settings.scene,
        steps: settings.steps,
        dt: settings.dt,
        sphere_contacts,
        static_contacts,
        state_hash: hash_to_hex(&world.state_hash()),
        bodies: world
            .bodies()
            .iter()
            .enumerate()
            .map(|(id, body)| BodyReport::new(id, body))
            .collect(),
    })
}
