// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted simulation settings shared by Tumble tools.

use serde::{Deserialize, Serialize};
use tumble_core::demo::{self, Scene};
use tumble_core::{PhysicsConfig, PhysicsError};

/// Built-in demo scene to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneKind {
    /// Two spheres colliding head-on.
    HeadOn,
    /// A spring-linked chain hanging from an anchor.
    Pendulum,
    /// Random spheres dropped onto a ground quad.
    #[default]
    Rain,
}

impl SceneKind {
    /// Stable kebab-case name, as used on the command line and in JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HeadOn => "head-on",
            Self::Pendulum => "pendulum",
            Self::Rain => "rain",
        }
    }
}

/// Everything needed to reproduce a headless run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    /// World tunables.
    pub physics: PhysicsConfig,
    /// Scene to build.
    pub scene: SceneKind,
    /// Number of steps to run.
    pub steps: u32,
    /// Fixed time step in seconds.
    pub dt: f32,
    /// Body count for scenes that take one (chain links for the pendulum).
    pub bodies: usize,
    /// Seed for scenes with random placement.
    pub seed: u64,
}

impl SimSettings {
    /// Config key the settings are stored under.
    pub const KEY: &'static str = "sim";

    /// Builds the configured demo scene.
    pub fn build_scene(&self) -> Result<Scene, PhysicsError> {
        let physics = self.physics.clone();
        match self.scene {
            SceneKind::HeadOn => demo::head_on(physics),
            SceneKind::Pendulum => demo::pendulum_chain(physics, self.bodies),
            SceneKind::Rain => demo::rain(physics, self.bodies, self.seed),
        }
    }
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            scene: SceneKind::default(),
            steps: 600,
            dt: 1.0 / 60.0,
            bodies: 32,
            seed: 1,
        }
    }
}
