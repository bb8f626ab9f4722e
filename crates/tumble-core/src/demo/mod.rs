// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Deterministic demo scenes shared by the CLI, tests and benches.

mod head_on;
mod pendulum;
mod rain;

pub use head_on::head_on;
pub use pendulum::pendulum_chain;
pub use rain::{rain, RAIN_EXTENT};

use crate::geom::TriangleSoup;
use crate::world::World;

/// A populated world plus the static geometry it should be stepped against.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// The bodies and springs.
    pub world: World,
    /// Static geometry; empty for scenes without a ground.
    pub ground: TriangleSoup,
}

impl Scene {
    /// Steps the scene `steps` times with a fixed `dt` and returns the total
    /// number of contacts seen.
    pub fn run(&mut self, steps: u32, dt: f32) -> usize {
        (0..steps)
            .map(|_| self.world.step(dt, &self.ground).events.len())
            .sum()
    }
}
