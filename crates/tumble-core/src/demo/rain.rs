// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::body::BodyDesc;
use crate::config::PhysicsConfig;
use crate::demo::Scene;
use crate::error::PhysicsError;
use crate::geom::TriangleSoup;
use crate::math::{Prng, Vec3};
use crate::world::World;

/// Side length of the square ground the rain scene drops onto.
pub const RAIN_EXTENT: f32 = 100.0;

/// `count` spheres dropped from random heights over a square ground at
/// `y = 0`, spanning `[0, RAIN_EXTENT]` on X and Z.
///
/// Placement comes from a [`Prng`] seeded with `seed`, so equal arguments
/// build identical scenes.
///
/// # Errors
/// [`PhysicsError::CapacityExceeded`] if `count` exceeds
/// `config.max_bodies`.
pub fn rain(config: PhysicsConfig, count: usize, seed: u64) -> Result<Scene, PhysicsError> {
    let mut world = World::new(config);
    let mut rng = Prng::from_seed_u64(seed);
    let margin = RAIN_EXTENT * 0.1;
    for _ in 0..count {
        let position = Vec3::new(
            rng.next_range(margin, RAIN_EXTENT - margin),
            rng.next_range(20.0, 80.0),
            rng.next_range(margin, RAIN_EXTENT - margin),
        );
        let radius = rng.next_range(1.0, 3.0);
        world.create_body(BodyDesc::at(position).with_radius(radius))?;
    }

    let mut ground = TriangleSoup::new();
    ground.push_quad(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, RAIN_EXTENT),
        Vec3::new(RAIN_EXTENT, 0.0, RAIN_EXTENT),
        Vec3::new(RAIN_EXTENT, 0.0, 0.0),
    );
    Ok(Scene { world, ground })
}
