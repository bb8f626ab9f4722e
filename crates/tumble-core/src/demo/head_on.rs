// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::body::BodyDesc;
use crate::config::PhysicsConfig;
use crate::demo::Scene;
use crate::error::PhysicsError;
use crate::math::Vec3;
use crate::world::World;

/// Two unit spheres on the X axis: body 0 at the origin moving at `+5`
/// toward body 1 resting at `x = 3`.
///
/// # Errors
/// [`PhysicsError::CapacityExceeded`] if `config.max_bodies < 2`.
pub fn head_on(config: PhysicsConfig) -> Result<Scene, PhysicsError> {
    let mut world = World::new(config);
    let ball = |x: f32| {
        BodyDesc::at(Vec3::new(x, 0.0, 0.0))
            .with_radius(1.0)
            .with_mass(1.0)
            .with_static_collisions(false)
    };
    world.create_body(ball(0.0).with_velocity(Vec3::new(5.0, 0.0, 0.0)))?;
    world.create_body(ball(3.0))?;
    Ok(Scene {
        world,
        ..Scene::default()
    })
}
