// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::body::BodyDesc;
use crate::config::PhysicsConfig;
use crate::demo::Scene;
use crate::error::PhysicsError;
use crate::math::Vec3;
use crate::spring::SpringParams;
use crate::world::World;

const LINK_RADIUS: f32 = 1.0;
const LINK_SPACING: f32 = 3.0;
const ANCHOR_HEIGHT: f32 = 2.0;

/// A horizontal chain of `links + 1` spheres.
///
/// The head hangs from a fixed anchor just above its attachment point through
/// a [`crate::spring::SimpleSpring`]; each further link is joined to the
/// previous one by a [`crate::spring::Spring`] between facing surface points.
///
/// # Errors
/// [`PhysicsError::CapacityExceeded`] if the chain does not fit
/// `config.max_bodies`.
pub fn pendulum_chain(config: PhysicsConfig, links: usize) -> Result<Scene, PhysicsError> {
    let mut world = World::new(config);
    let link = |x: f32| {
        BodyDesc::at(Vec3::new(x, 0.0, 0.0))
            .with_radius(LINK_RADIUS)
            .with_static_collisions(false)
    };

    let head = world.create_body(link(0.0))?;
    let anchor = Vec3::new(LINK_RADIUS, ANCHOR_HEIGHT, 0.0);
    world.add_simple_spring(head, anchor, SpringParams::anchored())?;

    let mut previous = head;
    let mut x = 0.0;
    for _ in 0..links {
        x += LINK_SPACING;
        let next = world.create_body(link(x))?;
        world.add_spring(
            (previous, Vec3::new(LINK_RADIUS, 0.0, 0.0)),
            (next, Vec3::new(-LINK_RADIUS, 0.0, 0.0)),
            SpringParams::linked(),
        )?;
        previous = next;
    }

    Ok(Scene {
        world,
        ..Scene::default()
    })
}
