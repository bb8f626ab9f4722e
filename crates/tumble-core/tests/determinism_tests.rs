// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;

use tumble_core::demo::rain;
use tumble_core::math::Vec3;
use tumble_core::{BodyDesc, PhysicsConfig, RigidBody};

fn bits(v: Vec3) -> [u32; 3] {
    v.to_array().map(f32::to_bits)
}

proptest! {
    #[test]
    fn integration_is_bit_identical(
        pos in prop::array::uniform3(-1.0e3f32..1.0e3),
        vel in prop::array::uniform3(-50.0f32..50.0),
        spin in prop::array::uniform3(-5.0f32..5.0),
        force in prop::array::uniform3(-100.0f32..100.0),
        dt in 0.0f32..0.5,
    ) {
        let desc = BodyDesc::at(Vec3::from(pos))
            .with_velocity(Vec3::from(vel))
            .with_angular_velocity(Vec3::from(spin));
        let mut a = RigidBody::from_desc(&desc).unwrap();
        let mut b = RigidBody::from_desc(&desc).unwrap();
        for _ in 0..8 {
            a.add_force(Vec3::from(force));
            b.add_force(Vec3::from(force));
            a.add_force_at_point(&Vec3::new(1.0, 2.0, 3.0), Vec3::from(force));
            b.add_force_at_point(&Vec3::new(1.0, 2.0, 3.0), Vec3::from(force));
            a.integrate(dt);
            b.integrate(dt);
        }
        prop_assert_eq!(bits(a.position()), bits(b.position()));
        prop_assert_eq!(bits(a.linear_velocity()), bits(b.linear_velocity()));
        prop_assert_eq!(bits(a.angular_velocity()), bits(b.angular_velocity()));
        prop_assert_eq!(
            a.orientation().to_array().map(f32::to_bits),
            b.orientation().to_array().map(f32::to_bits)
        );
        prop_assert_eq!(a.force(), Vec3::ZERO);
        prop_assert_eq!(a.torque(), Vec3::ZERO);
    }
}

#[test]
fn replaying_a_scene_reproduces_the_hash() {
    let run = || {
        let mut scene = rain(PhysicsConfig::default(), 24, 7).unwrap();
        let contacts = scene.run(240, 1.0 / 60.0);
        (scene.world.state_hash(), contacts)
    };
    let (first, first_contacts) = run();
    let (second, second_contacts) = run();
    assert_eq!(first, second);
    assert_eq!(first_contacts, second_contacts);
    assert!(first_contacts > 0, "rain should hit the ground");
}

#[test]
fn hash_changes_when_state_changes() {
    let mut scene = rain(PhysicsConfig::default(), 4, 1).unwrap();
    let before = scene.world.state_hash();
    scene.world.step(1.0 / 60.0, &scene.ground);
    assert_ne!(before, scene.world.state_hash());
}
