// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Damped Hookean springs between bodies or from a body to a fixed point.
//!
//! Springs hold [`BodyId`] handles, never the bodies themselves. The rest
//! length is measured once, at construction, from the bodies' current
//! attachment points, so a freshly created spring exerts no force.

use crate::body::{BodyId, RigidBody};
use crate::error::PhysicsError;
use crate::math::Vec3;
use crate::world::World;

/// Share of the spring force each end receives.
const FORCE_SHARE: f32 = 0.5;

/// Stiffness and damping of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringParams {
    /// Hooke constant `ks`.
    pub stiffness: f32,
    /// Velocity damping `kd`.
    pub damping: f32,
}

impl SpringParams {
    /// Body-to-body defaults (`ks = 30`, `kd = 10`).
    pub const fn linked() -> Self {
        Self {
            stiffness: 30.0,
            damping: 10.0,
        }
    }

    /// Body-to-anchor defaults (`ks = 0.5`, `kd = 0.3`).
    pub const fn anchored() -> Self {
        Self {
            stiffness: 0.5,
            damping: 0.3,
        }
    }

    /// `F = dir · (err · ks − dir · dv · kd)`
    fn force(&self, dir: Vec3, err: f32, relative_velocity: Vec3) -> Vec3 {
        dir * (err * self.stiffness - dir.dot(&relative_velocity) * self.damping)
    }
}

/// Spring joining attachment points on two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    a: BodyId,
    b: BodyId,
    local_a: Vec3,
    local_b: Vec3,
    rest_length: f32,
    params: SpringParams,
}

impl Spring {
    /// Creates a spring between body-local offsets `local_a` on `a` and
    /// `local_b` on `b`.
    ///
    /// # Errors
    /// [`PhysicsError::UnknownBody`] if either handle is not registered in
    /// `world`, [`PhysicsError::SameBody`] if `a == b`.
    pub fn new(
        world: &World,
        (a, local_a): (BodyId, Vec3),
        (b, local_b): (BodyId, Vec3),
        params: SpringParams,
    ) -> Result<Self, PhysicsError> {
        if a == b {
            return Err(PhysicsError::SameBody(a));
        }
        let body_a = world.body(a).ok_or(PhysicsError::UnknownBody(a))?;
        let body_b = world.body(b).ok_or(PhysicsError::UnknownBody(b))?;
        let rest_length = (body_b.world_point(&local_b) - body_a.world_point(&local_a)).length();
        Ok(Self {
            a,
            b,
            local_a,
            local_b,
            rest_length,
            params,
        })
    }

    /// The two bodies, in `(a, b)` order.
    pub fn bodies(&self) -> (BodyId, BodyId) {
        (self.a, self.b)
    }

    /// Length at which the spring exerts no force.
    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    /// Stiffness and damping.
    pub fn params(&self) -> SpringParams {
        self.params
    }

    /// Full spring force on body `a` (body `b` sees the negation) given the
    /// current body states. Each end receives half of it when applied.
    ///
    /// # Errors
    /// [`PhysicsError::UnknownBody`] if a handle is not registered in `world`.
    pub fn force(&self, world: &World) -> Result<Vec3, PhysicsError> {
        let body_a = world.body(self.a).ok_or(PhysicsError::UnknownBody(self.a))?;
        let body_b = world.body(self.b).ok_or(PhysicsError::UnknownBody(self.b))?;
        Ok(self.evaluate(body_a, body_b).2)
    }

    /// Attachment points and force for the given pair of body states.
    fn evaluate(&self, a: &RigidBody, b: &RigidBody) -> (Vec3, Vec3, Vec3) {
        let pa = a.world_point(&self.local_a);
        let pb = b.world_point(&self.local_b);
        let delta = pb - pa;
        let err = delta.length() - self.rest_length;
        let force = self.params.force(
            delta.normalize(),
            err,
            a.linear_velocity() - b.linear_velocity(),
        );
        (pa, pb, force)
    }

    pub(crate) fn apply_to(&self, bodies: &mut [RigidBody]) -> Result<(), PhysicsError> {
        let (a, b) = crate::world::pair_mut(bodies, self.a, self.b)?;
        let (pa, pb, force) = self.evaluate(a, b);
        a.add_force_at_point(&pa, force * FORCE_SHARE);
        b.add_force_at_point(&pb, -force * FORCE_SHARE);
        Ok(())
    }

    /// Adds this spring's forces to both bodies' accumulators.
    ///
    /// # Errors
    /// [`PhysicsError::UnknownBody`] if a handle is not registered in `world`.
    pub fn apply(&self, world: &mut World) -> Result<(), PhysicsError> {
        self.apply_to(world.bodies_mut())
    }
}

/// Spring from a body to a fixed world-space anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleSpring {
    body: BodyId,
    local: Vec3,
    anchor: Vec3,
    rest_length: f32,
    params: SpringParams,
}

impl SimpleSpring {
    /// Anchors `body` to `anchor`, attached at the body-local offset
    /// `(radius, 0, 0)`.
    ///
    /// # Errors
    /// [`PhysicsError::UnknownBody`] if `body` is not registered in `world`.
    pub fn new(
        world: &World,
        body: BodyId,
        anchor: Vec3,
        params: SpringParams,
    ) -> Result<Self, PhysicsError> {
        let radius = world
            .body(body)
            .ok_or(PhysicsError::UnknownBody(body))?
            .radius();
        Self::with_offset(world, body, Vec3::new(radius, 0.0, 0.0), anchor, params)
    }

    /// Anchors `body` at an explicit body-local offset.
    ///
    /// # Errors
    /// [`PhysicsError::UnknownBody`] if `body` is not registered in `world`.
    pub fn with_offset(
        world: &World,
        body: BodyId,
        local: Vec3,
        anchor: Vec3,
        params: SpringParams,
    ) -> Result<Self, PhysicsError> {
        let state = world.body(body).ok_or(PhysicsError::UnknownBody(body))?;
        let rest_length = (anchor - state.world_point(&local)).length();
        Ok(Self {
            body,
            local,
            anchor,
            rest_length,
            params,
        })
    }

    /// The attached body.
    pub fn body(&self) -> BodyId {
        self.body
    }

    /// Fixed world-space anchor.
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// Length at which the spring exerts no force.
    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    /// Stiffness and damping.
    pub fn params(&self) -> SpringParams {
        self.params
    }

    /// Full spring force on the body; half of it is applied.
    ///
    /// # Errors
    /// [`PhysicsError::UnknownBody`] if the handle is not registered in `world`.
    pub fn force(&self, world: &World) -> Result<Vec3, PhysicsError> {
        let body = world
            .body(self.body)
            .ok_or(PhysicsError::UnknownBody(self.body))?;
        Ok(self.evaluate(body).1)
    }

    fn evaluate(&self, body: &RigidBody) -> (Vec3, Vec3) {
        let p = body.world_point(&self.local);
        let delta = self.anchor - p;
        let err = delta.length() - self.rest_length;
        let force = self
            .params
            .force(delta.normalize(), err, body.linear_velocity());
        (p, force)
    }

    pub(crate) fn apply_to(&self, bodies: &mut [RigidBody]) -> Result<(), PhysicsError> {
        let body = bodies
            .get_mut(self.body.index())
            .ok_or(PhysicsError::UnknownBody(self.body))?;
        let (p, force) = self.evaluate(body);
        body.add_force_at_point(&p, force * FORCE_SHARE);
        Ok(())
    }

    /// Adds this spring's force to the body's accumulators.
    ///
    /// # Errors
    /// [`PhysicsError::UnknownBody`] if the handle is not registered in `world`.
    pub fn apply(&self, world: &mut World) -> Result<(), PhysicsError> {
        self.apply_to(world.bodies_mut())
    }
}

/// A spring registered with a [`World`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpringLink {
    /// Body-to-body spring.
    Pair(Spring),
    /// Body-to-anchor spring.
    Anchor(SimpleSpring),
}

impl SpringLink {
    pub(crate) fn apply_to(&self, bodies: &mut [RigidBody]) -> Result<(), PhysicsError> {
        match self {
            Self::Pair(spring) => spring.apply_to(bodies),
            Self::Anchor(spring) => spring.apply_to(bodies),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::body::BodyDesc;
    use crate::config::PhysicsConfig;

    fn two_bodies() -> (World, BodyId, BodyId) {
        let mut world = World::new(PhysicsConfig::without_gravity());
        let a = world
            .create_body(BodyDesc::at(Vec3::ZERO).with_radius(1.0))
            .expect("a");
        let b = world
            .create_body(BodyDesc::at(Vec3::new(4.0, 0.0, 0.0)).with_radius(1.0))
            .expect("b");
        (world, a, b)
    }

    #[test]
    fn rest_length_comes_from_initial_attachment_points() {
        let (world, a, b) = two_bodies();
        let spring = Spring::new(
            &world,
            (a, Vec3::UNIT_X),
            (b, -Vec3::UNIT_X),
            SpringParams::linked(),
        )
        .expect("spring");
        assert_eq!(spring.rest_length(), 2.0);
    }

    #[test]
    fn same_body_is_rejected() {
        let (world, a, _) = two_bodies();
        let err = Spring::new(&world, (a, Vec3::ZERO), (a, Vec3::ZERO), SpringParams::linked());
        assert_eq!(err, Err(PhysicsError::SameBody(a)));
    }

    #[test]
    fn unknown_body_is_rejected() {
        let (world, a, _) = two_bodies();
        let ghost = BodyId(99);
        let err = Spring::new(&world, (a, Vec3::ZERO), (ghost, Vec3::ZERO), SpringParams::linked());
        assert_eq!(err, Err(PhysicsError::UnknownBody(ghost)));
        let err = SimpleSpring::new(&world, ghost, Vec3::ZERO, SpringParams::anchored());
        assert_eq!(err, Err(PhysicsError::UnknownBody(ghost)));
    }

    #[test]
    fn stretched_spring_pulls_ends_together() {
        let (mut world, a, b) = two_bodies();
        let spring =
            Spring::new(&world, (a, Vec3::ZERO), (b, Vec3::ZERO), SpringParams::linked())
                .expect("spring");
        world
            .body_mut(b)
            .expect("b")
            .set_position(Vec3::new(5.0, 0.0, 0.0));
        spring.apply(&mut world).expect("apply");
        // err = 1, F = ks * 1 = 30 along +X, half to each end.
        assert_eq!(world.body(a).expect("a").force().to_array(), [15.0, 0.0, 0.0]);
        assert_eq!(world.body(b).expect("b").force().to_array(), [-15.0, 0.0, 0.0]);
    }

    #[test]
    fn simple_spring_defaults_to_radius_offset() {
        let (world, a, _) = two_bodies();
        let anchor = Vec3::new(1.0, 10.0, 0.0);
        let spring = SimpleSpring::new(&world, a, anchor, SpringParams::anchored()).expect("spring");
        assert_eq!(spring.rest_length(), 10.0);
        assert_eq!(spring.force(&world).expect("force"), Vec3::ZERO);
    }
}
