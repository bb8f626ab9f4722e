// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Body registry and the per-frame step.
//!
//! Step order is fixed:
//! 1. gravity and damping on every body,
//! 2. spring forces,
//! 3. integration of every body,
//! 4. all-pairs sphere scan, resolving each hit as it is found,
//! 5. sphere-vs-static scan, resolving each hit as it is found.
//!
//! Bodies are visited in ascending [`BodyId`] order throughout, so identical
//! inputs produce bit-identical states (see [`World::state_hash`]).

use tracing::{debug, instrument, trace, warn};

use crate::body::{BodyDesc, BodyId, RigidBody};
use crate::collision::{sphere_sphere, sphere_triangle, CollisionEvent, CollisionObserver};
use crate::config::PhysicsConfig;
use crate::error::PhysicsError;
use crate::geom::Triangle;
use crate::impulse::{resolve_pair, resolve_static};
use crate::math::{Mat4, Vec3};
use crate::snapshot::{compute_state_hash, Hash};
use crate::spring::{SimpleSpring, Spring, SpringLink, SpringParams};

/// Borrows two distinct bodies mutably.
pub(crate) fn pair_mut(
    bodies: &mut [RigidBody],
    a: BodyId,
    b: BodyId,
) -> Result<(&mut RigidBody, &mut RigidBody), PhysicsError> {
    if a == b {
        return Err(PhysicsError::SameBody(a));
    }
    let len = bodies.len();
    for id in [a, b] {
        if id.index() >= len {
            return Err(PhysicsError::UnknownBody(id));
        }
    }
    if a.index() < b.index() {
        let (head, tail) = bodies.split_at_mut(b.index());
        Ok((&mut head[a.index()], &mut tail[0]))
    } else {
        let (head, tail) = bodies.split_at_mut(a.index());
        Ok((&mut tail[0], &mut head[b.index()]))
    }
}

/// Summary of one [`World::step`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    /// Time step actually integrated, after clamping.
    pub dt: f32,
    /// Every contact of the step, in detection order.
    pub events: Vec<CollisionEvent>,
    /// Number of sphere-sphere contacts.
    pub sphere_contacts: usize,
    /// Number of sphere-vs-static contacts.
    pub static_contacts: usize,
}

/// Owns every rigid body and spring and advances them together.
///
/// Bodies live in an append-only `Vec`; a [`BodyId`] is the body's index and
/// stays valid for the life of the world.
///
/// # Examples
/// ```
/// use tumble_core::{BodyDesc, PhysicsConfig, World, math::Vec3};
/// let mut world = World::new(PhysicsConfig::default());
/// let ball = world.create_body(BodyDesc::at(Vec3::new(0.0, 10.0, 0.0))).unwrap();
/// let report = world.step(1.0 / 60.0, &[]);
/// assert!(report.events.is_empty());
/// assert!(world.body(ball).unwrap().linear_velocity().y() < 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct World {
    config: PhysicsConfig,
    bodies: Vec<RigidBody>,
    springs: Vec<SpringLink>,
}

impl World {
    /// Creates an empty world.
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            springs: Vec::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Mutable configuration; changes apply from the next step.
    pub fn config_mut(&mut self) -> &mut PhysicsConfig {
        &mut self.config
    }

    /// Registers a new body.
    ///
    /// # Errors
    /// [`PhysicsError::CapacityExceeded`] when `max_bodies` is set and
    /// reached; [`PhysicsError::InvalidMass`] / [`PhysicsError::InvalidRadius`]
    /// for bad descriptions.
    pub fn create_body(&mut self, desc: BodyDesc) -> Result<BodyId, PhysicsError> {
        if let Some(capacity) = self.config.max_bodies {
            if self.bodies.len() >= capacity {
                warn!(capacity, "body registry full; rejecting body");
                return Err(PhysicsError::CapacityExceeded { capacity });
            }
        }
        let body = RigidBody::from_desc(&desc)?;
        let id = BodyId(self.bodies.len());
        debug!(%id, radius = body.radius(), mass = body.mass(), "created body");
        self.bodies.push(body);
        Ok(id)
    }

    /// Body by handle.
    pub fn body(&self, id: BodyId) -> Option<&RigidBody> {
        self.bodies.get(id.index())
    }

    /// Mutable body by handle.
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        self.bodies.get_mut(id.index())
    }

    /// Two distinct bodies, both mutable.
    ///
    /// # Errors
    /// [`PhysicsError::SameBody`] if `a == b`, [`PhysicsError::UnknownBody`]
    /// for an unregistered handle.
    pub fn body_pair_mut(
        &mut self,
        a: BodyId,
        b: BodyId,
    ) -> Result<(&mut RigidBody, &mut RigidBody), PhysicsError> {
        pair_mut(&mut self.bodies, a, b)
    }

    /// All bodies in index order.
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [RigidBody] {
        &mut self.bodies
    }

    /// Handles of all bodies in index order.
    pub fn body_ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        (0..self.bodies.len()).map(BodyId)
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// `true` when no body has been created.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Connects two bodies with a spring; see [`Spring::new`].
    ///
    /// # Errors
    /// As [`Spring::new`].
    pub fn add_spring(
        &mut self,
        a: (BodyId, Vec3),
        b: (BodyId, Vec3),
        params: SpringParams,
    ) -> Result<usize, PhysicsError> {
        let spring = Spring::new(self, a, b, params)?;
        self.springs.push(SpringLink::Pair(spring));
        Ok(self.springs.len() - 1)
    }

    /// Anchors a body to a fixed point; see [`SimpleSpring::new`].
    ///
    /// # Errors
    /// As [`SimpleSpring::new`].
    pub fn add_simple_spring(
        &mut self,
        body: BodyId,
        anchor: Vec3,
        params: SpringParams,
    ) -> Result<usize, PhysicsError> {
        let spring = SimpleSpring::new(self, body, anchor, params)?;
        self.springs.push(SpringLink::Anchor(spring));
        Ok(self.springs.len() - 1)
    }

    /// Registered springs, in insertion order.
    pub fn springs(&self) -> &[SpringLink] {
        &self.springs
    }

    /// Turns gravity on or off for every body.
    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.config.gravity_enabled = enabled;
    }

    /// Whether gravity is applied.
    pub fn gravity_enabled(&self) -> bool {
        self.config.gravity_enabled
    }

    /// Sets a body's linear velocity, e.g. to fire a projectile.
    ///
    /// # Errors
    /// [`PhysicsError::UnknownBody`] for an unregistered handle.
    pub fn launch(&mut self, id: BodyId, velocity: Vec3) -> Result<(), PhysicsError> {
        let body = self.body_mut(id).ok_or(PhysicsError::UnknownBody(id))?;
        body.set_linear_velocity(velocity);
        debug!(%id, ?velocity, "launched body");
        Ok(())
    }

    /// Accumulates gravity, damping and spring forces for the coming
    /// integration.
    ///
    /// Gravity is `mass · g` and skips immovable bodies. Linear damping is a
    /// force; angular damping changes ω directly.
    pub fn apply_forces(&mut self) {
        let cfg = &self.config;
        for body in &mut self.bodies {
            if cfg.gravity_enabled && body.inverse_mass() > 0.0 {
                body.add_force(cfg.gravity * body.mass());
            }
            body.add_force(-body.linear_velocity() * cfg.linear_damping);
            body.add_angular_velocity(-body.angular_velocity() * cfg.angular_damping);
        }
        for link in &self.springs {
            if let Err(err) = link.apply_to(&mut self.bodies) {
                warn!(%err, "skipping spring");
            }
        }
    }

    /// Integrates every body by `dt`, clamped to `max_time_step`.
    pub fn integrate(&mut self, dt: f32) {
        let max_dt = self.config.max_time_step;
        for body in &mut self.bodies {
            body.integrate_clamped(dt, max_dt);
        }
    }

    /// Tests every unordered body pair once, in ascending index order, and
    /// resolves each contact immediately.
    pub fn check_sphere_collisions(&mut self) -> Vec<CollisionEvent> {
        let params = self.config.sphere_contact;
        let mut events = Vec::new();
        for i in 0..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for (offset, b) in tail.iter_mut().enumerate() {
                let Some(manifold) = sphere_sphere(a, b) else {
                    continue;
                };
                let outcome = resolve_pair(a, b, &manifold, &params);
                let event = CollisionEvent::Bodies {
                    a: BodyId(i),
                    b: BodyId(i + 1 + offset),
                    manifold,
                    outcome,
                };
                debug!(?event, "sphere contact");
                events.push(event);
            }
        }
        events
    }

    /// Tests bodies that opted in and lie inside the static bounds against
    /// every triangle, resolving each contact immediately.
    pub fn check_static_collisions(&mut self, triangles: &[Triangle]) -> Vec<CollisionEvent> {
        let params = self.config.static_contact;
        let bounds = self.config.static_bounds;
        let mut events = Vec::new();
        for (index, body) in self.bodies.iter_mut().enumerate() {
            if !body.collides_with_static() || !bounds.contains(&body.position()) {
                continue;
            }
            for (triangle, tri) in triangles.iter().enumerate() {
                let Some(manifold) = sphere_triangle(body, tri) else {
                    continue;
                };
                let outcome = resolve_static(body, &manifold, &params);
                let event = CollisionEvent::Static {
                    body: BodyId(index),
                    triangle,
                    manifold,
                    outcome,
                };
                debug!(?event, "static contact");
                events.push(event);
            }
        }
        events
    }

    /// Advances the simulation by one frame.
    ///
    /// `triangles` is the static geometry for this frame; the world keeps no
    /// reference to it.
    #[instrument(level = "debug", skip(self, triangles), fields(bodies = self.bodies.len(), triangles = triangles.len()))]
    pub fn step(&mut self, dt: f32, triangles: &[Triangle]) -> StepReport {
        self.apply_forces();
        self.integrate(dt);
        let mut events = self.check_sphere_collisions();
        let sphere_contacts = events.len();
        events.extend(self.check_static_collisions(triangles));
        let static_contacts = events.len() - sphere_contacts;
        trace!(sphere_contacts, static_contacts, "step complete");
        StepReport {
            dt: dt.min(self.config.max_time_step),
            events,
            sphere_contacts,
            static_contacts,
        }
    }

    /// [`World::step`], forwarding every event to `observer` in detection
    /// order.
    pub fn step_observed(
        &mut self,
        dt: f32,
        triangles: &[Triangle],
        observer: &mut dyn CollisionObserver,
    ) -> StepReport {
        let report = self.step(dt, triangles);
        for event in &report.events {
            observer.on_collision(event);
        }
        report
    }

    /// Draw-time placement of every body, in index order.
    pub fn transforms(&self) -> impl Iterator<Item = (BodyId, Mat4)> + '_ {
        self.bodies
            .iter()
            .enumerate()
            .map(|(index, body)| (BodyId(index), body.model_matrix()))
    }

    /// Draw-time placement of one body.
    pub fn model_matrix(&self, id: BodyId) -> Option<Mat4> {
        self.body(id).map(RigidBody::model_matrix)
    }

    /// BLAKE3 digest of every body's dynamic state, in index order.
    ///
    /// Equal hashes mean bit-identical positions, velocities and
    /// orientations.
    pub fn state_hash(&self) -> Hash {
        compute_state_hash(&self.bodies)
    }
}
