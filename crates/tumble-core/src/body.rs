// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Rigid body state and the semi-implicit Euler integrator.

use core::fmt;

use crate::config::MAX_TIME_STEP;
use crate::error::PhysicsError;
use crate::geom::Transform;
use crate::math::{Mat4, Quat, Vec3};

/// Torques whose squared magnitude is at or below this are dropped.
pub const TORQUE_EPSILON_SQ: f32 = 1e-6;

/// Largest torque magnitude a single [`RigidBody::add_torque`] call can add.
pub const MAX_TORQUE: f32 = 5000.0;

/// Radius used when a [`BodyDesc`] does not set one.
pub const DEFAULT_RADIUS: f32 = 10.0;

/// Index-stable handle to a body inside a [`crate::World`].
///
/// Handles are assigned in creation order and never reused; bodies are not
/// removed from a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyId(pub(crate) usize);

impl BodyId {
    /// Registry slot of this body.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "body#{}", self.0)
    }
}

/// Creation parameters for a [`RigidBody`].
///
/// # Examples
/// ```
/// use tumble_core::{BodyDesc, math::Vec3};
/// let desc = BodyDesc::at(Vec3::new(0.0, 5.0, 0.0))
///     .with_radius(1.0)
///     .with_mass(2.0)
///     .with_velocity(Vec3::new(1.0, 0.0, 0.0));
/// assert_eq!(desc.radius, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDesc {
    /// Initial centre of mass.
    pub position: Vec3,
    /// Initial orientation.
    pub orientation: Quat,
    /// Sphere radius.
    pub radius: f32,
    /// Mass; `f32::INFINITY` makes the body immovable.
    pub mass: f32,
    /// Initial linear velocity.
    pub linear_velocity: Vec3,
    /// Initial angular velocity.
    pub angular_velocity: Vec3,
    /// Whether the body is tested against static triangle geometry.
    pub collides_with_static: bool,
}

impl Default for BodyDesc {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::identity(),
            radius: DEFAULT_RADIUS,
            mass: 1.0,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            collides_with_static: true,
        }
    }
}

impl BodyDesc {
    /// Default body centred at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Default body placed by a world transform; only the translation column
    /// is used.
    pub fn from_transform(transform: &Mat4) -> Self {
        Self::at(transform.translation_vector())
    }

    /// Sets the radius.
    pub fn with_radius(self, radius: f32) -> Self {
        Self { radius, ..self }
    }

    /// Sets the mass.
    pub fn with_mass(self, mass: f32) -> Self {
        Self { mass, ..self }
    }

    /// Makes the body immovable (infinite mass and inertia).
    pub fn immovable(self) -> Self {
        self.with_mass(f32::INFINITY)
    }

    /// Sets the orientation (normalised on creation).
    pub fn with_orientation(self, orientation: Quat) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    /// Sets the initial linear velocity.
    pub fn with_velocity(self, linear_velocity: Vec3) -> Self {
        Self {
            linear_velocity,
            ..self
        }
    }

    /// Sets the initial angular velocity.
    pub fn with_angular_velocity(self, angular_velocity: Vec3) -> Self {
        Self {
            angular_velocity,
            ..self
        }
    }

    /// Opts the body in or out of static-geometry collisions.
    pub fn with_static_collisions(self, enabled: bool) -> Self {
        Self {
            collides_with_static: enabled,
            ..self
        }
    }
}

/// A sphere-shaped rigid body.
///
/// Forces and torques accumulate between steps and are cleared by
/// [`RigidBody::integrate`]. Inverse mass and inverse inertia are fixed at
/// creation; zero means infinite.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    radius: f32,
    collides_with_static: bool,

    position: Vec3,
    linear_velocity: Vec3,
    force: Vec3,
    inv_mass: f32,

    orientation: Quat,
    angular_velocity: Vec3,
    torque: Vec3,
    inv_inertia: Mat4,
}

impl RigidBody {
    /// Builds a body from its description.
    ///
    /// The inverse inertia is that of a solid sphere, `1 / (2/5 · m · r²)` on
    /// the diagonal.
    ///
    /// # Errors
    /// [`PhysicsError::InvalidMass`] unless `mass > 0` (infinity allowed);
    /// [`PhysicsError::InvalidRadius`] unless the radius is finite and `> 0`.
    pub fn from_desc(desc: &BodyDesc) -> Result<Self, PhysicsError> {
        if desc.mass.is_nan() || desc.mass <= 0.0 {
            return Err(PhysicsError::InvalidMass(desc.mass));
        }
        if !desc.radius.is_finite() || desc.radius <= 0.0 {
            return Err(PhysicsError::InvalidRadius(desc.radius));
        }
        let (inv_mass, inv_inertia) = if desc.mass.is_infinite() {
            (0.0, Mat4::diagonal(0.0))
        } else {
            let inertia = 0.4 * desc.mass * desc.radius * desc.radius;
            (1.0 / desc.mass, Mat4::diagonal(1.0 / inertia))
        };
        Ok(Self {
            radius: desc.radius,
            collides_with_static: desc.collides_with_static,
            position: desc.position,
            linear_velocity: desc.linear_velocity,
            force: Vec3::ZERO,
            inv_mass,
            orientation: desc.orientation.normalize(),
            angular_velocity: desc.angular_velocity,
            torque: Vec3::ZERO,
            inv_inertia,
        })
    }

    /// Sphere radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Whether static geometry is tested against this body.
    pub fn collides_with_static(&self) -> bool {
        self.collides_with_static
    }

    /// Opts in or out of static-geometry collisions.
    pub fn set_collides_with_static(&mut self, enabled: bool) {
        self.collides_with_static = enabled;
    }

    /// Centre of mass in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleports the body.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Linear velocity.
    pub fn linear_velocity(&self) -> Vec3 {
        self.linear_velocity
    }

    /// Overwrites the linear velocity.
    pub fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.linear_velocity = velocity;
    }

    /// Angular velocity (world space, radians per second).
    pub fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    /// Overwrites the angular velocity.
    pub fn set_angular_velocity(&mut self, velocity: Vec3) {
        self.angular_velocity = velocity;
    }

    /// Orientation as a unit quaternion.
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Overwrites the orientation; the value is normalised.
    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation.normalize();
    }

    /// Force accumulated since the last step.
    pub fn force(&self) -> Vec3 {
        self.force
    }

    /// Torque accumulated since the last step.
    pub fn torque(&self) -> Vec3 {
        self.torque
    }

    /// Inverse mass; zero for immovable bodies.
    pub fn inverse_mass(&self) -> f32 {
        self.inv_mass
    }

    /// Mass; infinite for immovable bodies.
    pub fn mass(&self) -> f32 {
        if self.inv_mass == 0.0 {
            f32::INFINITY
        } else {
            1.0 / self.inv_mass
        }
    }

    /// Body-local inverse inertia tensor (diagonal).
    pub fn inverse_inertia(&self) -> Mat4 {
        self.inv_inertia
    }

    /// World-space inverse inertia `R · I⁻¹ · Rᵀ` for the current orientation.
    ///
    /// Recomputed on every call.
    pub fn world_inverse_inertia(&self) -> Mat4 {
        let rotation = self.orientation.to_mat4();
        rotation
            .multiply(&self.inv_inertia)
            .multiply(&rotation.transpose())
    }

    /// Velocity of the material point currently at world position `point`.
    pub fn velocity_at_point(&self, point: &Vec3) -> Vec3 {
        let r = *point - self.position;
        self.linear_velocity + self.angular_velocity.cross(&r)
    }

    /// World position of a body-local offset.
    pub fn world_point(&self, local: &Vec3) -> Vec3 {
        self.position + self.orientation.rotate(local)
    }

    /// Accumulates a force through the centre of mass.
    pub fn add_force(&mut self, force: Vec3) {
        self.force += force;
    }

    /// Accumulates a torque.
    ///
    /// Torques with `|τ|² ≤ 1e-6` are ignored; larger ones keep their axis
    /// and have their magnitude clamped to `[0, 5000]`.
    pub fn add_torque(&mut self, torque: Vec3) {
        if torque.length_squared() <= TORQUE_EPSILON_SQ {
            return;
        }
        let axis = torque.normalize();
        let power = torque.length().min(MAX_TORQUE);
        self.torque += axis * power;
    }

    /// Applies `force` at world point `point`: the force itself plus the
    /// torque `(point − x) × force`.
    pub fn add_force_at_point(&mut self, point: &Vec3, force: Vec3) {
        self.force += force;
        let arm = *point - self.position;
        self.add_torque(arm.cross(&force));
    }

    /// Changes angular velocity directly, bypassing the torque buffer.
    pub fn add_angular_velocity(&mut self, delta: Vec3) {
        self.angular_velocity += delta;
    }

    /// Applies an instantaneous velocity change.
    pub fn apply_velocity_delta(&mut self, linear: Vec3, angular: Vec3) {
        self.linear_velocity += linear;
        self.angular_velocity += angular;
    }

    /// Advances the body by `dt` seconds, clamped to [`MAX_TIME_STEP`].
    pub fn integrate(&mut self, dt: f32) {
        self.integrate_clamped(dt, MAX_TIME_STEP);
    }

    /// Semi-implicit Euler step with an explicit dt ceiling.
    ///
    /// Velocity is updated from the accumulated force before position is
    /// advanced. The orientation takes the first-order update
    /// `q += (ω·dt/2, 0) · q` and is renormalised. Both accumulators are
    /// cleared.
    pub fn integrate_clamped(&mut self, dt: f32, max_dt: f32) {
        let dt = dt.min(max_dt);

        self.linear_velocity += self.force * (self.inv_mass * dt);
        self.position += self.linear_velocity * dt;
        self.force = Vec3::ZERO;

        let world_inv_inertia = self.world_inverse_inertia();
        self.angular_velocity += world_inv_inertia.transform_direction(&self.torque) * dt;
        let spin = Quat::from_vector(self.angular_velocity * (dt * 0.5));
        self.orientation = self
            .orientation
            .add(&spin.multiply(&self.orientation))
            .normalize();
        self.torque = Vec3::ZERO;
    }

    /// Draw-time placement `T · R` (no scale).
    pub fn model_matrix(&self) -> Mat4 {
        let [x, y, z] = self.position.to_array();
        Mat4::translation(x, y, z).multiply(&self.orientation.to_mat4())
    }

    /// Placement as a [`Transform`] with unit scale.
    pub fn transform(&self) -> Transform {
        Transform::rigid(self.position, self.orientation)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn unit_sphere() -> RigidBody {
        RigidBody::from_desc(&BodyDesc::at(Vec3::ZERO).with_radius(1.0)).expect("valid body")
    }

    #[test]
    fn from_transform_uses_translation_column_and_defaults() {
        let spin = Quat::from_axis_angle(Vec3::UNIT_Z, 0.9);
        let placement = Mat4::translation(3.0, -4.0, 12.5).multiply(&spin.to_mat4());
        let body =
            RigidBody::from_desc(&BodyDesc::from_transform(&placement)).expect("valid body");
        assert_eq!(body.position().to_array(), [3.0, -4.0, 12.5]);
        assert_eq!(body.radius(), DEFAULT_RADIUS);
        assert_eq!(body.radius(), 10.0);
        assert_eq!(body.mass(), 1.0);
        assert_eq!(body.orientation(), Quat::identity());
        assert!(body.collides_with_static());
    }

    #[test]
    fn setters_normalise_orientation_and_toggle_static_flag() {
        let mut body = unit_sphere();
        body.set_orientation(Quat::new(0.0, 0.0, 0.0, 2.0));
        assert_eq!(body.orientation(), Quat::identity());
        body.set_collides_with_static(false);
        assert!(!body.collides_with_static());
    }

    #[test]
    fn rejects_non_positive_mass_and_radius() {
        let zero_mass = BodyDesc::default().with_mass(0.0);
        assert_eq!(
            RigidBody::from_desc(&zero_mass),
            Err(PhysicsError::InvalidMass(0.0))
        );
        let bad_radius = BodyDesc::default().with_radius(-1.0);
        assert_eq!(
            RigidBody::from_desc(&bad_radius),
            Err(PhysicsError::InvalidRadius(-1.0))
        );
    }

    #[test]
    fn solid_sphere_inverse_inertia() {
        let body = RigidBody::from_desc(&BodyDesc::default().with_mass(2.0).with_radius(5.0))
            .expect("valid body");
        let expected = 1.0 / (0.4 * 2.0 * 25.0);
        let ii = body.inverse_inertia();
        assert_eq!(ii.at(0, 0), expected);
        assert_eq!(ii.at(1, 1), expected);
        assert_eq!(ii.at(2, 2), expected);
        assert_eq!(ii.at(0, 1), 0.0);
    }

    #[test]
    fn immovable_body_has_zero_inverses() {
        let body = RigidBody::from_desc(&BodyDesc::default().immovable()).expect("valid body");
        assert_eq!(body.inverse_mass(), 0.0);
        assert!(body.mass().is_infinite());
        assert_eq!(body.inverse_inertia().at(1, 1), 0.0);
    }

    #[test]
    fn integrate_is_semi_implicit() {
        let mut body = unit_sphere();
        body.add_force(Vec3::new(2.0, 0.0, 0.0));
        body.integrate(0.5);
        // v = 2 * 1 * 0.5 = 1; x = v * dt = 0.5 (uses the updated velocity)
        assert_eq!(body.linear_velocity().to_array(), [1.0, 0.0, 0.0]);
        assert_eq!(body.position().to_array(), [0.5, 0.0, 0.0]);
        assert_eq!(body.force(), Vec3::ZERO);
    }

    #[test]
    fn integrate_clamps_large_time_steps() {
        let mut a = unit_sphere();
        let mut b = unit_sphere();
        a.set_linear_velocity(Vec3::UNIT_X);
        b.set_linear_velocity(Vec3::UNIT_X);
        a.integrate(10.0);
        b.integrate(MAX_TIME_STEP);
        assert_eq!(a.position(), b.position());
    }

    #[test]
    fn tiny_torques_are_ignored() {
        let mut body = unit_sphere();
        body.add_torque(Vec3::new(1e-4, 0.0, 0.0));
        assert_eq!(body.torque(), Vec3::ZERO);
    }

    #[test]
    fn torque_magnitude_is_clamped() {
        let mut body = unit_sphere();
        body.add_torque(Vec3::new(0.0, 0.0, 1.0e6));
        let t = body.torque().to_array();
        assert!((t[2] - MAX_TORQUE).abs() < 1e-2, "torque {t:?}");
    }

    #[test]
    fn force_at_offset_produces_torque() {
        let mut body = unit_sphere();
        body.add_force_at_point(&Vec3::UNIT_X, Vec3::UNIT_Y);
        assert_eq!(body.force().to_array(), [0.0, 1.0, 0.0]);
        // (1,0,0) x (0,1,0) = (0,0,1)
        let t = body.torque().to_array();
        assert!((t[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn orientation_stays_unit_length() {
        let mut body = unit_sphere();
        body.set_angular_velocity(Vec3::new(3.0, -2.0, 5.0));
        for _ in 0..500 {
            body.integrate(0.016);
        }
        let len = body.orientation().length();
        assert!((len - 1.0).abs() < 1e-5, "len {len}");
    }

    #[test]
    fn model_matrix_places_translation_last() {
        let body = RigidBody::from_desc(&BodyDesc::at(Vec3::new(1.0, 2.0, 3.0))).expect("body");
        assert_eq!(
            body.model_matrix().translation_vector().to_array(),
            [1.0, 2.0, 3.0]
        );
        assert_eq!(body.transform().to_mat4(), body.model_matrix());
    }
}
