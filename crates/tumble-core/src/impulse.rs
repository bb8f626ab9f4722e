// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Sequential impulse response for a single contact.
//!
//! One normal impulse (restitution plus a penetration bias) and one
//! friction impulse along the sliding direction are applied per contact.
//! Bodies heavier than [`ImpulseParams::heavy_mass_threshold`] are treated as
//! immovable for the duration of the call.

use crate::body::RigidBody;
use crate::collision::Manifold;
use crate::math::{Mat4, Vec3};

/// Contact response coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImpulseParams {
    /// Coefficient of restitution `e`.
    pub restitution: f32,
    /// Multiplier on penetration depth added to the normal impulse.
    pub penetration_bias: f32,
    /// Contacts with `dv · n` above this are separating and skipped.
    pub separation_tolerance: f32,
    /// Bodies with mass strictly above this get zero effective inverse mass.
    pub heavy_mass_threshold: f32,
    /// Coulomb clamp `|jt| ≤ μ · |jn|`; `None` leaves friction unclamped.
    pub friction_cone: Option<f32>,
}

impl ImpulseParams {
    /// Sphere-sphere contacts: perfectly inelastic.
    pub const fn sphere() -> Self {
        Self {
            restitution: 0.0,
            penetration_bias: 1.5,
            separation_tolerance: 0.01,
            heavy_mass_threshold: 1000.0,
            friction_cone: None,
        }
    }

    /// Sphere-vs-static contacts: half restitution.
    pub const fn static_geometry() -> Self {
        Self {
            restitution: 0.5,
            ..Self::sphere()
        }
    }
}

impl Default for ImpulseParams {
    fn default() -> Self {
        Self::sphere()
    }
}

/// What a resolve call did.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpulseOutcome {
    /// Impulses were applied; `tangent` is zero when friction was skipped.
    Applied {
        /// Normal impulse magnitude `jn` (bias included).
        normal: f32,
        /// Friction impulse magnitude `jt`.
        tangent: f32,
    },
    /// The bodies were already moving apart.
    Separating,
    /// Neither side can move.
    Immovable,
}

/// One participant in a contact as seen by the solver.
struct ContactSide {
    inv_mass: f32,
    inv_inertia: Mat4,
    arm: Vec3,
    velocity: Vec3,
}

impl ContactSide {
    fn of(body: &RigidBody, point: &Vec3, heavy_mass_threshold: f32) -> Self {
        let (inv_mass, inv_inertia) = if body.mass() > heavy_mass_threshold {
            (0.0, Mat4::diagonal(0.0))
        } else {
            (body.inverse_mass(), body.world_inverse_inertia())
        };
        Self {
            inv_mass,
            inv_inertia,
            arm: *point - body.position(),
            velocity: body.velocity_at_point(point),
        }
    }

    fn fixed() -> Self {
        Self {
            inv_mass: 0.0,
            inv_inertia: Mat4::diagonal(0.0),
            arm: Vec3::ZERO,
            velocity: Vec3::ZERO,
        }
    }

    /// `(I⁻¹ (r × d)) × r`
    fn angular_response(&self, direction: &Vec3) -> Vec3 {
        self.inv_inertia
            .transform_direction(&self.arm.cross(direction))
            .cross(&self.arm)
    }

    fn linear_delta(&self, impulse: Vec3) -> Vec3 {
        impulse * self.inv_mass
    }

    fn angular_delta(&self, impulse: Vec3) -> Vec3 {
        self.inv_inertia
            .transform_direction(&self.arm.cross(&impulse))
    }
}

/// Velocity changes for side A; side B receives the negation.
struct Resolution {
    outcome: ImpulseOutcome,
    impulse: Vec3,
}

fn solve(a: &ContactSide, b: &ContactSide, manifold: &Manifold, params: &ImpulseParams) -> Resolution {
    let inv_mass_sum = a.inv_mass + b.inv_mass;
    if inv_mass_sum == 0.0 {
        return Resolution {
            outcome: ImpulseOutcome::Immovable,
            impulse: Vec3::ZERO,
        };
    }

    let n = manifold.normal;
    let dv = a.velocity - b.velocity;
    let dv_n = dv.dot(&n);
    if dv_n > params.separation_tolerance {
        return Resolution {
            outcome: ImpulseOutcome::Separating,
            impulse: Vec3::ZERO,
        };
    }

    let angular_n = n.dot(&(a.angular_response(&n) + b.angular_response(&n)));
    let denom_n = n.dot(&n) * (inv_mass_sum + angular_n);
    let jn = -(1.0 + params.restitution) * dv_n / denom_n
        + manifold.penetration * params.penetration_bias;

    let tangent = (dv - n * dv_n).normalize();
    let mut jt = 0.0;
    if tangent != Vec3::ZERO {
        let angular_t = tangent.dot(&(a.angular_response(&tangent) + b.angular_response(&tangent)));
        let denom_t = inv_mass_sum + angular_t;
        if denom_t > 0.0 {
            jt = -dv.dot(&tangent) / denom_t;
            if let Some(mu) = params.friction_cone {
                let limit = (mu * jn).abs();
                if jt.abs() > limit {
                    jt = limit.copysign(jt);
                }
            }
        }
    }

    Resolution {
        outcome: ImpulseOutcome::Applied {
            normal: jn,
            tangent: jt,
        },
        impulse: n * jn + tangent * jt,
    }
}

/// Resolves a contact between two dynamic bodies.
///
/// `manifold.normal` must point from `b` toward `a`. Velocities of both
/// bodies are updated in place; positions are left alone (penetration is
/// corrected through the bias term on later steps).
pub fn resolve_pair(
    a: &mut RigidBody,
    b: &mut RigidBody,
    manifold: &Manifold,
    params: &ImpulseParams,
) -> ImpulseOutcome {
    let side_a = ContactSide::of(a, &manifold.point, params.heavy_mass_threshold);
    let side_b = ContactSide::of(b, &manifold.point, params.heavy_mass_threshold);
    let resolution = solve(&side_a, &side_b, manifold, params);
    if matches!(resolution.outcome, ImpulseOutcome::Applied { .. }) {
        let j = resolution.impulse;
        a.apply_velocity_delta(side_a.linear_delta(j), side_a.angular_delta(j));
        b.apply_velocity_delta(-side_b.linear_delta(j), -side_b.angular_delta(j));
    }
    resolution.outcome
}

/// Resolves a contact between a body and immovable static geometry.
///
/// `manifold.normal` must point from the geometry toward the body.
pub fn resolve_static(
    body: &mut RigidBody,
    manifold: &Manifold,
    params: &ImpulseParams,
) -> ImpulseOutcome {
    let side = ContactSide::of(body, &manifold.point, params.heavy_mass_threshold);
    if side.inv_mass == 0.0 {
        return ImpulseOutcome::Immovable;
    }
    let resolution = solve(&side, &ContactSide::fixed(), manifold, params);
    if matches!(resolution.outcome, ImpulseOutcome::Applied { .. }) {
        let j = resolution.impulse;
        body.apply_velocity_delta(side.linear_delta(j), side.angular_delta(j));
    }
    resolution.outcome
}
