// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Errors emitted by the physics core.

use thiserror::Error;

use crate::body::BodyId;

/// Errors emitted while building or mutating a [`crate::World`].
///
/// Numeric edge cases inside a step (separating contacts, immovable pairs)
/// are not errors; they are reported as [`crate::impulse::ImpulseOutcome`]
/// variants instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhysicsError {
    /// The body registry was created with a fixed capacity and is full.
    #[error("body registry full (capacity {capacity})")]
    CapacityExceeded {
        /// Configured maximum number of bodies.
        capacity: usize,
    },
    /// A handle did not refer to a registered body.
    #[error("unknown body: {0}")]
    UnknownBody(BodyId),
    /// A constraint referenced the same body on both ends.
    #[error("constraint needs two distinct bodies, got {0} twice")]
    SameBody(BodyId),
    /// Mass must be finite and strictly positive.
    #[error("invalid mass: {0}")]
    InvalidMass(f32),
    /// Radius must be finite and strictly positive.
    #[error("invalid radius: {0}")]
    InvalidRadius(f32),
    /// A static triangle has zero area.
    #[error("degenerate triangle at index {0}")]
    DegenerateTriangle(usize),
    /// A flat vertex list could not be split into triangles.
    #[error("vertex count {0} is not a multiple of three")]
    VertexCountNotMultipleOfThree(usize),
}
