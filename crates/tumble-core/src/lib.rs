// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! tumble-core: deterministic rigid-body dynamics for spheres.
//!
//! A [`World`] owns every [`RigidBody`] and spring. Each
//! [`World::step`] applies gravity, damping and spring forces, integrates
//! with semi-implicit Euler, then detects and resolves sphere-sphere and
//! sphere-vs-static-triangle contacts with sequential impulses. Contacts are
//! reported as [`CollisionEvent`]s instead of being written into any scene
//! state.
//!
//! Rendering, mesh loading and input live elsewhere; the core hands out
//! per-body model matrices through [`World::transforms`].
#![forbid(unsafe_code)]

pub mod math;
pub mod geom;

mod body;
mod config;
mod error;
mod snapshot;
mod spring;
mod world;
pub mod collision;
pub mod demo;
pub mod impulse;

// Re-exports for stable public API
pub use body::{BodyDesc, BodyId, RigidBody, DEFAULT_RADIUS, MAX_TORQUE, TORQUE_EPSILON_SQ};
pub use collision::{CollisionEvent, CollisionObserver, Manifold};
pub use config::{PhysicsConfig, StaticBounds, MAX_TIME_STEP};
pub use error::PhysicsError;
pub use impulse::{ImpulseOutcome, ImpulseParams};
pub use snapshot::{hash_to_hex, Hash};
pub use spring::{SimpleSpring, Spring, SpringLink, SpringParams};
pub use world::{StepReport, World};
