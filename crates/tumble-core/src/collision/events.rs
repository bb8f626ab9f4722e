// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::body::BodyId;
use crate::collision::Manifold;
use crate::impulse::ImpulseOutcome;

/// A contact detected (and resolved) during a step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollisionEvent {
    /// Two bodies touched; `manifold.normal` points from `b` toward `a`.
    Bodies {
        /// Lower-index body.
        a: BodyId,
        /// Higher-index body.
        b: BodyId,
        /// Contact data at detection time.
        manifold: Manifold,
        /// What the resolver did with the contact.
        outcome: ImpulseOutcome,
    },
    /// A body touched a static triangle.
    Static {
        /// The body.
        body: BodyId,
        /// Index of the triangle in the slice passed to the step.
        triangle: usize,
        /// Contact data at detection time.
        manifold: Manifold,
        /// What the resolver did with the contact.
        outcome: ImpulseOutcome,
    },
}

impl CollisionEvent {
    /// Contact data of the event.
    pub fn manifold(&self) -> &Manifold {
        match self {
            Self::Bodies { manifold, .. } | Self::Static { manifold, .. } => manifold,
        }
    }

    /// Whether `id` took part in the contact.
    pub fn involves(&self, id: BodyId) -> bool {
        match *self {
            Self::Bodies { a, b, .. } => a == id || b == id,
            Self::Static { body, .. } => body == id,
        }
    }
}

/// Receives collision events in detection order.
///
/// Renderers use this to react to contacts (highlight, sound) without the
/// core reaching into a scene graph.
pub trait CollisionObserver {
    /// Called once per resolved contact.
    fn on_collision(&mut self, event: &CollisionEvent);
}

impl CollisionObserver for Vec<CollisionEvent> {
    fn on_collision(&mut self, event: &CollisionEvent) {
        self.push(*event);
    }
}
