// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Tumble tools (config storage, simulation
//! settings). Keeps CLI and viewer adapters thin.

pub mod config;
pub mod settings;
