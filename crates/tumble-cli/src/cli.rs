// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tumble_app_core::settings::{SceneKind, SimSettings};

#[derive(Parser, Debug)]
#[command(name = "tumble", version, about = "Run Tumble rigid-body scenes headless")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a demo scene, step it and print the final state
    Run(RunArgs),
    /// Write default settings to the config directory
    InitConfig {
        /// Config directory (defaults to the platform config dir)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Overwrite existing settings
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Scene to build
    #[arg(long, value_enum)]
    pub scene: Option<SceneArg>,
    /// Number of steps
    #[arg(long)]
    pub steps: Option<u32>,
    /// Fixed time step in seconds
    #[arg(long)]
    pub dt: Option<f32>,
    /// Body count (rain) or chain links (pendulum)
    #[arg(long)]
    pub bodies: Option<usize>,
    /// Placement seed
    #[arg(long)]
    pub seed: Option<u64>,
    /// Config directory (defaults to the platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    /// Overlays the flags that were given onto stored settings.
    pub fn apply_to(&self, settings: &mut SimSettings) {
        if let Some(scene) = self.scene {
            settings.scene = scene.into();
        }
        if let Some(steps) = self.steps {
            settings.steps = steps;
        }
        if let Some(dt) = self.dt {
            settings.dt = dt;
        }
        if let Some(bodies) = self.bodies {
            settings.bodies = bodies;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SceneArg {
    HeadOn,
    Pendulum,
    Rain,
}

impl From<SceneArg> for SceneKind {
    fn from(value: SceneArg) -> Self {
        match value {
            SceneArg::HeadOn => Self::HeadOn,
            SceneArg::Pendulum => Self::Pendulum,
            SceneArg::Rain => Self::Rain,
        }
    }
}
