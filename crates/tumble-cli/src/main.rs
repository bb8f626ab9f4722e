// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tumble CLI entrypoint.
//!
//! # Usage
//! ```text
//! tumble run [--scene head-on|pendulum|rain] [--steps N] [--dt S]
//!            [--bodies N] [--seed N] [--config DIR] [--json]
//! tumble init-config [--config DIR] [--force]
//! ```
//!
//! Settings are read from `sim.json` in the config directory (the platform
//! config dir unless `--config` is given); flags override them. Logs go to
//! stderr and honour `RUST_LOG`.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod report;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tumble_app_core::config::{ConfigService, ConfigStore};
use tumble_app_core::settings::SimSettings;
use tumble_config_fs::FsConfigStore;

use crate::cli::{Cli, Command, RunArgs};

fn open_store(dir: Option<&Path>) -> Result<FsConfigStore> {
    let store = match dir {
        Some(dir) => FsConfigStore::in_dir(dir),
        None => FsConfigStore::new(),
    };
    store.context("opening config directory")
}

fn load_settings(dir: Option<&Path>) -> Result<SimSettings> {
    let store = match open_store(dir) {
        Ok(store) => store,
        Err(err) if dir.is_none() => {
            warn!("{err:#}; using default settings");
            return Ok(SimSettings::default());
        }
        Err(err) => return Err(err),
    };
    let path = store.path_for(SimSettings::KEY);
    ConfigService::new(store)
        .load_or_default(SimSettings::KEY)
        .with_context(|| format!("reading {}", path.display()))
}

fn run(args: &RunArgs) -> Result<()> {
    let mut settings = load_settings(args.config.as_deref())?;
    args.apply_to(&mut settings);
    if !(settings.dt.is_finite() && settings.dt > 0.0) {
        bail!("--dt must be a positive number of seconds, got {}", settings.dt);
    }

    info!(
        scene = settings.scene.as_str(),
        steps = settings.steps,
        dt = settings.dt,
        "running scene"
    );
    let report = report::run(&settings)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_table());
    }
    Ok(())
}

fn init_config(dir: Option<&Path>, force: bool) -> Result<()> {
    let store = open_store(dir)?;
    let path = store.path_for(SimSettings::KEY);
    if !force && store.load_raw(SimSettings::KEY).is_ok() {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    ConfigService::new(store)
        .save(SimSettings::KEY, &SimSettings::default())
        .with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run(&args),
        Command::InitConfig { config, force } => init_config(config.as_deref(), force),
    }
}
