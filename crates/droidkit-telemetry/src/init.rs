// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Installation of the logging backend behind the sinks.
//!
//! A process gets one backend: either `env_logger` or a `tracing`
//! subscriber. The subscriber also captures `log` records, so it needs the
//! `log` facade to be free as well.

use crate::gate::LogGate;
use crate::sink::Priority;
use anyhow::{anyhow, Context, Result};
use droidkit_core::ToolkitConfig;

/// Installs `env_logger` as the `log` backend.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init_env_logger(default_filter: &str) -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or(default_filter))
        .try_init()
        .context("A logger is already installed")
}

/// Installs a `tracing` fmt subscriber emitting `max_priority` and above.
///
/// Fails if a `log` logger or a `tracing` subscriber is already installed.
pub fn init_tracing(max_priority: Priority) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(max_priority.as_tracing_level())
        .try_init()
        .map_err(|e| anyhow!("A logging backend is already installed: {e}"))
}

/// Installs `env_logger` with the configured filter and initializes the
/// global [`LogGate`] from `config`.
pub fn init_from_config(config: &ToolkitConfig) -> Result<()> {
    init_env_logger(&config.log_filter)?;
    if !LogGate::global().initialize_from(config) {
        log::warn!("Global log gate was initialized before configuration was loaded");
    }
    Ok(())
}
