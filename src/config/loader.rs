// Copyright 2025 Lablup Inc. and Jeongkyu Shin
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

//! Configuration loading and priority management.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::Config;
use super::utils::{default_config_path, expand_tilde};
use crate::hostlist;

impl Config {
    /// Load configuration from a file.
    ///
    /// A missing file is not an error and yields the default configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let expanded_path = expand_tilde(path);

        if !expanded_path.exists() {
            tracing::debug!(
                "Config file not found at {:?}, using defaults",
                expanded_path
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&expanded_path).with_context(|| {
            format!(
                "Failed to read configuration file at {}",
                expanded_path.display()
            )
        })?;

        Self::from_yaml(&content).with_context(|| {
            format!(
                "Failed to parse YAML configuration file at {}",
                expanded_path.display()
            )
        })
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration with priority order:
    /// 1. Explicit --config path, which must exist
    /// 2. Default path (`~/.config/hostspec/config.yaml` on Linux), if present
    /// 3. Built-in defaults
    pub fn load_with_priority(cli_config_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = cli_config_path {
            let expanded_path = expand_tilde(path);
            if !expanded_path.exists() {
                anyhow::bail!("Config file not found: {:?}", expanded_path);
            }
            tracing::debug!("Using explicitly specified config file: {:?}", expanded_path);
            return Self::load(&expanded_path);
        }

        match default_config_path() {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("No configuration directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Build parser defaults, with command-line values taking precedence.
    pub fn resolve_defaults(
        &self,
        cli_user: Option<&str>,
        cli_port: Option<u16>,
    ) -> hostlist::Defaults {
        let user = cli_user
            .map(str::to_string)
            .or_else(|| self.defaults.user.clone());
        let port = cli_port.or(self.defaults.port).map(|p| p.to_string());
        hostlist::Defaults::new(user, port)
    }
}
