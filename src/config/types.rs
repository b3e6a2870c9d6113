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

//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::hostlist::TokenOrder;

/// Main configuration structure.
///
/// ```yaml
/// defaults:
///   user: deploy
///   port: 2222
/// hosts_files:
///   - ~/.config/hostspec/hosts
/// expand_file_ranges: true
/// order: ranged-first
/// ```
///
/// Unknown keys are rejected so that a misspelled setting is reported
/// instead of silently ignored.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Host files read when none are given on the command line.
    #[serde(default)]
    pub hosts_files: Vec<PathBuf>,

    /// Expand `[start:stop]` ranges on host file lines too.
    #[serde(default)]
    pub expand_file_ranges: bool,

    /// Output order for host strings.
    #[serde(default)]
    pub order: TokenOrder,
}

/// Default user and port from the `defaults` section.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    pub user: Option<String>,
    pub port: Option<u16>,
}
