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

//! Configuration utility functions.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Expand tilde (~) in path to home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if path_str.starts_with("~/") {
            if let Ok(home) = std::env::var("HOME") {
                return PathBuf::from(path_str.replacen('~', &home, 1));
            }
        }
    }
    path.to_path_buf()
}

/// Default configuration file location
/// (`$XDG_CONFIG_HOME/hostspec/config.yaml` on Linux).
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "hostspec").map(|dirs| dirs.config_dir().join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        let path = Path::new("/etc/hostspec/hosts");
        assert_eq!(expand_tilde(path), path.to_path_buf());

        let path = Path::new("relative/~/hosts");
        assert_eq!(expand_tilde(path), path.to_path_buf());
    }

    #[test]
    fn test_expand_tilde_uses_home() {
        if let Ok(home) = std::env::var("HOME") {
            assert_eq!(
                expand_tilde(Path::new("~/hosts")),
                PathBuf::from(format!("{home}/hosts"))
            );
        }
    }

    #[test]
    fn test_default_config_path_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("config.yaml"));
        }
    }
}
