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

//! Host resolution from command-line arguments and configuration

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{expand_tilde, Config};
use crate::hostlist::{
    parse_host_string, read_host_files, Defaults, HostSet, ParseOptions, RangeMode, TokenOrder,
};

/// Everything needed to resolve the target hosts of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostQuery {
    pub defaults: Defaults,
    pub hosts_files: Vec<PathBuf>,
    pub host_strings: Vec<String>,
    pub options: ParseOptions,
}

impl HostQuery {
    /// Merge command-line arguments over the configuration.
    ///
    /// Host files from the configuration are only used when the command line
    /// names neither host files nor host strings.
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        let hosts_files = if cli.hosts_files.is_empty() && cli.host_strings.is_empty() {
            config.hosts_files.iter().map(|p| expand_tilde(p)).collect()
        } else {
            cli.hosts_files.clone()
        };

        let ranges = if cli.expand_file_ranges || config.expand_file_ranges {
            RangeMode::Expand
        } else {
            RangeMode::Literal
        };

        let order = if cli.ranged_first {
            TokenOrder::RangedFirst
        } else {
            config.order
        };

        Self {
            defaults: config.resolve_defaults(cli.user.as_deref(), cli.port),
            hosts_files,
            host_strings: cli.host_strings.clone(),
            options: ParseOptions::new(ranges, order),
        }
    }

    /// Resolve hosts: host files first, in order, then host strings.
    ///
    /// # Errors
    ///
    /// Fails only when a host file cannot be read. Rejected entries are
    /// reported in the returned set.
    pub fn run(&self) -> Result<HostSet> {
        let mut set = read_host_files(&self.hosts_files, &self.defaults, self.options.ranges)
            .context("Failed to load hosts from host files")?;

        for host_string in &self.host_strings {
            set.extend(parse_host_string(
                host_string,
                &self.defaults,
                self.options.order,
            ));
        }

        tracing::info!(
            "Resolved {} hosts ({} entries rejected)",
            set.len(),
            set.rejected.len()
        );

        Ok(set)
    }
}

/// Decide whether a resolved host set is usable for a run
///
/// # Errors
///
/// - under `strict`, when any entry was rejected
/// - when no host is left, with a distinct message if entries were given but
///   all of them were rejected
pub fn check_host_set(set: &HostSet, strict: bool) -> Result<()> {
    if strict && !set.is_clean() {
        anyhow::bail!(
            "{} host entries were rejected (see warnings above)",
            set.rejected.len()
        );
    }

    if set.is_empty() {
        if !set.is_clean() {
            anyhow::bail!(
                "All {} host entries were rejected (see warnings above)",
                set.rejected.len()
            );
        }
        anyhow::bail!(
            "No hosts specified. Please use one of the following options:\n  -f <file>     Read hosts from a host file\n  -H <hosts>    Specify whitespace-separated hosts (e.g., -H \"user@web[1:3] db\")"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["hostspec"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_from_cli_without_config() {
        let query = HostQuery::from_cli(
            &cli(&["-H", "web[1:2]", "-l", "root", "-p", "22"]),
            &Config::default(),
        );
        assert_eq!(query.defaults.user.as_deref(), Some("root"));
        assert_eq!(query.defaults.port.as_deref(), Some("22"));
        assert_eq!(query.options, ParseOptions::default());
        assert!(query.hosts_files.is_empty());
    }

    #[test]
    fn test_from_cli_uses_config_values() {
        let config = Config::from_yaml(
            "defaults:\n  user: deploy\nhosts_files:\n  - /etc/hosts.pssh\nexpand_file_ranges: true\norder: ranged-first\n",
        )
        .unwrap();

        let query = HostQuery::from_cli(&cli(&[]), &config);
        assert_eq!(query.defaults.user.as_deref(), Some("deploy"));
        assert_eq!(query.hosts_files, vec![PathBuf::from("/etc/hosts.pssh")]);
        assert_eq!(
            query.options,
            ParseOptions::new(RangeMode::Expand, TokenOrder::RangedFirst)
        );

        // Hosts on the command line replace the configured host files
        let query = HostQuery::from_cli(&cli(&["-H", "db"]), &config);
        assert!(query.hosts_files.is_empty());
    }

    #[test]
    fn test_run_host_strings() {
        let query = HostQuery::from_cli(
            &cli(&["-H", "b web[1:2]", "-H", "a", "--ranged-first"]),
            &Config::default(),
        );
        let set = query.run().unwrap();
        let names: Vec<&str> = set.hosts.iter().map(|h| h.host.as_str()).collect();
        assert_eq!(names, vec!["web1", "web2", "b", "a"]);
    }

    #[test]
    fn test_run_missing_host_file() {
        let query = HostQuery::from_cli(
            &cli(&["-f", "/nonexistent/hostspec/hosts"]),
            &Config::default(),
        );
        assert!(query.run().is_err());
    }

    #[test]
    fn test_run_reads_all_host_files_in_order() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let first = temp_dir.path().join("first");
        let second = temp_dir.path().join("second");
        std::fs::write(&first, "a1\na2\n").unwrap();
        std::fs::write(&second, "b1\n").unwrap();

        let query = HostQuery::from_cli(
            &cli(&[
                "-f",
                first.to_str().unwrap(),
                "-f",
                second.to_str().unwrap(),
                "-H",
                "c1",
            ]),
            &Config::default(),
        );
        let set = query.run().unwrap();
        let names: Vec<&str> = set.hosts.iter().map(|h| h.host.as_str()).collect();
        assert_eq!(names, vec!["a1", "a2", "b1", "c1"]);
    }

    fn resolve(args: &[&str]) -> HostSet {
        HostQuery::from_cli(&cli(args), &Config::default())
            .run()
            .unwrap()
    }

    #[test]
    fn test_check_host_set_accepts_clean_set() {
        let set = resolve(&["-H", "a web[1:2]"]);
        assert!(check_host_set(&set, false).is_ok());
        assert!(check_host_set(&set, true).is_ok());
    }

    #[test]
    fn test_check_host_set_strict_rejects_partial_set() {
        let set = resolve(&["-H", "a web[2:1]"]);
        assert_eq!(set.len(), 1);

        assert!(check_host_set(&set, false).is_ok());
        let err = check_host_set(&set, true).unwrap_err();
        assert!(err.to_string().contains("1 host entries were rejected"));
    }

    #[test]
    fn test_check_host_set_all_rejected() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("hosts");
        std::fs::write(&path, "x y z\n").unwrap();

        let set = resolve(&["-f", path.to_str().unwrap()]);
        assert!(set.is_empty());

        let err = check_host_set(&set, false).unwrap_err();
        assert!(err.to_string().starts_with("All 1 host entries were rejected"));
        assert!(!err.to_string().contains("No hosts specified"));
    }

    #[test]
    fn test_check_host_set_nothing_given() {
        let err = check_host_set(&HostSet::default(), false).unwrap_err();
        assert!(err.to_string().starts_with("No hosts specified"));
    }
}
