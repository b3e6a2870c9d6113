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

//! Command-line interface for hostspec
//!
//! `hostspec` resolves host files and host strings the way a parallel SSH
//! front end would and prints the resulting hosts, one `[user@]host[:port]`
//! per line. It is meant for checking host lists before a run and for
//! feeding other tools.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Environment variable holding the default remote user
pub const USER_ENV_VAR: &str = "HOSTSPEC_USER";

/// Environment variable holding the default remote port
pub const PORT_ENV_VAR: &str = "HOSTSPEC_PORT";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "hostspec",
    version,
    about = "Expand pssh-style host files and host strings",
    long_about = "Parses host files (one `[user@]host[:port] [user]` entry per line) and \
        host strings (whitespace-separated `[user@]host[[start:stop]][:port]` entries) \
        and prints one resolved host per line.",
    after_help = "EXAMPLES:\n  \
        hostspec -H \"web[01:04] db1\"              # Expand a range\n  \
        hostspec -f hosts.txt -l deploy -p 2222    # Host file with defaults\n  \
        hostspec -f hosts.txt --expand-file-ranges # Ranges inside host files\n  \
        hostspec -H \"a web[1:2]\" --ranged-first    # Classic pssh output order"
)]
pub struct Cli {
    /// Host file to read (can be repeated)
    #[arg(short = 'f', long = "hosts-file", value_name = "FILE")]
    pub hosts_files: Vec<PathBuf>,

    /// Whitespace-separated host entries (can be repeated)
    #[arg(short = 'H', long = "host", value_name = "HOST_STRING")]
    pub host_strings: Vec<String>,

    /// Default remote user for entries without one
    #[arg(short = 'l', long, env = USER_ENV_VAR)]
    pub user: Option<String>,

    /// Default remote port for entries without one
    #[arg(short = 'p', long, env = PORT_ENV_VAR)]
    pub port: Option<u16>,

    /// Configuration file (defaults to ~/.config/hostspec/config.yaml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Expand [start:stop] ranges in host files as well
    #[arg(long)]
    pub expand_file_ranges: bool,

    /// List all range entries of a host string before plain entries
    #[arg(long)]
    pub ranged_first: bool,

    /// Fail if any entry was rejected
    #[arg(long)]
    pub strict: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}
