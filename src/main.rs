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

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Write};

use hostspec::{
    cli::Cli,
    config::Config,
    query::{check_host_set, HostQuery},
    utils::init_logging,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = Config::load_with_priority(cli.config.as_deref())?;
    let query = HostQuery::from_cli(&cli, &config);
    let set = query.run()?;

    check_host_set(&set, cli.strict)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for host in &set.hosts {
        writeln!(out, "{host}").context("Failed to write host list")?;
    }
    out.flush().context("Failed to write host list")?;

    Ok(())
}
