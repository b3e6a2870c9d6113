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

//! Host file lines and whitespace-delimited host strings
//!
//! Both entry points collect [`HostTriple`]s from several entries. A failing
//! entry never aborts the whole parse: it is logged, recorded in
//! [`HostSet::rejected`] and skipped. Whether an empty or partially rejected
//! result is fatal is left to the caller.

use std::borrow::Cow;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::HostlistError;
use super::expander::expand_range;
use super::host::{resolve_non_empty, Defaults, HostToken, HostTriple};
use super::is_range_token;

/// Whether range tokens on host file lines are expanded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    /// Take the host field literally, brackets included
    #[default]
    Literal,
    /// Expand `[start:stop]` ranges like host strings do
    Expand,
}

/// Output order of [`parse_host_string`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenOrder {
    /// Results follow the order of the tokens in the input
    #[default]
    Input,
    /// All range tokens first, then all plain tokens, as classic pssh does
    RangedFirst,
}

/// How host files and host strings are parsed for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Range handling on host file lines
    pub ranges: RangeMode,
    /// Output order of host strings
    pub order: TokenOrder,
}

impl ParseOptions {
    pub fn new(ranges: RangeMode, order: TokenOrder) -> Self {
        Self { ranges, order }
    }
}

/// Outcome of parsing a single host file line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEntry {
    /// Blank or comment line
    Skip,
    /// Hosts described by the line
    Hosts(Vec<HostTriple>),
}

/// An entry that was dropped, with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    /// Host file the entry was read from
    pub path: Option<PathBuf>,
    /// 1-based line number for host file entries
    pub line: Option<usize>,
    pub error: HostlistError,
}

/// Hosts collected from several entries plus the entries that were rejected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSet {
    pub hosts: Vec<HostTriple>,
    pub rejected: Vec<RejectedEntry>,
}

impl HostSet {
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    /// Whether every entry parsed cleanly
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Append another set, keeping its order after ours
    pub fn extend(&mut self, other: HostSet) {
        self.hosts.extend(other.hosts);
        self.rejected.extend(other.rejected);
    }

    pub(crate) fn reject(&mut self, entry: RejectedEntry) {
        match (&entry.path, entry.line) {
            (Some(path), Some(line)) => {
                tracing::warn!("{}:{}: {}", path.display(), line, entry.error);
            }
            (None, Some(line)) => tracing::warn!("line {}: {}", line, entry.error),
            _ => tracing::warn!("{}", entry.error),
        }
        self.rejected.push(entry);
    }
}

/// Parse one host file line
///
/// Lines look like `[user@]host[:port] [user]`. Blank lines and lines whose
/// first non-blank character is `#` yield [`LineEntry::Skip`]. With
/// [`RangeMode::Expand`] the host field may also carry a `[start:stop]` range;
/// a trailing user then applies to every expanded host.
///
/// # Errors
///
/// - [`HostlistError::MalformedLine`] for more than two fields
/// - [`HostlistError::DuplicateUser`] when the host field has `user@` and a
///   trailing user is given too
/// - [`HostlistError::EmptyHost`] when a resulting hostname is empty
/// - range errors from expansion in [`RangeMode::Expand`]
///
/// # Examples
///
/// ```rust
/// use hostspec::hostlist::{parse_host_line, Defaults, LineEntry, RangeMode};
///
/// let entry = parse_host_line("web1:2222 deploy", &Defaults::default(), RangeMode::Literal).unwrap();
/// let LineEntry::Hosts(hosts) = entry else { panic!("expected hosts") };
/// assert_eq!(hosts[0].to_string(), "deploy@web1:2222");
/// ```
pub fn parse_host_line(
    line: &str,
    defaults: &Defaults,
    ranges: RangeMode,
) -> Result<LineEntry, HostlistError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(LineEntry::Skip);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    let (host_field, trailing_user) = match fields.as_slice() {
        [host] => (*host, None),
        [host, user] => (*host, Some(*user)),
        _ => {
            return Err(HostlistError::MalformedLine {
                line: line.to_string(),
            })
        }
    };

    let defaults = match trailing_user {
        Some(_) if HostToken::parse(host_field).user.is_some() => {
            return Err(HostlistError::DuplicateUser {
                line: line.to_string(),
            });
        }
        Some(user) => Cow::Owned(Defaults::new(Some(user.to_string()), defaults.port.clone())),
        None => Cow::Borrowed(defaults),
    };

    let hosts = match ranges {
        RangeMode::Literal => vec![resolve_non_empty(host_field, &defaults)?],
        RangeMode::Expand => expand_range(host_field, &defaults)?,
    };

    Ok(LineEntry::Hosts(hosts))
}

/// Parse a whitespace-delimited string of `[user@]host[[start:stop]][:port]` entries
///
/// Range tokens are expanded, other tokens are parsed as single hosts. Tokens
/// that fail are logged and reported in [`HostSet::rejected`]; the rest are
/// still returned.
///
/// # Examples
///
/// ```rust
/// use hostspec::hostlist::{parse_host_string, Defaults, TokenOrder};
///
/// let set = parse_host_string("db web[1:2]", &Defaults::default(), TokenOrder::Input);
/// let names: Vec<_> = set.hosts.iter().map(|h| h.host.as_str()).collect();
/// assert_eq!(names, vec!["db", "web1", "web2"]);
///
/// let set = parse_host_string("db web[1:2]", &Defaults::default(), TokenOrder::RangedFirst);
/// let names: Vec<_> = set.hosts.iter().map(|h| h.host.as_str()).collect();
/// assert_eq!(names, vec!["web1", "web2", "db"]);
/// ```
pub fn parse_host_string(text: &str, defaults: &Defaults, order: TokenOrder) -> HostSet {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut set = HostSet::default();

    match order {
        TokenOrder::Input => {
            for token in &tokens {
                collect_token(&mut set, token, defaults);
            }
        }
        TokenOrder::RangedFirst => {
            let (ranged, plain): (Vec<&str>, Vec<&str>) = tokens
                .iter()
                .partition(|token| is_range_token(token));
            for token in ranged.iter().chain(&plain) {
                collect_token(&mut set, token, defaults);
            }
        }
    }

    tracing::debug!(
        "Parsed {} hosts from {} entries ({} rejected)",
        set.hosts.len(),
        tokens.len(),
        set.rejected.len()
    );

    set
}

fn collect_token(set: &mut HostSet, token: &str, defaults: &Defaults) {
    match expand_range(token, defaults) {
        Ok(hosts) => set.hosts.extend(hosts),
        Err(error) => set.reject(RejectedEntry {
            path: None,
            line: None,
            error,
        }),
    }
}
