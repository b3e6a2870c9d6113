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

//! Range expansion implementation
//!
//! This module turns a `prefix[start:stop]suffix` token into one concrete
//! token per integer of the range and resolves each into a [`HostTriple`].

use super::error::HostlistError;
use super::host::{resolve_non_empty, Defaults, HostTriple};
use super::range::RangeSpec;

/// Maximum number of hosts that can be generated from a single token
pub const MAX_EXPANSION_SIZE: usize = 100_000;

/// Expand a token into the concrete tokens it stands for
///
/// Tokens without a range, and ranges missing an endpoint, come back
/// unchanged as a single element.
///
/// # Examples
///
/// ```rust
/// use hostspec::hostlist::expander::expand_token;
///
/// let tokens = expand_token("web[08:10]:22").unwrap();
/// assert_eq!(tokens, vec!["web08:22", "web09:22", "web10:22"]);
/// ```
pub fn expand_token(token: &str) -> Result<Vec<String>, HostlistError> {
    let spec = match RangeSpec::find(token) {
        Some(spec) if spec.is_complete() => spec,
        _ => return Ok(vec![token.to_string()]),
    };

    let bounds = spec.bounds(token)?;

    let count = bounds.count();
    if count > MAX_EXPANSION_SIZE as u64 {
        return Err(HostlistError::RangeTooLarge {
            expression: token.to_string(),
            count,
            limit: MAX_EXPANSION_SIZE,
        });
    }

    let tokens = (bounds.start..=bounds.stop)
        .map(|value| format!("{}{}{}", spec.prefix, bounds.format_value(value), spec.suffix))
        .collect();

    Ok(tokens)
}

/// Expand a range token into host triples
///
/// Each generated token goes through [`parse_host`](super::parse_host) with
/// the same defaults. The triples come back in ascending numeric order, both
/// endpoints included.
///
/// # Errors
///
/// Range errors from [`expand_token`], and [`HostlistError::EmptyHost`] when
/// a generated entry has no hostname, as with `:[1:2]`.
///
/// # Examples
///
/// ```rust
/// use hostspec::hostlist::{expand_range, Defaults};
///
/// let hosts = expand_range("web[1:3]", &Defaults::default()).unwrap();
/// let names: Vec<_> = hosts.iter().map(|h| h.host.as_str()).collect();
/// assert_eq!(names, vec!["web1", "web2", "web3"]);
/// ```
pub fn expand_range(token: &str, defaults: &Defaults) -> Result<Vec<HostTriple>, HostlistError> {
    expand_token(token)?
        .iter()
        .map(|expanded| resolve_non_empty(expanded, defaults))
        .collect()
}
