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

//! Single `[user@]host[:port]` entries

use std::fmt;

use super::error::HostlistError;

/// Fallback user and port applied when an entry omits them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defaults {
    pub user: Option<String>,
    pub port: Option<String>,
}

impl Defaults {
    pub fn new(user: Option<String>, port: Option<String>) -> Self {
        Self { user, port }
    }
}

/// A resolved `(host, port, user)` triple ready for connection dispatch
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostTriple {
    pub host: String,
    pub port: Option<String>,
    pub user: Option<String>,
}

impl HostTriple {
    pub fn new(host: impl Into<String>, port: Option<String>, user: Option<String>) -> Self {
        Self {
            host: host.into(),
            port,
            user,
        }
    }
}

impl fmt::Display for HostTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref user) = self.user {
            write!(f, "{user}@")?;
        }
        write!(f, "{}", self.host)?;
        if let Some(ref port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

/// The raw fields of a host token before defaults are applied
///
/// `user` is `Some` whenever the token contains `@`, even if the part before
/// it is empty. The line parser relies on this to detect a user given twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostToken<'a> {
    pub user: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<&'a str>,
}

impl<'a> HostToken<'a> {
    /// Split a token on the first `@` and then on the last `:`
    pub fn parse(token: &'a str) -> Self {
        let (user, rest) = match token.split_once('@') {
            Some((user, rest)) => (Some(user), rest),
            None => (None, token),
        };

        let (host, port) = match rest.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (rest, None),
        };

        Self { user, host, port }
    }

    /// Apply defaults for absent or empty fields
    pub fn resolve(&self, defaults: &Defaults) -> HostTriple {
        HostTriple {
            host: self.host.to_string(),
            port: non_empty(self.port).or_else(|| defaults.port.clone()),
            user: non_empty(self.user).or_else(|| defaults.user.clone()),
        }
    }
}

fn non_empty(field: Option<&str>) -> Option<String> {
    field.filter(|s| !s.is_empty()).map(str::to_string)
}

/// Parse a `[user@]host[:port]` token into a triple
///
/// Any string is accepted. A token such as `admin@` yields an empty host,
/// which callers collecting results are expected to reject.
///
/// # Examples
///
/// ```rust
/// use hostspec::hostlist::{parse_host, Defaults};
///
/// let triple = parse_host("admin@web1:2222", &Defaults::default());
/// assert_eq!(triple.host, "web1");
/// assert_eq!(triple.port.as_deref(), Some("2222"));
/// assert_eq!(triple.user.as_deref(), Some("admin"));
/// ```
pub fn parse_host(token: &str, defaults: &Defaults) -> HostTriple {
    HostToken::parse(token).resolve(defaults)
}

/// Like [`parse_host`], but an empty hostname is an error
pub(crate) fn resolve_non_empty(
    token: &str,
    defaults: &Defaults,
) -> Result<HostTriple, HostlistError> {
    let triple = parse_host(token, defaults);
    if triple.host.is_empty() {
        return Err(HostlistError::EmptyHost {
            entry: token.to_string(),
        });
    }
    Ok(triple)
}
