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

//! Host specification parsing with pssh-style range expansion
//!
//! This module turns host files and inline host strings into
//! `(host, port, user)` triples for parallel remote execution.
//!
//! # Syntax
//!
//! - Single host: `[user@]host[:port]` -> the user splits off at the first
//!   `@`, the port at the last `:`
//! - Range: `web[1:3]` -> `web1, web2, web3` (both ends inclusive)
//! - Zero-padded range: `web[01:03]` -> `web01, web02, web03`
//! - Range with user, domain and port: `admin@web[1:2].example.com:22`
//! - Host file line: `[user@]host[:port] [user]`, with `#` comments and blank
//!   lines ignored
//!
//! Ranges are strictly increasing (`web[5:5]` is rejected), and a zero-padded
//! range must write both ends with the same number of digits (`web[01:003]`
//! is rejected as ambiguous).
//!
//! # Examples
//!
//! ```rust
//! use hostspec::hostlist::{parse_host_string, Defaults, TokenOrder};
//!
//! let defaults = Defaults::new(Some("deploy".to_string()), Some("22".to_string()));
//! let set = parse_host_string("root@db web[01:02]:2222", &defaults, TokenOrder::Input);
//!
//! let rendered: Vec<String> = set.hosts.iter().map(|h| h.to_string()).collect();
//! assert_eq!(rendered, vec!["root@db:22", "deploy@web01:2222", "deploy@web02:2222"]);
//! ```

mod entry;
mod error;
pub mod expander;
mod host;
mod hostfile;
mod range;

pub use entry::{
    parse_host_line, parse_host_string, HostSet, LineEntry, ParseOptions, RangeMode,
    RejectedEntry, TokenOrder,
};
pub use error::HostlistError;
pub use expander::{expand_range, expand_token};
pub use host::{parse_host, Defaults, HostToken, HostTriple};
pub use hostfile::{parse_host_lines, read_host_file, read_host_files};
pub use range::{RangeBounds, RangeSpec};

/// Check if a token carries a `[start:stop]` range
pub fn is_range_token(token: &str) -> bool {
    RangeSpec::find(token).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_range_token() {
        assert!(is_range_token("web[1:3]"));
        assert!(is_range_token("admin@web[01:10].lan:22"));
        assert!(is_range_token("web[:3]"));
        assert!(!is_range_token("web1"));
        assert!(!is_range_token("web[1-3]"));
        assert!(!is_range_token("[::1]"));
    }

    #[test]
    fn test_string_and_file_agree_on_plain_entries() {
        let defaults = Defaults::new(Some("alice".to_string()), Some("22".to_string()));
        let text = "web1 root@web2 web3:2200";

        let from_string = parse_host_string(text, &defaults, TokenOrder::Input);
        let from_lines = parse_host_lines(&text.replace(' ', "\n"), &defaults, RangeMode::Literal);

        assert_eq!(from_string.hosts, from_lines.hosts);
    }
}
