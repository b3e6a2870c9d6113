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

//! Detection of `prefix[start:stop]suffix` range tokens
//!
//! This module locates the bracketed range of a host token and validates its
//! endpoints. Generating hostnames from a validated range lives in
//! [`super::expander`].

use super::error::HostlistError;

/// The pieces of a range token, borrowed from the token itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec<'a> {
    /// Text before the opening bracket (may include `user@`)
    pub prefix: &'a str,
    /// Literal digits left of the colon
    pub start: &'a str,
    /// Literal digits right of the colon
    pub stop: &'a str,
    /// Text after the closing bracket (may include `:port`)
    pub suffix: &'a str,
}

/// Validated numeric bounds of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBounds {
    pub start: u64,
    pub stop: u64,
    /// Zero-padding width, 0 when no endpoint has a leading zero
    pub width: usize,
}

impl<'a> RangeSpec<'a> {
    /// Locate the range of a token, if it has one
    ///
    /// The opening bracket is the rightmost `[` with at least one character
    /// before the last `]`, and the range is everything between the two. It is
    /// only a range when that content holds exactly one `:`, so `node[5]` and
    /// `[::1]` are not range tokens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hostspec::hostlist::RangeSpec;
    ///
    /// let spec = RangeSpec::find("admin@web[01:10].lan:22").unwrap();
    /// assert_eq!(spec.prefix, "admin@web");
    /// assert_eq!((spec.start, spec.stop), ("01", "10"));
    /// assert_eq!(spec.suffix, ".lan:22");
    /// assert!(RangeSpec::find("web1:22").is_none());
    /// ```
    pub fn find(token: &'a str) -> Option<Self> {
        let close = token.rfind(']')?;
        // '[' is ASCII, so it never occurs inside a multi-byte character
        let open = token
            .as_bytes()
            .get(..close.checked_sub(1)?)?
            .iter()
            .rposition(|&b| b == b'[')?;

        let content = &token[open + 1..close];
        if content.matches(':').count() != 1 {
            return None;
        }
        let (start, stop) = content.split_once(':')?;

        Some(Self {
            prefix: &token[..open],
            start,
            stop,
            suffix: &token[close + 1..],
        })
    }

    /// Whether both endpoints are present
    ///
    /// Ranges such as `[:3]` or `[1:]` are passed through unexpanded.
    pub fn is_complete(&self) -> bool {
        !self.start.is_empty() && !self.stop.is_empty()
    }

    /// Parse and validate the endpoints
    ///
    /// `expression` is the whole token and only used for error reporting.
    pub fn bounds(&self, expression: &str) -> Result<RangeBounds, HostlistError> {
        let start = parse_number(self.start, expression)?;
        let stop = parse_number(self.stop, expression)?;

        let width = if self.start.starts_with('0') || self.stop.starts_with('0') {
            self.start.len().max(self.stop.len())
        } else {
            0
        };

        if start >= stop {
            return Err(HostlistError::InvalidRange {
                expression: expression.to_string(),
                start: self.start.to_string(),
                stop: self.stop.to_string(),
            });
        }

        if width > 0 && self.start.len() != self.stop.len() {
            return Err(HostlistError::AmbiguousPadding {
                expression: expression.to_string(),
                start: self.start.to_string(),
                stop: self.stop.to_string(),
            });
        }

        Ok(RangeBounds { start, stop, width })
    }
}

impl RangeBounds {
    /// Number of values in the range, saturating at `u64::MAX`
    pub fn count(&self) -> u64 {
        (self.stop - self.start).saturating_add(1)
    }

    /// Format a value with the range's padding
    pub fn format_value(&self, value: u64) -> String {
        if self.width > 0 {
            format!("{:0>width$}", value, width = self.width)
        } else {
            value.to_string()
        }
    }
}

/// Parse a range endpoint as a non-negative decimal integer
fn parse_number(s: &str, expression: &str) -> Result<u64, HostlistError> {
    let invalid = || HostlistError::InvalidNumber {
        expression: expression.to_string(),
        value: s.to_string(),
    };

    if !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    s.parse().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_simple_range() {
        let spec = RangeSpec::find("web[1:3]").unwrap();
        assert_eq!(
            spec,
            RangeSpec {
                prefix: "web",
                start: "1",
                stop: "3",
                suffix: "",
            }
        );
    }

    #[test]
    fn test_find_with_user_and_port() {
        let spec = RangeSpec::find("root@db[1:2].example.com:2222").unwrap();
        assert_eq!(spec.prefix, "root@db");
        assert_eq!(spec.suffix, ".example.com:2222");
    }

    #[test]
    fn test_find_uses_last_bracket_pair() {
        let spec = RangeSpec::find("rack[1:2]-node[3:4]").unwrap();
        assert_eq!(spec.prefix, "rack[1:2]-node");
        assert_eq!((spec.start, spec.stop), ("3", "4"));
    }

    #[test]
    fn test_find_skips_empty_trailing_brackets() {
        // "[]" has no content, so the earlier '[' opens the range
        let spec = RangeSpec::find("a[1:2][]").unwrap();
        assert_eq!(spec.prefix, "a");
        assert_eq!(spec.start, "1");
        assert_eq!(spec.stop, "2][");
    }

    #[test]
    fn test_find_non_range_tokens() {
        assert!(RangeSpec::find("simple.host.com").is_none());
        assert!(RangeSpec::find("host:22").is_none());
        assert!(RangeSpec::find("node[5]").is_none());
        assert!(RangeSpec::find("[::1]:22").is_none());
        assert!(RangeSpec::find("node[]").is_none());
        assert!(RangeSpec::find("node]1:2[").is_none());
    }

    #[test]
    fn test_incomplete_range() {
        assert!(!RangeSpec::find("web[:3]").unwrap().is_complete());
        assert!(!RangeSpec::find("web[1:]").unwrap().is_complete());
        assert!(RangeSpec::find("web[1:3]").unwrap().is_complete());
    }

    #[test]
    fn test_bounds_without_padding() {
        let bounds = RangeSpec::find("web[1:3]").unwrap().bounds("web[1:3]").unwrap();
        assert_eq!(
            bounds,
            RangeBounds {
                start: 1,
                stop: 3,
                width: 0
            }
        );
        assert_eq!(bounds.count(), 3);
    }

    #[test]
    fn test_bounds_zero_padded() {
        let bounds = RangeSpec::find("web[01:10]").unwrap().bounds("web[01:10]").unwrap();
        assert_eq!(bounds.width, 2);
        assert_eq!(bounds.format_value(1), "01");
        assert_eq!(bounds.format_value(10), "10");
    }

    #[test]
    fn test_bounds_single_zero_start() {
        let bounds = RangeSpec::find("n[0:9]").unwrap().bounds("n[0:9]").unwrap();
        assert_eq!(bounds.width, 1);
        assert_eq!(bounds.format_value(7), "7");

        // "0" counts as a leading zero, so differing lengths are ambiguous
        let result = RangeSpec::find("n[0:10]").unwrap().bounds("n[0:10]");
        assert!(matches!(
            result,
            Err(HostlistError::AmbiguousPadding { .. })
        ));
    }

    #[test]
    fn test_bounds_invalid_range() {
        for expr in ["web[5:5]", "web[9:2]"] {
            let result = RangeSpec::find(expr).unwrap().bounds(expr);
            assert!(matches!(result, Err(HostlistError::InvalidRange { .. })));
        }
    }

    #[test]
    fn test_bounds_ambiguous_padding() {
        let result = RangeSpec::find("web[01:003]").unwrap().bounds("web[01:003]");
        assert!(matches!(
            result,
            Err(HostlistError::AmbiguousPadding { .. })
        ));
    }

    #[test]
    fn test_invalid_range_checked_before_padding() {
        let result = RangeSpec::find("web[010:02]").unwrap().bounds("web[010:02]");
        assert!(matches!(result, Err(HostlistError::InvalidRange { .. })));
    }

    #[test]
    fn test_bounds_invalid_number() {
        for expr in ["web[a:z]", "web[-1:3]", "web[1:99999999999999999999999]"] {
            let result = RangeSpec::find(expr).unwrap().bounds(expr);
            assert!(
                matches!(result, Err(HostlistError::InvalidNumber { .. })),
                "{expr}"
            );
        }
    }

    #[test]
    fn test_count_saturates() {
        let bounds = RangeBounds {
            start: 0,
            stop: u64::MAX,
            width: 0,
        };
        assert_eq!(bounds.count(), u64::MAX);
    }
}
