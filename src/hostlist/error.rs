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

//! Error types for host entry parsing and range expansion

use thiserror::Error;

/// Errors that can occur while parsing host entries, expanding ranges or
/// reading host files
///
/// Entry-level errors (everything except the file variants) are recoverable:
/// the offending entry is dropped and parsing of the remaining entries goes on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostlistError {
    /// A host file line with more than two whitespace-separated fields
    #[error("bad line '{line}': format should be [user@]host[[start:stop]][:port] [user]")]
    MalformedLine { line: String },

    /// User given both as `user@host` and as a trailing field
    #[error("user specified twice in line '{line}'")]
    DuplicateUser { line: String },

    /// Range whose start is not strictly below its stop (e.g., `web[5:5]`)
    #[error("index range [{start}:{stop}] in '{expression}' is not valid (start must be < stop)")]
    InvalidRange {
        expression: String,
        start: String,
        stop: String,
    },

    /// Zero-padded range whose endpoints have differing digit counts
    #[error("leading zeros in range [{start}:{stop}] of '{expression}' are ambiguous")]
    AmbiguousPadding {
        expression: String,
        start: String,
        stop: String,
    },

    /// Range endpoint that is not a non-negative decimal integer
    #[error("invalid number '{value}' in range expression '{expression}'")]
    InvalidNumber { expression: String, value: String },

    /// Range produces too many hosts
    #[error(
        "range expansion would produce {count} hosts, exceeding limit of {limit} in '{expression}'"
    )]
    RangeTooLarge {
        expression: String,
        count: u64,
        limit: usize,
    },

    /// Entry that resolves to an empty hostname (e.g., `admin@` or `:22`)
    #[error("entry '{entry}' has an empty hostname")]
    EmptyHost { entry: String },

    /// Host file does not exist
    #[error("hostfile not found: {path}")]
    FileNotFound { path: String },

    /// Error reading host file
    #[error("failed to read hostfile '{path}': {reason}")]
    FileReadError { path: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HostlistError::MalformedLine {
            line: "host user1 user2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "bad line 'host user1 user2': format should be [user@]host[[start:stop]][:port] [user]"
        );

        let err = HostlistError::InvalidRange {
            expression: "web[9:2]".to_string(),
            start: "9".to_string(),
            stop: "2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "index range [9:2] in 'web[9:2]' is not valid (start must be < stop)"
        );

        let err = HostlistError::DuplicateUser {
            line: "user@host otheruser".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "user specified twice in line 'user@host otheruser'"
        );
    }
}
