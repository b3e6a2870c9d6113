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

//! Reading host files
//!
//! Files opened through `std::fs` are close-on-exec on Unix, so no extra
//! descriptor setup is needed before spawning remote commands.

use std::path::Path;

use super::entry::{parse_host_line, HostSet, LineEntry, RangeMode, RejectedEntry};
use super::error::HostlistError;
use super::host::Defaults;

/// Maximum file size for a host file (1 MB)
const MAX_HOSTFILE_SIZE: u64 = 1024 * 1024;

/// Maximum number of lines in a host file
const MAX_HOSTFILE_LINES: usize = 100_000;

/// Parse the content of a host file
///
/// Every line goes through [`parse_host_line`]. Failing lines are recorded
/// with their 1-based line number and skipped.
pub fn parse_host_lines(content: &str, defaults: &Defaults, ranges: RangeMode) -> HostSet {
    collect_lines(content, None, defaults, ranges)
}

/// Read hosts from a file (one entry per line)
///
/// # Errors
///
/// Only file-level problems are errors: a missing or unreadable file, or one
/// above the resource limits (1 MB, 100,000 lines). Bad entries end up in
/// [`HostSet::rejected`].
pub fn read_host_file(
    path: &Path,
    defaults: &Defaults,
    ranges: RangeMode,
) -> Result<HostSet, HostlistError> {
    // Check file size before reading to prevent resource exhaustion
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HostlistError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            HostlistError::FileReadError {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        }
    })?;

    let file_size = metadata.len();
    if file_size > MAX_HOSTFILE_SIZE {
        return Err(HostlistError::FileReadError {
            path: path.display().to_string(),
            reason: format!(
                "file size {file_size} bytes exceeds maximum allowed size of {MAX_HOSTFILE_SIZE} bytes"
            ),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| HostlistError::FileReadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    if content.lines().count() > MAX_HOSTFILE_LINES {
        return Err(HostlistError::FileReadError {
            path: path.display().to_string(),
            reason: format!("file contains more than {MAX_HOSTFILE_LINES} lines (limit exceeded)"),
        });
    }

    let set = collect_lines(&content, Some(path), defaults, ranges);
    tracing::debug!("Read {} hosts from {}", set.len(), path.display());
    Ok(set)
}

/// Read several host files, concatenating their hosts in order
///
/// Stops at the first file that cannot be read.
pub fn read_host_files<P: AsRef<Path>>(
    paths: &[P],
    defaults: &Defaults,
    ranges: RangeMode,
) -> Result<HostSet, HostlistError> {
    let mut set = HostSet::default();
    for path in paths {
        set.extend(read_host_file(path.as_ref(), defaults, ranges)?);
    }
    Ok(set)
}

fn collect_lines(
    content: &str,
    path: Option<&Path>,
    defaults: &Defaults,
    ranges: RangeMode,
) -> HostSet {
    let mut set = HostSet::default();

    for (index, line) in content.lines().enumerate() {
        match parse_host_line(line, defaults, ranges) {
            Ok(LineEntry::Skip) => {}
            Ok(LineEntry::Hosts(hosts)) => set.hosts.extend(hosts),
            Err(error) => set.reject(RejectedEntry {
                path: path.map(Path::to_path_buf),
                line: Some(index + 1),
                error,
            }),
        }
    }

    set
}
