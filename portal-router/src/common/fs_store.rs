/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::traits::PortalStore;

/// A [`PortalStore`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl PortalStore for FsStore {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dirs(&self, path: &Path) -> Vec<PathBuf> {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                trace!(path = %path.display(), error = %e, "Cannot list directory");
                return Vec::new();
            }
        };
        let mut dirs: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|p| p.is_dir())
            .collect();
        dirs.sort();
        dirs
    }
}

/// Splits a URL path into its non-empty segments.
///
/// ```rust
/// use portal_router::prelude::path_segments;
///
/// assert_eq!(path_segments("/blog//post/1/"), vec!["blog", "post", "1"]);
/// ```
#[must_use]
pub fn path_segments(url: &str) -> Vec<String> {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
