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
use std::fmt;
use std::path::{Path, PathBuf};

/// The allow-list scope a portal is dispatched under.
///
/// Renders as `allow:<portal_dir>/<manifest>`, for example
/// `allow:/app/portals/blog/portal.yaml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionScope {
    manifest: PathBuf,
}

impl PermissionScope {
    /// Creates the scope for `portal_dir`, keyed by its `manifest_file`.
    pub fn allow(portal_dir: &Path, manifest_file: &str) -> Self {
        Self {
            manifest: portal_dir.join(manifest_file),
        }
    }

    /// The manifest file the allow-list is read from.
    #[must_use]
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }
}

impl fmt::Display for PermissionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "allow:{}", self.manifest.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_allow_prefix() {
        let scope = PermissionScope::allow(Path::new("/app/portals/blog"), "portal.yaml");
        assert_eq!(scope.to_string(), "allow:/app/portals/blog/portal.yaml");
        assert_eq!(scope.manifest(), Path::new("/app/portals/blog/portal.yaml"));
    }
}
