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

/// The namespace-style identity of a portal.
///
/// Derived from a portal-relative path by treating each path separator as a
/// namespace separator under a fixed root: `blog/admin` under root `Portals`
/// becomes `Portals::blog::admin`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeIdentity {
    segments: Vec<String>,
}

impl TypeIdentity {
    /// Separator used when rendering the identity.
    pub const SEPARATOR: &'static str = "::";

    /// Builds the identity of the portal at `portal_path` under `root`.
    #[must_use]
    pub fn for_portal(root: &str, portal_path: &str) -> Self {
        let segments = std::iter::once(root)
            .chain(portal_path.split('/').filter(|s| !s.is_empty()))
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    /// The namespace segments, root first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(Self::SEPARATOR))
    }
}
