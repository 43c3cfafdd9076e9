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

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::traits::PortalStore;

/// The portal a path resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedPortal {
    /// The matched portal directory, `<location>/<portals_dir>/<name>`.
    pub dir: PathBuf,
    /// The lower-cased portal name used for the lookup.
    pub name: String,
    /// The path to route, still starting with the segment naming the portal.
    ///
    /// When the default portal was chosen because no named portal exists, the
    /// default portal's name has been prepended so the original first segment
    /// becomes the first in-portal segment.
    pub path: Vec<String>,
}

/// Finds the portal directory for a path across an ordered list of locations.
#[derive(Clone, Copy)]
pub struct PortalLocator<'a> {
    store: &'a dyn PortalStore,
    portals_dir: &'a str,
    default_portal: &'a str,
}

impl std::fmt::Debug for PortalLocator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalLocator")
            .field("portals_dir", &self.portals_dir)
            .field("default_portal", &self.default_portal)
            .finish_non_exhaustive()
    }
}

impl<'a> PortalLocator<'a> {
    /// Creates a locator searching `<location>/<portals_dir>/<name>` on `store`.
    #[must_use]
    pub const fn new(store: &'a dyn PortalStore, portals_dir: &'a str, default_portal: &'a str) -> Self {
        Self {
            store,
            portals_dir,
            default_portal,
        }
    }

    /// Resolves `path` against `locations`.
    ///
    /// The first segment, lower-cased, names the candidate portal (an empty path
    /// names the default portal). Locations are searched in order and the first
    /// hit wins. If no location has the candidate, the search is repeated for the
    /// default portal and, on a hit, the default portal's name is prepended to the
    /// path. Returns `None` when neither search succeeds.
    #[must_use]
    pub fn locate(&self, path: &[String], locations: &[PathBuf]) -> Option<LocatedPortal> {
        let name = path
            .first()
            .map_or_else(|| self.default_portal.to_string(), |segment| segment.to_lowercase());

        if let Some(dir) = self.find(&name, locations) {
            trace!(portal = %name, dir = %dir.display(), "Matched named portal");
            return Some(LocatedPortal {
                dir,
                name,
                path: path.to_vec(),
            });
        }

        let dir = self.find(self.default_portal, locations)?;
        trace!(requested = %name, dir = %dir.display(), "Falling back to the default portal");
        let mut rewritten = Vec::with_capacity(path.len() + 1);
        rewritten.push(self.default_portal.to_string());
        rewritten.extend_from_slice(path);
        Some(LocatedPortal {
            dir,
            name: self.default_portal.to_string(),
            path: rewritten,
        })
    }

    /// The directory the portal `name` would occupy in `location`.
    #[must_use]
    pub fn portal_dir(&self, location: &Path, name: &str) -> PathBuf {
        location.join(self.portals_dir).join(name)
    }

    fn find(&self, name: &str, locations: &[PathBuf]) -> Option<PathBuf> {
        locations
            .iter()
            .map(|location| self.portal_dir(location, name))
            .find(|dir| self.store.is_dir(dir))
    }
}
