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

/// The ordered list of base directories portals are searched in.
///
/// Order is search priority: the first location holding a portal wins.
/// Locations are only ever appended during normal operation; [`prepend`](Self::prepend)
/// exists for the single pre-site hook point where a collaborator may put a
/// location ahead of the configured ones.
///
/// Appending does not deduplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSet {
    locations: Vec<PathBuf>,
}

impl LocationSet {
    /// Creates an empty location set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            locations: Vec::new(),
        }
    }

    /// Appends `location` at the lowest priority.
    pub fn append(&mut self, location: impl Into<PathBuf>) {
        self.locations.push(location.into());
    }

    /// Inserts `location` at the highest priority.
    pub fn prepend(&mut self, location: impl Into<PathBuf>) {
        self.locations.insert(0, location.into());
    }

    /// Returns `true` if `location` is already in the set.
    #[must_use]
    pub fn contains(&self, location: &Path) -> bool {
        self.locations.iter().any(|l| l == location)
    }

    /// The locations in search order.
    #[must_use]
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.locations
    }

    /// Iterates the locations in search order.
    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.locations.iter()
    }

    /// Number of locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if there are no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for LocationSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            locations: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LocationSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.iter()
    }
}
