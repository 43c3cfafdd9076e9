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

/// A diagnostics snapshot of every portal in every location.
///
/// Produced by [`PortalBundle::portal_listing`](crate::common::PortalBundle::portal_listing)
/// for logging and inspection. `Display` renders a plain-text panel with the
/// current portal in brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalListing {
    /// One entry per location, in search order.
    pub locations: Vec<LocationListing>,
}

/// The portals found in one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationListing {
    /// The location searched.
    pub location: PathBuf,
    /// The portals under the location, sorted by name.
    pub portals: Vec<PortalEntry>,
}

/// One portal in a [`LocationListing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalEntry {
    /// The portal's directory name.
    pub name: String,
    /// Whether this is the portal the request is currently routed to.
    pub current: bool,
}

impl PortalListing {
    /// The entry for the current portal, if it is in one of the listed locations.
    #[must_use]
    pub fn current(&self) -> Option<(&Path, &PortalEntry)> {
        self.locations.iter().find_map(|listing| {
            listing
                .portals
                .iter()
                .find(|entry| entry.current)
                .map(|entry| (listing.location.as_path(), entry))
        })
    }
}

impl fmt::Display for PortalListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Portal Locations")?;
        for listing in &self.locations {
            write!(f, "  {}", listing.location.display())?;
            let names: Vec<String> = listing
                .portals
                .iter()
                .map(|entry| {
                    if entry.current {
                        format!("[{}]", entry.name)
                    } else {
                        entry.name.clone()
                    }
                })
                .collect();
            if !names.is_empty() {
                write!(f, ": {}", names.join(" \u{2022} "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
