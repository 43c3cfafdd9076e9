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

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::common::RouteOrder;

/// Configuration for the portal router
///
/// This struct contains all configurable values for portal resolution,
/// loaded from TOML files in XDG-compliant directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PortalConfig {
    /// Naming conventions used while resolving portals
    pub defaults: DefaultsConfig,
    /// Extra portal locations
    pub locations: LocationsConfig,
    /// Routing behavior configuration
    pub routing: RoutingConfig,
}

/// Naming conventions used while resolving portals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Name of the default portal used when no named portal matches
    pub default_portal: String,
    /// Subdirectory of each location that holds the portals
    pub portals_dir: String,
    /// Manifest file inside a portal that keys its permission scope
    pub manifest_file: String,
    /// Hook registry category portal hooks are looked up in
    pub hook_category: String,
    /// Root segment of every portal type identity
    pub namespace_root: String,
}

/// Extra portal locations
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LocationsConfig {
    /// Locations appended, in order, when a bundle is built
    pub search: Vec<PathBuf>,
}

/// Routing behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Where the portal router runs relative to other route handlers
    pub order: RouteOrder,
    /// Capacity of the exception broadcast channel
    pub broadcast_capacity: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            default_portal: "site".to_string(),
            portals_dir: "portals".to_string(),
            manifest_file: "portal.yaml".to_string(),
            hook_category: "portal".to_string(),
            namespace_root: "Portals".to_string(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            order: RouteOrder::Last,
            broadcast_capacity: 64,
        }
    }
}

impl PortalConfig {
    /// Parse configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid TOML for this structure.
    pub fn from_toml_str(config_str: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str::<Self>(config_str)?)
    }

    /// Load configuration from an explicit file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        Self::from_toml_str(&config_str)
    }

    /// Load configuration from XDG-compliant locations
    ///
    /// This function attempts to load configuration from
    /// `$XDG_CONFIG_HOME/portal/config.toml`, falling back to the other
    /// XDG config directories.
    ///
    /// If no configuration file is found, returns the default configuration.
    /// If a configuration file exists but is malformed, logs an error and uses defaults.
    pub fn load() -> Self {
        use tracing::{error, info};

        let xdg_dirs = match xdg::BaseDirectories::with_prefix("portal") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        let config_path = xdg_dirs.find_config_file("config.toml");

        if let Some(path) = config_path {
            info!("Loading configuration from: {}", path.display());
            match Self::load_from(&path) {
                Ok(config) => {
                    info!("Successfully loaded configuration");
                    config
                }
                Err(e) => {
                    error!("Failed to load configuration file {}: {}", path.display(), e);
                    Self::default()
                }
            }
        } else {
            info!("No configuration file found, using defaults");
            Self::default()
        }
    }
}

lazy_static! {
    /// Global configuration instance loaded from XDG-compliant locations
    pub static ref CONFIG: PortalConfig = PortalConfig::load();
}
