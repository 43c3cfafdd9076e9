//! Provides the host-facing types of the portal router.
//!
//! This module serves as an aggregation point for the building blocks shared across
//! the crate and exposed to users via the prelude.
//!
//! # Key Re-exported Components:
//!
//! *   [`PortalBundle`]: The portal integration a host mounts, and its builder.
//! *   [`PortalConfig`]: Configuration loaded from XDG-compliant TOML files.
//! *   [`LocationSet`]: The ordered locations portals are searched in.
//! *   [`RoutingContext`]: Per-request routing state.
//! *   [`FsStore`]: The filesystem-backed portal store.
//! *   [`ExceptionBroadcaster`]: A notifier that fans routing failures out to subscribers.
//! *   [`RouteChain`] and [`RouteOrder`]: Ordered registration of routing handlers.
//! *   [`PortalListing`]: A diagnostics snapshot of the available portals.

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

// --- Public Re-exports ---
pub use config::{DefaultsConfig, LocationsConfig, PortalConfig, RoutingConfig, CONFIG};
pub use exception_broadcaster::ExceptionBroadcaster;
pub use fs_store::{path_segments, FsStore};
pub use location_set::LocationSet;
pub use portal_bundle::{PortalBundle, PortalBundleBuilder};
pub use portal_listing::{LocationListing, PortalEntry, PortalListing};
pub use route_chain::{RouteChain, RouteOrder};
pub use routing_context::RoutingContext;

// --- Submodules ---

/// Defines the configuration system for the portal router.
pub mod config;
/// Defines [`ExceptionBroadcaster`].
mod exception_broadcaster;
/// Defines [`FsStore`] and path helpers.
mod fs_store;
/// Defines [`LocationSet`].
mod location_set;
/// Defines [`PortalBundle`].
mod portal_bundle;
/// Defines the diagnostics listing types.
mod portal_listing;
/// Defines [`RouteChain`] and [`RouteOrder`].
mod route_chain;
/// Defines [`RoutingContext`].
mod routing_context;
