//! Defines the values that travel between the router and its collaborators.
//!
//! This module contains the failure type raised while routing, the outcome a
//! dispatcher reports for a portal, and the permission scope a portal is routed
//! under.
//!
//! # Key Components
//!
//! *   [`PortalError`]: The error taxonomy for routing (not-found, undefined hook,
//!     and generic dispatch failures).
//! *   [`DispatchOutcome`]: Whether a dispatcher produced content for a path.
//! *   [`PermissionScope`]: The allow-list scope a portal is dispatched under.
//! *   [`Routed`]: Whether a routing handler took responsibility for a path.
//! *   [`Sitemap`]: The per-portal sitemap value returned by dispatchers.

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
pub use dispatch_outcome::{DispatchOutcome, Routed, Sitemap};
pub use permission_scope::PermissionScope;
pub use portal_error::PortalError;

// --- Submodules ---

/// Defines [`DispatchOutcome`].
mod dispatch_outcome;
/// Defines [`PermissionScope`].
mod permission_scope;
/// Defines [`PortalError`].
mod portal_error;
