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

#![forbid(unsafe_code)]
#![forbid(missing_docs)] // Keep this to enforce coverage

//! # Portal Router
//!
//! This crate resolves request paths to isolated "portal" sub-applications
//! mounted under a shared host. Portals live in `<location>/portals/<name>`
//! directories searched across an ordered list of locations, with a
//! deterministic fallback to the default portal (`site`) when no named portal
//! matches or when nothing is found inside the matched one.
//!
//! ## Key Concepts
//!
//! - **Locations (`LocationSet`)**: Ordered base directories; the first one holding
//!   a portal wins.
//! - **Locator (`PortalLocator`)**: Picks the portal directory for a path and rewrites
//!   the path when it falls back to the default portal.
//! - **Router (`PortalRouter`)**: Dispatches into the matched portal and retries once
//!   in the default portal on not-found, always reporting the first not-found.
//! - **Recovery (`ErrorRecovery`)**: Broadcasts other failures, gives the failing
//!   portal and its default sibling a chance to render an error page, and still
//!   returns the original failure.
//! - **Hooks (`PortalHookAccessor`)**: Named extension points resolved per portal,
//!   either literal values or functions of the portal's path and type identity.
//! - **Context (`RoutingContext`)**: Per-request state (current portal, current
//!   exception) passed explicitly through every call.
//! - **Bundle (`PortalBundle`)**: The host-facing entry point tying these together.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use portal_router::prelude::*;
//!
//! struct Pages;
//!
//! impl Dispatcher for Pages {
//!     fn portal_route(
//!         &self,
//!         _ctx: &RoutingContext,
//!         path: &[String],
//!         portal_dir: &Path,
//!         _scope: &PermissionScope,
//!     ) -> Result<DispatchOutcome, PortalError> {
//!         render(portal_dir, path)
//!     }
//!
//!     fn portal_exception(
//!         &self,
//!         _ctx: &RoutingContext,
//!         _path: &[String],
//!         portal_dir: &Path,
//!         failure: &PortalError,
//!     ) -> Result<(), PortalError> {
//!         render_error(portal_dir, failure)
//!     }
//! }
//!
//! let bundle = PortalBundle::builder("/srv/site", Arc::new(Pages)).build();
//! let mut ctx = RoutingContext::new();
//! bundle.route(&mut ctx, &path_segments("/blog/post/1"))?;
//! ```

/// Host-facing types: the bundle, configuration, locations and context.
pub(crate) mod common;

/// Portal hook registries and accessors.
pub(crate) mod hooks;

/// Errors and dispatch outcomes exchanged with collaborators.
pub(crate) mod message;

/// Portal resolution, fallback routing and error recovery.
pub(crate) mod router;

/// Collaborator contracts the router calls into.
pub(crate) mod traits;

/// A prelude module for conveniently importing the most commonly used items.
///
/// # Re-exports
///
/// ## Core Types
/// *   [`crate::common::PortalBundle`]: The portal integration a host mounts.
/// *   [`crate::common::PortalConfig`]: Configuration loaded from XDG locations.
/// *   [`crate::common::LocationSet`]: Ordered portal locations.
/// *   [`crate::common::RoutingContext`]: Per-request routing state.
/// *   [`crate::common::RouteChain`]: Ordered routing handler registration.
/// *   [`crate::common::ExceptionBroadcaster`]: Failure fan-out to subscribers.
/// *   [`crate::router::PortalRouter`]: The fallback routing algorithm.
/// *   [`crate::router::PortalLocator`]: Portal directory resolution.
/// *   [`crate::router::ErrorRecovery`]: The error-page recovery pipeline.
/// *   [`crate::hooks::PortalHookAccessor`]: Per-portal hook lookup.
/// *   [`crate::message::PortalError`]: The routing error type.
///
/// ## Traits
/// *   [`crate::traits::Dispatcher`]: Resolution inside a portal.
/// *   [`crate::traits::Notifier`]: Failure broadcast.
/// *   [`crate::traits::PortalStore`]: The portal search substrate.
/// *   [`crate::traits::RouteHandler`]: A registrable routing handler.
pub mod prelude {
    pub use std::path::{Path, PathBuf};
    pub use std::sync::Arc;

    pub use crate::common::{
        path_segments, DefaultsConfig, ExceptionBroadcaster, FsStore, LocationListing,
        LocationSet, LocationsConfig, PortalBundle, PortalBundleBuilder, PortalConfig,
        PortalEntry, PortalListing, RouteChain, RouteOrder, RoutingConfig, RoutingContext,
        CONFIG,
    };
    pub use crate::hooks::{
        HookDefinition, HookRegistries, HookRegistry, HookResolver, HookValue,
        PortalHookAccessor, TypeIdentity,
    };
    pub use crate::message::{DispatchOutcome, PermissionScope, PortalError, Routed, Sitemap};
    pub use crate::router::{ErrorRecovery, LocatedPortal, PortalLocator, PortalRouter};
    pub use crate::traits::{Dispatcher, Notifier, PortalStore, RouteHandler};
}
