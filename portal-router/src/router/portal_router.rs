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

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, instrument, trace};

use crate::common::{DefaultsConfig, LocationSet, RoutingContext};
use crate::message::{DispatchOutcome, PermissionScope, PortalError, Routed};
use crate::router::{ErrorRecovery, LocatedPortal, PortalLocator};
use crate::traits::{Dispatcher, Notifier, PortalStore};

/// Whether a routing attempt may still fall back to the default portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fallback {
    Allowed,
    Exhausted,
}

/// Routes request paths into portals.
///
/// For each path the router locates a portal, consumes the segment that named
/// it, records the match in the [`RoutingContext`] and dispatches the rest of the
/// path into the portal. When the portal has nothing for the path and the
/// consumed segment was not the default portal's name, the router tries exactly
/// once more with the default portal, reporting the first not-found failure if
/// that also finds nothing. Any other failure goes through [`ErrorRecovery`].
pub struct PortalRouter {
    locations: Arc<RwLock<LocationSet>>,
    store: Arc<dyn PortalStore>,
    dispatcher: Arc<dyn Dispatcher>,
    notifier: Arc<dyn Notifier>,
    defaults: DefaultsConfig,
}

impl std::fmt::Debug for PortalRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalRouter")
            .field("locations", &*self.locations.read())
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl PortalRouter {
    /// Creates a router over the shared `locations`.
    #[must_use]
    pub fn new(
        locations: Arc<RwLock<LocationSet>>,
        store: Arc<dyn PortalStore>,
        dispatcher: Arc<dyn Dispatcher>,
        notifier: Arc<dyn Notifier>,
        defaults: DefaultsConfig,
    ) -> Self {
        Self {
            locations,
            store,
            dispatcher,
            notifier,
            defaults,
        }
    }

    /// A locator using this router's store and naming conventions.
    #[must_use]
    pub fn locator(&self) -> PortalLocator<'_> {
        PortalLocator::new(
            self.store.as_ref(),
            &self.defaults.portals_dir,
            &self.defaults.default_portal,
        )
    }

    /// The recovery pipeline used for non-not-found failures.
    #[must_use]
    pub fn recovery(&self) -> ErrorRecovery<'_> {
        ErrorRecovery::new(
            self.dispatcher.as_ref(),
            self.notifier.as_ref(),
            &self.defaults.default_portal,
        )
    }

    /// Routes `path`.
    ///
    /// Returns [`Routed::Unhandled`] without dispatching anything when neither the
    /// named portal nor the default portal exists in any location.
    ///
    /// # Errors
    ///
    /// * [`PortalError::NotFound`] for the first portal tried, when neither it nor
    ///   the default portal had anything for the path.
    /// * Any other dispatch failure, after error-page recovery has run.
    #[instrument(skip(self, ctx))]
    pub fn route(&self, ctx: &mut RoutingContext, path: &[String]) -> Result<Routed, PortalError> {
        self.attempt(ctx, path.to_vec(), Fallback::Allowed)
    }

    fn attempt(
        &self,
        ctx: &mut RoutingContext,
        path: Vec<String>,
        fallback: Fallback,
    ) -> Result<Routed, PortalError> {
        let located = {
            let locations = self.locations.read();
            self.locator().locate(&path, locations.as_slice())
        };
        let Some(LocatedPortal { dir, name, mut path }) = located else {
            trace!(?path, "No portal or default portal in any location");
            return Ok(Routed::Unhandled);
        };

        // An empty path named the default portal without a segment to consume.
        let shifted = if path.is_empty() {
            self.defaults.default_portal.clone()
        } else {
            path.remove(0)
        };

        ctx.enter_portal(&dir, &name);
        debug!(portal = %name, dir = %dir.display(), ?path, "Dispatching into portal");

        match self.dispatch(ctx, &path, &dir) {
            Ok(()) => Ok(Routed::Handled),
            Err(not_found) if not_found.is_not_found() => {
                self.fall_back(ctx, not_found, shifted, path, fallback)
            }
            Err(failure) => Err(self.recovery().recover(ctx, &path, &dir, failure)),
        }
    }

    fn dispatch(&self, ctx: &RoutingContext, path: &[String], dir: &Path) -> Result<(), PortalError> {
        let scope = PermissionScope::allow(dir, &self.defaults.manifest_file);
        match self.dispatcher.portal_route(ctx, path, dir, &scope)? {
            DispatchOutcome::Handled => Ok(()),
            DispatchOutcome::Unhandled => Err(PortalError::not_found(path, dir)),
        }
    }

    fn fall_back(
        &self,
        ctx: &mut RoutingContext,
        original: PortalError,
        shifted: String,
        path: Vec<String>,
        fallback: Fallback,
    ) -> Result<Routed, PortalError> {
        if fallback == Fallback::Exhausted || self.is_default_portal(&shifted) {
            return Err(original);
        }

        trace!(%shifted, "Not found; retrying in the default portal");
        let mut retry = Vec::with_capacity(path.len() + 2);
        retry.push(self.defaults.default_portal.clone());
        retry.push(shifted);
        retry.extend(path);

        match self.attempt(ctx, retry, Fallback::Exhausted) {
            Ok(Routed::Handled) => Ok(Routed::Handled),
            // The retry found no default portal, or nothing in it: keep the first cause.
            Ok(Routed::Unhandled) => Err(original),
            Err(nested) if nested.is_not_found() => Err(original),
            Err(failure) => Err(failure),
        }
    }

    // Exact match: only the portal lookup itself is case-insensitive.
    fn is_default_portal(&self, segment: &str) -> bool {
        segment == self.defaults.default_portal
    }
}
