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

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};

use parking_lot::RwLock;
use serde_json::json;
use tracing::{debug, instrument, trace};

use crate::common::{
    FsStore, LocationListing, LocationSet, PortalConfig, PortalEntry, PortalListing, RouteOrder,
    RoutingContext,
};
use crate::hooks::{HookRegistries, HookValue, PortalHookAccessor};
use crate::message::{PortalError, Routed, Sitemap};
use crate::router::PortalRouter;
use crate::traits::{Dispatcher, Notifier, PortalStore, RouteHandler};

/// The portal integration a host mounts under its site.
///
/// A `PortalBundle` owns the location set, the site root that is appended to
/// it, the hook registries, and the [`PortalRouter`]. It is the entry point for
/// routing requests, aggregating sitemaps, accessing portal hooks and
/// inspecting the portals available.
///
/// A bundle is shared across requests; per-request state lives in the
/// [`RoutingContext`] each call is given.
///
/// # Example
///
/// ```rust,ignore
/// use portal_router::prelude::*;
///
/// let bundle = PortalBundle::builder("/srv/site", Arc::new(MyDispatcher))
///     .with_location("/srv/shared")
///     .build();
///
/// let mut ctx = RoutingContext::new();
/// bundle.route(&mut ctx, &path_segments("/blog/post/1"))?;
/// ```
pub struct PortalBundle {
    router: PortalRouter,
    locations: Arc<RwLock<LocationSet>>,
    store: Arc<dyn PortalStore>,
    dispatcher: Arc<dyn Dispatcher>,
    notifier: Arc<dyn Notifier>,
    hooks: Arc<HookRegistries>,
    site_root: PathBuf,
    site_location: Once,
    config: PortalConfig,
}

impl std::fmt::Debug for PortalBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalBundle")
            .field("site_root", &self.site_root)
            .field("router", &self.router)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builds a [`PortalBundle`].
#[must_use]
pub struct PortalBundleBuilder {
    site_root: PathBuf,
    dispatcher: Arc<dyn Dispatcher>,
    store: Arc<dyn PortalStore>,
    notifier: Arc<dyn Notifier>,
    hooks: Arc<HookRegistries>,
    locations: LocationSet,
    config: Option<PortalConfig>,
}

impl PortalBundleBuilder {
    /// Uses `store` instead of the filesystem to search for portals.
    pub fn with_store(mut self, store: Arc<dyn PortalStore>) -> Self {
        self.store = store;
        self
    }

    /// Broadcasts failures to `notifier`.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Shares `hooks` with the host instead of starting from empty registries.
    pub fn with_hooks(mut self, hooks: Arc<HookRegistries>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Appends `location` to the initial location set.
    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.locations.append(location);
        self
    }

    /// Uses `config` instead of the globally loaded configuration.
    pub fn with_config(mut self, config: PortalConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the bundle.
    ///
    /// The configured `[locations] search` entries are appended after the
    /// locations added with [`with_location`](Self::with_location). The site
    /// root is not added until the first route.
    pub fn build(self) -> PortalBundle {
        let config = self.config.unwrap_or_else(|| crate::common::CONFIG.clone());
        let mut locations = self.locations;
        for location in &config.locations.search {
            locations.append(location.clone());
        }
        let locations = Arc::new(RwLock::new(locations));

        let router = PortalRouter::new(
            locations.clone(),
            self.store.clone(),
            self.dispatcher.clone(),
            self.notifier.clone(),
            config.defaults.clone(),
        );
        trace!(site_root = %self.site_root.display(), "Portal bundle built");

        PortalBundle {
            router,
            locations,
            store: self.store,
            dispatcher: self.dispatcher,
            notifier: self.notifier,
            hooks: self.hooks,
            site_root: self.site_root,
            site_location: Once::new(),
            config,
        }
    }
}

impl PortalBundle {
    /// Starts building a bundle for the site at `site_root`.
    pub fn builder(site_root: impl Into<PathBuf>, dispatcher: Arc<dyn Dispatcher>) -> PortalBundleBuilder {
        PortalBundleBuilder {
            site_root: site_root.into(),
            dispatcher,
            store: Arc::new(FsStore),
            notifier: Arc::new(()),
            hooks: Arc::new(HookRegistries::new()),
            locations: LocationSet::new(),
            config: None,
        }
    }

    /// The site root appended to the locations.
    #[must_use]
    pub fn site_root(&self) -> &Path {
        &self.site_root
    }

    /// The configuration the bundle was built with.
    #[must_use]
    pub const fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// The router the bundle routes with.
    #[must_use]
    pub const fn router(&self) -> &PortalRouter {
        &self.router
    }

    /// The hook registries portal hooks are read from.
    #[must_use]
    pub const fn hooks(&self) -> &Arc<HookRegistries> {
        &self.hooks
    }

    /// A snapshot of the current locations, in search order.
    #[must_use]
    pub fn locations(&self) -> LocationSet {
        self.locations.read().clone()
    }

    /// Appends `location` at the lowest search priority.
    pub fn append_location(&self, location: impl Into<PathBuf>) {
        self.locations.write().append(location);
    }

    /// Appends the site root to the locations, once.
    ///
    /// The notifier's [`before_site_location`](Notifier::before_site_location)
    /// runs first, so collaborators can prepend locations ahead of it. Called
    /// automatically by [`route`](Self::route) and [`sitemap`](Self::sitemap).
    pub fn install_site_location(&self) {
        self.site_location.call_once(|| {
            // The notifier edits a copy, so it may read or append through the bundle.
            let before = self.locations();
            let mut staged = before.clone();
            self.notifier.before_site_location(&mut staged);

            let mut locations = self.locations.write();
            for appended in locations.iter().skip(before.len()) {
                staged.append(appended.clone());
            }
            staged.append(self.site_root.clone());
            *locations = staged;
            debug!(locations = ?locations.as_slice(), "Site root added to portal locations");
        });
    }

    /// Routes `path` into the matching portal.
    ///
    /// # Errors
    ///
    /// See [`PortalRouter::route`].
    #[instrument(skip(self, ctx))]
    pub fn route(&self, ctx: &mut RoutingContext, path: &[String]) -> Result<Routed, PortalError> {
        self.install_site_location();
        self.router.route(ctx, path)
    }

    /// Collects the sitemap of every portal in every location.
    ///
    /// Results are keyed by portal name, with the default portal under the empty
    /// string. When two locations hold a portal of the same name, the one
    /// searched first wins. Portals without a sitemap are omitted.
    ///
    /// # Errors
    ///
    /// The first failure raised by the dispatcher.
    #[instrument(skip(self))]
    pub fn sitemap(&self, path: &[String]) -> Result<BTreeMap<String, Sitemap>, PortalError> {
        self.install_site_location();
        let default_portal = &self.config.defaults.default_portal;
        let mut sitemaps = BTreeMap::new();
        let mut seen = std::collections::HashSet::new();

        for location in self.locations().iter() {
            let portals = location.join(&self.config.defaults.portals_dir);
            for portal_dir in self.store.list_dirs(&portals) {
                let Some(name) = portal_dir.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                    continue;
                };
                let key = if &name == default_portal { String::new() } else { name };
                if !seen.insert(key.clone()) {
                    trace!(portal = %key, dir = %portal_dir.display(), "Shadowed by an earlier location");
                    continue;
                }
                if let Some(sitemap) = self.dispatcher.portal_sitemap(path, &portal_dir)? {
                    sitemaps.insert(key, sitemap);
                }
            }
        }
        Ok(sitemaps)
    }

    /// Hook access for the portal at `<site_root>/<portals_dir>/<slug>`.
    #[must_use]
    pub fn portal_hooks(&self, slug: &str) -> PortalHookAccessor {
        let defaults = &self.config.defaults;
        PortalHookAccessor::new(
            slug,
            &self.site_root.join(&defaults.portals_dir),
            &defaults.namespace_root,
            self.hooks.category(&defaults.hook_category),
        )
    }

    /// The value templates see for the portal hook: the current portal's name
    /// as `slug`, or `null` outside of a portal.
    #[must_use]
    pub fn template_hook(&self, ctx: &RoutingContext) -> HookValue {
        json!({ "slug": ctx.current_portal_name() })
    }

    /// Lists the portals in every location, marking the one `ctx` is routed to.
    ///
    /// Returns `None` when `ctx` has not been routed to a portal.
    #[must_use]
    pub fn portal_listing(&self, ctx: &RoutingContext) -> Option<PortalListing> {
        let current = ctx.current_portal_dir()?;
        let locations = self
            .locations()
            .iter()
            .map(|location| {
                let portals = self
                    .store
                    .list_dirs(&location.join(&self.config.defaults.portals_dir))
                    .into_iter()
                    .filter_map(|dir| {
                        let name = dir.file_name()?.to_string_lossy().into_owned();
                        Some(PortalEntry {
                            current: dir == current,
                            name,
                        })
                    })
                    .collect();
                LocationListing {
                    location: location.clone(),
                    portals,
                }
            })
            .collect();
        Some(PortalListing { locations })
    }
}

impl RouteHandler for PortalBundle {
    fn route(&self, ctx: &mut RoutingContext, path: &[String]) -> Result<Routed, PortalError> {
        Self::route(self, ctx, path)
    }

    fn route_order(&self) -> RouteOrder {
        self.config.routing.order
    }
}
