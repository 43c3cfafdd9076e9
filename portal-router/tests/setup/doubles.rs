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
//! Test doubles for the router's collaborators.

#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};

use anyhow::anyhow;
use parking_lot::Mutex;
use portal_router::prelude::*;

/// A [`PortalStore`] holding a fixed set of directories in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    dirs: BTreeSet<PathBuf>,
}

impl MemoryStore {
    pub fn with_dirs(dirs: &[&str]) -> Self {
        Self {
            dirs: dirs.iter().map(PathBuf::from).collect(),
        }
    }
}

impl PortalStore for MemoryStore {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn list_dirs(&self, path: &Path) -> Vec<PathBuf> {
        self.dirs
            .iter()
            .filter(|dir| dir.parent() == Some(path))
            .cloned()
            .collect()
    }
}

/// What the scripted dispatcher does when asked to route into a portal.
#[derive(Debug, Clone)]
pub enum RouteBehavior {
    Handle,
    Unhandled,
    NotFound,
    Fail(&'static str),
}

/// What the scripted dispatcher does when asked for an error page.
#[derive(Debug, Clone)]
pub enum PageBehavior {
    Render,
    Fail(&'static str),
}

/// A call observed by the scripted dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Route {
        path: Vec<String>,
        portal_dir: PathBuf,
        scope: String,
        ctx_portal: Option<String>,
    },
    ErrorPage {
        path: Vec<String>,
        portal_dir: PathBuf,
        failure: String,
        ctx_exception: Option<String>,
    },
}

/// A [`Dispatcher`] whose behavior per portal directory is scripted up front.
///
/// Portals without a script report [`DispatchOutcome::Unhandled`]; error pages
/// without a script render successfully.
#[derive(Debug, Default)]
pub struct ScriptedDispatcher {
    routes: HashMap<PathBuf, RouteBehavior>,
    pages: HashMap<PathBuf, PageBehavior>,
    sitemaps: HashMap<PathBuf, Sitemap>,
    failing_sitemaps: HashMap<PathBuf, &'static str>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_route(mut self, portal_dir: &str, behavior: RouteBehavior) -> Self {
        self.routes.insert(PathBuf::from(portal_dir), behavior);
        self
    }

    pub fn on_error_page(mut self, portal_dir: &str, behavior: PageBehavior) -> Self {
        self.pages.insert(PathBuf::from(portal_dir), behavior);
        self
    }

    pub fn with_sitemap(mut self, portal_dir: &str, sitemap: Sitemap) -> Self {
        self.sitemaps.insert(PathBuf::from(portal_dir), sitemap);
        self
    }

    pub fn fail_sitemap(mut self, portal_dir: &str, message: &'static str) -> Self {
        self.failing_sitemaps.insert(PathBuf::from(portal_dir), message);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// `(path, portal_dir)` of every route call, in order.
    pub fn routed(&self) -> Vec<(Vec<String>, PathBuf)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                Call::Route { path, portal_dir, .. } => Some((path.clone(), portal_dir.clone())),
                Call::ErrorPage { .. } => None,
            })
            .collect()
    }

    /// Portal directory of every error-page call, in order.
    pub fn error_pages(&self) -> Vec<PathBuf> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                Call::ErrorPage { portal_dir, .. } => Some(portal_dir.clone()),
                Call::Route { .. } => None,
            })
            .collect()
    }
}

impl Dispatcher for ScriptedDispatcher {
    fn portal_route(
        &self,
        ctx: &RoutingContext,
        path: &[String],
        portal_dir: &Path,
        scope: &PermissionScope,
    ) -> Result<DispatchOutcome, PortalError> {
        self.calls.lock().push(Call::Route {
            path: path.to_vec(),
            portal_dir: portal_dir.to_path_buf(),
            scope: scope.to_string(),
            ctx_portal: ctx.current_portal_name().map(str::to_string),
        });
        match self.routes.get(portal_dir).unwrap_or(&RouteBehavior::Unhandled) {
            RouteBehavior::Handle => Ok(DispatchOutcome::Handled),
            RouteBehavior::Unhandled => Ok(DispatchOutcome::Unhandled),
            RouteBehavior::NotFound => Err(PortalError::not_found(path, portal_dir)),
            RouteBehavior::Fail(message) => Err(anyhow!(*message).into()),
        }
    }

    fn portal_exception(
        &self,
        ctx: &RoutingContext,
        path: &[String],
        portal_dir: &Path,
        failure: &PortalError,
    ) -> Result<(), PortalError> {
        self.calls.lock().push(Call::ErrorPage {
            path: path.to_vec(),
            portal_dir: portal_dir.to_path_buf(),
            failure: failure.to_string(),
            ctx_exception: ctx.current_exception().map(ToString::to_string),
        });
        match self.pages.get(portal_dir).unwrap_or(&PageBehavior::Render) {
            PageBehavior::Render => Ok(()),
            PageBehavior::Fail(message) => Err(anyhow!(*message).into()),
        }
    }

    fn portal_sitemap(
        &self,
        _path: &[String],
        portal_dir: &Path,
    ) -> Result<Option<Sitemap>, PortalError> {
        if let Some(message) = self.failing_sitemaps.get(portal_dir) {
            return Err(anyhow!(*message).into());
        }
        Ok(self.sitemaps.get(portal_dir).cloned())
    }
}

/// A [`Notifier`] that records what it was told.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    failures: Mutex<Vec<String>>,
    before_site: Mutex<usize>,
    prepend: Option<PathBuf>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `location` when the pre-site event fires.
    pub fn prepending(location: &str) -> Self {
        Self {
            prepend: Some(PathBuf::from(location)),
            ..Self::default()
        }
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().clone()
    }

    pub fn before_site_calls(&self) -> usize {
        *self.before_site.lock()
    }
}

impl Notifier for RecordingNotifier {
    fn exception(&self, failure: &PortalError) {
        self.failures.lock().push(failure.to_string());
    }

    fn before_site_location(&self, locations: &mut LocationSet) {
        *self.before_site.lock() += 1;
        if let Some(location) = &self.prepend {
            locations.prepend(location.clone());
        }
    }
}
