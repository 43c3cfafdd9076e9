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
use std::sync::Arc;

use tracing::trace;

use crate::hooks::{HookRegistry, HookValue, TypeIdentity};
use crate::message::PortalError;

/// Named hook lookup scoped to one portal.
///
/// The accessor does not snapshot the registry: every [`get`](Self::get) reads
/// the live registry, so hooks registered after the accessor was created are
/// visible to it.
#[derive(Debug, Clone)]
pub struct PortalHookAccessor {
    slug: String,
    base_path: PathBuf,
    identity: TypeIdentity,
    registry: Arc<HookRegistry>,
}

impl PortalHookAccessor {
    /// Creates an accessor for the portal at `portals_root/<slug>`.
    #[must_use]
    pub fn new(
        slug: &str,
        portals_root: &Path,
        namespace_root: &str,
        registry: Arc<HookRegistry>,
    ) -> Self {
        Self {
            slug: slug.to_string(),
            base_path: portals_root.join(slug),
            identity: TypeIdentity::for_portal(namespace_root, slug),
            registry,
        }
    }

    /// The raw path segment the accessor was created with.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The portal's base path handed to resolver hooks.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// The portal's type identity handed to resolver hooks.
    #[must_use]
    pub const fn identity(&self) -> &TypeIdentity {
        &self.identity
    }

    /// Resolves the hook registered under `hook`.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::UndefinedHook`] if nothing is registered under `hook`.
    pub fn get(&self, hook: &str) -> Result<HookValue, PortalError> {
        let Some(definition) = self.registry.definition(hook) else {
            return Err(PortalError::UndefinedHook(hook.to_string()));
        };
        trace!(hook, portal = %self.identity, "Resolving portal hook");
        Ok(definition.resolve(&self.base_path, &self.identity))
    }

    /// Call-style alias for [`get`](Self::get); the arguments are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::UndefinedHook`] if nothing is registered under `hook`.
    pub fn call(&self, hook: &str, _args: &[HookValue]) -> Result<HookValue, PortalError> {
        self.get(hook)
    }
}
