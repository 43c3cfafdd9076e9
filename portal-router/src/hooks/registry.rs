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

use dashmap::DashMap;

use crate::hooks::TypeIdentity;

/// The value a hook resolves to.
pub type HookValue = serde_json::Value;

/// A hook computed from the portal's base path and type identity.
pub type HookResolver = Arc<dyn Fn(&Path, &TypeIdentity) -> HookValue + Send + Sync>;

/// A registered hook: either a fixed value or a path-aware factory.
#[derive(Clone)]
pub enum HookDefinition {
    /// Returned as-is.
    Literal(HookValue),
    /// Invoked with the portal's base path and type identity on every lookup.
    Resolver(HookResolver),
}

impl std::fmt::Debug for HookDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl HookDefinition {
    /// Creates a literal hook.
    pub fn literal(value: impl Into<HookValue>) -> Self {
        Self::Literal(value.into())
    }

    /// Creates a resolver hook from a closure.
    pub fn resolver<F>(resolver: F) -> Self
    where
        F: Fn(&Path, &TypeIdentity) -> HookValue + Send + Sync + 'static,
    {
        Self::Resolver(Arc::new(resolver))
    }

    /// Resolves the hook for the portal at `base_path` with `identity`.
    #[must_use]
    pub fn resolve(&self, base_path: &Path, identity: &TypeIdentity) -> HookValue {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Resolver(resolver) => resolver(base_path, identity),
        }
    }
}

/// The hooks registered in one category.
///
/// # Thread Safety
///
/// The registry uses [`DashMap`] internally and is safe to access concurrently
/// from multiple threads. Lookups clone the definition out of the map, so a
/// resolver may itself consult the registry without deadlocking.
#[derive(Default)]
pub struct HookRegistry {
    hooks: DashMap<String, HookDefinition>,
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("registered_hooks", &self.hooks.len())
            .finish()
    }
}

impl HookRegistry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hooks: DashMap::new(),
        }
    }

    /// Registers `definition` under `name`, replacing any previous definition.
    pub fn register(&self, name: &str, definition: HookDefinition) {
        self.hooks.insert(name.to_string(), definition);
    }

    /// Registers a literal hook.
    pub fn register_literal(&self, name: &str, value: impl Into<HookValue>) {
        self.register(name, HookDefinition::literal(value));
    }

    /// Registers a resolver hook.
    pub fn register_resolver<F>(&self, name: &str, resolver: F)
    where
        F: Fn(&Path, &TypeIdentity) -> HookValue + Send + Sync + 'static,
    {
        self.register(name, HookDefinition::resolver(resolver));
    }

    /// Removes the hook registered under `name`.
    pub fn unregister(&self, name: &str) -> Option<HookDefinition> {
        self.hooks.remove(name).map(|(_, definition)| definition)
    }

    /// Looks up the definition registered under `name`.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<HookDefinition> {
        self.hooks.get(name).map(|entry| entry.value().clone())
    }

    /// Returns `true` if a hook is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    /// Number of registered hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns `true` if no hooks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

/// Hook registries keyed by category.
#[derive(Debug, Default)]
pub struct HookRegistries {
    categories: DashMap<String, Arc<HookRegistry>>,
}

impl HookRegistries {
    /// Creates an empty set of registries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry for `category`, created empty on first use.
    pub fn category(&self, category: &str) -> Arc<HookRegistry> {
        self.categories
            .entry(category.to_string())
            .or_default()
            .value()
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_registries_are_shared() {
        let registries = HookRegistries::new();
        registries.category("portal").register_literal("title", "Blog");
        assert!(registries.category("portal").contains("title"));
        assert!(!registries.category("lhtml").contains("title"));
    }

    #[test]
    fn resolver_sees_path_and_identity() {
        let definition = HookDefinition::resolver(|path, identity| {
            json!({ "path": path.display().to_string(), "class": identity.to_string() })
        });
        let identity = TypeIdentity::for_portal("Portals", "blog");
        let value = definition.resolve(Path::new("/site/portals/blog"), &identity);
        assert_eq!(
            value,
            json!({ "path": "/site/portals/blog", "class": "Portals::blog" })
        );
    }
}
