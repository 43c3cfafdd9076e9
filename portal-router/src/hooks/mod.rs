//! Portal hooks: named extension points a portal exposes either as static values
//! or as functions of its base path and type identity.
//!
//! Hooks are registered per category in a [`HookRegistries`] set; portal hooks
//! live in the `portal` category. A [`PortalHookAccessor`] binds one portal's
//! identity to that category and resolves hook names on demand.

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

pub use accessor::PortalHookAccessor;
pub use registry::{HookDefinition, HookRegistries, HookRegistry, HookResolver, HookValue};
pub use type_identity::TypeIdentity;

/// Defines [`PortalHookAccessor`].
mod accessor;
/// Defines the hook registry types.
mod registry;
/// Defines [`TypeIdentity`].
mod type_identity;
