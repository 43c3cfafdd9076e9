//! Defines the collaborator contracts the portal router calls into.
//!
//! The router owns the resolution and recovery algorithm only. Everything it
//! touches outside of that (the search substrate, dispatch into a portal,
//! failure broadcast, host route registration) is reached through these traits.
//!
//! # Key Traits
//!
//! *   [`Dispatcher`]: Resolves a path inside a matched portal, renders error pages,
//!     and reports sitemaps.
//! *   [`Notifier`]: Receives broadcast failures and the pre-site location event.
//! *   [`PortalStore`]: Answers directory existence and listing queries for the
//!     locations being searched.
//! *   [`RouteHandler`]: A routing handler that can be registered with a
//!     [`RouteChain`](crate::common::RouteChain) at a given [`RouteOrder`](crate::common::RouteOrder).

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
pub use dispatcher::Dispatcher;
pub use notifier::Notifier;
pub use portal_store::PortalStore;
pub use route_handler::RouteHandler;

// --- Submodules ---

/// Defines the [`Dispatcher`] trait.
mod dispatcher;
/// Defines the [`Notifier`] trait.
mod notifier;
/// Defines the [`PortalStore`] trait.
mod portal_store;
/// Defines the [`RouteHandler`] trait.
mod route_handler;
