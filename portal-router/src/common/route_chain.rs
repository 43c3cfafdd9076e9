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

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::common::RoutingContext;
use crate::message::{PortalError, Routed};
use crate::traits::RouteHandler;

/// Where a [`RouteHandler`] runs relative to the others in a [`RouteChain`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteOrder {
    /// Runs before every `Normal` and `Last` handler.
    First,
    /// Runs in registration order with other `Normal` handlers.
    #[default]
    Normal,
    /// Runs after every other handler. The portal router registers here so
    /// that explicit routes always take precedence over portal resolution.
    Last,
}

/// An ordered set of routing handlers.
///
/// Handlers run by ascending [`RouteOrder`], and in registration order within
/// the same order. The chain stops at the first handler that reports
/// [`Routed::Handled`] or fails.
#[derive(Clone, Default)]
pub struct RouteChain {
    handlers: Vec<Arc<dyn RouteHandler>>,
}

impl std::fmt::Debug for RouteChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteChain")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl RouteChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` at its declared [`RouteOrder`].
    pub fn register(&mut self, handler: Arc<dyn RouteHandler>) {
        let order = handler.route_order();
        // Insert after every handler with an order <= this one.
        let position = self
            .handlers
            .iter()
            .position(|h| h.route_order() > order)
            .unwrap_or(self.handlers.len());
        self.handlers.insert(position, handler);
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs `path` through the handlers until one handles it.
    ///
    /// # Errors
    ///
    /// Returns the first failure raised by a handler.
    #[instrument(skip(self, ctx))]
    pub fn route(&self, ctx: &mut RoutingContext, path: &[String]) -> Result<Routed, PortalError> {
        for (index, handler) in self.handlers.iter().enumerate() {
            if handler.route(ctx, path)? == Routed::Handled {
                trace!(handler = index, "Route handled");
                return Ok(Routed::Handled);
            }
        }
        trace!("No handler took the route");
        Ok(Routed::Unhandled)
    }
}
