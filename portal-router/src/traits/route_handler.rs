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

use crate::common::{RouteOrder, RoutingContext};
use crate::message::{PortalError, Routed};

/// A routing handler the host can register alongside others.
///
/// Handlers run in ascending [`RouteOrder`]; the first one to report
/// [`Routed::Handled`] (or to fail) ends the chain.
pub trait RouteHandler: Send + Sync {
    /// Routes `path`, recording the matched portal in `ctx`.
    ///
    /// # Errors
    ///
    /// Any failure the handler could not recover from.
    fn route(&self, ctx: &mut RoutingContext, path: &[String]) -> Result<Routed, PortalError>;

    /// Where this handler runs relative to the others.
    fn route_order(&self) -> RouteOrder {
        RouteOrder::Normal
    }
}
