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

use crate::common::RoutingContext;
use crate::message::{DispatchOutcome, PermissionScope, PortalError, Sitemap};

/// Performs resource resolution inside a matched portal.
///
/// The router hands a dispatcher the path remaining after the portal segment
/// was consumed, together with the portal directory. Implementations decide what
/// "a resource" is (templates, controllers, static files) and may raise any
/// failure; the router classifies the result.
///
/// The [`RoutingContext`] is passed through so dispatch code can inspect the
/// portal currently being routed and, while error pages render, the failure
/// being recovered from.
pub trait Dispatcher: Send + Sync {
    /// Resolves `path` inside `portal_dir`, constrained to `scope`.
    ///
    /// Returning [`DispatchOutcome::Unhandled`] or
    /// [`PortalError::NotFound`] both signal that nothing matched.
    ///
    /// # Errors
    ///
    /// Any failure raised while producing content.
    fn portal_route(
        &self,
        ctx: &RoutingContext,
        path: &[String],
        portal_dir: &Path,
        scope: &PermissionScope,
    ) -> Result<DispatchOutcome, PortalError>;

    /// Attempts to render an error page for `failure` from `portal_dir`.
    ///
    /// # Errors
    ///
    /// Any failure raised while rendering. The recovery pipeline discards it.
    fn portal_exception(
        &self,
        ctx: &RoutingContext,
        path: &[String],
        portal_dir: &Path,
        failure: &PortalError,
    ) -> Result<(), PortalError>;

    /// Reports the sitemap of the portal at `portal_dir`, if it has one.
    ///
    /// # Errors
    ///
    /// Any failure raised while building the sitemap.
    fn portal_sitemap(
        &self,
        _path: &[String],
        _portal_dir: &Path,
    ) -> Result<Option<Sitemap>, PortalError> {
        Ok(None)
    }
}
