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

use crate::message::PortalError;

/// Per-request routing state.
///
/// One `RoutingContext` is created for each inbound request and passed by
/// reference through the router, the recovery pipeline and every dispatcher
/// call made on the request's behalf. Nothing about the portal being routed is
/// held globally, so concurrent requests never observe each other's state.
///
/// The current exception is only set while error pages are being rendered; it
/// is always cleared before the failure is returned to the caller.
#[derive(Debug, Clone, Default)]
pub struct RoutingContext {
    portal_dir: Option<PathBuf>,
    portal_name: Option<String>,
    exception: Option<PortalError>,
}

impl RoutingContext {
    /// Creates an empty context for a new request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The directory of the most recently matched portal.
    #[must_use]
    pub fn current_portal_dir(&self) -> Option<&Path> {
        self.portal_dir.as_deref()
    }

    /// The lower-cased name of the most recently matched portal.
    #[must_use]
    pub fn current_portal_name(&self) -> Option<&str> {
        self.portal_name.as_deref()
    }

    /// The failure error pages are currently being rendered for.
    #[must_use]
    pub fn current_exception(&self) -> Option<&PortalError> {
        self.exception.as_ref()
    }

    pub(crate) fn enter_portal(&mut self, portal_dir: &Path, portal_name: &str) {
        self.portal_dir = Some(portal_dir.to_path_buf());
        self.portal_name = Some(portal_name.to_string());
    }

    pub(crate) fn set_exception(&mut self, failure: PortalError) {
        self.exception = Some(failure);
    }

    pub(crate) fn clear_exception(&mut self) {
        self.exception = None;
    }
}
