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

use tracing::{debug, instrument, warn};

use crate::common::RoutingContext;
use crate::message::PortalError;
use crate::traits::{Dispatcher, Notifier};

/// Best-effort error-page rendering for a failed dispatch.
///
/// Recovery never cancels the failure it was started for: it broadcasts it,
/// gives the failing portal and then that location's default portal a chance to
/// render an error page, and returns the same failure for the caller to raise.
/// Failures raised by the error-page attempts are logged and discarded.
#[derive(Clone, Copy)]
pub struct ErrorRecovery<'a> {
    dispatcher: &'a dyn Dispatcher,
    notifier: &'a dyn Notifier,
    default_portal: &'a str,
}

impl std::fmt::Debug for ErrorRecovery<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorRecovery")
            .field("default_portal", &self.default_portal)
            .finish_non_exhaustive()
    }
}

impl<'a> ErrorRecovery<'a> {
    /// Creates a recovery pipeline over the given collaborators.
    #[must_use]
    pub const fn new(
        dispatcher: &'a dyn Dispatcher,
        notifier: &'a dyn Notifier,
        default_portal: &'a str,
    ) -> Self {
        Self {
            dispatcher,
            notifier,
            default_portal,
        }
    }

    /// The portals asked for an error page, in order: the failing portal, then
    /// the default portal next to it.
    ///
    /// Both are listed even when the failing portal is the default one.
    #[must_use]
    pub fn candidates(&self, portal_dir: &Path) -> Vec<PathBuf> {
        let mut candidates = vec![portal_dir.to_path_buf()];
        if let Some(portals) = portal_dir.parent() {
            candidates.push(portals.join(self.default_portal));
        }
        candidates
    }

    /// Runs recovery for `failure` raised while dispatching `path` in `portal_dir`.
    ///
    /// The failure is set as the context's current exception for the duration of
    /// the error-page attempts and cleared before returning. Every candidate is
    /// attempted even if an earlier one rendered successfully.
    #[instrument(skip(self, ctx, failure), fields(failure = %failure))]
    pub fn recover(
        &self,
        ctx: &mut RoutingContext,
        path: &[String],
        portal_dir: &Path,
        failure: PortalError,
    ) -> PortalError {
        self.notifier.exception(&failure);
        ctx.set_exception(failure.clone());

        for candidate in self.candidates(portal_dir) {
            match self.dispatcher.portal_exception(ctx, path, &candidate, &failure) {
                Ok(()) => debug!(portal = %candidate.display(), "Error page attempted"),
                Err(secondary) => warn!(
                    portal = %candidate.display(),
                    error = %secondary,
                    "Error page failed; discarding"
                ),
            }
        }

        ctx.clear_exception();
        failure
    }
}
