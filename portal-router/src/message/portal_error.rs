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
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Represents failures that can occur while routing a path into a portal.
///
/// `PortalError` is cheap to clone so the same failure can be broadcast to
/// observers, held in the [`RoutingContext`](crate::common::RoutingContext)
/// while error pages render, and still be returned to the caller.
#[derive(Debug, Clone)]
pub enum PortalError {
    /// No resource matched inside the portal.
    ///
    /// This is the only failure that triggers the default-portal retry.
    NotFound {
        /// The in-portal URL that was requested, segments joined by `/`.
        url: String,
        /// The portal directory the lookup ran in.
        portal_dir: PathBuf,
    },
    /// A hook name was requested that has no registration.
    UndefinedHook(String),
    /// Any other failure raised by a collaborator while dispatching.
    Dispatch(Arc<anyhow::Error>),
}

impl PortalError {
    /// Creates a [`PortalError::NotFound`] for `path` inside `portal_dir`.
    pub fn not_found(path: &[String], portal_dir: &Path) -> Self {
        Self::NotFound {
            url: path.join("/"),
            portal_dir: portal_dir.to_path_buf(),
        }
    }

    /// Returns `true` if this is a [`PortalError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { url, portal_dir } => write!(
                f,
                "Resource `{url}` not found in portal `{}`",
                portal_dir.display()
            ),
            Self::UndefinedHook(name) => write!(f, "Portal hook `{name}` is not defined"),
            Self::Dispatch(err) => write!(f, "Dispatch failed: {err}"),
        }
    }
}

impl std::error::Error for PortalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dispatch(err) => Some(&***err),
            _ => None,
        }
    }
}

/// Wraps a generic collaborator failure as [`PortalError::Dispatch`].
impl From<anyhow::Error> for PortalError {
    fn from(err: anyhow::Error) -> Self {
        Self::Dispatch(Arc::new(err))
    }
}
