//! Portal resolution and error recovery.
//!
//! *   [`PortalLocator`] picks the portal directory for a path, falling back to the
//!     default portal and rewriting the path when no named portal exists.
//! *   [`PortalRouter`] dispatches into the matched portal and retries once against
//!     the default portal when nothing is found.
//! *   [`ErrorRecovery`] broadcasts any other failure, attempts error pages in the
//!     failing portal and its default sibling, and hands the original failure back.

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

pub use error_recovery::ErrorRecovery;
pub use portal_locator::{LocatedPortal, PortalLocator};
pub use portal_router::PortalRouter;

/// Defines [`ErrorRecovery`].
mod error_recovery;
/// Defines [`PortalLocator`].
mod portal_locator;
/// Defines [`PortalRouter`].
mod portal_router;
