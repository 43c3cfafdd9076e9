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

use crate::common::LocationSet;
use crate::message::PortalError;

/// Receives events broadcast by the router.
///
/// Both methods are fire-and-forget: the router does not inspect what a
/// notifier does with an event.
pub trait Notifier: Send + Sync {
    /// Called once with every non-not-found failure before error pages are attempted.
    fn exception(&self, failure: &PortalError);

    /// Called once, before the site root is appended to `locations`.
    ///
    /// This is the only point at which a collaborator may prepend locations
    /// ahead of the ones already configured.
    ///
    /// `locations` is a copy that replaces the bundle's set once this returns, so
    /// no lock is held and the bundle's accessors may be used here. Routing
    /// through the same bundle from this callback blocks forever, and a panic
    /// here poisons the site installation for every later route.
    fn before_site_location(&self, _locations: &mut LocationSet) {}
}

/// A notifier that drops every event.
impl Notifier for () {
    fn exception(&self, _failure: &PortalError) {}
}
