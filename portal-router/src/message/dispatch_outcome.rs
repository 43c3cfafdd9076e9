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
/// The per-portal sitemap a dispatcher reports during sitemap aggregation.
pub type Sitemap = serde_json::Value;

/// Reports whether a dispatcher produced content for a path.
///
/// A dispatcher that completes with [`DispatchOutcome::Unhandled`] is treated by
/// the router exactly like one that fails with
/// [`PortalError::NotFound`](crate::message::PortalError::NotFound).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Content was produced.
    Handled,
    /// Nothing inside the portal matched the path.
    Unhandled,
}

/// Reports whether a routing handler took responsibility for a request path.
///
/// [`Routed::Unhandled`] is not a failure: it tells the host that no portal
/// (not even the default one) exists, so the host's own fallback applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// A portal was matched and content was produced.
    Handled,
    /// No portal matched; nothing was dispatched.
    Unhandled,
}
