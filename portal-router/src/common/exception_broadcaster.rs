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

use tokio::sync::broadcast;
use tracing::{instrument, trace};

use crate::common::RoutingConfig;
use crate::message::PortalError;
use crate::traits::Notifier;

/// Broadcasts routing failures to any number of subscribers.
///
/// The `ExceptionBroadcaster` is a [`Notifier`] backed by a Tokio broadcast
/// channel. Each call to [`subscribe`](Self::subscribe) hands out an independent
/// receiver that sees every failure broadcast after it subscribed. Sending never
/// blocks the routing call: with no subscribers the failure is dropped, and a
/// subscriber that falls more than `capacity` failures behind observes a lag.
///
/// Clones share the same channel.
#[derive(Debug, Clone)]
pub struct ExceptionBroadcaster {
    sender: broadcast::Sender<PortalError>,
}

impl ExceptionBroadcaster {
    /// Creates a broadcaster whose channel buffers up to `capacity` failures.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribes to failures broadcast from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PortalError> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Uses the built-in `broadcast_capacity` without reading any configuration
/// file. Pass a loaded [`RoutingConfig`] value to [`new`](Self::new) to honour it.
impl Default for ExceptionBroadcaster {
    fn default() -> Self {
        Self::new(RoutingConfig::default().broadcast_capacity)
    }
}

impl Notifier for ExceptionBroadcaster {
    #[instrument(skip(self))]
    fn exception(&self, failure: &PortalError) {
        match self.sender.send(failure.clone()) {
            Ok(delivered) => trace!(subscribers = delivered, "Broadcast routing failure"),
            Err(_) => trace!("No subscribers for routing failure"),
        }
    }
}
