/**
 * Delivery Engine
 *
 * Routes one authorized message: persist it, then hand it to the
 * recipient's live connection if there is one.
 *
 * # Guarantees
 *
 * - Unauthorized messages are neither persisted nor delivered.
 * - Every authorized message is appended to history exactly once, whether
 *   or not the recipient is online.
 * - Live delivery is attempted even when the append failed.
 * - Nothing is reported back to the sender.
 */

use std::sync::Arc;

use crate::backend::relay::collaborators::HistoryStore;
use crate::backend::relay::gate::AuthorizationGate;
use crate::backend::relay::registry::ConnectionRegistry;
use crate::shared::RelayMessage;

#[derive(Clone)]
pub struct DeliveryEngine {
    gate: AuthorizationGate,
    history: Arc<dyn HistoryStore>,
    registry: ConnectionRegistry,
}

impl DeliveryEngine {
    pub fn new(
        gate: AuthorizationGate,
        history: Arc<dyn HistoryStore>,
        registry: ConnectionRegistry,
    ) -> Self {
        Self {
            gate,
            history,
            registry,
        }
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn history(&self) -> &Arc<dyn HistoryStore> {
        &self.history
    }

    /// Relay one message from its sender to its recipient
    pub async fn relay(&self, message: RelayMessage) {
        if !self
            .gate
            .is_authorized(&message.sender, &message.recipient)
            .await
        {
            tracing::info!(
                "[Relay] Dropped message {} -> {}: not friends",
                message.sender,
                message.recipient
            );
            return;
        }

        if let Err(e) = self.history.append(&message).await {
            tracing::error!(
                "[Relay] Failed to persist message {} -> {}: {}",
                message.sender,
                message.recipient,
                e
            );
        }

        let Some(connection) = self.registry.lookup(&message.recipient).await else {
            tracing::debug!("[Relay] {} offline, message kept in history", message.recipient);
            return;
        };

        match connection.send(message.to_outbound()) {
            Ok(()) => tracing::debug!(
                "[Relay] Delivered {} -> {}",
                message.sender,
                message.recipient
            ),
            Err(e) => tracing::warn!("[Relay] Live delivery failed, treating as offline: {}", e),
        }
    }
}
