/**
 * Authorization Gate
 *
 * Decides, per message, whether a sender may reach a recipient. The only
 * rule is that the pair must be linked in the friend graph; the link is
 * symmetric.
 *
 * The gate fails closed: if the graph cannot be queried the message is
 * treated as unauthorized.
 */

use std::sync::Arc;

use crate::backend::relay::collaborators::RelationshipGraph;
use crate::shared::UserIdentity;

#[derive(Clone)]
pub struct AuthorizationGate {
    graph: Arc<dyn RelationshipGraph>,
}

impl AuthorizationGate {
    pub fn new(graph: Arc<dyn RelationshipGraph>) -> Self {
        Self { graph }
    }

    pub async fn is_authorized(&self, sender: &UserIdentity, recipient: &UserIdentity) -> bool {
        match self.graph.linked(sender, recipient).await {
            Ok(linked) => linked,
            Err(e) => {
                tracing::error!(
                    "[Relay] Relationship lookup failed for {} -> {}: {}",
                    sender,
                    recipient,
                    e
                );
                false
            }
        }
    }
}
