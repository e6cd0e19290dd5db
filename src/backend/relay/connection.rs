/**
 * Connection Handle
 *
 * A `Connection` is the registry's view of one live WebSocket: the identity
 * it belongs to, a unique instance id, and the sending half of the
 * connection's outbound queue. The socket itself is owned by the session's
 * writer task; everything else only ever holds this handle.
 *
 * # Liveness
 *
 * A connection is closed once its writer task has gone away, which is
 * observable as the queue's receiver being dropped.
 *
 * # Backpressure
 *
 * The outbound queue holds at most `OUTBOUND_QUEUE_CAPACITY` frames. A
 * recipient that stops reading fills it, after which `send` fails instead
 * of buffering; the delivery engine treats that as the recipient being
 * offline (the message is already in history).
 */

use tokio::sync::mpsc::{self, error::TrySendError};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::shared::{OutboundFrame, UserIdentity};

/// Frames a connection may have queued for its writer task
pub const OUTBOUND_QUEUE_CAPACITY: usize = 256;

/// Cloneable handle to one live connection
#[derive(Debug, Clone)]
pub struct Connection {
    identity: UserIdentity,
    id: Uuid,
    sender: mpsc::Sender<OutboundFrame>,
}

impl Connection {
    /// Create a connection handle and the receiving end of its queue
    ///
    /// The receiver is handed to the writer task that owns the socket sink.
    pub fn open(identity: UserIdentity) -> (Self, mpsc::Receiver<OutboundFrame>) {
        let (sender, receiver) = mpsc::channel(OUTBOUND_QUEUE_CAPACITY);
        let connection = Self {
            identity,
            id: Uuid::new_v4(),
            sender,
        };
        (connection, receiver)
    }

    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Enqueue a frame for the writer task
    ///
    /// # Errors
    ///
    /// Returns `BackendError::StateError` when the writer task has stopped
    /// or the queue is full. Never waits for room in the queue.
    pub fn send(&self, frame: OutboundFrame) -> Result<(), BackendError> {
        self.sender.try_send(frame).map_err(|e| match e {
            TrySendError::Full(_) => BackendError::state(format!(
                "outbound queue for {} ({}) is full",
                self.identity, self.id
            )),
            TrySendError::Closed(_) => BackendError::state(format!(
                "connection {} for {} is closed",
                self.id, self.identity
            )),
        })
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Whether two handles refer to the same underlying connection
    pub fn same_instance(&self, other: &Connection) -> bool {
        self.id == other.id
    }
}
