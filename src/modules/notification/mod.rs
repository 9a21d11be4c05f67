//! Outbound event channel for new-message notifications. The core only
//! publishes; delivery (push, mail, retries) belongs to the consumer on the
//! other end of the channel.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewMessageEvent {
    pub message_id: i64,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
}

pub type NotificationSender = UnboundedSender<NewMessageEvent>;
pub type NotificationReceiver = UnboundedReceiver<NewMessageEvent>;

pub fn channel() -> (NotificationSender, NotificationReceiver) {
    mpsc::unbounded_channel()
}

/// Drains the channel for the lifetime of the process. Stands in for the
/// real delivery worker; a dropped sender ends the loop.
pub async fn run_worker(mut rx: NotificationReceiver) {
    while let Some(event) = rx.recv().await {
        log::info!(
            "new message {} from {} to {}",
            event.message_id,
            event.sender_id,
            event.receiver_id
        );
    }
}
