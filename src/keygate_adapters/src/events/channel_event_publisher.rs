use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use keygate_core::{EventPublisher, IdentityEvent};

/// Event publisher backed by an unbounded in-process channel.
///
/// `publish` hands the event to the channel and returns immediately; the
/// triggering request never blocks on, retries, or fails because of
/// delivery. If the receiving side is gone the event is logged and dropped -
/// the preceding state mutation stands either way.
///
/// The receiver half is where a real broker transport plugs in; swapping it
/// out touches nothing upstream of this adapter.
#[derive(Clone)]
pub struct ChannelEventPublisher {
    sender: UnboundedSender<IdentityEvent>,
}

impl ChannelEventPublisher {
    pub fn new() -> (Self, UnboundedReceiver<IdentityEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl EventPublisher for ChannelEventPublisher {
    fn publish(&self, event: IdentityEvent) {
        if let Err(err) = self.sender.send(event) {
            tracing::warn!(error = %err, "identity event dropped, no consumer attached");
        }
    }
}

/// Consume events and log them - the stand-in for a message-broker
/// transport until one is wired up.
pub fn spawn_log_drain(mut receiver: UnboundedReceiver<IdentityEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = receiver.recv().await {
            let payload = serde_json::to_string(&event)
                .unwrap_or_else(|_| "<unserializable event>".to_string());
            tracing::info!(event = %payload, "publishing identity event");
        }
    })
}
