pub mod channel_event_publisher;

pub use channel_event_publisher::{ChannelEventPublisher, spawn_log_drain};
