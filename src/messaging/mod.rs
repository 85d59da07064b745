// Messaging module - lock-free channel from the scheduling thread to the UI

pub mod channels;
pub mod notification;

pub use channels::{NotificationConsumer, NotificationProducer, create_notification_channel};
pub use notification::Notification;
