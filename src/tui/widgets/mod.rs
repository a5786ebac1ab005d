//! Reusable widgets

pub mod input;
pub mod notification;

pub use input::InputField;
pub use notification::{Notification, NotificationKind, NotificationQueue, NotificationWidget};
