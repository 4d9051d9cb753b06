//! Business logic layer

pub mod notification;

pub use notification::NotificationDispatcher;
