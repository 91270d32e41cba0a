//! Toast notifications.

pub mod message;
pub mod queue;

pub use message::{Toast, ToastId, ToastMessage, ToastVariant};
pub use queue::{ToastConfig, ToastQueue};
