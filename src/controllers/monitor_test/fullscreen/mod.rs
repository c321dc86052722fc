pub mod coordinator;
pub mod notification;
pub mod status;

pub use coordinator::FullscreenCoordinator;
pub use notification::{FullscreenNotification, FullscreenRequestDenied};
pub use status::FullscreenStatus;
