//! Monitor testing suite: test selection, colour cycling and fullscreen.
//!
//! # Architecture
//!
//! - **Core**: `PatternCatalog` and recipes from `core/patterns`
//! - **Controller**: `MonitorTestController`, a synchronous state machine
//! - **Port**: `FullscreenHostPort`, implemented by the host adapter
//!
//! Fullscreen status is a mirror of the host. It only moves when the host
//! delivers a notification, never when a request is issued.

mod controller;
pub mod errors;
pub mod fullscreen;
pub mod ports;
pub mod session;
#[cfg(test)]
pub mod testing;
pub mod view;

pub use controller::MonitorTestController;
pub use errors::MonitorTestError;
pub use fullscreen::{
    FullscreenCoordinator, FullscreenNotification, FullscreenRequestDenied, FullscreenStatus,
};
pub use ports::{FullscreenHostPort, FullscreenListener, SubscriptionId};
pub use session::TestSession;
pub use view::MonitorTestView;
