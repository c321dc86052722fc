//! Port definitions for the monitor test controller.
//!
//! Contains the trait the controller uses to reach the host environment's
//! fullscreen capability.

pub mod fullscreen_host;

pub use fullscreen_host::{FullscreenHostPort, FullscreenListener, SubscriptionId};
