//! Adapters between the core and external libraries.

pub mod pixel_format;
#[cfg(feature = "gui")]
pub mod winit_fullscreen;
