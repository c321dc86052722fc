mod adapters;
pub mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
pub mod logging;
#[cfg(feature = "gui")]
mod presenters;

pub use adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba, fill_rgba};
pub use config::{AppConfig, ConfigError};
pub use controllers::monitor_test::{
    FullscreenCoordinator, FullscreenHostPort, FullscreenListener, FullscreenNotification,
    FullscreenRequestDenied, FullscreenStatus, MonitorTestController, MonitorTestError,
    MonitorTestView, SubscriptionId, TestSession,
};
pub use controllers::toolbox::Toolbox;
pub use crate::core::actions::render_pattern::{render_pattern, render_pattern_into};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::palette::ColourPalette;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::patterns::catalog::PatternCatalog;
pub use crate::core::patterns::definition::PatternDefinition;
pub use crate::core::patterns::recipe::RenderRecipe;
pub use crate::core::tool_kinds::ToolKinds;

#[cfg(feature = "gui")]
pub use input::gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
