//! GUI input adapter for the toolbox.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for the full-surface test pattern, and egui for the shell and overlay.

pub mod app;
pub mod commands;
pub mod events;

pub use commands::run_gui::RunGuiCommand;
