//! Input adapters for the toolbox.
//!
//! This module contains adapters that receive input from the windowing
//! system and translate it into controller transitions.

#[cfg(feature = "gui")]
pub mod gui;
