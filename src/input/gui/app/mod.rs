pub mod gui_app;
pub mod keyboard_input;
pub mod ports;
pub mod ui;
