pub mod run_gui;
pub mod ports;
