pub mod monitor_test;
pub mod toolbox;
