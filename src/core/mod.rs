pub mod actions;
pub mod data;
pub mod patterns;
pub mod tool_kinds;
