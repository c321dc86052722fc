pub mod render_pattern;
