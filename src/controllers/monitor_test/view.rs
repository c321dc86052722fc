use crate::controllers::monitor_test::session::TestSession;
use crate::core::data::colour::Colour;
use crate::core::patterns::definition::PatternDefinition;

/// Snapshot the presentation layer renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorTestView<'a> {
    pub state: TestSession,
    pub active_pattern: Option<&'a PatternDefinition>,
    /// Fill colour, only while a cycling pattern runs.
    pub current_colour: Option<Colour>,
    pub colour_index: usize,
    pub fullscreen_engaged: bool,
}
