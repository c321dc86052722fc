use tracing::debug;

use crate::controllers::monitor_test::{FullscreenHostPort, MonitorTestController};
use crate::core::tool_kinds::ToolKinds;

/// Navigation shell: which tool is showing and whether the drawer is open.
pub struct Toolbox<H: FullscreenHostPort> {
    active_tool: ToolKinds,
    sidebar_open: bool,
    monitor_test: MonitorTestController<H>,
}

impl<H: FullscreenHostPort> Toolbox<H> {
    pub fn new(monitor_test: MonitorTestController<H>) -> Self {
        Self {
            active_tool: ToolKinds::default(),
            sidebar_open: false,
            monitor_test,
        }
    }

    #[must_use]
    pub fn active_tool(&self) -> ToolKinds {
        self.active_tool
    }

    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn monitor_test(&self) -> &MonitorTestController<H> {
        &self.monitor_test
    }

    pub fn monitor_test_mut(&mut self) -> &mut MonitorTestController<H> {
        &mut self.monitor_test
    }

    /// Switches tools and closes the drawer. Leaving the monitor test ends
    /// any running session.
    pub fn select(&mut self, tool: ToolKinds) {
        if tool != self.active_tool && self.active_tool == ToolKinds::MonitorTest {
            self.monitor_test.stop_test();
        }

        debug!(tool = tool.id(), "tool selected");
        self.active_tool = tool;
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::monitor_test::testing::{
        ATTACHED_SURFACE, FakeFullscreenHost, NotificationQueue,
    };
    use crate::core::patterns::catalog::{DEAD_PIXEL_ID, PatternCatalog};

    fn toolbox() -> Toolbox<FakeFullscreenHost> {
        let controller = MonitorTestController::new(
            PatternCatalog::default(),
            FakeFullscreenHost::default(),
            ATTACHED_SURFACE,
            NotificationQueue::default().listener(),
        );

        Toolbox::new(controller)
    }

    #[test]
    fn starts_on_colour_palette_with_sidebar_closed() {
        let toolbox = toolbox();

        assert_eq!(toolbox.active_tool(), ToolKinds::ColourPalette);
        assert!(!toolbox.sidebar_open());
    }

    #[test]
    fn select_closes_the_sidebar() {
        let mut toolbox = toolbox();
        toolbox.toggle_sidebar();
        assert!(toolbox.sidebar_open());

        toolbox.select(ToolKinds::RegexGenerator);

        assert_eq!(toolbox.active_tool(), ToolKinds::RegexGenerator);
        assert!(!toolbox.sidebar_open());
    }

    #[test]
    fn leaving_monitor_test_stops_the_running_test() {
        let mut toolbox = toolbox();
        toolbox.select(ToolKinds::MonitorTest);
        toolbox.monitor_test_mut().start_test(DEAD_PIXEL_ID).unwrap();

        toolbox.select(ToolKinds::SvgShape);

        assert!(!toolbox.monitor_test().session().is_running());
    }

    #[test]
    fn reselecting_monitor_test_keeps_the_running_test() {
        let mut toolbox = toolbox();
        toolbox.select(ToolKinds::MonitorTest);
        toolbox.monitor_test_mut().start_test(DEAD_PIXEL_ID).unwrap();

        toolbox.select(ToolKinds::MonitorTest);

        assert!(toolbox.monitor_test().session().is_running());
    }
}
