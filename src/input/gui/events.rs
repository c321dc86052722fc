use crate::controllers::monitor_test::FullscreenNotification;

/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The fullscreen host reported a change or a denied request.
    /// Always delivered on a later turn of the loop than the request.
    Fullscreen(FullscreenNotification),
}
