use crate::controllers::monitor_test::fullscreen::notification::FullscreenNotification;

/// Receives fullscreen notifications from the host.
pub trait FullscreenListener {
    fn notify(&self, notification: FullscreenNotification);
}

impl<F> FullscreenListener for F
where
    F: Fn(FullscreenNotification),
{
    #[inline]
    fn notify(&self, notification: FullscreenNotification) {
        self(notification)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// The host environment's process-wide fullscreen capability.
///
/// Requests never report their outcome directly. Success, failure and any
/// change the host makes on its own (a window manager shortcut, the
/// platform exit key) arrive later through the subscribed listeners.
/// Only one container can be fullscreen at a time; the last request wins.
pub trait FullscreenHostPort {
    /// Handle to the visual container that should fill the screen.
    type Container;

    fn request_enter(&mut self, container: &Self::Container);
    fn request_exit(&mut self);
    fn is_engaged(&self) -> bool;
    fn subscribe(&mut self, listener: Box<dyn FullscreenListener>) -> SubscriptionId;
    fn unsubscribe(&mut self, id: SubscriptionId);
}
