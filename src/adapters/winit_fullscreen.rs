//! `FullscreenHostPort` backed by a winit window.
//!
//! winit applies fullscreen changes on its own schedule and the window
//! manager can change them without asking, so the adapter never reports a
//! request as done. It compares `Window::fullscreen()` against the last state
//! it reported each time it is polled and emits a change when they differ.

use tracing::{debug, warn};
use winit::event_loop::EventLoopProxy;
use winit::window::{Fullscreen, Window, WindowId};

use crate::controllers::monitor_test::{
    FullscreenHostPort, FullscreenListener, FullscreenNotification, FullscreenRequestDenied,
    SubscriptionId,
};
use crate::input::gui::events::GuiEvent;

pub struct WinitFullscreenHost {
    window: &'static Window,
    reported_engaged: bool,
    listeners: Vec<(SubscriptionId, Box<dyn FullscreenListener>)>,
    next_subscription: u64,
}

impl WinitFullscreenHost {
    pub fn new(window: &'static Window) -> Self {
        Self {
            window,
            reported_engaged: window.fullscreen().is_some(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Emits a change notification if the window's fullscreen state moved
    /// since the last poll.
    pub fn poll(&mut self) {
        let engaged = self.window.fullscreen().is_some();

        if engaged != self.reported_engaged {
            self.reported_engaged = engaged;
            debug!(engaged, "window fullscreen state changed");
            self.emit(FullscreenNotification::Changed { engaged });
        }
    }

    fn emit(&self, notification: FullscreenNotification) {
        for (_, listener) in &self.listeners {
            listener.notify(notification.clone());
        }
    }

    fn deny(&self, denied: FullscreenRequestDenied) {
        warn!(name = %denied.name, message = %denied.message, "fullscreen request rejected by host");
        self.emit(FullscreenNotification::EnterDenied(denied));
    }
}

impl FullscreenHostPort for WinitFullscreenHost {
    type Container = WindowId;

    fn request_enter(&mut self, container: &WindowId) {
        if *container != self.window.id() {
            self.deny(FullscreenRequestDenied::new(
                "InvalidStateError",
                "the test surface is not attached to this window",
            ));
            return;
        }

        let Some(monitor) = self.window.current_monitor() else {
            self.deny(FullscreenRequestDenied::new(
                "NotSupportedError",
                "no monitor is available for the window",
            ));
            return;
        };

        self.window
            .set_fullscreen(Some(Fullscreen::Borderless(Some(monitor))));
        self.poll();
    }

    fn request_exit(&mut self) {
        if self.window.fullscreen().is_none() {
            return;
        }

        self.window.set_fullscreen(None);
        self.poll();
    }

    fn is_engaged(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn subscribe(&mut self, listener: Box<dyn FullscreenListener>) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(existing, _)| *existing != id);
    }
}

/// Forwards host notifications onto the GUI event loop.
pub struct ProxyFullscreenListener {
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl ProxyFullscreenListener {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self { event_loop_proxy }
    }
}

impl FullscreenListener for ProxyFullscreenListener {
    fn notify(&self, notification: FullscreenNotification) {
        if self
            .event_loop_proxy
            .send_event(GuiEvent::Fullscreen(notification))
            .is_err()
        {
            debug!("fullscreen notification dropped, event loop closed");
        }
    }
}
