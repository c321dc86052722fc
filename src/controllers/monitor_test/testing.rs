//! In-memory fullscreen host for controller and coordinator tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::controllers::monitor_test::fullscreen::notification::{
    FullscreenNotification, FullscreenRequestDenied,
};
use crate::controllers::monitor_test::ports::{
    FullscreenHostPort, FullscreenListener, SubscriptionId,
};

pub const ATTACHED_SURFACE: u32 = 1;
pub const DETACHED_SURFACE: u32 = 0;

#[derive(Default)]
struct FakeHostState {
    engaged: bool,
    pending: Option<bool>,
    enter_requests: usize,
    exit_requests: usize,
    deny_next_enter: Option<FullscreenRequestDenied>,
    listeners: Vec<(SubscriptionId, Box<dyn FullscreenListener>)>,
    next_subscription: u64,
}

/// Requests stay pending until `settle` is called, like a real host that
/// answers on a later turn of the event loop.
#[derive(Clone, Default)]
pub struct FakeFullscreenHost {
    state: Rc<RefCell<FakeHostState>>,
}

impl FakeFullscreenHost {
    pub fn deny_next_enter(&self, denied: FullscreenRequestDenied) {
        self.state.borrow_mut().deny_next_enter = Some(denied);
    }

    /// Applies the last outstanding request.
    pub fn settle(&self) {
        let target = self.state.borrow_mut().pending.take();

        if let Some(engaged) = target {
            self.set_engaged(engaged);
        }
    }

    /// Leaves fullscreen without the application asking, like the platform
    /// exit key or the window manager.
    pub fn user_exits(&self) {
        self.set_engaged(false);
    }

    pub fn enter_requests(&self) -> usize {
        self.state.borrow().enter_requests
    }

    pub fn exit_requests(&self) -> usize {
        self.state.borrow().exit_requests
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    fn set_engaged(&self, engaged: bool) {
        let changed = {
            let mut state = self.state.borrow_mut();
            let changed = state.engaged != engaged;
            state.engaged = engaged;
            changed
        };

        if changed {
            self.emit(FullscreenNotification::Changed { engaged });
        }
    }

    fn emit(&self, notification: FullscreenNotification) {
        let state = self.state.borrow();

        for (_, listener) in &state.listeners {
            listener.notify(notification.clone());
        }
    }
}

impl FullscreenHostPort for FakeFullscreenHost {
    type Container = u32;

    fn request_enter(&mut self, container: &u32) {
        let denied = {
            let mut state = self.state.borrow_mut();
            state.enter_requests += 1;

            if *container == DETACHED_SURFACE {
                Some(FullscreenRequestDenied::new(
                    "TypeError",
                    "element is not connected",
                ))
            } else if let Some(denied) = state.deny_next_enter.take() {
                Some(denied)
            } else {
                state.pending = Some(true);
                None
            }
        };

        if let Some(denied) = denied {
            self.emit(FullscreenNotification::EnterDenied(denied));
        }
    }

    fn request_exit(&mut self) {
        let mut state = self.state.borrow_mut();
        state.exit_requests += 1;
        state.pending = Some(false);
    }

    fn is_engaged(&self) -> bool {
        self.state.borrow().engaged
    }

    fn subscribe(&mut self, listener: Box<dyn FullscreenListener>) -> SubscriptionId {
        let mut state = self.state.borrow_mut();
        state.next_subscription += 1;
        let id = SubscriptionId(state.next_subscription);
        state.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.state
            .borrow_mut()
            .listeners
            .retain(|(existing, _)| *existing != id);
    }
}

/// Listener that queues notifications for the test to deliver explicitly.
#[derive(Clone, Default)]
pub struct NotificationQueue {
    queue: Rc<RefCell<VecDeque<FullscreenNotification>>>,
}

impl NotificationQueue {
    pub fn listener(&self) -> Box<dyn FullscreenListener> {
        let queue = Rc::clone(&self.queue);
        Box::new(move |notification: FullscreenNotification| {
            queue.borrow_mut().push_back(notification);
        })
    }

    pub fn drain(&self) -> Vec<FullscreenNotification> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}
