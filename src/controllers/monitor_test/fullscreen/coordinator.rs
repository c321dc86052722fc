use tracing::{debug, info, warn};

use crate::controllers::monitor_test::fullscreen::notification::{
    FullscreenNotification, FullscreenRequestDenied,
};
use crate::controllers::monitor_test::fullscreen::status::FullscreenStatus;
use crate::controllers::monitor_test::ports::{
    FullscreenHostPort, FullscreenListener, SubscriptionId,
};

/// Mirrors the host's fullscreen state and forwards requests to it.
///
/// Mounting subscribes to host notifications exactly once; dropping the
/// coordinator releases the subscription.
pub struct FullscreenCoordinator<H: FullscreenHostPort> {
    host: H,
    subscription: Option<SubscriptionId>,
    status: FullscreenStatus,
}

impl<H: FullscreenHostPort> FullscreenCoordinator<H> {
    pub fn mount(mut host: H, listener: Box<dyn FullscreenListener>) -> Self {
        let status = FullscreenStatus::from_engaged(host.is_engaged());
        let subscription = host.subscribe(listener);

        debug!(subscription = subscription.0, ?status, "fullscreen coordinator mounted");

        Self {
            host,
            subscription: Some(subscription),
            status,
        }
    }

    #[must_use]
    pub fn status(&self) -> FullscreenStatus {
        self.status
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn request_enter(&mut self, container: &H::Container) {
        debug!("requesting fullscreen");
        self.host.request_enter(container);
    }

    /// Asks the host to leave fullscreen. Does nothing when the host is not
    /// engaged.
    pub fn request_exit(&mut self) {
        if !self.host.is_engaged() {
            debug!("fullscreen exit ignored, host not engaged");
            return;
        }

        debug!("requesting fullscreen exit");
        self.host.request_exit();
    }

    /// Applies a host notification. Returns the denial, if any, so the
    /// presentation layer can show it; status is left untouched in that case.
    pub fn handle_notification(
        &mut self,
        notification: FullscreenNotification,
    ) -> Option<FullscreenRequestDenied> {
        match notification {
            FullscreenNotification::Changed { engaged } => {
                let status = FullscreenStatus::from_engaged(engaged);

                if status != self.status {
                    info!(?status, "fullscreen status changed");
                }

                self.status = status;
                None
            }
            FullscreenNotification::EnterDenied(denied) => {
                warn!(name = %denied.name, message = %denied.message, "fullscreen request denied");
                Some(denied)
            }
        }
    }
}

impl<H: FullscreenHostPort> Drop for FullscreenCoordinator<H> {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.host.unsubscribe(subscription);
            debug!(subscription = subscription.0, "fullscreen coordinator unmounted");
        }
    }
}
