use tracing::{debug, error, info};

use crate::controllers::monitor_test::errors::MonitorTestError;
use crate::controllers::monitor_test::fullscreen::{
    FullscreenCoordinator, FullscreenNotification, FullscreenRequestDenied,
};
use crate::controllers::monitor_test::ports::{FullscreenHostPort, FullscreenListener};
use crate::controllers::monitor_test::session::{ColourCycle, TestSession};
use crate::controllers::monitor_test::view::MonitorTestView;
use crate::core::patterns::catalog::PatternCatalog;
use crate::core::patterns::definition::PatternDefinition;

/// State machine behind the monitor testing suite.
///
/// Every transition runs synchronously to completion. The only asynchronous
/// edge is fullscreen, whose confirmed status arrives through
/// [`MonitorTestController::handle_fullscreen_notification`].
pub struct MonitorTestController<H: FullscreenHostPort> {
    catalog: PatternCatalog,
    session: TestSession,
    colour_cycle: ColourCycle,
    fullscreen: FullscreenCoordinator<H>,
    container: H::Container,
}

impl<H: FullscreenHostPort> MonitorTestController<H> {
    pub fn new(
        catalog: PatternCatalog,
        host: H,
        container: H::Container,
        listener: Box<dyn FullscreenListener>,
    ) -> Self {
        Self {
            catalog,
            session: TestSession::Idle,
            colour_cycle: ColourCycle::default(),
            fullscreen: FullscreenCoordinator::mount(host, listener),
            container,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn session(&self) -> TestSession {
        self.session
    }

    pub fn fullscreen_mut(&mut self) -> &mut FullscreenCoordinator<H> {
        &mut self.fullscreen
    }

    pub fn start_test(&mut self, pattern_id: &str) -> Result<(), MonitorTestError> {
        if let TestSession::RunningTest { pattern_id: running } = self.session {
            debug!(requested = pattern_id, running, "start ignored, a test is already running");
            return Ok(());
        }

        let pattern = self.catalog.lookup(pattern_id).map_err(|_| {
            error!(pattern_id, "start requested for a pattern outside the catalog");
            MonitorTestError::InvalidPatternReference {
                id: pattern_id.to_owned(),
            }
        })?;

        self.session = TestSession::RunningTest {
            pattern_id: pattern.id,
        };
        self.colour_cycle.reset();

        info!(pattern_id = pattern.id, "monitor test started");
        Ok(())
    }

    pub fn stop_test(&mut self) {
        if let TestSession::RunningTest { pattern_id } = self.session {
            self.fullscreen.request_exit();
            self.session = TestSession::Idle;
            info!(pattern_id, "monitor test stopped");
        }

        self.colour_cycle.reset();
    }

    /// Steps to the next palette colour. Only meaningful for cycling patterns.
    pub fn advance_colour(&mut self) {
        let Some(palette_len) = self
            .active_pattern()
            .and_then(|pattern| pattern.recipe.palette())
            .map(|palette| palette.len())
        else {
            debug!("advance ignored, no cycling pattern running");
            return;
        };

        self.colour_cycle.advance(palette_len);
        debug!(index = self.colour_cycle.index(), "colour advanced");
    }

    /// Fire-and-forget; the confirmed status only changes on a host notification.
    pub fn toggle_fullscreen(&mut self) {
        if !self.session.is_running() {
            debug!("fullscreen toggle ignored, no test running");
            return;
        }

        if self.fullscreen.status().is_engaged() {
            self.fullscreen.request_exit();
        } else {
            self.fullscreen.request_enter(&self.container);
        }
    }

    /// Leaves fullscreen without ending the test.
    pub fn exit_fullscreen(&mut self) {
        self.fullscreen.request_exit();
    }

    pub fn handle_fullscreen_notification(
        &mut self,
        notification: FullscreenNotification,
    ) -> Option<FullscreenRequestDenied> {
        self.fullscreen.handle_notification(notification)
    }

    #[must_use]
    pub fn active_pattern(&self) -> Option<&PatternDefinition> {
        let pattern_id = self.session.pattern_id()?;

        match self.catalog.lookup(pattern_id) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                error!(%err, "running session references a pattern outside the catalog");
                None
            }
        }
    }

    #[must_use]
    pub fn view(&self) -> MonitorTestView<'_> {
        let active_pattern = self.active_pattern();
        let current_colour = active_pattern
            .and_then(|pattern| pattern.recipe.palette())
            .map(|palette| palette.get_wrapped(self.colour_cycle.index()));

        MonitorTestView {
            state: self.session,
            active_pattern,
            current_colour,
            colour_index: self.colour_cycle.index(),
            fullscreen_engaged: self.fullscreen.status().is_engaged(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::monitor_test::testing::{
        ATTACHED_SURFACE, DETACHED_SURFACE, FakeFullscreenHost, NotificationQueue,
    };
    use crate::core::data::colour::Colour;
    use crate::core::data::palette::ColourPalette;
    use crate::core::patterns::catalog::{CONTRAST_ID, DEAD_PIXEL_ID, GRADIENT_ID};
    use proptest::prelude::*;

    struct Harness {
        controller: MonitorTestController<FakeFullscreenHost>,
        host: FakeFullscreenHost,
        queue: NotificationQueue,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_container(ATTACHED_SURFACE)
        }

        fn with_container(container: u32) -> Self {
            let host = FakeFullscreenHost::default();
            let queue = NotificationQueue::default();
            let controller = MonitorTestController::new(
                PatternCatalog::default(),
                host.clone(),
                container,
                queue.listener(),
            );

            Self {
                controller,
                host,
                queue,
            }
        }

        fn deliver(&mut self) -> Vec<FullscreenRequestDenied> {
            self.queue
                .drain()
                .into_iter()
                .filter_map(|n| self.controller.handle_fullscreen_notification(n))
                .collect()
        }

        fn settle(&mut self) -> Vec<FullscreenRequestDenied> {
            self.host.settle();
            self.deliver()
        }
    }

    #[test]
    fn initial_state_is_idle_and_windowed() {
        let harness = Harness::new();
        let view = harness.controller.view();

        assert_eq!(view.state, TestSession::Idle);
        assert_eq!(view.active_pattern, None);
        assert_eq!(view.current_colour, None);
        assert!(!view.fullscreen_engaged);
    }

    #[test]
    fn start_test_runs_every_catalog_pattern() {
        let catalog = PatternCatalog::default();

        for pattern in catalog.list() {
            let mut harness = Harness::new();
            harness.controller.start_test(pattern.id).unwrap();
            let view = harness.controller.view();

            assert_eq!(
                view.state,
                TestSession::RunningTest {
                    pattern_id: pattern.id
                }
            );
            assert_eq!(view.active_pattern.map(|p| p.id), Some(pattern.id));

            let expected = pattern.recipe.palette().map(|palette| palette.colours()[0]);
            assert_eq!(view.current_colour, expected);
        }
    }

    #[test]
    fn start_test_with_unknown_id_is_rejected_and_state_unchanged() {
        let mut harness = Harness::new();

        assert_eq!(
            harness.controller.start_test("burnIn"),
            Err(MonitorTestError::InvalidPatternReference {
                id: "burnIn".to_owned()
            })
        );
        assert_eq!(harness.controller.session(), TestSession::Idle);
    }

    #[test]
    fn start_test_while_running_keeps_current_session() {
        let mut harness = Harness::new();
        harness.controller.start_test(DEAD_PIXEL_ID).unwrap();
        harness.controller.advance_colour();

        harness.controller.start_test(CONTRAST_ID).unwrap();

        let view = harness.controller.view();
        assert_eq!(view.active_pattern.map(|p| p.id), Some(DEAD_PIXEL_ID));
        assert_eq!(view.colour_index, 1);
    }

    #[test]
    fn dead_pixel_then_gradient_scenario() {
        let mut harness = Harness::new();

        harness.controller.start_test(DEAD_PIXEL_ID).unwrap();
        for _ in 0..3 {
            harness.controller.advance_colour();
        }
        assert_eq!(harness.controller.view().current_colour, Some(Colour::GREEN));

        harness.controller.stop_test();
        assert_eq!(harness.controller.view().state, TestSession::Idle);

        harness.controller.start_test(GRADIENT_ID).unwrap();
        let before = harness.controller.view().current_colour;
        harness.controller.advance_colour();
        let after = harness.controller.view();

        assert_eq!(after.current_colour, before);
        assert_eq!(after.current_colour, None);
        assert_eq!(after.colour_index, 0);
    }

    #[test]
    fn advance_outside_a_test_is_a_noop() {
        let mut harness = Harness::new();

        harness.controller.advance_colour();

        assert_eq!(harness.controller.view().colour_index, 0);
    }

    #[test]
    fn stop_test_when_idle_is_a_noop() {
        let mut harness = Harness::new();

        harness.controller.stop_test();

        assert_eq!(harness.controller.session(), TestSession::Idle);
        assert_eq!(harness.host.exit_requests(), 0);
    }

    #[test]
    fn toggle_enters_after_confirmation_only() {
        let mut harness = Harness::new();
        harness.controller.start_test(CONTRAST_ID).unwrap();

        harness.controller.toggle_fullscreen();
        assert_eq!(harness.host.enter_requests(), 1);
        assert!(!harness.controller.view().fullscreen_engaged);

        harness.settle();
        assert!(harness.controller.view().fullscreen_engaged);

        harness.controller.toggle_fullscreen();
        assert!(harness.controller.view().fullscreen_engaged);

        harness.settle();
        assert!(!harness.controller.view().fullscreen_engaged);
        assert_eq!(harness.host.exit_requests(), 1);
    }

    #[test]
    fn toggle_without_a_test_does_nothing() {
        let mut harness = Harness::new();

        harness.controller.toggle_fullscreen();

        assert_eq!(harness.host.enter_requests(), 0);
    }

    #[test]
    fn stop_test_exits_fullscreen_and_resets_colour() {
        let mut harness = Harness::new();
        harness.controller.start_test(DEAD_PIXEL_ID).unwrap();
        harness.controller.advance_colour();
        harness.controller.advance_colour();
        harness.controller.toggle_fullscreen();
        harness.settle();

        harness.controller.stop_test();
        harness.settle();

        let view = harness.controller.view();
        assert_eq!(view.state, TestSession::Idle);
        assert_eq!(view.colour_index, 0);
        assert!(!view.fullscreen_engaged);
        assert_eq!(harness.host.exit_requests(), 1);
    }

    #[test]
    fn external_exit_keeps_the_session_running() {
        let mut harness = Harness::new();
        harness.controller.start_test(GRADIENT_ID).unwrap();
        harness.controller.toggle_fullscreen();
        harness.settle();

        harness.host.user_exits();
        harness.deliver();

        let view = harness.controller.view();
        assert!(!view.fullscreen_engaged);
        assert_eq!(
            view.state,
            TestSession::RunningTest {
                pattern_id: GRADIENT_ID
            }
        );
    }

    #[test]
    fn exit_fullscreen_keeps_the_session_running() {
        let mut harness = Harness::new();
        harness.controller.start_test(DEAD_PIXEL_ID).unwrap();
        harness.controller.toggle_fullscreen();
        harness.settle();

        harness.controller.exit_fullscreen();
        harness.settle();

        assert!(!harness.controller.view().fullscreen_engaged);
        assert!(harness.controller.session().is_running());
    }

    #[test]
    fn denied_request_is_surfaced_and_session_stays_usable() {
        let mut harness = Harness::new();
        harness.controller.start_test(DEAD_PIXEL_ID).unwrap();
        harness
            .host
            .deny_next_enter(FullscreenRequestDenied::new("NotAllowedError", "permission denied"));

        harness.controller.toggle_fullscreen();
        let denials = harness.deliver();

        assert_eq!(denials.len(), 1);
        assert_eq!(denials[0].message, "permission denied");
        assert!(!harness.controller.view().fullscreen_engaged);

        harness.controller.toggle_fullscreen();
        harness.settle();
        assert!(harness.controller.view().fullscreen_engaged);
    }

    #[test]
    fn detached_container_is_denied() {
        let mut harness = Harness::with_container(DETACHED_SURFACE);
        harness.controller.start_test(CONTRAST_ID).unwrap();

        harness.controller.toggle_fullscreen();

        assert_eq!(harness.deliver().len(), 1);
        assert!(!harness.controller.view().fullscreen_engaged);
    }

    #[test]
    fn dropping_the_controller_releases_the_subscription() {
        let harness = Harness::new();
        assert_eq!(harness.host.listener_count(), 1);

        let host = harness.host.clone();
        drop(harness);

        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn custom_palette_cycles_its_own_length() {
        let host = FakeFullscreenHost::default();
        let queue = NotificationQueue::default();
        let palette = ColourPalette::new(vec![Colour::RED, Colour::BLUE]).unwrap();
        let catalog = PatternCatalog::with_recipes(
            palette,
            crate::core::patterns::recipe::RenderRecipe::reference_gradient(),
            crate::core::patterns::recipe::RenderRecipe::reference_contrast(),
        );
        let mut controller = MonitorTestController::new(catalog, host, ATTACHED_SURFACE, queue.listener());

        controller.start_test(DEAD_PIXEL_ID).unwrap();
        controller.advance_colour();
        controller.advance_colour();

        assert_eq!(controller.view().current_colour, Some(Colour::RED));
    }

    proptest! {
        #[test]
        fn advancing_n_times_lands_on_n_mod_len(n in 0usize..64) {
            let mut harness = Harness::new();
            harness.controller.start_test(DEAD_PIXEL_ID).unwrap();

            for _ in 0..n {
                harness.controller.advance_colour();
            }

            let palette = ColourPalette::reference();
            let view = harness.controller.view();
            prop_assert_eq!(view.colour_index, n % palette.len());
            prop_assert_eq!(view.current_colour, Some(palette.colours()[n % palette.len()]));
        }

        #[test]
        fn advancing_static_patterns_never_changes_colour(
            pattern_id in prop_oneof![Just(GRADIENT_ID), Just(CONTRAST_ID)],
            n in 0usize..16,
        ) {
            let mut harness = Harness::new();
            harness.controller.start_test(pattern_id).unwrap();

            for _ in 0..n {
                harness.controller.advance_colour();
            }

            let view = harness.controller.view();
            prop_assert_eq!(view.current_colour, None);
            prop_assert_eq!(view.colour_index, 0);
        }

        #[test]
        fn stop_always_resets(n in 0usize..32, fullscreen in any::<bool>()) {
            let mut harness = Harness::new();
            harness.controller.start_test(DEAD_PIXEL_ID).unwrap();
            for _ in 0..n {
                harness.controller.advance_colour();
            }
            if fullscreen {
                harness.controller.toggle_fullscreen();
                harness.settle();
            }

            harness.controller.stop_test();
            harness.settle();

            let view = harness.controller.view();
            prop_assert_eq!(view.state, TestSession::Idle);
            prop_assert_eq!(view.colour_index, 0);
            prop_assert!(!view.fullscreen_engaged);
        }

        #[test]
        fn toggles_without_notifications_never_move_status(
            toggles in 1usize..6,
            start_engaged in any::<bool>(),
        ) {
            let mut harness = Harness::new();
            harness.controller.start_test(CONTRAST_ID).unwrap();
            if start_engaged {
                harness.controller.toggle_fullscreen();
                harness.settle();
            }
            let confirmed = harness.controller.view().fullscreen_engaged;

            for _ in 0..toggles {
                harness.controller.toggle_fullscreen();
                prop_assert_eq!(harness.controller.view().fullscreen_engaged, confirmed);
            }

            harness.host.settle();
            prop_assert_eq!(harness.controller.view().fullscreen_engaged, confirmed);
        }
    }
}
