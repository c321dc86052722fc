use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{debug, warn};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::KeyCode;
use winit::window::Window;

use crate::adapters::winit_fullscreen::WinitFullscreenHost;
use crate::controllers::monitor_test::FullscreenRequestDenied;
use crate::controllers::toolbox::Toolbox;
use crate::core::actions::render_pattern::render_pattern;
use crate::core::data::colour::Colour;
use crate::core::tool_kinds::ToolKinds;
use crate::input::gui::app::keyboard_input::{KeyCommand, key_command};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::ui::{apply_action, build_ui};
use crate::input::gui::events::GuiEvent;

const BACKGROUND: Colour = Colour::rgb(17, 24, 39);

/// What the framebuffer currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PresentedFrame {
    Background { width: u32, height: u32 },
    Pattern {
        pattern_id: &'static str,
        colour_index: usize,
        width: u32,
        height: u32,
    },
}

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    pub toolbox: Toolbox<WinitFullscreenHost>,
    presented: Option<PresentedFrame>,
    notice: Option<FullscreenRequestDenied>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        toolbox: Toolbox<WinitFullscreenHost>,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            toolbox,
            presented: None,
            notice: None,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.refresh_framebuffer();
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
        self.presented = None;
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let ctx = self.egui_ctx.clone();
        let mut actions = Vec::new();

        let output = ctx.run(raw_input, |ctx| {
            actions = build_ui(ctx, &self.toolbox, self.notice.as_ref());
        });

        for action in actions {
            apply_action(&mut self.toolbox, action, &mut self.notice);
        }

        output
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    /// Routes a user event. Returns true when the frame needs redrawing.
    pub fn handle_gui_event(&mut self, event: GuiEvent) -> bool {
        match event {
            GuiEvent::Fullscreen(notification) => {
                if let Some(denied) = self
                    .toolbox
                    .monitor_test_mut()
                    .handle_fullscreen_notification(notification)
                {
                    self.notice = Some(denied);
                }
                true
            }
        }
    }

    /// Returns true when the key changed anything.
    pub fn handle_key(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) -> bool {
        if !self.test_is_showing() || self.notice.is_some() {
            return false;
        }

        let text_editing = self.egui_ctx.wants_keyboard_input();
        let Some(command) = key_command(key_code, state, repeat, text_editing) else {
            return false;
        };

        debug!(?command, "keyboard command");
        let controller = self.toolbox.monitor_test_mut();
        match command {
            KeyCommand::ExitFullscreen => controller.exit_fullscreen(),
            KeyCommand::AdvanceColour => controller.advance_colour(),
            KeyCommand::ToggleFullscreen => controller.toggle_fullscreen(),
        }
        true
    }

    /// A click on the pattern itself, outside the overlay controls.
    pub fn handle_pattern_click(&mut self) -> bool {
        if !self.test_is_showing() || self.notice.is_some() {
            return false;
        }

        self.toolbox.monitor_test_mut().advance_colour();
        true
    }

    /// Lets the host report fullscreen changes it made on its own.
    pub fn poll_fullscreen(&mut self) {
        self.toolbox
            .monitor_test_mut()
            .fullscreen_mut()
            .host_mut()
            .poll();
    }

    pub fn shutdown(&mut self) {
        self.toolbox.monitor_test_mut().stop_test();
    }

    fn test_is_showing(&self) -> bool {
        self.toolbox.active_tool() == ToolKinds::MonitorTest
            && self.toolbox.monitor_test().session().is_running()
    }

    fn refresh_framebuffer(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let view = self.toolbox.monitor_test().view();
        let wanted = match view.active_pattern {
            Some(pattern) if self.test_is_showing() => PresentedFrame::Pattern {
                pattern_id: pattern.id,
                colour_index: view.colour_index,
                width: self.width,
                height: self.height,
            },
            _ => PresentedFrame::Background {
                width: self.width,
                height: self.height,
            },
        };

        if self.presented == Some(wanted) {
            return;
        }

        match (wanted, view.active_pattern) {
            (PresentedFrame::Pattern { colour_index, .. }, Some(pattern)) => {
                match render_pattern(&pattern.recipe, colour_index, self.width, self.height) {
                    Ok(buffer) => {
                        if !self.presenter.present_pattern(&buffer) {
                            warn!("pattern size does not match the surface, clearing");
                            self.presenter.clear(BACKGROUND);
                        }
                    }
                    Err(err) => {
                        warn!(%err, "failed to render pattern");
                        self.presenter.clear(BACKGROUND);
                    }
                }
            }
            _ => self.presenter.clear(BACKGROUND),
        }

        self.presented = Some(wanted);
    }
}
