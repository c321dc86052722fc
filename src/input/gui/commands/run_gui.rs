use std::marker::PhantomData;

use tracing::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoopBuilder,
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::adapters::winit_fullscreen::{ProxyFullscreenListener, WinitFullscreenHost};
use crate::config::AppConfig;
use crate::controllers::monitor_test::MonitorTestController;
use crate::controllers::toolbox::Toolbox;
use crate::input::gui::{
    app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort},
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
    events::GuiEvent,
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: AppConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: AppConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let catalog = self.config.catalog()?;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        // The pixels surface borrows the window for the whole program.
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.config.window.title.as_str())
                .with_inner_size(LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ))
                .with_min_inner_size(LogicalSize::new(320.0, 240.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window);
        let controller = MonitorTestController::new(
            catalog,
            WinitFullscreenHost::new(window),
            window.id(),
            Box::new(ProxyFullscreenListener::new(event_loop_proxy)),
        );
        let mut app = GuiApp::new(window, &event_loop, presenter, Toolbox::new(controller));
        let mut redraw_pending = true;

        info!("toolbox window opened");

        event_loop.run(|event, elwt| match event {
            Event::UserEvent(gui_event) => {
                if app.handle_gui_event(gui_event) {
                    redraw_pending = true;
                }
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                // egui sees every event first; consumed ones never reach the pattern
                let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                if egui_repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        app.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = app.update_ui(window);

                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(err) = app.render(egui_output) {
                            error!(%err, "render failed");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        app.resize(size.width, size.height);
                        app.poll_fullscreen();
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        app.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::KeyboardInput { event: key_event, .. } if !egui_consumed => {
                        if let PhysicalKey::Code(key_code) = key_event.physical_key {
                            if app.handle_key(key_code, key_event.state, key_event.repeat) {
                                redraw_pending = true;
                            }
                        }
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } if !egui_consumed => {
                        if app.handle_pattern_click() {
                            redraw_pending = true;
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                app.poll_fullscreen();

                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
