//! egui layout for the toolbox shell and the monitor test overlay.
//!
//! Drawing only records what the user asked for; the actions are applied to
//! the controllers after the frame, so every transition still runs to
//! completion one at a time. While a fullscreen notice is open everything
//! behind it is drawn disabled and only dismissing the notice is accepted.

use egui::{Align2, Color32, Context, Id, RichText};
use tracing::{debug, error};

use crate::controllers::monitor_test::{
    FullscreenHostPort, FullscreenRequestDenied, MonitorTestView,
};
use crate::controllers::toolbox::Toolbox;
use crate::core::patterns::catalog::PatternCatalog;
use crate::core::tool_kinds::ToolKinds;

/// Width below which the sidebar becomes a drawer behind the menu button.
const SIDEBAR_BREAKPOINT: f32 = 768.0;
const ACCENT: Color32 = Color32::from_rgb(192, 132, 252);
const DANGER: Color32 = Color32::from_rgb(220, 38, 38);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SelectTool(ToolKinds),
    ToggleSidebar,
    StartTest(&'static str),
    StopTest,
    AdvanceColour,
    ToggleFullscreen,
    DismissNotice,
}

pub fn build_ui<H: FullscreenHostPort>(
    ctx: &Context,
    toolbox: &Toolbox<H>,
    notice: Option<&FullscreenRequestDenied>,
) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let view = toolbox.monitor_test().view();
    let enabled = notice.is_none();

    if toolbox.active_tool() == ToolKinds::MonitorTest && view.state.is_running() {
        test_overlay(ctx, &view, enabled, &mut actions);
    } else {
        shell(ctx, toolbox, enabled, &mut actions);
    }

    if let Some(notice) = notice {
        fullscreen_notice(ctx, notice, &mut actions);
    }

    actions
}

pub fn apply_action<H: FullscreenHostPort>(
    toolbox: &mut Toolbox<H>,
    action: UiAction,
    notice: &mut Option<FullscreenRequestDenied>,
) {
    if notice.is_some() && action != UiAction::DismissNotice {
        debug!(?action, "ignored while the fullscreen notice is open");
        return;
    }

    match action {
        UiAction::SelectTool(tool) => toolbox.select(tool),
        UiAction::ToggleSidebar => toolbox.toggle_sidebar(),
        UiAction::StartTest(pattern_id) => {
            if let Err(err) = toolbox.monitor_test_mut().start_test(pattern_id) {
                error!(%err, "test selector offered a pattern outside the catalog");
            }
        }
        UiAction::StopTest => toolbox.monitor_test_mut().stop_test(),
        UiAction::AdvanceColour => toolbox.monitor_test_mut().advance_colour(),
        UiAction::ToggleFullscreen => toolbox.monitor_test_mut().toggle_fullscreen(),
        UiAction::DismissNotice => *notice = None,
    }
}

fn shell<H: FullscreenHostPort>(
    ctx: &Context,
    toolbox: &Toolbox<H>,
    enabled: bool,
    actions: &mut Vec<UiAction>,
) {
    let wide = ctx.screen_rect().width() >= SIDEBAR_BREAKPOINT;
    let active = toolbox.active_tool();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.set_enabled(enabled);
        ui.horizontal(|ui| {
            if !wide && ui.button("☰").on_hover_text("Open sidebar").clicked() {
                actions.push(UiAction::ToggleSidebar);
            }
            ui.label(RichText::new(active.icon()).size(20.0).color(ACCENT));
            ui.heading(active.display_name());
        });
    });

    if wide || toolbox.sidebar_open() {
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(240.0)
            .show(ctx, |ui| {
                ui.set_enabled(enabled);
                ui.add_space(12.0);
                ui.heading("Frontend Dev Toolbox");
                ui.separator();

                for &tool in ToolKinds::ALL {
                    let label = format!("{}  {}", tool.icon(), tool.display_name());
                    if ui.selectable_label(tool == active, label).clicked() {
                        actions.push(UiAction::SelectTool(tool));
                    }
                }
            });
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.set_enabled(enabled);
        match active {
            ToolKinds::MonitorTest => test_selector(ui, toolbox.monitor_test().catalog(), actions),
            other => placeholder(ui, other),
        }
    });
}

fn test_selector(ui: &mut egui::Ui, catalog: &PatternCatalog, actions: &mut Vec<UiAction>) {
    ui.label(RichText::new("Monitor Testing Suite").size(28.0).strong());
    ui.label("Select a test to begin diagnosing your monitor's performance and quality.");
    ui.add_space(24.0);

    ui.horizontal_wrapped(|ui| {
        for pattern in catalog.list() {
            egui::Frame::group(ui.style())
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.set_width(260.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(pattern.name).size(18.0).strong().color(ACCENT));
                        ui.label(pattern.description);
                        ui.add_space(8.0);
                        if ui.button("Start Test").clicked() {
                            actions.push(UiAction::StartTest(pattern.id));
                        }
                    });
                });
        }
    });
}

fn placeholder(ui: &mut egui::Ui, tool: ToolKinds) {
    egui::Frame::group(ui.style()).inner_margin(24.0).show(ui, |ui| {
        ui.label(RichText::new(tool.display_name()).size(22.0).strong());
        ui.label(format!(
            "This tool is under construction. Soon you'll be able to {}!",
            tool.teaser()
        ));
    });
}

fn test_overlay(
    ctx: &Context,
    view: &MonitorTestView<'_>,
    enabled: bool,
    actions: &mut Vec<UiAction>,
) {
    let cycling = view.current_colour.is_some();

    egui::Area::new(Id::new("monitor_test_controls"))
        .anchor(Align2::RIGHT_TOP, [-16.0, 16.0])
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(Color32::from_black_alpha(128))
                .rounding(8.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_enabled(enabled);
                    ui.horizontal(|ui| {
                        if cycling && ui.button("▶").on_hover_text("Next Color").clicked() {
                            actions.push(UiAction::AdvanceColour);
                        }

                        let fullscreen_label = if view.fullscreen_engaged {
                            "Exit Fullscreen"
                        } else {
                            "Enter Fullscreen"
                        };
                        if ui.button(fullscreen_label).clicked() {
                            actions.push(UiAction::ToggleFullscreen);
                        }

                        let exit = egui::Button::new(RichText::new("✖").color(Color32::WHITE)).fill(DANGER);
                        if ui.add(exit).on_hover_text("Exit Test").clicked() {
                            actions.push(UiAction::StopTest);
                        }
                    });
                });
        });

    let hint = if cycling {
        "Click anywhere to cycle through colors. Press ESC to exit fullscreen."
    } else {
        "Press ESC to exit fullscreen."
    };

    egui::Area::new(Id::new("monitor_test_hint"))
        .anchor(Align2::CENTER_BOTTOM, [0.0, -16.0])
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(Color32::from_black_alpha(128))
                .rounding(8.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(hint).color(Color32::WHITE));
                });
        });
}

fn fullscreen_notice(ctx: &Context, notice: &FullscreenRequestDenied, actions: &mut Vec<UiAction>) {
    egui::Window::new("Fullscreen unavailable")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(notice.notice_text());
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                actions.push(UiAction::DismissNotice);
            }
        });
}
