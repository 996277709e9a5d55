//! App module - contains the main application state and logic

mod context_menu;
mod state;
mod toast;
mod views;

pub use state::{GenerateError, GeneratorState};

use crate::constants::{MSG_COPIED, MSG_COPIED_EMPTY};
use crate::{fonts, theme};
use eframe::egui;
use toast::Toast;
use tracing::{debug, info, warn};
use views::ControlAction;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) state: GeneratorState,
    pub(crate) toast: Option<Toast>,
    // Central panel rect for toast positioning
    pub(crate) central_panel_rect: Option<egui::Rect>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & ACTIONS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        fonts::install(&cc.egui_ctx);
        theme::apply_visuals(&cc.egui_ctx);

        Self {
            state: GeneratorState::default(),
            toast: None,
            central_panel_rect: None,
            needs_center: true,
        }
    }

    pub(crate) fn handle(&mut self, ctx: &egui::Context, action: ControlAction) {
        match action {
            ControlAction::Generate => self.generate(),
            ControlAction::Copy => self.copy_output(ctx),
            ControlAction::Clear => {
                self.state.clear();
                self.toast = None;
                debug!("Fields cleared");
            }
        }
    }

    fn generate(&mut self) {
        match self.state.generate() {
            Ok(()) => debug!(
                input_bytes = self.state.input.len(),
                output_bytes = self.state.output.len(),
                group_size = %self.state.group_size.trim(),
                "Generated output"
            ),
            Err(GenerateError::InvalidNumber(e)) => {
                warn!(error = %e, field = %self.state.group_size, "Group size is not an integer")
            }
            Err(e) => warn!(error = ?e, "Generate rejected input"),
        }
    }

    fn copy_output(&mut self, ctx: &egui::Context) {
        let text = self.state.clipboard_text().to_owned();
        info!(bytes = text.len(), "Copying output to clipboard");
        let message = if text.is_empty() { MSG_COPIED_EMPTY } else { MSG_COPIED };
        let color = if text.is_empty() { theme::TEXT_DIM } else { theme::STATUS_SUCCESS };
        ctx.copy_text(text);
        self.toast = Some(Toast::new(message, color));
    }
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Control bar (must be added BEFORE CentralPanel)
        let action = egui::TopBottomPanel::bottom("control_bar")
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin { left: 8, right: 8, top: 2, bottom: 8 }),
            )
            .show(ctx, |ui| self.render_control_bar(ui))
            .inner;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(8)),
            )
            .show(ctx, |ui| {
                self.central_panel_rect = Some(ui.max_rect());
                self.render_text_panels(ui);
            });

        if let Some(action) = action {
            self.handle(ctx, action);
        }

        if let Some(panel_rect) = self.central_panel_rect {
            toast::show(ctx, &mut self.toast, panel_rect);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
    }
}
