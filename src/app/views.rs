//! View rendering (text panels, control bar)

use super::context_menu::text_context_menu;
use super::App;
use crate::constants::*;
use crate::theme;
use crate::ui::components::{caption, icon_label, text_area};
use eframe::egui;

/// Button pressed in the control bar this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControlAction {
    Generate,
    Copy,
    Clear,
}

impl App {
    /// Bottom bar: group size field and the three action buttons.
    pub(crate) fn render_control_bar(&mut self, ui: &mut egui::Ui) -> Option<ControlAction> {
        let mut action = None;
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(egui::RichText::new(LABEL_GROUP_SIZE).size(theme::FONT_LABEL))
                    .selectable(false),
            );
            let field = ui.add(
                egui::TextEdit::singleline(&mut self.state.group_size)
                    .desired_width(theme::GROUP_SIZE_FIELD_WIDTH)
                    .horizontal_align(egui::Align::Center),
            );
            if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = Some(ControlAction::Generate);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Right-to-left: added in reverse of the on-screen order.
                if ui
                    .add(theme::button_danger(icon_label(egui_phosphor::regular::TRASH, LABEL_CLEAR)))
                    .clicked()
                {
                    action = Some(ControlAction::Clear);
                }
                if ui
                    .add(theme::button(icon_label(egui_phosphor::regular::COPY, LABEL_COPY)))
                    .clicked()
                {
                    action = Some(ControlAction::Copy);
                }
                if ui
                    .add(theme::button_accent(icon_label(egui_phosphor::regular::LIGHTNING, LABEL_GENERATE)))
                    .clicked()
                {
                    action = Some(ControlAction::Generate);
                }
            });
        });
        action
    }

    /// Input and output panels side by side, equal width.
    pub(crate) fn render_text_panels(&mut self, ui: &mut egui::Ui) {
        let height = ui.available_height();
        ui.columns(2, |columns| {
            Self::panel(&mut columns[0], LABEL_INPUT, height, |ui, fill| {
                let response = ui.add(
                    text_area(&mut self.state.input, HINT_INPUT, theme::TEXT_SECONDARY).min_size(fill),
                );
                text_context_menu(&response, &self.state.input, true);
            });

            let color = if self.state.output_is_error {
                theme::STATUS_ERROR
            } else {
                theme::TEXT_SECONDARY
            };
            Self::panel(&mut columns[1], LABEL_OUTPUT, height, |ui, fill| {
                let mut view: &str = &self.state.output;
                let response = ui.add(text_area(&mut view, HINT_OUTPUT, color).min_size(fill));
                text_context_menu(&response, &self.state.output, false);
            });
        });
    }

    /// Captioned, framed, scrollable panel. `add_contents` receives the visible
    /// area so the text widget can fill it.
    fn panel(
        ui: &mut egui::Ui,
        title: &str,
        height: f32,
        add_contents: impl FnOnce(&mut egui::Ui, egui::Vec2),
    ) {
        ui.set_min_height(height);
        caption(ui, title);
        ui.add_space(theme::SPACING_SM / 2.0);
        theme::panel_frame().show(ui, |ui| {
            let fill = ui.available_size();
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| add_contents(ui, fill));
        });
    }
}
