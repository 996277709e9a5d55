//! Reusable UI components
//!
//! Small widgets shared by both text panels and the control bar.

use crate::theme;
use eframe::egui;

/// Small dim caption above a panel
pub fn caption(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(egui::RichText::new(text).size(theme::FONT_CAPTION).color(theme::TEXT_DIM))
            .selectable(false),
    );
}

/// Button label with a leading Phosphor icon
pub fn icon_label(icon: &str, text: &str) -> String {
    format!("{} {}", icon, text)
}

/// Multiline text area filling the remaining panel space
pub fn text_area<'t>(text: &'t mut dyn egui::TextBuffer, hint: &str, color: egui::Color32) -> egui::TextEdit<'t> {
    egui::TextEdit::multiline(text)
        .hint_text(egui::RichText::new(hint).color(theme::TEXT_DIM))
        .font(egui::TextStyle::Monospace)
        .text_color(color)
        .frame(false)
        .desired_width(f32::INFINITY)
        .lock_focus(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_label_puts_icon_first() {
        assert_eq!(icon_label("*", "生成"), "* 生成");
    }
}
