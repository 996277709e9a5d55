//! Right-click menu shared by the input and output text panels

use crate::constants::{LABEL_COPY, LABEL_CUT, LABEL_PASTE, LABEL_SELECT_ALL};
use crate::theme;
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextAction {
    Cut,
    Copy,
    Paste,
    SelectAll,
}

impl TextAction {
    /// Entries offered for a panel; read-only panels cannot cut or paste.
    pub fn available(editable: bool) -> &'static [TextAction] {
        if editable {
            &[TextAction::Cut, TextAction::Copy, TextAction::Paste, TextAction::SelectAll]
        } else {
            &[TextAction::Copy, TextAction::SelectAll]
        }
    }

    fn icon(self) -> &'static str {
        match self {
            TextAction::Cut => egui_phosphor::regular::SCISSORS,
            TextAction::Copy => egui_phosphor::regular::COPY,
            TextAction::Paste => egui_phosphor::regular::CLIPBOARD,
            TextAction::SelectAll => egui_phosphor::regular::SELECTION_ALL,
        }
    }

    fn label(self) -> &'static str {
        match self {
            TextAction::Cut => LABEL_CUT,
            TextAction::Copy => LABEL_COPY,
            TextAction::Paste => LABEL_PASTE,
            TextAction::SelectAll => LABEL_SELECT_ALL,
        }
    }
}

/// Attach the menu to a text panel's response.
pub(crate) fn text_context_menu(response: &egui::Response, text: &str, editable: bool) {
    let id = response.id;
    let char_count = text.chars().count();
    response.context_menu(|ui| {
        ui.spacing_mut().item_spacing.y = 2.0;
        let actions = TextAction::available(editable);
        let labels: Vec<String> = actions
            .iter()
            .map(|a| format!("{}  {}", a.icon(), a.label()))
            .collect();
        let label_refs: Vec<&str> = labels.iter().map(|s| s.as_str()).collect();
        theme::set_menu_width(ui, &label_refs);

        for &action in actions {
            if action == TextAction::SelectAll {
                ui.separator();
            }
            if theme::menu_item(ui, action.icon(), action.label()) {
                apply(ui.ctx(), id, action, char_count);
                ui.close_menu();
            }
        }
    });
}

fn apply(ctx: &egui::Context, id: egui::Id, action: TextAction, char_count: usize) {
    ctx.memory_mut(|mem| mem.request_focus(id));
    match action {
        TextAction::Cut => ctx.send_viewport_cmd(egui::ViewportCommand::RequestCut),
        TextAction::Copy => ctx.send_viewport_cmd(egui::ViewportCommand::RequestCopy),
        TextAction::Paste => ctx.send_viewport_cmd(egui::ViewportCommand::RequestPaste),
        TextAction::SelectAll => {
            if let Some(mut state) = egui::TextEdit::load_state(ctx, id) {
                let range = egui::text::CCursorRange::two(
                    egui::text::CCursor::new(0),
                    egui::text::CCursor::new(char_count),
                );
                state.cursor.set_char_range(Some(range));
                state.store(ctx, id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_panels_only_copy_and_select() {
        assert_eq!(TextAction::available(false), &[TextAction::Copy, TextAction::SelectAll]);
        let editable = TextAction::available(true);
        assert!(editable.contains(&TextAction::Cut));
        assert!(editable.contains(&TextAction::Paste));
    }

    #[test]
    fn labels_are_distinct() {
        let actions = TextAction::available(true);
        for (i, a) in actions.iter().enumerate() {
            for b in &actions[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
