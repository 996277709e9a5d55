//! Toast notification shown after the copy action

use crate::constants::{TOAST_FADE_SECS, TOAST_VISIBLE_SECS};
use crate::theme;
use eframe::egui;
use std::time::Instant;

pub(crate) struct Toast {
    pub message: String,
    pub color: egui::Color32,
    start: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, color: egui::Color32) -> Self {
        Self { message: message.into(), color, start: Instant::now() }
    }

    /// 1.0 while fully visible, falling to 0.0 over the fade, None once expired.
    fn alpha_at(elapsed: f32) -> Option<f32> {
        if elapsed >= TOAST_VISIBLE_SECS + TOAST_FADE_SECS {
            None
        } else if elapsed > TOAST_VISIBLE_SECS {
            Some((TOAST_VISIBLE_SECS + TOAST_FADE_SECS - elapsed) / TOAST_FADE_SECS)
        } else {
            Some(1.0)
        }
    }
}

/// Render the toast at the bottom-right of `panel_rect`, pausing while hovered.
/// Clears `slot` once the toast has faded out.
pub(crate) fn show(ctx: &egui::Context, slot: &mut Option<Toast>, panel_rect: egui::Rect) {
    let Some(toast) = slot.as_mut() else {
        return;
    };
    let Some(alpha) = Toast::alpha_at(toast.start.elapsed().as_secs_f32()) else {
        *slot = None;
        return;
    };

    let margin = theme::SPACING_MD;
    let pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);
    let fade = |c: egui::Color32, max: f32| {
        egui::Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), (max * alpha) as u8)
    };

    let response = egui::Area::new(egui::Id::new("copy_toast"))
        .fixed_pos(pos)
        .pivot(egui::Align2::RIGHT_BOTTOM)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(fade(theme::BG_POPUP, 230.0))
                .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, fade(toast.color, 120.0)))
                .corner_radius(theme::RADIUS_MEDIUM)
                .inner_margin(egui::Margin::symmetric(12, 6))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(&toast.message)
                            .size(theme::FONT_LABEL)
                            .color(fade(theme::TEXT_PRIMARY, 255.0)),
                    );
                });
        });

    if response.response.hovered() {
        toast.start = Instant::now();
    }
    ctx.request_repaint();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_visible_before_fade() {
        assert_eq!(Toast::alpha_at(0.0), Some(1.0));
        assert_eq!(Toast::alpha_at(TOAST_VISIBLE_SECS), Some(1.0));
    }

    #[test]
    fn fades_then_expires() {
        let mid = Toast::alpha_at(TOAST_VISIBLE_SECS + TOAST_FADE_SECS / 2.0).unwrap();
        assert!((mid - 0.5).abs() < 1e-4);
        assert_eq!(Toast::alpha_at(TOAST_VISIBLE_SECS + TOAST_FADE_SECS), None);
        assert_eq!(Toast::alpha_at(60.0), None);
    }
}
