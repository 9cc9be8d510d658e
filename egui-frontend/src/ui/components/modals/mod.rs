//! Modal dialogs floating above the statement: delete confirmation and
//! transaction editing. Both follow the same overlay pattern: foreground
//! area, dimmed backdrop, click-outside closes (guarded on the opening
//! frame so the click that opened the modal doesn't immediately close it).

pub mod delete_confirm;
pub mod edit_transaction;

use eframe::egui;

/// Dim the screen and report whether a click landed outside the modal rect.
/// `just_opened` suppresses detection for the frame the modal appeared on.
pub fn backdrop_clicked_outside(
    ctx: &egui::Context,
    ui: &egui::Ui,
    modal_size: egui::Vec2,
    just_opened: bool,
) -> bool {
    let screen_rect = ctx.screen_rect();
    ui.painter().rect_filled(
        screen_rect,
        egui::Rounding::ZERO,
        egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
    );

    if just_opened {
        return false;
    }
    if !ctx.input(|i| i.pointer.any_click()) {
        return false;
    }
    match ctx.input(|i| i.pointer.latest_pos()) {
        Some(pos) => {
            let modal_rect = egui::Rect::from_center_size(screen_rect.center(), modal_size);
            !modal_rect.contains(pos)
        }
        None => false,
    }
}
