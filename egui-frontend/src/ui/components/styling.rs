//! # Styling Module
//!
//! Background and card painters shared by every page. Colors always come
//! from the resolved theme so the same drawing code serves light, dark and
//! high-contrast variants.

use eframe::egui;

use crate::ui::app_state::FinanceApp;
use crate::ui::components::theme::Theme;

impl FinanceApp {
    /// Vertical gradient filling the whole window behind the page content
    pub fn draw_app_background(&self, ui: &mut egui::Ui) {
        draw_vertical_gradient(
            ui.painter(),
            ui.max_rect().expand(10.0),
            self.theme.layout.gradient_top,
            self.theme.layout.gradient_bottom,
        );
    }

    /// Card background with shadow, fill and border
    pub fn draw_card_background(&self, ui: &mut egui::Ui, rect: egui::Rect) {
        draw_card(ui.painter(), rect, &self.theme);
    }
}

/// Paint a rect as a top-to-bottom two-color gradient
pub fn draw_vertical_gradient(
    painter: &egui::Painter,
    rect: egui::Rect,
    top: egui::Color32,
    bottom: egui::Color32,
) {
    use egui::epaint::{Mesh, Vertex, WHITE_UV};

    let mut mesh = Mesh::default();
    mesh.vertices.push(Vertex {
        pos: rect.left_top(),
        uv: WHITE_UV,
        color: top,
    });
    mesh.vertices.push(Vertex {
        pos: rect.right_top(),
        uv: WHITE_UV,
        color: top,
    });
    mesh.vertices.push(Vertex {
        pos: rect.right_bottom(),
        uv: WHITE_UV,
        color: bottom,
    });
    mesh.vertices.push(Vertex {
        pos: rect.left_bottom(),
        uv: WHITE_UV,
        color: bottom,
    });
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(mesh);
}

/// Card painter used by the dashboard and statement sections
pub fn draw_card(painter: &egui::Painter, rect: egui::Rect, theme: &Theme) {
    let shadow_rect = egui::Rect::from_min_size(rect.min + egui::vec2(2.0, 2.0), rect.size());
    painter.rect_filled(
        shadow_rect,
        egui::Rounding::same(12.0),
        theme.layout.card_shadow,
    );
    painter.rect_filled(
        rect,
        egui::Rounding::same(12.0),
        theme.layout.card_background,
    );
    painter.rect_stroke(
        rect,
        egui::Rounding::same(12.0),
        egui::Stroke::new(1.0, theme.layout.card_border),
    );
}

/// Frame for card content laid out by egui itself (no manual rects)
pub fn card_frame(theme: &Theme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.layout.card_background)
        .stroke(egui::Stroke::new(1.0, theme.layout.card_border))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(20.0))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(2.0, 2.0),
            blur: 6.0,
            spread: 0.0,
            color: theme.layout.card_shadow,
        })
}
