use eframe::egui;
use std::time::Instant;

use crate::ui::app_state::FinanceApp;

impl eframe::App for FinanceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Complete any backend calls whose simulated delay has elapsed
        let still_pending = self.process_pending(now);
        if still_pending {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        // Expire the success banner; keep repainting while one is visible
        if self.ui.tick_messages(now) {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }

        // Theme, fonts and motion settings for this frame
        self.theme.apply_to_style(
            ctx,
            self.effective_font_size(),
            self.effective_reduced_motion(),
        );

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.draw_app_background(ui);

                if self.ui.loading {
                    self.render_loading_screen(ui);
                    return;
                }

                self.render_header(ui);
                self.render_messages(ui);
                self.render_main_content(ui);
            });

        // Modals float above the page
        self.render_delete_confirm_modal(ctx);
        self.render_edit_modal(ctx);

        self.persist_preferences_if_dirty();
    }
}

impl FinanceApp {
    /// Centered spinner shown during the initial simulated load
    fn render_loading_screen(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(200.0);
            ui.spinner();
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("Carregando informações...")
                    .color(self.theme.typography.inverse),
            );
        });
    }

    /// Error and success banners under the header
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.ui.error_message {
            self.draw_banner(
                ui,
                error,
                self.theme.feedback.error_background,
                self.theme.feedback.error_text,
            );
        }
        if let Some(success) = self.ui.success_message() {
            self.draw_banner(
                ui,
                success,
                self.theme.feedback.success_background,
                self.theme.feedback.success_text,
            );
        }
    }

    fn draw_banner(
        &self,
        ui: &mut egui::Ui,
        message: &str,
        background: egui::Color32,
        text: egui::Color32,
    ) {
        egui::Frame::none()
            .fill(background)
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::symmetric(16.0, 8.0))
            .outer_margin(egui::Margin::symmetric(24.0, 4.0))
            .show(ui, |ui| {
                ui.label(egui::RichText::new(message).color(text));
            });
    }
}
