//! # Header Module
//!
//! The strip at the top of every page: greeting with the current date,
//! balance display with the show/hide eye toggle, tab navigation and the
//! quick dark/light toggle.

use chrono::{Datelike, Local, Timelike};
use eframe::egui;

use crate::ui::app_state::{FinanceApp, MainTab};
use crate::ui::components::ui_components::{text, TextVariant};

const WEEKDAYS: [&str; 7] = [
    "Domingo",
    "Segunda-feira",
    "Terça-feira",
    "Quarta-feira",
    "Quinta-feira",
    "Sexta-feira",
    "Sábado",
];

impl FinanceApp {
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(24.0, 16.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(text(
                            format!("Olá, {}! :)", self.core.user_name),
                            TextVariant::TitleBold,
                            self.theme.typography.inverse,
                        ));
                        ui.label(text(
                            formatted_now(),
                            TextVariant::TextSmall,
                            self.theme.typography.inverse,
                        ));
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        // Dark/light quick toggle
                        let toggle_icon = if self.theme.dark { "☀" } else { "🌙" };
                        let toggle = ui
                            .button(egui::RichText::new(toggle_icon).size(18.0))
                            .on_hover_text("Alternar tema claro/escuro");
                        if toggle.clicked() {
                            self.theme_config.toggle_mode();
                            self.preferences_changed();
                        }
                        if self.accessibility.screen_reader {
                            ui.label(text(
                                "Alternar tema",
                                TextVariant::TextSmall,
                                self.theme.typography.inverse,
                            ));
                        }

                        ui.add_space(16.0);
                        self.render_balance_summary(ui);
                    });
                });

                ui.add_space(12.0);
                self.render_tab_buttons(ui);
            });
        ui.separator();
    }

    /// "Saldo" with the eye toggle, account label and the amount
    fn render_balance_summary(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(text(
                    "Saldo",
                    TextVariant::Subtitle,
                    self.theme.typography.inverse,
                ));
                let eye = if self.core.show_balance { "👁" } else { "🙈" };
                let response = ui
                    .button(egui::RichText::new(eye).size(14.0))
                    .on_hover_text(if self.core.show_balance {
                        "Ocultar saldo"
                    } else {
                        "Mostrar saldo"
                    });
                if response.clicked() {
                    self.core.toggle_balance_visibility();
                }
            });
            ui.label(text(
                &self.core.account_label,
                TextVariant::TextSmall,
                self.theme.typography.inverse,
            ));
            ui.label(text(
                self.core.balance_display(),
                TextVariant::TitleRegular,
                self.theme.typography.inverse,
            ));
        });
    }

    /// One pill button per page; the active page gets the filled style
    fn render_tab_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for tab in MainTab::ALL {
                let active = self.current_tab == tab;
                let (fill, text_color) = if active {
                    (
                        self.theme.interactive.primary_fill,
                        self.theme.typography.inverse,
                    )
                } else {
                    (
                        egui::Color32::TRANSPARENT,
                        self.theme.typography.inverse,
                    )
                };
                let button = egui::Button::new(
                    egui::RichText::new(tab.label())
                        .font(egui::FontId::proportional(14.0))
                        .strong()
                        .color(text_color),
                )
                .fill(fill)
                .stroke(egui::Stroke::new(
                    1.0,
                    if active {
                        self.theme.interactive.primary_fill
                    } else {
                        self.theme.typography.inverse
                    },
                ))
                .rounding(egui::Rounding::same(16.0))
                .min_size(egui::vec2(110.0, 30.0));

                if ui.add(button).clicked() {
                    self.current_tab = tab;
                    self.ui.clear_messages();
                }
                ui.add_space(6.0);
            }
        });
    }
}

/// "Sexta-feira, 15/03/2024 14:05"
fn formatted_now() -> String {
    let now = Local::now();
    let weekday = WEEKDAYS[now.weekday().num_days_from_sunday() as usize];
    format!(
        "{}, {} {:02}:{:02}",
        weekday,
        now.format("%d/%m/%Y"),
        now.hour(),
        now.minute()
    )
}
