//! # Settings Page
//!
//! Theme and accessibility preference controls. Every change re-resolves
//! the theme immediately and flags the preference files for saving, so the
//! app restyles on the same frame and the choice survives a restart.

use eframe::egui;

use crate::preferences::{ContrastMode, FontSize, ThemeMode};
use crate::ui::app_state::FinanceApp;
use crate::ui::components::styling::card_frame;
use crate::ui::components::ui_components::{card_title, text, TextVariant};

impl FinanceApp {
    pub fn render_settings_page(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme.clone();
        let mut changed = false;

        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(24.0, 12.0))
            .show(ui, |ui| {
                card_frame(&theme).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    card_title(ui, &theme, "Tema", None);
                    ui.add_space(8.0);

                    ui.label(text(
                        "Modo",
                        TextVariant::TextSmallBold,
                        theme.typography.primary,
                    ));
                    ui.horizontal(|ui| {
                        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto] {
                            if ui
                                .radio_value(&mut self.theme_config.mode, mode, mode.label())
                                .changed()
                            {
                                changed = true;
                            }
                        }
                    });

                    ui.add_space(8.0);
                    ui.label(text(
                        "Contraste",
                        TextVariant::TextSmallBold,
                        theme.typography.primary,
                    ));
                    ui.horizontal(|ui| {
                        for contrast in
                            [ContrastMode::Normal, ContrastMode::High, ContrastMode::Low]
                        {
                            if ui
                                .radio_value(
                                    &mut self.theme_config.contrast,
                                    contrast,
                                    contrast.label(),
                                )
                                .changed()
                            {
                                changed = true;
                            }
                        }
                    });

                    ui.add_space(8.0);
                    ui.label(text(
                        "Tamanho da fonte",
                        TextVariant::TextSmallBold,
                        theme.typography.primary,
                    ));
                    ui.horizontal(|ui| {
                        for size in [FontSize::Small, FontSize::Medium, FontSize::Large] {
                            if ui
                                .radio_value(&mut self.theme_config.font_size, size, size.label())
                                .changed()
                            {
                                changed = true;
                            }
                        }
                    });

                    ui.add_space(8.0);
                    if ui
                        .checkbox(
                            &mut self.theme_config.reduced_motion,
                            "Reduzir animações",
                        )
                        .changed()
                    {
                        changed = true;
                    }
                });

                ui.add_space(16.0);

                card_frame(&theme).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    card_title(ui, &theme, "Acessibilidade", None);
                    ui.add_space(8.0);

                    if ui
                        .checkbox(
                            &mut self.accessibility.high_contrast,
                            "Alto contraste (sobrepõe o tema)",
                        )
                        .changed()
                    {
                        changed = true;
                    }
                    if ui
                        .checkbox(
                            &mut self.accessibility.reduced_motion,
                            "Reduzir animações",
                        )
                        .changed()
                    {
                        changed = true;
                    }
                    if ui
                        .checkbox(
                            &mut self.accessibility.color_blind_friendly,
                            "Cores amigáveis para daltonismo",
                        )
                        .changed()
                    {
                        changed = true;
                    }
                    if ui
                        .checkbox(
                            &mut self.accessibility.screen_reader,
                            "Rótulos de texto para leitores de tela",
                        )
                        .changed()
                    {
                        changed = true;
                    }

                    ui.add_space(8.0);
                    ui.label(text(
                        "Tamanho da fonte (acessibilidade)",
                        TextVariant::TextSmallBold,
                        theme.typography.primary,
                    ));
                    ui.horizontal(|ui| {
                        for size in [FontSize::Small, FontSize::Medium, FontSize::Large] {
                            if ui
                                .radio_value(&mut self.accessibility.font_size, size, size.label())
                                .changed()
                            {
                                changed = true;
                            }
                        }
                    });
                });
            });

        if changed {
            self.preferences_changed();
        }
    }
}
