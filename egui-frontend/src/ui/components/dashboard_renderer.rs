//! # Dashboard Renderer
//!
//! The "Painel" page: monthly entries/exits summary cards, the bar chart
//! and a short statement preview with a link to the full listing.

use eframe::egui;

use crate::ui::app_state::{FinanceApp, MainTab};
use crate::ui::components::styling::card_frame;
use crate::ui::components::ui_components::{
    card_title, text, themed_button, ButtonSize, ButtonVariant, TextVariant,
};
use crate::ui::mappers::to_display_row;
use shared::format_brl;

/// Rows shown in the dashboard's statement preview
const PREVIEW_ROWS: usize = 6;

impl FinanceApp {
    pub fn render_dashboard_page(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(24.0, 12.0))
            .show(ui, |ui| {
                self.render_summary_cards(ui);
                ui.add_space(16.0);
                self.render_chart_card(ui);
                ui.add_space(16.0);
                self.render_statement_preview(ui);
            });
    }

    /// Entries and exits totals for the current month
    fn render_summary_cards(&mut self, ui: &mut egui::Ui) {
        let (entries, exits) = match &self.core.month_stats {
            Some(stats) => (stats.total_credit + stats.total_loan, stats.total_debit),
            None => (0.0, 0.0),
        };

        ui.horizontal(|ui| {
            self.summary_card(ui, "Entradas", entries, self.theme.feedback.income);
            ui.add_space(12.0);
            self.summary_card(ui, "Saídas", exits, self.theme.feedback.expense);
        });
    }

    fn summary_card(&self, ui: &mut egui::Ui, title: &str, value: f64, accent: egui::Color32) {
        card_frame(&self.theme).show(ui, |ui| {
            ui.set_min_width(200.0);
            ui.horizontal(|ui| {
                // Legend dot in the series color
                let (dot_rect, _) =
                    ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                ui.painter().circle_filled(dot_rect.center(), 6.0, accent);
                ui.label(text(
                    title,
                    TextVariant::TextSmall,
                    self.theme.typography.secondary,
                ));
            });
            ui.label(text(
                format_brl(value),
                TextVariant::Subtitle,
                self.theme.typography.heading,
            ));
            ui.label(text(
                "neste mês",
                TextVariant::TextSmall,
                self.theme.typography.secondary,
            ));
        });
    }

    fn render_chart_card(&mut self, ui: &mut egui::Ui) {
        card_frame(&self.theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            card_title(ui, &self.theme, "Movimentação do mês", None);
            ui.add_space(8.0);
            self.render_transaction_chart(ui);
        });
    }

    /// Last transactions, newest first, with a "Listar" link to the full
    /// statement page.
    fn render_statement_preview(&mut self, ui: &mut egui::Ui) {
        let mut rows: Vec<_> = self
            .table
            .loaded_transactions
            .iter()
            .take(PREVIEW_ROWS)
            .map(to_display_row)
            .collect();
        // loaded_transactions is newest-first already; keep a stable copy
        rows.truncate(PREVIEW_ROWS);

        let mut go_to_statement = false;

        card_frame(&self.theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            card_title(
                ui,
                &self.theme,
                "Transações",
                Some("(últimas 6 transações)"),
            );
            ui.add_space(4.0);

            if rows.is_empty() {
                ui.label(text(
                    "Nenhuma transação encontrada",
                    TextVariant::TextRegular,
                    self.theme.typography.secondary,
                ));
            }

            for row in &rows {
                let color = self.theme.amount_color(row.inflow);
                ui.horizontal(|ui| {
                    ui.label(text(row.direction, TextVariant::TextRegular, color));
                    ui.label(text(row.type_label, TextVariant::TextSmall, color));
                    ui.label(text(
                        &row.description,
                        TextVariant::TextSmall,
                        self.theme.typography.primary,
                    ));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(text(
                            &row.formatted_date,
                            TextVariant::TextSmall,
                            self.theme.typography.secondary,
                        ));
                        ui.add_space(12.0);
                        ui.label(text(&row.formatted_amount, TextVariant::TextSmallBold, color));
                    });
                });
                ui.separator();
            }

            ui.add_space(8.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if themed_button(
                    ui,
                    &self.theme,
                    "Listar",
                    ButtonVariant::Primary,
                    ButtonSize::Medium,
                    true,
                )
                .clicked()
                {
                    go_to_statement = true;
                }
            });
        });

        if go_to_statement {
            self.current_tab = MainTab::Transactions;
        }
    }
}
