//! Delete confirmation dialog for statement rows.

use eframe::egui;

use crate::ui::app_state::{FinanceApp, PendingKind};
use crate::ui::components::modals::backdrop_clicked_outside;
use crate::ui::components::ui_components::{text, themed_button, ButtonSize, ButtonVariant, TextVariant};
use crate::ui::mappers::to_display_row;

const MODAL_SIZE: egui::Vec2 = egui::vec2(420.0, 230.0);

impl FinanceApp {
    pub fn render_delete_confirm_modal(&mut self, ctx: &egui::Context) {
        let Some(state) = &self.delete_confirm else {
            return;
        };
        let row = to_display_row(&state.transaction);
        let transaction_id = state.transaction.id.clone();
        let just_opened = state.just_opened;
        let deleting = self
            .pending
            .iter()
            .any(|op| matches!(op.kind, PendingKind::Delete(_)));

        let mut confirm = false;
        let mut close = false;

        egui::Area::new(egui::Id::new("delete_confirm_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                if backdrop_clicked_outside(ctx, ui, MODAL_SIZE, just_opened) && !deleting {
                    close = true;
                }

                ui.allocate_ui_at_rect(
                    egui::Rect::from_center_size(ctx.screen_rect().center(), MODAL_SIZE),
                    |ui| {
                        egui::Frame::window(&ui.style())
                            .fill(self.theme.layout.card_background)
                            .stroke(egui::Stroke::new(2.0, self.theme.feedback.expense))
                            .rounding(egui::Rounding::same(12.0))
                            .inner_margin(egui::Margin::same(20.0))
                            .show(ui, |ui| {
                                ui.set_min_size(MODAL_SIZE - egui::vec2(44.0, 44.0));
                                ui.vertical_centered(|ui| {
                                    ui.label(text(
                                        "Deletar transação?",
                                        TextVariant::Subtitle,
                                        self.theme.typography.heading,
                                    ));
                                    ui.add_space(10.0);
                                    ui.label(text(
                                        &row.description,
                                        TextVariant::TextRegular,
                                        self.theme.typography.primary,
                                    ));
                                    ui.label(text(
                                        format!("{} · {}", row.formatted_amount, row.formatted_date),
                                        TextVariant::TextSmall,
                                        self.theme.typography.secondary,
                                    ));
                                    ui.add_space(6.0);
                                    ui.label(text(
                                        "Essa ação não pode ser desfeita.",
                                        TextVariant::TextSmall,
                                        self.theme.typography.secondary,
                                    ));
                                    ui.add_space(16.0);

                                    if deleting {
                                        ui.spinner();
                                    } else {
                                        ui.horizontal(|ui| {
                                            ui.add_space(60.0);
                                            if themed_button(
                                                ui,
                                                &self.theme,
                                                "Deletar",
                                                ButtonVariant::Secondary,
                                                ButtonSize::Medium,
                                                true,
                                            )
                                            .clicked()
                                            {
                                                confirm = true;
                                            }
                                            ui.add_space(16.0);
                                            if themed_button(
                                                ui,
                                                &self.theme,
                                                "Cancelar",
                                                ButtonVariant::Outline,
                                                ButtonSize::Medium,
                                                true,
                                            )
                                            .clicked()
                                            {
                                                close = true;
                                            }
                                        });
                                    }
                                });
                            });
                    },
                );
            });

        if let Some(state) = &mut self.delete_confirm {
            state.just_opened = false;
        }
        if confirm {
            self.schedule(PendingKind::Delete(transaction_id));
        }
        if close {
            self.delete_confirm = None;
        }
    }
}
