//! Edit dialog for statement rows: description, amount and category with
//! the same validation as the creation form.

use chrono::Local;
use eframe::egui;

use crate::backend::UpdateTransactionRequest;
use crate::ui::app_state::{FinanceApp, PendingKind};
use crate::ui::components::modals::backdrop_clicked_outside;
use crate::ui::components::ui_components::{
    labeled_input, text, themed_button, ButtonSize, ButtonVariant, TextVariant,
};
use shared::FormField;

const MODAL_SIZE: egui::Vec2 = egui::vec2(460.0, 360.0);

impl FinanceApp {
    pub fn render_edit_modal(&mut self, ctx: &egui::Context) {
        if self.edit_form.is_none() {
            return;
        }
        let just_opened = self
            .edit_form
            .as_ref()
            .map_or(false, |form| form.just_opened);
        let saving = self
            .pending
            .iter()
            .any(|op| matches!(op.kind, PendingKind::Update { .. }));

        let mut save = false;
        let mut close = false;
        let theme = self.theme.clone();

        egui::Area::new(egui::Id::new("edit_transaction_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                if backdrop_clicked_outside(ctx, ui, MODAL_SIZE, just_opened) && !saving {
                    close = true;
                }

                let Some(form) = self.edit_form.as_mut() else {
                    return;
                };
                if form.validation.is_none() {
                    form.validate(Local::now().date_naive());
                }

                ui.allocate_ui_at_rect(
                    egui::Rect::from_center_size(ctx.screen_rect().center(), MODAL_SIZE),
                    |ui| {
                        egui::Frame::window(&ui.style())
                            .fill(theme.layout.card_background)
                            .stroke(egui::Stroke::new(2.0, theme.interactive.primary_fill))
                            .rounding(egui::Rounding::same(12.0))
                            .inner_margin(egui::Margin::same(20.0))
                            .show(ui, |ui| {
                                ui.set_min_size(MODAL_SIZE - egui::vec2(44.0, 44.0));
                                ui.vertical_centered(|ui| {
                                    ui.label(text(
                                        "Editar transação",
                                        TextVariant::Subtitle,
                                        theme.typography.heading,
                                    ));
                                });
                                ui.add_space(12.0);

                                let description_error = form.field_error(FormField::Description);
                                let description_response = labeled_input(
                                    ui,
                                    &theme,
                                    "Descrição",
                                    &mut form.description,
                                    "Descrição da transação",
                                    description_error.as_deref(),
                                    None,
                                );

                                ui.add_space(8.0);
                                ui.label(text(
                                    "Valor (R$)",
                                    TextVariant::TextSmallBold,
                                    theme.typography.primary,
                                ));
                                ui.add_space(4.0);
                                let amount_response = ui.add(
                                    egui::TextEdit::singleline(&mut form.amount_input)
                                        .hint_text("00,00")
                                        .desired_width(140.0),
                                );
                                if amount_response.changed() {
                                    form.on_amount_changed();
                                }
                                if let Some(error) = form.field_error(FormField::Amount) {
                                    ui.label(text(
                                        error,
                                        TextVariant::TextSmall,
                                        theme.feedback.error_text,
                                    ));
                                }

                                ui.add_space(8.0);
                                let category_error = form.field_error(FormField::Category);
                                let category_response = labeled_input(
                                    ui,
                                    &theme,
                                    "Categoria",
                                    &mut form.category,
                                    "Categoria",
                                    category_error.as_deref(),
                                    None,
                                );

                                if description_response.changed()
                                    || amount_response.changed()
                                    || category_response.changed()
                                {
                                    form.validate(Local::now().date_naive());
                                }

                                ui.add_space(16.0);
                                ui.vertical_centered(|ui| {
                                    if saving {
                                        ui.spinner();
                                        return;
                                    }
                                    ui.horizontal(|ui| {
                                        ui.add_space(70.0);
                                        let valid = form
                                            .validation
                                            .as_ref()
                                            .map_or(false, |v| v.is_valid);
                                        let response = themed_button(
                                            ui,
                                            &theme,
                                            "Salvar",
                                            ButtonVariant::Primary,
                                            ButtonSize::Medium,
                                            valid,
                                        );
                                        if !valid {
                                            response.clone().on_hover_text(
                                                "Corrija os erros acima para continuar",
                                            );
                                        }
                                        if response.clicked() && valid {
                                            save = true;
                                        }
                                        ui.add_space(16.0);
                                        if themed_button(
                                            ui,
                                            &theme,
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
                                });
                            });
                    },
                );
            });

        if let Some(form) = &mut self.edit_form {
            form.just_opened = false;
        }

        if save {
            let request = self.edit_form.as_mut().and_then(|form| {
                if !form.validate(Local::now().date_naive()) {
                    return None;
                }
                form.cleaned_amount().map(|amount| {
                    (
                        form.transaction_id.clone(),
                        UpdateTransactionRequest {
                            description: form.description.trim().to_string(),
                            amount,
                            category: form.category.trim().to_string(),
                        },
                    )
                })
            });
            if let Some((id, update)) = request {
                self.schedule(PendingKind::Update { id, update });
            }
        }
        if close {
            self.edit_form = None;
        }
    }
}
