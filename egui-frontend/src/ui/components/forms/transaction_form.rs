//! # Transaction Form
//!
//! The "Nova Transação" page: type selector, masked amount field,
//! description, category with autocomplete, optional date and receipt
//! attachment. Fields re-validate on change; submission runs behind the
//! simulated delay and ends in a success banner plus a cleared form.

use chrono::Local;
use eframe::egui;
use egui_extras::DatePickerButton;

use crate::ui::app_state::{FinanceApp, PendingKind};
use crate::ui::components::styling::card_frame;
use crate::ui::components::ui_components::{
    card_title, labeled_input, text, themed_button, ButtonSize, ButtonVariant, TextVariant,
};
use shared::{format_brl, FormField, TransactionType};

impl FinanceApp {
    pub fn render_new_transaction_page(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme.clone();
        let today = Local::now().date_naive();
        let mut submit = false;

        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(24.0, 12.0))
            .show(ui, |ui| {
                card_frame(&theme).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    card_title(ui, &theme, "Nova Transação", None);
                    ui.add_space(12.0);

                    let form = &mut self.form;
                    let mut changed = false;

                    // Transaction type selector
                    ui.label(text(
                        "Tipo de transação",
                        TextVariant::TextSmallBold,
                        theme.typography.primary,
                    ));
                    ui.add_space(4.0);
                    egui::ComboBox::from_id_source("transaction_type")
                        .width(360.0)
                        .selected_text(form.transaction_type.selector_label())
                        .show_ui(ui, |ui| {
                            for kind in TransactionType::ALL {
                                if ui
                                    .selectable_label(
                                        form.transaction_type == kind,
                                        kind.selector_label(),
                                    )
                                    .clicked()
                                {
                                    form.transaction_type = kind;
                                    changed = true;
                                }
                            }
                        });

                    ui.add_space(12.0);

                    // Amount with the fixed currency prefix
                    ui.label(text(
                        "Valor",
                        TextVariant::TextSmallBold,
                        theme.typography.primary,
                    ));
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label(text("R$", TextVariant::TextRegular, theme.typography.accent));
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut form.amount_input)
                                .hint_text("00,00")
                                .desired_width(140.0),
                        );
                        if response.changed() {
                            form.on_amount_changed();
                            changed = true;
                        }
                    });
                    if let Some(error) = form.field_error(FormField::Amount) {
                        ui.label(text(error, TextVariant::TextSmall, theme.feedback.error_text));
                    }

                    ui.add_space(12.0);

                    // Description
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
                    if description_response.changed() {
                        changed = true;
                    }

                    ui.add_space(12.0);

                    // Category with autocomplete
                    let category_error = form.field_error(FormField::Category);
                    let category_response = labeled_input(
                        ui,
                        &theme,
                        "Categoria",
                        &mut form.category_input,
                        "Ex.: Alimentação",
                        category_error.as_deref(),
                        None,
                    );
                    if category_response.changed() {
                        form.on_category_changed();
                        changed = true;
                    }
                    let mut picked: Option<&'static str> = None;
                    if !form.category_suggestions.is_empty() {
                        egui::Frame::none()
                            .fill(theme.interactive.input_background)
                            .stroke(egui::Stroke::new(1.0, theme.layout.card_border))
                            .rounding(egui::Rounding::same(6.0))
                            .show(ui, |ui| {
                                ui.set_width(360.0);
                                for suggestion in form.category_suggestions.iter() {
                                    if ui
                                        .selectable_label(
                                            false,
                                            text(
                                                *suggestion,
                                                TextVariant::TextSmall,
                                                theme.typography.primary,
                                            ),
                                        )
                                        .clicked()
                                    {
                                        picked = Some(suggestion);
                                    }
                                }
                            });
                    }
                    if let Some(category) = picked {
                        form.pick_suggestion(category);
                        changed = true;
                    }

                    ui.add_space(12.0);

                    // Optional date override
                    let mut use_custom_date = form.date.is_some();
                    if ui
                        .checkbox(&mut use_custom_date, "Definir data da transação")
                        .changed()
                    {
                        form.date = if use_custom_date { Some(today) } else { None };
                        changed = true;
                    }
                    if let Some(date) = form.date {
                        let mut picked_date = date;
                        let response =
                            ui.add(DatePickerButton::new(&mut picked_date).id_source("tx_date"));
                        if response.changed() {
                            form.date = Some(picked_date);
                            changed = true;
                        }
                        if let Some(error) = form.field_error(FormField::Date) {
                            ui.label(text(
                                error,
                                TextVariant::TextSmall,
                                theme.feedback.error_text,
                            ));
                        }
                    }

                    ui.add_space(12.0);

                    // Receipt attachment
                    ui.label(text(
                        "Recibo/Documento (opcional)",
                        TextVariant::TextSmallBold,
                        theme.typography.primary,
                    ));
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        if themed_button(
                            ui,
                            &theme,
                            "Selecionar arquivo",
                            ButtonVariant::Outline,
                            ButtonSize::Medium,
                            true,
                        )
                        .clicked()
                        {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("Recibo", &["png", "jpg", "jpeg", "pdf"])
                                .pick_file()
                            {
                                let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
                                let name = path
                                    .file_name()
                                    .map(|n| n.to_string_lossy().to_string())
                                    .unwrap_or_default();
                                form.set_attachment(name, size);
                                changed = true;
                            }
                        }
                        if let Some(attachment) = &form.attachment {
                            ui.label(text(
                                format!(
                                    "Arquivo selecionado: {} ({:.1} KB)",
                                    attachment.file_name,
                                    attachment.size_bytes as f64 / 1024.0
                                ),
                                TextVariant::TextSmall,
                                theme.feedback.success_text,
                            ));
                        }
                    });
                    if let Some(error) = form.field_error(FormField::Attachment) {
                        ui.label(text(error, TextVariant::TextSmall, theme.feedback.error_text));
                    }

                    if changed {
                        form.validate(today);
                    }

                    ui.add_space(20.0);

                    // Submit
                    if form.is_submitting {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(text(
                                "Enviando transação...",
                                TextVariant::TextSmall,
                                theme.typography.secondary,
                            ));
                        });
                    } else {
                        let ready = form
                            .validation
                            .as_ref()
                            .map_or(false, |v| v.is_valid)
                            && form.attachment_error.is_none()
                            && !form.description.trim().is_empty()
                            && !form.amount_input.trim().is_empty();
                        let response = themed_button(
                            ui,
                            &theme,
                            "Concluir Transação",
                            ButtonVariant::Primary,
                            ButtonSize::Large,
                            ready,
                        );
                        if !ready {
                            response.clone().on_hover_text(
                                "Preencha os campos obrigatórios para continuar",
                            );
                        }
                        if response.clicked() && ready {
                            submit = true;
                        }
                    }
                });
            });

        if submit {
            self.submit_transaction_form(today);
        }
    }

    /// Final validation pass and submission behind the simulated delay
    fn submit_transaction_form(&mut self, today: chrono::NaiveDate) {
        if !self.form.validate(today) {
            return;
        }
        let Some(request) = self.form.to_request() else {
            return;
        };
        log::info!(
            "Submitting {} transaction of {}",
            request.transaction_type.as_str(),
            format_brl(request.amount)
        );
        self.form.is_submitting = true;
        self.schedule(PendingKind::Submit(request));
    }
}
