//! # Transaction Table Module
//!
//! The "Transações" page: search field, type filter, sortable statement
//! table and load-more pagination. Row actions open the edit and delete
//! modals.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::ui::app_state::FinanceApp;
use crate::ui::components::styling::card_frame;
use crate::ui::components::ui_components::{
    card_title, text, themed_button, ButtonSize, ButtonVariant, TextVariant,
};
use crate::ui::mappers::to_display_row;
use crate::ui::state::{DeleteConfirmState, EditFormState};
use shared::{SortField, Transaction, TransactionType};

/// Row action picked while rendering the table body
enum RowAction {
    Edit(Transaction),
    Delete(Transaction),
}

impl FinanceApp {
    pub fn render_transactions_page(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(24.0, 12.0))
            .show(ui, |ui| {
                card_frame(&self.theme).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    card_title(ui, &self.theme, "Transações", None);
                    ui.add_space(8.0);

                    self.render_table_controls(ui);
                    ui.add_space(12.0);

                    if !self.table.initial_load_complete {
                        ui.vertical_centered(|ui| {
                            ui.spinner();
                            ui.label(text(
                                "Carregando transações...",
                                TextVariant::TextRegular,
                                self.theme.typography.secondary,
                            ));
                        });
                        return;
                    }

                    let (visible, has_more) = self.table.visible_transactions();
                    if visible.is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.label(text(
                                "Nenhuma transação encontrada",
                                TextVariant::TextRegular,
                                self.theme.typography.secondary,
                            ));
                            ui.add_space(20.0);
                        });
                        return;
                    }

                    if let Some(action) = self.render_table(ui, &visible) {
                        match action {
                            RowAction::Edit(transaction) => {
                                self.edit_form = Some(EditFormState::new(&transaction));
                            }
                            RowAction::Delete(transaction) => {
                                self.delete_confirm = Some(DeleteConfirmState::new(transaction));
                            }
                        }
                    }

                    if has_more {
                        ui.add_space(12.0);
                        ui.vertical_centered(|ui| {
                            if themed_button(
                                ui,
                                &self.theme,
                                "Carregar mais",
                                ButtonVariant::Primary,
                                ButtonSize::Medium,
                                true,
                            )
                            .clicked()
                            {
                                self.table.load_more();
                            }
                        });
                    }
                });
            });
    }

    /// Search input and the type filter selector
    fn render_table_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut query = self.table.search_query.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Buscar transação")
                    .desired_width(260.0),
            );
            if response.changed() {
                self.table.set_search_query(query);
            }

            ui.add_space(16.0);

            let selected_label = self
                .table
                .type_filter
                .map_or("Todos os tipos", |kind| kind.label());
            let mut filter_change: Option<Option<TransactionType>> = None;
            egui::ComboBox::from_id_source("type_filter")
                .selected_text(selected_label)
                .show_ui(ui, |ui| {
                    if ui
                        .selectable_label(self.table.type_filter.is_none(), "Todos os tipos")
                        .clicked()
                    {
                        filter_change = Some(None);
                    }
                    for kind in TransactionType::ALL {
                        let active = self.table.type_filter == Some(kind);
                        if ui.selectable_label(active, kind.label()).clicked() {
                            filter_change = Some(Some(kind));
                        }
                    }
                });
            if let Some(filter) = filter_change {
                self.table.set_type_filter(filter);
            }
        });
    }

    /// The statement rows. Returns an action if an edit/delete button was
    /// clicked this frame.
    fn render_table(&mut self, ui: &mut egui::Ui, visible: &[Transaction]) -> Option<RowAction> {
        let mut action = None;
        let mut sort_clicked: Option<SortField> = None;

        let header_bg = self.theme.table.header_background;
        let header_text_color = self.theme.table.header_text;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(70.0)) // type tag
            .column(Column::remainder().at_least(180.0)) // description
            .column(Column::exact(120.0)) // category
            .column(Column::exact(120.0)) // amount
            .column(Column::exact(100.0)) // date
            .column(Column::exact(70.0)) // actions
            .header(36.0, |mut header| {
                let mut sortable_column =
                    |header: &mut egui_extras::TableRow<'_, '_>, label: &str, field: SortField| {
                        header.col(|ui| {
                            ui.painter().rect_filled(
                                ui.max_rect().expand(2.0),
                                egui::Rounding::ZERO,
                                header_bg,
                            );
                            let active = self.table.sort_field == field;
                            let title = if active {
                                format!("{} {}", label, self.table.sort_direction.indicator())
                            } else {
                                label.to_string()
                            };
                            let response = ui.add(
                                egui::Button::new(
                                    egui::RichText::new(title)
                                        .strong()
                                        .color(header_text_color),
                                )
                                .fill(egui::Color32::TRANSPARENT),
                            );
                            if response.clicked() {
                                sort_clicked = Some(field);
                            }
                        });
                    };

                header.col(|ui| {
                    ui.painter().rect_filled(
                        ui.max_rect().expand(2.0),
                        egui::Rounding::ZERO,
                        header_bg,
                    );
                    ui.label(
                        egui::RichText::new("Tipo")
                            .strong()
                            .color(header_text_color),
                    );
                });
                sortable_column(&mut header, "Descrição", SortField::Description);
                sortable_column(&mut header, "Categoria", SortField::Category);
                sortable_column(&mut header, "Valor", SortField::Amount);
                sortable_column(&mut header, "Data", SortField::Date);
                header.col(|ui| {
                    ui.painter().rect_filled(
                        ui.max_rect().expand(2.0),
                        egui::Rounding::ZERO,
                        header_bg,
                    );
                });
            })
            .body(|mut body| {
                for transaction in visible {
                    let row_data = to_display_row(transaction);
                    let amount_color = self.theme.amount_color(row_data.inflow);

                    body.row(36.0, |mut row| {
                        row.col(|ui| {
                            ui.label(text(
                                format!("{} {}", row_data.direction, row_data.type_label),
                                TextVariant::TextSmall,
                                amount_color,
                            ));
                        });
                        row.col(|ui| {
                            ui.label(text(
                                &row_data.description,
                                TextVariant::TextSmall,
                                self.theme.typography.primary,
                            ));
                        });
                        row.col(|ui| {
                            ui.label(text(
                                &row_data.category,
                                TextVariant::TextSmall,
                                self.theme.typography.secondary,
                            ));
                        });
                        row.col(|ui| {
                            ui.label(text(
                                &row_data.formatted_amount,
                                TextVariant::TextSmallBold,
                                amount_color,
                            ));
                        });
                        row.col(|ui| {
                            ui.label(text(
                                &row_data.formatted_date,
                                TextVariant::TextSmall,
                                self.theme.typography.secondary,
                            ));
                        });
                        row.col(|ui| {
                            let edit = ui
                                .button(egui::RichText::new("✏").size(13.0))
                                .on_hover_text("Editar transação");
                            if edit.clicked() {
                                action = Some(RowAction::Edit(transaction.clone()));
                            }
                            let delete = ui
                                .button(egui::RichText::new("🗑").size(13.0))
                                .on_hover_text("Deletar transação");
                            if delete.clicked() {
                                action = Some(RowAction::Delete(transaction.clone()));
                            }
                        });
                    });
                }
            });

        if let Some(field) = sort_clicked {
            self.table.toggle_sort(field);
        }

        action
    }
}
