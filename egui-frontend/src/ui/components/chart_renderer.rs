//! # Chart Renderer Module
//!
//! The dashboard's grouped bar chart: one entries bar and one exits bar per
//! week of the current month, drawn with egui_plot. The y axis follows the
//! product rule of rounding up to the next 750 step; hovering a bar shows
//! the series name and value.

use eframe::egui;
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::ui::app_state::FinanceApp;
use crate::ui::components::ui_components::{text, TextVariant};
use shared::format_brl;

const CHART_HEIGHT: f32 = 220.0;
const BAR_WIDTH: f64 = 0.32;

impl FinanceApp {
    pub fn render_transaction_chart(&mut self, ui: &mut egui::Ui) {
        if !self.chart.prepared || self.chart.buckets.is_empty() {
            ui.label(text(
                "Sem movimentação neste mês",
                TextVariant::TextRegular,
                self.theme.typography.secondary,
            ));
            return;
        }

        let y_max = self.chart.y_axis_max();
        // Four grid rows between zero and the top, like the product chart
        let y_step = y_max / 4.0;
        let labels: Vec<String> = self.chart.buckets.iter().map(|b| b.label.clone()).collect();

        let exits_bars: Vec<Bar> = self
            .chart
            .buckets
            .iter()
            .enumerate()
            .map(|(i, bucket)| {
                Bar::new(i as f64 - BAR_WIDTH / 1.8, bucket.exits)
                    .width(BAR_WIDTH)
                    .name(format!("Saídas: {}", format_brl(bucket.exits)))
                    .fill(self.theme.chart.exits)
            })
            .collect();
        let entries_bars: Vec<Bar> = self
            .chart
            .buckets
            .iter()
            .enumerate()
            .map(|(i, bucket)| {
                Bar::new(i as f64 + BAR_WIDTH / 1.8, bucket.entries)
                    .width(BAR_WIDTH)
                    .name(format!("Entradas: {}", format_brl(bucket.entries)))
                    .fill(self.theme.chart.entries)
            })
            .collect();

        let x_labels = labels.clone();
        let bucket_count = labels.len();

        ui.horizontal(|ui| {
            Plot::new("transaction_chart")
                .height(CHART_HEIGHT)
                .width((ui.available_width() - 170.0).max(300.0))
                .include_y(0.0)
                .include_y(y_max)
                .include_x(-0.6)
                .include_x(bucket_count as f64 - 0.4)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .show_grid([true, true])
                .x_grid_spacer(move |_input| {
                    (0..bucket_count)
                        .map(|i| GridMark {
                            value: i as f64,
                            step_size: 1.0,
                        })
                        .collect()
                })
                .y_grid_spacer(move |_input| {
                    (0..=4)
                        .map(|i| GridMark {
                            value: i as f64 * y_step,
                            step_size: y_step,
                        })
                        .collect()
                })
                .x_axis_formatter(move |mark, _range| {
                    let index = mark.value.round() as i64;
                    if index < 0 || (mark.value - index as f64).abs() > 0.05 {
                        return String::new();
                    }
                    x_labels.get(index as usize).cloned().unwrap_or_default()
                })
                .y_axis_formatter(|mark, _range| {
                    if mark.value < 0.0 {
                        String::new()
                    } else {
                        format_axis_value(mark.value)
                    }
                })
                .label_formatter(|name, _value| name.to_string())
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new(exits_bars).name("Saídas"));
                    plot_ui.bar_chart(BarChart::new(entries_bars).name("Entradas"));
                });

            ui.add_space(12.0);
            self.render_chart_legend(ui);
        });
    }

    /// Legend with the month totals beside the plot
    fn render_chart_legend(&self, ui: &mut egui::Ui) {
        let (entries_total, exits_total) = match &self.core.month_stats {
            Some(stats) => (stats.total_credit + stats.total_loan, stats.total_debit),
            None => (0.0, 0.0),
        };

        ui.vertical(|ui| {
            ui.add_space(40.0);
            self.legend_entry(ui, self.theme.chart.entries, "Entradas", entries_total);
            ui.add_space(12.0);
            self.legend_entry(ui, self.theme.chart.exits, "Saídas", exits_total);
        });
    }

    fn legend_entry(&self, ui: &mut egui::Ui, color: egui::Color32, label: &str, total: f64) {
        ui.horizontal(|ui| {
            let (dot_rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
            ui.painter().circle_filled(dot_rect.center(), 7.0, color);
            ui.vertical(|ui| {
                ui.label(text(
                    label,
                    TextVariant::TextSmall,
                    self.theme.typography.secondary,
                ));
                ui.label(text(
                    format_brl(total),
                    TextVariant::TextSmallBold,
                    self.theme.typography.heading,
                ));
            });
        });
    }
}

/// Axis labels without the currency symbol, pt-BR grouped ("1.500")
fn format_axis_value(value: f64) -> String {
    let rounded = value.round() as i64;
    let mut digits = rounded.abs().to_string();
    let mut grouped = String::new();
    while digits.len() > 3 {
        let split = digits.len() - 3;
        grouped = format!(".{}{}", &digits[split..], grouped);
        digits.truncate(split);
    }
    format!("{}{}{}", if rounded < 0 { "-" } else { "" }, digits, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_value_grouping() {
        assert_eq!(format_axis_value(0.0), "0");
        assert_eq!(format_axis_value(750.0), "750");
        assert_eq!(format_axis_value(1500.0), "1.500");
        assert_eq!(format_axis_value(1500000.0), "1.500.000");
    }

    #[test]
    fn test_negative_axis_value_keeps_sign() {
        assert_eq!(format_axis_value(-1500.0), "-1.500");
    }
}
