//! Page routing: hands the content area to the renderer for the active tab.

use eframe::egui;

use crate::ui::app_state::{FinanceApp, MainTab};

impl FinanceApp {
    /// Render the page selected in the header
    pub fn render_main_content(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match self.current_tab {
                MainTab::Dashboard => self.render_dashboard_page(ui),
                MainTab::Transactions => self.render_transactions_page(ui),
                MainTab::NewTransaction => self.render_new_transaction_page(ui),
                MainTab::Settings => self.render_settings_page(ui),
            });
    }
}
