use eframe::egui;
use log::{error, info};

mod backend;
mod preferences;
mod ui;

use ui::app_state::FinanceApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Sistema Financeiro egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Sistema Financeiro")
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Sistema Financeiro",
        options,
        Box::new(|cc| match FinanceApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Sistema Financeiro app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
