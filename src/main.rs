mod app;
mod cli;
mod ui;

use std::process::ExitCode;
use std::sync::Arc;

use app::GamesDashApp;
use clap::Parser;
use eframe::egui;
use games_dash::data::loader::load_file;
use games_dash::state::AppState;

fn main() -> ExitCode {
    env_logger::init();
    let cli = cli::Cli::parse();

    // The window never opens without data.
    let dataset = match load_file(&cli.data) {
        Ok(ds) => Arc::new(ds),
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Games Dashboard – Releases & Scores",
        options,
        Box::new(|_cc| Ok(Box::new(GamesDashApp::new(AppState::new(dataset))))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("UI terminated with an error: {e}");
            ExitCode::FAILURE
        }
    }
}
