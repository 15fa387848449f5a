#![windows_subsystem = "windows"]
//! Color List - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use tracing::{info, warn};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, EnvFilter, prelude::*};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "color-list.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,color_list=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::get_data_dir();
    let dir_created = std::fs::create_dir_all(&data_dir);

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Color List starting");
    if let Err(e) = dir_created {
        warn!(error = %e, path = %data_dir.display(), "Could not create data directory");
    }

    let settings = settings::Settings::load(&data_dir);

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([settings.window_w, settings.window_h])
        .with_min_inner_size([settings.min_window_w, settings.min_window_h])
        .with_title(APP_NAME);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, &settings)))),
    )
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(0, 8)),
            )
            .show(ctx, |ui| {
                self.render(ui);
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(items = self.state.items.len(), "Application shutting down");
    }
}
