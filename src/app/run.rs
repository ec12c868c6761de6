//! Top-level entry point for running the chart viewer as a native window.

use eframe::egui;

use super::CertPlotApp;
use crate::config::ChartConfig;

/// Open a native window showing `app` and block until it is closed.
pub fn run_certplot(app: CertPlotApp, mut cfg: ChartConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(900.0, 560.0));
    }

    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
