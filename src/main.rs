//! `certplot [CONFIG.yaml]`: open the certification charts in a native window.
//!
//! Without an argument the default configuration is used, which reads the
//! fixtures under `resources/`. Set `RUST_LOG` to change log verbosity.

use std::path::Path;
use std::process::ExitCode;

use certplot::{run_certplot, CertPlotApp, ChartConfig};

fn load_config() -> certplot::Result<ChartConfig> {
    match std::env::args_os().nth(1) {
        Some(arg) => {
            let path = Path::new(&arg);
            let mut cfg = ChartConfig::load(path)?;
            if let Some(dir) = path.parent() {
                cfg.resolve_paths(dir);
            }
            Ok(cfg)
        }
        None => Ok(ChartConfig::default()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let app = match CertPlotApp::from_config(&cfg) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run_certplot(app, cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("viewer failed: {e}");
            ExitCode::FAILURE
        }
    }
}
