//! Native viewer.
//!
//! | Sub-module       | Responsibility |
//! | ---------------- | -------------- |
//! | [`certplot_app`] | [`CertPlotApp`] (eframe) wrapper and panel stacking |
//! | [`run`]          | [`run_certplot()`] entry point |

mod certplot_app;
mod run;

pub use certplot_app::CertPlotApp;
pub use run::run_certplot;
