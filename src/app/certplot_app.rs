//! Standalone application wrapper: stacks the chart panels in one window.

use eframe::egui;

use crate::config::{ChartConfig, FeatureFlags};
use crate::data::fixture::Fixture;
use crate::error::Result;
use crate::panels::{CertificationPanel, Panel, StatusPanel};

// ─────────────────────────────────────────────────────────────────────────────
// CertPlotApp
// ─────────────────────────────────────────────────────────────────────────────

/// Chart viewer that implements [`eframe::App`].
///
/// Owns the panels (certification chart first, status timeline below) and
/// the feature flags they are rendered with. The headline bar carries a
/// checkbox per panel to hide or show it. All data is loaded up front; a
/// frame only renders and answers hover queries.
pub struct CertPlotApp {
    pub panels: Vec<Box<dyn Panel>>,
    pub features: FeatureFlags,
    /// Optional heading text shown at the top of the window.
    pub headline: Option<String>,
}

impl CertPlotApp {
    pub fn new(features: FeatureFlags) -> Self {
        Self {
            panels: Vec::new(),
            features,
            headline: None,
        }
    }

    /// Load the fixtures named in `cfg` and build the panels.
    pub fn from_config(cfg: &ChartConfig) -> Result<Self> {
        let id = cfg.data.certificate_id.as_str();
        let mut app = Self::new(cfg.features.clone());
        app.headline = Some(format!("Certificate {id}"));

        let certification = Fixture::load(&cfg.data.certification_fixture)?;
        app.panels.push(Box::new(CertificationPanel::new(
            certification.certification_series(id)?,
            cfg.certification_height,
        )));

        if cfg.features.status_timeline {
            let status = Fixture::load(&cfg.data.status_fixture)?;
            app.panels.push(Box::new(StatusPanel::new(
                status.status_series(id)?,
                cfg.status_height,
            )));
        }
        Ok(app)
    }

    /// Show or hide the panel titled `title`. Returns `false` if there is none.
    pub fn set_panel_visible(&mut self, title: &str, visible: bool) -> bool {
        match self.panels.iter_mut().find(|p| p.title() == title) {
            Some(panel) => {
                panel.state_mut().visible = visible;
                true
            }
            None => false,
        }
    }

    /// Titles of the panels that are currently drawn, top to bottom.
    pub fn visible_titles(&self) -> Vec<&'static str> {
        self.panels
            .iter()
            .filter(|p| p.state().visible)
            .map(|p| p.title())
            .collect()
    }

    /// Heading plus one visibility toggle per panel.
    fn render_headline(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(h) = &self.headline {
                ui.heading(h);
                ui.separator();
            }
            for panel in self.panels.iter_mut() {
                let title = panel.title();
                ui.checkbox(&mut panel.state_mut().visible, title);
            }
        });
    }
}

impl eframe::App for CertPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("certplot_headline").show(ctx, |ui| {
            self.render_headline(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            for panel in self.panels.iter_mut() {
                if !panel.state().visible {
                    continue;
                }
                ui.label(panel.title());
                panel.render_plot(ui, &self.features);
                ui.add_space(8.0);
            }
        });
    }
}
