use egui::Ui;

use crate::config::FeatureFlags;

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub title: &'static str,
    pub visible: bool,
    /// Plot height in points.
    pub height: f32,
    /// Pointer was over the plot on the previous frame.
    pub hovered: bool,
}

impl PanelState {
    pub fn new(title: &'static str, height: f32) -> Self {
        Self {
            title,
            visible: true,
            height,
            hovered: false,
        }
    }
}

/// A chart stacked in the main window.
pub trait Panel {
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn title(&self) -> &'static str {
        self.state().title
    }

    fn render_plot(&mut self, ui: &mut Ui, features: &FeatureFlags);
}
