pub mod certification_ui;
pub mod panel_trait;
pub mod status_ui;

pub use certification_ui::CertificationPanel;
pub use panel_trait::{Panel, PanelState};
pub use status_ui::StatusPanel;
