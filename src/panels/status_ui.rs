//! Validity-status timeline: one colored band per run of equal status.

use egui::{Align2, RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoint, Points, Text, VLine};

use super::panel_trait::{Panel, PanelState};
use crate::config::FeatureFlags;
use crate::data::date_format::{DateFormatter, FocusFormat};
use crate::data::highlight::StatusHighlight;
use crate::data::points::{plot_x, LabeledPoint};
use crate::data::segments::segment_bridged;
use crate::data::status::ValidityStatus;

/// Plot height of the band tops.
const BAND_TOP: f64 = 1.0;

pub struct StatusPanel {
    state: PanelState,
    series: Vec<LabeledPoint<ValidityStatus>>,
    /// Band outlines, one per bridged segment, recomputed when the series changes.
    bands: Vec<(ValidityStatus, Vec<[f64; 2]>)>,
    formatter: DateFormatter,
    highlight: Option<StatusHighlight>,
}

impl StatusPanel {
    pub fn new(series: Vec<LabeledPoint<ValidityStatus>>, height: f32) -> Self {
        let mut panel = Self {
            state: PanelState::new("Validity", height),
            series: Vec::new(),
            bands: Vec::new(),
            formatter: DateFormatter::new(FocusFormat::Month),
            highlight: None,
        };
        panel.set_series(series);
        panel
    }

    /// Replace the displayed series and rebuild the bands.
    pub fn set_series(&mut self, series: Vec<LabeledPoint<ValidityStatus>>) {
        self.bands = match segment_bridged(&series) {
            Ok(segments) => segments
                .iter()
                .map(|seg| {
                    let pts = seg.iter().map(|p| [plot_x(p.date), BAND_TOP]).collect();
                    (*seg.label(), pts)
                })
                .collect(),
            Err(e) => {
                log::warn!("status timeline has no bands: {e}");
                Vec::new()
            }
        };
        self.series = series;
        self.highlight = None;
    }

    pub fn bands(&self) -> &[(ValidityStatus, Vec<[f64; 2]>)] {
        &self.bands
    }
}

impl Panel for StatusPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_plot(&mut self, ui: &mut Ui, features: &FeatureFlags) {
        let formatter = self.formatter;
        let mut plot = Plot::new("status_plot")
            .height(self.state.height)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .include_y(0.0)
            .include_y(BAND_TOP * 1.5)
            .show_axes([true, false])
            .show_grid(features.grid && !self.state.hovered)
            .x_axis_formatter(move |mark, _range| formatter.format_plot_x(mark.value));
        if features.legend {
            plot = plot.legend(Legend::default());
        }

        let bands = &self.bands;
        let series = &self.series;
        let show_highlight = features.highlight;

        let resp = plot.show(ui, |plot_ui| {
            for (status, pts) in bands {
                plot_ui.line(
                    Line::new(status.description(), pts.clone())
                        .color(status.color())
                        .width(2.0_f32)
                        .fill(0.0_f32),
                );
            }

            let hovered = plot_ui.response().hovered();
            let highlight = if hovered && show_highlight {
                plot_ui
                    .pointer_coordinate()
                    .and_then(|p| StatusHighlight::query_plot_x(series, p.x))
            } else {
                None
            };

            if let Some(h) = &highlight {
                let x = plot_x(h.point.date);
                plot_ui.vline(VLine::new("highlight", x).color(h.color));
                plot_ui.points(
                    Points::new("highlight", vec![[x, BAND_TOP]])
                        .radius(4.0_f32)
                        .color(h.color),
                );
                plot_ui.text(
                    Text::new(
                        "highlight",
                        PlotPoint::new(x, BAND_TOP),
                        RichText::new(format!("{} ({})", h.status_label, h.date_label))
                            .color(h.color),
                    )
                    .anchor(Align2::CENTER_BOTTOM),
                );
            }
            (hovered, highlight)
        });

        let (hovered, highlight) = resp.inner;
        self.state.hovered = hovered;
        self.highlight = highlight;
    }
}
