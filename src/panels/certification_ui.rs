//! Count vs. target chart with a nearest-sample hover highlight.

use egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{HLine, Legend, Line, Plot, PlotPoint, Points, Polygon, Text, VLine};

use super::panel_trait::{Panel, PanelState};
use crate::config::FeatureFlags;
use crate::data::areas::{fill_regions, FillRegion, Upper};
use crate::data::date_format::{format_count, DateFormatter};
use crate::data::highlight::CertificationHighlight;
use crate::data::points::{plot_x, TimedPoint};

const COUNT_COLOR: Color32 = Color32::from_rgb(70, 130, 180);
const TARGET_COLOR: Color32 = Color32::from_rgb(205, 92, 92);
const RULE_COLOR: Color32 = Color32::from_gray(140);
const AREA_ALPHA: u8 = 70;

pub struct CertificationPanel {
    state: PanelState,
    series: Vec<TimedPoint>,
    formatter: DateFormatter,
    y_max: f64,
    /// Regions between the two lines, computed once per series.
    regions: Vec<FillRegion>,
    highlight: Option<CertificationHighlight>,
}

impl CertificationPanel {
    pub fn new(series: Vec<TimedPoint>, height: f32) -> Self {
        let y_max = nice_ceiling(
            series
                .iter()
                .map(|p| p.count.max(p.target))
                .fold(0.0, f64::max),
        );
        let regions = fill_regions(&series);
        Self {
            state: PanelState::new("Certifications", height),
            series,
            formatter: DateFormatter::default(),
            y_max,
            regions,
            highlight: None,
        }
    }

    pub fn series(&self) -> &[TimedPoint] {
        &self.series
    }

    pub fn regions(&self) -> &[FillRegion] {
        &self.regions
    }

    pub fn highlight(&self) -> Option<&CertificationHighlight> {
        self.highlight.as_ref()
    }

    fn count_points(&self) -> Vec<[f64; 2]> {
        self.series
            .iter()
            .map(|p| [plot_x(p.date), p.count])
            .collect()
    }

    fn target_points(&self) -> Vec<[f64; 2]> {
        self.series
            .iter()
            .map(|p| [plot_x(p.date), p.target])
            .collect()
    }
}

impl Panel for CertificationPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_plot(&mut self, ui: &mut Ui, features: &FeatureFlags) {
        let formatter = self.formatter;
        let mut plot = Plot::new("certification_plot")
            .height(self.state.height)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .include_y(0.0)
            .include_y(self.y_max)
            .show_grid(features.grid && !self.state.hovered)
            .x_axis_formatter(move |mark, _range| formatter.format_plot_x(mark.value))
            .y_axis_formatter(|mark, _range| format_count(mark.value));
        if features.legend {
            plot = plot.legend(Legend::default());
        }

        let count_pts = self.count_points();
        let target_pts = self.target_points();
        let series = &self.series;
        let regions = &self.regions;
        let show_highlight = features.highlight;

        let resp = plot.show(ui, |plot_ui| {
            for region in regions {
                let (name, color) = match region.upper {
                    Upper::Count => ("Count above target", COUNT_COLOR),
                    Upper::Target => ("Target above count", TARGET_COLOR),
                };
                let fill = Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), AREA_ALPHA);
                // egui_plot only fills convex polygons reliably.
                for piece in region.convex_pieces() {
                    plot_ui.polygon(
                        Polygon::new(name, piece.to_vec())
                            .fill_color(fill)
                            .stroke(Stroke::NONE),
                    );
                }
            }
            plot_ui.line(Line::new("Target", target_pts).color(TARGET_COLOR).width(2.0_f32));
            plot_ui.line(Line::new("Count", count_pts).color(COUNT_COLOR).width(2.0_f32));

            let hovered = plot_ui.response().hovered();
            let highlight = if hovered && show_highlight {
                plot_ui
                    .pointer_coordinate()
                    .and_then(|p| CertificationHighlight::query_plot_x(series, p.x))
            } else {
                None
            };

            if let Some(h) = &highlight {
                let x = plot_x(h.point.date);
                plot_ui.vline(VLine::new("highlight", x).color(RULE_COLOR));
                plot_ui.hline(HLine::new("highlight", h.point.count).color(RULE_COLOR));
                plot_ui.hline(HLine::new("highlight", h.point.target).color(RULE_COLOR));
                plot_ui.points(
                    Points::new("highlight", vec![[x, h.point.count]])
                        .radius(4.0_f32)
                        .color(COUNT_COLOR),
                );
                plot_ui.points(
                    Points::new("highlight", vec![[x, h.point.target]])
                        .radius(4.0_f32)
                        .color(TARGET_COLOR),
                );
                plot_ui.text(
                    Text::new(
                        "highlight",
                        PlotPoint::new(x, h.point.count),
                        RichText::new(&h.count_label).color(COUNT_COLOR),
                    )
                    .anchor(h.count_placement.anchor()),
                );
                plot_ui.text(
                    Text::new(
                        "highlight",
                        PlotPoint::new(x, h.point.target),
                        RichText::new(&h.target_label).color(TARGET_COLOR),
                    )
                    .anchor(h.target_placement.anchor()),
                );
                plot_ui.text(
                    Text::new("highlight", PlotPoint::new(x, 0.0), h.date_label.clone())
                        .anchor(egui::Align2::CENTER_TOP),
                );
            }
            (hovered, highlight)
        });

        let (hovered, highlight) = resp.inner;
        self.state.hovered = hovered;
        self.highlight = highlight;
    }
}

/// Round `max` up to 1, 2, 5 or 10 times a power of ten so the top tick is a round number.
fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|&c| c >= max)
        .unwrap_or(10.0 * magnitude)
}

#[cfg(test)]
mod tests {
    use super::nice_ceiling;

    #[test]
    fn nice_ceiling_rounds_up_to_round_numbers() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(7.0), 10.0);
        assert_eq!(nice_ceiling(12.0), 20.0);
        assert_eq!(nice_ceiling(40.0), 50.0);
        assert_eq!(nice_ceiling(100.0), 100.0);
    }
}
