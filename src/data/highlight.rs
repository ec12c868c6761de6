//! Hover readouts: the pointer's time coordinate goes in, the nearest sample
//! and everything needed to draw its highlight comes out.
//!
//! The displayed series is always passed explicitly, so the same query can be
//! run against whichever dataset a chart currently shows.

use egui::{Align2, Color32};

use crate::data::date_format::{format_count, DateFormatter, FocusFormat};
use crate::data::nearest::closest;
use crate::data::points::{timestamp_from_plot_x, LabeledPoint, TimedPoint, Timestamp};
use crate::data::status::ValidityStatus;

/// Where a value label sits relative to its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelPlacement {
    Above,
    Below,
}

impl LabelPlacement {
    /// Text anchor that puts the label on this side of its marker.
    pub fn anchor(&self) -> Align2 {
        match self {
            LabelPlacement::Above => Align2::CENTER_BOTTOM,
            LabelPlacement::Below => Align2::CENTER_TOP,
        }
    }
}

/// Readout for the count/target chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificationHighlight {
    pub point: TimedPoint,
    pub count_label: String,
    pub target_label: String,
    pub date_label: String,
    pub count_placement: LabelPlacement,
    pub target_placement: LabelPlacement,
}

impl CertificationHighlight {
    /// Highlight for the sample nearest to `at`; `None` for an empty series.
    pub fn query(series: &[TimedPoint], at: Timestamp) -> Option<Self> {
        let point = *closest(series, at)?;
        // Keep the two labels apart: the lower line's label goes under it.
        let (count_placement, target_placement) = if point.below_target() {
            (LabelPlacement::Below, LabelPlacement::Above)
        } else {
            (LabelPlacement::Above, LabelPlacement::Below)
        };
        Some(Self {
            point,
            count_label: format!("Count: {}", format_count(point.count)),
            target_label: format!("Target: {}", format_count(point.target)),
            date_label: DateFormatter::new(FocusFormat::Day).format_focus(point.date),
            count_placement,
            target_placement,
        })
    }

    /// Same as [`query`](Self::query) with a plot X coordinate (seconds since epoch).
    pub fn query_plot_x(series: &[TimedPoint], x: f64) -> Option<Self> {
        Self::query(series, timestamp_from_plot_x(x)?)
    }
}

/// Readout for the status timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusHighlight {
    pub point: LabeledPoint<ValidityStatus>,
    pub status_label: String,
    pub color: Color32,
    pub date_label: String,
}

impl StatusHighlight {
    pub fn query(series: &[LabeledPoint<ValidityStatus>], at: Timestamp) -> Option<Self> {
        let point = closest(series, at)?.clone();
        let status = point.label;
        Some(Self {
            status_label: format!("Status: {}", status.description()),
            color: status.color(),
            date_label: DateFormatter::new(FocusFormat::Month).format_focus(point.date),
            point,
        })
    }

    pub fn query_plot_x(series: &[LabeledPoint<ValidityStatus>], x: f64) -> Option<Self> {
        Self::query(series, timestamp_from_plot_x(x)?)
    }
}
