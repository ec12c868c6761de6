//! Sample types shared by the charts and the traits the series algorithms are generic over.

use chrono::{DateTime, Utc};

use crate::data::status::ValidityStatus;

/// Point in time carried by every sample.
pub type Timestamp = DateTime<Utc>;

/// Anything placed on the time axis.
pub trait Dated {
    fn date(&self) -> Timestamp;
}

/// Anything carrying a categorical label (e.g. a validity status).
pub trait Labeled {
    type Label: PartialEq;

    fn label(&self) -> &Self::Label;
}

/// Certificate count and target on a given date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedPoint {
    pub date: Timestamp,
    pub count: f64,
    pub target: f64,
}

impl TimedPoint {
    pub fn new(date: Timestamp, count: f64, target: f64) -> Self {
        Self { date, count, target }
    }

    /// `true` when the target lies above the count (the count is short of it).
    pub fn below_target(&self) -> bool {
        self.target > self.count
    }
}

impl Dated for TimedPoint {
    fn date(&self) -> Timestamp {
        self.date
    }
}

/// A categorical sample; the status timeline uses `LabeledPoint<ValidityStatus>`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint<L = ValidityStatus> {
    pub date: Timestamp,
    pub label: L,
}

impl<L> LabeledPoint<L> {
    pub fn new(date: Timestamp, label: L) -> Self {
        Self { date, label }
    }
}

impl<L> Dated for LabeledPoint<L> {
    fn date(&self) -> Timestamp {
        self.date
    }
}

impl<L: PartialEq> Labeled for LabeledPoint<L> {
    type Label = L;

    fn label(&self) -> &L {
        &self.label
    }
}

impl<T: Dated> Dated for &T {
    fn date(&self) -> Timestamp {
        (**self).date()
    }
}

impl<T: Labeled> Labeled for &T {
    type Label = T::Label;

    fn label(&self) -> &Self::Label {
        (**self).label()
    }
}

/// Plot X coordinate of a timestamp: seconds since the UNIX epoch.
pub fn plot_x(date: Timestamp) -> f64 {
    date.timestamp() as f64 + f64::from(date.timestamp_subsec_nanos()) * 1e-9
}

/// Inverse of [`plot_x`]. `None` for non-finite or out-of-range values.
pub fn timestamp_from_plot_x(x: f64) -> Option<Timestamp> {
    if !x.is_finite() {
        return None;
    }
    let secs = x.floor();
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return None;
    }
    let nanos = (((x - secs) * 1e9).round() as u32).min(999_999_999);
    DateTime::from_timestamp(secs as i64, nanos)
}
