//! Date labels for the time axis and the hover readout.
//!
//! Axis ticks use a multi-scale rule: the label shows the finest calendar
//! field that is not at its "zero" value, so a tick on January 1st reads as a
//! year, a tick on the 1st of another month reads as a month name, and so on.
//! Everything is rendered in UTC with English names.

use chrono::{Datelike, Timelike, Weekday};

use crate::data::points::{timestamp_from_plot_x, Timestamp};

// ─────────────────────────────────────────────────────────────────────────────
// FocusFormat
// ─────────────────────────────────────────────────────────────────────────────

/// Format of the date shown next to the hover highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FocusFormat {
    /// `15 Mar 2016`
    #[default]
    Day,
    /// `Mar 2016`
    Month,
}

impl FocusFormat {
    fn pattern(&self) -> &'static str {
        match self {
            FocusFormat::Day => "%d %b %Y",
            FocusFormat::Month => "%b %Y",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AxisGranularity
// ─────────────────────────────────────────────────────────────────────────────

/// The calendar field an axis tick label is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisGranularity {
    Millisecond,
    Second,
    Minute,
    Hour,
    /// Weekday and day of month, for days other than Sundays and the 1st.
    Weekday,
    Day,
    Month,
    Year,
}

impl AxisGranularity {
    /// First matching rule, finest field first.
    pub fn of(date: Timestamp) -> Self {
        if date.nanosecond() / 1_000_000 != 0 {
            AxisGranularity::Millisecond
        } else if date.second() != 0 {
            AxisGranularity::Second
        } else if date.minute() != 0 {
            AxisGranularity::Minute
        } else if date.hour() != 0 {
            AxisGranularity::Hour
        } else if date.weekday() != Weekday::Sun && date.day() != 1 {
            AxisGranularity::Weekday
        } else if date.day() != 1 {
            AxisGranularity::Day
        } else if date.month() != 1 {
            AxisGranularity::Month
        } else {
            AxisGranularity::Year
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            AxisGranularity::Millisecond => ".%3f",
            AxisGranularity::Second => ":%S",
            AxisGranularity::Minute => "%I:%M",
            AxisGranularity::Hour => "%I %p",
            AxisGranularity::Weekday => "%a %d",
            AxisGranularity::Day => "%b %d",
            AxisGranularity::Month => "%B",
            AxisGranularity::Year => "%Y",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DateFormatter
// ─────────────────────────────────────────────────────────────────────────────

/// Formats timestamps for one chart: tick labels plus the hover date label.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFormatter {
    pub focus: FocusFormat,
}

impl DateFormatter {
    pub fn new(focus: FocusFormat) -> Self {
        Self { focus }
    }

    /// Tick label for `date`.
    ///
    /// ```
    /// # use certplot::data::date_format::DateFormatter;
    /// # use chrono::{TimeZone, Utc};
    /// let f = DateFormatter::default();
    /// assert_eq!(f.format_axis(Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap()), "2016");
    /// assert_eq!(f.format_axis(Utc.with_ymd_and_hms(2016, 4, 1, 0, 0, 0).unwrap()), "April");
    /// ```
    pub fn format_axis(&self, date: Timestamp) -> String {
        date.format(AxisGranularity::of(date).pattern()).to_string()
    }

    /// Hover label for `date`.
    pub fn format_focus(&self, date: Timestamp) -> String {
        date.format(self.focus.pattern()).to_string()
    }

    /// Tick label for a plot X value (seconds since epoch); empty when the
    /// value is not a representable timestamp.
    pub fn format_plot_x(&self, x: f64) -> String {
        timestamp_from_plot_x(x)
            .map(|d| self.format_axis(d))
            .unwrap_or_default()
    }
}

/// Integer label for count/target ticks and readouts.
pub fn format_count(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value.round() as i64)
    } else {
        String::new()
    }
}
