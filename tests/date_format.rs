use certplot::data::date_format::*;
use certplot::data::points::plot_x;
use chrono::{TimeZone, Utc};

// Helper: build a UTC timestamp
fn utc(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, h, m, s).unwrap()
}

#[test]
fn january_first_midnight_is_a_year() {
    let f = DateFormatter::default();
    assert_eq!(f.format_axis(utc(2016, 1, 1, 0, 0, 0)), "2016");
}

#[test]
fn first_of_other_month_is_month_name() {
    let f = DateFormatter::default();
    assert_eq!(f.format_axis(utc(2016, 4, 1, 0, 0, 0)), "April");
}

#[test]
fn sunday_shows_month_and_day() {
    let f = DateFormatter::default();
    assert_eq!(
        AxisGranularity::of(utc(2016, 3, 13, 0, 0, 0)),
        AxisGranularity::Day
    );
    assert_eq!(f.format_axis(utc(2016, 3, 13, 0, 0, 0)), "Mar 13");
}

#[test]
fn other_weekdays_show_weekday_and_day() {
    let f = DateFormatter::default();
    assert_eq!(f.format_axis(utc(2016, 3, 15, 0, 0, 0)), "Tue 15");
}

#[test]
fn time_of_day_granularities() {
    let f = DateFormatter::default();
    assert_eq!(f.format_axis(utc(2016, 3, 15, 14, 0, 0)), "02 PM");
    assert_eq!(f.format_axis(utc(2016, 3, 15, 14, 30, 0)), "02:30");
    assert_eq!(f.format_axis(utc(2016, 3, 15, 14, 30, 15)), ":15");
    let ms = Utc.timestamp_opt(1_458_000_000, 250_000_000).unwrap();
    assert_eq!(AxisGranularity::of(ms), AxisGranularity::Millisecond);
    assert_eq!(f.format_axis(ms), ".250");
}

#[test]
fn focus_formats() {
    let d = utc(2016, 3, 5, 12, 0, 0);
    assert_eq!(DateFormatter::new(FocusFormat::Day).format_focus(d), "05 Mar 2016");
    assert_eq!(DateFormatter::new(FocusFormat::Month).format_focus(d), "Mar 2016");
}

#[test]
fn plot_x_labels() {
    let f = DateFormatter::default();
    assert_eq!(f.format_plot_x(plot_x(utc(2017, 1, 1, 0, 0, 0))), "2017");
    assert_eq!(f.format_plot_x(f64::NAN), "");
    assert_eq!(f.format_plot_x(f64::INFINITY), "");
}

#[test]
fn count_labels_are_integers() {
    assert_eq!(format_count(3.0), "3");
    assert_eq!(format_count(2.6), "3");
    assert_eq!(format_count(f64::NAN), "");
}
