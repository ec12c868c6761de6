use certplot::data::nearest::{bisect_left, closest};
use certplot::data::points::{TimedPoint, Timestamp};
use chrono::{TimeZone, Utc};

// Helper: timestamp `secs` seconds after the epoch
fn at(secs: i64) -> Timestamp {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn series(secs: &[i64]) -> Vec<TimedPoint> {
    secs.iter()
        .enumerate()
        .map(|(i, &s)| TimedPoint::new(at(s), i as f64, 10.0 * i as f64))
        .collect()
}

#[test]
fn query_before_first_point_returns_first() {
    let pts = series(&[2, 5, 9]);
    assert_eq!(closest(&pts, at(0)).unwrap().date, at(2));
}

#[test]
fn query_after_last_point_returns_last() {
    let pts = series(&[2, 5, 9]);
    assert_eq!(closest(&pts, at(100)).unwrap().date, at(9));
}

#[test]
fn exact_match_returns_that_point() {
    let pts = series(&[2, 5, 9]);
    let p = closest(&pts, at(5)).unwrap();
    assert_eq!(p.date, at(5));
    assert_eq!(p.count, 1.0);
}

#[test]
fn midpoint_tie_favors_later_point() {
    let pts = series(&[0, 10]);
    assert_eq!(closest(&pts, at(5)).unwrap().date, at(10));
}

#[test]
fn picks_strictly_nearer_neighbour() {
    let pts = series(&[0, 10]);
    assert_eq!(closest(&pts, at(4)).unwrap().date, at(0));
    assert_eq!(closest(&pts, at(6)).unwrap().date, at(10));
}

#[test]
fn sub_second_distances_are_compared() {
    let pts = series(&[0, 1]);
    let q = Utc.timestamp_opt(0, 400_000_000).unwrap();
    assert_eq!(closest(&pts, q).unwrap().date, at(0));
    let q = Utc.timestamp_opt(0, 600_000_000).unwrap();
    assert_eq!(closest(&pts, q).unwrap().date, at(1));
}

#[test]
fn repeated_queries_return_same_point() {
    let pts = series(&[1, 4, 8, 13, 21]);
    for q in [-3, 0, 3, 6, 11, 17, 30] {
        let a = closest(&pts, at(q)).map(|p| p.date);
        let b = closest(&pts, at(q)).map(|p| p.date);
        assert_eq!(a, b);
    }
}

#[test]
fn input_is_left_untouched() {
    let pts = series(&[1, 4, 8]);
    let before = pts.clone();
    let _ = closest(&pts, at(5));
    assert_eq!(pts, before);
}

#[test]
fn matches_linear_scan_on_dense_queries() {
    let pts = series(&[3, 7, 8, 20, 41, 42, 90]);
    for q in -5..100 {
        let got = closest(&pts, at(q)).unwrap().date;
        // Brute force with the same tie rule: later point wins on equal distance.
        let best = pts
            .iter()
            .min_by_key(|p| ((p.date - at(q)).num_seconds().abs(), -p.date.timestamp()))
            .unwrap()
            .date;
        assert_eq!(got, best, "query {q}");
    }
}

#[test]
fn bisect_left_is_insertion_point() {
    let pts = series(&[2, 5, 5, 9]);
    assert_eq!(bisect_left(&pts, at(1)), 0);
    assert_eq!(bisect_left(&pts, at(5)), 1);
    assert_eq!(bisect_left(&pts, at(6)), 3);
    assert_eq!(bisect_left(&pts, at(10)), 4);
}

#[test]
fn empty_series_returns_none() {
    let pts: Vec<TimedPoint> = Vec::new();
    assert!(closest(&pts, at(0)).is_none());
}
