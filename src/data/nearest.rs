//! Nearest-sample lookup on a date-sorted series, used to snap the hover
//! highlight to a real data point.

use crate::data::points::{Dated, Timestamp};

/// Index of the first point whose date is not before `query` (left bisector).
///
/// Returns `points.len()` when every point lies before `query`.
///
/// ```
/// # use certplot::data::nearest::bisect_left;
/// # use certplot::data::points::TimedPoint;
/// # use chrono::{TimeZone, Utc};
/// let at = |s| Utc.timestamp_opt(s, 0).unwrap();
/// let pts = [TimedPoint::new(at(2), 0.0, 0.0), TimedPoint::new(at(5), 0.0, 0.0)];
/// assert_eq!(bisect_left(&pts, at(5)), 1);
/// assert_eq!(bisect_left(&pts, at(6)), 2);
/// ```
pub fn bisect_left<T: Dated>(points: &[T], query: Timestamp) -> usize {
    points.partition_point(|p| p.date() < query)
}

/// The point whose date is closest to `query`.
///
/// `points` must be sorted ascending by date; otherwise the result is some
/// element of `points` but which one is unspecified. When `query` sits exactly
/// halfway between two samples the later one wins. Returns `None` only for an
/// empty series.
pub fn closest<T: Dated>(points: &[T], query: Timestamp) -> Option<&T> {
    let idx = bisect_left(points, query);
    let hi = points.get(idx);
    let lo = idx.checked_sub(1).and_then(|i| points.get(i));

    match (lo, hi) {
        (Some(lo), None) => Some(lo),
        (None, hi) => hi,
        (Some(lo), Some(hi)) => {
            if query - lo.date() < hi.date() - query {
                Some(lo)
            } else {
                Some(hi)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    struct At(Timestamp);

    impl Dated for At {
        fn date(&self) -> Timestamp {
            self.0
        }
    }

    fn at(secs: i64) -> At {
        At(Utc.timestamp_opt(secs, 0).unwrap())
    }

    #[test]
    fn bisect_left_takes_first_of_equal_dates() {
        let pts = [at(1), at(3), at(3), at(7)];
        assert_eq!(bisect_left(&pts, at(3).0), 1);
        assert_eq!(bisect_left(&pts, at(0).0), 0);
        assert_eq!(bisect_left(&pts, at(8).0), 4);
    }

    #[test]
    fn single_point_is_always_closest() {
        let pts = [at(10)];
        for q in [-5, 10, 99] {
            assert_eq!(closest(&pts, at(q).0).map(|p| p.0), Some(at(10).0));
        }
    }

    #[test]
    fn empty_series_has_no_closest() {
        let pts: [At; 0] = [];
        assert!(closest(&pts, at(0).0).is_none());
    }
}
