//! Run-length segmentation of a labeled series into same-label runs.
//!
//! Each [`Segment`] is a borrowed slice of the input, so segmenting never
//! copies or mutates the series. The status timeline draws one colored band
//! per segment.

use crate::data::points::Labeled;
use crate::error::{ChartError, Result};

/// A non-empty run of consecutive points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, T> {
    points: &'a [T],
}

impl<'a, T> Clone for Segment<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Segment<'a, T> {}

impl<'a, T> Segment<'a, T> {
    pub fn points(&self) -> &'a [T] {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &'a T {
        &self.points[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.points.iter()
    }
}

impl<'a, T: Labeled> Segment<'a, T> {
    /// Representative label: the label of the first point.
    pub fn label(&self) -> &'a T::Label {
        self.first().label()
    }
}

impl<'a, T> IntoIterator for Segment<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Start index of every run: 0, then each index whose label differs from its predecessor's.
fn run_starts<T: Labeled>(points: &[T]) -> Vec<usize> {
    let mut starts = vec![0];
    starts.extend(
        points
            .windows(2)
            .enumerate()
            .filter(|(_, w)| w[1].label() != w[0].label())
            .map(|(i, _)| i + 1),
    );
    starts
}

/// Split `points` into maximal runs sharing a label.
///
/// Segments are disjoint and cover the input in order: a new segment starts
/// at the point that changes the label. Fails with [`ChartError::EmptySeries`]
/// on empty input.
///
/// ```
/// # use certplot::data::points::LabeledPoint;
/// # use certplot::data::segments::segment;
/// # use chrono::{TimeZone, Utc};
/// let at = |s| Utc.timestamp_opt(s, 0).unwrap();
/// let pts = [
///     LabeledPoint::new(at(1), 'a'),
///     LabeledPoint::new(at(2), 'b'),
///     LabeledPoint::new(at(3), 'b'),
/// ];
/// let segs = segment(&pts).unwrap();
/// assert_eq!(segs.len(), 2);
/// assert_eq!(segs[1].len(), 2);
/// ```
pub fn segment<T: Labeled>(points: &[T]) -> Result<Vec<Segment<'_, T>>> {
    if points.is_empty() {
        return Err(ChartError::EmptySeries);
    }
    let starts = run_starts(points);
    let segments = starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(points.len());
            Segment {
                points: &points[start..end],
            }
        })
        .collect();
    Ok(segments)
}

/// Like [`segment`], but every segment except the last also ends with the
/// first point of the next one, so filled bands drawn from consecutive
/// segments meet without a gap.
pub fn segment_bridged<T: Labeled>(points: &[T]) -> Result<Vec<Segment<'_, T>>> {
    if points.is_empty() {
        return Err(ChartError::EmptySeries);
    }
    let starts = run_starts(points);
    let segments = starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts
                .get(i + 1)
                .map(|&next| next + 1)
                .unwrap_or(points.len());
            Segment {
                points: &points[start..end],
            }
        })
        .collect();
    Ok(segments)
}
