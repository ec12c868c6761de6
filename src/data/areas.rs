//! Fill regions between the count and target lines.
//!
//! The series is split wherever the two lines cross, so every region lies
//! entirely on one side: either count above target or target above count.
//! Where both lines coincide no area is produced.

use crate::data::points::{plot_x, TimedPoint};

/// Which line bounds a region from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upper {
    Count,
    Target,
}

/// A sample along a region: plot x, upper and lower line values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub x: f64,
    pub upper: f64,
    pub lower: f64,
}

/// Maximal stretch of the x axis where the same line stays on top.
#[derive(Debug, Clone, PartialEq)]
pub struct FillRegion {
    pub upper: Upper,
    /// At least two spans, ascending by x.
    pub spans: Vec<Span>,
}

impl FillRegion {
    /// Closed outline: the upper line left to right, then the lower line back.
    pub fn polygon(&self) -> Vec<[f64; 2]> {
        self.spans
            .iter()
            .map(|s| [s.x, s.upper])
            .chain(self.spans.iter().rev().map(|s| [s.x, s.lower]))
            .collect()
    }

    /// The region cut into one quadrilateral per sample interval.
    ///
    /// Each piece has two vertical sides and non-crossing top and bottom
    /// edges, so it is convex and can be filled directly.
    pub fn convex_pieces(&self) -> Vec<[[f64; 2]; 4]> {
        self.spans
            .windows(2)
            .map(|w| {
                [
                    [w[0].x, w[0].lower],
                    [w[1].x, w[1].lower],
                    [w[1].x, w[1].upper],
                    [w[0].x, w[0].upper],
                ]
            })
            .collect()
    }
}

#[derive(Clone, Copy)]
struct Sample {
    x: f64,
    count: f64,
    target: f64,
}

impl Sample {
    fn diff(&self) -> f64 {
        self.count - self.target
    }

    fn span(&self, upper: Upper) -> Span {
        match upper {
            Upper::Count => Span {
                x: self.x,
                upper: self.count,
                lower: self.target,
            },
            Upper::Target => Span {
                x: self.x,
                upper: self.target,
                lower: self.count,
            },
        }
    }
}

/// Samples of `series` with the crossing points of the two lines inserted.
fn samples_with_crossings(series: &[TimedPoint]) -> Vec<Sample> {
    let mut out: Vec<Sample> = Vec::with_capacity(series.len() * 2);
    for p in series {
        let s = Sample {
            x: plot_x(p.date),
            count: p.count,
            target: p.target,
        };
        if let Some(prev) = out.last().copied() {
            let (d0, d1) = (prev.diff(), s.diff());
            if d0 * d1 < 0.0 {
                let t = d0 / (d0 - d1);
                let count = prev.count + (s.count - prev.count) * t;
                out.push(Sample {
                    x: prev.x + (s.x - prev.x) * t,
                    count,
                    target: count,
                });
            }
        }
        out.push(s);
    }
    out
}

/// Split `series` (sorted by date) into regions bounded by count and target.
///
/// ```
/// # use certplot::data::areas::{fill_regions, Upper};
/// # use certplot::data::points::TimedPoint;
/// # use chrono::{TimeZone, Utc};
/// let at = |s| Utc.timestamp_opt(s, 0).unwrap();
/// let series = [TimedPoint::new(at(0), 4.0, 2.0), TimedPoint::new(at(10), 0.0, 2.0)];
/// let regions = fill_regions(&series);
/// assert_eq!(regions.len(), 2);
/// assert_eq!(regions[0].upper, Upper::Count);
/// assert_eq!(regions[1].upper, Upper::Target);
/// ```
pub fn fill_regions(series: &[TimedPoint]) -> Vec<FillRegion> {
    let samples = samples_with_crossings(series);
    let mut regions: Vec<FillRegion> = Vec::new();
    let mut current: Option<FillRegion> = None;

    for w in samples.windows(2) {
        let (a, b) = (w[0], w[1]);
        // Crossings are inserted, so both ends lie on the same side or on the line.
        let side = a.diff() + b.diff();
        let upper = if side > 0.0 {
            Upper::Count
        } else if side < 0.0 {
            Upper::Target
        } else {
            regions.extend(current.take());
            continue;
        };

        match current.as_mut() {
            Some(region) if region.upper == upper => region.spans.push(b.span(upper)),
            _ => {
                regions.extend(current.take());
                current = Some(FillRegion {
                    upper,
                    spans: vec![a.span(upper), b.span(upper)],
                });
            }
        }
    }
    regions.extend(current);
    regions
}
