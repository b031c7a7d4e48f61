use std::time::Instant;

use tracing::{debug, trace};

use super::options::FinderOptions;
use super::score::{score, ErrorBreakdown};
use crate::combinatorics::{binomial, Combinatorics};
use crate::error::{Result, SearchError};
use crate::geometry::{Intersection, Segment};
use crate::math::Point2;

/// Best-fitting quadrilateral found among a set of segments.
///
/// Intersection `i` joins edge `i` to edge `i + 1` (cyclically), so the
/// corners trace the quadrilateral's outline in edge order.
#[derive(Debug, Clone, Copy)]
pub struct Quadrilateral {
    intersections: [Intersection; 4],
    breakdown: ErrorBreakdown,
}

impl Quadrilateral {
    /// Returns the four corner intersections in cyclic order.
    #[must_use]
    pub fn intersections(&self) -> &[Intersection; 4] {
        &self.intersections
    }

    /// Consumes the quadrilateral, returning its corner intersections.
    #[must_use]
    pub fn into_intersections(self) -> [Intersection; 4] {
        self.intersections
    }

    /// Returns the corner points in cyclic order.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        self.intersections.map(|i| i.point())
    }

    /// Returns the four chosen segments in cyclic edge order.
    #[must_use]
    pub fn edges(&self) -> [Segment; 4] {
        self.intersections.map(|i| *i.line1())
    }

    /// Returns the total error score of this candidate.
    #[must_use]
    pub fn error(&self) -> f64 {
        self.breakdown.total()
    }

    /// Returns the angle and distance components of the error.
    #[must_use]
    pub fn breakdown(&self) -> ErrorBreakdown {
        self.breakdown
    }
}

/// Searches a set of segments for the four most likely to bound a
/// quadrilateral.
///
/// Every 4-subset is tried in every cyclic order. Orders containing a pair of
/// parallel neighbours are skipped; the rest are ranked by
/// [`score`](super::score::score) and the lowest error wins, with the
/// first-found candidate kept on ties.
///
/// # Complexity
///
/// `C(n, 4) * 24` candidate evaluations. Intended for tens of segments.
#[derive(Debug)]
pub struct FindQuadrilateral<'a> {
    segments: &'a [Segment],
    options: FinderOptions,
}

impl<'a> FindQuadrilateral<'a> {
    /// Creates a new search over `segments` with default options.
    #[must_use]
    pub fn new(segments: &'a [Segment]) -> Self {
        Self {
            segments,
            options: FinderOptions::default(),
        }
    }

    /// Replaces the search options.
    #[must_use]
    pub fn with_options(self, options: FinderOptions) -> Self {
        Self { options, ..self }
    }

    /// Runs the search.
    ///
    /// Returns `Ok(None)` when no valid quadrilateral exists: fewer than four
    /// segments, or every candidate has a parallel pair of neighbouring edges.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::TooManySegments` if the input exceeds the
    /// configured segment limit.
    pub fn execute(&self) -> Result<Option<Quadrilateral>> {
        if let Some(limit) = self.options.segment_limit() {
            let count = self.segments.len();
            if count > limit {
                return Err(SearchError::TooManySegments { count, limit }.into());
            }
        }
        Ok(search(self.segments, &self.options))
    }
}

/// Finds the best quadrilateral using default options.
///
/// Returns `None` when no valid quadrilateral exists.
#[must_use]
pub fn find_quadrilateral(segments: &[Segment]) -> Option<Quadrilateral> {
    search(segments, &FinderOptions::default())
}

#[tracing::instrument(level = "debug", skip_all, fields(segments = segments.len()))]
fn search(segments: &[Segment], options: &FinderOptions) -> Option<Quadrilateral> {
    let started = Instant::now();
    let tolerance = options.parallel_tolerance();
    debug!(
        subsets = ?binomial(segments.len(), 4),
        "searching for quadrilateral"
    );

    let mut best: Option<Quadrilateral> = None;
    let mut smallest_error = f64::INFINITY;
    let mut evaluated: u64 = 0;
    let mut skipped: u64 = 0;

    for edge_set in segments.combinations(4) {
        for edges in edge_set.permutations() {
            let intersections: [Intersection; 4] = std::array::from_fn(|i| {
                Intersection::with_tolerance(**edges[i], **edges[(i + 1) % 4], tolerance)
            });
            if !intersections.iter().all(Intersection::has_intersection) {
                skipped += 1;
                continue;
            }
            evaluated += 1;

            let breakdown = score(&intersections);
            let error = breakdown.total();
            // NaN never compares less, so degenerate candidates never win.
            if error < smallest_error {
                trace!(
                    error,
                    angle = breakdown.angle,
                    distance = breakdown.distance,
                    "new best candidate"
                );
                smallest_error = error;
                best = Some(Quadrilateral {
                    intersections,
                    breakdown,
                });
            }
        }
    }

    debug!(
        evaluated,
        skipped,
        best_error = ?best.map(|q| q.error()),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "search finished"
    );
    best
}
