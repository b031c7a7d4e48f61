//! Hand-authored segment sets for demos, tests and benchmarks.

use crate::geometry::Segment;

/// Segments traced from a photographed page: its four edges followed by
/// seven noise segments.
///
/// The edges come first, in the order top, bottom, left, right.
#[must_use]
pub fn page_segments() -> Vec<Segment> {
    let mut segments = page_edges().to_vec();
    segments.extend(page_noise());
    segments
}

/// The four page edges of [`page_segments`]: top, bottom, left, right.
#[must_use]
pub fn page_edges() -> [Segment; 4] {
    [
        Segment::from_coords(335.0, 120.0, 517.0, 144.0),
        Segment::from_coords(287.0, 604.0, 558.0, 619.0),
        Segment::from_coords(323.0, 131.0, 275.0, 587.0),
        Segment::from_coords(589.0, 473.0, 580.0, 606.0),
    ]
}

/// The noise segments of [`page_segments`].
#[must_use]
pub fn page_noise() -> [Segment; 7] {
    [
        Segment::from_coords(368.0, 39.0, 489.0, 108.0),
        Segment::from_coords(53.0, 286.0, 293.0, 406.0),
        Segment::from_coords(299.0, 347.0, 214.0, 538.0),
        Segment::from_coords(200.0, 370.0, 149.0, 528.0),
        Segment::from_coords(6.0, 446.0, 68.0, 449.0),
        Segment::from_coords(66.0, 444.0, 150.0, 525.0),
        Segment::from_coords(389.0, 514.0, 518.0, 644.0),
    ]
}

/// Edges of the axis-aligned square with corners `(0, 0)` and
/// `(side, side)`, each trimmed by `slack` at both ends and ordered
/// bottom, right, top, left.
#[must_use]
pub fn trimmed_square(side: f64, slack: f64) -> [Segment; 4] {
    let (lo, hi) = (slack, side - slack);
    [
        Segment::from_coords(lo, 0.0, hi, 0.0),
        Segment::from_coords(side, lo, side, hi),
        Segment::from_coords(hi, side, lo, side),
        Segment::from_coords(0.0, hi, 0.0, lo),
    ]
}
