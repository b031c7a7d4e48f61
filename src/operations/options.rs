use crate::error::{OptionsError, Result};

/// Tuning knobs for [`FindQuadrilateral`](super::FindQuadrilateral).
///
/// The defaults reproduce the plain search: exact parallel detection and no
/// cap on the number of input segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinderOptions {
    parallel_tolerance: f64,
    segment_limit: Option<usize>,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            parallel_tolerance: 0.0,
            segment_limit: None,
        }
    }
}

impl FinderOptions {
    /// Sets the threshold on `|r × s|` below which two edges count as parallel.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::InvalidParameter` if `tolerance` is negative or
    /// not finite.
    pub fn with_parallel_tolerance(self, tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(OptionsError::InvalidParameter {
                name: "parallel_tolerance",
                value: tolerance,
            }
            .into());
        }
        Ok(Self {
            parallel_tolerance: tolerance,
            ..self
        })
    }

    /// Caps the number of input segments a search will accept.
    ///
    /// The search visits `C(n, 4) * 24` candidates, so this bounds its cost
    /// up front.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::SegmentLimitTooSmall` if `limit` is below 4,
    /// since no quadrilateral could ever be found.
    pub fn with_segment_limit(self, limit: usize) -> Result<Self> {
        if limit < 4 {
            return Err(OptionsError::SegmentLimitTooSmall { limit }.into());
        }
        Ok(Self {
            segment_limit: Some(limit),
            ..self
        })
    }

    /// Returns the parallel tolerance.
    #[must_use]
    pub fn parallel_tolerance(&self) -> f64 {
        self.parallel_tolerance
    }

    /// Returns the segment limit, if any.
    #[must_use]
    pub fn segment_limit(&self) -> Option<usize> {
        self.segment_limit
    }
}
