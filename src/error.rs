use thiserror::Error;

/// Top-level error type for quadrilateral search.
///
/// Finding no quadrilateral is not an error; see
/// [`FindQuadrilateral::execute`](crate::operations::FindQuadrilateral::execute).
#[derive(Debug, Error)]
pub enum QuadfindError {
    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Errors raised while building [`FinderOptions`](crate::operations::FinderOptions).
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid value {value} for option `{name}`")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("segment limit {limit} is below the 4 segments a quadrilateral needs")]
    SegmentLimitTooSmall { limit: usize },
}

/// Errors raised before a search is started.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{count} segments exceed the configured limit of {limit}")]
    TooManySegments { count: usize, limit: usize },
}

/// Convenience type alias for results using [`QuadfindError`].
pub type Result<T> = std::result::Result<T, QuadfindError>;
