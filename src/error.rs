use thiserror::Error;

/// Message printed for usage errors, malformed input and I/O failures.
pub const ERROR_OCCURRED: &str = "An Error Has Occurred";
/// Message printed when the requested cluster count is invalid for the arguments or the input.
pub const ERROR_NUM_CLUSTERS: &str = "Incorrect number of clusters!";
/// Message printed when the requested iteration budget is out of range.
pub const ERROR_MAX_ITER: &str = "Incorrect maximum iteration!";

/// Error types of the k-means crate
#[derive(Error, Debug)]
pub enum KMeansError {
    /// Wrong amount (or shape) of command line arguments
    #[error("Invalid usage: {0}")]
    Usage(String),

    /// The number of clusters k is invalid
    #[error("Invalid k value: {0}")]
    InvalidK(String),

    /// The iteration budget is invalid
    #[error("Invalid max_iter value: {0}")]
    InvalidMaxIter(String),

    /// Not enough points for the requested number of clusters (`k >= n`)
    #[error("Insufficient data: {n} points can not be partitioned into {k} clusters")]
    InsufficientData { k: usize, n: usize },

    /// Points (or centroids) with differing amount of coordinates
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),

    /// A coordinate token that is not a finite floating point number
    #[error("Malformed coordinate {token:?} on line {line}")]
    Parse { line: usize, token: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl KMeansError {
    /// The fixed, human-readable message reported to the user of the command line tool.
    pub fn user_message(&self) -> &'static str {
        match self {
            KMeansError::InvalidK(_) | KMeansError::InsufficientData { .. } => ERROR_NUM_CLUSTERS,
            KMeansError::InvalidMaxIter(_) => ERROR_MAX_ITER,
            KMeansError::Usage(_)
            | KMeansError::InvalidDimensions(_)
            | KMeansError::Parse { .. }
            | KMeansError::Io(_) => ERROR_OCCURRED,
        }
    }
}
