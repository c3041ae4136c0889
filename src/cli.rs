//! Command line surface of the `kmeans` binary: argument model and validation.

use crate::KMeansError;
use clap::Parser;
use std::ffi::OsString;

/// Iteration budget used when none is given.
pub const DEFAULT_MAX_ITER: usize = 400;
/// Exclusive upper bound of the iteration budget.
pub const MAX_ITER_LIMIT: usize = 800;
/// Decimal digits per printed coordinate.
pub const OUTPUT_PRECISION: usize = 4;
/// Convergence threshold: a run stops once no centroid coordinate moves by this much or more.
pub const EPS: f64 = crate::DEFAULT_EPSILON;

/// Cluster points read from stdin (one point per line, comma separated coordinates) and print the
/// final centroids.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Number of clusters, an integer greater than 1 and smaller than the number of points
    pub k: String,

    /// Maximum number of iterations, an integer with 1 < max_iter < 800 (default: 400)
    pub max_iter: Option<String>,
}

/// Validated run parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub k: usize,
    pub max_iter: usize,
}

impl Args {
    /// Parse process arguments (program name first). Every following token is taken as a positional
    /// value, so `-h`, `--version` or `--` end up as (invalid) K or max_iter instead of being
    /// interpreted by clap.
    ///
    /// ## Errors
    /// [`KMeansError::Usage`] unless there are one or two tokens after the program name.
    pub fn try_parse_positional<I, S>(args: I) -> Result<Self, KMeansError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next().unwrap_or_else(|| OsString::from("kmeans"));
        // after the first "--" clap treats every token as a value, a second "--" included
        let escaped = std::iter::once(bin).chain(std::iter::once(OsString::from("--"))).chain(args);
        Ok(Self::try_parse_from(escaped)?)
    }

    /// Check the raw arguments. K is checked before max_iter.
    ///
    /// ## Errors
    /// - [`KMeansError::InvalidK`] unless K consists of digits only and is greater than 1
    /// - [`KMeansError::InvalidMaxIter`] unless max_iter consists of digits only and `1 < max_iter < 800`
    pub fn validate(&self) -> Result<RunConfig, KMeansError> {
        let k = parse_integer_literal(&self.k)
            .filter(|&k| k > 1)
            .ok_or_else(|| KMeansError::InvalidK(self.k.clone()))?;

        let max_iter = match &self.max_iter {
            None => DEFAULT_MAX_ITER,
            Some(raw) => parse_integer_literal(raw)
                .filter(|&max_iter| max_iter > 1 && max_iter < MAX_ITER_LIMIT)
                .ok_or_else(|| KMeansError::InvalidMaxIter(raw.clone()))?,
        };

        Ok(RunConfig { k, max_iter })
    }
}

impl From<clap::Error> for KMeansError {
    fn from(err: clap::Error) -> Self {
        KMeansError::Usage(err.kind().to_string())
    }
}

/// Whether `s` is a non-empty string of ASCII digits (no sign, no whitespace).
pub fn is_integer_literal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse an integer literal. Values that do not fit a `usize` are treated like malformed ones.
fn parse_integer_literal(s: &str) -> Option<usize> {
    if !is_integer_literal(s) {
        return None;
    }
    s.parse().ok()
}
