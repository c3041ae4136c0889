use crate::{memory::Primitive, KMeansError};
use log::debug;
use std::io::BufRead;

/// Options of the line based point reader.
#[derive(Clone, Debug)]
pub struct LoaderConfig {
    /// Character separating the coordinates of one point. When this is a whitespace character,
    /// any run of whitespace separates two coordinates.
    pub delimiter: char,
}
impl Default for LoaderConfig {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

/// Ordered, read-only collection of points, all having the same amount of coordinates.
///
/// Points are stored row-major in one contiguous buffer: `[<point0>,<point1>,<point2>,...]`.
/// Insertion order is preserved, since it decides which points become the initial centroids and
/// which point fills empty clusters.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet<T: Primitive> {
    samples: Vec<T>,
    sample_cnt: usize,
    sample_dims: usize,
}
impl<T: Primitive> PointSet<T> {
    /// Create a point set from a flat, row-major sample buffer.
    ///
    /// ## Arguments
    /// - **samples**: Vector of samples [row-major] = [<sample0>,<sample1>,<sample2>,...]
    /// - **sample_cnt**: Amount of samples, contained in the passed **samples** vector
    /// - **sample_dims**: Amount of dimensions each sample from the **sample** vector has
    ///
    /// ## Errors
    /// [`KMeansError::InvalidDimensions`] if the buffer length does not match `sample_cnt * sample_dims`,
    /// or if a non-empty set has zero dimensions.
    pub fn new(samples: Vec<T>, sample_cnt: usize, sample_dims: usize) -> Result<Self, KMeansError> {
        if sample_cnt > 0 && sample_dims == 0 {
            return Err(KMeansError::InvalidDimensions("points need at least one coordinate".to_string()));
        }
        if sample_cnt.checked_mul(sample_dims) != Some(samples.len()) {
            return Err(KMeansError::InvalidDimensions(format!(
                "{} values can not be split into {} points of {} coordinates",
                samples.len(), sample_cnt, sample_dims
            )));
        }
        Ok(Self { samples, sample_cnt, sample_dims })
    }

    /// Create a point set from individual rows. All rows need the same length as the first one.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, KMeansError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        let mut samples = Vec::new();
        let (mut sample_cnt, mut sample_dims) = (0, 0);
        for row in rows {
            let row = row.as_ref();
            if sample_cnt == 0 {
                sample_dims = row.len();
            } else if row.len() != sample_dims {
                return Err(KMeansError::InvalidDimensions(format!(
                    "row {} has {} coordinates, expected {}", sample_cnt, row.len(), sample_dims
                )));
            }
            samples.extend_from_slice(row);
            sample_cnt += 1;
        }
        Self::new(samples, sample_cnt, sample_dims)
    }

    /// Read points from a line based text source: one point per line, coordinates separated by
    /// [`LoaderConfig::delimiter`].
    ///
    /// The amount of dimensions is taken from the first point. Blank lines (e.g. the empty record
    /// after a trailing newline) are skipped, a last line without a terminating newline still counts
    /// as a point.
    ///
    /// ## Errors
    /// - [`KMeansError::Parse`] for a token that is not a finite number
    /// - [`KMeansError::InvalidDimensions`] for a line whose coordinate count differs from the first line
    /// - [`KMeansError::Io`] if reading fails
    pub fn from_reader<R: BufRead>(reader: R, config: &LoaderConfig) -> Result<Self, KMeansError> {
        let mut samples = Vec::new();
        let (mut sample_cnt, mut sample_dims) = (0, 0);

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let line_nr = line_idx + 1;
            let tokens: Vec<&str> = if config.delimiter.is_whitespace() {
                line.split_whitespace().collect()
            } else {
                line.split(config.delimiter).map(str::trim).collect()
            };
            for token in tokens.iter() {
                samples.push(parse_coordinate(token, line_nr)?);
            }

            if sample_cnt == 0 {
                sample_dims = tokens.len();
            } else if tokens.len() != sample_dims {
                return Err(KMeansError::InvalidDimensions(format!(
                    "line {} has {} coordinates, expected {}", line_nr, tokens.len(), sample_dims
                )));
            }
            sample_cnt += 1;
        }

        debug!("Read {} points with {} dimensions", sample_cnt, sample_dims);
        Self::new(samples, sample_cnt, sample_dims)
    }

    /// Amount of points
    pub fn len(&self) -> usize { self.sample_cnt }
    pub fn is_empty(&self) -> bool { self.sample_cnt == 0 }
    /// Amount of coordinates per point
    pub fn dims(&self) -> usize { self.sample_dims }
    /// The flat, row-major sample buffer
    pub fn as_slice(&self) -> &[T] { &self.samples }

    /// Coordinates of the point at `idx` (input order).
    ///
    /// ## Panics
    /// If `idx >= self.len()`.
    pub fn point(&self, idx: usize) -> &[T] {
        &self.samples[idx * self.sample_dims..(idx + 1) * self.sample_dims]
    }

    /// Iterate over all points in input order.
    pub fn points(&self) -> std::slice::ChunksExact<'_, T> {
        // an empty set may have 0 dims, which chunks_exact() does not accept
        self.samples.chunks_exact(self.sample_dims.max(1))
    }
}

fn parse_coordinate<T: Primitive>(token: &str, line: usize) -> Result<T, KMeansError> {
    match token.parse::<T>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(KMeansError::Parse { line, token: token.to_string() }),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn load(input: &str) -> Result<PointSet<f64>, KMeansError> {
        PointSet::from_reader(input.as_bytes(), &LoaderConfig::default())
    }

    #[test]
    fn new_validates_shape() {
        assert!(PointSet::new(vec![1.0f64, 2.0, 3.0, 4.0], 2, 2).is_ok());
        assert!(matches!(PointSet::new(vec![1.0f64, 2.0, 3.0], 2, 2), Err(KMeansError::InvalidDimensions(_))));
        assert!(matches!(PointSet::<f64>::new(vec![], 2, 0), Err(KMeansError::InvalidDimensions(_))));
        assert!(PointSet::<f64>::new(vec![], 0, 0).unwrap().is_empty());
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let set = PointSet::from_rows(vec![vec![1.0f64, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.point(1), &[3.0, 4.0]);

        let err = PointSet::from_rows(vec![vec![1.0f64, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, KMeansError::InvalidDimensions(_)));
    }

    #[test]
    fn reads_points_in_order() {
        let set = load("0,0\n0,1\n1.5,-2e1\n").unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.dims(), 2);
        assert_eq!(set.as_slice(), &[0.0, 0.0, 0.0, 1.0, 1.5, -20.0]);
        let points: Vec<&[f64]> = set.points().collect();
        assert_eq!(points, vec![&[0.0, 0.0][..], &[0.0, 1.0][..], &[1.5, -20.0][..]]);
    }

    #[test]
    fn trailing_blank_lines_are_not_points() {
        let with_blank = load("0,0\n1,1\n10,10\n\n").unwrap();
        let without_blank = load("0,0\n1,1\n10,10\n").unwrap();
        let without_newline = load("0,0\n1,1\n10,10").unwrap();
        assert_eq!(with_blank.len(), 3);
        assert_eq!(with_blank, without_blank);
        assert_eq!(with_blank, without_newline);
    }

    #[test]
    fn tolerates_crlf_and_padding() {
        let set = load("1 , 2\r\n 3,4 \r\n").unwrap();
        assert_eq!(set.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn whitespace_delimiter() {
        let config = LoaderConfig { delimiter: ' ' };
        let set: PointSet<f32> = PointSet::from_reader("1  2\t3\n4 5 6\n".as_bytes(), &config).unwrap();
        assert_eq!(set.dims(), 3);
        assert_eq!(set.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn single_dimension() {
        let set = load("0\n1\n2\n100\n101\n102\n\n").unwrap();
        assert_eq!(set.len(), 6);
        assert_eq!(set.dims(), 1);
        assert_eq!(set.point(3), &[100.0]);
    }

    #[test]
    fn rejects_ragged_lines() {
        match load("0,0\n1,1,1\n") {
            Err(KMeansError::InvalidDimensions(msg)) => assert!(msg.contains("line 2")),
            other => panic!("expected dimension error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_tokens() {
        match load("0,0\n1,abc\n") {
            Err(KMeansError::Parse { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(matches!(load("1,,2\n"), Err(KMeansError::Parse { line: 1, .. })));
        assert!(matches!(load("1,NaN\n"), Err(KMeansError::Parse { .. })));
        assert!(matches!(load("inf,1\n"), Err(KMeansError::Parse { .. })));
    }

    #[test]
    fn empty_input() {
        let set = load("").unwrap();
        assert!(set.is_empty());
        assert_eq!(set.points().count(), 0);
        assert!(load("\n\n").unwrap().is_empty());
    }
}
