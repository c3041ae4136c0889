use crate::{memory::Primitive, KMeansState};
use std::io::{self, Write};

/// Format one centroid: coordinates with `precision` decimal digits, separated by commas.
pub fn format_centroid<T: Primitive>(centroid: &[T], precision: usize) -> String {
    centroid.iter()
        .map(|v| format!("{:.*}", precision, v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Format all centroids of a result, one line per centroid in index order, each line terminated by `\n`.
pub fn format_centroids<T: Primitive>(state: &KMeansState<T>, precision: usize) -> String {
    let mut out = String::new();
    for centroid in state.centroids() {
        out.push_str(&format_centroid(centroid, precision));
        out.push('\n');
    }
    out
}

/// Write all centroids of a result to `writer`, formatted by [`format_centroids`].
pub fn write_centroids<W: Write, T: Primitive>(mut writer: W, state: &KMeansState<T>, precision: usize) -> io::Result<()> {
    writer.write_all(format_centroids(state, precision).as_bytes())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn state(centroids: Vec<f64>, k: usize, sample_dims: usize) -> KMeansState<f64> {
        let mut state = KMeansState::new(k + 1, sample_dims, k);
        state.centroids = centroids;
        state
    }

    #[test]
    fn centroid_line() {
        assert_eq!(format_centroid(&[0.5f64, 10.0, -3.25], 4), "0.5000,10.0000,-3.2500");
        assert_eq!(format_centroid(&[1.0f64 / 3.0], 4), "0.3333");
        assert_eq!(format_centroid(&[2.0f64 / 3.0, 0.99999], 4), "0.6667,1.0000");
        assert_eq!(format_centroid(&[1.5f32], 2), "1.50");
    }

    #[test]
    fn one_line_per_centroid() {
        let state = state(vec![0.5, 0.5, 10.5, 10.5], 2, 2);
        assert_eq!(format_centroids(&state, 4), "0.5000,0.5000\n10.5000,10.5000\n");
    }

    #[test]
    fn single_dimension_has_no_commas() {
        let state = state(vec![1.0, 101.0], 2, 1);
        assert_eq!(format_centroids(&state, 4), "1.0000\n101.0000\n");
    }

    #[test]
    fn write_to_buffer() {
        let state = state(vec![5.0, 5.0, 5.0, 5.0], 2, 2);
        let mut buf = Vec::new();
        write_centroids(&mut buf, &state, 4).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "5.0000,5.0000\n5.0000,5.0000\n");
    }
}
