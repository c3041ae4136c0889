use crate::memory::Primitive;

/// Sum of the squared per-coordinate differences between `a` and `b`.
#[inline(always)]
pub fn squared_euclidean<T: Primitive>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter().cloned().zip(b.iter().cloned())
        .map(|(av, bv)| av - bv)    // <a> - <b>
        .map(|v| v * v)             // <vec_components> ^2
        .sum()
}

/// Euclidean (L2) distance between `a` and `b`.
#[inline(always)]
pub fn euclidean<T: Primitive>(a: &[T], b: &[T]) -> T {
    squared_euclidean(a, b).sqrt()
}

/// Find the centroid nearest to `point`.
///
/// `centroids` is row-major with `sample_dims` coordinates per centroid. Centroids are scanned in
/// index order and only a strictly smaller distance replaces the running minimum, so ties go to the
/// lowest index.
///
/// ## Returns
/// Tuple of (index of nearest centroid, squared distance to it)
pub(crate) fn nearest_centroid<T: Primitive>(centroids: &[T], sample_dims: usize, point: &[T]) -> (usize, T) {
    let mut best_idx = 0;
    let mut best_dist = T::infinity();
    for (idx, centroid) in centroids.chunks_exact(sample_dims).enumerate() {
        let dist = squared_euclidean(point, centroid);
        if idx == 0 || dist < best_dist {
            best_idx = idx;
            best_dist = dist;
        }
    }
    (best_idx, best_dist)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        assert_eq!(squared_euclidean(&[0.0f64, 0.0], &[3.0, 4.0]), 25.0);
        assert_eq!(euclidean(&[0.0f64, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(euclidean(&[1.5f32], &[1.5]), 0.0);
        assert_eq!(squared_euclidean(&[-1.0f64, 2.0, -3.0], &[1.0, -2.0, 3.0]), 56.0);
    }

    #[test]
    fn nearest_centroid_picks_minimum() {
        let centroids = [0.0f64, 0.0, 10.0, 10.0, 4.0, 4.0];
        assert_eq!(nearest_centroid(&centroids, 2, &[1.0, 1.0]), (0, 2.0));
        assert_eq!(nearest_centroid(&centroids, 2, &[9.0, 9.5]), (1, 1.25));
        assert_eq!(nearest_centroid(&centroids, 2, &[5.0, 4.0]), (2, 1.0));
    }

    #[test]
    fn nearest_centroid_ties_go_to_lowest_index() {
        let centroids = [0.0f64, 2.0, 2.0, 0.0];
        assert_eq!(nearest_centroid(&centroids, 1, &[1.0]).0, 0);
        assert_eq!(nearest_centroid(&[5.0f64, 5.0, 5.0, 5.0], 2, &[5.0, 5.0]), (0, 0.0));
        // 0.0 and 2.0 are equally far from 1.0, as are both copies of 0.0
        assert_eq!(nearest_centroid(&[3.0f64, 0.0, 2.0, 0.0], 1, &[1.0]).0, 1);
    }

    #[test]
    fn nearest_centroid_nan_falls_back_to_first() {
        let centroids = [f64::NAN, f64::NAN];
        assert_eq!(nearest_centroid(&centroids, 1, &[1.0]).0, 0);
    }
}
