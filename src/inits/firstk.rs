use crate::memory::*;
use crate::{KMeans, KMeansConfig, KMeansError, KMeansState};

#[inline(always)]
pub fn calculate<T: Primitive>(kmean: &KMeans<T>, state: &mut KMeansState<T>, _config: &KMeansConfig<'_, T>) -> Result<(), KMeansError> {
    if kmean.sample_cnt() < state.k {
        return Err(KMeansError::InsufficientData { k: state.k, n: kmean.sample_cnt() });
    }
    // Copy the first k samples (input order) into state.centroids
    kmean.points.points().take(state.k).enumerate().for_each(|(ci, c)| {
        state.set_centroid_from_iter(ci, c.iter().cloned());
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_first_k_samples() {
        let samples = vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let kmean = KMeans::new(samples, 4, 2).unwrap();
        let mut state = KMeansState::new(kmean.sample_cnt(), kmean.sample_dims(), 3);

        calculate(&kmean, &mut state, &KMeansConfig::default()).unwrap();
        assert_eq!(state.centroids, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        // The centroids are copies, the samples stay untouched
        state.centroids[0] = 100.0;
        assert_eq!(kmean.points().point(0), &[1.0, 2.0]);
    }

    #[test]
    fn rejects_too_few_samples() {
        let kmean = KMeans::new(vec![1.0f32, 2.0], 2, 1).unwrap();
        let mut state = KMeansState::new(kmean.sample_cnt(), kmean.sample_dims(), 3);
        let res = calculate(&kmean, &mut state, &KMeansConfig::default());
        assert!(matches!(res, Err(KMeansError::InsufficientData { k: 3, n: 2 })));
    }
}
