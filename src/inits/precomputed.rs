use crate::memory::*;
use crate::{KMeans, KMeansConfig, KMeansError, KMeansState};

#[inline(always)]
pub fn calculate<T: Primitive>(
    kmean: &KMeans<T>, state: &mut KMeansState<T>, _config: &KMeansConfig<'_, T>, computed: Vec<T>,
) -> Result<(), KMeansError> {
    if computed.len() != state.k * kmean.sample_dims() {
        return Err(KMeansError::InvalidDimensions(format!(
            "Expected {} precomputed centroids with {} coordinates, got {} values",
            state.k, kmean.sample_dims(), computed.len()
        )));
    }
    computed.chunks_exact(kmean.sample_dims()).enumerate().for_each(|(ci, c)| {
        state.set_centroid_from_iter(ci, c.iter().cloned());
    });
    Ok(())
}
