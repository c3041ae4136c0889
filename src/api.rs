use crate::{distance, memory::*, AbortStrategy, KMeansError, PointSet};

pub type InitDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>);
pub type IterationDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>, usize, T);

/// This is a structure holding various configuration options for the a k-means calculations, such as
/// the abort strategy to use, or a couple of callbacks, that can be set to get status information from
/// a running k-means calculation.
///
/// For a more detailed information about all possible options, have a look at [`KMeansConfigBuilder`].
pub struct KMeansConfig<'a, T: Primitive> {
    /// Callback that is called, when the initialization phase finished
    /// ## Arguments
    /// - **state**: Current [`KMeansState`] after the initialization
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each iteration
    /// ## Arguments
    /// - **state**: Current [`KMeansState`] after the iteration (already holding the new centroids)
    /// - **iteration_id**: Number of the current iteration (starting at 1)
    /// - **distsum**: New distance sum (**state** contains the distsum from the previous iteration)
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// The abort-strategy to use for the running calculation
    pub(crate) abort_strategy: AbortStrategy<T>
}
impl<'a, T: Primitive> Default for KMeansConfig<'a, T> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_,_,_| {},
            abort_strategy: AbortStrategy::default()
        }
    }
}
impl<'a, T: Primitive> KMeansConfig<'a, T> {
    /// Use the [`KMeansConfigBuilder`] to build a [`KMeansConfig`] instance.
    pub fn build() -> KMeansConfigBuilder<'a, T> {
        KMeansConfigBuilder { config: KMeansConfig::default() }
    }
}
impl<'a, T: Primitive> std::fmt::Debug for KMeansConfig<'a, T> {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { Ok(()) }
}

pub struct KMeansConfigBuilder<'a, T: Primitive> {
    config: KMeansConfig<'a, T>
}
impl<'a, T: Primitive> KMeansConfigBuilder<'a, T> {
    /// Set the callback that should be called after the centroid initialization, before the iteration starts.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Set the callback that should be called after each iteration during a running k-means calculation.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Set the abort-strategy to use during a running k-means calculation. For more information,
    /// see documentation of [`AbortStrategy`].
    /// ## Default
    /// [`AbortStrategy::CentroidShift`] `{ epsilon: 0.001 }`
    pub fn abort_strategy(mut self, abort_strategy: AbortStrategy<T>) -> Self {
        self.config.abort_strategy = abort_strategy; self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> KMeansConfig<'a, T> { self.config }
}


/// This is the internally used data-structure, storing the current state during calculation, as
/// well as the final result, as returned by the API.
/// All mutations are done in this structure, making [`KMeans`] immutable, and therefore allowing
/// it to be used for multiple runs, without having to duplicate the input-data.
///
/// ## Generics
/// - **T**: Underlying primitive type that was used for the calculation
///
/// ## Fields
/// - **k**: The amount of clusters that were requested when calculating this k-means result
/// - **sample_dims**: Amount of coordinates per centroid
/// - **distsum**: The total sum of squared distances from all samples to the centroid they were assigned to
///   in the last iteration
/// - **centroids**: Calculated cluster centers [row-major] = [<centroid0>,<centroid1>,<centroid2>,...]
/// - **centroid_frequency**: Amount of samples assigned to each cluster in the last iteration
/// - **assignments**: Vector mapping each sample to the cluster it was assigned to in the last iteration
/// - **iterations**: Amount of iterations that were run
/// - **converged**: Whether the calculation stopped because no centroid moved anymore (instead of
///   exhausting the iteration budget)
#[derive(Clone, Debug)]
pub struct KMeansState<T: Primitive> {
    pub k: usize,
    pub sample_dims: usize,
    pub distsum: T,
    pub centroids: Vec<T>,
    pub centroid_frequency: Vec<usize>,
    pub assignments: Vec<usize>,
    pub iterations: usize,
    pub converged: bool,
}
impl<T: Primitive> KMeansState<T> {
    pub(crate) fn new(sample_cnt: usize, sample_dims: usize, k: usize) -> Self {
        Self {
            k,
            sample_dims,
            distsum: T::infinity(),
            centroids: vec![T::zero(); sample_dims * k],
            centroid_frequency: vec![0usize; k],
            assignments: vec![0usize; sample_cnt],
            iterations: 0,
            converged: false,
        }
    }
    pub(crate) fn set_centroid_from_iter(&mut self, idx: usize, src: impl Iterator<Item = T>) {
        self.centroids.iter_mut().skip(self.sample_dims * idx).take(self.sample_dims)
                .zip(src)
                .for_each(|(c,s)| *c = s);
    }

    /// Coordinates of the centroid with index `idx`.
    ///
    /// ## Panics
    /// If `idx >= self.k`.
    pub fn centroid(&self, idx: usize) -> &[T] {
        &self.centroids[idx * self.sample_dims..(idx + 1) * self.sample_dims]
    }

    /// Iterate over all centroids, in index order.
    pub fn centroids(&self) -> std::slice::ChunksExact<'_, T> {
        self.centroids.chunks_exact(self.sample_dims.max(1))
    }
}




/// Entrypoint of this crate's API-Surface.
///
/// Create an instance of this struct, giving the samples you want to operate on. The primitive type
/// of the passed samples array will be the type used internaly for all calculations, as well as the result
/// as stored in the returned [`KMeansState`] structure.
///
/// ## Supported variants
/// - k-Means clustering (Lloyd) [`KMeans::kmeans_lloyd`]
///
/// ## Supported initialization methods
/// - First-K [`KMeans::init_first_k`]
/// - Precomputed [`KMeans::init_precomputed`]
#[derive(Clone, Debug)]
pub struct KMeans<T: Primitive> {
    pub(crate) points: PointSet<T>,
}
impl<T: Primitive> KMeans<T> {
    /// Create a new instance of the [`KMeans`] structure.
    ///
    /// ## Arguments
    /// - **samples**: Vector of samples [row-major] = [<sample0>,<sample1>,<sample2>,...]
    /// - **sample_cnt**: Amount of samples, contained in the passed **samples** vector
    /// - **sample_dims**: Amount of dimensions each sample from the **sample** vector has
    pub fn new(samples: Vec<T>, sample_cnt: usize, sample_dims: usize) -> Result<Self, KMeansError> {
        Ok(Self { points: PointSet::new(samples, sample_cnt, sample_dims)? })
    }

    /// Amount of samples
    pub fn sample_cnt(&self) -> usize { self.points.len() }
    /// Amount of dimensions per sample
    pub fn sample_dims(&self) -> usize { self.points.dims() }
    /// The samples this instance operates on
    pub fn points(&self) -> &PointSet<T> { &self.points }

    /// Normal K-Means algorithm implementation (Lloyd).
    ///
    /// Each iteration assigns every sample to its nearest centroid, replaces every centroid by the mean of
    /// its samples (empty clusters get a copy of the first sample) and stops once no centroid coordinate
    /// moved by the configured epsilon or more, or after **max_iter** iterations.
    ///
    /// ## Arguments
    /// - **k**: Amount of clusters to search for
    /// - **max_iter**: Limit the maximum amount of iterations
    /// - **init**: Initialization-Method to use for the initialization of the **k** centroids
    /// - **config**: [`KMeansConfig`] instance, containing several configuration options for the calculation.
    ///
    /// ## Returns
    /// Instance of [`KMeansState`], containing the final state (result).
    ///
    /// ## Errors
    /// - [`KMeansError::InvalidK`] if **k** is 0
    /// - [`KMeansError::InsufficientData`] if **k** is not smaller than the amount of samples
    /// - [`KMeansError::InvalidMaxIter`] if **max_iter** is 0
    /// - Any error returned by the initialization method
    ///
    /// ## Example
    /// ```rust
    /// use kmeans_lloyd::*;
    ///
    /// let samples = vec![0.0f64, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 10.0, 10.0, 10.0, 11.0, 11.0, 10.0, 11.0, 11.0];
    /// let kmean = KMeans::new(samples, 8, 2).unwrap();
    /// let result = kmean.kmeans_lloyd(2, 100, KMeans::init_first_k, &KMeansConfig::default()).unwrap();
    ///
    /// assert_eq!(result.centroids, vec![0.5, 0.5, 10.5, 10.5]);
    /// assert!(result.converged);
    /// ```
    pub fn kmeans_lloyd<'a, F>(&self, k: usize, max_iter: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>, KMeansError>
                where for<'c> F: FnOnce(&KMeans<T>, &mut KMeansState<T>, &KMeansConfig<'c, T>) -> Result<(), KMeansError> {
        crate::variants::Lloyd::calculate(self, k, max_iter, init, config)
    }

    /// Assign a (new) point to the nearest centroid of a finished calculation.
    ///
    /// ## Errors
    /// [`KMeansError::InvalidDimensions`] if **point** does not have the dimensions of the samples.
    pub fn predict(&self, state: &KMeansState<T>, point: &[T]) -> Result<usize, KMeansError> {
        if point.len() != self.sample_dims() || state.sample_dims != self.sample_dims() {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} coordinates, got {}", self.sample_dims(), point.len()
            )));
        }
        Ok(distance::nearest_centroid(&state.centroids, state.sample_dims, point).0)
    }

    /// First-K initialization method
    ///
    /// ## Description
    /// This initialization method copies the first k samples (in input order) as initial centroids.
    /// It is fully deterministic.
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass a reference to it, to an instance-method of [`KMeans`].
    pub fn init_first_k(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>) -> Result<(), KMeansError> {
        crate::inits::firstk::calculate(kmean, state, config)
    }

    /// Precomputed initialization method
    ///
    /// ## Description
    /// Use the given centroids [row-major] as initial centroids. The vector has to contain exactly
    /// k centroids with the dimensions of the samples.
    pub fn init_precomputed(centroids: Vec<T>) -> impl FnOnce(&KMeans<T>, &mut KMeansState<T>, &KMeansConfig<'_, T>) -> Result<(), KMeansError> {
        move |kmean, state, config| crate::inits::precomputed::calculate(kmean, state, config, centroids)
    }
}
impl<T: Primitive> From<PointSet<T>> for KMeans<T> {
    fn from(points: PointSet<T>) -> Self {
        Self { points }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn two_squares() -> KMeans<f64> {
        KMeans::new(vec![0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 10.0, 10.0, 10.0, 11.0, 11.0, 10.0, 11.0, 11.0], 8, 2).unwrap()
    }

    #[test]
    fn new_validates_shape() {
        assert!(matches!(KMeans::new(vec![1.0f64, 2.0, 3.0], 2, 2), Err(KMeansError::InvalidDimensions(_))));
        let kmean = two_squares();
        assert_eq!(kmean.sample_cnt(), 8);
        assert_eq!(kmean.sample_dims(), 2);
    }

    #[test]
    fn from_point_set() {
        let points = PointSet::from_rows(vec![[1.0f32, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
        let kmean = KMeans::from(points.clone());
        assert_eq!(kmean.points(), &points);
    }

    #[test]
    fn state_accessors() {
        let mut state = KMeansState::<f64>::new(4, 3, 2);
        state.set_centroid_from_iter(1, [7.0, 8.0, 9.0].iter().cloned());
        assert_eq!(state.centroid(0), &[0.0, 0.0, 0.0]);
        assert_eq!(state.centroid(1), &[7.0, 8.0, 9.0]);
        assert_eq!(state.centroids().count(), 2);
        assert_eq!(state.assignments.len(), 4);
    }

    #[test]
    fn predict_nearest() {
        let kmean = two_squares();
        let state = kmean.kmeans_lloyd(2, 100, KMeans::init_first_k, &KMeansConfig::default()).unwrap();
        assert_eq!(kmean.predict(&state, &[-3.0, 2.0]).unwrap(), 0);
        assert_eq!(kmean.predict(&state, &[8.0, 9.0]).unwrap(), 1);
        assert!(matches!(kmean.predict(&state, &[1.0]), Err(KMeansError::InvalidDimensions(_))));
    }

    #[test]
    fn status_callbacks() {
        use std::cell::RefCell;

        let init_calls = RefCell::new(0usize);
        let iterations = RefCell::new(Vec::new());
        let init_done = |_: &KMeansState<f64>| *init_calls.borrow_mut() += 1;
        let iteration_done = |s: &KMeansState<f64>, nr: usize, distsum: f64| {
            iterations.borrow_mut().push((nr, s.distsum, distsum));
        };
        let conf = KMeansConfig::build()
            .init_done(&init_done)
            .iteration_done(&iteration_done)
            .build();

        let result = two_squares().kmeans_lloyd(2, 100, KMeans::init_first_k, &conf).unwrap();
        assert_eq!(*init_calls.borrow(), 1);
        let iterations = iterations.borrow();
        assert_eq!(iterations.len(), result.iterations);
        assert_eq!(iterations.iter().map(|i| i.0).collect::<Vec<_>>(), (1..=result.iterations).collect::<Vec<_>>());
        // First callback sees the initial (infinite) distsum
        assert!(iterations[0].1.is_infinite());
        assert_eq!(iterations[1].1, iterations[0].2);
        assert_eq!(iterations.last().unwrap().2, result.distsum);
    }
}
