use crate::{distance, KMeans, KMeansState, KMeansConfig, KMeansError, memory::*};
use log::{debug, trace};

/// Per-cluster coordinate sums and member counts, collected during one iteration.
struct ClusterSums<T: Primitive> {
	sample_dims: usize,
	sums: Vec<T>,
	counts: Vec<usize>
}
impl<T: Primitive> ClusterSums<T> {
	fn new(k: usize, sample_dims: usize) -> Self {
		Self { sample_dims, sums: vec![T::zero(); k * sample_dims], counts: vec![0usize; k] }
	}
	fn add(&mut self, cluster: usize, sample: &[T]) {
		self.sums.iter_mut().skip(cluster * self.sample_dims).take(self.sample_dims)
			.zip(sample.iter())
			.for_each(|(cv, sv)| *cv += sv);
		self.counts[cluster] += 1;
	}
	fn empty_clusters(&self) -> usize {
		self.counts.iter().filter(|&&cnt| cnt == 0).count()
	}
}

pub(crate) struct Lloyd<T: Primitive> {
	_p: std::marker::PhantomData<T>
}
impl<T: Primitive> Lloyd<T> {
	/// Assign every sample to its nearest centroid (of the generation the iteration started with),
	/// and sum the assigned samples up per cluster.
	/// ## Returns
	/// The cluster sums, and the sum of squared distances of all samples to their assigned centroid
	fn assign_and_accumulate(data: &KMeans<T>, centroids: &[T], assignments: &mut [usize], k: usize) -> (ClusterSums<T>, T) {
		let sample_dims = data.sample_dims();
		let mut sums = ClusterSums::new(k, sample_dims);
		let mut distsum = T::zero();
		data.points.points()
			.zip(assignments.iter_mut())
			.for_each(|(s, assignment)| {
				let (best_idx, best_dist) = distance::nearest_centroid(centroids, sample_dims, s);
				*assignment = best_idx;
				distsum += best_dist;
				sums.add(best_idx, s);
			});
		(sums, distsum)
	}

	/// Mean of the samples assigned to `cluster`, with every sample scaled by `1 / cfreq` before it is
	/// added. Used when the plain coordinate sum exceeds the range of `T`.
	fn scaled_mean(data: &KMeans<T>, assignments: &[usize], cluster: usize, cfreq: T, centroid: &mut [T]) {
		centroid.iter_mut().for_each(|cv| *cv = T::zero());
		data.points.points()
			.zip(assignments.iter())
			.filter(|(_, a)| **a == cluster)
			.for_each(|(s, _)| {
				centroid.iter_mut().zip(s.iter().cloned()).for_each(|(cv, sv)| *cv += sv / cfreq);
			});
	}

	/// Calculate the next generation of centroids from the cluster sums.
	/// Clusters without samples get a copy of the first sample, so there are always k valid centroids.
	fn update_centroids(data: &KMeans<T>, assignments: &[usize], sums: &ClusterSums<T>) -> Vec<T> {
		let sample_dims = data.sample_dims();
		let fallback = data.points.point(0);
		let mut new_centroids = vec![T::zero(); sums.sums.len()];
		new_centroids.chunks_exact_mut(sample_dims)
			.zip(sums.sums.chunks_exact(sample_dims))
			.zip(sums.counts.iter().cloned())
			.enumerate()
			.for_each(|(ci, ((c, sum), cfreq))| {
				if cfreq > 0 {
					let cfreq: T = count_as(cfreq);
					c.iter_mut().zip(sum.iter().cloned()).for_each(|(cv, sv)| *cv = sv / cfreq);
					if c.iter().any(|cv| !cv.is_finite()) {
						trace!("Coordinate sum of cluster {} overflowed, recalculating its mean from scaled samples", ci);
						Self::scaled_mean(data, assignments, ci, cfreq, c);
					}
				} else {
					trace!("Cluster {} received no samples, resetting it to the first sample", ci);
					c.copy_from_slice(fallback);
				}
			});
		new_centroids
	}

	#[inline(always)] pub fn calculate<'a, F>(data: &KMeans<T>, k: usize, max_iter: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>, KMeansError>
				where for<'c> F: FnOnce(&KMeans<T>, &mut KMeansState<T>, &KMeansConfig<'c, T>) -> Result<(), KMeansError> {
		if k == 0 {
			return Err(KMeansError::InvalidK("k must be greater than 0".to_string()));
		}
		if k >= data.sample_cnt() {
			return Err(KMeansError::InsufficientData { k, n: data.sample_cnt() });
		}
		if max_iter == 0 {
			return Err(KMeansError::InvalidMaxIter("max_iter must be greater than 0".to_string()));
		}

		let mut state = KMeansState::new(data.sample_cnt(), data.sample_dims(), k);

		// Initialize clusters and notify subscriber
		init(data, &mut state, config)?;
		(config.init_done)(&state);
		let mut abort_strategy = config.abort_strategy.create_logic();

		for i in 1..=max_iter {
			let (sums, new_distsum) = Self::assign_and_accumulate(data, &state.centroids, &mut state.assignments, k);
			let new_centroids = Self::update_centroids(data, &state.assignments, &sums);
			let empty_cnt = sums.empty_clusters();
			state.centroid_frequency = sums.counts;
			// The previous generation is only kept for the convergence check
			let old_centroids = std::mem::replace(&mut state.centroids, new_centroids);
			state.iterations = i;

			debug!("Iteration {} - {} empty clusters", i, empty_cnt);
			// Notify subscriber about finished iteration
			(config.iteration_done)(&state, i, new_distsum);
			state.distsum = new_distsum;

			if !abort_strategy.next(&old_centroids, &state.centroids) {
				state.converged = true;
				break;
			}
		}
		Ok(state)
	}
}
