use crate::memory::*;

/// Default convergence threshold of [`AbortStrategy::CentroidShift`].
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Enum with possible abort strategies.
/// These strategies specify when a running iteration (with the k-means calculation) is aborted,
/// besides reaching the iteration budget.
pub enum AbortStrategy<T: Primitive> {
	/// This strategy aborts the calculation directly after an iteration, in which no coordinate of any centroid
	/// moved by `epsilon` or more (`|new - old| < epsilon` for all coordinates).
	/// ## Fields:
	/// - **epsilon**: Exclusive upper bound for a coordinate change, that still counts as "converged"
	CentroidShift { epsilon: T },
}
impl<T: Primitive> Default for AbortStrategy<T> {
	fn default() -> Self {
		AbortStrategy::CentroidShift { epsilon: const_as(DEFAULT_EPSILON) }
	}
}
impl<T: Primitive> AbortStrategy<T> {
	pub(crate) fn create_logic(&self) -> Box<dyn AbortStrategyLogic<T>> {
		match *self {
			AbortStrategy::CentroidShift{epsilon} => Box::new(CentroidShiftLogic { epsilon })
		}
	}
}

pub(crate) trait AbortStrategyLogic<T: Primitive> {
	/// Function that has to be called once an iteration of the calculation ended, and a new generation of
	/// centroids was calculated.
	/// ## Arguments
	/// - **old_centroids**: Centroids the iteration started with [row-major]
	/// - **new_centroids**: Centroids calculated by the iteration [row-major]
	/// ## Returns
	/// - **true** if the calculation should continue
	/// - **false** if the calculation should abort
	fn next(&mut self, old_centroids: &[T], new_centroids: &[T]) -> bool;
}


pub(crate) struct CentroidShiftLogic<T: Primitive> {
	epsilon: T
}
impl<T: Primitive> AbortStrategyLogic<T> for CentroidShiftLogic<T> {
	fn next(&mut self, old_centroids: &[T], new_centroids: &[T]) -> bool {
		debug_assert_eq!(old_centroids.len(), new_centroids.len());
		// Continue as soon as one coordinate moved too far (NaN deltas count as "moved")
		!old_centroids.iter().cloned().zip(new_centroids.iter().cloned())
			.all(|(o, n)| (n - o).abs() < self.epsilon)
	}
}
