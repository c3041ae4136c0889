//! # kmeans-lloyd - API documentation
//!
//! kmeans-lloyd is a small rust library (and command line tool) for the calculation of k-means-clustering
//! using Lloyd's algorithm.
//!
//! ## Design target
//! Its main target is reproducibility: the same input always yields the same centroids. There is no
//! randomness involved anywhere in a run. Centroids are initialized from the first K input points,
//! ties between equally distant centroids are broken towards the lower index and empty clusters
//! are handled by a fixed rule.
//! The API-surface is rather plain. Samples are given using a raw vector (or a [`PointSet`]), instead of
//! any high-level arithmetics / matrix crate such as nalgebra or ndarray.
//!
//! ## Supported centroid initializations
//! - [`KMeans::init_first_k`] - the first K points of the input become the initial centroids
//! - [`KMeans::init_precomputed`] - caller-provided centroids
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use kmeans_lloyd::*;
//!
//! fn main() -> Result<(), KMeansError> {
//!     let samples = vec![0.0f64, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 10.0, 10.0, 10.0, 11.0, 11.0, 10.0, 11.0, 11.0];
//!     let (sample_cnt, sample_dims, k, max_iter) = (8, 2, 2, 400);
//!
//!     let kmean = KMeans::new(samples, sample_cnt, sample_dims)?;
//!     let result = kmean.kmeans_lloyd(k, max_iter, KMeans::init_first_k, &KMeansConfig::default())?;
//!
//!     println!("Centroids: {:?}", result.centroids);
//!     println!("Cluster-Assignments: {:?}", result.assignments);
//!     println!("Error: {}", result.distsum);
//!     Ok(())
//! }
//! ```
//!
//! ## Example (using the status event callbacks)
//! ```rust
//! use kmeans_lloyd::*;
//!
//! fn main() -> Result<(), KMeansError> {
//!     let points = PointSet::<f64>::from_reader("0\n1\n2\n100\n101\n102\n".as_bytes(), &LoaderConfig::default())?;
//!
//!	    let conf = KMeansConfig::<f64>::build()
//!		    .init_done(&|_| println!("Initialization completed."))
//!		    .iteration_done(&|s, nr, new_distsum|
//!			    println!("Iteration {} - Error: {:.2} -> {:.2} | Improvement: {:.2}",
//!				    nr, s.distsum, new_distsum, s.distsum - new_distsum))
//!		    .build();
//!
//!     let kmean = KMeans::from(points);
//!     let result = kmean.kmeans_lloyd(2, 400, KMeans::init_first_k, &conf)?;
//!
//!     print!("{}", output::format_centroids(&result, 4));
//!     Ok(())
//! }
//! ```
//!
//! ## Short API-Overview / Description
//! Entry-point of the library is the [`KMeans`] struct. This struct is generic over the underlying primitive
//! type, that should be used for the calculations. To use KMeans, an instance of this struct is created, taking
//! over the sample data into its ownership.
//!
//! Calling [`KMeans::kmeans_lloyd`] on the struct does not mutate it, so multiple runs can be
//! done on the same data. Internally, a new instance of [`KMeansState`] is used to store the state (and finally
//! the result) of a K-Means calculation.
//!
//! The initialization-method implementations are static methods within the [`KMeans`] struct, which are simply
//! passed in as reference.

#[macro_use] mod helpers;
mod memory;
mod api;
mod variants;
mod inits;
mod abort_strategy;
mod error;
mod pointset;
pub mod distance;
pub mod output;
pub mod cli;

pub use abort_strategy::{AbortStrategy, DEFAULT_EPSILON};
pub use api::{KMeansState, KMeansConfig, KMeansConfigBuilder, KMeans, InitDoneCallbackFn, IterationDoneCallbackFn};
pub use error::{KMeansError, ERROR_OCCURRED, ERROR_NUM_CLUSTERS, ERROR_MAX_ITER};
pub use memory::Primitive;
pub use pointset::{LoaderConfig, PointSet};
