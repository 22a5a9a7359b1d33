//! Density clustering for any point type with a distance.
//!
//! ## DBSCAN
//!
//! Density-based clustering that can discover non-convex clusters and identify
//! outliers (noise points). DBSCAN does not require specifying the number of
//! clusters in advance. Two parameters drive it:
//!
//! - `eps`: the neighborhood radius
//! - `min_pts`: how many points (the point itself included) a neighborhood must hold
//!   for its center to be a core point
//!
//! **Assumptions**:
//! - Clusters have similar density
//! - The distance behaves like a metric (symmetric, zero on identical points)
//!
//! ## Points
//!
//! The algorithm never looks inside a point. All it needs is [`Distance`], which is
//! implemented for dense `f32`/`f64` vectors and arrays (Euclidean) and can be
//! implemented for any other type:
//!
//! ```rust
//! use densa::{Dbscan, Distance};
//!
//! struct Minute(u32);
//!
//! impl Distance for Minute {
//!     fn distance(&self, other: &Self) -> f64 {
//!         f64::from(self.0.abs_diff(other.0))
//!     }
//! }
//!
//! let events = [Minute(0), Minute(2), Minute(3), Minute(60), Minute(61), Minute(300)];
//! let set = Dbscan::new(5.0, 2).unwrap().cluster_set(&events);
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.noise(), &[5]);
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use densa::cluster::{Clustering, Dbscan, DbscanExt};
//!
//! let data: Vec<Vec<f32>> = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//!     vec![50.0, 50.0],
//! ];
//!
//! let dbscan = Dbscan::new(0.5, 2).unwrap();
//!
//! // Clusters as groups of points
//! let clusters = dbscan.cluster(&data);
//! assert_eq!(clusters.len(), 2);
//!
//! // One label per point, noise as `None`
//! let labels = dbscan.fit_predict_with_noise(&data).unwrap();
//! assert_eq!(labels, vec![Some(0), Some(0), Some(1), Some(1), None]);
//!
//! // One label per point, noise in a trailing cluster
//! let labels = dbscan.fit_predict(&data).unwrap();
//! assert_eq!(labels, vec![0, 0, 1, 1, 2]);
//! ```

mod clusters;
mod dbscan;
mod region;
mod state;
mod traits;
mod util;

pub use clusters::{Cluster, ClusterSet};
pub use dbscan::{Dbscan, DbscanExt, DbscanParams};
pub use region::{LinearScan, RegionQuery};
pub use traits::{Clustering, Distance};
