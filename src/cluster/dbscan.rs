//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN is a density-based clustering algorithm that groups points based on
//! neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors.
//! - **MinPts**: Minimum size of a point's ε-neighborhood, the point itself included,
//!   for it to be "core".
//! - **Core point**: Has at least MinPts points within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. For each unvisited point P:
//!    - Find neighbors within ε
//!    - If |neighbors| < MinPts, mark as noise (may change later)
//!    - Else P is core: start new cluster, expand from neighbors
//!
//! 2. Expansion: walk a worklist seeded with the core point's neighbors.
//!    - Every point reached joins the cluster unless another cluster already owns it
//!    - Points that turn out to be core append their own neighbors to the worklist
//!
//! A point first marked noise by step 1 can still be claimed as a border point by a
//! later expansion, so noise is only final once every point has been visited.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) distance evaluations with [`LinearScan`]; a spatial index behind
//!   [`RegionQuery`] brings this down for low-dimensional data.
//! - **Space**: O(n) for point states and the worklist.
//!
//! ## Limitations
//!
//! - Struggles with varying densities
//! - ε parameter is sensitive and dataset-dependent
//! - A border point within ε of two clusters goes to whichever reaches it first
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use std::collections::HashSet;

use log::{debug, log_enabled, trace, Level};

use super::clusters::{Cluster, ClusterSet};
use super::region::{LinearScan, RegionQuery};
use super::state::{PointState, StateTracker};
use super::traits::{Clustering, Distance};
use super::util;
use crate::error::{Error, Result};

/// DBSCAN parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DbscanParams {
    /// Neighborhood radius. Must be non-negative.
    pub eps: f64,
    /// Minimum neighborhood size (the point itself included) for a core point.
    /// Must be at least 1.
    pub min_pts: usize,
}

impl Default for DbscanParams {
    fn default() -> Self {
        Self {
            eps: 0.5,
            min_pts: 5,
        }
    }
}

impl DbscanParams {
    /// Set epsilon (neighborhood radius).
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Check the parameters without building a clusterer.
    pub fn validate(&self) -> Result<()> {
        if self.eps.is_nan() {
            return Err(Error::InvalidParameter {
                name: "eps",
                message: "must be a number",
            });
        }

        if self.eps < 0.0 {
            return Err(Error::InvalidParameter {
                name: "eps",
                message: "must be non-negative",
            });
        }

        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }

        Ok(())
    }
}

/// DBSCAN clustering algorithm.
///
/// Parameters are validated on construction; a `Dbscan` value can then cluster any
/// number of point collections. Each call owns its own state, so one clusterer can be
/// shared freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dbscan {
    params: DbscanParams,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `eps` - Maximum distance between two points to be neighbors.
    /// * `min_pts` - Minimum number of points, the point itself included, to form a
    ///   dense region.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `eps` is negative or NaN, or `min_pts` is 0.
    ///
    /// # Typical Values
    ///
    /// - `eps`: Often determined by k-distance plot (k = min_pts - 1).
    /// - `min_pts`: 2 * dimension is a common heuristic.
    pub fn new(eps: f64, min_pts: usize) -> Result<Self> {
        Self::from_params(DbscanParams { eps, min_pts })
    }

    /// Create a clusterer from a parameter set.
    pub fn from_params(params: DbscanParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Neighborhood radius.
    pub fn eps(&self) -> f64 {
        self.params.eps
    }

    /// Minimum neighborhood size for a core point.
    pub fn min_pts(&self) -> usize {
        self.params.min_pts
    }

    /// The parameters this clusterer was built with.
    pub fn params(&self) -> DbscanParams {
        self.params
    }

    /// Cluster `points`, returning the clusters in discovery order.
    ///
    /// Points that end up in no cluster are noise and are simply absent from the
    /// result; use [`cluster_set`](Self::cluster_set) to get them listed.
    ///
    /// ```rust
    /// use densa::Dbscan;
    ///
    /// let points = vec![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [10.0, 10.0]];
    /// let clusters = Dbscan::new(1.5, 2).unwrap().cluster(&points);
    ///
    /// assert_eq!(clusters.len(), 1);
    /// assert_eq!(clusters[0].indices(), &[0, 1, 2]);
    /// ```
    pub fn cluster<'a, T: Distance>(&self, points: &'a [T]) -> Vec<Cluster<'a, T>> {
        self.cluster_set(points).into_clusters()
    }

    /// Cluster `points`, keeping the noise points as a separate list.
    pub fn cluster_set<'a, T: Distance>(&self, points: &'a [T]) -> ClusterSet<'a, T> {
        self.cluster_scan(&LinearScan::new(points))
    }

    /// Cluster a collection that may contain absent elements.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] naming the first `None` in `points`; distance to an
    /// absent point is undefined, so nothing is clustered.
    pub fn try_cluster<'a, T: Distance>(
        &self,
        points: &'a [Option<T>],
    ) -> Result<Vec<Cluster<'a, T>>> {
        let present = points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                point.as_ref().ok_or(Error::InvalidInput {
                    index,
                    message: "point is absent",
                })
            })
            .collect::<Result<Vec<&'a T>>>()?;

        Ok(self
            .cluster_scan(&LinearScan::from_refs(present))
            .into_clusters())
    }

    /// Cluster the points behind a caller-supplied region query.
    ///
    /// Returns each cluster as the input indices of its members, in expansion order.
    pub fn cluster_indices<Q: RegionQuery + ?Sized>(&self, query: &Q) -> Vec<Vec<usize>> {
        self.run(query).0
    }

    fn cluster_scan<'a, T: Distance>(&self, scan: &LinearScan<'a, T>) -> ClusterSet<'a, T> {
        let (groups, states) = self.run(scan);
        let clusters = groups
            .iter()
            .map(|members| Cluster::from_indices(members, |idx| scan.point(idx)))
            .collect();
        ClusterSet::new(clusters, states.noise(), scan.len())
    }

    /// Visit every point once, seeding a new cluster at each unvisited core point.
    fn run<Q: RegionQuery + ?Sized>(&self, query: &Q) -> (Vec<Vec<usize>>, StateTracker) {
        let n = query.len();
        debug!(
            "dbscan: clustering {} points (eps={}, min_pts={})",
            n, self.params.eps, self.params.min_pts
        );

        let mut states = StateTracker::new(n);
        let mut clusters: Vec<Vec<usize>> = Vec::new();

        for point in 0..n {
            if states.get(point) != PointState::Unvisited {
                continue;
            }
            states.set(point, PointState::Noise);

            let neighbors = query.region_query(point, self.params.eps);

            // The neighborhood includes the point itself.
            if neighbors.len() < self.params.min_pts {
                continue;
            }

            let members = self.expand_cluster(query, point, neighbors, &mut states);
            trace!(
                "dbscan: cluster {} seeded at point {} with {} members",
                clusters.len(),
                point,
                members.len()
            );
            clusters.push(members);
        }

        if log_enabled!(Level::Debug) {
            debug!(
                "dbscan: found {} clusters, {} noise points",
                clusters.len(),
                states.noise().len()
            );
        }

        (clusters, states)
    }

    /// Grow one cluster from the core point `point` whose neighborhood is `neighbors`.
    fn expand_cluster<Q: RegionQuery + ?Sized>(
        &self,
        query: &Q,
        point: usize,
        neighbors: Vec<usize>,
        states: &mut StateTracker,
    ) -> Vec<usize> {
        let mut members = vec![point];
        states.set(point, PointState::Clustered);

        let mut enqueued: HashSet<usize> = neighbors.iter().copied().collect();
        enqueued.insert(point);

        // Addressed by position: the worklist grows while it is walked.
        let mut worklist = neighbors;
        let mut next = 0;
        while next < worklist.len() {
            let q = worklist[next];
            next += 1;

            if states.get(q) == PointState::Unvisited {
                states.set(q, PointState::Noise);
                let q_neighbors = query.region_query(q, self.params.eps);
                if q_neighbors.len() >= self.params.min_pts {
                    for r in q_neighbors {
                        if enqueued.insert(r) {
                            worklist.push(r);
                        }
                    }
                }
            }

            // Unvisited-now-noise, or noise from an earlier visit: either way a border
            // (or core) point of this cluster. Clustered points belong to whoever got
            // there first.
            if states.get(q) != PointState::Clustered {
                members.push(q);
                states.set(q, PointState::Clustered);
            }
        }

        members
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self {
            params: DbscanParams::default(),
        }
    }
}

impl Clustering for Dbscan {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        util::check_dimensions(data)?;
        let set = self.cluster_set(data);

        // Noise points are placed in a final "noise cluster" so callers can treat
        // labels as a partition without `Option`.
        let noise_cluster = set.len();
        Ok(set
            .labels()
            .into_iter()
            .map(|label| label.unwrap_or(noise_cluster))
            .collect())
    }

    /// DBSCAN discovers clusters dynamically, so this returns 0.
    ///
    /// To get the actual number of clusters, examine the labels after `fit_predict`.
    fn n_clusters(&self) -> usize {
        0 // Unknown until fit
    }
}

/// Extended DBSCAN interface with noise detection.
pub trait DbscanExt {
    /// Fit and predict, returning labels where noise is marked as `None`.
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>>;
}

impl DbscanExt for Dbscan {
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>> {
        util::check_dimensions(data)?;
        Ok(self.cluster_set(data).labels())
    }
}
