//! Density clustering primitives.
//!
//! `densa` is a small, backend-agnostic implementation of DBSCAN over any point type
//! that can measure its distance to another point of the same type.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`Distance`], the single capability required from a point type
//! - [`Dbscan`], the driver (with [`DbscanParams`] for configuration)
//! - [`Cluster`] and [`ClusterSet`], the results
//! - [`RegionQuery`] and [`LinearScan`], the neighbor-query seam

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    Cluster, ClusterSet, Clustering, Dbscan, DbscanExt, DbscanParams, Distance, LinearScan,
    RegionQuery,
};
pub use error::{Error, Result};
