//! Region (epsilon-neighborhood) queries.
//!
//! A region query answers "which points lie within `eps` of point `p`?". It is the
//! dominant cost of DBSCAN: the driver issues one query per point, so a linear scan
//! gives O(n²) distance evaluations overall.
//!
//! [`RegionQuery`] is the seam where a spatial index can be substituted. This crate
//! only ships [`LinearScan`].

use super::traits::Distance;

/// Neighborhood lookup over a fixed, index-addressed set of points.
///
/// Contract for implementors:
/// - the result of `region_query(p, eps)` contains every index `q` with
///   `distance(p, q) <= eps`, including `p` itself;
/// - every returned index is less than [`len`](Self::len);
/// - no index appears twice;
/// - the result is a pure function of the inputs (same query, same answer, same order).
pub trait RegionQuery {
    /// Number of points in the candidate set.
    fn len(&self) -> usize;

    /// Whether the candidate set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Indices of all points within `eps` of `point`, in candidate order.
    ///
    /// The driver indexes its per-point state with these, so an index outside
    /// `0..len()` panics.
    fn region_query(&self, point: usize, eps: f64) -> Vec<usize>;
}

/// Brute-force region queries: compare the query point against every candidate.
#[derive(Debug, Clone)]
pub struct LinearScan<'a, T> {
    points: Vec<&'a T>,
}

impl<'a, T: Distance> LinearScan<'a, T> {
    /// Scan over a slice of points.
    pub fn new(points: &'a [T]) -> Self {
        Self {
            points: points.iter().collect(),
        }
    }

    /// Scan over points gathered from elsewhere (e.g. filtered out of a larger collection).
    pub fn from_refs(points: Vec<&'a T>) -> Self {
        Self { points }
    }

    /// The point at `idx`.
    #[inline]
    pub fn point(&self, idx: usize) -> &'a T {
        self.points[idx]
    }
}

impl<T: Distance> RegionQuery for LinearScan<'_, T> {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn region_query(&self, point: usize, eps: f64) -> Vec<usize> {
        let p = self.points[point];
        self.points
            .iter()
            .enumerate()
            .filter(|(_, q)| p.distance(q) <= eps)
            .map(|(idx, _)| idx)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_includes_self() {
        let points = vec![[0.0f64, 0.0], [5.0, 5.0]];
        let scan = LinearScan::new(&points);
        assert_eq!(scan.region_query(0, 0.0), vec![0]);
        assert_eq!(scan.region_query(1, 0.0), vec![1]);
    }

    #[test]
    fn test_region_radius_is_inclusive() {
        let points = vec![[0.0f64], [1.0], [1.5], [3.0]];
        let scan = LinearScan::new(&points);
        assert_eq!(scan.region_query(0, 1.0), vec![0, 1]);
        assert_eq!(scan.region_query(1, 0.5), vec![1, 2]);
        assert_eq!(scan.region_query(3, 10.0), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_region_keeps_duplicates_apart() {
        // Equal values at different positions are different points.
        let points = vec![[2.0f64], [2.0], [9.0]];
        let scan = LinearScan::new(&points);
        assert_eq!(scan.region_query(0, 0.0), vec![0, 1]);
    }

    #[test]
    fn test_from_refs() {
        let a = [0.0f64];
        let b = [0.5f64];
        let scan = LinearScan::from_refs(vec![&a, &b]);
        assert_eq!(scan.len(), 2);
        assert!(!scan.is_empty());
        assert_eq!(scan.point(1), &b);
        assert_eq!(scan.region_query(1, 0.5), vec![0, 1]);
    }
}
