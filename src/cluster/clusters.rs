//! Clustering results.

use std::iter::Copied;
use std::slice;

/// One density-connected group of points.
///
/// Members are kept in the order the expansion reached them, each paired with its
/// index in the input. A point appears at most once.
#[derive(Debug)]
pub struct Cluster<'a, T> {
    indices: Vec<usize>,
    points: Vec<&'a T>,
}

impl<'a, T> Cluster<'a, T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn from_indices(indices: &[usize], lookup: impl Fn(usize) -> &'a T) -> Self {
        let mut cluster = Self::with_capacity(indices.len());
        for &idx in indices {
            cluster.add_point(idx, lookup(idx));
        }
        cluster
    }

    pub(crate) fn add_point(&mut self, idx: usize, point: &'a T) {
        self.indices.push(idx);
        self.points.push(point);
    }

    /// Number of member points.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the cluster has no members. Clusters returned by [`Dbscan`](super::Dbscan)
    /// always have at least one.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over the member points.
    pub fn iter(&self) -> Copied<slice::Iter<'_, &'a T>> {
        self.points.iter().copied()
    }

    /// Member points, in expansion order.
    pub fn points(&self) -> &[&'a T] {
        &self.points
    }

    /// Input indices of the members, parallel to [`points`](Self::points).
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Whether the point at input index `idx` belongs to this cluster.
    pub fn contains_index(&self, idx: usize) -> bool {
        self.indices.contains(&idx)
    }
}

impl<T> Clone for Cluster<'_, T> {
    fn clone(&self) -> Self {
        Self {
            indices: self.indices.clone(),
            points: self.points.clone(),
        }
    }
}

impl<'c, 'a, T> IntoIterator for &'c Cluster<'a, T> {
    type Item = &'a T;
    type IntoIter = Copied<slice::Iter<'c, &'a T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// All clusters found in one run, plus the points left over as noise.
#[derive(Debug)]
pub struct ClusterSet<'a, T> {
    clusters: Vec<Cluster<'a, T>>,
    noise: Vec<usize>,
    n_points: usize,
}

impl<'a, T> ClusterSet<'a, T> {
    pub(crate) fn new(clusters: Vec<Cluster<'a, T>>, noise: Vec<usize>, n_points: usize) -> Self {
        Self {
            clusters,
            noise,
            n_points,
        }
    }

    /// The clusters, in the order the driver discovered them.
    pub fn clusters(&self) -> &[Cluster<'a, T>] {
        &self.clusters
    }

    /// Input indices of the noise points, ascending.
    pub fn noise(&self) -> &[usize] {
        &self.noise
    }

    /// Number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether no cluster was found (every point is noise).
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Number of input points, clustered or not.
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// One entry per input point: the position of its cluster in
    /// [`clusters`](Self::clusters), or `None` for noise.
    pub fn labels(&self) -> Vec<Option<usize>> {
        let mut labels = vec![None; self.n_points];
        for (label, cluster) in self.clusters.iter().enumerate() {
            for &idx in cluster.indices() {
                labels[idx] = Some(label);
            }
        }
        labels
    }

    /// Iterate over the clusters.
    pub fn iter(&self) -> slice::Iter<'_, Cluster<'a, T>> {
        self.clusters.iter()
    }

    /// Drop the noise list and keep the clusters.
    pub fn into_clusters(self) -> Vec<Cluster<'a, T>> {
        self.clusters
    }
}

impl<T> Clone for ClusterSet<'_, T> {
    fn clone(&self) -> Self {
        Self {
            clusters: self.clusters.clone(),
            noise: self.noise.clone(),
            n_points: self.n_points,
        }
    }
}

impl<'c, 'a, T> IntoIterator for &'c ClusterSet<'a, T> {
    type Item = &'c Cluster<'a, T>;
    type IntoIter = slice::Iter<'c, Cluster<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_keeps_expansion_order() {
        let points = ["a", "b", "c", "d"];
        let cluster = Cluster::from_indices(&[2, 0, 3], |i| &points[i]);

        assert_eq!(cluster.len(), 3);
        assert_eq!(cluster.indices(), &[2, 0, 3]);
        assert_eq!(cluster.iter().copied().collect::<Vec<_>>(), vec!["c", "a", "d"]);
        assert!(cluster.contains_index(0));
        assert!(!cluster.contains_index(1));
    }

    #[test]
    fn test_cluster_iterates_by_reference() {
        let points = [1, 2, 3];
        let cluster = Cluster::from_indices(&[0, 2], |i| &points[i]);
        let sum: i32 = (&cluster).into_iter().sum();
        assert_eq!(sum, 4);
    }

    #[test]
    fn test_cluster_set_labels() {
        let points = [10, 20, 30, 40, 50];
        let a = Cluster::from_indices(&[0, 1], |i| &points[i]);
        let b = Cluster::from_indices(&[4], |i| &points[i]);
        let set = ClusterSet::new(vec![a, b], vec![2, 3], points.len());

        assert_eq!(set.len(), 2);
        assert_eq!(set.noise(), &[2, 3]);
        assert_eq!(set.labels(), vec![Some(0), Some(0), None, None, Some(1)]);
        assert_eq!(set.iter().map(Cluster::len).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(set.into_clusters().len(), 2);
    }

    #[test]
    fn test_empty_cluster_set() {
        let set: ClusterSet<'_, u8> = ClusterSet::new(Vec::new(), vec![0], 1);
        assert!(set.is_empty());
        assert_eq!(set.labels(), vec![None]);
    }
}
