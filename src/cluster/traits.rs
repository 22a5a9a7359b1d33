use super::util;
use crate::error::Result;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering {
    /// Fit the model (if needed) and return one cluster label per input point.
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>>;

    /// The configured number of clusters (if applicable).
    ///
    /// For algorithms that discover the number of clusters dynamically (e.g. DBSCAN),
    /// this returns 0.
    fn n_clusters(&self) -> usize;
}

/// The one capability a point type must provide to be clustered.
///
/// Implementations must be symmetric (`a.distance(b) == b.distance(a)`), non-negative,
/// and zero for a point and itself. The triangle inequality is not required, but the
/// "radius" in a region query only means what you expect when the distance behaves
/// like a metric.
pub trait Distance {
    /// Distance from `self` to `other`.
    fn distance(&self, other: &Self) -> f64;
}

impl<T: Distance + ?Sized> Distance for &T {
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        (**self).distance(*other)
    }
}

// Euclidean distance for dense coordinates. Rows of different lengths are infinitely
// far apart, so they are never neighbors.

impl Distance for [f32] {
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        if self.len() != other.len() {
            return f64::INFINITY;
        }
        util::squared_euclidean(self, other).sqrt()
    }
}

impl Distance for [f64] {
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        if self.len() != other.len() {
            return f64::INFINITY;
        }
        util::squared_euclidean_f64(self, other).sqrt()
    }
}

impl Distance for Vec<f32> {
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        self.as_slice().distance(other.as_slice())
    }
}

impl Distance for Vec<f64> {
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        self.as_slice().distance(other.as_slice())
    }
}

impl<const N: usize> Distance for [f32; N] {
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        self.as_slice().distance(other.as_slice())
    }
}

impl<const N: usize> Distance for [f64; N] {
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        self.as_slice().distance(other.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_impls_agree() {
        let a = [0.0f64, 0.0];
        let b = [3.0f64, 4.0];
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(vec![0.0f64, 0.0].distance(&vec![3.0, 4.0]), 5.0);
        assert_eq!([0.0f32, 0.0].distance(&[3.0, 4.0]), 5.0);
        assert_eq!(vec![0.0f32, 0.0].distance(&vec![3.0, 4.0]), 5.0);
    }

    #[test]
    fn test_distance_is_symmetric_and_zero_on_self() {
        let a = [1.5f64, -2.0, 7.0];
        let b = [-0.5f64, 4.0, 1.0];
        assert_eq!(a.distance(&b), b.distance(&a));
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_mismatched_lengths_are_infinitely_far() {
        let a = vec![0.0f32, 0.0];
        let b = vec![0.0f32];
        assert_eq!(a.distance(&b), f64::INFINITY);
        assert_eq!(b.distance(&a), f64::INFINITY);
        assert_eq!([1.0f64].as_slice().distance([1.0, 0.0].as_slice()), f64::INFINITY);
    }

    #[test]
    fn test_reference_impl_forwards() {
        let a = [1.0f64];
        let b = [4.0f64];
        assert_eq!(<&[f64; 1] as Distance>::distance(&&a, &&b), 3.0);
    }

    #[test]
    fn test_custom_point_type() {
        struct Word(&'static str);

        impl Distance for Word {
            fn distance(&self, other: &Self) -> f64 {
                (self.0.len() as f64 - other.0.len() as f64).abs()
            }
        }

        assert_eq!(Word("abc").distance(&Word("a")), 2.0);
    }
}
