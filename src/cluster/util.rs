#[inline]
pub(crate) fn squared_euclidean(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = f64::from(x) - f64::from(y);
            d * d
        })
        .sum()
}

#[inline]
pub(crate) fn squared_euclidean_f64(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Check that every row has the dimensionality of the first one.
pub(crate) fn check_dimensions(data: &[Vec<f32>]) -> crate::error::Result<()> {
    let Some(first) = data.first() else {
        return Ok(());
    };
    let expected = first.len();
    for row in &data[1..] {
        if row.len() != expected {
            return Err(crate::error::Error::DimensionMismatch {
                expected,
                found: row.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squared_euclidean() {
        assert_eq!(squared_euclidean(&[0.0, 0.0], &[3.0, 4.0]), 25.0);
        assert_eq!(squared_euclidean_f64(&[1.0, 1.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_check_dimensions() {
        assert!(check_dimensions(&[]).is_ok());
        assert!(check_dimensions(&[vec![0.0, 1.0], vec![2.0, 3.0]]).is_ok());

        let err = check_dimensions(&[vec![0.0, 1.0], vec![2.0]]).unwrap_err();
        assert_eq!(
            err,
            crate::error::Error::DimensionMismatch {
                expected: 2,
                found: 1
            }
        );
    }
}
