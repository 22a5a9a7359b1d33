use thiserror::Error;

/// Errors returned by the clustering entry points in this crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter value, rejected when the clusterer is constructed.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// The point collection contains an element the algorithm cannot use.
    #[error("invalid input at index {index}: {message}")]
    InvalidInput {
        /// Position of the offending element in the input.
        index: usize,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_parameter() {
        let err = Error::InvalidParameter {
            name: "eps",
            message: "must be non-negative",
        };
        assert_eq!(err.to_string(), "invalid parameter eps: must be non-negative");
    }

    #[test]
    fn test_display_names_the_index() {
        let err = Error::InvalidInput {
            index: 3,
            message: "point is absent",
        };
        assert_eq!(err.to_string(), "invalid input at index 3: point is absent");
    }
}
