//! Error types for the persistent vector.

/// Represents an update at a position the vector does not have.
///
/// Returned by [`PersistentVector::try_set`](super::PersistentVector::try_set).
/// [`PersistentVector::set`](super::PersistentVector::set) treats the same
/// condition as a caller bug and panics with this error's message.
///
/// # Examples
///
/// ```rust
/// use lambars_vector::persistent::IndexOutOfBoundsError;
///
/// let error = IndexOutOfBoundsError {
///     index: -4,
///     length: 3,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "index -4 out of bounds for vector of length 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutOfBoundsError {
    /// The index as the caller passed it (negative indices count from the end).
    pub index: i128,
    /// The visible length of the vector at the time of the call.
    pub length: usize,
}

impl std::fmt::Display for IndexOutOfBoundsError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} out of bounds for vector of length {}",
            self.index, self.length
        )
    }
}

impl std::error::Error for IndexOutOfBoundsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds_error_display() {
        let error = IndexOutOfBoundsError {
            index: 0,
            length: 0,
        };
        assert_eq!(
            format!("{error}"),
            "index 0 out of bounds for vector of length 0"
        );
    }

    #[test]
    fn test_index_out_of_bounds_error_display_negative() {
        let error = IndexOutOfBoundsError {
            index: -11,
            length: 10,
        };
        assert_eq!(
            format!("{error}"),
            "index -11 out of bounds for vector of length 10"
        );
    }

    #[test]
    fn test_index_out_of_bounds_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(IndexOutOfBoundsError {
            index: 5,
            length: 2,
        });
        assert_eq!(
            error.to_string(),
            "index 5 out of bounds for vector of length 2"
        );
    }
}
