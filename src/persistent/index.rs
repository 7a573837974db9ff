//! Index resolution for [`PersistentVector`](super::PersistentVector).
//!
//! Reads and updates accept any primitive integer as a position. Signed
//! integers may be negative, in which case they count back from the end of
//! the visible elements: `-1` is the last element, `-len` the first.

/// A type usable as a position in a [`PersistentVector`](super::PersistentVector).
///
/// Implemented for every primitive integer type. Unsigned indices address
/// positions from the front. Signed indices additionally accept negative
/// values, which address positions from the back.
///
/// # Examples
///
/// ```rust
/// use lambars_vector::persistent::VectorIndex;
///
/// assert_eq!(2_usize.resolve(5), Some(2));
/// assert_eq!((-1_i32).resolve(5), Some(4));
/// assert_eq!((-5_i64).resolve(5), Some(0));
/// assert_eq!((-6_isize).resolve(5), None);
/// assert_eq!(5_u32.resolve(5), None);
/// ```
pub trait VectorIndex: Copy {
    /// Resolves this index against a sequence of `length` visible elements.
    ///
    /// Returns the zero-based position from the front, or `None` if the
    /// index does not address an element.
    fn resolve(self, length: usize) -> Option<usize>;

    /// Returns the index as the caller wrote it, for error reporting.
    fn to_i128(self) -> i128;
}

macro_rules! impl_unsigned_vector_index {
    ($($index_type:ty),* $(,)?) => {
        $(
            impl VectorIndex for $index_type {
                #[inline]
                fn resolve(self, length: usize) -> Option<usize> {
                    usize::try_from(self)
                        .ok()
                        .filter(|&position| position < length)
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    i128::try_from(self).unwrap_or(i128::MAX)
                }
            }
        )*
    };
}

macro_rules! impl_signed_vector_index {
    ($($index_type:ty),* $(,)?) => {
        $(
            impl VectorIndex for $index_type {
                #[inline]
                fn resolve(self, length: usize) -> Option<usize> {
                    let magnitude = usize::try_from(self.unsigned_abs()).ok()?;
                    if self < 0 {
                        length.checked_sub(magnitude)
                    } else if magnitude < length {
                        Some(magnitude)
                    } else {
                        None
                    }
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    i128::try_from(self).unwrap_or(i128::MAX)
                }
            }
        )*
    };
}

impl_unsigned_vector_index!(u8, u16, u32, u64, usize);
impl_signed_vector_index!(i8, i16, i32, i64, isize);
