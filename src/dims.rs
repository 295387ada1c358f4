use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Grid coordinate, `Dims(column, row)`.
///
/// Ordering is lexicographic (column first), which is also the order in which
/// best-first search breaks ties between equally scored cells.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
    pub const ONE: Dims = Dims(1, 1);

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// `|Δcolumn| + |Δrow|`
    pub fn manhattan(self, other: Dims) -> usize {
        (self - other).abs_sum() as usize
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        assert_eq!(Dims(0, 0).manhattan(Dims(3, 4)), 7);
        assert_eq!(Dims(3, 4).manhattan(Dims(0, 0)), 7);
        assert_eq!(Dims(2, 2).manhattan(Dims(2, 2)), 0);
    }

    #[test]
    fn ordering_is_column_then_row() {
        assert!(Dims(0, 5) < Dims(1, 0));
        assert!(Dims(1, 0) < Dims(1, 1));
    }

    #[test]
    fn sign_checks() {
        assert!(Dims(1, 1).all_positive());
        assert!(!Dims(0, 3).all_positive());
        assert!(Dims(0, 0).all_non_negative());
        assert!(!Dims(2, -1).all_non_negative());
    }
}
