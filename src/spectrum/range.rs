//! Inclusive numeric interval.
//!
//! Example: Range::new(12, 10)  =>  [10, 12]
//!
//! Bounds are normalized on construction, so a Range never needs to be
//! re-checked by its consumers.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Copy> Range<T> {
    pub fn new(a: T, b: T) -> Self {
        if a < b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn lower_bound(&self) -> T {
        self.min
    }

    pub fn upper_bound(&self) -> T {
        self.max
    }

    /// True if `other` lies inside this range, bounds included.
    pub fn contains(&self, other: &Range<T>) -> bool {
        other.min >= self.min && other.max <= self.max
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_ordered() {
        let ordered = Range::new(10u32, 12);
        assert_eq!(ordered.lower_bound(), 10);
        assert_eq!(ordered.upper_bound(), 12);

        let unordered = Range::new(12u32, 10);
        assert_eq!(unordered.lower_bound(), 10);
        assert_eq!(unordered.upper_bound(), 12);

        assert_eq!(ordered, unordered);
        assert_eq!(Range::new(7u64, 7), Range::new(7, 7));
    }

    #[test]
    fn argument_order_does_not_matter() {
        let values = [0u64, 1, 7, 4_000_000, u64::MAX - 1, u64::MAX];
        for a in values {
            for b in values {
                let r = Range::new(a, b);
                assert_eq!(r, Range::new(b, a));
                assert_eq!(r.lower_bound(), a.min(b));
                assert_eq!(r.upper_bound(), a.max(b));
            }
        }
    }

    #[test]
    fn contains_is_inclusive() {
        let r = Range::new(10u32, 13);

        assert!(r.contains(&r));
        assert!(r.contains(&Range::new(11, 12)));
        assert!(r.contains(&Range::new(10, 12)));
        assert!(r.contains(&Range::new(11, 13)));
        assert!(r.contains(&Range::new(10, 13)));

        assert!(!r.contains(&Range::new(11, 14)));
        assert!(!r.contains(&Range::new(9, 12)));
        // wider range that covers r
        assert!(!r.contains(&Range::new(9, 14)));
        assert!(!r.contains(&Range::new(1, 2)));
        assert!(!r.contains(&Range::new(14, 15)));
    }

    #[test]
    fn display() {
        assert_eq!(Range::new(1100u64, 900).to_string(), "[900, 1100]");
    }
}
