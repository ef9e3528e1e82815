use crate::spectrum::Range;
use num_traits::PrimInt;
use serde::Serialize;

/// A slice of EM spectrum: a center frequency and the sample rate that
/// captures it. The occupied frequency range is derived, never configured.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpectrumSlice<T> {
    center_frequency: T,
    sample_rate: T,
    frequency_range: Range<T>,
}

impl<T: PrimInt> SpectrumSlice<T> {
    /// Returns `None` when `center ± rate / 2` does not fit in `T`.
    pub fn new(center_frequency: T, sample_rate: T) -> Option<Self> {
        let half = sample_rate / (T::one() + T::one());
        let low = center_frequency.checked_sub(&half)?;
        let high = center_frequency.checked_add(&half)?;

        Some(Self {
            center_frequency,
            sample_rate,
            frequency_range: Range::new(low, high),
        })
    }
}

impl<T: Copy> SpectrumSlice<T> {
    pub fn center_frequency(&self) -> T {
        self.center_frequency
    }

    pub fn sample_rate(&self) -> T {
        self.sample_rate
    }

    /// `[center - rate / 2, center + rate / 2]`
    pub fn frequency_range(&self) -> Range<T> {
        self.frequency_range
    }
}

// The range follows from (center, rate), so it takes no part in equality.
impl<T: PartialEq> PartialEq for SpectrumSlice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.center_frequency == other.center_frequency && self.sample_rate == other.sample_rate
    }
}

impl<T: Eq> Eq for SpectrumSlice<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_range() {
        let slice = SpectrumSlice::new(1000u32, 200).unwrap();
        assert_eq!(slice.center_frequency(), 1000);
        assert_eq!(slice.sample_rate(), 200);
        assert_eq!(slice.frequency_range().lower_bound(), 900);
        assert_eq!(slice.frequency_range().upper_bound(), 1100);
    }

    #[test]
    fn range_follows_center_and_rate() {
        for (center, rate) in [(0u64, 0), (1, 2), (4_000_000, 1_000_000), (u64::MAX / 2, u64::MAX - 1)] {
            let slice = SpectrumSlice::new(center, rate).unwrap();
            assert_eq!(
                slice.frequency_range(),
                Range::new(center - rate / 2, center + rate / 2)
            );
        }
    }

    #[test]
    fn odd_rate_rounds_half_down() {
        let slice = SpectrumSlice::new(1000u64, 201).unwrap();
        assert_eq!(slice.frequency_range(), Range::new(900, 1100));
    }

    #[test]
    fn unrepresentable_bounds() {
        assert!(SpectrumSlice::new(10u32, 200).is_none());
        assert!(SpectrumSlice::new(u32::MAX - 10, 200).is_none());
        assert!(SpectrumSlice::new(100u32, 200).is_some());
    }

    #[test]
    fn equality_is_center_and_rate() {
        let a = SpectrumSlice::new(4_000_000u64, 1_000_000).unwrap();
        let b = SpectrumSlice::new(4_000_000u64, 1_000_000).unwrap();
        let c = SpectrumSlice::new(4_000_000u64, 500_000).unwrap();
        let d = SpectrumSlice::new(4_000_001u64, 1_000_000).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }
}
