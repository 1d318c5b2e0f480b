//! Four-phase timeline split.

use std::fmt;

/// Number of delivery phases in every timeline.
pub const PHASE_COUNT: usize = 4;

/// Inclusive, 1-indexed range of weeks for one phase.
///
/// `start` may exceed `end` when the phase is empty (timelines shorter than
/// four weeks), and the range renders exactly as computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub start: u32,
    pub end: u32,
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weeks {}-{}", self.start, self.end)
    }
}

/// Week allocation across the four phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhasePlan {
    sizes: [u32; PHASE_COUNT],
}

impl PhasePlan {
    /// Split `weeks` into three equal phases of `weeks / 4` and a last phase
    /// that absorbs the remainder.
    pub fn split(weeks: u32) -> Self {
        let base = weeks / 4;
        Self { sizes: [base, base, base, weeks - 3 * base] }
    }

    pub fn sizes(&self) -> [u32; PHASE_COUNT] {
        self.sizes
    }

    pub fn total(&self) -> u32 {
        self.sizes.iter().sum()
    }

    /// Cumulative week ranges, one per phase.
    pub fn ranges(&self) -> [WeekRange; PHASE_COUNT] {
        let mut ranges = [WeekRange { start: 0, end: 0 }; PHASE_COUNT];
        let mut elapsed = 0;
        for (range, size) in ranges.iter_mut().zip(self.sizes) {
            *range = WeekRange { start: elapsed + 1, end: elapsed + size };
            elapsed += size;
        }
        ranges
    }
}
