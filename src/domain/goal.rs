use serde::{Deserialize, Serialize};
use thousands::Separable;

/// A follower/member goal shown on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalMetric {
    pub id: String,
    pub label: String,
    pub current: u64,
    pub target: u64,
    pub unit: String,
}

impl GoalMetric {
    pub fn progress_pct(&self) -> u8 {
        progress_pct(self.current, self.target)
    }

    /// `current / target unit` with thousands separators
    pub fn amount_label(&self) -> String {
        format!(
            "{} / {} {}",
            self.current.separate_with_commas(),
            self.target.separate_with_commas(),
            self.unit
        )
    }
}

/// Progress as a whole percentage, clamped to 100.
///
/// `min(current / target, 1)` rounded to the nearest percent, half up.
/// A zero target has no progress.
pub fn progress_pct(current: u64, target: u64) -> u8 {
    if target == 0 {
        return 0;
    }
    let current = u128::from(current.min(target));
    let target = u128::from(target);
    let pct = (current * 100 + target / 2) / target;
    // current <= target, so pct <= 100
    u8::try_from(pct).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(100_520, 150_000, 67)]
    #[case(3_200, 5_000, 64)]
    #[case(5_000, 5_000, 100)]
    #[case(6_000, 5_000, 100)]
    #[case(0, 5_000, 0)]
    #[case(1, 200, 1)] // 0.5% rounds up
    #[case(1, 201, 0)]
    #[case(10, 0, 0)]
    #[case(0, 0, 0)]
    #[case(u64::MAX, u64::MAX, 100)]
    #[case(u64::MAX / 2, u64::MAX, 50)]
    fn test_progress_pct(#[case] current: u64, #[case] target: u64, #[case] expected: u8) {
        assert_eq!(progress_pct(current, target), expected);
    }

    #[test]
    fn test_amount_label() {
        let metric = GoalMetric {
            id: "g1".to_string(),
            label: "Subscribers".to_string(),
            current: 100_520,
            target: 150_000,
            unit: "명".to_string(),
        };
        assert_eq!(metric.amount_label(), "100,520 / 150,000 명");
        assert_eq!(metric.progress_pct(), 67);
    }
}
