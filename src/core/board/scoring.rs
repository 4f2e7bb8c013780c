/// Exponential match scoring: `2^min(size, exponent_cap)` once a match reaches `min_match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRule {
    pub min_match: usize,
    pub exponent_cap: u32,
}

impl Default for ScoreRule {
    fn default() -> Self {
        Self {
            min_match: 3,
            exponent_cap: 16,
        }
    }
}

impl ScoreRule {
    /// Shifts beyond this would overflow `u64`.
    pub const MAX_EXPONENT: u32 = 63;

    pub fn new(min_match: usize, exponent_cap: u32) -> Self {
        Self {
            min_match: min_match.max(1),
            exponent_cap: exponent_cap.min(Self::MAX_EXPONENT),
        }
    }

    #[inline]
    pub fn qualifies(&self, size: usize) -> bool {
        size >= self.min_match
    }

    pub fn points(&self, size: usize) -> u64 {
        if !self.qualifies(size) {
            return 0;
        }
        let exp = (size.min(u32::MAX as usize) as u32)
            .min(self.exponent_cap)
            .min(Self::MAX_EXPONENT);
        1u64 << exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_values() {
        let rule = ScoreRule::default();
        let got: Vec<u64> = [3, 4, 5, 6, 17, 100].iter().map(|n| rule.points(*n)).collect();
        assert_eq!(got, vec![8, 16, 32, 64, 65536, 65536]);
    }

    #[test]
    fn below_minimum_scores_nothing() {
        let rule = ScoreRule::default();
        assert_eq!(rule.points(0), 0);
        assert_eq!(rule.points(1), 0);
        assert_eq!(rule.points(2), 0);
    }

    #[test]
    fn cap_is_clamped_to_u64_width() {
        let rule = ScoreRule::new(3, 200);
        assert_eq!(rule.exponent_cap, ScoreRule::MAX_EXPONENT);
        assert_eq!(rule.points(usize::MAX), 1u64 << 63);
    }
}
