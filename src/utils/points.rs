// Contribution score calculation
// A simplified take on Qiita Contribution: items + likes + half of stockers

/// Weight of one valid item
pub const ITEM_WEIGHT: f64 = 1.0;
/// Weight of one like
pub const LIKE_WEIGHT: f64 = 1.0;
/// Weight of one stocker
pub const STOCKER_WEIGHT: f64 = 0.5;

/// Calculate the contribution score, rounding the weighted sum half-up
pub fn calculate_contribution(items: u64, likes: u64, stockers: u64) -> u64 {
    let weighted = ITEM_WEIGHT * items as f64
        + LIKE_WEIGHT * likes as f64
        + STOCKER_WEIGHT * stockers as f64;

    (weighted + 0.5).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_sum() {
        // 3 + 10 + 2.5 = 15.5 -> 16
        assert_eq!(calculate_contribution(3, 10, 5), 16);
        assert_eq!(calculate_contribution(2, 7, 4), 11);
    }

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(calculate_contribution(0, 0, 1), 1);
        assert_eq!(calculate_contribution(0, 0, 3), 2);
    }

    #[test]
    fn test_empty_user() {
        assert_eq!(calculate_contribution(0, 0, 0), 0);
    }
}
