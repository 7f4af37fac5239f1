/// Deterministic score from error counts, independent of the LLM path
///
/// Starts at 100, subtracts 25 per critical error (capped at 75) and 5 per
/// minor error (capped at 25), adds a 5-point bonus when both counts are
/// zero, then clamps to 0..=105. The 105 ceiling for the zero-error case is
/// observable behavior and kept as-is.
pub fn calculate_score(critical_errors: usize, minor_errors: usize) -> i32 {
    let mut score: i32 = 100;

    let critical_penalty = critical_errors.saturating_mul(25).min(75) as i32;
    let minor_penalty = minor_errors.saturating_mul(5).min(25) as i32;

    score -= critical_penalty;
    score -= minor_penalty;

    if critical_errors == 0 && minor_errors == 0 {
        score += 5;
    }

    score.clamp(0, 105)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_gets_bonus() {
        assert_eq!(calculate_score(0, 0), 105);
    }

    #[test]
    fn test_single_critical() {
        assert_eq!(calculate_score(1, 0), 75);
    }

    #[test]
    fn test_minor_penalty_caps_at_25() {
        assert_eq!(calculate_score(0, 10), 75);
        assert_eq!(calculate_score(0, 5), 75);
        assert_eq!(calculate_score(0, 100), 75);
    }

    #[test]
    fn test_critical_penalty_caps_at_75() {
        assert_eq!(calculate_score(3, 0), 25);
        assert_eq!(calculate_score(10, 0), 25);
    }

    #[test]
    fn test_floor_at_zero() {
        assert_eq!(calculate_score(5, 5), 0);
        assert_eq!(calculate_score(100, 100), 0);
    }

    #[test]
    fn test_mixed_errors() {
        assert_eq!(calculate_score(1, 2), 65);
        assert_eq!(calculate_score(2, 1), 45);
    }
}
