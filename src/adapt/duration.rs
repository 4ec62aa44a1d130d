use crate::config::DurationConfig;
use crate::types::DifficultyLevel;

/// Estimates the session length in minutes from the student's attention
/// span and the requested difficulty:
///
/// `round(span * focus_ratio * (1 + (ordinal - 1) * difficulty_step))`
///
/// Rounds half away from zero. The result is positive for every positive
/// attention span.
pub fn estimate(
    attention_span_minutes: u32,
    difficulty: DifficultyLevel,
    config: &DurationConfig,
) -> u32 {
    let base = attention_span_minutes as f64 * config.focus_ratio;
    let multiplier = 1.0 + (difficulty.ordinal() - 1) as f64 * config.difficulty_step;
    (base * multiplier).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_difficulty_worked_example() {
        // 20 * 0.8 = 16, * (1 + 2 * 0.3) = 25.6, rounds to 26
        let minutes = estimate(20, DifficultyLevel::Hard, &DurationConfig::default());
        assert_eq!(minutes, 26);
    }

    #[test]
    fn all_difficulties_for_one_span() {
        let config = DurationConfig::default();
        assert_eq!(estimate(20, DifficultyLevel::Easy, &config), 16);
        assert_eq!(estimate(20, DifficultyLevel::Medium, &config), 21);
        assert_eq!(estimate(20, DifficultyLevel::Hard, &config), 26);
        assert_eq!(estimate(20, DifficultyLevel::Expert, &config), 30);
    }

    #[test]
    fn duration_grows_with_difficulty() {
        let config = DurationConfig::default();
        let spans = [1u32, 5, 15, 45, 120];
        for span in spans {
            let easy = estimate(span, DifficultyLevel::Easy, &config);
            let medium = estimate(span, DifficultyLevel::Medium, &config);
            let hard = estimate(span, DifficultyLevel::Hard, &config);
            let expert = estimate(span, DifficultyLevel::Expert, &config);
            assert!(
                easy <= medium && medium <= hard && hard <= expert,
                "durations not monotone for span {}: {} {} {} {}",
                span,
                easy,
                medium,
                hard,
                expert
            );
        }
    }

    #[test]
    fn positive_span_never_yields_zero() {
        let config = DurationConfig::default();
        for span in 1u32..=60 {
            for difficulty in [
                DifficultyLevel::Easy,
                DifficultyLevel::Medium,
                DifficultyLevel::Hard,
                DifficultyLevel::Expert,
            ] {
                assert!(
                    estimate(span, difficulty, &config) > 0,
                    "zero duration for span {} at {:?}",
                    span,
                    difficulty
                );
            }
        }
    }
}
