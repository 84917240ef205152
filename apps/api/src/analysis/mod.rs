// Resume analysis core: entity extraction, keyword coverage, formatting risk
// and weighted ATS scoring. Pure functions over decoded text; no I/O.

pub mod entities;
pub mod formatting;
pub mod keywords;
pub mod pipeline;
pub mod scoring;
pub mod vocabulary;

/// Rounds to one decimal place using the exact binary value of `value`,
/// sending exact ties to the even digit (`6.25` → `6.2`, `18.75` → `18.8`).
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(66.666), 66.7);
        assert_eq!(round_one_decimal(50.0), 50.0);
        assert_eq!(round_one_decimal(0.04), 0.0);
    }

    #[test]
    fn test_round_one_decimal_ties_go_to_even() {
        assert_eq!(round_one_decimal(6.25), 6.2);
        assert_eq!(round_one_decimal(18.75), 18.8);
    }

    #[test]
    fn test_round_one_decimal_uses_exact_binary_value() {
        // 0.15 is stored as 0.1499999...
        assert_eq!(round_one_decimal(0.15), 0.1);
    }
}
