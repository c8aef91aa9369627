use thiserror::Error;

use crate::models::EarningsEstimate;

#[derive(Error, Debug, PartialEq)]
pub enum EarningsError {
    #[error("view count must not be negative (got {0})")]
    NegativeViews(i64),

    #[error("CPM must be a positive number (got {0})")]
    InvalidCpm(f64),
}

/// `views / 1000 * cpm`, rounded to cents with ties going to the even cent.
pub fn estimate_earnings(views: i64, cpm: f64) -> Result<EarningsEstimate, EarningsError> {
    if views < 0 {
        return Err(EarningsError::NegativeViews(views));
    }
    if !(cpm.is_finite() && cpm > 0.0) {
        return Err(EarningsError::InvalidCpm(cpm));
    }

    let earnings = (views as f64 / 1000.0) * cpm;
    Ok(EarningsEstimate {
        views: views as u64,
        cpm,
        earnings: (earnings * 100.0).round_ties_even() / 100.0,
    })
}

#[derive(Debug, Clone, Copy)]
pub struct EarningsService {
    default_cpm: f64,
}

impl EarningsService {
    pub fn new(default_cpm: f64) -> Self {
        Self { default_cpm }
    }

    pub fn default_cpm(&self) -> f64 {
        self.default_cpm
    }

    pub fn estimate(&self, views: i64, cpm: Option<f64>) -> Result<EarningsEstimate, EarningsError> {
        estimate_earnings(views, cpm.unwrap_or(self.default_cpm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1_000_000, 2.0, 2000.00)]
    #[case(0, 2.0, 0.00)]
    #[case(1_234, 2.0, 2.47)]
    #[case(999, 1.5, 1.50)]
    #[case(12_345_678, 3.25, 40123.45)]
    #[case(125, 1.0, 0.12)]
    #[case(375, 1.0, 0.38)]
    fn computes_rounded_estimate(#[case] views: i64, #[case] cpm: f64, #[case] expected: f64) {
        let estimate = estimate_earnings(views, cpm).unwrap();
        assert!((estimate.earnings - expected).abs() < 1e-9, "{:?}", estimate);
        assert_eq!(estimate.views, views as u64);
    }

    #[test]
    fn rejects_negative_views() {
        assert_eq!(
            estimate_earnings(-1, 2.0),
            Err(EarningsError::NegativeViews(-1))
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(-2.0)]
    #[case(f64::INFINITY)]
    fn rejects_bad_cpm(#[case] cpm: f64) {
        assert!(matches!(
            estimate_earnings(10, cpm),
            Err(EarningsError::InvalidCpm(_))
        ));
    }

    #[test]
    fn service_uses_default_cpm() {
        let service = EarningsService::new(2.0);
        assert_eq!(service.estimate(1_000_000, None).unwrap().earnings, 2000.0);
        assert_eq!(service.estimate(1_000_000, Some(4.0)).unwrap().earnings, 4000.0);
    }
}
