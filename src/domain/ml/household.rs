//! Household financial profile and the rule that labels synthetic records.
//!
//! The label rule is a conjunction of threshold predicates over ratios derived from the raw
//! profile. Zero disposable income yields a savings rate of 0 (or NaN for zero income), which
//! fails the savings-rate predicate whatever the other ratios are.

use super::feature_registry::FeatureVector;

/// Share of the target price expected as down payment.
pub const DOWNPAYMENT_FRACTION: f64 = 0.2;

pub const SAVINGS_RATE_THRESHOLD: f64 = 0.4;
pub const AFFORDABILITY_THRESHOLD: f64 = 0.3;
pub const MOMENTUM_THRESHOLD_MONTHS: f64 = 36.0;
pub const PREDICATE_COUNT: usize = 3;

/// One household as drawn by the synthetic generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseholdProfile {
    pub income: f64,
    pub savings: f64,
    pub expenses: f64,
    pub timeline: u32,
    pub target_price: f64,
}

impl HouseholdProfile {
    pub fn ratios(&self) -> DerivedRatios {
        let disposable = self.income - self.expenses;
        let required_downpayment = self.target_price * DOWNPAYMENT_FRACTION;

        DerivedRatios {
            savings_rate: disposable / self.income,
            required_downpayment,
            affordability_ratio: self.savings / required_downpayment,
            momentum_ratio: (required_downpayment - self.savings) / disposable,
        }
    }

    pub fn features(&self) -> FeatureVector {
        FeatureVector::new(
            self.income,
            self.savings,
            self.expenses,
            f64::from(self.timeline),
            self.target_price,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRatios {
    /// Fraction of income left after expenses.
    pub savings_rate: f64,
    pub required_downpayment: f64,
    /// Current savings relative to the required down payment.
    pub affordability_ratio: f64,
    /// Periods of disposable income needed to close the down payment gap.
    pub momentum_ratio: f64,
}

/// Threshold rule producing the clean (pre-noise) success label.
///
/// `predicate_count` selects how many predicates are conjoined, in the order
/// savings rate, affordability, momentum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelRule {
    pub savings_rate_threshold: f64,
    pub affordability_threshold: f64,
    pub momentum_threshold_months: f64,
    pub predicate_count: usize,
}

impl Default for LabelRule {
    fn default() -> Self {
        Self {
            savings_rate_threshold: SAVINGS_RATE_THRESHOLD,
            affordability_threshold: AFFORDABILITY_THRESHOLD,
            momentum_threshold_months: MOMENTUM_THRESHOLD_MONTHS,
            predicate_count: PREDICATE_COUNT,
        }
    }
}

impl LabelRule {
    /// The superseded two-predicate rule (no momentum term).
    pub fn legacy() -> Self {
        Self {
            savings_rate_threshold: 0.3,
            affordability_threshold: 0.5,
            momentum_threshold_months: f64::INFINITY,
            predicate_count: 2,
        }
    }

    pub fn is_success(&self, ratios: &DerivedRatios) -> bool {
        let predicates = [
            ratios.savings_rate > self.savings_rate_threshold,
            ratios.affordability_ratio > self.affordability_threshold,
            ratios.momentum_ratio < self.momentum_threshold_months,
        ];

        predicates
            .iter()
            .take(self.predicate_count.min(predicates.len()))
            .all(|passed| *passed)
    }

    pub fn label(&self, profile: &HouseholdProfile) -> i32 {
        i32::from(self.is_success(&profile.ratios()))
    }
}
