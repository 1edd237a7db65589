use serde::{Deserialize, Serialize};

/// Ordered list of feature names.
/// This order MUST match exactly the column order the classifier was fitted on.
/// Any change here is a breaking change for persisted models.
pub const FEATURE_NAMES: &[&str] = &["income", "savings", "expenses", "timeline", "target_price"];

/// Raw numeric inputs handed to the classifier, one household per vector.
///
/// Derived ratios (savings rate, affordability, momentum) are deliberately absent:
/// they only exist to label synthetic training data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub income: f64,
    pub savings: f64,
    pub expenses: f64,
    pub timeline: f64,
    pub target_price: f64,
}

impl FeatureVector {
    pub fn new(income: f64, savings: f64, expenses: f64, timeline: f64, target_price: f64) -> Self {
        Self {
            income,
            savings,
            expenses,
            timeline,
            target_price,
        }
    }

    /// Flattens the vector in `FEATURE_NAMES` order.
    pub fn to_f64_vector(&self) -> Vec<f64> {
        vec![
            self.income,
            self.savings,
            self.expenses,
            self.timeline,
            self.target_price,
        ]
    }
}

/// Returns the canonical feature names as owned strings, as stored in model artifacts.
pub fn feature_names() -> Vec<String> {
    FEATURE_NAMES.iter().map(|name| name.to_string()).collect()
}

/// True when `names` lists exactly the canonical features in canonical order.
pub fn matches_registry(names: &[String]) -> bool {
    names.len() == FEATURE_NAMES.len()
        && names
            .iter()
            .zip(FEATURE_NAMES.iter())
            .all(|(found, expected)| found == expected)
}
