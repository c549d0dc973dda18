use serde::{Deserialize, Serialize};

use super::weights::WeightSet;

/// Main scoring configuration.
///
/// Every field is optional; the built-in defaults implement the standard
/// pipeline (base criterion weights, 60/40 likelihood/business-value
/// blend). Overridden weights don't need to sum to 1 -- the engine
/// renormalizes them before use.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   likelihood_share: 0.7
///   weights:
///     budget_potential: 0.4
///     urgency: 0.3
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Fraction of the combined score taken from the likelihood sub-score
    /// (default: 0.6; business value gets the remainder)
    #[serde(default)]
    pub likelihood_share: Option<f64>,

    /// Per-criterion base weight overrides
    #[serde(default)]
    pub weights: Option<WeightOverrides>,
}

/// Partial override of the five base criterion weights.
/// Criteria left out keep their built-in weight.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct WeightOverrides {
    #[serde(default)]
    pub budget_potential: Option<f64>,
    #[serde(default)]
    pub urgency: Option<f64>,
    #[serde(default)]
    pub intent: Option<f64>,
    #[serde(default)]
    pub interest_level: Option<f64>,
    #[serde(default)]
    pub customer_type: Option<f64>,
}

impl ScoringConfig {
    /// Blend fraction for the likelihood sub-score.
    pub fn likelihood_share(&self) -> f64 {
        self.likelihood_share.unwrap_or(0.6)
    }

    /// Resolve the base weight set with any overrides applied, normalized.
    pub fn base_weights(&self) -> WeightSet {
        let base = WeightSet::base();
        let Some(ref o) = self.weights else {
            return base;
        };
        WeightSet {
            budget_potential: o.budget_potential.unwrap_or(base.budget_potential),
            urgency: o.urgency.unwrap_or(base.urgency),
            intent: o.intent.unwrap_or(base.intent),
            interest_level: o.interest_level.unwrap_or(base.interest_level),
            customer_type: o.customer_type.unwrap_or(base.customer_type),
        }
        .renormalized()
    }
}
