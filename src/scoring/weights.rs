use crate::leads::types::{MarketContext, PriceRange, PropertyType, Season};

/// Criterion importance weights used across the scoring pipeline.
///
/// The base weights are fixed constants (pre-computed offline, not derived
/// at runtime). Market context scales individual weights, after which the
/// set is renormalized so the weights always sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightSet {
    pub budget_potential: f64,
    pub urgency: f64,
    pub intent: f64,
    pub interest_level: f64,
    pub customer_type: f64,
}

impl WeightSet {
    /// Default criterion weights. Already normalized.
    pub fn base() -> Self {
        Self {
            budget_potential: 0.35,
            urgency: 0.25,
            intent: 0.20,
            interest_level: 0.15,
            customer_type: 0.05,
        }
    }

    pub fn sum(&self) -> f64 {
        self.budget_potential + self.urgency + self.intent + self.interest_level + self.customer_type
    }

    /// Scale every weight so the set sums to exactly 1.0.
    pub fn renormalized(mut self) -> Self {
        let total = self.sum();
        if total > 0.0 {
            self.budget_potential /= total;
            self.urgency /= total;
            self.intent /= total;
            self.interest_level /= total;
            self.customer_type /= total;
        }
        self
    }

    /// Apply market-context multipliers and renormalize.
    ///
    /// Each context dimension scales a pair (or single) of weights; the
    /// multipliers are independent, so application order doesn't matter.
    /// Unrecognized context values apply no adjustment. With no context at
    /// all the set passes through unchanged.
    pub fn adjusted_for(&self, context: Option<&MarketContext>) -> Self {
        let Some(ctx) = context else {
            return *self;
        };

        let mut w = *self;

        match ctx.property_type {
            Some(PropertyType::Villa) => {
                w.budget_potential *= 1.2;
                w.intent *= 0.9;
            }
            Some(PropertyType::Apartment) => {
                w.urgency *= 1.2;
                w.budget_potential *= 0.9;
            }
            Some(PropertyType::Other) | None => {}
        }

        match ctx.price_range {
            Some(PriceRange::High) => {
                w.intent *= 1.2;
                w.urgency *= 0.9;
            }
            Some(PriceRange::Low) => {
                w.urgency *= 1.2;
                w.intent *= 0.9;
            }
            Some(PriceRange::Medium) | Some(PriceRange::Other) | None => {}
        }

        match ctx.season {
            Some(Season::Peak) => {
                w.budget_potential *= 1.1;
            }
            Some(Season::OffPeak) => {
                w.interest_level *= 1.2;
            }
            Some(Season::Regular) | Some(Season::Other) | None => {}
        }

        w.renormalized()
    }
}

impl Default for WeightSet {
    fn default() -> Self {
        Self::base()
    }
}
