use crate::leads::types::{CustomerType, LeadAttributes};

/// Low/medium/high membership degrees for one scored variable.
///
/// Degrees are in [0,1] but adjacent labels overlap (triangular and
/// trapezoidal shapes), so they don't sum to 1 in general.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grade {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Grade {
    /// Triangular membership over the 1-5 scale, centered at 3.
    pub fn triangle(x: f64) -> Self {
        Self {
            low: clamp01((3.0 - x) / 2.0),
            medium: clamp01(1.0 - (x - 3.0).abs() / 2.0),
            high: clamp01((x - 3.0) / 2.0),
        }
    }
}

/// Practical/balanced/emotional sentiment degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blend {
    pub practical: f64,
    pub balanced: f64,
    pub emotional: f64,
}

impl Blend {
    /// Default used when no sentiment signal accompanies the lead.
    pub fn neutral() -> Self {
        Self {
            practical: 0.33,
            balanced: 0.34,
            emotional: 0.33,
        }
    }
}

/// Fuzzified view of one lead's attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembershipSet {
    pub profit: Grade,
    pub urgency: Grade,
    pub intent: Grade,
    pub interest: Grade,
    pub customer_new: f64,
    pub customer_returning: f64,
    pub sentiment: Blend,
    /// Whether sentiment came from the input (vs. the neutral default).
    /// Sentiment-based aggregation rules only fire when this is set.
    pub sentiment_observed: bool,
}

/// Map a lead's raw attributes to fuzzy membership degrees.
///
/// Intent uses the granular `intent_detail.score` when present, falling
/// back to the coarse `raw_intent`.
pub fn fuzzify(lead: &LeadAttributes) -> MembershipSet {
    let (customer_new, customer_returning) = match lead.customer_type {
        CustomerType::New => (1.0, 0.0),
        CustomerType::Returning => (0.0, 1.0),
    };

    let (sentiment, sentiment_observed) = match &lead.sentiment {
        Some(s) => {
            let g = Grade::triangle(s.practical_emotional);
            (
                Blend {
                    practical: g.low,
                    balanced: g.medium,
                    emotional: g.high,
                },
                true,
            )
        }
        None => (Blend::neutral(), false),
    };

    MembershipSet {
        profit: profit_grade(lead.budget_potential),
        urgency: Grade::triangle(f64::from(lead.urgency)),
        intent: Grade::triangle(f64::from(lead.effective_intent())),
        interest: Grade::triangle(f64::from(lead.interest_level)),
        customer_new,
        customer_returning,
        sentiment,
        sentiment_observed,
    }
}

/// Trapezoidal profit membership over four budget bands.
///
/// Band edges at 10k, 50k and 200k; between edges exactly one pair of
/// adjacent labels is active and the shapes meet continuously at the edges.
fn profit_grade(budget: f64) -> Grade {
    if budget <= 10_000.0 {
        Grade {
            low: 1.0,
            medium: 0.0,
            high: 0.0,
        }
    } else if budget <= 50_000.0 {
        Grade {
            low: clamp01((50_000.0 - budget) / 40_000.0),
            medium: clamp01((budget - 10_000.0) / 40_000.0),
            high: 0.0,
        }
    } else if budget <= 200_000.0 {
        Grade {
            low: 0.0,
            medium: clamp01((200_000.0 - budget) / 150_000.0),
            high: clamp01((budget - 50_000.0) / 150_000.0),
        }
    } else {
        Grade {
            low: 0.0,
            medium: 0.0,
            high: 1.0,
        }
    }
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}
