use super::aggregate::{business_value, likelihood};
use super::config::ScoringConfig;
use super::membership::{fuzzify, MembershipSet};
use super::rules::apply_overrides;
use super::weights::WeightSet;
use crate::leads::types::{LeadAttributes, LeadId};

/// Intermediate pipeline values kept for diagnostics.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    /// Criterion weights after context adjustment, normalized.
    pub weights: WeightSet,
    /// Raw fuzzification result, before business-rule overrides.
    pub fuzzy: MembershipSet,
    /// Memberships after business-rule overrides.
    pub adjusted: MembershipSet,
    pub tie_breaker: f64,
    pub recency: f64,
}

/// Final scoring output for one lead.
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub likelihood: f64,
    pub business_value: f64,
    pub combined: f64,
    /// Combined score plus tie-break terms, clamped to [0,1].
    pub final_score: f64,
    /// Priority category, 1 (cold) through 5 (hot).
    pub category: u8,
    pub breakdown: ScoreBreakdown,
}

/// Score one lead through the full pipeline.
///
/// Stages: context weight adjustment, fuzzification, business-rule
/// overrides, the two rule-bank aggregations, blending, deterministic
/// tie-breaking, categorization. Pure and allocation-local; the caller is
/// expected to have validated attribute ranges already.
pub fn calculate_score(lead: &LeadAttributes, config: &ScoringConfig) -> ScoreResult {
    let weights = config.base_weights().adjusted_for(lead.context.as_ref());

    let fuzzy = fuzzify(lead);
    let adjusted = apply_overrides(lead, &fuzzy);

    let likelihood = likelihood(&adjusted);
    let business_value = business_value(&adjusted);

    let share = config.likelihood_share();
    let combined = share * likelihood + (1.0 - share) * business_value;

    let tie_breaker = tie_breaker(&lead.id);
    let recency = recency(&lead.id);
    let final_score = (combined + tie_breaker + recency).clamp(0.0, 1.0);

    ScoreResult {
        likelihood,
        business_value,
        combined,
        final_score,
        category: categorize(final_score),
        breakdown: ScoreBreakdown {
            weights,
            fuzzy,
            adjusted,
            tie_breaker,
            recency,
        },
    }
}

/// Bucket a final score into the 1-5 priority category.
/// Band edges are inclusive on the lower category.
pub fn categorize(score: f64) -> u8 {
    if score <= 0.2 {
        1
    } else if score <= 0.4 {
        2
    } else if score <= 0.6 {
        3
    } else if score <= 0.8 {
        4
    } else {
        5
    }
}

/// Deterministic perturbation in [0, 0.01) derived from the lead id, so
/// distinct leads with identical attributes still rank stably.
fn tie_breaker(id: &LeadId) -> f64 {
    0.01 * f64::from(fnv1a32(id.tie_key().as_bytes()) % 100) / 100.0
}

/// Recency nudge in [0, 0.005). Numeric ids use the id directly (newer
/// leads carry higher ids in the upstream CRM); text ids fall back to the
/// same hash as the tie-breaker.
fn recency(id: &LeadId) -> f64 {
    let slot = match id {
        LeadId::Numeric(n) => n % 1000,
        LeadId::Text(_) => u64::from(fnv1a32(id.tie_key().as_bytes()) % 1000),
    };
    0.005 * (slot as f64) / 1000.0
}

/// 32-bit FNV-1a. Fixed constants, stable across runs and platforms;
/// the standard library hasher makes no such guarantee.
fn fnv1a32(bytes: &[u8]) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for &b in bytes {
        hash ^= u32::from(b);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}
