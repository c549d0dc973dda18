pub mod aggregate;
pub mod config;
pub mod engine;
pub mod membership;
pub mod rules;
pub mod validation;
pub mod weights;

pub use config::{ScoringConfig, WeightOverrides};
pub use engine::{calculate_score, categorize, ScoreBreakdown, ScoreResult};
pub use membership::{fuzzify, Blend, Grade, MembershipSet};
pub use rules::apply_overrides;
pub use validation::validate_scoring;
pub use weights::WeightSet;
