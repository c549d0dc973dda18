use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque lead identifier.
///
/// Carries no business meaning; only deterministic tie-breaking and
/// display use it. CRM exports use numeric ids, other sources free text.
/// Numeric ids must be non-negative (the CRM never issues negative ids);
/// a negative number fails to parse. Quote it to treat it as text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LeadId {
    Numeric(u64),
    Text(String),
}

impl LeadId {
    /// Canonical byte representation fed to the tie-break hash. Numeric
    /// ids render as decimal so "1042" and 1042 hash identically.
    pub fn tie_key(&self) -> String {
        match self {
            LeadId::Numeric(n) => n.to_string(),
            LeadId::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadId::Numeric(n) => write!(f, "{}", n),
            LeadId::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    New,
    Returning,
}

/// Granular intent signal from conversation analysis. When present, its
/// `score` replaces the coarse `raw_intent` for fuzzification.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IntentDetail {
    /// How engaged the lead was with qualifying questions, 0 to 1
    pub question_engagement: f64,
    /// Refined intent score on the 1-5 scale
    pub score: u8,
}

/// Practical-vs-emotional disposition, 1 (fully practical) to 5 (fully
/// emotional). Leads without a conversation transcript won't have one.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Sentiment {
    pub practical_emotional: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Villa,
    Apartment,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    High,
    Medium,
    Low,
    /// Unrecognized values land here and apply no weight adjustment,
    /// so a growing price taxonomy never breaks scoring.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Peak,
    OffPeak,
    Regular,
    #[serde(other)]
    Other,
}

/// Property/market context attached to a lead. Adjusts criterion weights,
/// never memberships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MarketContext {
    #[serde(default)]
    pub property_type: Option<PropertyType>,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub season: Option<Season>,
}

/// One sales lead as handed to the scorer. Immutable for the duration of
/// a scoring call.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LeadAttributes {
    pub id: LeadId,

    /// Display name for output; falls back to the id
    #[serde(default)]
    pub name: Option<String>,

    /// Budget-based profit potential, currency units
    pub budget_potential: f64,

    /// 1 (not urgent) to 5 (immediate)
    pub urgency: u8,

    /// 1 (just exploring) to 5 (ready to buy)
    pub raw_intent: u8,

    /// 1 (browsing) to 5 (specific property)
    pub interest_level: u8,

    pub customer_type: CustomerType,

    #[serde(default)]
    pub intent_detail: Option<IntentDetail>,

    #[serde(default)]
    pub sentiment: Option<Sentiment>,

    #[serde(default)]
    pub context: Option<MarketContext>,
}

impl LeadAttributes {
    /// Intent value used for fuzzification: the granular score when the
    /// detail signal is present, the coarse attribute otherwise.
    pub fn effective_intent(&self) -> u8 {
        self.intent_detail
            .as_ref()
            .map(|d| d.score)
            .unwrap_or(self.raw_intent)
    }

    /// Name for table output.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("lead {}", self.id),
        }
    }
}
