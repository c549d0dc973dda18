use super::membership::MembershipSet;
use crate::leads::types::{CustomerType, LeadAttributes};

/// Apply the fixed business-rule overrides to a fuzzified lead.
///
/// Rules are evaluated against the crisp input attributes, in order, and
/// written onto a copy of the membership set so the raw fuzzification
/// result stays inspectable. Each rule boosts a membership degree; none
/// lowers one.
pub fn apply_overrides(lead: &LeadAttributes, fuzzy: &MembershipSet) -> MembershipSet {
    let mut m = *fuzzy;

    // Big budget with real urgency: treat as top-band on both.
    if lead.budget_potential > 200_000.0 && lead.urgency >= 4 {
        m.profit.high = 1.0;
        m.urgency.high = 1.0;
    }

    // Maximum urgency always reads as fully urgent.
    if lead.urgency == 5 {
        m.urgency.high = 1.0;
    }

    // Returning customers signaling strong intent are taken at their word.
    if lead.customer_type == CustomerType::Returning && lead.raw_intent >= 4 {
        m.intent.high = 1.0;
    }

    // Emotional buyers with substantial budget lean toward converting.
    if let Some(sentiment) = &lead.sentiment {
        if sentiment.practical_emotional >= 4.0 && lead.budget_potential > 100_000.0 {
            m.intent.high = m.intent.high.max(0.8);
        }
    }

    m
}
