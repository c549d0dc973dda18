use thiserror::Error;

use super::types::LeadAttributes;

/// One out-of-domain attribute on one lead.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("lead {lead}: {field}: {reason}")]
pub struct AttributeError {
    pub lead: String,
    pub field: &'static str,
    pub reason: String,
}

/// Validate one lead's attribute domains.
/// Returns all violations at once (not just the first). Scoring is
/// all-or-nothing: a lead with any violation must not be scored.
pub fn validate_lead(lead: &LeadAttributes) -> Result<(), Vec<AttributeError>> {
    let mut errors = Vec::new();
    let id = lead.id.to_string();

    let mut push = |field: &'static str, reason: String| {
        errors.push(AttributeError {
            lead: id.clone(),
            field,
            reason,
        });
    };

    if !lead.budget_potential.is_finite() || lead.budget_potential < 0.0 {
        push(
            "budget_potential",
            format!("must be a non-negative number, got {}", lead.budget_potential),
        );
    }

    for (field, value) in [
        ("urgency", lead.urgency),
        ("raw_intent", lead.raw_intent),
        ("interest_level", lead.interest_level),
    ] {
        if !(1..=5).contains(&value) {
            push(field, format!("must be between 1 and 5, got {}", value));
        }
    }

    if let Some(detail) = &lead.intent_detail {
        if !(1..=5).contains(&detail.score) {
            push(
                "intent_detail.score",
                format!("must be between 1 and 5, got {}", detail.score),
            );
        }
        if !detail.question_engagement.is_finite()
            || !(0.0..=1.0).contains(&detail.question_engagement)
        {
            push(
                "intent_detail.question_engagement",
                format!(
                    "must be between 0 and 1, got {}",
                    detail.question_engagement
                ),
            );
        }
    }

    if let Some(sentiment) = &lead.sentiment {
        if !sentiment.practical_emotional.is_finite()
            || !(1.0..=5.0).contains(&sentiment.practical_emotional)
        {
            push(
                "sentiment.practical_emotional",
                format!(
                    "must be between 1 and 5, got {}",
                    sentiment.practical_emotional
                ),
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a whole batch, collecting violations across all leads.
pub fn validate_leads(leads: &[LeadAttributes]) -> Result<(), Vec<AttributeError>> {
    let mut errors = Vec::new();
    for lead in leads {
        if let Err(mut lead_errors) = validate_lead(lead) {
            errors.append(&mut lead_errors);
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
