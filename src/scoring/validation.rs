use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(share) = config.likelihood_share {
        if !share.is_finite() || !(0.0..=1.0).contains(&share) {
            errors.push(format!(
                "scoring.likelihood_share: must be between 0 and 1, got {}",
                share
            ));
        }
    }

    if let Some(ref weights) = config.weights {
        let named = [
            ("budget_potential", weights.budget_potential),
            ("urgency", weights.urgency),
            ("intent", weights.intent),
            ("interest_level", weights.interest_level),
            ("customer_type", weights.customer_type),
        ];
        for (name, value) in named {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    errors.push(format!(
                        "scoring.weights.{}: must be a non-negative number, got {}",
                        name, v
                    ));
                }
            }
        }

        // Renormalization needs a positive total.
        if named.iter().all(|(_, v)| matches!(v, Some(x) if *x == 0.0)) {
            errors.push("scoring.weights: at least one weight must be positive".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
