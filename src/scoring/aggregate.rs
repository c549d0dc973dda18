use super::membership::MembershipSet;

/// Score returned when no rule in a bank fires.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Likelihood-to-convert sub-score.
///
/// Evaluates a fixed bank of fuzzy IF-THEN rules: each antecedent is the
/// min-conjunction of membership degrees, each consequent a fixed
/// singleton. Sentiment rules only participate when the sentiment signal
/// was actually observed on the input.
pub fn likelihood(m: &MembershipSet) -> f64 {
    let mut rules = vec![
        (m.urgency.high.min(m.intent.high), 0.9),
        (m.urgency.high.min(m.intent.medium), 0.7),
        (m.urgency.medium.min(m.intent.high), 0.7),
        (m.interest.high, 0.6),
        (m.customer_returning.min(m.intent.medium), 0.6),
        (m.urgency.low.min(m.intent.low), 0.2),
    ];
    if m.sentiment_observed {
        rules.push((m.sentiment.emotional, 0.65));
        rules.push((m.sentiment.practical.min(m.profit.high), 0.5));
    }
    defuzzify(&rules)
}

/// Business-value sub-score, same mechanism as [`likelihood`].
pub fn business_value(m: &MembershipSet) -> f64 {
    defuzzify(&[
        (m.profit.high, 0.9),
        (m.profit.medium.min(m.urgency.high), 0.7),
        (m.profit.medium.min(m.intent.high), 0.7),
        (m.profit.low.min(m.urgency.high), 0.5),
        (m.profit.low.min(m.intent.low), 0.2),
        (m.customer_returning, 0.6),
    ])
}

/// Weighted-average defuzzification over (strength, consequent) pairs.
/// Rules with zero strength don't contribute; an empty firing set yields
/// the neutral score.
fn defuzzify(rules: &[(f64, f64)]) -> f64 {
    let mut weighted = 0.0;
    let mut total = 0.0;
    for &(strength, consequent) in rules {
        if strength > 0.0 {
            weighted += strength * consequent;
            total += strength;
        }
    }
    if total > 0.0 {
        weighted / total
    } else {
        NEUTRAL_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::membership::{Blend, Grade, MembershipSet};

    fn zero_grade() -> Grade {
        Grade {
            low: 0.0,
            medium: 0.0,
            high: 0.0,
        }
    }

    fn blank_memberships() -> MembershipSet {
        MembershipSet {
            profit: zero_grade(),
            urgency: zero_grade(),
            intent: zero_grade(),
            interest: zero_grade(),
            customer_new: 0.0,
            customer_returning: 0.0,
            sentiment: Blend::neutral(),
            sentiment_observed: false,
        }
    }

    #[test]
    fn test_defuzzify_single_rule() {
        // A lone rule yields its consequent regardless of strength.
        assert_eq!(defuzzify(&[(1.0, 0.9)]), 0.9);
        assert!((defuzzify(&[(0.3, 0.9)]) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_defuzzify_weighted_average() {
        // (1.0*0.9 + 0.5*0.2) / 1.5
        let result = defuzzify(&[(1.0, 0.9), (0.5, 0.2)]);
        assert!((result - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_defuzzify_no_rules_fire() {
        assert_eq!(defuzzify(&[(0.0, 0.9), (0.0, 0.2)]), NEUTRAL_SCORE);
        assert_eq!(defuzzify(&[]), NEUTRAL_SCORE);
    }

    #[test]
    fn test_likelihood_hot_lead() {
        let mut m = blank_memberships();
        m.urgency.high = 1.0;
        m.intent.high = 1.0;
        assert_eq!(likelihood(&m), 0.9);
    }

    #[test]
    fn test_likelihood_neutral_when_nothing_fires() {
        assert_eq!(likelihood(&blank_memberships()), NEUTRAL_SCORE);
    }

    #[test]
    fn test_likelihood_cold_lead() {
        let mut m = blank_memberships();
        m.urgency.low = 1.0;
        m.intent.low = 1.0;
        assert_eq!(likelihood(&m), 0.2);
    }

    #[test]
    fn test_likelihood_sentiment_rules_gated_on_presence() {
        let mut m = blank_memberships();
        m.sentiment = Blend {
            practical: 0.0,
            balanced: 0.0,
            emotional: 1.0,
        };
        // Not observed: sentiment rules must not fire.
        assert_eq!(likelihood(&m), NEUTRAL_SCORE);
        // Observed: emotional rule fires alone.
        m.sentiment_observed = true;
        assert_eq!(likelihood(&m), 0.65);
    }

    #[test]
    fn test_likelihood_practical_profit_rule() {
        let mut m = blank_memberships();
        m.sentiment_observed = true;
        m.sentiment = Blend {
            practical: 0.8,
            balanced: 0.2,
            emotional: 0.0,
        };
        m.profit.high = 1.0;
        // Only rule 8 fires: min(0.8, 1.0) -> 0.5.
        assert_eq!(likelihood(&m), 0.5);
    }

    #[test]
    fn test_business_value_profit_dominates() {
        let mut m = blank_memberships();
        m.profit.high = 1.0;
        assert_eq!(business_value(&m), 0.9);
    }

    #[test]
    fn test_business_value_returning_customer_baseline() {
        let mut m = blank_memberships();
        m.customer_returning = 1.0;
        assert_eq!(business_value(&m), 0.6);
    }

    #[test]
    fn test_business_value_neutral_when_nothing_fires() {
        assert_eq!(business_value(&blank_memberships()), NEUTRAL_SCORE);
    }

    #[test]
    fn test_business_value_mixed_rules() {
        let mut m = blank_memberships();
        m.profit.medium = 0.5;
        m.urgency.high = 1.0;
        m.profit.low = 0.5;
        // Rule 2: min(0.5, 1.0)=0.5 -> 0.7; rule 4: min(0.5, 1.0)=0.5 -> 0.5.
        let expected = (0.5 * 0.7 + 0.5 * 0.5) / 1.0;
        assert!((business_value(&m) - expected).abs() < 1e-9);
    }
}
