//! Risk Classifier
//!
//! Only the evaluation logic - no types, no presentation.
//! Input: probability (+ ClinicalInputs for factors)
//! Output: RiskTier / ordered Vec<RiskFactor>

use super::rules::{
    rules_for, BORDERLINE_ABOVE, CRITICAL_ABOVE, HIGH_ABOVE, VERY_HIGH_ABOVE,
};
use super::types::{ClinicalInputs, RiskFactor, RiskTier};

// ============================================================================
// TIER CLASSIFICATION
// ============================================================================

/// Map a probability (0.0 - 1.0) to its tier.
///
/// Strict thresholds on the percentage, checked top-down: exactly 90% is
/// VeryHigh, exactly 30% is Low.
pub fn classify_tier(probability: f64) -> RiskTier {
    let percent = probability * 100.0;

    if percent > CRITICAL_ABOVE {
        RiskTier::Critical
    } else if percent > VERY_HIGH_ABOVE {
        RiskTier::VeryHigh
    } else if percent > HIGH_ABOVE {
        RiskTier::High
    } else if percent > BORDERLINE_ABOVE {
        RiskTier::Borderline
    } else {
        RiskTier::Low
    }
}

// ============================================================================
// FACTOR DERIVATION
// ============================================================================

/// Explanatory factors in rule-table order. Every matching rule contributes.
pub fn derive_factors(inputs: &ClinicalInputs, probability: f64) -> Vec<RiskFactor> {
    rules_for(probability)
        .iter()
        .filter(|rule| (rule.applies)(inputs))
        .map(|rule| RiskFactor {
            text: (rule.message)(inputs),
            severity: rule.severity,
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::risk::types::Severity;

    fn sample() -> ClinicalInputs {
        ClinicalInputs {
            age: 63.0,
            trestbps: 145.0,
            chol: 233.0,
            thalach: 150.0,
            oldpeak: 2.3,
            cp: 3,
            ca: 0,
            thal: 1,
        }
    }

    /// Inputs that trip none of the risk rules
    fn quiet() -> ClinicalInputs {
        ClinicalInputs {
            age: 40.0,
            trestbps: 120.0,
            chol: 200.0,
            thalach: 150.0,
            oldpeak: 1.0,
            cp: 2,
            ca: 0,
            thal: 2,
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(classify_tier(0.90), RiskTier::VeryHigh);
        assert_eq!(classify_tier(0.9001), RiskTier::Critical);
        assert_eq!(classify_tier(0.70), RiskTier::High);
        assert_eq!(classify_tier(0.7001), RiskTier::VeryHigh);
        assert_eq!(classify_tier(0.50), RiskTier::Borderline);
        assert_eq!(classify_tier(0.5001), RiskTier::High);
        assert_eq!(classify_tier(0.30), RiskTier::Low);
        assert_eq!(classify_tier(0.3001), RiskTier::Borderline);
        assert_eq!(classify_tier(0.0), RiskTier::Low);
        assert_eq!(classify_tier(1.0), RiskTier::Critical);
    }

    #[test]
    fn test_tier_is_monotonic() {
        let mut previous = classify_tier(1.0).severity_level();
        for step in (0..=1000).rev() {
            let level = classify_tier(step as f64 / 1000.0).severity_level();
            assert!(level <= previous, "tier rose as probability fell at {}", step);
            previous = level;
        }
    }

    #[test]
    fn test_example_scenario_factors() {
        let factors = derive_factors(&sample(), 0.45);

        assert_eq!(classify_tier(0.45), RiskTier::Borderline);

        // cp/thal/ca checks do not match; oldpeak, age and BP do
        let high: Vec<&RiskFactor> = factors
            .iter()
            .filter(|f| f.severity == Severity::High)
            .collect();
        assert_eq!(high.len(), 1);
        assert!(high[0].text.contains("Oldpeak of 2.3"));

        let severities: Vec<Severity> = factors.iter().map(|f| f.severity).collect();
        assert_eq!(severities, vec![Severity::High, Severity::Low, Severity::Low]);
        assert_eq!(factors[1].text, "Age (63) is a contributing risk factor.");
        assert_eq!(factors[2].text, "Your Resting BP (145) is elevated.");
    }

    #[test]
    fn test_only_oldpeak_factor() {
        let inputs = ClinicalInputs {
            oldpeak: 2.3,
            ..quiet()
        };
        let factors = derive_factors(&inputs, 0.45);

        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].severity, Severity::High);
        assert_eq!(
            factors[0].text,
            "An Oldpeak of 2.3 is high, which often indicates significant heart stress."
        );
    }

    #[test]
    fn test_low_probability_positive_factors() {
        let inputs = ClinicalInputs {
            thalach: 170.0,
            ..quiet()
        };
        let factors = derive_factors(&inputs, 0.15);

        assert_eq!(factors.len(), 2);
        assert!(factors.iter().all(|f| f.severity == Severity::Good));
        assert_eq!(
            factors[1].text,
            "Your Max Heart Rate (170) is excellent, indicating good cardiac fitness."
        );
    }

    #[test]
    fn test_low_probability_ignores_risk_rules() {
        // Every risk rule would fire, but p < 0.30 only lists positives
        let inputs = ClinicalInputs {
            age: 70.0,
            trestbps: 180.0,
            chol: 300.0,
            thalach: 100.0,
            oldpeak: 4.0,
            cp: 0,
            ca: 3,
            thal: 3,
        };
        let factors = derive_factors(&inputs, 0.29);
        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].severity, Severity::Good);
    }

    #[test]
    fn test_all_risk_rules_fire_in_order() {
        let inputs = ClinicalInputs {
            age: 70.0,
            trestbps: 180.0,
            chol: 300.0,
            thalach: 100.0,
            oldpeak: 4.0,
            cp: 0,
            ca: 3,
            thal: 3,
        };
        let factors = derive_factors(&inputs, 0.30);

        let severities: Vec<Severity> = factors.iter().map(|f| f.severity).collect();
        assert_eq!(
            severities,
            vec![
                Severity::High,
                Severity::High,
                Severity::High,
                Severity::High,
                Severity::Medium,
                Severity::Low,
                Severity::Low,
                Severity::Low,
            ]
        );
        assert_eq!(
            factors[2].text,
            "Having 3 major vessels blocked (CA) is a significant risk factor."
        );
        assert_eq!(factors[7].text, "Your Cholesterol level (300) is high.");
    }

    #[test]
    fn test_no_risk_factors_is_empty() {
        assert!(derive_factors(&quiet(), 0.8).is_empty());
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let first = derive_factors(&sample(), 0.45);
        let second = derive_factors(&sample(), 0.45);
        assert_eq!(first, second);
    }
}
