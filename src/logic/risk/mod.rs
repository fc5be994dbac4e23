//! Risk Explanation Module
//!
//! Turns a heart-risk probability and the submitted clinical inputs into a
//! display tier and an ordered list of explanatory factors.
//! Pure functions only - no I/O, no state.
//!
//! ## Structure
//! - `types`: RiskTier, Severity, RiskFactor, ClinicalInputs
//! - `rules`: thresholds and the declarative factor rule tables
//! - `classifier`: tier classification and factor derivation
//! - `report`: RiskReport bundling both for display
//!
//! ## Usage
//! ```
//! use healthprism::logic::risk::{explain, ClinicalInputs, RiskTier};
//!
//! let report = explain(&ClinicalInputs::default(), 0.45);
//! assert_eq!(report.tier, RiskTier::Borderline);
//! ```

pub mod types;
pub mod rules;
pub mod classifier;
pub mod report;

pub use types::{ClinicalInputs, RiskFactor, RiskTier, Severity};

pub use rules::{FactorRule, POSITIVE_RULES, RISK_RULES};

pub use classifier::{classify_tier, derive_factors};

pub use report::{doctor_search_url, explain, RiskReport, DISCLAIMER};
