//! Patient-preference scheduling policy.
//!
//! The policy selects (a) pre-model priority adjustments in [`crate::normalize`]
//! and (b) the objective term set in [`crate::objective`]. It never changes
//! feasibility.

use serde::{Deserialize, Serialize};

/// One of the five strategic tags a request may select via
/// `nurseConstraints.patientPreference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SchedulePolicy {
    #[default]
    #[serde(rename = "BALANCED")]
    Balanced,
    #[serde(rename = "HIGH_PRIORITY_FIRST")]
    HighPriorityFirst,
    #[serde(rename = "CRITICAL_PATIENT_FOCUSED")]
    CriticalPatientFocused,
    #[serde(rename = "PATIENT_CONTEXT_FOCUSED")]
    PatientContextFocused,
    #[serde(rename = "SIMILAR_TASK_FIRST")]
    SimilarTaskFirst,
}

impl SchedulePolicy {
    /// Parses a `patientPreference` tag, falling back to [`SchedulePolicy::Balanced`]
    /// for anything unrecognized.
    pub fn parse_or_balanced(tag: &str) -> Self {
        match tag {
            "HIGH_PRIORITY_FIRST" => Self::HighPriorityFirst,
            "CRITICAL_PATIENT_FOCUSED" => Self::CriticalPatientFocused,
            "PATIENT_CONTEXT_FOCUSED" => Self::PatientContextFocused,
            "SIMILAR_TASK_FIRST" => Self::SimilarTaskFirst,
            "BALANCED" => Self::Balanced,
            _ => Self::Balanced,
        }
    }
}
