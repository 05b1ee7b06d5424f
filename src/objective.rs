//! Stage 3: assembles the policy-selected objective terms.
//!
//! The objective is a sum of non-negative integer terms to minimize. Every
//! term here is written so an empty qualifying set evaluates to zero without
//! a special case: omitting a term and including it with value zero are
//! numerically identical for a sum being minimized, so [`evaluate`] never
//! distinguishes the two.

use std::collections::HashMap;

use crate::activity::Activity;
use crate::policy::SchedulePolicy;
use crate::time::Minutes;
use crate::Id;

/// One summand of the objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveTerm {
    LunchDeviation,
    HighPriorityPenalty,
    CriticalPenalty,
    /// Declared for `PATIENT_CONTEXT_FOCUSED`. Always zero: there is no
    /// linking constraint yet tying patient adjacency to a penalty value, so
    /// this term never influences the objective as written.
    // TODO: replace with an adjacent-activity-by-patient transition counter
    // once the intended semantics are confirmed.
    PatientTransitionPenalty,
    /// Declared for `SIMILAR_TASK_FIRST`. Always zero, same rationale as
    /// [`ObjectiveTerm::PatientTransitionPenalty`].
    TaskTypeTransitionPenalty,
}

/// The term set selected by `policy`. `BALANCED` and `HIGH_PRIORITY_FIRST`
/// deliberately select the identical set.
pub fn terms_for_policy(policy: SchedulePolicy) -> Vec<ObjectiveTerm> {
    match policy {
        SchedulePolicy::Balanced | SchedulePolicy::HighPriorityFirst => {
            vec![ObjectiveTerm::LunchDeviation, ObjectiveTerm::HighPriorityPenalty]
        }
        SchedulePolicy::CriticalPatientFocused => {
            vec![ObjectiveTerm::LunchDeviation, ObjectiveTerm::CriticalPenalty]
        }
        SchedulePolicy::PatientContextFocused => {
            vec![ObjectiveTerm::LunchDeviation, ObjectiveTerm::PatientTransitionPenalty]
        }
        SchedulePolicy::SimilarTaskFirst => {
            vec![ObjectiveTerm::LunchDeviation, ObjectiveTerm::TaskTypeTransitionPenalty]
        }
    }
}

/// Evaluates the sum of `terms` given a complete assignment of starts
/// (keyed by activity id, plus `"LUNCH"`).
pub fn evaluate(
    terms: &[ObjectiveTerm],
    activities: &[Activity],
    starts: &HashMap<Id, Minutes>,
    lunch_start: Minutes,
    lunch_pref: Minutes,
) -> i64 {
    terms
        .iter()
        .map(|term| match term {
            ObjectiveTerm::LunchDeviation => (lunch_start - lunch_pref).abs(),
            ObjectiveTerm::HighPriorityPenalty => {
                let sum: i64 = activities
                    .iter()
                    .filter(|a| a.priority >= 8)
                    .filter_map(|a| starts.get(&a.id))
                    .sum();
                sum / 10
            }
            ObjectiveTerm::CriticalPenalty => {
                let sum: i64 = activities
                    .iter()
                    .filter(|a| a.activity_type.is_critical_patient_type())
                    .filter_map(|a| starts.get(&a.id))
                    .sum();
                sum / 5
            }
            ObjectiveTerm::PatientTransitionPenalty | ObjectiveTerm::TaskTypeTransitionPenalty => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityType;

    fn activity(id: &str, priority: i64, activity_type: ActivityType) -> Activity {
        Activity {
            id: id.to_string(),
            activity_type,
            duration: 30,
            priority,
            title: String::new(),
            location: String::new(),
            patient_id: String::new(),
            is_fixed: false,
            fixed_start: None,
            deadline: None,
        }
    }

    #[test]
    fn balanced_and_high_priority_first_select_same_terms() {
        assert_eq!(
            terms_for_policy(SchedulePolicy::Balanced),
            terms_for_policy(SchedulePolicy::HighPriorityFirst)
        );
    }

    #[test]
    fn lunch_deviation_is_absolute() {
        let terms = vec![ObjectiveTerm::LunchDeviation];
        let v = evaluate(&terms, &[], &HashMap::new(), 800, 750);
        assert_eq!(v, 50);
    }

    #[test]
    fn high_priority_penalty_ignores_low_priority_activities() {
        let activities = vec![
            activity("A1", 9, ActivityType::Task),
            activity("A2", 3, ActivityType::Task),
        ];
        let mut starts = HashMap::new();
        starts.insert("A1".to_string(), 100);
        starts.insert("A2".to_string(), 200);
        let terms = vec![ObjectiveTerm::HighPriorityPenalty];
        assert_eq!(evaluate(&terms, &activities, &starts, 0, 0), 10);
    }

    #[test]
    fn empty_qualifying_set_is_zero() {
        let activities = vec![activity("A1", 3, ActivityType::Task)];
        let mut starts = HashMap::new();
        starts.insert("A1".to_string(), 500);
        let terms = vec![ObjectiveTerm::HighPriorityPenalty];
        assert_eq!(evaluate(&terms, &activities, &starts, 0, 0), 0);
    }

    #[test]
    fn transition_penalties_are_always_zero() {
        let terms = vec![
            ObjectiveTerm::PatientTransitionPenalty,
            ObjectiveTerm::TaskTypeTransitionPenalty,
        ];
        assert_eq!(evaluate(&terms, &[], &HashMap::new(), 0, 0), 0);
    }
}
