//! Stage 1: flattens the thirteen work-item categories into a single
//! [`Activity`] list and applies policy-driven priority boosts.

mod categories;

use std::collections::HashSet;

use crate::activity::Activity;
use crate::error::OptimizeError;
use crate::knowledge_base::KnowledgeBase;
use crate::policy::SchedulePolicy;
use crate::request::WorkItems;

/// Flattens `work_items` into activities, in a fixed category order
/// (load-bearing: it drives id synthesis and the insertion-order tie-break
/// downstream), then applies the policy's pre-model priority boost.
///
/// Returns [`OptimizeError::DuplicateActivityId`] if the flattened list
/// contains a repeated id: duplicate ids are a user error and are rejected
/// before the core runs.
pub fn normalize(
    work_items: &WorkItems,
    policy: SchedulePolicy,
    kbs: &dyn KnowledgeBase,
) -> Result<Vec<Activity>, OptimizeError> {
    let mut activities = Vec::new();

    categories::push_appointments(&mut activities, &work_items.appointments)?;
    categories::push_calendar_events(&mut activities, &work_items.calendar_events)?;
    categories::push_tasks(&mut activities, &work_items.tasks, kbs)?;
    categories::push_critical_alerts(&mut activities, &work_items.critical_alerts_to_address);
    categories::push_follow_ups(&mut activities, &work_items.follow_ups);
    categories::push_break_times(&mut activities, &work_items.break_times)?;
    categories::push_care_plans(&mut activities, &work_items.care_plans)?;
    categories::push_admission_alerts(&mut activities, &work_items.patient_admission_alerts);
    categories::push_ed_visits(&mut activities, &work_items.patient_ed_visits)?;
    categories::push_predefined_appointments(
        &mut activities,
        &work_items.predefined_appointments,
    )?;
    categories::push_interventions(&mut activities, &work_items.interventions)?;
    categories::push_communications(&mut activities, &work_items.patient_communications)?;
    categories::push_vital_alerts(&mut activities, &work_items.patient_vital_alerts);

    reject_duplicate_ids(&activities)?;
    apply_policy_boosts(&mut activities, policy);

    Ok(activities)
}

fn reject_duplicate_ids(activities: &[Activity]) -> Result<(), OptimizeError> {
    let mut seen = HashSet::with_capacity(activities.len());
    for activity in activities {
        if !seen.insert(activity.id.as_str()) {
            return Err(OptimizeError::DuplicateActivityId(activity.id.clone()));
        }
    }
    Ok(())
}

/// Policy-driven priority adjustments applied after normalization, before
/// model building. `BALANCED`, `PATIENT_CONTEXT_FOCUSED`, and
/// `SIMILAR_TASK_FIRST` make no change here — their effect, if any, is in
/// the objective.
fn apply_policy_boosts(activities: &mut [Activity], policy: SchedulePolicy) {
    match policy {
        SchedulePolicy::CriticalPatientFocused => {
            for activity in activities.iter_mut() {
                if activity.activity_type.is_critical_patient_type() && !activity.patient_id.is_empty() {
                    activity.priority += 2;
                }
            }
        }
        SchedulePolicy::HighPriorityFirst => {
            for activity in activities.iter_mut() {
                if activity.priority >= 8 {
                    activity.priority += 1;
                }
            }
        }
        SchedulePolicy::Balanced
        | SchedulePolicy::PatientContextFocused
        | SchedulePolicy::SimilarTaskFirst => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge_base::DefaultKnowledgeBase;
    use crate::request::{AppointmentInput, CriticalAlertInput, TaskInput};

    fn kbs() -> DefaultKnowledgeBase {
        DefaultKnowledgeBase::default()
    }

    #[test]
    fn flattens_in_category_order() {
        let mut work_items = WorkItems::default();
        work_items.appointments.push(AppointmentInput {
            item_id: "A1".into(),
            patient_id: "P1".into(),
            title: "Visit".into(),
            start_time: None,
            estimated_duration: 30,
            location: String::new(),
            is_fixed_time: false,
            initial_priority_score: None,
        });
        work_items.tasks.push(TaskInput {
            task_id: "T1".into(),
            patient_id: String::new(),
            description: "Chart prep".into(),
            estimated_duration: 15,
            initial_priority_score: None,
            initial_priority_score_text: None,
            deadline: None,
            location_dependency: String::new(),
        });

        let activities = normalize(&work_items, SchedulePolicy::Balanced, &kbs()).unwrap();
        assert_eq!(activities[0].id, "A1");
        assert_eq!(activities[1].id, "T1");
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut work_items = WorkItems::default();
        let appt = AppointmentInput {
            item_id: "DUP".into(),
            patient_id: String::new(),
            title: "x".into(),
            start_time: None,
            estimated_duration: 10,
            location: String::new(),
            is_fixed_time: false,
            initial_priority_score: None,
        };
        work_items.appointments.push(appt.clone());
        work_items.appointments.push(appt);

        let err = normalize(&work_items, SchedulePolicy::Balanced, &kbs()).unwrap_err();
        assert_eq!(err, OptimizeError::DuplicateActivityId("DUP".into()));
    }

    #[test]
    fn task_priority_falls_back_to_text_weight() {
        let mut work_items = WorkItems::default();
        work_items.tasks.push(TaskInput {
            task_id: "T1".into(),
            patient_id: String::new(),
            description: "x".into(),
            estimated_duration: 10,
            initial_priority_score: None,
            initial_priority_score_text: Some("High".into()),
            deadline: None,
            location_dependency: String::new(),
        });

        let activities = normalize(&work_items, SchedulePolicy::Balanced, &kbs()).unwrap();
        assert_eq!(activities[0].priority, 10);
    }

    #[test]
    fn critical_patient_focused_boosts_only_with_patient_id() {
        let mut work_items = WorkItems::default();
        work_items.critical_alerts_to_address.push(CriticalAlertInput {
            alert_id: "AL1".into(),
            patient_id: "P1".into(),
            summary: "K+ low".into(),
            estimated_time_to_address: 20,
            urgency_score: Some(10),
        });
        work_items.critical_alerts_to_address.push(CriticalAlertInput {
            alert_id: "AL2".into(),
            patient_id: String::new(),
            summary: "no patient".into(),
            estimated_time_to_address: 20,
            urgency_score: Some(10),
        });

        let activities =
            normalize(&work_items, SchedulePolicy::CriticalPatientFocused, &kbs()).unwrap();
        assert_eq!(activities[0].priority, 12);
        assert_eq!(activities[1].priority, 10);
    }

    #[test]
    fn high_priority_first_boosts_only_at_or_above_eight() {
        let mut work_items = WorkItems::default();
        work_items.tasks.push(TaskInput {
            task_id: "T1".into(),
            patient_id: String::new(),
            description: "x".into(),
            estimated_duration: 10,
            initial_priority_score: Some(8),
            initial_priority_score_text: None,
            deadline: None,
            location_dependency: String::new(),
        });
        work_items.tasks.push(TaskInput {
            task_id: "T2".into(),
            patient_id: String::new(),
            description: "y".into(),
            estimated_duration: 10,
            initial_priority_score: Some(7),
            initial_priority_score_text: None,
            deadline: None,
            location_dependency: String::new(),
        });

        let activities = normalize(&work_items, SchedulePolicy::HighPriorityFirst, &kbs()).unwrap();
        assert_eq!(activities[0].priority, 9);
        assert_eq!(activities[1].priority, 7);
    }
}
