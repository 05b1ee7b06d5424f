//! Per-category conversion functions, one per input work-item category, each
//! pushing zero or more [`Activity`] records onto the running flattened
//! list.
//!
//! Every "synthesize an id if absent" default reads the running list's
//! current length at the moment the item is pushed, so these functions take
//! `&mut Vec<Activity>` rather than returning a fresh `Vec` each.

use crate::activity::{Activity, ActivityType};
use crate::error::OptimizeError;
use crate::knowledge_base::KnowledgeBase;
use crate::request::*;
use crate::time::{extract_deadline_minutes, time_to_minutes};

fn fixed_start(
    is_fixed: bool,
    start_time: &Option<String>,
) -> Result<(bool, Option<i64>), OptimizeError> {
    if !is_fixed {
        return Ok((false, None));
    }
    match start_time {
        Some(s) => Ok((true, Some(time_to_minutes(s)?))),
        None => Ok((false, None)),
    }
}

pub fn push_appointments(
    acc: &mut Vec<Activity>,
    items: &[AppointmentInput],
) -> Result<(), OptimizeError> {
    for item in items {
        let (is_fixed, start) = fixed_start(item.is_fixed_time, &item.start_time)?;
        acc.push(Activity {
            id: item.item_id.clone(),
            activity_type: ActivityType::Appointment,
            duration: item.estimated_duration,
            priority: item.initial_priority_score.unwrap_or(5),
            title: item.title.clone(),
            location: item.location.clone(),
            patient_id: item.patient_id.clone(),
            is_fixed,
            fixed_start: start,
            deadline: None,
        });
    }
    Ok(())
}

pub fn push_calendar_events(
    acc: &mut Vec<Activity>,
    items: &[CalendarEventInput],
) -> Result<(), OptimizeError> {
    for item in items {
        let (is_fixed, start) = fixed_start(item.is_fixed_time, &item.start_time)?;
        acc.push(Activity {
            id: item.item_id.clone(),
            activity_type: ActivityType::Meeting,
            duration: item.estimated_duration,
            priority: item.initial_priority_score.unwrap_or(4),
            title: item.title.clone(),
            location: item.location.clone(),
            patient_id: String::new(),
            is_fixed,
            fixed_start: start,
            deadline: None,
        });
    }
    Ok(())
}

pub fn push_tasks(
    acc: &mut Vec<Activity>,
    items: &[TaskInput],
    kbs: &dyn KnowledgeBase,
) -> Result<(), OptimizeError> {
    for item in items {
        let priority = match item.initial_priority_score {
            Some(p) => p,
            None => {
                let text = item.initial_priority_score_text.as_deref().unwrap_or("Medium");
                kbs.priority_weight(text).unwrap_or(5)
            }
        };
        let deadline = extract_deadline_minutes(item.deadline.as_deref())?;
        acc.push(Activity {
            id: item.task_id.clone(),
            activity_type: ActivityType::Task,
            duration: item.estimated_duration,
            priority,
            title: item.description.clone(),
            location: item.location_dependency.clone(),
            patient_id: item.patient_id.clone(),
            is_fixed: false,
            fixed_start: None,
            deadline,
        });
    }
    Ok(())
}

pub fn push_critical_alerts(acc: &mut Vec<Activity>, items: &[CriticalAlertInput]) {
    for item in items {
        acc.push(Activity {
            id: item.alert_id.clone(),
            activity_type: ActivityType::Alert,
            duration: item.estimated_time_to_address,
            priority: item.urgency_score.unwrap_or(10),
            title: format!("Alert: {}", item.summary),
            location: String::new(),
            patient_id: item.patient_id.clone(),
            is_fixed: false,
            fixed_start: None,
            deadline: None,
        });
    }
}

pub fn push_follow_ups(acc: &mut Vec<Activity>, items: &[FollowUpInput]) {
    for item in items {
        acc.push(Activity {
            id: item.follow_up_id.clone(),
            activity_type: ActivityType::FollowUp,
            duration: item.estimated_duration_for_follow_up_action,
            priority: item.initial_priority_score.unwrap_or(7),
            title: format!("Follow-up: {}", item.reason),
            location: String::new(),
            patient_id: item.patient_id.clone(),
            is_fixed: false,
            fixed_start: None,
            deadline: None,
        });
    }
}

pub fn push_break_times(
    acc: &mut Vec<Activity>,
    items: &[BreakTimeInput],
) -> Result<(), OptimizeError> {
    for item in items {
        let (is_fixed, start) = fixed_start(item.is_fixed, &item.start_time)?;
        let id = item
            .break_id
            .clone()
            .unwrap_or_else(|| format!("BREAK_{}", acc.len()));
        acc.push(Activity {
            id,
            activity_type: ActivityType::Break,
            duration: item.duration,
            priority: 5,
            title: format!(
                "Break: {}",
                item.reason.as_deref().unwrap_or("Scheduled Break")
            ),
            location: String::new(),
            patient_id: String::new(),
            is_fixed,
            fixed_start: start,
            deadline: None,
        });
    }
    Ok(())
}

pub fn push_care_plans(acc: &mut Vec<Activity>, items: &[CarePlanInput]) -> Result<(), OptimizeError> {
    for item in items {
        let id = item
            .care_plan_id
            .clone()
            .unwrap_or_else(|| format!("CP_{}", acc.len()));
        let deadline = extract_deadline_minutes(item.deadline.as_deref())?;
        acc.push(Activity {
            id,
            activity_type: ActivityType::CarePlan,
            duration: item.estimated_duration.unwrap_or(30),
            priority: item.priority.unwrap_or(8),
            title: format!(
                "Care Plan: {}",
                item.description.as_deref().unwrap_or("Patient Care")
            ),
            location: String::new(),
            patient_id: item.patient_id.clone(),
            is_fixed: false,
            fixed_start: None,
            deadline,
        });
    }
    Ok(())
}

pub fn push_admission_alerts(acc: &mut Vec<Activity>, items: &[AdmissionAlertInput]) {
    for item in items {
        let id = item
            .alert_id
            .clone()
            .unwrap_or_else(|| format!("ADM_{}", acc.len()));
        acc.push(Activity {
            id,
            activity_type: ActivityType::AdmissionAlert,
            duration: item.estimated_time_to_address.unwrap_or(15),
            priority: item.urgency_score.unwrap_or(9),
            title: format!(
                "Admission Alert: {}",
                item.summary.as_deref().unwrap_or("Patient Admission")
            ),
            location: String::new(),
            patient_id: item.patient_id.clone(),
            is_fixed: false,
            fixed_start: None,
            deadline: None,
        });
    }
}

pub fn push_ed_visits(acc: &mut Vec<Activity>, items: &[EdVisitInput]) -> Result<(), OptimizeError> {
    for item in items {
        let id = item
            .visit_id
            .clone()
            .unwrap_or_else(|| format!("ED_{}", acc.len()));
        let deadline = extract_deadline_minutes(item.deadline.as_deref())?;
        acc.push(Activity {
            id,
            activity_type: ActivityType::EdVisit,
            duration: item.estimated_follow_up_duration.unwrap_or(20),
            priority: item.priority.unwrap_or(8),
            title: format!(
                "ED Visit Follow-up: {}",
                item.reason.as_deref().unwrap_or("Emergency Department Visit")
            ),
            location: String::new(),
            patient_id: item.patient_id.clone(),
            is_fixed: false,
            fixed_start: None,
            deadline,
        });
    }
    Ok(())
}

pub fn push_predefined_appointments(
    acc: &mut Vec<Activity>,
    items: &[PredefinedAppointmentInput],
) -> Result<(), OptimizeError> {
    for item in items {
        let id = item
            .appointment_id
            .clone()
            .unwrap_or_else(|| format!("PA_{}", acc.len()));
        let (is_fixed, start) = fixed_start(item.is_fixed, &item.start_time)?;
        acc.push(Activity {
            id,
            activity_type: ActivityType::PredefinedAppointment,
            duration: item.duration,
            priority: item.priority.unwrap_or(6),
            title: item.title.clone(),
            location: item.location.clone(),
            patient_id: item.patient_id.clone(),
            is_fixed,
            fixed_start: start,
            deadline: None,
        });
    }
    Ok(())
}

pub fn push_interventions(
    acc: &mut Vec<Activity>,
    items: &[InterventionInput],
) -> Result<(), OptimizeError> {
    for item in items {
        let id = item
            .intervention_id
            .clone()
            .unwrap_or_else(|| format!("INT_{}", acc.len()));
        let deadline = extract_deadline_minutes(item.deadline.as_deref())?;
        acc.push(Activity {
            id,
            activity_type: ActivityType::Intervention,
            duration: item.estimated_duration.unwrap_or(25),
            priority: item.priority.unwrap_or(7),
            title: format!(
                "Intervention: {}",
                item.description.as_deref().unwrap_or("Patient Intervention")
            ),
            location: String::new(),
            patient_id: item.patient_id.clone(),
            is_fixed: false,
            fixed_start: None,
            deadline,
        });
    }
    Ok(())
}

pub fn push_communications(
    acc: &mut Vec<Activity>,
    items: &[CommunicationInput],
) -> Result<(), OptimizeError> {
    for item in items {
        let id = item
            .communication_id
            .clone()
            .unwrap_or_else(|| format!("COMM_{}", acc.len()));
        let deadline = extract_deadline_minutes(item.deadline.as_deref())?;
        acc.push(Activity {
            id,
            activity_type: ActivityType::Communication,
            duration: item.estimated_duration.unwrap_or(15),
            priority: item.priority.unwrap_or(6),
            title: format!(
                "Communication: {}",
                item.subject.as_deref().unwrap_or("Patient Communication")
            ),
            location: String::new(),
            patient_id: item.patient_id.clone(),
            is_fixed: false,
            fixed_start: None,
            deadline,
        });
    }
    Ok(())
}

pub fn push_vital_alerts(acc: &mut Vec<Activity>, items: &[VitalAlertInput]) {
    for item in items {
        let id = item
            .alert_id
            .clone()
            .unwrap_or_else(|| format!("VITAL_{}", acc.len()));
        acc.push(Activity {
            id,
            activity_type: ActivityType::VitalAlert,
            duration: item.estimated_time_to_address.unwrap_or(20),
            priority: item.urgency_score.unwrap_or(9),
            title: format!(
                "Vital Alert: {}",
                item.summary.as_deref().unwrap_or("Patient Vitals Alert")
            ),
            location: String::new(),
            patient_id: item.patient_id.clone(),
            is_fixed: false,
            fixed_start: None,
            deadline: None,
        });
    }
}
