//! Wire-level request types. Optional fields carry their defaults here via
//! `#[serde(default)]` plus a `Default` impl, or an explicit `Option`
//! resolved in [`crate::normalize`] when the default depends on
//! knowledge-base state (the `tasks` category's priority fallback).

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentInput {
    pub item_id: String,
    #[serde(default)]
    pub patient_id: String,
    pub title: String,
    pub start_time: Option<String>,
    pub estimated_duration: i64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub is_fixed_time: bool,
    pub initial_priority_score: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventInput {
    pub item_id: String,
    pub title: String,
    pub start_time: Option<String>,
    pub estimated_duration: i64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub is_fixed_time: bool,
    pub initial_priority_score: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub task_id: String,
    #[serde(default)]
    pub patient_id: String,
    pub description: String,
    pub estimated_duration: i64,
    pub initial_priority_score: Option<i64>,
    pub initial_priority_score_text: Option<String>,
    pub deadline: Option<String>,
    #[serde(default)]
    pub location_dependency: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalAlertInput {
    pub alert_id: String,
    #[serde(default)]
    pub patient_id: String,
    pub summary: String,
    pub estimated_time_to_address: i64,
    pub urgency_score: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpInput {
    pub follow_up_id: String,
    #[serde(default)]
    pub patient_id: String,
    pub reason: String,
    pub estimated_duration_for_follow_up_action: i64,
    pub initial_priority_score: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakTimeInput {
    pub break_id: Option<String>,
    pub duration: i64,
    pub reason: Option<String>,
    #[serde(default)]
    pub is_fixed: bool,
    pub start_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlanInput {
    pub care_plan_id: Option<String>,
    #[serde(default)]
    pub patient_id: String,
    pub description: Option<String>,
    pub estimated_duration: Option<i64>,
    pub priority: Option<i64>,
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionAlertInput {
    pub alert_id: Option<String>,
    #[serde(default)]
    pub patient_id: String,
    pub summary: Option<String>,
    pub estimated_time_to_address: Option<i64>,
    pub urgency_score: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdVisitInput {
    pub visit_id: Option<String>,
    #[serde(default)]
    pub patient_id: String,
    pub reason: Option<String>,
    pub estimated_follow_up_duration: Option<i64>,
    pub priority: Option<i64>,
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredefinedAppointmentInput {
    pub appointment_id: Option<String>,
    #[serde(default)]
    pub patient_id: String,
    pub title: String,
    pub duration: i64,
    pub priority: Option<i64>,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_true")]
    pub is_fixed: bool,
    pub start_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterventionInput {
    pub intervention_id: Option<String>,
    #[serde(default)]
    pub patient_id: String,
    pub description: Option<String>,
    pub estimated_duration: Option<i64>,
    pub priority: Option<i64>,
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationInput {
    pub communication_id: Option<String>,
    #[serde(default)]
    pub patient_id: String,
    pub subject: Option<String>,
    pub estimated_duration: Option<i64>,
    pub priority: Option<i64>,
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalAlertInput {
    pub alert_id: Option<String>,
    #[serde(default)]
    pub patient_id: String,
    pub summary: Option<String>,
    pub estimated_time_to_address: Option<i64>,
    pub urgency_score: Option<i64>,
}

/// The thirteen input work-item categories. Any list may be empty or absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct WorkItems {
    pub appointments: Vec<AppointmentInput>,
    pub calendar_events: Vec<CalendarEventInput>,
    pub tasks: Vec<TaskInput>,
    pub critical_alerts_to_address: Vec<CriticalAlertInput>,
    pub follow_ups: Vec<FollowUpInput>,
    pub break_times: Vec<BreakTimeInput>,
    pub care_plans: Vec<CarePlanInput>,
    pub patient_admission_alerts: Vec<AdmissionAlertInput>,
    pub patient_ed_visits: Vec<EdVisitInput>,
    pub predefined_appointments: Vec<PredefinedAppointmentInput>,
    pub interventions: Vec<InterventionInput>,
    pub patient_communications: Vec<CommunicationInput>,
    pub patient_vital_alerts: Vec<VitalAlertInput>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedTimeInput {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NurseConstraintsInput {
    pub shift_start_time: String,
    pub shift_end_time: String,
    pub lunch_break_preferred_start_time: String,
    pub lunch_break_duration: i64,
    #[serde(default)]
    pub blocked_out_times: Vec<BlockedTimeInput>,
    #[serde(default)]
    pub patient_preference: Option<String>,
}

/// The top-level `optimize` request.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    pub nurse_id: String,
    pub schedule_date: String,
    #[serde(default)]
    pub work_items: WorkItems,
    pub nurse_constraints: NurseConstraintsInput,
}
