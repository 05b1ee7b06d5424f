//! Uniform scheduling record produced by [`crate::normalize`] from any of
//! the twelve input work-item categories, plus the two other value types
//! that occupy the timeline: [`BlockedInterval`] and [`LunchBreak`].

use crate::time::Minutes;
use crate::Id;

/// Tag identifying which of the twelve input categories an [`Activity`]
/// came from. Also doubles as the wire-level `activityType` for scheduled
/// items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityType {
    Appointment,
    Meeting,
    Task,
    Alert,
    FollowUp,
    Break,
    CarePlan,
    AdmissionAlert,
    EdVisit,
    PredefinedAppointment,
    Intervention,
    Communication,
    VitalAlert,
}

impl ActivityType {
    /// Serialized `activityType` string used on [`crate::response::ScheduleItem`].
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Appointment => "appointment",
            Self::Meeting => "meeting",
            Self::Task => "task",
            Self::Alert => "alert",
            Self::FollowUp => "follow_up",
            Self::Break => "break",
            Self::CarePlan => "care_plan",
            Self::AdmissionAlert => "admission_alert",
            Self::EdVisit => "ed_visit",
            Self::PredefinedAppointment => "predefined_appointment",
            Self::Intervention => "intervention",
            Self::Communication => "communication",
            Self::VitalAlert => "vital_alert",
        }
    }

    /// True for the three types boosted by [`crate::policy::SchedulePolicy::CriticalPatientFocused`]
    /// and summed by the `critical_penalty` objective term.
    pub const fn is_critical_patient_type(&self) -> bool {
        matches!(self, Self::Alert | Self::VitalAlert | Self::AdmissionAlert)
    }
}

/// A uniform scheduling record, the output of normalization.
///
/// Invariants upheld by [`crate::normalize`] before this type is ever built:
/// `duration >= 1`; `fixed_start.is_some() == is_fixed`; `id` is unique
/// within the flattened list for the request.
#[derive(Debug, Clone)]
pub struct Activity {
    pub id: Id,
    pub activity_type: ActivityType,
    pub duration: Minutes,
    pub priority: i64,
    pub title: String,
    pub location: String,
    pub patient_id: String,
    pub is_fixed: bool,
    pub fixed_start: Option<Minutes>,
    pub deadline: Option<Minutes>,
}

/// An immovable occupant of the timeline from `nurseConstraints.blockedOutTimes`.
/// Not an [`Activity`] — it never competes for a domain, it only blocks one.
#[derive(Debug, Clone)]
pub struct BlockedInterval {
    pub start: Minutes,
    pub end: Minutes,
    pub reason: Option<String>,
}

/// The schedulable lunch interval: fixed duration, soft-preferred start.
#[derive(Debug, Clone, Copy)]
pub struct LunchBreak {
    pub duration: Minutes,
    pub preferred_start: Minutes,
}
