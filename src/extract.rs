//! Stage 5: turns the solver's result (or its absence) into the response's
//! `optimizedSchedule`/`unachievableItems`/`warnings`.

use tracing::{debug, warn};

use crate::activity::{Activity, BlockedInterval, LunchBreak};
use crate::response::{ScheduleItem, UnachievableItem};
use crate::solver::SolveResult;
use crate::time::minutes_to_time_str;

const LUNCH_DRIFT_WARNING: &str = "Lunch break scheduled more than 15 minutes from preferred time.";
const INFEASIBLE_WARNING: &str = "No feasible schedule could be generated with the given constraints.";

pub struct Extracted {
    pub schedule: Vec<ScheduleItem>,
    pub unachievable: Vec<UnachievableItem>,
    pub score: f64,
    pub warnings: Vec<String>,
}

fn details(location: &str, patient_id: &str) -> String {
    let loc = if location.is_empty() { "N/A" } else { location };
    let pid = if patient_id.is_empty() { "N/A" } else { patient_id };
    format!("Location: {loc}, Patient: {pid}")
}

pub fn extract(
    activities: &[Activity],
    lunch: LunchBreak,
    blocked: &[BlockedInterval],
    result: &SolveResult,
) -> Extracted {
    if !result.status.is_success() {
        let status = result.status;
        warn!(?status, "no feasible assignment found");
        let unachievable = activities
            .iter()
            .map(|a| UnachievableItem {
                item_id: a.id.clone(),
                item_type: a.activity_type.as_str().to_string(),
                reason: "No feasible schedule found.".to_string(),
            })
            .collect();
        return Extracted {
            schedule: Vec::new(),
            unachievable,
            score: 0.0,
            warnings: vec![INFEASIBLE_WARNING.to_string()],
        };
    }

    let mut dated: Vec<(i64, ScheduleItem)> = Vec::with_capacity(activities.len() + blocked.len() + 1);

    for activity in activities {
        let start = result.starts[&activity.id];
        dated.push((
            start,
            ScheduleItem {
                slot_start_time: minutes_to_time_str(start),
                slot_end_time: minutes_to_time_str(start + activity.duration),
                activity_type: activity.activity_type.as_str().to_string(),
                title: activity.title.clone(),
                details: details(&activity.location, &activity.patient_id),
                related_item_id: activity.id.clone(),
            },
        ));
    }

    let lunch_start = result.starts[crate::builder::LUNCH_ID];
    dated.push((
        lunch_start,
        ScheduleItem {
            slot_start_time: minutes_to_time_str(lunch_start),
            slot_end_time: minutes_to_time_str(lunch_start + lunch.duration),
            activity_type: "Break".to_string(),
            title: "Lunch Break".to_string(),
            details: details("", ""),
            related_item_id: "LUNCH".to_string(),
        },
    ));

    for (i, block) in blocked.iter().enumerate() {
        dated.push((
            block.start,
            ScheduleItem {
                slot_start_time: minutes_to_time_str(block.start),
                slot_end_time: minutes_to_time_str(block.end),
                activity_type: "Blocked".to_string(),
                title: block.reason.clone().unwrap_or_else(|| "Blocked Time".to_string()),
                details: details("", ""),
                related_item_id: format!("BLOCK_{i}"),
            },
        ));
    }

    dated.sort_by_key(|(start, _)| *start);
    let schedule: Vec<ScheduleItem> = dated.into_iter().map(|(_, item)| item).collect();

    let mut warnings = Vec::new();
    let drift = (lunch_start - lunch.preferred_start).abs();
    if drift > 15 {
        warnings.push(LUNCH_DRIFT_WARNING.to_string());
    }

    debug!(objective = result.objective, "extracted successful schedule");

    Extracted {
        schedule,
        unachievable: Vec::new(),
        score: result.objective as f64,
        warnings,
    }
}
