//! The single pure entry point tying the four pipeline stages together.
//!
//! `optimize` never returns `Result::Err` — every input, well-formed or not,
//! produces an [`OptimizationResponse`]. It takes no global state and has no
//! interior mutability, so it is `Send` and safe to call concurrently from
//! multiple threads with no synchronization.

use std::time::Duration;

use tracing::instrument;

use crate::activity::{BlockedInterval, LunchBreak};
use crate::error::OptimizeError;
use crate::knowledge_base::KnowledgeBase;
use crate::policy::SchedulePolicy;
use crate::request::OptimizationRequest;
use crate::response::{OptimizationResponse, UnachievableItem};
use crate::time::time_to_minutes;
use crate::{builder, extract, normalize, objective, solver};

const SOLVER_TIME_BUDGET: Duration = Duration::from_secs(30);

/// Runs the full normalize → build → compose → solve → extract pipeline for
/// `request`.
#[instrument(skip_all, fields(nurse_id = %request.nurse_id))]
pub fn optimize(request: OptimizationRequest, kbs: &dyn KnowledgeBase) -> OptimizationResponse {
    match run(&request, kbs) {
        Ok(response) => response,
        Err(err) => fatal_response(&request, err),
    }
}

fn run(request: &OptimizationRequest, kbs: &dyn KnowledgeBase) -> Result<OptimizationResponse, OptimizeError> {
    let schedule_date = chrono::NaiveDate::parse_from_str(&request.schedule_date, "%Y-%m-%d")
        .map_err(|_| OptimizeError::InvalidScheduleDate(request.schedule_date.clone()))?
        .format("%Y-%m-%d")
        .to_string();

    let policy = request
        .nurse_constraints
        .patient_preference
        .as_deref()
        .map(SchedulePolicy::parse_or_balanced)
        .unwrap_or_default();

    let activities = normalize::normalize(&request.work_items, policy, kbs)?;

    if activities.is_empty() {
        return Ok(OptimizationResponse {
            nurse_id: request.nurse_id.clone(),
            schedule_date,
            optimized_schedule: Vec::new(),
            unachievable_items: Vec::new(),
            optimization_score: 0.0,
            warnings: vec!["No activities to schedule".to_string()],
        });
    }

    let shift_start = time_to_minutes(&request.nurse_constraints.shift_start_time)?;
    let shift_end = time_to_minutes(&request.nurse_constraints.shift_end_time)?;
    let lunch_pref = time_to_minutes(&request.nurse_constraints.lunch_break_preferred_start_time)?;
    let lunch = LunchBreak {
        duration: request.nurse_constraints.lunch_break_duration,
        preferred_start: lunch_pref,
    };

    let mut blocked = Vec::with_capacity(request.nurse_constraints.blocked_out_times.len());
    for entry in &request.nurse_constraints.blocked_out_times {
        let start = time_to_minutes(&entry.start)?;
        let end = time_to_minutes(&entry.end)?;
        let reason = if entry.reason.is_empty() { None } else { Some(entry.reason.clone()) };
        blocked.push(BlockedInterval { start, end, reason });
    }

    let model = builder::build_model(&activities, lunch, blocked.clone(), shift_start, shift_end);
    let terms = objective::terms_for_policy(policy);
    let result = solver::solve(&model, &activities, &terms, lunch_pref, SOLVER_TIME_BUDGET);
    let extracted = extract::extract(&activities, lunch, &blocked, &result);

    Ok(OptimizationResponse {
        nurse_id: request.nurse_id.clone(),
        schedule_date,
        optimized_schedule: extracted.schedule,
        unachievable_items: extracted.unachievable,
        optimization_score: extracted.score,
        warnings: extracted.warnings,
    })
}

fn fatal_response(request: &OptimizationRequest, err: OptimizeError) -> OptimizationResponse {
    let message = err.to_string();
    tracing::warn!(error = %message, "optimize failed fatally");
    OptimizationResponse {
        nurse_id: request.nurse_id.clone(),
        schedule_date: request.schedule_date.clone(),
        optimized_schedule: Vec::new(),
        unachievable_items: vec![UnachievableItem {
            item_id: "ERROR".to_string(),
            item_type: "system".to_string(),
            reason: message.clone(),
        }],
        optimization_score: 0.0,
        warnings: vec![message],
    }
}
