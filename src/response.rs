//! Wire-level response types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub slot_start_time: String,
    pub slot_end_time: String,
    pub activity_type: String,
    pub title: String,
    pub details: String,
    pub related_item_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnachievableItem {
    pub item_id: String,
    pub item_type: String,
    pub reason: String,
}

/// The `optimize` response. Always produced — see
/// [`crate::error::OptimizeError`] for why `optimize` never returns
/// `Result::Err`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResponse {
    pub nurse_id: String,
    pub schedule_date: String,
    pub optimized_schedule: Vec<ScheduleItem>,
    pub unachievable_items: Vec<UnachievableItem>,
    pub optimization_score: f64,
    pub warnings: Vec<String>,
}
