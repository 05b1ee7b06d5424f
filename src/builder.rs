//! Stage 2: turns each activity, the lunch break, and the blocked intervals
//! into a start-time domain for the solver.
//!
//! Each variable's domain is computed directly as closed-form integer
//! arithmetic rather than handed to a constraint-solver library.

use tracing::debug;

use crate::activity::{Activity, BlockedInterval, LunchBreak};
use crate::time::Minutes;
use crate::Id;

/// `LUNCH`'s synthesized id in [`Model::vars`] and every downstream map keyed
/// by activity id.
pub const LUNCH_ID: &str = "LUNCH";

/// One activity's (or the lunch break's) start-time domain.
#[derive(Debug, Clone)]
pub struct ActivityVar {
    pub id: Id,
    pub lo: Minutes,
    pub hi: Minutes,
    pub duration: Minutes,
    pub deadline: Option<Minutes>,
    pub is_fixed: bool,
}

impl ActivityVar {
    /// Domain width, used by the solver to pick the most constrained
    /// not-yet-placed variable first.
    pub fn domain_width(&self) -> Minutes {
        self.hi - self.lo
    }
}

/// The constraint model handed to the solver: every variable's domain plus
/// the immovable blocked intervals.
#[derive(Debug, Clone)]
pub struct Model {
    pub vars: Vec<ActivityVar>,
    pub blocked: Vec<BlockedInterval>,
    pub shift_start: Minutes,
    pub shift_end: Minutes,
}

fn activity_var(activity: &Activity, shift_start: Minutes, shift_end: Minutes) -> ActivityVar {
    let d = activity.duration;
    let mut lo = shift_start;
    let mut hi = (shift_end - d).max(shift_start);

    if activity.is_fixed {
        let fixed = activity.fixed_start.expect("is_fixed implies fixed_start");
        lo = fixed;
        hi = fixed;
    }

    if let Some(deadline) = activity.deadline {
        hi = hi.min(deadline - d);
    }

    if lo > hi {
        hi = lo;
    }

    ActivityVar {
        id: activity.id.clone(),
        lo,
        hi,
        duration: d,
        deadline: activity.deadline,
        is_fixed: activity.is_fixed,
    }
}

fn lunch_var(lunch: LunchBreak, shift_start: Minutes, shift_end: Minutes) -> ActivityVar {
    let d = lunch.duration;
    let lo = shift_start;
    let hi = (shift_end - d).max(shift_start);
    ActivityVar {
        id: LUNCH_ID.to_string(),
        lo,
        hi,
        duration: d,
        deadline: None,
        is_fixed: false,
    }
}

/// Builds the model: one [`ActivityVar`] per activity, one for the lunch
/// break, and the blocked intervals filtered to positive duration.
/// Zero-length blocks are silently dropped.
pub fn build_model(
    activities: &[Activity],
    lunch: LunchBreak,
    blocked: Vec<BlockedInterval>,
    shift_start: Minutes,
    shift_end: Minutes,
) -> Model {
    let mut vars: Vec<ActivityVar> = activities
        .iter()
        .map(|a| activity_var(a, shift_start, shift_end))
        .collect();
    vars.push(lunch_var(lunch, shift_start, shift_end));

    let blocked: Vec<BlockedInterval> = blocked.into_iter().filter(|b| b.end > b.start).collect();

    debug!(
        activity_count = vars.len(),
        blocked_count = blocked.len(),
        "built model"
    );

    Model {
        vars,
        blocked,
        shift_start,
        shift_end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityType;

    fn activity(id: &str, duration: Minutes) -> Activity {
        Activity {
            id: id.to_string(),
            activity_type: ActivityType::Task,
            duration,
            priority: 5,
            title: String::new(),
            location: String::new(),
            patient_id: String::new(),
            is_fixed: false,
            fixed_start: None,
            deadline: None,
        }
    }

    #[test]
    fn default_domain_spans_whole_shift_minus_duration() {
        let a = activity("A1", 30);
        let v = activity_var(&a, 480, 1020);
        assert_eq!(v.lo, 480);
        assert_eq!(v.hi, 990);
    }

    #[test]
    fn fixed_activity_has_singleton_domain() {
        let mut a = activity("A1", 30);
        a.is_fixed = true;
        a.fixed_start = Some(540);
        let v = activity_var(&a, 480, 1020);
        assert_eq!(v.lo, 540);
        assert_eq!(v.hi, 540);
    }

    #[test]
    fn deadline_clamps_hi() {
        let mut a = activity("A1", 60);
        a.deadline = Some(510);
        let v = activity_var(&a, 480, 1020);
        assert_eq!(v.hi, 450.max(480));
    }

    #[test]
    fn empty_domain_collapses_hi_to_lo() {
        let mut a = activity("A1", 60);
        a.deadline = Some(500);
        let v = activity_var(&a, 480, 1020);
        assert_eq!(v.lo, 480);
        assert_eq!(v.hi, 480);
    }

    #[test]
    fn zero_length_blocked_intervals_are_dropped() {
        let model = build_model(
            &[],
            LunchBreak {
                duration: 30,
                preferred_start: 750,
            },
            vec![
                BlockedInterval { start: 600, end: 600, reason: None },
                BlockedInterval { start: 600, end: 630, reason: None },
            ],
            480,
            1020,
        );
        assert_eq!(model.blocked.len(), 1);
    }
}
