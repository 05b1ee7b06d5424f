//! Candidate start-time computation.
//!
//! Branch-and-bound needs the *full set* of profile-point start candidates
//! within a variable's domain — its own `lo`, plus the end of every
//! already-placed interval that falls inside the domain — rather than just
//! the earliest fit, since any of them may lead to the optimal assignment.
//!
//! That set is sufficient for a variable whose only concern is feasibility:
//! an optimal single-resource placement never needs a start that is neither
//! the domain minimum nor abutting the end of some other placed interval,
//! since any other start can be slid earlier without creating a new overlap
//! or changing the objective. It is NOT sufficient for a variable with a
//! target-seeking term in the objective (the lunch break, minimizing
//! distance to a preferred start): the preferred start itself, and the start
//! that lets it abut the left side of a later placed interval, can both be
//! interior points that are neither the domain minimum nor the end of
//! anything already placed. `target` carries that preferred minute in when
//! present, so those points are added to the candidate set too.

use crate::builder::ActivityVar;
use crate::schedule::Schedule;
use crate::time::Minutes;

/// Candidate start minutes for `var`, given the intervals already placed in
/// `schedule`: the domain minimum, the end time of every placed interval
/// lying in `[var.lo, var.hi]`, and — when `var` has a target-seeking
/// objective term — `target` itself (clamped into the domain) plus the start
/// of every placed interval minus `var.duration` (the latest `var` can start
/// and still abut it on the left). Sorted and deduplicated.
pub fn candidate_starts(var: &ActivityVar, schedule: &Schedule, target: Option<Minutes>) -> Vec<Minutes> {
    let mut starts = vec![var.lo];
    for (_, interval) in schedule.iter() {
        let end = interval.end();
        if end >= var.lo && end <= var.hi {
            starts.push(end);
        }
    }

    if let Some(target) = target {
        let hi = var.hi.max(var.lo);
        starts.push(target.clamp(var.lo, hi));
        for (_, interval) in schedule.iter() {
            let left_abutting = interval.start() - var.duration;
            if left_abutting >= var.lo && left_abutting <= var.hi {
                starts.push(left_abutting);
            }
        }
    }

    starts.sort_unstable();
    starts.dedup();
    starts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::TimeInterval;

    #[test]
    fn includes_domain_minimum() {
        let var = ActivityVar {
            id: "A1".to_string(),
            lo: 480,
            hi: 600,
            duration: 30,
            deadline: None,
            is_fixed: false,
        };
        let schedule = Schedule::new();
        assert_eq!(candidate_starts(&var, &schedule, None), vec![480]);
    }

    #[test]
    fn includes_placed_ends_within_domain() {
        let var = ActivityVar {
            id: "A1".to_string(),
            lo: 480,
            hi: 600,
            duration: 30,
            deadline: None,
            is_fixed: false,
        };
        let mut schedule = Schedule::new();
        schedule.add("x", TimeInterval::new(500, 540)).unwrap();
        schedule.add("y", TimeInterval::new(700, 720)).unwrap();
        assert_eq!(candidate_starts(&var, &schedule, None), vec![480, 540]);
    }

    #[test]
    fn target_adds_clamped_preferred_start_and_left_abutting_points() {
        // Fixed activities at [600,720) and [800,900) leave a free gap of
        // [720,800) for a 30-minute lunch; 750 (the preferred start) is
        // reachable only because it is carried in as `target`.
        let var = ActivityVar {
            id: crate::builder::LUNCH_ID.to_string(),
            lo: 480,
            hi: 1020,
            duration: 30,
            deadline: None,
            is_fixed: false,
        };
        let mut schedule = Schedule::new();
        schedule.add("x", TimeInterval::new(600, 720)).unwrap();
        schedule.add("y", TimeInterval::new(800, 900)).unwrap();
        let starts = candidate_starts(&var, &schedule, Some(750));
        assert!(starts.contains(&750), "{starts:?} should contain the clamped target 750");
        assert!(starts.contains(&770), "{starts:?} should contain 800-30=770, left-abutting the second interval");
    }

    #[test]
    fn target_outside_domain_is_clamped() {
        let var = ActivityVar {
            id: crate::builder::LUNCH_ID.to_string(),
            lo: 480,
            hi: 600,
            duration: 30,
            deadline: None,
            is_fixed: false,
        };
        let schedule = Schedule::new();
        let starts = candidate_starts(&var, &schedule, Some(750));
        assert!(starts.contains(&600));
    }
}
