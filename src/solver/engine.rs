//! Branch-and-bound search loop.
//!
//! Repeatedly picks the most constrained not-yet-placed activity and tries
//! each of its candidate start times in turn. A committed placement that
//! leads to a dead end is undone and the next candidate start is tried. The
//! whole search is bounded by a wall-clock deadline rather than running to
//! a single constructive pass.

use std::collections::HashMap;
use std::time::Instant;

use tracing::{debug, warn};

use crate::activity::Activity;
use crate::builder::{ActivityVar, Model, LUNCH_ID};
use crate::interval::TimeInterval;
use crate::objective::{self, ObjectiveTerm};
use crate::schedule::Schedule;
use crate::time::Minutes;
use crate::Id;

use super::candidate::Candidate;
use super::metrics::candidate_starts;
use super::ordering::pick_most_constrained;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// The search tree was exhausted; the best assignment found (if any) is
    /// provably optimal.
    Optimal,
    /// The wall-clock budget elapsed before the tree was exhausted, but at
    /// least one complete assignment was found.
    Feasible,
    /// No complete assignment exists.
    Infeasible,
    /// The wall-clock budget elapsed before any complete assignment was
    /// found. Handled identically to `Infeasible` downstream.
    Unknown,
}

impl SolveStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

pub struct SolveResult {
    pub status: SolveStatus,
    pub starts: HashMap<Id, Minutes>,
    pub objective: i64,
}

struct Search<'a> {
    activities: &'a [Activity],
    terms: &'a [ObjectiveTerm],
    lunch_pref: Minutes,
    deadline: Instant,
    best: Option<(HashMap<Id, Minutes>, i64)>,
    timed_out: bool,
}

impl<'a> Search<'a> {
    fn objective_lower_bound(&self, assignment: &HashMap<Id, Minutes>) -> i64 {
        let lunch_start = assignment.get(LUNCH_ID).copied().unwrap_or(self.lunch_pref);
        objective::evaluate(self.terms, self.activities, assignment, lunch_start, self.lunch_pref)
    }

    fn run(&mut self, vars: &[ActivityVar], schedule: Schedule, assignment: HashMap<Id, Minutes>) {
        if Instant::now() >= self.deadline {
            self.timed_out = true;
            return;
        }

        let remaining: Vec<&ActivityVar> =
            vars.iter().filter(|v| !assignment.contains_key(&v.id)).collect();

        if remaining.is_empty() {
            let lunch_start = assignment[LUNCH_ID];
            let obj = objective::evaluate(
                self.terms,
                self.activities,
                &assignment,
                lunch_start,
                self.lunch_pref,
            );
            if self.best.as_ref().map_or(true, |(_, best)| obj < *best) {
                self.best = Some((assignment, obj));
            }
            return;
        }

        let lower_bound = self.objective_lower_bound(&assignment);
        if let Some((_, best)) = &self.best {
            if lower_bound >= *best {
                return;
            }
        }

        let candidates: Vec<Candidate> = remaining.iter().map(|v| Candidate::new(v)).collect();
        let Some(next) = pick_most_constrained(&candidates) else {
            return;
        };
        let var = next.var;
        let target = if var.id == LUNCH_ID { Some(self.lunch_pref) } else { None };

        for start in candidate_starts(var, &schedule, target) {
            if start < var.lo || start > var.hi {
                continue;
            }
            if let Some(deadline) = var.deadline {
                if start + var.duration > deadline {
                    continue;
                }
            }
            let interval = TimeInterval::new(start, start + var.duration);
            if !schedule.is_free(&interval) {
                continue;
            }

            let mut next_schedule = clone_schedule(&schedule);
            next_schedule.add(var.id.clone(), interval).expect("checked free above");
            let mut next_assignment = assignment.clone();
            next_assignment.insert(var.id.clone(), start);

            self.run(vars, next_schedule, next_assignment);

            if Instant::now() >= self.deadline {
                self.timed_out = true;
                return;
            }
        }
    }
}

fn clone_schedule(schedule: &Schedule) -> Schedule {
    let mut clone = Schedule::new();
    for (id, interval) in schedule.iter() {
        clone.add(id.clone(), *interval).expect("source schedule is already non-overlapping");
    }
    clone
}

/// Runs the branch-and-bound search over `model`'s variables, minimizing the
/// objective built from `terms`, bounded by `time_budget`.
pub fn solve(
    model: &Model,
    activities: &[Activity],
    terms: &[ObjectiveTerm],
    lunch_pref: Minutes,
    time_budget: std::time::Duration,
) -> SolveResult {
    let mut schedule = Schedule::new();
    for (i, blocked) in model.blocked.iter().enumerate() {
        let interval = TimeInterval::new(blocked.start, blocked.end);
        if schedule.add(format!("BLOCK_{i}"), interval).is_err() {
            warn!("blocked intervals overlap each other; model is infeasible");
            return SolveResult {
                status: SolveStatus::Infeasible,
                starts: HashMap::new(),
                objective: 0,
            };
        }
    }

    let deadline = Instant::now() + time_budget;
    let mut search = Search {
        activities,
        terms,
        lunch_pref,
        deadline,
        best: None,
        timed_out: false,
    };
    search.run(&model.vars, schedule, HashMap::new());

    match search.best {
        Some((starts, objective)) => {
            let status = if search.timed_out {
                SolveStatus::Feasible
            } else {
                SolveStatus::Optimal
            };
            debug!(?status, objective, "solver found an assignment");
            SolveResult { status, starts, objective }
        }
        None => {
            let status = if search.timed_out {
                SolveStatus::Unknown
            } else {
                SolveStatus::Infeasible
            };
            warn!(?status, "solver found no feasible assignment");
            SolveResult { status, starts: HashMap::new(), objective: 0 }
        }
    }
}
