//! Stage 4: the scheduling search.
//!
//! No general-purpose constraint-solver binding is available in this crate's
//! dependency stack, so this module implements an exact branch-and-bound
//! search over start-time assignments: [`candidate`] wraps a not-yet-placed
//! variable, [`metrics`] computes its start-time candidates, [`ordering`]
//! picks which variable to branch on next, and [`engine`] drives the search
//! loop.

pub mod candidate;
pub mod engine;
pub mod metrics;
pub mod ordering;

pub use engine::{solve, SolveResult, SolveStatus};
