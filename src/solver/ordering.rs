//! Branching order: most constrained not-yet-placed variable first.
//!
//! The single ordering key is domain width (the classic most-constrained-
//! variable heuristic), tie-broken by id for determinism.

use super::candidate::Candidate;

/// Picks the narrowest-domain candidate, ties broken by id. Returns `None`
/// if `candidates` is empty.
pub fn pick_most_constrained<'a>(candidates: &[Candidate<'a>]) -> Option<Candidate<'a>> {
    candidates
        .iter()
        .min_by(|a, b| {
            a.domain_width()
                .cmp(&b.domain_width())
                .then_with(|| a.var.id.cmp(&b.var.id))
        })
        .copied()
}
