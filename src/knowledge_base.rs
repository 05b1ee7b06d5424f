//! Typed configuration injected into the optimizer, exposing only the rules
//! the core actually consults.
//!
//! The core consults exactly one rule: `priority_weights`, used by the
//! `tasks` category to resolve `initialPriorityScore_text` when
//! `initialPriorityScore` is absent.

/// Read-only, shareable configuration injected into [`crate::optimize::optimize`].
///
/// A [`KnowledgeBase`] implementation is safe to share across concurrent
/// requests: the core never mutates it and only ever reads `priority_weight`.
pub trait KnowledgeBase {
    /// Numeric weight for a textual priority level (`"High"`, `"Medium"`,
    /// `"Low"`, ...), or `None` if the level is not recognized.
    fn priority_weight(&self, level: &str) -> Option<i64>;
}

/// Default knowledge base with sensible constants for local testing.
///
/// The fields beyond `priority_weights` are declared but never consulted by
/// the core — they describe rules a richer knowledge base might hold (task
/// durations, alert response times, travel speed for routing) but this
/// crate's scheduling core never reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultKnowledgeBase {
    pub priority_weights: [(&'static str, i64); 3],
    /// Declared, never consulted by the core.
    pub task_default_duration: i64,
    /// Declared, never consulted by the core.
    pub alert_default_address_time: i64,
    /// Declared, never consulted by the core: travel routing is out of scope.
    pub travel_speed_mph: i64,
}

impl Default for DefaultKnowledgeBase {
    fn default() -> Self {
        Self {
            priority_weights: [("High", 10), ("Medium", 5), ("Low", 1)],
            task_default_duration: 30,
            alert_default_address_time: 15,
            travel_speed_mph: 20,
        }
    }
}

impl KnowledgeBase for DefaultKnowledgeBase {
    fn priority_weight(&self, level: &str) -> Option<i64> {
        self.priority_weights
            .iter()
            .find(|(name, _)| *name == level)
            .map(|(_, weight)| *weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_levels() {
        let kbs = DefaultKnowledgeBase::default();
        assert_eq!(kbs.priority_weight("High"), Some(10));
        assert_eq!(kbs.priority_weight("Medium"), Some(5));
        assert_eq!(kbs.priority_weight("Low"), Some(1));
    }

    #[test]
    fn unknown_level_is_none() {
        let kbs = DefaultKnowledgeBase::default();
        assert_eq!(kbs.priority_weight("Urgent"), None);
    }
}
