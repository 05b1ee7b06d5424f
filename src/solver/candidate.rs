//! Branch candidate: a not-yet-placed variable plus the metric the engine
//! branches on. Only one metric is needed here, domain width, since
//! branching order is "most constrained first".

use crate::builder::ActivityVar;

/// A not-yet-placed variable, annotated with its domain width for ordering.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub var: &'a ActivityVar,
}

impl<'a> Candidate<'a> {
    pub fn new(var: &'a ActivityVar) -> Self {
        Self { var }
    }

    pub fn domain_width(&self) -> i64 {
        self.var.domain_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ActivityVar;

    #[test]
    fn domain_width_matches_var() {
        let var = ActivityVar {
            id: "A1".to_string(),
            lo: 100,
            hi: 140,
            duration: 30,
            deadline: None,
            is_fixed: false,
        };
        let c = Candidate::new(&var);
        assert_eq!(c.domain_width(), 40);
    }
}
