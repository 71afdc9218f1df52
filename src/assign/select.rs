//! Decision var selection
use {
    super::{AssignStack, Status},
    crate::types::*,
};

/// API for var selection. The contract is only that the returned literal
/// belongs to an unassigned var; a richer heuristic can replace the
/// implementation behind this trait without touching the search loop.
pub trait VarSelectIF {
    /// return the next decision literal, or `None` when every var is assigned.
    fn select_decision_lit(&self) -> Option<Lit>;
}

impl VarSelectIF for AssignStack {
    fn select_decision_lit(&self) -> Option<Lit> {
        if self.trail.len() == self.num_vars {
            return None;
        }
        // deterministic index order, positive phase first
        (1..=self.num_vars)
            .map(|vi| Lit::from_assign(vi, true))
            .find(|l| self[*l].status == Status::Available)
    }
}
