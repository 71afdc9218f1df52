//! Conflict repair by chronological backtracking with DPLL-style learning
use {
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF},
        cdb::{ClauseDB, ClauseDBIF},
        types::*,
    },
};

/// Undo the current branch after a conflict. The learnt clause is the
/// negation of the decision path, highest levels first, so the two watched
/// slots hold the most recently undone decisions. The flipped decision is
/// then propagated instead of re-decided, which shrinks the remaining
/// search tree on every conflict.
///
/// # Errors
///
/// `RootLevelConflict` when the conflict does not depend on any decision,
/// which proves the formula unsatisfiable.
pub fn handle_conflict(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    cc: &ConflictContext,
) -> MaybeInconsistent {
    let dl = asg.decision_level();
    if dl == 0 {
        return Err(SolverError::RootLevelConflict(cc.0));
    }
    let flipped = asg.decision_lit(dl);
    // decision level 1 needs no clause; the flip alone covers it
    if 1 < dl {
        let lits = (1..=dl)
            .rev()
            .map(|lv| !asg.decision_lit(lv))
            .collect::<Vec<Lit>>();
        cdb.new_clause(asg, lits, true);
    }
    asg.cancel_until(dl - 1);
    asg.assign_by_flip(!flipped);
    Ok(())
}
