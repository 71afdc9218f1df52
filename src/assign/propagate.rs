//! Boolean constraint propagation and backjump
use {
    super::{AssignIF, AssignKind, AssignStack, Status},
    crate::{
        cdb::{ClauseDB, ClauseDBIF, ClauseIF},
        types::*,
    },
    std::mem,
};

/// API for Boolean Constraint Propagation like
/// [`propagate`](`crate::assign::PropagateIF::propagate`),
/// [`assign_by_decision`](`crate::assign::PropagateIF::assign_by_decision`),
/// [`cancel_until`](`crate::assign::PropagateIF::cancel_until`), and so on.
pub trait PropagateIF {
    /// add an assignment at root level as a precondition.
    ///
    /// # Errors
    ///
    /// emit `SolverError::RootLevelConflict` if the complement is already scheduled.
    fn assign_at_root_level(&mut self, l: Lit) -> MaybeInconsistent;
    /// record a decision, opening a new decision level.
    fn assign_by_decision(&mut self, l: Lit);
    /// queue an implied assignment found by unit propagation.
    fn assign_by_implication(&mut self, l: Lit);
    /// queue the complement of a backtracked decision.
    fn assign_by_flip(&mut self, l: Lit);
    /// execute *backjump*; a call at or above the current level is a no-op.
    fn cancel_until(&mut self, lv: DecisionLevel);
    /// execute *boolean constraint propagation* or *unit propagation*.
    fn propagate(&mut self, cdb: &mut ClauseDB) -> PropagationResult;
}

impl PropagateIF for AssignStack {
    fn assign_at_root_level(&mut self, l: Lit) -> MaybeInconsistent {
        debug_assert_eq!(self.decision_level(), 0);
        debug_assert!(l.vi() <= self.num_vars);
        match self[l].status {
            Status::Available => {
                self.queue(l, AssignKind::Propagation);
                Ok(())
            }
            // a duplicated unit clause
            _ if self[l].value => Ok(()),
            _ => Err(SolverError::RootLevelConflict(l)),
        }
    }
    fn assign_by_decision(&mut self, l: Lit) {
        self.level_up();
        self.queue(l, AssignKind::Decision);
        self.num_decision += 1;
    }
    fn assign_by_implication(&mut self, l: Lit) {
        self.queue(l, AssignKind::Propagation);
        self.num_propagation += 1;
    }
    fn assign_by_flip(&mut self, l: Lit) {
        self.queue(l, AssignKind::ConflictFlip);
    }
    fn cancel_until(&mut self, lv: DecisionLevel) {
        if self.decision_level() <= lv {
            return;
        }
        let lim = self.trail_lim[lv as usize];
        for i in lim..self.trail.len() {
            let l = self.stack(i);
            self.unassign(l);
        }
        self.trail.truncate(lim);
        self.trail_lim.truncate(lv as usize);
        self.q_head = self.trail.len();
    }
    /// UNIT PROPAGATION.
    /// Each literal at the queue head is committed, then the clauses watching
    /// its complement are re-examined: the falsified watch either moves to an
    /// un-falsified literal, or the clause turns out satisfied, extinct, unit,
    /// or conflicting. The watcher list is rebuilt during the walk; on
    /// conflict the unvisited suffix is preserved.
    fn propagate(&mut self, cdb: &mut ClauseDB) -> PropagationResult {
        while let Some(&p) = self.trail.get(self.q_head) {
            self.commit(p);
            let false_lit = !p;
            let watchers = mem::take(&mut self[p].watchers);
            let mut retained: Vec<ClauseId> = Vec::with_capacity(watchers.len());
            for (n, &cid) in watchers.iter().enumerate() {
                // a tombstone left by extinction through the sibling watch
                if cdb[cid].is(FlagClause::EXTINCT) {
                    continue;
                }
                if cdb[cid].lit0() != false_lit {
                    cdb[cid].swap_lits(0, 1);
                }
                debug_assert_eq!(cdb[cid].lit0(), false_lit);
                let other = cdb[cid].lit1();
                // the other watch was assigned at the root, so the clause is
                // decided there for good
                if self[other].level == 0 {
                    self.retire(cdb, cid);
                    continue;
                }
                // the other watch is satisfied
                if self[other].status == Status::Active {
                    retained.push(cid);
                    continue;
                }
                // search an un-falsified literal to watch instead
                let mut new_watch: Option<usize> = None;
                let mut satisfied_at_root = false;
                for k in 2..cdb[cid].len() {
                    let lk = cdb[cid][k];
                    match self[lk].status {
                        Status::Deceased if self[lk].value => {
                            satisfied_at_root = true;
                            break;
                        }
                        Status::Pending | Status::Available => {
                            new_watch = Some(k);
                            break;
                        }
                        Status::Active if self[lk].value => {
                            new_watch = Some(k);
                            break;
                        }
                        _ => (),
                    }
                }
                if satisfied_at_root {
                    self.retire(cdb, cid);
                    continue;
                }
                if let Some(k) = new_watch {
                    cdb[cid].swap_lits(0, k);
                    let w = cdb[cid].lit0();
                    self[!w].watchers.push(cid);
                    continue;
                }
                // the clause is unit through the other watch
                retained.push(cid);
                match self[other].status {
                    Status::Available => self.assign_by_implication(other),
                    // already scheduled with the right polarity
                    _ if self[other].value => (),
                    _ => {
                        // conflict; the unvisited watches must survive the abort
                        retained.extend_from_slice(&watchers[n + 1..]);
                        self[p].watchers = retained;
                        self.num_conflict += 1;
                        return Err((other, cid));
                    }
                }
            }
            self[p].watchers = retained;
            self.q_head += 1;
        }
        Ok(())
    }
}

impl AssignStack {
    /// write the decision level and flip the statuses of both polarities of
    /// the literal at the queue head.
    fn commit(&mut self, l: Lit) {
        let lv = self.decision_level();
        debug_assert_eq!(self[l].status, Status::Pending);
        let r = &mut self[l];
        r.status = Status::Active;
        r.level = lv;
        let c = &mut self[!l];
        c.status = Status::Deceased;
        c.level = lv;
    }
    /// drop a clause satisfied at the root from the solver's view: mark it
    /// extinct and release its literal occurrences. The watch reference on
    /// the sibling list stays behind as a tombstone.
    fn retire(&mut self, cdb: &mut ClauseDB, cid: ClauseId) {
        cdb.nullify_clause(cid);
        for k in 0..cdb[cid].len() {
            let lk = cdb[cid][k];
            self[lk].num_active -= 1;
        }
    }
}
