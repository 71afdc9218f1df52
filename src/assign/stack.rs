//! main struct AssignStack
use {
    super::{Assign, AssignKind, Status},
    crate::types::*,
    std::{
        fmt,
        ops::{Index, IndexMut},
        slice::Iter,
    },
};

/// A record of assignment. It's called 'trail' in Glucose.
#[derive(Clone, Debug, Default)]
pub struct AssignStack {
    /// assignment records, two per variable, indexed by `usize::from(lit)`
    pub(super) model: Vec<Assign>,
    /// record of assignment in the order assignments were made
    pub(super) trail: Vec<Lit>,
    /// the trail length at the start of each decision level
    pub(super) trail_lim: Vec<usize>,
    /// the next trail position to propagate; everything below is committed
    pub(super) q_head: usize,
    /// the number of vars.
    pub num_vars: usize,
    /// the number of decisions made so far.
    pub num_decision: usize,
    /// the number of unit propagations, counted when a unit is detected.
    pub num_propagation: usize,
    /// the number of conflicts.
    pub num_conflict: usize,
}

impl Index<Lit> for AssignStack {
    type Output = Assign;
    #[inline]
    fn index(&self, l: Lit) -> &Assign {
        &self.model[usize::from(l)]
    }
}

impl IndexMut<Lit> for AssignStack {
    #[inline]
    fn index_mut(&mut self, l: Lit) -> &mut Assign {
        &mut self.model[usize::from(l)]
    }
}

impl Instantiate for AssignStack {
    fn instantiate(_config: &Config, cnf: &CNFDescription) -> AssignStack {
        let nv = cnf.num_of_variables;
        AssignStack {
            model: vec![Assign::default(); 2 * (nv + 1)],
            trail: Vec::with_capacity(nv),
            num_vars: nv,
            ..AssignStack::default()
        }
    }
}

/// API for assignment like [`decision_level`](`crate::assign::AssignIF::decision_level`),
/// [`stack`](`crate::assign::AssignIF::stack`), and so on.
pub trait AssignIF {
    /// return a literal in the trail.
    fn stack(&self, i: usize) -> Lit;
    /// return the length of the trail.
    fn stack_len(&self) -> usize;
    /// return an iterator over the trail.
    fn stack_iter(&self) -> Iter<'_, Lit>;
    /// return the trail length when level `n` was opened.
    fn len_upto(&self, n: DecisionLevel) -> usize;
    /// return the current decision level.
    fn decision_level(&self) -> DecisionLevel;
    /// return the decision literal of level `lv`.
    fn decision_lit(&self, lv: DecisionLevel) -> Lit;
    /// return `true` if there are queued assignments to propagate.
    fn remains(&self) -> bool;
    /// return *the value* of a literal, `None` if its var is unassigned.
    fn assigned(&self, l: Lit) -> Option<bool>;
}

impl AssignIF for AssignStack {
    fn stack(&self, i: usize) -> Lit {
        self.trail[i]
    }
    fn stack_len(&self) -> usize {
        self.trail.len()
    }
    fn stack_iter(&self) -> Iter<'_, Lit> {
        self.trail.iter()
    }
    fn len_upto(&self, n: DecisionLevel) -> usize {
        self.trail_lim.get(n as usize).map_or(0, |n| *n)
    }
    fn decision_level(&self) -> DecisionLevel {
        self.trail_lim.len() as DecisionLevel
    }
    fn decision_lit(&self, lv: DecisionLevel) -> Lit {
        debug_assert!(0 < lv);
        self.trail[self.trail_lim[lv as usize - 1]]
    }
    fn remains(&self) -> bool {
        self.q_head < self.trail.len()
    }
    fn assigned(&self, l: Lit) -> Option<bool> {
        match self[l].status {
            Status::Available => None,
            _ => Some(self[l].value),
        }
    }
}

impl From<&AssignStack> for Vec<i32> {
    /// the model as one signed integer per variable, in var order.
    fn from(asg: &AssignStack) -> Vec<i32> {
        (1..=asg.num_vars)
            .map(|vi| match asg.assigned(Lit::from_assign(vi, true)) {
                Some(false) => -(vi as i32),
                _ => vi as i32,
            })
            .collect::<Vec<i32>>()
    }
}

impl AssignStack {
    /// put a literal on the trail; both polarities leave the free pool and
    /// record the truth value they will hold once committed.
    pub(super) fn queue(&mut self, l: Lit, kind: AssignKind) {
        debug_assert_eq!(self[l].status, Status::Available);
        let r = &mut self[l];
        r.status = Status::Pending;
        r.value = true;
        r.kind = kind;
        let c = &mut self[!l];
        c.status = Status::Pending;
        c.value = false;
        c.kind = kind;
        self.trail.push(l);
    }
    /// open a new decision level.
    pub(super) fn level_up(&mut self) {
        self.trail_lim.push(self.trail.len());
    }
    /// return both polarities of a var to the free pool.
    pub(super) fn unassign(&mut self, l: Lit) {
        debug_assert_ne!(self[l].status, Status::Available);
        let r = &mut self[l];
        r.status = Status::Available;
        r.level = UNASSIGNED_LEVEL;
        let c = &mut self[!l];
        c.status = Status::Available;
        c.level = UNASSIGNED_LEVEL;
    }
}

impl fmt::Display for AssignStack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let v = self.trail.iter().map(i32::from).collect::<Vec<_>>();
        let levels = self.decision_level();
        let c = |i| match i {
            0 => (0, &v[0..self.len_upto(0)]),
            x if x == levels => (levels, &v[self.len_upto(levels - 1)..]),
            x => (x, &v[self.len_upto(x - 1)..self.len_upto(x)]),
        };
        if 0 < levels {
            write!(
                f,
                "ASG:: trail({}):{:?}, level: {}",
                self.trail.len(),
                (0..=levels).map(c).collect::<Vec<_>>(),
                levels,
            )
        } else {
            write!(f, "ASG:: trail({}):{:?}, level: 0", self.trail.len(), &v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::PropagateIF;

    fn lit(i: i32) -> Lit {
        Lit::from(i)
    }

    #[test]
    fn test_stack_transitions() {
        let config = Config::default();
        let cnf = CNFDescription {
            num_of_variables: 4,
            ..CNFDescription::default()
        };
        let mut asg = AssignStack::instantiate(&config, &cnf);
        // [] + 1 => [1]
        assert!(asg.assign_at_root_level(lit(1)).is_ok());
        assert_eq!(asg.trail, vec![lit(1)]);
        assert_eq!(asg[lit(1)].status, Status::Pending);
        assert_eq!(asg[lit(-1)].status, Status::Pending);
        assert_eq!(asg.assigned(lit(1)), Some(true));
        assert_eq!(asg.assigned(lit(-1)), Some(false));

        // [1] + 1 => [1]
        assert!(asg.assign_at_root_level(lit(1)).is_ok());
        assert_eq!(asg.trail, vec![lit(1)]);

        // [1] + -1 => conflict at the root, trail untouched
        assert_eq!(
            asg.assign_at_root_level(lit(-1)),
            Err(SolverError::RootLevelConflict(lit(-1)))
        );
        assert_eq!(asg.decision_level(), 0);
        assert_eq!(asg.stack_len(), 1);
        assert_eq!(asg.num_conflict, 0);

        // [1] + 3 => [1, 3]
        asg.assign_by_decision(lit(3));
        assert_eq!(asg.trail, vec![lit(1), lit(3)]);
        assert_eq!(asg.decision_level(), 1);
        assert_eq!(asg.decision_lit(1), lit(3));
        assert_eq!(asg.len_upto(0), 1);

        // [1, 3] + -4 => [1, 3, -4]
        asg.assign_by_decision(lit(-4));
        assert_eq!(asg.trail, vec![lit(1), lit(3), lit(-4)]);
        assert_eq!(asg.decision_level(), 2);
        assert_eq!(asg.stack_len(), 3);
        assert_eq!(asg.len_upto(1), 2);
        assert_eq!(asg.num_decision, 2);

        // backtrack to level 1: [1, 3, -4] => [1, 3]
        asg.cancel_until(1);
        assert_eq!(asg.trail, vec![lit(1), lit(3)]);
        assert_eq!(asg.decision_level(), 1);
        assert_eq!(asg.trail_lim, vec![1]);
        assert_eq!(asg[lit(4)].status, Status::Available);
        assert_eq!(asg[lit(-4)].status, Status::Available);
        assert_eq!(asg[lit(4)].level, UNASSIGNED_LEVEL);
        assert_eq!(asg.assigned(lit(4)), None);

        // backtrack to the current level is a no-op
        asg.cancel_until(1);
        assert_eq!(asg.trail, vec![lit(1), lit(3)]);
        assert_eq!(asg.decision_level(), 1);

        // back to the root
        asg.cancel_until(0);
        assert_eq!(asg.trail, vec![lit(1)]);
        assert_eq!(asg.decision_level(), 0);
        assert_eq!(asg.assigned(lit(3)), None);
        assert_eq!(asg.assigned(lit(1)), Some(true));
    }
}
