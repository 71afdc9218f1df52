// Module `assign` implements the assignment model: one record per literal,
// the trail, Boolean constraint propagation and decision var selection.

/// Boolean constraint propagation
mod propagate;
/// decision var selection
mod select;
/// assignment management
mod stack;

pub use self::{
    propagate::PropagateIF,
    select::VarSelectIF,
    stack::{AssignIF, AssignStack},
};
use {crate::types::*, std::fmt};

/// How an assignment entered the trail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssignKind {
    /// picked by the decision heuristic
    Decision,
    /// implied by a unit clause
    Propagation,
    /// the complement of a backtracked decision
    ConflictFlip,
}

impl fmt::Display for AssignKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssignKind::Decision => write!(f, "decision"),
            AssignKind::Propagation => write!(f, "propagation"),
            AssignKind::ConflictFlip => write!(f, "conflict flip"),
        }
    }
}

/// Assignment status of a literal, ordered as the records appear on the trail:
/// falsified complements first, then committed literals, then queued ones,
/// then the free pool.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Status {
    /// the complement is on the trail; this literal is falsified
    Deceased,
    /// on the trail and propagated
    Active,
    /// on the trail, awaiting propagation
    Pending,
    /// unassigned
    Available,
}

/// A record of one literal's assignment. Each variable owns two, kept in
/// lockstep: both sides are queued and released together, with opposite
/// truth values and the same decision level.
#[derive(Clone, Debug)]
pub struct Assign {
    pub status: Status,
    /// the scheduled truth value; meaningful only while not `Available`
    pub value: bool,
    pub kind: AssignKind,
    /// `UNASSIGNED_LEVEL` while not assigned
    pub level: DecisionLevel,
    /// the number of non-extinct stored clauses containing this literal
    pub num_active: usize,
    /// clauses watching this literal's complement; walked when this
    /// literal becomes true
    pub watchers: Vec<ClauseId>,
}

impl Default for Assign {
    fn default() -> Assign {
        Assign {
            status: Status::Available,
            value: false,
            kind: AssignKind::Decision,
            level: UNASSIGNED_LEVEL,
            num_active: 0,
            watchers: Vec::new(),
        }
    }
}

impl fmt::Display for Assign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.status {
            Status::Available => write!(f, "unassigned"),
            _ => write!(
                f,
                "{:?}({}) at level {} by {}",
                self.status, self.value, self.level, self.kind
            ),
        }
    }
}
