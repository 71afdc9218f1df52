/// Validate a total assignment against the loaded CNF
use {
    super::Solver,
    crate::{
        cdb::{ClauseDBIF, ClauseIF},
        types::*,
    },
};

/// API for assignment validation.
pub trait ValidateIF {
    /// return `None` if the assignment satisfies every input clause, or the
    /// first falsified clause as a DIMACS vector.
    fn validate(&self) -> Option<Vec<i32>>;
}

impl ValidateIF for Solver {
    fn validate(&self) -> Option<Vec<i32>> {
        self.cdb
            .iter()
            .skip(1)
            .take(self.cdb.num_input)
            .find(|c| !c.is_satisfied_under(&self.asg))
            .map(Vec::<i32>::from)
    }
}
