/// Module `solver` provides the top-level API as a SAT solver.
mod build;
mod conflict;
mod search;
mod validate;

pub use self::{build::SatSolverBuildIF, search::SatSolverSearchIF, validate::ValidateIF};

use crate::{assign::AssignStack, cdb::ClauseDB, state::State, types::*};

/// Normal results returned by Solver.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Certificate {
    SAT(Vec<i32>),
    UNSAT,
}

/// The return type of [`Solver::solve`](`crate::solver::SatSolverIF::solve`).
/// This captures the following three cases:
/// * `Certificate::SAT` -- solved with a satisfiable assignment set,
/// * `Certificate::UNSAT` -- proved that it's an unsatisfiable problem, and
/// * `SolverError::*` -- caused by an IO error or a bug.
pub type SolverResult = Result<Certificate, SolverError>;

/// API for SAT solver like `build`, `solve` and so on.
pub trait SatSolverIF: SatSolverBuildIF + SatSolverSearchIF {
    /// make a solver and load a CNF into it.
    ///
    /// # Errors
    ///
    /// IO error by failing to load a CNF file, or an invalid DIMACS input.
    fn build(config: &Config) -> Result<Solver, SolverError>;
    /// search an assignment.
    ///
    /// # Errors
    ///
    /// if solver becomes inconsistent by an internal error.
    fn solve(&mut self) -> SolverResult;
}

/// The SAT solver object consisting of 3 sub modules.
///
/// ```
/// use dplr::{Certificate, SatSolverIF, Solver};
///
/// let mut s = Solver::try_from("cnfs/sample.cnf").expect("can't load");
/// assert_eq!(s.asg.num_vars, 4);
/// if let Ok(Certificate::SAT(v)) = s.solve() {
///     assert_eq!(v.len(), 4);
/// } else {
///     panic!("it should be satisfied!");
/// }
/// assert_eq!(
///     Solver::try_from("cnfs/unsat.cnf").expect("can't load").solve(),
///     Ok(Certificate::UNSAT),
/// );
/// ```
#[derive(Debug, Default)]
pub struct Solver {
    /// assignment management
    pub asg: AssignStack,
    /// clause container
    pub cdb: ClauseDB,
    /// misc data holder
    pub state: State,
}

impl SatSolverIF for Solver {
    fn build(config: &Config) -> Result<Solver, SolverError> {
        <Solver as SatSolverBuildIF>::solver_build(config)
    }
    fn solve(&mut self) -> SolverResult {
        <Solver as SatSolverSearchIF>::solve(self)
    }
}

impl Instantiate for Solver {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> Solver {
        Solver {
            asg: AssignStack::instantiate(config, cnf),
            cdb: ClauseDB::instantiate(config, cnf),
            state: State::instantiate(config, cnf),
        }
    }
}

impl TryFrom<&str> for Solver {
    type Error = SolverError;
    /// return a new solver built for a CNF file.
    ///
    /// # Example
    /// ```
    /// use dplr::{SatSolverIF, Solver};
    ///
    /// let mut s = Solver::try_from("cnfs/sample.cnf").expect("fail to load");
    /// ```
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let config = Config::from(s);
        Solver::build(&config)
    }
}

impl TryFrom<Vec<Vec<i32>>> for Solver {
    type Error = SolverError;
    /// return a new solver built for a vec of clauses.
    ///
    /// # Example
    /// ```
    /// use dplr::{Certificate, SatSolverIF, Solver};
    ///
    /// let mut s = Solver::try_from(vec![vec![1i32, 2], vec![-1, 3], vec![1, -3]])
    ///     .expect("failed to load");
    /// assert!(matches!(s.solve(), Ok(Certificate::SAT(_))));
    /// ```
    fn try_from(vec: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        Solver::solver_from_vec(Config::default(), vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_build() {
        let config = Config::from("cnfs/sample.cnf");
        if let Ok(s) = Solver::build(&config) {
            assert_eq!(s.asg.num_vars, 4);
            assert_eq!(s.cdb.num_input, 4);
            assert!(s.state.ok);
        } else {
            panic!("failed to build a solver for cnfs/sample.cnf");
        }
    }
}
