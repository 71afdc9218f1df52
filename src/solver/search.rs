/// Conflict-Driven Clause Learning Search engine
use {
    super::{conflict::handle_conflict, Certificate, Solver, SolverResult, ValidateIF},
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF, VarSelectIF},
        cdb::ClauseDB,
        state::{State, StateIF},
        types::*,
    },
};

/// API for SAT solver like [`solve`](`crate::solver::SatSolverSearchIF::solve`).
pub trait SatSolverSearchIF {
    /// search an assignment.
    ///
    /// # Errors
    ///
    /// if solver becomes inconsistent by an internal error.
    fn solve(&mut self) -> SolverResult;
}

/// Phases of the search loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SearchStep {
    Decide,
    Propagate,
    Conflict(ConflictContext),
    Succeed,
}

impl SatSolverSearchIF for Solver {
    /// # Examples
    ///
    /// ```
    /// use dplr::{Certificate, Config, SatSolverIF, Solver};
    ///
    /// let config = Config::from("cnfs/sample.cnf");
    /// if let Ok(mut s) = Solver::build(&config) {
    ///     let res = s.solve();
    ///     assert!(res.is_ok());
    ///     assert_ne!(res.unwrap(), Certificate::UNSAT);
    /// }
    /// ```
    fn solve(&mut self) -> SolverResult {
        {
            let Solver {
                ref mut asg,
                ref mut cdb,
                ref mut state,
            } = self;
            if !state.ok {
                // the input was refuted while loading
                return Ok(Certificate::UNSAT);
            }
            state.flush("searching...\n");
            state.progress_header();
            state.progress(asg, cdb);
            let answer = search(asg, cdb, state);
            state.progress(asg, cdb);
            match answer {
                Ok(true) => (),
                Ok(false) => return Ok(Certificate::UNSAT),
                Err(e) => return Err(e),
            }
        }
        if self.validate().is_some() {
            return Err(SolverError::SolverBug);
        }
        Ok(Certificate::SAT(Vec::<i32>::from(&self.asg)))
    }
}

/// main loop; returns `Ok(true)` for SAT, `Ok(false)` for UNSAT.
/// The initial step is `Propagate` when the loader queued unit clauses.
fn search(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    state: &mut State,
) -> Result<bool, SolverError> {
    let mut step = if asg.remains() {
        SearchStep::Propagate
    } else {
        SearchStep::Decide
    };
    loop {
        match step {
            SearchStep::Decide => {
                step = match asg.select_decision_lit() {
                    Some(l) => {
                        asg.assign_by_decision(l);
                        SearchStep::Propagate
                    }
                    None => SearchStep::Succeed,
                };
            }
            SearchStep::Propagate => {
                step = match asg.propagate(cdb) {
                    Ok(_) => SearchStep::Decide,
                    Err(cc) => SearchStep::Conflict(cc),
                };
            }
            SearchStep::Conflict(cc) => {
                if asg.num_conflict % 8192 == 0 {
                    state.progress(asg, cdb);
                }
                match handle_conflict(asg, cdb, &cc) {
                    Ok(_) => step = SearchStep::Propagate,
                    Err(SolverError::RootLevelConflict(_)) => return Ok(false),
                    Err(e) => return Err(e),
                }
            }
            SearchStep::Succeed => {
                debug_assert_eq!(asg.stack_len(), asg.num_vars);
                return Ok(true);
            }
        }
    }
}
