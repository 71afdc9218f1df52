/*!
# dplr

A chronological CDCL SAT solver in Rust, built around two-watched-literal
unit propagation and DPLL-style clause learning: on conflict, the negation
of the current decision path is recorded as a learned clause, the last
decision is undone, and its complement is propagated instead of re-decided.

```
use dplr::{Certificate, SatSolverIF, Solver};

let v: Vec<Vec<i32>> = vec![vec![1, 2], vec![-1, 3], vec![1, -3], vec![-1, 2]];
let mut s = Solver::try_from(v).expect("failed to load a CNF");
assert!(matches!(s.solve(), Ok(Certificate::SAT(_))));
```
*/
/// Module `assign` implements the assignment model, unit propagation and
/// decision var selection.
pub mod assign;
/// Module `cdb` provides `Clause` object and its manager `ClauseDB`.
pub mod cdb;
/// Module `config` provides solver's configuration and CLI.
pub mod config;
/// Module `solver` provides the top-level API as a SAT solver.
pub mod solver;
/// Module `state` is a collection of misc data and the progress reporter.
pub mod state;
/// Module `types` provides various building blocks, including some common traits.
pub mod types;

pub use crate::{
    config::Config,
    solver::{Certificate, SatSolverIF, Solver, SolverResult, ValidateIF},
    types::*,
};
