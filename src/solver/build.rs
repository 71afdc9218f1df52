/// Solver Builder
use {
    super::Solver,
    crate::{
        assign::{AssignIF, PropagateIF},
        cdb::ClauseDBIF,
        types::*,
    },
    std::{
        fs::File,
        io::{BufRead, BufReader},
        mem,
    },
};

/// API for loading problems into a solver.
pub trait SatSolverBuildIF {
    /// make a solver and load a CNF file into it.
    ///
    /// # Errors
    ///
    /// IO error by failing to load a CNF file, or an invalid DIMACS input.
    fn solver_build(config: &Config) -> Result<Solver, SolverError>;
    /// make a solver and load a vec of clauses into it.
    fn solver_from_vec(config: Config, vec: Vec<Vec<i32>>) -> Result<Solver, SolverError>;
    /// add a vector of `Lit` as a clause to the solver, normalizing it first.
    /// Returns `Ok(None)` if the clause was absorbed (tautology, already
    /// satisfied at the root, or asserted as a unit).
    ///
    /// # Errors
    ///
    /// `EmptyClause` or `RootLevelConflict` if the clause refutes the input.
    fn solver_add_unchecked_clause(
        &mut self,
        lits: &mut Vec<Lit>,
    ) -> Result<Option<ClauseId>, SolverError>;
}

impl SatSolverBuildIF for Solver {
    fn solver_build(config: &Config) -> Result<Solver, SolverError> {
        let CNFReader { cnf, reader } = CNFReader::try_from(config.cnf_file.as_path())?;
        Solver::instantiate(config, &cnf).inject(reader)
    }
    fn solver_from_vec(config: Config, vec: Vec<Vec<i32>>) -> Result<Solver, SolverError> {
        let cnf = CNFDescription::from(&vec[..]);
        let mut s = Solver::instantiate(&config, &cnf);
        for v in vec.iter() {
            let mut lits = Vec::with_capacity(v.len());
            for i in v.iter() {
                if *i == 0 {
                    return Err(SolverError::InvalidLiteral);
                }
                lits.push(Lit::from(*i));
            }
            match s.solver_add_unchecked_clause(&mut lits) {
                Ok(_) => (),
                Err(SolverError::EmptyClause) | Err(SolverError::RootLevelConflict(_)) => {
                    s.state.ok = false;
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(s)
    }
    fn solver_add_unchecked_clause(
        &mut self,
        lits: &mut Vec<Lit>,
    ) -> Result<Option<ClauseId>, SolverError> {
        let Solver {
            ref mut asg,
            ref mut cdb,
            ..
        } = self;
        debug_assert_eq!(asg.decision_level(), 0);
        if lits.is_empty() {
            return Err(SolverError::EmptyClause);
        }
        lits.sort_unstable();
        let mut j = 0;
        let mut l_ = NULL_LIT; // last literal; [l, !l] means tautology.
        for i in 0..lits.len() {
            let li = lits[i];
            let sat = asg.assigned(li);
            if sat == Some(true) || !li == l_ {
                return Ok(None);
            } else if sat != Some(false) && li != l_ {
                lits[j] = li;
                j += 1;
                l_ = li;
            }
        }
        lits.truncate(j);
        match lits.len() {
            0 => Err(SolverError::EmptyClause),
            1 => asg.assign_at_root_level(lits[0]).map(|_| None),
            _ => Ok(Some(cdb.new_clause(asg, mem::take(lits), false))),
        }
    }
}

impl Solver {
    /// read the clause body of a DIMACS stream. Clauses are sequences of
    /// whitespace-separated signed integers terminated by `0`, free to span
    /// lines; `c` lines are comments.
    fn inject(mut self, mut reader: BufReader<File>) -> Result<Solver, SolverError> {
        if self.state.target.num_of_clauses == 0 {
            // nothing to read; the formula is trivially satisfiable
            return Ok(self);
        }
        if self.state.target.num_of_variables == 0 {
            // clauses without variables can only be empty ones
            self.state.ok = false;
            return Ok(self);
        }
        let expected = self.state.target.num_of_clauses;
        let mut loaded = 0;
        let mut v: Vec<Lit> = Vec::new();
        let mut buf = String::new();
        'read: loop {
            buf.clear();
            match reader.read_line(&mut buf) {
                Ok(0) => break 'read,
                Ok(_) if buf.starts_with('c') => continue,
                Ok(_) => {
                    for s in buf.split_whitespace() {
                        match s.parse::<i32>() {
                            Ok(0) => {
                                loaded += 1;
                                match self.solver_add_unchecked_clause(&mut v) {
                                    Ok(_) => (),
                                    Err(SolverError::EmptyClause)
                                    | Err(SolverError::RootLevelConflict(_)) => {
                                        self.state.ok = false;
                                        return Ok(self);
                                    }
                                    Err(e) => return Err(e),
                                }
                                v.clear();
                                if loaded == expected {
                                    break 'read;
                                }
                            }
                            Ok(val) => {
                                let l = Lit::from(val);
                                if self.asg.num_vars < l.vi() {
                                    return Err(SolverError::InvalidLiteral);
                                }
                                v.push(l);
                            }
                            Err(_) => return Err(SolverError::InvalidLiteral),
                        }
                    }
                }
                Err(_) => return Err(SolverError::IOError),
            }
        }
        if loaded < expected || !v.is_empty() {
            // unexpected end of file
            return Err(SolverError::IOError);
        }
        Ok(self)
    }
}
