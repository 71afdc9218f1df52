//! End-to-end checks on tiny DIMACS problems.
use dplr::{Certificate, SatSolverIF, Solver};

fn solve_vec(v: Vec<Vec<i32>>) -> (Certificate, Solver) {
    let mut s = Solver::try_from(v).expect("failed to load");
    let c = s.solve().expect("failed to solve");
    (c, s)
}

#[test]
fn contradicting_units_are_refuted_while_loading() {
    let (c, s) = solve_vec(vec![vec![1], vec![-1]]);
    assert_eq!(c, Certificate::UNSAT);
    // refuted before search: no conflict is ever recorded
    assert_eq!(s.asg.num_conflict, 0);
    assert_eq!(s.asg.num_decision, 0);
}

#[test]
fn two_clauses_are_satisfiable() {
    let (c, _) = solve_vec(vec![vec![1, 2], vec![-1, 3]]);
    assert!(matches!(c, Certificate::SAT(_)));
}

#[test]
fn root_refutation_needs_a_conflict() {
    let (c, s) = solve_vec(vec![vec![1, 2], vec![-1, 2], vec![-2]]);
    assert_eq!(c, Certificate::UNSAT);
    assert!(0 < s.asg.num_conflict);
}

#[test]
fn four_clauses_are_satisfiable() {
    let (c, s) = solve_vec(vec![vec![1, 2], vec![-1, 3], vec![-2, -3], vec![-1, -3, 4]]);
    if let Certificate::SAT(v) = c {
        assert_eq!(v.len(), 4);
        check_model(
            &[vec![1, 2], vec![-1, 3], vec![-2, -3], vec![-1, -3, 4]],
            &v,
        );
        assert_eq!(s.asg.num_conflict, 0);
    } else {
        panic!("it should be satisfiable");
    }
}

#[test]
fn almost_complete_formula_has_one_model() {
    let cnf: Vec<Vec<i32>> = vec![
        vec![1, 2, 3],
        vec![1, 2, -3],
        vec![1, -2, 3],
        vec![1, -2, -3],
        vec![-1, 2, 3],
        vec![-1, 2, -3],
        vec![-1, -2, 3],
    ];
    let (c, _) = solve_vec(cnf.clone());
    if let Certificate::SAT(v) = c {
        // every clause but (-1 -2 -3) is present, so only all-true survives
        assert_eq!(v, vec![1, 2, 3]);
        check_model(&cnf, &v);
    } else {
        panic!("it should be satisfiable");
    }
}

#[test]
fn consistent_units_need_no_decision() {
    let (c, s) = solve_vec(vec![vec![1], vec![2], vec![3]]);
    assert_eq!(c, Certificate::SAT(vec![1, 2, 3]));
    assert_eq!(s.asg.num_decision, 0);
    assert_eq!(s.asg.num_conflict, 0);
}

#[test]
fn an_empty_clause_is_unsat() {
    let (c, _) = solve_vec(vec![vec![]]);
    assert_eq!(c, Certificate::UNSAT);
}

#[test]
fn no_clauses_mean_sat() {
    let mut s = Solver::try_from("cnfs/empty.cnf").expect("failed to load");
    if let Ok(Certificate::SAT(v)) = s.solve() {
        assert_eq!(v.len(), 2);
    } else {
        panic!("it should be satisfiable");
    }
}

#[test]
fn no_vars_with_a_clause_mean_unsat() {
    let mut s = Solver::try_from("cnfs/zero.cnf").expect("failed to load");
    assert_eq!(s.solve(), Ok(Certificate::UNSAT));
}

#[test]
fn unsat_file_is_refuted() {
    let mut s = Solver::try_from("cnfs/unsat.cnf").expect("failed to load");
    assert_eq!(s.solve(), Ok(Certificate::UNSAT));
}

#[test]
fn pigeons_do_not_fit() {
    let mut s = Solver::try_from("cnfs/php.cnf").expect("failed to load");
    assert_eq!(s.solve(), Ok(Certificate::UNSAT));
    assert!(0 < s.asg.num_conflict);
}

#[test]
fn deep_conflicts_learn_clauses() {
    // all eight sign patterns over three vars; conflicts strike below
    // two decisions, so the branch path must be recorded
    let cnf: Vec<Vec<i32>> = vec![
        vec![1, 2, 3],
        vec![1, 2, -3],
        vec![1, -2, 3],
        vec![1, -2, -3],
        vec![-1, 2, 3],
        vec![-1, 2, -3],
        vec![-1, -2, 3],
        vec![-1, -2, -3],
    ];
    let (c, s) = solve_vec(cnf);
    assert_eq!(c, Certificate::UNSAT);
    assert!(0 < s.cdb.num_learnt);
    assert!(1 < s.asg.num_conflict);
}

#[test]
fn a_chain_collapses_while_loading() {
    let mut s = Solver::try_from("cnfs/chain.cnf").expect("failed to load");
    if let Ok(Certificate::SAT(v)) = s.solve() {
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(s.asg.num_decision, 0);
    } else {
        panic!("it should be satisfiable");
    }
}

#[test]
fn missing_file_is_an_error() {
    assert!(Solver::try_from("cnfs/no-such-file.cnf").is_err());
}

/// every clause must contain a literal set by the model.
fn check_model(cnf: &[Vec<i32>], model: &[i32]) {
    for clause in cnf.iter() {
        assert!(
            clause.iter().any(|l| model.contains(l)),
            "{clause:?} is falsified by {model:?}"
        );
    }
}
