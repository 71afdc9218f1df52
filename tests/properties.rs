//! Cross-checks against exhaustive search on small formulas.
use dplr::{Certificate, SatSolverIF, Solver, ValidateIF};

/// decide satisfiability by trying all assignments; fine below ~20 vars.
fn brute_force_is_sat(num_vars: usize, cnf: &[Vec<i32>]) -> bool {
    assert!(num_vars < 20);
    (0..1u32 << num_vars).any(|m| {
        cnf.iter().all(|clause| {
            clause.iter().any(|l| {
                let assigned_true = (m >> (l.unsigned_abs() - 1)) & 1 == 1;
                (0 < *l) == assigned_true
            })
        })
    })
}

fn cross_check(num_vars: usize, cnf: Vec<Vec<i32>>) {
    let expected = brute_force_is_sat(num_vars, &cnf);
    let mut s = Solver::try_from(cnf.clone()).expect("failed to load");
    match s.solve().expect("failed to solve") {
        Certificate::SAT(model) => {
            assert!(expected, "a model found for an unsatisfiable formula");
            assert!(s.validate().is_none(), "{model:?} is not a model");
            for clause in cnf.iter() {
                assert!(
                    clause.iter().any(|l| model.contains(l)),
                    "{clause:?} is falsified by {model:?}"
                );
            }
        }
        Certificate::UNSAT => {
            assert!(!expected, "refuted a satisfiable formula");
        }
    }
}

#[test]
fn agree_with_brute_force_on_handmade_formulas() {
    cross_check(3, vec![vec![1, 2], vec![-1, 2], vec![-2]]);
    cross_check(4, vec![vec![1, 2], vec![-1, 3], vec![-2, -3], vec![-1, -3, 4]]);
    cross_check(
        6,
        vec![
            vec![1, 2],
            vec![3, 4],
            vec![5, 6],
            vec![-1, -3],
            vec![-1, -5],
            vec![-3, -5],
            vec![-2, -4],
            vec![-2, -6],
            vec![-4, -6],
        ],
    );
    cross_check(
        5,
        vec![
            vec![1, -2, 3],
            vec![-1, 2],
            vec![2, 4, -5],
            vec![-3, -4],
            vec![-2, -3, 5],
            vec![1, 4, 5],
        ],
    );
}

/// a deterministic pseudo-random stream, good enough to vary clause shapes.
struct Lcg(u64);

impl Lcg {
    fn next_in(&mut self, n: usize) -> usize {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        ((self.0 >> 33) as usize) % n
    }
}

#[test]
fn agree_with_brute_force_on_random_3cnf() {
    const NUM_VARS: usize = 8;
    let mut lcg = Lcg(0x0123_4567_89ab_cdef);
    for run in 0..40 {
        // around the phase-transition ratio, both verdicts show up
        let num_clauses = 24 + run % 16;
        let mut cnf: Vec<Vec<i32>> = Vec::new();
        for _ in 0..num_clauses {
            let mut clause: Vec<i32> = Vec::new();
            while clause.len() < 3 {
                let vi = 1 + lcg.next_in(NUM_VARS) as i32;
                let l = if lcg.next_in(2) == 0 { vi } else { -vi };
                if !clause.contains(&l) && !clause.contains(&-l) {
                    clause.push(l);
                }
            }
            cnf.push(clause);
        }
        cross_check(NUM_VARS, cnf);
    }
}

#[test]
fn learnt_clauses_never_flip_a_verdict() {
    // a formula forcing several levels of conflicts before refutation
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
    cross_check(3, cnf);
}
