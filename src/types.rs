//! Module `types` provides various building blocks, including
//! some common traits.
pub use crate::config::Config;

use {
    bitflags::bitflags,
    std::{
        fmt,
        fs::File,
        io::{BufRead, BufReader},
        ops::Not,
        path::Path,
    },
};

/// 'Variable' identifier or 'variable' index, starting with one.
pub type VarId = usize;

/// Decision level representation.
pub type DecisionLevel = u32;

/// Clause identifier: an index into the clause arena held by
/// [`ClauseDB`](`crate::cdb::ClauseDB`).
pub type ClauseId = usize;

/// a dummy clause index.
pub const NULL_CLAUSE: ClauseId = 0;

/// a dummy literal.
pub const NULL_LIT: Lit = Lit { ordinal: 0 };

/// sentinel for the decision level of an unassigned record.
pub const UNASSIGNED_LEVEL: DecisionLevel = DecisionLevel::MAX;

/// Literal encoded on `u32`; the variable `v` maps to `2 * v + 1` as its
/// positive literal and `2 * v` as its negative one, so the complement is a
/// single bit flip and `usize::from(lit)` indexes per-literal tables directly.
///
/// # Examples
///
/// ```
/// use dplr::types::*;
/// assert_eq!(3, usize::from(Lit::from( 1)));
/// assert_eq!(2, usize::from(Lit::from(-1)));
/// assert_eq!(Lit::from(-2), !Lit::from(2));
/// assert_eq!(1, Lit::from(-1).vi());
/// assert_eq!(2, i32::from(Lit::from_assign(2, true)));
/// ```
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Lit {
    ordinal: u32,
}

impl Lit {
    /// make a literal from a var index and a polarity.
    #[inline]
    pub fn from_assign(vi: VarId, possitive: bool) -> Lit {
        Lit {
            ordinal: ((vi as u32) << 1) | (possitive as u32),
        }
    }
    /// convert to var index.
    #[inline]
    pub fn vi(self) -> VarId {
        (self.ordinal >> 1) as VarId
    }
}

impl From<i32> for Lit {
    #[inline]
    fn from(x: i32) -> Self {
        debug_assert_ne!(x, 0);
        Lit {
            ordinal: (if x < 0 { -2 * x } else { 2 * x + 1 }) as u32,
        }
    }
}

impl From<Lit> for bool {
    /// - positive Lit (= odd ordinal) => `true`
    /// - negative Lit (= even ordinal) => `false`
    #[inline]
    fn from(l: Lit) -> bool {
        (l.ordinal & 1) != 0
    }
}

impl From<Lit> for usize {
    #[inline]
    fn from(l: Lit) -> usize {
        l.ordinal as usize
    }
}

impl From<Lit> for i32 {
    #[inline]
    fn from(l: Lit) -> i32 {
        if l.ordinal % 2 == 0 {
            -((l.ordinal >> 1) as i32)
        } else {
            (l.ordinal >> 1) as i32
        }
    }
}

impl From<&Lit> for i32 {
    #[inline]
    fn from(l: &Lit) -> i32 {
        i32::from(*l)
    }
}

impl Not for Lit {
    type Output = Lit;
    #[inline]
    fn not(self) -> Self {
        Lit {
            ordinal: self.ordinal ^ 1,
        }
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}L", i32::from(self))
    }
}

impl fmt::Debug for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}L", i32::from(self))
    }
}

/// convert literals to `[i32]` (for printing).
pub fn i32s(v: &[Lit]) -> Vec<i32> {
    v.iter().map(i32::from).collect::<Vec<_>>()
}

/// API for object properties.
pub trait FlagIF {
    type FlagType;
    /// return true if the flag is on.
    fn is(&self, flag: Self::FlagType) -> bool;
    /// set the flag.
    fn set(&mut self, f: Self::FlagType, b: bool);
    /// toggle the flag off.
    fn turn_off(&mut self, flag: Self::FlagType);
    /// toggle the flag on.
    fn turn_on(&mut self, flag: Self::FlagType);
}

bitflags! {
    /// Misc flags used by [`Clause`](`crate::cdb::Clause`).
    pub struct FlagClause: u8 {
        /// a clause is generated by conflict analysis.
        const LEARNT  = 0b0000_0001;
        /// a clause is satisfied at decision level 0 and dropped from
        /// propagation; stale watch-list entries pointing to it are tombstones.
        const EXTINCT = 0b0000_0010;
    }
}

/// API for object instantiation based on `Config` and `CNFDescription`.
pub trait Instantiate {
    /// make and return an object from `Config` and `CNFDescription`.
    fn instantiate(conf: &Config, cnf: &CNFDescription) -> Self;
}

/// Internal errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SolverError {
    /// a CNF contains an empty clause, or derives one while loading.
    EmptyClause,
    /// a clause contains a literal out of the range defined in the header.
    InvalidLiteral,
    /// exceptions caused by file operations or a malformed DIMACS input.
    IOError,
    /// two initial unit clauses assert a var both ways.
    RootLevelConflict(Lit),
    /// the search loop broke an internal invariant.
    SolverBug,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A Return type used by solver functions.
pub type MaybeInconsistent = Result<(), SolverError>;

/// Capture a conflict: the falsified watch and the clause it closed.
pub type ConflictContext = (Lit, ClauseId);

/// Return type of unit propagation.
pub type PropagationResult = Result<(), ConflictContext>;

/// CNF locator.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum CNFIndicator {
    /// not specified
    #[default]
    Void,
    /// from a file
    File(String),
    /// embedded directly
    LitVec(usize),
}

impl fmt::Display for CNFIndicator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CNFIndicator::Void => write!(f, "(no CNF)"),
            CNFIndicator::File(file) => write!(f, "CNF file({file})"),
            CNFIndicator::LitVec(n) => write!(f, "a vec({n} clauses)"),
        }
    }
}

/// Data storage about a problem.
#[derive(Clone, Debug, Default)]
pub struct CNFDescription {
    pub num_of_variables: usize,
    pub num_of_clauses: usize,
    pub pathname: CNFIndicator,
}

impl fmt::Display for CNFDescription {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let CNFDescription {
            num_of_variables: nv,
            num_of_clauses: nc,
            pathname: path,
        } = &self;
        write!(f, "CNF({nv}, {nc}, {path})")
    }
}

impl<V: AsRef<[i32]>> From<&[V]> for CNFDescription {
    fn from(vec: &[V]) -> Self {
        let num_of_variables = vec
            .iter()
            .map(|clause| {
                clause
                    .as_ref()
                    .iter()
                    .map(|l| l.unsigned_abs())
                    .max()
                    .unwrap_or(0)
            })
            .max()
            .unwrap_or(0) as usize;
        CNFDescription {
            num_of_variables,
            num_of_clauses: vec.len(),
            pathname: CNFIndicator::LitVec(vec.len()),
        }
    }
}

/// A wrapper structure to make a CNFDescription from a file.
/// To keep CNFDescription clone-able, the BufReader is separated from it.
#[derive(Debug)]
pub struct CNFReader {
    pub cnf: CNFDescription,
    pub reader: BufReader<File>,
}

impl TryFrom<&Path> for CNFReader {
    type Error = SolverError;
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let pathname = if path.to_string_lossy().is_empty() {
            "--".to_string()
        } else {
            path.file_name()
                .map_or("aStrangeNamed".to_string(), |f| {
                    f.to_string_lossy().into_owned()
                })
        };
        let fs = File::open(path).map_err(|_| SolverError::IOError)?;
        let mut reader = BufReader::new(fs);
        let mut buf = String::new();
        let mut nv: Option<usize> = None;
        let mut nc: Option<usize> = None;
        loop {
            buf.clear();
            match reader.read_line(&mut buf) {
                Ok(0) => break,
                Ok(_) if buf.starts_with('c') => continue,
                Ok(_) => {
                    let mut iter = buf.split_whitespace();
                    if iter.next() == Some("p") && iter.next() == Some("cnf") {
                        nv = iter.next().and_then(|s| s.parse::<usize>().ok());
                        nc = iter.next().and_then(|s| s.parse::<usize>().ok());
                    }
                    break;
                }
                Err(_) => return Err(SolverError::IOError),
            }
        }
        match (nv, nc) {
            (Some(nv), Some(nc)) => Ok(CNFReader {
                cnf: CNFDescription {
                    num_of_variables: nv,
                    num_of_clauses: nc,
                    pathname: CNFIndicator::File(pathname),
                },
                reader,
            }),
            _ => Err(SolverError::IOError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_lit_encoding() {
        assert_eq!(Lit::from(1), Lit::from_assign(1, true));
        assert_eq!(Lit::from(-1), Lit::from_assign(1, false));
        assert_eq!(Lit::from(2), !Lit::from(-2));
        assert_eq!(Lit::from(-2), !Lit::from(2));
        assert_eq!(1, Lit::from(1).vi());
        assert_eq!(1, Lit::from(-1).vi());
        assert_eq!(-8, i32::from(Lit::from(-8)));
        assert!(bool::from(Lit::from(4)));
        assert!(!bool::from(Lit::from(-4)));
        assert_eq!(usize::from(Lit::from(-1)) + 1, usize::from(Lit::from(1)));
    }
    #[test]
    fn test_cnf_reader() {
        if let Ok(reader) = CNFReader::try_from(Path::new("cnfs/sample.cnf")) {
            assert_eq!(reader.cnf.num_of_variables, 4);
            assert_eq!(reader.cnf.num_of_clauses, 4);
        } else {
            panic!("failed to load cnfs/sample.cnf");
        }
    }
}
