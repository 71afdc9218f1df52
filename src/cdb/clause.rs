use {
    crate::{assign::AssignIF, types::*},
    std::{
        fmt,
        ops::{Index, IndexMut},
        slice::Iter,
    },
};

/// A representation of 'clause'
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Clause {
    /// The literals in a clause; the first two are the watched slots.
    pub(super) lits: Vec<Lit>,
    /// Flags
    flags: FlagClause,
}

/// API for Clause, providing literal accessors.
pub trait ClauseIF {
    /// return the 1st watch
    fn lit0(&self) -> Lit;
    /// return the 2nd watch
    fn lit1(&self) -> Lit;
    /// return `true` if the clause contains the literal
    fn contains(&self, lit: Lit) -> bool;
    /// return `true` if some literal of the clause is satisfied
    fn is_satisfied_under(&self, asg: &impl AssignIF) -> bool;
    /// return an iterator over its literals.
    fn iter(&self) -> Iter<'_, Lit>;
    /// return the number of literals.
    fn len(&self) -> usize;
    /// return true if it contains no literals; only the dummy clause does.
    fn is_empty(&self) -> bool;
}

impl Clause {
    pub(super) fn new(lits: Vec<Lit>, learnt: bool) -> Clause {
        debug_assert!(1 < lits.len());
        Clause {
            lits,
            flags: if learnt {
                FlagClause::LEARNT
            } else {
                FlagClause::empty()
            },
        }
    }
    pub(super) fn dummy() -> Clause {
        Clause {
            lits: Vec::new(),
            flags: FlagClause::EXTINCT,
        }
    }
    /// exchange two literals; used to keep a watch in slot 0.
    #[inline]
    pub fn swap_lits(&mut self, i: usize, j: usize) {
        self.lits.swap(i, j);
    }
}

impl Index<usize> for Clause {
    type Output = Lit;
    #[inline]
    fn index(&self, i: usize) -> &Lit {
        &self.lits[i]
    }
}

impl IndexMut<usize> for Clause {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Lit {
        &mut self.lits[i]
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Lit;
    type IntoIter = Iter<'a, Lit>;
    fn into_iter(self) -> Self::IntoIter {
        self.lits.iter()
    }
}

impl From<&Clause> for Vec<i32> {
    fn from(c: &Clause) -> Vec<i32> {
        c.lits.iter().map(i32::from).collect::<Vec<i32>>()
    }
}

impl ClauseIF for Clause {
    #[inline]
    fn lit0(&self) -> Lit {
        self.lits[0]
    }
    #[inline]
    fn lit1(&self) -> Lit {
        self.lits[1]
    }
    fn contains(&self, lit: Lit) -> bool {
        self.lits.contains(&lit)
    }
    fn is_satisfied_under(&self, asg: &impl AssignIF) -> bool {
        self.lits.iter().any(|l| asg.assigned(*l) == Some(true))
    }
    fn iter(&self) -> Iter<'_, Lit> {
        self.lits.iter()
    }
    fn len(&self) -> usize {
        self.lits.len()
    }
    fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }
}

impl FlagIF for Clause {
    type FlagType = FlagClause;
    #[inline]
    fn is(&self, flag: Self::FlagType) -> bool {
        self.flags.contains(flag)
    }
    #[inline]
    fn set(&mut self, f: Self::FlagType, b: bool) {
        self.flags.set(f, b);
    }
    #[inline]
    fn turn_off(&mut self, flag: Self::FlagType) {
        self.flags.remove(flag);
    }
    #[inline]
    fn turn_on(&mut self, flag: Self::FlagType) {
        self.flags.insert(flag);
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let st = |flag, mes| if self.is(flag) { mes } else { "" };
        write!(
            f,
            "{{{:?}{}{}}}",
            i32s(&self.lits),
            st(FlagClause::LEARNT, ", learnt"),
            st(FlagClause::EXTINCT, ", extinct"),
        )
    }
}
