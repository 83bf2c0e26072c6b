//! Construction of boolean formulas in conjunctive normal form.
//!
//! Variables are numbered from 1 and literals use the signed DIMACS
//! convention, so a `Cnf` can be handed to any SAT backend that accepts
//! `Vec<Vec<i32>>`.

use std::{fmt, ops::Not};

/// A boolean variable or its negation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lit(i32);

impl Lit {
    /// The variable this literal refers to, counting from 1.
    pub fn var(self) -> usize {
        self.0.unsigned_abs() as usize
    }

    /// Return true if this is the negated form of its variable.
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// The signed DIMACS encoding of this literal.
    pub fn to_dimacs(self) -> i32 {
        self.0
    }
}

impl Not for Lit {
    type Output = Lit;

    fn not(self) -> Self::Output {
        Lit(-self.0)
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An assignment of a value to every variable of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Model(Vec<bool>);

impl Model {
    /// Create a model from the values of variables `1..=values.len()`.
    pub fn new(values: Vec<bool>) -> Self {
        Model(values)
    }

    /// Build a model from signed DIMACS literals, as reported by a SAT solver.
    /// Variables that do not appear are false.
    pub fn from_dimacs(num_vars: usize, literals: &[i32]) -> Self {
        let mut values = vec![false; num_vars];
        for &lit in literals {
            let var = lit.unsigned_abs() as usize;
            if (1..=num_vars).contains(&var) {
                values[var - 1] = lit > 0;
            }
        }

        Model(values)
    }

    /// Return the value of `lit` under this model. Unknown variables are
    /// false.
    pub fn value(&self, lit: Lit) -> bool {
        let var = self.0.get(lit.var() - 1).copied().unwrap_or(false);

        var != lit.is_negative()
    }
}

/// A formula in conjunctive normal form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cnf {
    num_vars: usize,
    clauses: Vec<Vec<Lit>>,
}

impl Cnf {
    /// Create an empty formula.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh variable, returning its positive literal.
    pub fn new_var(&mut self) -> Lit {
        self.num_vars += 1;
        let var = i32::try_from(self.num_vars).expect("variable count exceeds DIMACS range");

        Lit(var)
    }

    /// Allocate `count` fresh variables.
    pub fn new_vars(&mut self, count: usize) -> Vec<Lit> {
        (0..count).map(|_| self.new_var()).collect()
    }

    /// Number of variables allocated so far.
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// The clauses added so far.
    pub fn clauses(&self) -> &[Vec<Lit>] {
        &self.clauses
    }

    /// Add a disjunction of literals. An empty clause makes the formula
    /// unsatisfiable.
    pub fn add_clause(&mut self, lits: impl IntoIterator<Item = Lit>) {
        let clause: Vec<Lit> = lits.into_iter().collect();
        debug_assert!(clause.iter().all(|lit| lit.var() <= self.num_vars));

        self.clauses.push(clause);
    }

    /// Require that at most one of `lits` is true.
    ///
    /// Uses the sequential counter encoding: one auxiliary variable `s[i]`
    /// per literal, meaning "some literal up to `i` is true", with the
    /// clauses
    ///
    /// ```text
    /// lits[0] -> s[0]
    /// lits[i] -> s[i]
    /// s[i-1]  -> s[i]
    /// lits[i] && s[i-1] -> false       for i >= 1
    /// ```
    ///
    /// That is linear in the number of literals, where the pairwise encoding
    /// is quadratic. Lists of zero or one literals add nothing.
    pub fn at_most_one(&mut self, lits: &[Lit]) {
        if lits.len() <= 1 {
            return;
        }

        let s = self.new_vars(lits.len());

        self.add_clause([!lits[0], s[0]]);
        for i in 1..lits.len() {
            self.add_clause([!lits[i], s[i]]);
            self.add_clause([!s[i - 1], s[i]]);
            self.add_clause([!lits[i], !s[i - 1]]);
        }
    }

    /// Require that exactly one of `lits` is true.
    ///
    /// An empty list cannot have exactly one true literal, so it adds the
    /// empty clause.
    pub fn exactly_one(&mut self, lits: &[Lit]) {
        self.add_clause(lits.iter().copied());
        self.at_most_one(lits);
    }

    /// Return true if every clause has a literal that is true under `model`.
    pub fn evaluate(&self, model: &Model) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.iter().any(|lit| model.value(*lit)))
    }

    /// Return the clauses in signed DIMACS form.
    pub fn to_dimacs(&self) -> Vec<Vec<i32>> {
        self.clauses
            .iter()
            .map(|clause| clause.iter().map(|lit| lit.to_dimacs()).collect())
            .collect()
    }
}

impl fmt::Display for Cnf {
    /// Write the formula in the DIMACS CNF file format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "p cnf {} {}", self.num_vars, self.clauses.len())?;
        for clause in &self.clauses {
            for lit in clause {
                write!(f, "{} ", lit)?;
            }
            writeln!(f, "0")?;
        }

        Ok(())
    }
}
