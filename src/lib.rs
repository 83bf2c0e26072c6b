#![deny(missing_docs)]

//! Decide whether a collection of [polyominoes](https://en.wikipedia.org/wiki/Polyomino)
//! can tile, or be packed without overlap into, a rectangular board.
//!
//! Two independent strategies are provided:
//!
//!  - [`can_exactly_cover`] phrases tiling as an
//!    [exact cover](https://en.wikipedia.org/wiki/Exact_cover) problem and
//!    solves it with [Dancing Links](https://en.wikipedia.org/wiki/Dancing_Links)
//!    and [Algorithm X](https://en.wikipedia.org/wiki/Knuth%27s_Algorithm_X).
//!  - [`can_pack`] encodes packing as a CNF formula, using a sequential
//!    counter for the cardinality constraints, and hands it to a SAT solver.
//!
//! Both share the same orientation canonicalization ([`shape`]) and placement
//! enumeration ([`placement`]).

pub mod cnf;
pub mod error;
pub mod grid;
pub mod input;
pub mod placement;
pub mod polyomino;
pub mod sat;
pub mod shape;
pub(crate) mod solver;
pub mod verdict;

pub use error::{Error, ParseError};
pub use grid::Grid;
pub use polyomino::can_exactly_cover;
pub use sat::{can_pack, Packer};
pub use solver::Solver;
pub use verdict::{Infeasibility, Verdict};

/// An instance of an exact cover problem.
pub trait ExactCover {
    /// The type of values that are elements of a solution to the exact cover
    /// problem.
    type Possibility: core::fmt::Debug;

    /// The type of value that are constraints on a given instance of an exact
    /// cover problem.
    type Constraint: core::fmt::Debug;

    /// Return the indices, into [`ExactCover::constraints`], of every
    /// `Constraint` satisfied by the given `Possibility`.
    fn satisfied_constraints(&self, poss: &Self::Possibility) -> Vec<usize>;

    /// Return true if the given `Constraint` is optional.
    fn is_optional(&self, cons: &Self::Constraint) -> bool;

    /// Return a list of possibilities for this instance of the problem.
    fn possibilities(&self) -> &[Self::Possibility];

    /// Return a list of constraints that must be satisfied for this instance of
    /// the problem.
    fn constraints(&self) -> &[Self::Constraint];

    /// Return an iterator over all solutions to this instance of the exact
    /// cover problem.
    fn solver(&self) -> Solver<Self>
    where
        Self: Sized,
    {
        Solver::new(self)
    }
}

impl<E> ExactCover for &E
where
    E: ExactCover,
{
    type Constraint = E::Constraint;
    type Possibility = E::Possibility;

    fn satisfied_constraints(&self, poss: &Self::Possibility) -> Vec<usize> {
        <E as ExactCover>::satisfied_constraints(self, poss)
    }

    fn is_optional(&self, cons: &Self::Constraint) -> bool {
        <E as ExactCover>::is_optional(self, cons)
    }

    fn possibilities(&self) -> &[Self::Possibility] {
        <E as ExactCover>::possibilities(self)
    }

    fn constraints(&self) -> &[Self::Constraint] {
        <E as ExactCover>::constraints(self)
    }
}
