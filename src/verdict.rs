//! Outcomes shared by the tiling and packing strategies.

use crate::placement::{PieceInstance, Placement};

/// The answer to a tiling or packing question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The pieces fit. Holds one placement per required piece instance.
    Feasible(Vec<Placement>),
    /// The pieces do not fit.
    Infeasible(Infeasibility),
}

impl Verdict {
    /// Return true if the pieces fit.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Verdict::Feasible(_))
    }

    /// Return the chosen placements, if the pieces fit.
    pub fn placements(&self) -> Option<&[Placement]> {
        match self {
            Verdict::Feasible(placements) => Some(placements),
            Verdict::Infeasible(_) => None,
        }
    }

    /// Consume the verdict, returning the chosen placements if the pieces fit.
    pub fn into_placements(self) -> Option<Vec<Placement>> {
        match self {
            Verdict::Feasible(placements) => Some(placements),
            Verdict::Infeasible(_) => None,
        }
    }
}

/// Why a set of pieces does not fit a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Infeasibility {
    /// The pieces cover a different number of cells than the board has, so an
    /// exact tiling is impossible.
    AreaMismatch {
        /// Total cells covered by all required pieces, saturating at
        /// `usize::MAX`.
        required: usize,
        /// Cells on the board, saturating at `usize::MAX`.
        available: usize,
    },
    /// The pieces cover more cells than the board has.
    AreaExceeded {
        /// Total cells covered by all required pieces, saturating at
        /// `usize::MAX`.
        required: usize,
        /// Cells on the board, saturating at `usize::MAX`.
        available: usize,
    },
    /// No orientation of this piece fits anywhere on the board.
    Unplaceable(PieceInstance),
    /// The exact cover search explored every branch without finding a tiling.
    Exhausted,
    /// The SAT backend proved the packing constraints unsatisfiable.
    Unsatisfiable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Cell;

    #[test]
    fn placements_of_verdicts() {
        let placement = Placement {
            piece: PieceInstance {
                shape_index: 0,
                copy: 0,
            },
            orientation: 0,
            offset: Cell::new(0, 0),
            cells: vec![Cell::new(0, 0)],
        };
        let feasible = Verdict::Feasible(vec![placement.clone()]);

        assert!(feasible.is_feasible());
        assert_eq!(feasible.placements(), Some(&[placement.clone()][..]));
        assert_eq!(feasible.into_placements(), Some(vec![placement]));

        let infeasible = Verdict::Infeasible(Infeasibility::Exhausted);
        assert!(!infeasible.is_feasible());
        assert_eq!(infeasible.placements(), None);
        assert_eq!(infeasible.into_placements(), None);
    }
}
