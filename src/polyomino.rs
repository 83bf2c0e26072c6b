//! A [Polyomino tiling puzzle](https://en.wikipedia.org/wiki/Polyomino#Tiling_with_polyominoes)
//! is a tiling of a rectangular grid with polyominoes, where every required
//! copy of every piece is placed exactly once and every cell of the grid is
//! covered exactly once.

use crate::{
    placement::{
        enumerate_placements, piece_instances, total_area, Board, PieceInstance, Placement,
    },
    shape::{Cell, OrientedShape, Shape, ShapeTransform},
    verdict::{Infeasibility, Verdict},
    ExactCover,
};

/// Instance of a polyomino tiling puzzle.
#[derive(Debug)]
pub struct Polyomino {
    /// The list of possible placements of polyominoes in the grid.
    pub possibilities: Vec<Placement>,
    /// The list of constraints that must be satisfied for the polyomino
    /// tiling puzzle.
    pub constraints: Vec<Constraint>,
    /// The board being tiled.
    pub board: Board,
    /// The orientations of each piece type, aligned with the shape list.
    pub orientations: Vec<Vec<OrientedShape>>,
    /// The number of copies of each piece type that must be placed.
    pub counts: Vec<usize>,
    /// Group of available transformations for polyomino shapes.
    pub transformations: ShapeTransform,
}

impl Polyomino {
    /// Create a new instance of the polyomino tiling puzzle with the given
    /// board, polyomino shapes, number of copies of each shape, and type of
    /// allowed transformations.
    ///
    /// # Panics
    ///
    /// Panics if `shapes` and `counts` have different lengths.
    pub fn new(
        board: Board,
        shapes: &[Shape],
        counts: &[usize],
        transformations: ShapeTransform,
    ) -> Self {
        assert_eq!(
            shapes.len(),
            counts.len(),
            "Counts must be aligned with the list of shapes."
        );

        let orientations: Vec<_> = shapes
            .iter()
            .map(|shape| shape.orientations(transformations))
            .collect();
        let possibilities = enumerate_placements(board, &orientations, counts);
        let constraints = Constraint::all(board, counts).collect();

        Self {
            possibilities,
            constraints,
            board,
            orientations,
            counts: counts.to_vec(),
            transformations,
        }
    }

    /// Like [`Polyomino::new`], but first check that the pieces cover exactly
    /// as many cells as the board has. A mismatch is reported before any
    /// placement is enumerated.
    ///
    /// # Panics
    ///
    /// Panics if `shapes` and `counts` have different lengths.
    pub fn try_new(
        board: Board,
        shapes: &[Shape],
        counts: &[usize],
        transformations: ShapeTransform,
    ) -> Result<Self, Infeasibility> {
        assert_eq!(
            shapes.len(),
            counts.len(),
            "Counts must be aligned with the list of shapes."
        );

        let required = total_area(shapes.iter().map(Shape::area), counts);
        check_area(required, board)?;

        Ok(Self::new(board, shapes, counts, transformations))
    }

    fn num_pieces(&self) -> usize {
        self.counts.iter().sum()
    }

    // Piece columns come first, in the order of `piece_instances`, followed
    // by one column per board cell in row-major order.
    fn piece_column(&self, piece: PieceInstance) -> usize {
        let preceding: usize = self.counts[..piece.shape_index].iter().sum();

        preceding + piece.copy
    }

    fn cell_column(&self, cell: Cell) -> usize {
        self.num_pieces() + self.board.cell_index(cell)
    }

    /// Search for a tiling, returning the placements of the first one found.
    pub fn solve(&self) -> Verdict {
        let areas = self
            .orientations
            .iter()
            .map(|orientations| orientations.first().map_or(0, |o| o.cells().len()));
        if let Err(reason) = check_area(total_area(areas, &self.counts), self.board) {
            return Verdict::Infeasible(reason);
        }

        let mut has_placement = vec![false; self.num_pieces()];
        for placement in &self.possibilities {
            has_placement[self.piece_column(placement.piece)] = true;
        }
        if let Some(piece) =
            piece_instances(&self.counts).find(|piece| !has_placement[self.piece_column(*piece)])
        {
            log::debug!("Piece [{:?}] has no placement on the board.", piece);
            return Verdict::Infeasible(Infeasibility::Unplaceable(piece));
        }

        match self.solver().next() {
            Some(solution) => Verdict::Feasible(solution.into_iter().cloned().collect()),
            None => Verdict::Infeasible(Infeasibility::Exhausted),
        }
    }
}

impl ExactCover for Polyomino {
    type Constraint = Constraint;
    type Possibility = Placement;

    fn satisfied_constraints(&self, poss: &Self::Possibility) -> Vec<usize> {
        std::iter::once(self.piece_column(poss.piece))
            .chain(poss.cells.iter().map(|cell| self.cell_column(*cell)))
            .collect()
    }

    fn is_optional(&self, _cons: &Self::Constraint) -> bool {
        false
    }

    fn possibilities(&self) -> &[Self::Possibility] {
        &self.possibilities
    }

    fn constraints(&self) -> &[Self::Constraint] {
        &self.constraints
    }
}

/// A condition that must be satisfied in order to solve a polyomino
/// tiling puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Constraint {
    /// A constraint that a specific piece instance must be placed exactly
    /// once.
    Piece(PieceInstance),
    /// A constraint that a specific cell in the grid must be filled.
    Field(Cell),
}

impl Constraint {
    /// Return an iterator over all possible `Constraint`s for a given board
    /// and number of copies of each shape.
    pub fn all(board: Board, counts: &[usize]) -> impl Iterator<Item = Constraint> + '_ {
        piece_instances(counts)
            .map(Constraint::Piece)
            .chain(board.cells().map(Constraint::Field))
    }
}

// `required` is `None` when the piece area does not fit in a `usize`, which
// is reported as a saturated `usize::MAX`.
fn check_area(required: Option<usize>, board: Board) -> Result<(), Infeasibility> {
    let available = board.area();
    match required {
        Some(required) if required == available => Ok(()),
        required => {
            let required = required.unwrap_or(usize::MAX);
            log::debug!(
                "Pieces cover [{}] cells but the board has [{}], no tiling exists.",
                required,
                available
            );

            Err(Infeasibility::AreaMismatch {
                required,
                available,
            })
        }
    }
}

/// Decide whether `counts[t]` copies of each `shapes[t]`, rotated freely,
/// tile a `width` by `height` board exactly.
///
/// On success the verdict holds one placement per piece instance; their
/// cells partition the board.
///
/// # Panics
///
/// Panics if `shapes` and `counts` have different lengths.
pub fn can_exactly_cover(
    shapes: &[Shape],
    counts: &[usize],
    width: usize,
    height: usize,
) -> Verdict {
    let verdict = match Polyomino::try_new(
        Board::new(width, height),
        shapes,
        counts,
        ShapeTransform::PureRotation,
    ) {
        Ok(puzzle) => puzzle.solve(),
        Err(reason) => Verdict::Infeasible(reason),
    };
    log::debug!(
        "Tiling [{}x{}] with counts {:?}: feasible = [{}].",
        width,
        height,
        counts,
        verdict.is_feasible()
    );

    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn domino() -> Shape {
        Shape::from([[1, 1]])
    }

    fn l_tromino() -> Shape {
        Shape::from([[1, 0], [1, 1]])
    }

    fn assert_partition(puzzle: &Polyomino, placements: &[Placement]) {
        let mut covered = HashSet::new();
        for placement in placements {
            for cell in &placement.cells {
                assert!(covered.insert(*cell), "cell {:?} covered twice", cell);
            }
        }
        assert_eq!(covered, puzzle.board.cells().collect::<HashSet<_>>());

        let pieces: HashSet<_> = placements.iter().map(|p| p.piece).collect();
        assert_eq!(pieces.len(), placements.len());
        assert_eq!(pieces, piece_instances(&puzzle.counts).collect::<HashSet<_>>());
    }

    #[test]
    fn constraint_columns() {
        let puzzle = Polyomino::new(
            Board::new(2, 2),
            &[domino(), Shape::from([[1]])],
            &[1, 2],
            ShapeTransform::PureRotation,
        );

        assert_eq!(puzzle.constraints.len(), 3 + 4);
        assert_eq!(
            puzzle.constraints[..3],
            [
                Constraint::Piece(PieceInstance {
                    shape_index: 0,
                    copy: 0
                }),
                Constraint::Piece(PieceInstance {
                    shape_index: 1,
                    copy: 0
                }),
                Constraint::Piece(PieceInstance {
                    shape_index: 1,
                    copy: 1
                }),
            ]
        );

        for poss in &puzzle.possibilities {
            let columns = puzzle.satisfied_constraints(poss);
            assert_eq!(columns.len(), 1 + poss.cells.len());
            assert_eq!(puzzle.constraints[columns[0]], Constraint::Piece(poss.piece));
            for (column, cell) in columns[1..].iter().zip(&poss.cells) {
                assert_eq!(puzzle.constraints[*column], Constraint::Field(*cell));
            }
        }
    }

    #[test]
    fn two_dominoes_tile_square() {
        let puzzle = Polyomino::new(
            Board::new(2, 2),
            &[domino()],
            &[2],
            ShapeTransform::PureRotation,
        );

        let verdict = puzzle.solve();
        let placements = verdict.placements().unwrap();
        assert_eq!(placements.len(), 2);
        assert_partition(&puzzle, placements);
    }

    #[test]
    fn one_domino_cannot_tile_square() {
        let verdict = can_exactly_cover(&[domino()], &[1], 2, 2);
        assert_eq!(
            verdict,
            Verdict::Infeasible(Infeasibility::AreaMismatch {
                required: 2,
                available: 4
            })
        );
    }

    #[test]
    fn area_mismatch_found_before_enumeration() {
        let monomino = Shape::from([[1]]);

        // Enumerating would produce tens of millions of placements.
        let err = Polyomino::try_new(
            Board::new(3000, 3000),
            &[monomino.clone()],
            &[5],
            ShapeTransform::PureRotation,
        )
        .unwrap_err();
        assert_eq!(
            err,
            Infeasibility::AreaMismatch {
                required: 5,
                available: 9_000_000
            }
        );
        assert_eq!(
            can_exactly_cover(&[monomino.clone()], &[2000], 60, 60),
            Verdict::Infeasible(Infeasibility::AreaMismatch {
                required: 2000,
                available: 3600
            })
        );

        let puzzle =
            Polyomino::try_new(Board::new(2, 2), &[monomino], &[4], ShapeTransform::NoTransform)
                .unwrap();
        assert_eq!(puzzle.possibilities.len(), 4 * 4);
    }

    #[test]
    fn overflowing_area_is_a_mismatch() {
        let verdict = can_exactly_cover(&[domino()], &[usize::MAX], 1, 1);
        assert_eq!(
            verdict,
            Verdict::Infeasible(Infeasibility::AreaMismatch {
                required: usize::MAX,
                available: 1
            })
        );
    }

    #[test]
    fn l_trominoes_do_not_tile_three_by_three() {
        let verdict = can_exactly_cover(&[l_tromino()], &[3], 3, 3);
        assert_eq!(verdict, Verdict::Infeasible(Infeasibility::Exhausted));
    }

    #[test]
    fn l_trominoes_tile_two_by_three() {
        let puzzle = Polyomino::new(
            Board::new(2, 3),
            &[l_tromino()],
            &[2],
            ShapeTransform::PureRotation,
        );

        let verdict = puzzle.solve();
        assert_partition(&puzzle, verdict.placements().unwrap());
    }

    #[test]
    fn oversized_piece_is_unplaceable() {
        let shapes = [Shape::from([[1, 1, 1, 1]]), Shape::from([[1]])];
        let verdict = can_exactly_cover(&shapes, &[1, 5], 3, 3);
        assert_eq!(
            verdict,
            Verdict::Infeasible(Infeasibility::Unplaceable(PieceInstance {
                shape_index: 0,
                copy: 0
            }))
        );
    }

    #[test]
    fn count_tilings() {
        // A 2 by 4 board has 5 domino tilings. Copies of the same shape are
        // distinct pieces, so every tiling appears once per permutation.
        let puzzle = Polyomino::new(
            Board::new(4, 2),
            &[domino()],
            &[4],
            ShapeTransform::PureRotation,
        );

        assert_eq!(puzzle.solver().count(), 5 * 4 * 3 * 2);
    }

    #[test]
    fn solve_small_puzzle() {
        let shapes = [
            Shape::from([[1, 1], [1, 0], [1, 0]]), // J-shape
            Shape::from([[0, 1], [1, 1], [1, 0]]), // Z-shape
            Shape::from([[0, 1], [0, 1], [1, 1]]), // J-shape
        ];
        let puzzle = Polyomino::new(
            Board::new(4, 3),
            &shapes,
            &[1, 1, 1],
            ShapeTransform::NoTransform,
        );

        let mut solutions = puzzle.solver().all_solutions();
        assert_eq!(solutions.len(), 1);

        let mut solution = solutions.pop().unwrap();
        solution.sort();
        let cells: Vec<_> = solution.iter().map(|p| p.cells.clone()).collect();
        assert_eq!(
            cells,
            vec![
                vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)],
                vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(2, 0), Cell::new(2, 1)],
                vec![Cell::new(2, 2), Cell::new(3, 0), Cell::new(3, 1), Cell::new(3, 2)],
            ]
        );
    }
}
