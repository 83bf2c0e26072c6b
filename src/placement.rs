//! Enumeration of every legal placement of a set of pieces on a rectangular
//! board.

use crate::shape::{Cell, OrientedShape};

/// The rectangular region pieces are placed into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl Board {
    /// Create a new board of the given dimensions.
    pub const fn new(width: usize, height: usize) -> Self {
        Board { width, height }
    }

    /// Total number of cells on the board, saturating at `usize::MAX`.
    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Return true if `cell` lies inside the board.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Row-major index of `cell`, ranging from 0 to `area() - 1`.
    pub fn cell_index(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell));
        cell.y * self.width + cell.x
    }

    /// Return an iterator over all board cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let Board { width, height } = *self;

        (0..height).flat_map(move |y| (0..width).map(move |x| Cell { x, y }))
    }
}

/// One copy of one piece type.
///
/// Every copy must be placed exactly once, so two copies of the same shape
/// are distinct instances even though they are interchangeable on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceInstance {
    /// Index of the shape in the list of piece types.
    pub shape_index: usize,
    /// Which copy of the shape this is, ranging from 0 to `count - 1`.
    pub copy: usize,
}

/// A candidate way of laying one piece instance on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placement {
    /// The piece instance being placed.
    pub piece: PieceInstance,
    /// Index of the orientation within the shape's orientation list.
    pub orientation: usize,
    /// Board position of the orientation's origin.
    pub offset: Cell,
    /// Absolute board cells covered by this placement, sorted.
    pub cells: Vec<Cell>,
}

impl Placement {
    /// Return true if this placement covers `cell`.
    pub fn covers(&self, cell: Cell) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }
}

/// Enumerate every placement of every required piece instance.
///
/// `orientations[t]` holds the orientation set of shape type `t` and
/// `counts[t]` the number of copies of it that must be placed. Orientations
/// whose bounding box does not fit the board produce no placements.
///
/// Placements are emitted grouped by shape type, then orientation, then board
/// row and column, then copy index.
///
/// # Panics
///
/// Panics if `orientations` and `counts` have different lengths.
pub fn enumerate_placements(
    board: Board,
    orientations: &[Vec<OrientedShape>],
    counts: &[usize],
) -> Vec<Placement> {
    assert_eq!(
        orientations.len(),
        counts.len(),
        "Counts must be aligned with the list of shapes."
    );

    let mut placements = Vec::new();
    for (shape_index, (shape_orientations, &count)) in
        orientations.iter().zip(counts).enumerate()
    {
        if count == 0 {
            continue;
        }

        for (orientation, oriented) in shape_orientations.iter().enumerate() {
            if oriented.width() > board.width || oriented.height() > board.height {
                continue;
            }

            for y in 0..=board.height - oriented.height() {
                for x in 0..=board.width - oriented.width() {
                    let cells: Vec<Cell> = oriented
                        .cells()
                        .iter()
                        .map(|cell| Cell::new(cell.x + x, cell.y + y))
                        .collect();

                    placements.extend((0..count).map(|copy| Placement {
                        piece: PieceInstance { shape_index, copy },
                        orientation,
                        offset: Cell::new(x, y),
                        cells: cells.clone(),
                    }));
                }
            }
        }
    }

    log::debug!(
        "Enumerated [{}] placements on a [{}x{}] board.",
        placements.len(),
        board.width,
        board.height
    );

    placements
}

/// Total number of cells covered by `counts[t]` copies of a piece of
/// `areas[t]` cells, or `None` if that overflows a `usize`.
pub fn total_area(areas: impl IntoIterator<Item = usize>, counts: &[usize]) -> Option<usize> {
    areas
        .into_iter()
        .zip(counts)
        .try_fold(0usize, |total, (area, &count)| {
            area.checked_mul(count)
                .and_then(|cells| total.checked_add(cells))
        })
}

/// Return every piece instance required by `counts`, grouped by shape type.
pub fn piece_instances(counts: &[usize]) -> impl Iterator<Item = PieceInstance> + '_ {
    counts
        .iter()
        .enumerate()
        .flat_map(|(shape_index, &count)| {
            (0..count).map(move |copy| PieceInstance { shape_index, copy })
        })
}
