use polyomino_packing::{
    placement::{piece_instances, Placement},
    shape::{Cell, Shape, ShapeTransform},
};
use std::collections::HashSet;

/// A handful of small polyominoes.
#[allow(dead_code)]
pub fn small_shapes() -> Vec<Shape> {
    vec![
        Shape::from_rows("domino", &["##"]),
        Shape::from_rows("I3", &["###"]),
        Shape::from_rows("L3", &["#.", "##"]),
        Shape::from_rows("O4", &["##", "##"]),
        Shape::from_rows("T4", &["###", ".#."]),
    ]
}

/// Six heptomino shapes and three regions to pack them into.
#[allow(dead_code)]
pub const SAMPLE_PUZZLE: &str = include_str!("data/sample.txt");

/// Check that `placements` place every piece instance required by `counts`
/// exactly once, inside a `width` by `height` board, without overlapping, and
/// each as some orientation of its shape.
///
/// # Panics
///  - If any of those conditions fail.
#[allow(dead_code)]
pub fn assert_packing(
    shapes: &[Shape],
    counts: &[usize],
    width: usize,
    height: usize,
    placements: &[Placement],
) -> HashSet<Cell> {
    let mut found: Vec<_> = placements.iter().map(|p| p.piece).collect();
    let mut expected: Vec<_> = piece_instances(counts).collect();
    found.sort();
    expected.sort();
    assert_eq!(found, expected, "Piece instances do not match the counts.");

    let mut covered = HashSet::new();
    for placement in placements {
        let shape = &shapes[placement.piece.shape_index];
        assert_eq!(
            placement.cells.len(),
            shape.area(),
            "Placement [{:?}] has the wrong number of cells.",
            placement
        );

        let relative: Vec<_> = placement
            .cells
            .iter()
            .map(|cell| Cell::new(cell.x - placement.offset.x, cell.y - placement.offset.y))
            .collect();
        assert!(
            shape
                .orientations(ShapeTransform::FullSymmetry)
                .iter()
                .any(|oriented| oriented.cells() == relative.as_slice()),
            "Placement [{:?}] is not an orientation of shape [{}].",
            placement,
            shape.name()
        );

        for cell in &placement.cells {
            assert!(
                cell.x < width && cell.y < height,
                "Cell [{:?}] is off the board.",
                cell
            );
            assert!(covered.insert(*cell), "Cell [{:?}] is covered twice.", cell);
        }
    }

    covered
}

/// Like [`assert_packing`], and additionally check that every board cell is
/// covered.
#[allow(dead_code)]
pub fn assert_tiling(
    shapes: &[Shape],
    counts: &[usize],
    width: usize,
    height: usize,
    placements: &[Placement],
) {
    let covered = assert_packing(shapes, counts, width, height, placements);

    assert_eq!(covered.len(), width * height, "Board is not fully covered.");
}
