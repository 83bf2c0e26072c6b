//! Polyomino shapes and their canonical orientations.
//!
//! A [`Shape`] is the base stencil of one piece type. Rotating (and optionally
//! reflecting) it produces a set of [`OrientedShape`]s, each translated so
//! that its smallest `x` and `y` coordinates are zero. Orientations that
//! cover the same cells are only reported once, so a symmetric piece yields
//! fewer than 4 (or 8) orientations.

/// A coordinate pair on a stencil or board.
///
/// `x` grows to the right and `y` grows downwards, matching the row-major
/// layout of a textual stencil.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column coordinate.
    pub x: usize,
    /// Row coordinate.
    pub y: usize,
}

impl Cell {
    /// Create a new cell at the given coordinates.
    pub const fn new(x: usize, y: usize) -> Self {
        Cell { x, y }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Cell { x, y }
    }
}

/// The base stencil of a single piece type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    name: String,
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Shape {
    /// Create a new shape from a list of occupied cells.
    ///
    /// Cells are translated so the stencil touches both axes, then sorted and
    /// deduplicated.
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty.
    pub fn new(name: impl Into<String>, cells: impl IntoIterator<Item = Cell>) -> Self {
        let cells: Vec<(isize, isize)> = cells
            .into_iter()
            .map(|Cell { x, y }| (x as isize, y as isize))
            .collect();
        assert!(!cells.is_empty(), "Shape must have at least one cell.");

        let oriented = normalize(&cells);

        Shape {
            name: name.into(),
            cells: oriented.cells,
            width: oriented.width,
            height: oriented.height,
        }
    }

    /// Create a new shape from stencil rows, where `#` marks an occupied cell
    /// and any other character marks an empty one.
    ///
    /// # Panics
    ///
    /// Panics if no row contains a `#`.
    pub fn from_rows<S: AsRef<str>>(name: impl Into<String>, rows: &[S]) -> Self {
        let cells = rows.iter().enumerate().flat_map(|(y, row)| {
            row.as_ref()
                .chars()
                .enumerate()
                .filter(|(_, c)| *c == '#')
                .map(move |(x, _)| Cell { x, y })
        });

        Self::new(name, cells)
    }

    /// The name given to this shape.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The occupied cells, sorted in `(x, y)` order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Width of the bounding box.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the bounding box.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Return the distinct orientations of this shape allowed by the given
    /// transform group.
    pub fn orientations(&self, transform: ShapeTransform) -> Vec<OrientedShape> {
        generate_orientations(self, transform)
    }
}

impl<const W: usize, const H: usize> From<[[u8; W]; H]> for Shape {
    fn from(arr: [[u8; W]; H]) -> Self {
        let cells = arr.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, filled)| **filled != 0)
                .map(move |(x, _)| Cell { x, y })
        });

        Shape::new("", cells)
    }
}

/// Available transformations for polyomino shapes during tiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeTransform {
    /// No transformation applied to the shape.
    NoTransform,
    /// Allow rotations of the shape.
    #[default]
    PureRotation,
    /// Allow rotations and reflections of the shape.
    FullSymmetry,
}

impl ShapeTransform {
    /// Select the rotation group, extended with reflections if
    /// `allow_reflections` is true.
    pub fn rotations(allow_reflections: bool) -> Self {
        if allow_reflections {
            ShapeTransform::FullSymmetry
        } else {
            ShapeTransform::PureRotation
        }
    }
}

/// One canonical orientation of a [`Shape`].
///
/// The cells are sorted, deduplicated, and translated so that the minimum `x`
/// and minimum `y` are both zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrientedShape {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl OrientedShape {
    /// The occupied cells of this orientation.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Width of the bounding box.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the bounding box.
    pub fn height(&self) -> usize {
        self.height
    }
}

/// Generate every distinct orientation of `shape` reachable with `transform`.
///
/// Orientations are produced in the order identity, 90°, 180°, 270°
/// clockwise, each immediately followed by its horizontal mirror when
/// reflections are allowed. Later duplicates of an earlier orientation are
/// dropped.
pub fn generate_orientations(shape: &Shape, transform: ShapeTransform) -> Vec<OrientedShape> {
    let base: Vec<(isize, isize)> = shape
        .cells
        .iter()
        .map(|cell| (cell.x as isize, cell.y as isize))
        .collect();

    let mut variants = Vec::with_capacity(8);
    let mut current = base;
    let rotations = match transform {
        ShapeTransform::NoTransform => 1,
        ShapeTransform::PureRotation | ShapeTransform::FullSymmetry => 4,
    };

    for _ in 0..rotations {
        let next = rotate(&current);
        if transform == ShapeTransform::FullSymmetry {
            let reflected = reflect(&current);
            variants.push(current);
            variants.push(reflected);
        } else {
            variants.push(current);
        }
        current = next;
    }

    let mut unique: Vec<OrientedShape> = Vec::with_capacity(variants.len());
    for variant in variants {
        let oriented = normalize(&variant);
        if !unique.contains(&oriented) {
            unique.push(oriented);
        }
    }

    unique
}

// 90° clockwise: (x, y) -> (y, -x)
fn rotate(points: &[(isize, isize)]) -> Vec<(isize, isize)> {
    points.iter().map(|&(x, y)| (y, -x)).collect()
}

// Horizontal mirror: (x, y) -> (-x, y)
fn reflect(points: &[(isize, isize)]) -> Vec<(isize, isize)> {
    points.iter().map(|&(x, y)| (-x, y)).collect()
}

fn normalize(points: &[(isize, isize)]) -> OrientedShape {
    let min_x = points.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let min_y = points.iter().map(|&(_, y)| y).min().unwrap_or(0);
    let max_x = points.iter().map(|&(x, _)| x).max().unwrap_or(-1);
    let max_y = points.iter().map(|&(_, y)| y).max().unwrap_or(-1);

    let mut cells: Vec<Cell> = points
        .iter()
        .map(|&(x, y)| Cell {
            x: (x - min_x) as usize,
            y: (y - min_y) as usize,
        })
        .collect();
    cells.sort();
    cells.dedup();

    OrientedShape {
        cells,
        width: (max_x - min_x + 1) as usize,
        height: (max_y - min_y + 1) as usize,
    }
}
