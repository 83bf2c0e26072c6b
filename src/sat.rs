//! Packing pieces into a board through a SAT encoding.
//!
//! Every placement becomes one boolean variable. Each piece instance must use
//! exactly one of its placements, and each board cell may be covered by at
//! most one chosen placement. Unlike [`can_exactly_cover`], cells may be left
//! empty, so this answers whether the pieces *fit*, not whether they *tile*.
//!
//! [`can_exactly_cover`]: crate::can_exactly_cover

use crate::{
    cnf::{Cnf, Lit, Model},
    error::Error,
    placement::{
        enumerate_placements, piece_instances, total_area, Board, PieceInstance, Placement,
    },
    shape::{Cell, Shape, ShapeTransform},
    verdict::{Infeasibility, Verdict},
};
use splr::Certificate;
use std::collections::{BTreeMap, HashSet};

/// A SAT solver that formulas can be handed to.
pub trait SatBackend {
    /// Decide `cnf`, returning a satisfying model, or `None` if the formula is
    /// unsatisfiable.
    fn solve(&mut self, cnf: &Cnf) -> Result<Option<Model>, Error>;
}

impl<B> SatBackend for &mut B
where
    B: SatBackend,
{
    fn solve(&mut self, cnf: &Cnf) -> Result<Option<Model>, Error> {
        <B as SatBackend>::solve(self, cnf)
    }
}

/// The [splr](https://crates.io/crates/splr) CDCL solver.
#[derive(Debug, Default, Clone, Copy)]
pub struct Splr;

impl SatBackend for Splr {
    fn solve(&mut self, cnf: &Cnf) -> Result<Option<Model>, Error> {
        if cnf.clauses().iter().any(|clause| clause.is_empty()) {
            return Ok(None);
        }
        if cnf.clauses().is_empty() {
            return Ok(Some(Model::new(vec![false; cnf.num_vars()])));
        }

        match Certificate::try_from(cnf.to_dimacs()) {
            Ok(Certificate::SAT(literals)) => {
                Ok(Some(Model::from_dimacs(cnf.num_vars(), &literals)))
            }
            Ok(Certificate::UNSAT) => Ok(None),
            Err(err) => Err(Error::Backend(format!("{:?}", err))),
        }
    }
}

/// The CNF formula for a packing problem, together with the placement each
/// of its first variables stands for.
#[derive(Debug, Clone)]
pub struct Encoding {
    /// The formula.
    pub cnf: Cnf,
    /// The placements, aligned with `placement_lits`.
    pub placements: Vec<Placement>,
    /// The variable chosen for each placement.
    pub placement_lits: Vec<Lit>,
}

impl Encoding {
    /// Encode the packing of the required piece instances into `board`.
    ///
    /// Adds an exactly-one constraint over the placements of every piece
    /// instance, and an at-most-one constraint over the placements covering
    /// every board cell. A piece instance without placements yields the
    /// empty clause.
    pub fn new(board: Board, placements: Vec<Placement>, counts: &[usize]) -> Self {
        let mut cnf = Cnf::new();
        let placement_lits = cnf.new_vars(placements.len());

        let mut by_piece: BTreeMap<PieceInstance, Vec<Lit>> =
            piece_instances(counts).map(|piece| (piece, Vec::new())).collect();
        let mut by_cell: Vec<Vec<Lit>> = vec![Vec::new(); board.area()];

        for (placement, lit) in placements.iter().zip(&placement_lits) {
            if let Some(lits) = by_piece.get_mut(&placement.piece) {
                lits.push(*lit);
            }
            for cell in &placement.cells {
                by_cell[board.cell_index(*cell)].push(*lit);
            }
        }

        for lits in by_piece.values() {
            cnf.exactly_one(lits);
        }
        for lits in &by_cell {
            cnf.at_most_one(lits);
        }

        Encoding {
            cnf,
            placements,
            placement_lits,
        }
    }

    /// Return the placements whose variables are true under `model`.
    pub fn decode(&self, model: &Model) -> Vec<Placement> {
        self.placements
            .iter()
            .zip(&self.placement_lits)
            .filter(|(_, lit)| model.value(**lit))
            .map(|(placement, _)| placement.clone())
            .collect()
    }
}

/// Decides packing problems with a configurable symmetry group and SAT
/// backend.
#[derive(Debug, Clone)]
pub struct Packer<B = Splr> {
    backend: B,
    transform: ShapeTransform,
}

impl Packer<Splr> {
    /// Create a packer using [`Splr`], allowing rotations but not
    /// reflections.
    pub fn new() -> Self {
        Self::with_backend(Splr)
    }
}

impl Default for Packer<Splr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Packer<B>
where
    B: SatBackend,
{
    /// Create a packer delegating to the given SAT backend.
    pub fn with_backend(backend: B) -> Self {
        Packer {
            backend,
            transform: ShapeTransform::PureRotation,
        }
    }

    /// Set the group of transformations pieces may be placed with.
    pub fn transform(mut self, transform: ShapeTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Allow or forbid mirrored orientations, on top of rotations.
    pub fn allow_reflections(self, allow: bool) -> Self {
        self.transform(ShapeTransform::rotations(allow))
    }

    /// Decide whether `counts[t]` copies of each `shapes[t]` fit into a
    /// `width` by `height` board without overlapping.
    ///
    /// Two cheap bounds are tried before any formula is built: pieces whose
    /// total area exceeds the board never fit, and pieces that can each be
    /// given a disjoint square block of the board always fit.
    ///
    /// # Panics
    ///
    /// Panics if `shapes` and `counts` have different lengths.
    pub fn pack(
        &mut self,
        shapes: &[Shape],
        counts: &[usize],
        width: usize,
        height: usize,
    ) -> Result<Verdict, Error> {
        assert_eq!(
            shapes.len(),
            counts.len(),
            "Counts must be aligned with the list of shapes."
        );
        let board = Board::new(width, height);

        if let Some(verdict) = quick_verdict(board, shapes, counts) {
            return Ok(verdict);
        }

        let orientations: Vec<_> = shapes
            .iter()
            .map(|shape| shape.orientations(self.transform))
            .collect();
        let placements = enumerate_placements(board, &orientations, counts);

        let placed: HashSet<PieceInstance> = placements.iter().map(|p| p.piece).collect();
        if let Some(piece) = piece_instances(counts).find(|piece| !placed.contains(piece)) {
            log::debug!("Piece [{:?}] has no placement on the board.", piece);
            return Ok(Verdict::Infeasible(Infeasibility::Unplaceable(piece)));
        }

        let encoding = Encoding::new(board, placements, counts);
        log::debug!(
            "Encoded [{}x{}] packing with [{}] variables and [{}] clauses.",
            width,
            height,
            encoding.cnf.num_vars(),
            encoding.cnf.clauses().len()
        );

        match self.backend.solve(&encoding.cnf)? {
            Some(model) => Ok(Verdict::Feasible(encoding.decode(&model))),
            None => Ok(Verdict::Infeasible(Infeasibility::Unsatisfiable)),
        }
    }
}

/// Decide the cases that need no search: no pieces at all, more piece area
/// than board area, or few enough pieces that each gets its own block.
fn quick_verdict(board: Board, shapes: &[Shape], counts: &[usize]) -> Option<Verdict> {
    // A piece area that overflows a `usize` exceeds every board, and is
    // reported as `usize::MAX`.
    let area = total_area(shapes.iter().map(Shape::area), counts);
    let available = board.area();
    if area.map_or(true, |required| required > available) {
        let required = area.unwrap_or(usize::MAX);
        log::debug!(
            "Pieces cover [{}] cells but the board has [{}], packing is impossible.",
            required,
            available
        );
        return Some(Verdict::Infeasible(Infeasibility::AreaExceeded {
            required,
            available,
        }));
    }

    // Every shape covers at least one cell, so this cannot exceed `required`.
    let total: usize = counts.iter().sum();
    if total == 0 {
        return Some(Verdict::Feasible(Vec::new()));
    }

    // Every orientation of every required piece fits in a `side` by `side`
    // square.
    let side = shapes
        .iter()
        .zip(counts)
        .filter(|(_, count)| **count > 0)
        .map(|(shape, _)| shape.width().max(shape.height()))
        .max()?;
    let blocks_per_row = board.width / side;
    let blocks = blocks_per_row.saturating_mul(board.height / side);
    if blocks < total {
        return None;
    }

    log::debug!(
        "[{}] pieces fit in [{}] disjoint {}x{} blocks.",
        total,
        blocks,
        side,
        side
    );

    let placements = piece_instances(counts)
        .enumerate()
        .map(|(block, piece)| {
            let offset = Cell::new(
                (block % blocks_per_row) * side,
                (block / blocks_per_row) * side,
            );
            let cells = shapes[piece.shape_index]
                .cells()
                .iter()
                .map(|cell| Cell::new(cell.x + offset.x, cell.y + offset.y))
                .collect();

            Placement {
                piece,
                orientation: 0,
                offset,
                cells,
            }
        })
        .collect();

    Some(Verdict::Feasible(placements))
}

/// Decide whether `counts[t]` copies of each `shapes[t]` fit into a `width` by
/// `height` board without overlapping, using the default SAT backend.
///
/// Pieces may be rotated, and mirrored as well if `allow_reflections` is
/// true.
///
/// # Panics
///
/// Panics if `shapes` and `counts` have different lengths.
pub fn can_pack(
    shapes: &[Shape],
    counts: &[usize],
    width: usize,
    height: usize,
    allow_reflections: bool,
) -> Result<bool, Error> {
    let verdict = Packer::new()
        .allow_reflections(allow_reflections)
        .pack(shapes, counts, width, height)?;

    Ok(verdict.is_feasible())
}
