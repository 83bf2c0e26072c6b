#![no_main]

use libfuzzer_sys::fuzz_target;
use polyomino_packing::{
    can_exactly_cover,
    shape::{Cell, Shape},
    Packer,
};
use std::collections::HashSet;

#[derive(Debug)]
struct SmallPackingInput {
    shapes: Vec<Shape>,
    counts: Vec<usize>,
    width: usize,
    height: usize,
}

impl<'a> arbitrary::Arbitrary<'a> for SmallPackingInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let num_shapes = u.int_in_range(1..=2)?;
        let mut shapes = Vec::with_capacity(num_shapes);
        let mut counts = Vec::with_capacity(num_shapes);
        for idx in 0..num_shapes {
            // Each shape is drawn from a 3 by 3 stencil, forcing at least one
            // occupied cell.
            let stencil = u.arbitrary::<u16>()? & 0x1FF;
            let stencil = if stencil == 0 { 1 } else { stencil };
            let cells = (0..9)
                .filter(|bit| stencil & (1 << bit) != 0)
                .map(|bit: usize| Cell::new(bit % 3, bit / 3));

            shapes.push(Shape::new(idx.to_string(), cells));
            counts.push(u.int_in_range(0..=2)?);
        }

        Ok(SmallPackingInput {
            shapes,
            counts,
            width: u.int_in_range(1..=4)?,
            height: u.int_in_range(1..=4)?,
        })
    }
}

fuzz_target!(|data: SmallPackingInput| {
    let SmallPackingInput {
        shapes,
        counts,
        width,
        height,
    } = data;

    let tiling = can_exactly_cover(&shapes, &counts, width, height);
    let packing = Packer::new()
        .pack(&shapes, &counts, width, height)
        .unwrap();

    for placements in [tiling.placements(), packing.placements()].into_iter().flatten() {
        let mut covered = HashSet::new();
        for placement in placements {
            for cell in &placement.cells {
                assert!(cell.x < width && cell.y < height);
                assert!(covered.insert(*cell));
            }
        }
    }

    // A tiling is a packing, and a packing of exactly the board's area is a
    // tiling.
    if tiling.is_feasible() {
        assert!(packing.is_feasible());
    }
    let area: usize = shapes.iter().zip(&counts).map(|(s, c)| s.area() * c).sum();
    if area == width * height {
        assert_eq!(tiling.is_feasible(), packing.is_feasible());
    }
});
