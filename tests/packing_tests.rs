mod common;

use common::{assert_packing, assert_tiling, small_shapes};
use polyomino_packing::{
    can_exactly_cover, can_pack, shape::Shape, Infeasibility, Packer, Verdict,
};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Every count vector over `num_shapes` shapes using at most `max_pieces`
// pieces in total.
fn count_vectors(num_shapes: usize, max_pieces: usize) -> Vec<Vec<usize>> {
    if num_shapes == 0 {
        return vec![Vec::new()];
    }

    (0..=max_pieces)
        .flat_map(|first| {
            count_vectors(num_shapes - 1, max_pieces - first)
                .into_iter()
                .map(move |mut rest| {
                    rest.insert(0, first);
                    rest
                })
        })
        .collect()
}

#[test]
fn dominoes_on_two_by_two() {
    init_logging();

    let domino = [Shape::from([[1, 1]])];

    let verdict = can_exactly_cover(&domino, &[2], 2, 2);
    assert_tiling(&domino, &[2], 2, 2, verdict.placements().unwrap());
    assert!(can_pack(&domino, &[2], 2, 2, false).unwrap());

    // A single domino leaves two cells empty. It packs but does not tile.
    assert_eq!(
        can_exactly_cover(&domino, &[1], 2, 2),
        Verdict::Infeasible(Infeasibility::AreaMismatch {
            required: 2,
            available: 4
        })
    );
    assert!(can_pack(&domino, &[1], 2, 2, false).unwrap());
}

#[test]
fn l_trominoes_on_three_by_three() {
    init_logging();

    let l_tromino = [Shape::from([[1, 0], [1, 1]])];

    assert!(!can_exactly_cover(&l_tromino, &[3], 3, 3).is_feasible());
    assert!(!can_pack(&l_tromino, &[3], 3, 3, false).unwrap());
    assert!(!can_pack(&l_tromino, &[3], 3, 3, true).unwrap());

    let verdict = Packer::new().pack(&l_tromino, &[2], 3, 3).unwrap();
    assert_packing(&l_tromino, &[2], 3, 3, verdict.placements().unwrap());
}

#[test]
fn too_much_area() {
    let shapes = small_shapes();
    let counts = [0, 0, 0, 5, 0];

    assert_eq!(
        Packer::new().pack(&shapes, &counts, 4, 4).unwrap(),
        Verdict::Infeasible(Infeasibility::AreaExceeded {
            required: 20,
            available: 16
        })
    );
}

#[test]
fn disjoint_blocks_are_verified_placements() {
    let shapes = small_shapes();
    let counts = [1, 1, 1, 1, 1];

    // Every shape fits in a 3 by 3 block, and a 9 by 6 board has six of them.
    let verdict = Packer::new().pack(&shapes, &counts, 9, 6).unwrap();
    assert_packing(&shapes, &counts, 9, 6, verdict.placements().unwrap());
}

#[test]
fn tiling_and_packing_agree_when_areas_match() {
    init_logging();

    let shapes = small_shapes();
    let mut cases = Vec::new();
    for width in 1..=4 {
        for height in 1..=4 {
            for counts in count_vectors(shapes.len(), 4) {
                let area: usize = shapes.iter().zip(&counts).map(|(s, c)| s.area() * c).sum();
                if area == width * height {
                    cases.push((width, height, counts));
                }
            }
        }
    }
    assert!(!cases.is_empty());

    cases.into_par_iter().for_each(|(width, height, counts)| {
        let tiling = can_exactly_cover(&shapes, &counts, width, height);
        let packing = Packer::new()
            .pack(&shapes, &counts, width, height)
            .unwrap();

        assert_eq!(
            tiling.is_feasible(),
            packing.is_feasible(),
            "Disagreement on [{}x{}] with counts {:?}: tiling = {:?}, packing = {:?}",
            width,
            height,
            counts,
            tiling,
            packing
        );

        if let Some(placements) = tiling.placements() {
            assert_tiling(&shapes, &counts, width, height, placements);
        }
        if let Some(placements) = packing.placements() {
            assert_tiling(&shapes, &counts, width, height, placements);
        }
    });
}

#[test]
fn reflections_only_widen_packing() {
    let shapes = small_shapes();

    for width in 1..=4 {
        for height in 1..=3 {
            for counts in count_vectors(shapes.len(), 3) {
                let rotated = can_pack(&shapes, &counts, width, height, false).unwrap();
                let mirrored = can_pack(&shapes, &counts, width, height, true).unwrap();

                assert!(
                    !rotated || mirrored,
                    "Reflections lost a packing on [{}x{}] with counts {:?}",
                    width,
                    height,
                    counts
                );
            }
        }
    }
}
