mod common;

use common::{assert_packing, SAMPLE_PUZZLE};
use polyomino_packing::{input::Puzzle, shape::ShapeTransform, Packer};

#[test]
fn parse_sample_puzzle() {
    let puzzle: Puzzle = SAMPLE_PUZZLE.parse().unwrap();

    assert_eq!(puzzle.shapes.len(), 6);
    assert!(puzzle.shapes.iter().all(|shape| shape.area() == 7));
    assert_eq!(puzzle.regions.len(), 3);
    assert_eq!(puzzle.regions[1].width, 12);
    assert_eq!(puzzle.regions[1].height, 5);
    assert_eq!(puzzle.regions[2].counts, vec![1, 0, 1, 0, 3, 2]);
}

#[test]
fn sample_small_region() {
    let _ = env_logger::builder().is_test(true).try_init();

    let puzzle: Puzzle = SAMPLE_PUZZLE.parse().unwrap();
    let region = &puzzle.regions[0];

    let verdict = Packer::new()
        .transform(ShapeTransform::FullSymmetry)
        .pack(&puzzle.shapes, &region.counts, region.width, region.height)
        .unwrap();
    assert_packing(
        &puzzle.shapes,
        &region.counts,
        region.width,
        region.height,
        verdict.placements().unwrap(),
    );
}

#[test]
#[ignore = "proving the last region unsatisfiable takes several minutes, even in release mode"]
fn sample_puzzle_count() {
    let _ = env_logger::builder().is_test(true).try_init();

    let puzzle: Puzzle = SAMPLE_PUZZLE.parse().unwrap();
    let mut packer = Packer::new().allow_reflections(true);

    assert_eq!(puzzle.count_packable(&mut packer).unwrap(), 2);
}
