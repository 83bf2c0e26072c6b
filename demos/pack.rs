//! Decide every region of a puzzle file
//! Usage:
//!
//! ```bash
//! RUST_LOG=info cargo run --release --example pack puzzle.txt
//! ```

use polyomino_packing::{input::Puzzle, Packer};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("puzzle file needed");
        std::process::exit(1);
    }

    let text = match std::fs::read_to_string(&args[1]) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("unable to read [{}]: {}", args[1], err);
            std::process::exit(1);
        }
    };

    let puzzle: Puzzle = match text.parse() {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("invalid puzzle: {}", err);
            std::process::exit(1);
        }
    };

    let mut packer = Packer::new();
    let mut packable = 0;
    for region in &puzzle.regions {
        let verdict = match packer.pack(&puzzle.shapes, &region.counts, region.width, region.height) {
            Ok(verdict) => verdict,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        };

        match verdict.into_placements() {
            Some(placements) => {
                println!(
                    "{}x{} {:?}: fits, {} pieces placed",
                    region.width,
                    region.height,
                    region.counts,
                    placements.len()
                );
                packable += 1;
            }
            None => println!(
                "{}x{} {:?}: does not fit",
                region.width, region.height, region.counts
            ),
        }
    }

    println!("{}", packable);
}
