//! Parser for the textual puzzle format.
//!
//! A puzzle lists the piece shapes, then the regions to fill:
//!
//! ```text
//! 0:
//! ###
//! ##.
//! ##.
//!
//! 1:
//! .#.
//! ###
//!
//! 4x4: 0 2
//! 12x5: 1 3
//! ```
//!
//! A shape starts with an `<name>:` header followed by stencil rows of `#`
//! (occupied) and `.` (empty), ending at a blank line. A region line gives
//! the board as `<width>x<height>:` followed by how many copies of each shape,
//! in the order the shapes were defined, must be placed.

use crate::{
    error::{Error, ParseError},
    sat::{Packer, SatBackend},
    shape::Shape,
};
use std::str::FromStr;

/// A board size and the number of copies of each shape to fit into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Board width.
    pub width: usize,
    /// Board height.
    pub height: usize,
    /// Number of copies of each shape, aligned with the puzzle's shapes.
    pub counts: Vec<usize>,
}

/// A parsed puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// The piece shapes, in definition order.
    pub shapes: Vec<Shape>,
    /// The regions to fill.
    pub regions: Vec<Region>,
}

impl Puzzle {
    /// Count the regions whose pieces can be packed with the given packer.
    pub fn count_packable<B: SatBackend>(&self, packer: &mut Packer<B>) -> Result<usize, Error> {
        let mut count = 0;
        for (idx, region) in self.regions.iter().enumerate() {
            let verdict = packer.pack(&self.shapes, &region.counts, region.width, region.height)?;
            log::info!(
                "Region [{}] ({}x{}): feasible = [{}].",
                idx,
                region.width,
                region.height,
                verdict.is_feasible()
            );

            if verdict.is_feasible() {
                count += 1;
            }
        }

        Ok(count)
    }
}

impl FromStr for Puzzle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut shapes = Vec::new();
        let mut regions = Vec::new();
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .peekable();

        while let Some((line_no, line)) = lines.next() {
            if line.is_empty() {
                continue;
            }

            if let Some(name) = line.strip_suffix(':') {
                let mut rows = Vec::new();
                while let Some((row_no, row)) = lines.next_if(|(_, row)| !row.is_empty()) {
                    if let Some(found) = row.chars().find(|c| *c != '#' && *c != '.') {
                        return Err(ParseError::InvalidShapeChar { line: row_no, found });
                    }
                    rows.push(row);
                }

                if rows.is_empty() {
                    return Err(ParseError::MissingShapeRows {
                        line: line_no,
                        name: name.to_string(),
                    });
                }
                if !rows.iter().any(|row| row.contains('#')) {
                    return Err(ParseError::EmptyShape {
                        line: line_no,
                        name: name.to_string(),
                    });
                }

                shapes.push(Shape::from_rows(name.trim(), &rows));
            } else {
                regions.push((line_no, parse_region(line_no, line)?));
            }
        }

        // Shapes may follow regions, so counts are checked once everything
        // has been read.
        for (line, region) in &regions {
            if region.counts.len() != shapes.len() {
                return Err(ParseError::CountMismatch {
                    line: *line,
                    expected: shapes.len(),
                    found: region.counts.len(),
                });
            }
        }

        log::debug!(
            "Parsed [{}] shapes and [{}] regions.",
            shapes.len(),
            regions.len()
        );

        Ok(Puzzle {
            shapes,
            regions: regions.into_iter().map(|(_, region)| region).collect(),
        })
    }
}

fn parse_region(line_no: usize, line: &str) -> Result<Region, ParseError> {
    let invalid = || ParseError::InvalidRegion {
        line: line_no,
        input: line.to_string(),
    };
    let parse_int = |text: &str| {
        text.trim()
            .parse::<usize>()
            .map_err(|source| ParseError::InvalidInt {
                line: line_no,
                source,
            })
    };

    let (size, counts) = line.split_once(':').ok_or_else(invalid)?;
    let (width, height) = size.split_once('x').ok_or_else(invalid)?;

    Ok(Region {
        width: parse_int(width)?,
        height: parse_int(height)?,
        counts: counts
            .split_whitespace()
            .map(parse_int)
            .collect::<Result<_, _>>()?,
    })
}
