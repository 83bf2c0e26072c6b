use crate::{
    grid::{ColumnKind, Grid},
    ExactCover,
};
use std::collections::VecDeque;

/// Solver that iteratively returns solutions to exact cover problems.
#[derive(Debug)]
pub struct Solver<'e, E: ExactCover> {
    problem: &'e E,

    // Values used to track the state of solving
    grid: Grid,
    partial_solution: Vec<usize>,
    stack: Vec<Frame>,
}

#[derive(Debug)]
enum FrameState {
    // Before covering one of the rows
    Cover,
    // After checking, before uncovering
    Uncover,
}

#[derive(Debug)]
struct Frame {
    // Each candidate row, paired with every column it covers. The chosen
    // column comes first.
    selected_rows: VecDeque<(usize, Vec<usize>)>,
    state: FrameState,
}

impl<'e, E> Solver<'e, E>
where
    E: ExactCover,
{
    /// Create a new `Solver` with the given instance of an exact cover problem.
    pub fn new(problem: &'e E) -> Self {
        let grid = Self::populate_grid(problem);

        let mut solver = Self {
            problem,

            grid,
            partial_solution: Vec::new(),
            stack: Vec::new(),
        };
        solver.push_initial_frame();

        solver
    }

    /// Reset all solver state except for the stored possibilities and
    /// constraints.
    pub fn reset(&mut self) {
        self.grid = Self::populate_grid(self.problem);
        self.partial_solution.clear();
        self.stack.clear();
        self.push_initial_frame();
    }

    fn push_initial_frame(&mut self) {
        if self.grid.is_solved() {
            // A problem without primary constraints has exactly one solution,
            // the empty one. Push a frame with a single empty row so that
            // solution is reported once.
            self.stack.push(Frame {
                selected_rows: VecDeque::from([(usize::MAX, Vec::new())]),
                state: FrameState::Cover,
            });
        } else if let Some(frame) = Self::next_frame(&self.grid) {
            self.stack.push(frame);
        }
    }

    fn populate_grid(problem: &E) -> Grid {
        let kinds = problem.constraints().iter().map(|cons| {
            if problem.is_optional(cons) {
                ColumnKind::Secondary
            } else {
                ColumnKind::Primary
            }
        });

        let rows: Vec<Vec<usize>> = problem
            .possibilities()
            .iter()
            .map(|poss| problem.satisfied_constraints(poss))
            .collect();

        let mut grid = Grid::new(kinds);
        grid.reserve(rows.iter().map(Vec::len).sum());
        for (row_index, columns) in rows.into_iter().enumerate() {
            grid.add_row(row_index, columns);
        }

        log::debug!(
            "Populated grid with [{}] rows and [{}] columns.",
            grid.num_rows(),
            grid.num_columns()
        );

        grid
    }

    /// Select the column with the fewest remaining rows, and build a frame
    /// that will try each of them in turn.
    ///
    /// Returns `None` if that column has no rows left, in which case the
    /// current partial solution cannot be extended.
    fn next_frame(grid: &Grid) -> Option<Frame> {
        let min_column = grid.choose_column()?;
        log::trace!(
            "Chose column [{}] with [{}] rows.",
            min_column,
            grid.column_size(min_column)
        );

        let selected_rows: VecDeque<_> = grid
            .rows_in_column(min_column)
            .map(|node| {
                let columns = std::iter::once(min_column)
                    .chain(grid.columns_in_row(node))
                    .collect();

                (grid.row_id(node), columns)
            })
            .collect();

        if selected_rows.is_empty() {
            None
        } else {
            Some(Frame {
                selected_rows,
                state: FrameState::Cover,
            })
        }
    }

    /// Return all possible solutions.
    pub fn all_solutions(&mut self) -> Vec<Vec<&'e E::Possibility>> {
        self.collect()
    }

    /// Compute up to the next solution, returning `None` if there are no more.
    pub fn next_solution<'s>(&'s mut self) -> Option<Vec<&'e E::Possibility>>
    where
        'e: 's,
    {
        enum StackOp<T> {
            Push(T),
            Pop,
            None,
        }

        while let Some(curr_frame) = self.stack.last_mut() {
            let (stack_op, possible_solution) = match curr_frame.state {
                // for the current row of this frame, cover the selected columns and add the row
                // to the solution.
                FrameState::Cover => {
                    let (row_index, columns) = curr_frame.selected_rows.front()?;

                    if *row_index != usize::MAX {
                        self.partial_solution.push(*row_index);
                    }
                    for column in columns {
                        self.grid.cover(*column);
                    }

                    // This is where the recursion happens, but we also have to check for the
                    // solution here.
                    let stack_op = if self.grid.is_solved() {
                        (StackOp::None, Some(self.partial_solution.clone()))
                    } else {
                        match Self::next_frame(&self.grid) {
                            Some(frame) => (StackOp::Push(frame), None),
                            None => (StackOp::None, None),
                        }
                    };

                    curr_frame.state = FrameState::Uncover;
                    stack_op
                }
                // Cleanup the current row, uncover the selected columns in reverse order, remove
                // the row from the solution.
                FrameState::Uncover => {
                    let (row_index, columns) = curr_frame.selected_rows.pop_front()?;

                    for column in columns.into_iter().rev() {
                        self.grid.uncover(column);
                    }
                    if row_index != usize::MAX {
                        self.partial_solution.pop();
                    }

                    if curr_frame.selected_rows.is_empty() {
                        (StackOp::Pop, None)
                    } else {
                        curr_frame.state = FrameState::Cover;
                        (StackOp::None, None)
                    }
                }
            };

            match stack_op {
                StackOp::Push(val) => {
                    log::trace!("Descending to level [{}].", self.stack.len());
                    self.stack.push(val);
                }
                StackOp::Pop => {
                    self.stack.pop();
                }
                StackOp::None => {}
            }

            if let Some(solution) = possible_solution {
                return Some(
                    solution
                        .into_iter()
                        .map(|row_index| &self.problem.possibilities()[row_index])
                        .collect(),
                );
            }
        }

        None
    }

    /// Return the first solution found, or `None` if the search space is
    /// exhausted without finding one.
    ///
    /// The solver is reset first, so the result does not depend on any
    /// solutions already taken from it.
    pub fn first_solution(&mut self) -> Option<Vec<&'e E::Possibility>> {
        self.reset();
        self.next_solution()
    }
}

impl<'e, E> Iterator for Solver<'e, E>
where
    E: ExactCover,
{
    type Item = Vec<&'e E::Possibility>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_solution()
    }
}
