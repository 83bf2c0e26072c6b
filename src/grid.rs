//! Sparse boolean matrix supporting the dancing links operations.
//!
//! All nodes live in a single flat arena and refer to their neighbours by
//! index. Node `0` is the root of the header ring, nodes `1..=num_columns`
//! are the column headers, and every node after that belongs to a row.
//!
//! ```text
//! root <-> C0 <-> C1 <-> C2 <-> ... <-> root     (primary headers only)
//!          |      |      |
//!          r0 <-------> r0                        (row nodes, circular)
//!          |      |      |
//!                 r1 <-> r1
//! ```

const ROOT: usize = 0;

/// Whether a column must be covered by every solution.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// The column must be covered exactly once.
    Primary,
    /// The column may be covered at most once.
    Secondary,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    column: usize,
    row: usize,
}

impl Node {
    fn self_ref(index: usize, column: usize, row: usize) -> Self {
        Node {
            left: index,
            right: index,
            up: index,
            down: index,
            column,
            row,
        }
    }
}

/// Dancing links matrix.
///
/// Covering a column unlinks it from the header ring and removes every row
/// that intersects it from all other columns. Uncovering performs the exact
/// inverse, so a `cover(c)` immediately followed by `uncover(c)` leaves the
/// grid link-identical to its previous state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    nodes: Vec<Node>,
    sizes: Vec<usize>,
    kinds: Vec<ColumnKind>,
    num_rows: usize,
}

impl Grid {
    /// Create an empty grid with one column per entry of `kinds`.
    ///
    /// Primary column headers are linked into the header ring in order;
    /// secondary column headers stay outside of it.
    pub fn new(kinds: impl IntoIterator<Item = ColumnKind>) -> Self {
        let kinds: Vec<ColumnKind> = kinds.into_iter().collect();
        let num_columns = kinds.len();

        let mut nodes = Vec::with_capacity(num_columns + 1);
        nodes.push(Node::self_ref(ROOT, usize::MAX, usize::MAX));

        for (column, kind) in kinds.iter().enumerate() {
            let header = nodes.len();
            nodes.push(Node::self_ref(header, column, usize::MAX));

            if *kind == ColumnKind::Primary {
                let last = nodes[ROOT].left;
                nodes[header].left = last;
                nodes[header].right = ROOT;
                nodes[last].right = header;
                nodes[ROOT].left = header;
            }
        }

        Grid {
            nodes,
            sizes: vec![0; num_columns],
            kinds,
            num_rows: 0,
        }
    }

    /// Reserve space for at least `additional` more row nodes.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Number of columns in the grid.
    pub fn num_columns(&self) -> usize {
        self.kinds.len()
    }

    /// Number of rows added to the grid.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Append a row filling the given columns.
    ///
    /// The row is identified by `row` in [`Grid::row_id`]. Each new node is
    /// inserted at the bottom of its column, and the nodes of the row are
    /// linked circularly in the order given. Rows with no columns are
    /// ignored.
    ///
    /// # Panics
    ///
    /// Panics if any column index is out of range.
    pub fn add_row(&mut self, row: usize, columns: impl IntoIterator<Item = usize>) {
        let mut first: Option<usize> = None;

        for column in columns {
            assert!(
                column < self.num_columns(),
                "Column index [{}] out of range for grid with [{}] columns.",
                column,
                self.num_columns()
            );

            let index = self.nodes.len();
            let header = Self::header(column);
            self.nodes.push(Node::self_ref(index, column, row));

            // Vertical: insert above the header, i.e. at the bottom.
            let last = self.nodes[header].up;
            self.nodes[index].up = last;
            self.nodes[index].down = header;
            self.nodes[last].down = index;
            self.nodes[header].up = index;
            self.sizes[column] += 1;

            // Horizontal: insert to the left of the first node, i.e. at the end.
            if let Some(first) = first {
                let last = self.nodes[first].left;
                self.nodes[index].left = last;
                self.nodes[index].right = first;
                self.nodes[last].right = index;
                self.nodes[first].left = index;
            } else {
                first = Some(index);
            }
        }

        if first.is_some() {
            self.num_rows += 1;
        }
    }

    #[inline]
    fn header(column: usize) -> usize {
        column + 1
    }

    /// Cover entire column, and any rows that that appear in this column.
    pub fn cover(&mut self, column: usize) {
        let header = Self::header(column);

        if self.kinds[column] == ColumnKind::Primary {
            let Node { left, right, .. } = self.nodes[header];
            self.nodes[left].right = right;
            self.nodes[right].left = left;
        }

        let mut row = self.nodes[header].down;
        while row != header {
            let mut node = self.nodes[row].right;
            while node != row {
                let Node {
                    up, down, column, ..
                } = self.nodes[node];
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                self.sizes[column] -= 1;

                node = self.nodes[node].right;
            }

            row = self.nodes[row].down;
        }
    }

    /// Uncover entire column, and any rows that appear in this column.
    ///
    /// Must be called in the reverse order of the matching `cover` calls.
    pub fn uncover(&mut self, column: usize) {
        let header = Self::header(column);

        let mut row = self.nodes[header].up;
        while row != header {
            let mut node = self.nodes[row].left;
            while node != row {
                let Node {
                    up, down, column, ..
                } = self.nodes[node];
                self.nodes[up].down = node;
                self.nodes[down].up = node;
                self.sizes[column] += 1;

                node = self.nodes[node].left;
            }

            row = self.nodes[row].up;
        }

        if self.kinds[column] == ColumnKind::Primary {
            let Node { left, right, .. } = self.nodes[header];
            self.nodes[left].right = header;
            self.nodes[right].left = header;
        }
    }

    /// Return true if there are no primary columns left in the header ring.
    pub fn is_solved(&self) -> bool {
        self.nodes[ROOT].right == ROOT
    }

    /// Return an iterator over the primary columns still linked in the header
    /// ring.
    pub fn uncovered_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.walk(ROOT, |node| node.right)
            .map(move |header| self.nodes[header].column)
    }

    /// Choose the uncovered primary column with the fewest remaining rows,
    /// preferring the leftmost column on ties.
    ///
    /// Returns `None` if every primary column is covered.
    pub fn choose_column(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;

        for column in self.uncovered_columns() {
            let size = self.sizes[column];
            if best.map_or(true, |(_, min_size)| size < min_size) {
                best = Some((column, size));
                if size == 0 {
                    break;
                }
            }
        }

        best.map(|(column, _)| column)
    }

    /// Return the number of rows uncovered in this column.
    pub fn column_size(&self, column: usize) -> usize {
        self.sizes[column]
    }

    /// Return an iterator over the uncovered row nodes in this column, from
    /// top to bottom.
    pub fn rows_in_column(&self, column: usize) -> impl Iterator<Item = usize> + '_ {
        self.walk(Self::header(column), |node| node.down)
    }

    /// Return the columns of every other node in the same row as `node`, in
    /// row order starting to the right of `node`.
    pub fn columns_in_row(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.walk(node, |node| node.right)
            .map(move |index| self.nodes[index].column)
    }

    /// Return the row identifier that `node` was added with.
    pub fn row_id(&self, node: usize) -> usize {
        self.nodes[node].row
    }

    /// Return the column `node` belongs to.
    pub fn column_of(&self, node: usize) -> usize {
        self.nodes[node].column
    }

    fn walk(&self, start: usize, step: fn(&Node) -> usize) -> NodeIter<'_> {
        NodeIter {
            nodes: &self.nodes,
            start,
            current: start,
            step,
        }
    }
}

#[derive(Debug)]
struct NodeIter<'g> {
    nodes: &'g [Node],
    start: usize,
    current: usize,
    step: fn(&Node) -> usize,
}

impl Iterator for NodeIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let next = (self.step)(&self.nodes[self.current]);

        if next == self.start {
            None
        } else {
            self.current = next;
            Some(next)
        }
    }
}
