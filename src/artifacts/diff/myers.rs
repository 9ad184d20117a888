//! Shortest edit script search
//!
//! Forward Myers search over the edit graph of two token sequences. Each
//! depth `d` extends every reachable diagonal `k = x - y` by one deletion or
//! insertion, then follows the longest run of equal tokens (the snake).
//!
//! Every step is recorded as an [`AlignmentCell`] in an arena. Cells point
//! back to the cell they extend, so the frontiers of all depths share one
//! DAG and the winning path is rebuilt by walking back-pointers from the
//! terminal corner `(n, m)`.
//!
//! When a diagonal can be reached both by a deletion from `k - 1` and by an
//! insertion from `k + 1`, the deletion is only taken if it gets strictly
//! further. On ties the insertion is the final move, which places deletions
//! before insertions in the resulting script.

use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Equal,
    Insert,
    Delete,
}

pub type CellId = usize;

/// One recorded step of the search: `count` tokens of `operation` ending on
/// `diagonal` at search depth `depth`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentCell {
    pub diagonal: isize,
    pub depth: usize,
    pub operation: Operation,
    pub count: usize,
    pub prev: Option<CellId>,
}

/// Arena holding every cell visited by a search.
#[derive(Debug, Default)]
pub struct SearchArena {
    cells: Vec<AlignmentCell>,
    terminal: Option<CellId>,
    depth: usize,
}

impl SearchArena {
    fn push(&mut self, cell: AlignmentCell) -> CellId {
        self.cells.push(cell);
        self.cells.len() - 1
    }

    pub fn cells(&self) -> &[AlignmentCell] {
        &self.cells
    }

    pub fn terminal(&self) -> Option<CellId> {
        self.terminal
    }

    /// Edit distance of the path found, i.e. inserted plus deleted tokens.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

// furthest point reached on one diagonal
#[derive(Debug, Clone, Copy)]
struct Frontier {
    x: usize,
    tail: Option<CellId>,
}

pub trait DiffAlgorithm {
    type Trace;
    type EditPath;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self, trace: &Self::Trace) -> Self::EditPath;

    fn diff(&self) -> Self::EditPath {
        let trace = self.compute_shortest_edit();
        self.backtrack(&trace)
    }
}

#[derive(new)]
pub struct MyersDiff<'d, T, F> {
    a: &'d [T],
    b: &'d [T],
    equals: F,
}

impl<'d, T, F> MyersDiff<'d, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn follow_snake(
        &self,
        arena: &mut SearchArena,
        start: usize,
        diagonal: isize,
        depth: usize,
        tail: Option<CellId>,
    ) -> Frontier {
        let (n, m) = (self.a.len(), self.b.len());
        let mut x = start;
        let mut y = (start as isize - diagonal) as usize;

        while x < n && y < m && (self.equals)(&self.a[x], &self.b[y]) {
            x += 1;
            y += 1;
        }

        let tail = if x > start {
            Some(arena.push(AlignmentCell {
                diagonal,
                depth,
                operation: Operation::Equal,
                count: x - start,
                prev: tail,
            }))
        } else {
            tail
        };

        Frontier { x, tail }
    }

    // pick the predecessor of diagonal k at depth d, if any is in bounds
    fn choose_move(
        &self,
        v: &[Option<Frontier>],
        offset: usize,
        k: isize,
    ) -> Option<(Operation, Frontier)> {
        let (n, m) = (self.a.len(), self.b.len());
        let idx = (offset as isize + k) as usize;

        // a deletion moves right from k - 1, an insertion moves down from k + 1
        let deletion = idx
            .checked_sub(1)
            .and_then(|i| v[i])
            .filter(|prev| prev.x < n)
            .map(|prev| Frontier {
                x: prev.x + 1,
                tail: prev.tail,
            });
        let insertion = v
            .get(idx + 1)
            .copied()
            .flatten()
            .filter(|prev| ((prev.x as isize) - (k + 1)) < m as isize);

        match (deletion, insertion) {
            (Some(del), Some(ins)) if del.x > ins.x => Some((Operation::Delete, del)),
            (_, Some(ins)) => Some((Operation::Insert, ins)),
            (Some(del), None) => Some((Operation::Delete, del)),
            (None, None) => None,
        }
    }
}

impl<'d, T, F> DiffAlgorithm for MyersDiff<'d, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    type Trace = SearchArena;
    type EditPath = Vec<(Operation, usize)>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m) = (self.a.len(), self.b.len());
        let max = n + m;
        let offset = max;

        let mut arena = SearchArena::default();
        let mut v: Vec<Option<Frontier>> = vec![None; 2 * max + 1];

        let start = self.follow_snake(&mut arena, 0, 0, 0, None);
        v[offset] = Some(start);
        if start.x >= n && start.x >= m {
            arena.terminal = start.tail;
            return arena;
        }

        for d in 1..=max as isize {
            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let Some((operation, frontier)) = self.choose_move(&v, offset, k) else {
                    v[idx] = None;
                    continue;
                };

                let tail = Some(arena.push(AlignmentCell {
                    diagonal: k,
                    depth: d as usize,
                    operation,
                    count: 1,
                    prev: frontier.tail,
                }));

                let frontier = self.follow_snake(&mut arena, frontier.x, k, d as usize, tail);
                v[idx] = Some(frontier);

                let y = (frontier.x as isize - k) as usize;
                if frontier.x >= n && y >= m {
                    tracing::trace!(depth = d, diagonal = k, "reached terminal corner");
                    arena.terminal = frontier.tail;
                    arena.depth = d as usize;
                    return arena;
                }
            }
        }

        // unreachable for well-formed inputs, since depth n + m always suffices
        arena
    }

    fn backtrack(&self, trace: &Self::Trace) -> Self::EditPath {
        let mut edit_path = Vec::new();
        let mut cursor = trace.terminal();

        while let Some(id) = cursor {
            let cell = &trace.cells()[id];
            edit_path.push((cell.operation, cell.count));
            cursor = cell.prev;
        }

        edit_path.reverse();
        edit_path
    }
}

#[cfg(test)]
mod tests {
    use super::{DiffAlgorithm, MyersDiff, Operation};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn expand(path: Vec<(Operation, usize)>) -> Vec<Operation> {
        path.into_iter()
            .flat_map(|(operation, count)| std::iter::repeat_n(operation, count))
            .collect()
    }

    #[fixture]
    fn string_inputs() -> (Vec<char>, Vec<char>) {
        ("abcabba".chars().collect(), "cbabac".chars().collect())
    }

    #[fixture]
    fn file_inputs() -> (Vec<&'static str>, Vec<&'static str>) {
        (
            vec!["line1", "line2", "line3", "line4"],
            vec!["line2", "line3_modified", "line4", "line5"],
        )
    }

    #[rstest]
    fn finds_shortest_edit_for_strings(string_inputs: (Vec<char>, Vec<char>)) {
        let (a, b) = string_inputs;
        let myers = MyersDiff::new(a.as_slice(), b.as_slice(), |l: &char, r: &char| l == r);

        let trace = myers.compute_shortest_edit();
        let operations = expand(myers.backtrack(&trace));

        assert_eq!(trace.depth(), 5);
        assert_eq!(
            operations.iter().filter(|op| **op == Operation::Equal).count(),
            4
        );
        assert_eq!(operations.len(), 4 + 5);
    }

    #[rstest]
    fn finds_shortest_edit_for_lines(file_inputs: (Vec<&'static str>, Vec<&'static str>)) {
        let (a, b) = file_inputs;
        let result = expand(MyersDiff::new(a.as_slice(), b.as_slice(), |l: &&str, r: &&str| l == r).diff());

        assert_eq!(
            result,
            vec![
                Operation::Delete,
                Operation::Equal,
                Operation::Delete,
                Operation::Insert,
                Operation::Equal,
                Operation::Insert,
            ]
        );
    }

    #[test]
    fn identical_inputs_need_no_search() {
        let a = ["x", "y", "z"];
        let myers = MyersDiff::new(&a[..], &a[..], |l: &&str, r: &&str| l == r);

        let trace = myers.compute_shortest_edit();

        assert_eq!(trace.depth(), 0);
        assert_eq!(trace.cells().len(), 1);
        assert_eq!(myers.backtrack(&trace), vec![(Operation::Equal, 3)]);
    }

    #[test]
    fn empty_inputs_produce_empty_path() {
        let a: [&str; 0] = [];
        let myers = MyersDiff::new(&a[..], &a[..], |l: &&str, r: &&str| l == r);

        assert_eq!(myers.diff(), vec![]);
    }

    #[test]
    fn deletions_precede_insertions_on_ties() {
        let a = ["one", "two"];
        let b = ["three", "four"];
        let result = expand(MyersDiff::new(&a[..], &b[..], |l: &&str, r: &&str| l == r).diff());

        assert_eq!(
            result,
            vec![
                Operation::Delete,
                Operation::Delete,
                Operation::Insert,
                Operation::Insert,
            ]
        );
    }

    #[test]
    fn uses_supplied_equality() {
        let a = ["A", "b"];
        let b = ["a", "B"];
        let myers = MyersDiff::new(&a[..], &b[..], |l: &&str, r: &&str| {
            l.eq_ignore_ascii_case(r)
        });

        assert_eq!(myers.diff(), vec![(Operation::Equal, 2)]);
    }

    #[test]
    fn records_cells_on_their_diagonals() {
        let a = ["a", "b", "c"];
        let b = ["a", "x", "c"];
        let myers = MyersDiff::new(&a[..], &b[..], |l: &&str, r: &&str| l == r);

        let trace = myers.compute_shortest_edit();
        let mut cursor = trace.terminal();
        let mut visited = Vec::new();
        while let Some(id) = cursor {
            let cell = &trace.cells()[id];
            visited.push((cell.operation, cell.diagonal, cell.depth));
            cursor = cell.prev;
        }

        assert_eq!(trace.depth(), 2);
        assert_eq!(
            visited,
            vec![
                (Operation::Equal, 0, 2),
                (Operation::Insert, 0, 2),
                (Operation::Delete, 1, 1),
                (Operation::Equal, 0, 0),
            ]
        );
    }
}
