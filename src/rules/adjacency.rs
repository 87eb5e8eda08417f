//! The "no isolated piece" side of the rules: every piece on the board must
//! touch another piece, and the formation as a whole must stay in one block.

use rustc_hash::FxHashSet;

use crate::coord::Coord;

/// Is any of the 8 cells around `cell` present in `others`?
///
/// This is the weak, per-piece notion: a bridge piece can pass it while its
/// removal still splits the formation. Board-wide decisions use
/// [`all_connected`] instead.
pub fn has_any_neighbor(cell: Coord, others: &FxHashSet<Coord>) -> bool {
    cell.neighbors().any(|n| others.contains(&n))
}

/// Are the cells a single 8-connected component?
///
/// Cells are graph nodes with edges between pairs at Chebyshev distance 1.
/// Vacuously true for zero or one cell. Flood fill from an arbitrary cell and
/// compare visit count; the board is capped at 4x4 so this is trivially cheap.
pub fn all_connected(cells: &FxHashSet<Coord>) -> bool {
    let mut iter = cells.iter();
    let Some(&start) = iter.next() else {
        return true;
    };

    let mut visited: FxHashSet<Coord> = FxHashSet::default();
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(c) = stack.pop() {
        for n in c.neighbors() {
            if cells.contains(&n) && visited.insert(n) {
                stack.push(n);
            }
        }
    }

    visited.len() == cells.len()
}

/// Would the formation stay connected with `removed` vacated?
pub fn connected_without(cells: &FxHashSet<Coord>, removed: Coord) -> bool {
    let remaining: FxHashSet<Coord> = cells.iter().copied().filter(|&c| c != removed).collect();
    all_connected(&remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(v: &[(i16, i16)]) -> FxHashSet<Coord> {
        v.iter().map(|&(x, y)| Coord::new(x, y)).collect()
    }

    #[test]
    fn diagonal_touch_counts_as_adjacent() {
        let others = cells(&[(1, 1)]);
        assert!(has_any_neighbor(Coord::new(0, 0), &others));
        assert!(!has_any_neighbor(Coord::new(3, 0), &others));
    }

    #[test]
    fn single_cell_and_empty_are_connected() {
        assert!(all_connected(&cells(&[])));
        assert!(all_connected(&cells(&[(2, 2)])));
    }

    #[test]
    fn two_clusters_are_not_connected() {
        // Each piece has a neighbor, yet the formation is split in two.
        let split = cells(&[(0, 0), (0, 1), (3, 3), (3, 2)]);
        assert!(!all_connected(&split));
    }

    #[test]
    fn bridge_removal_disconnects() {
        // (1, 0) bridges the two ends; it has neighbors on both sides.
        let line = cells(&[(0, 0), (1, 0), (2, 0)]);
        assert!(all_connected(&line));
        assert!(!connected_without(&line, Coord::new(1, 0)));
        assert!(connected_without(&line, Coord::new(0, 0)));
    }
}
