use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    fn to_nd_index(self) -> [usize; 2];
}

impl ToNdIndex for Coord2 {
    fn to_nd_index(self) -> [usize; 2] {
        let (row, col) = self;
        [usize::from(row), usize::from(col)]
    }
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        // boards are built from `Coord` dimensions, so this never saturates
        let bounds = (
            rows.try_into().unwrap_or(Coord::MAX),
            cols.try_into().unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, bounds)
    }
}

/// Walks the 3x3 block around `center`, clipped to the board, in row-major order.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    include_center: bool,
    first_col: Coord,
    last: Coord2,
    next: Option<Coord2>,
}

impl NeighborIter {
    /// Positions touching `center`, diagonals included.
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self::window(center, bounds, false)
    }

    /// Same block as [`NeighborIter::new`] with `center` itself kept in its row-major slot.
    pub fn with_center(center: Coord2, bounds: Coord2) -> Self {
        Self::window(center, bounds, true)
    }

    fn window(center: Coord2, bounds: Coord2, include_center: bool) -> Self {
        let (row, col) = center;
        let (rows, cols) = bounds;
        let in_bounds = row < rows && col < cols;

        let first = (row.saturating_sub(1), col.saturating_sub(1));
        let last = (
            row.saturating_add(1).min(rows.saturating_sub(1)),
            col.saturating_add(1).min(cols.saturating_sub(1)),
        );

        Self {
            center,
            include_center,
            first_col: first.1,
            last,
            next: in_bounds.then_some(first),
        }
    }

    fn advance(&self, (row, col): Coord2) -> Option<Coord2> {
        if col < self.last.1 {
            Some((row, col + 1))
        } else if row < self.last.0 {
            Some((row + 1, self.first_col))
        } else {
            None
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.next?;
            self.next = self.advance(current);

            if self.include_center || current != self.center {
                return Some(current);
            }
        }
    }
}

/// Whether `a` and `b` are the same cell or touch, diagonals included.
pub const fn is_adjacent_or_same(a: Coord2, b: Coord2) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (9, 9)).collect();
        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((4, 4), (9, 9)).count(), 8);
    }

    #[test]
    fn edge_of_rectangular_board_is_clamped() {
        let neighbors: Vec<_> = NeighborIter::new((2, 4), (3, 5)).collect();
        assert_eq!(neighbors, [(1, 3), (1, 4), (2, 3)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
        assert_eq!(NeighborIter::with_center((0, 0), (1, 1)).collect::<Vec<_>>(), [(0, 0)]);
    }

    #[test]
    fn window_keeps_center_in_place() {
        let window: Vec<_> = NeighborIter::with_center((0, 1), (2, 2)).collect();
        assert_eq!(window, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn far_corner_of_largest_board() {
        let neighbors: Vec<_> = NeighborIter::new((254, 254), (255, 255)).collect();
        assert_eq!(neighbors, [(253, 253), (253, 254), (254, 253)]);
    }

    #[test]
    fn out_of_bounds_center_yields_nothing() {
        assert_eq!(NeighborIter::with_center((3, 0), (3, 3)).count(), 0);
    }

    #[test]
    fn adjacency_includes_diagonals_and_self() {
        assert!(is_adjacent_or_same((3, 3), (3, 3)));
        assert!(is_adjacent_or_same((3, 3), (4, 2)));
        assert!(!is_adjacent_or_same((3, 3), (5, 3)));
    }
}
