//! Neighbor functions for the unbounded integer grid.

/// A grid cell `(x, y)`.
pub type Cell = (i64, i64);

/// 4-connected neighbors in the order right, left, up, down.
pub fn four_neighbors(&(x, y): &Cell) -> [Cell; 4] {
    [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
}

/// 8-connected neighbors: the four orthogonal cells, then the diagonals.
pub fn eight_neighbors(cell: &Cell) -> [Cell; 8] {
    let (x, y) = *cell;
    let [r, l, u, d] = four_neighbors(cell);
    [r, l, u, d, (x + 1, y + 1), (x + 1, y - 1), (x - 1, y + 1), (x - 1, y - 1)]
}
