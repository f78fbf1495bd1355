/// Single coordinate axis, used for the board side length and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-tile counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Tile count of a `side` x `side` board.
pub const fn area(side: Coord) -> CellCount {
    let side = side as CellCount;
    side.saturating_mul(side)
}

const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The up-to-8 tiles touching `center` on a square board of the given side.
pub fn neighbors(center: Coord2, side: Coord) -> impl Iterator<Item = Coord2> {
    let (x, y) = center;
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let nx = x.checked_add_signed(dx).filter(|&nx| nx < side)?;
        let ny = y.checked_add_signed(dy).filter(|&ny| ny < side)?;
        Some((nx, ny))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let found: Vec<_> = neighbors((0, 0), 7).collect();
        assert_eq!(found, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn inner_tile_has_eight_neighbors_and_skips_itself() {
        let found: Vec<_> = neighbors((3, 3), 7).collect();
        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(3, 3)));
    }

    #[test]
    fn single_tile_board_has_no_neighbors() {
        assert_eq!(neighbors((0, 0), 1).count(), 0);
    }

    #[test]
    fn far_edge_is_clipped() {
        let found: Vec<_> = neighbors((6, 3), 7).collect();
        assert_eq!(found.len(), 5);
        assert!(found.iter().all(|&(x, _)| x >= 5 && x < 7));
    }

    #[test]
    fn largest_board_does_not_wrap() {
        let found: Vec<_> = neighbors((254, 254), 255).collect();
        assert_eq!(found, [(253, 253), (254, 253), (253, 254)]);
    }

    #[test]
    fn area_covers_largest_board() {
        assert_eq!(area(7), 49);
        assert_eq!(area(255), 65025);
    }
}
