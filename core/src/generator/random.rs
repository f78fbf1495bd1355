use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use super::*;

/// Uniform placement: every draw picks a tile at random, and draws landing on a
/// tile that already holds a mine are thrown away and repeated.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        use rand::prelude::*;

        // a full board would never finish sampling
        let config = GameConfig::new(config.size, config.mines)?;
        let target = usize::from(config.mines);

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: BTreeSet<Coord2> = BTreeSet::new();
        let mut rejected = 0usize;

        while placed.len() < target {
            let coords = (
                rng.random_range(0..config.size),
                rng.random_range(0..config.size),
            );
            if !placed.insert(coords) {
                rejected += 1;
            }
        }

        if rejected > usize::from(config.total_tiles()) {
            log::warn!(
                "Dense layout needed {} redraws for {} mines on {} tiles",
                rejected,
                config.mines,
                config.total_tiles()
            );
        } else {
            log::trace!("Layout generated with {} redraws", rejected);
        }

        let mine_coords: Vec<Coord2> = placed.into_iter().collect();
        MineLayout::from_mine_coords(config.size, &mine_coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_mines() {
        for seed in 0..64 {
            let layout = RandomLayoutGenerator::new(seed)
                .generate(GameConfig::default())
                .unwrap();

            let coords = layout.mine_coords();
            let unique: BTreeSet<_> = coords.iter().copied().collect();
            assert_eq!(layout.mine_count(), 10);
            assert_eq!(coords.len(), 10);
            assert_eq!(unique.len(), 10);
            assert!(coords.iter().all(|&(x, y)| x < 7 && y < 7));
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let config = GameConfig::default();
        let a = RandomLayoutGenerator::new(42).generate(config).unwrap();
        let b = RandomLayoutGenerator::new(42).generate(config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn nearly_full_board_still_terminates() {
        let config = GameConfig::new_unchecked(3, 8);
        let layout = RandomLayoutGenerator::new(7).generate(config).unwrap();
        assert_eq!(layout.mine_count(), 8);
        assert_eq!(layout.safe_tile_count(), 1);
    }

    #[test]
    fn refuses_full_board() {
        let config = GameConfig::new_unchecked(2, 4);
        assert_eq!(
            RandomLayoutGenerator::new(0).generate(config),
            Err(GameError::TooManyMines)
        );
    }

    #[test]
    fn zero_mines_gives_empty_layout() {
        let config = GameConfig::new_unchecked(1, 0);
        let layout = RandomLayoutGenerator::new(0).generate(config).unwrap();
        assert_eq!(layout.mine_count(), 0);
        assert!(!layout.contains_mine((0, 0)));
    }
}
