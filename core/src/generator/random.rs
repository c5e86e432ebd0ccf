use alloc::vec::Vec;
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform placement without replacement, optionally keeping the start cell (and its
/// neighborhood) clear.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator<R> {
    rng: R,
    start: Coord2,
    start_tile: StartTile,
}

impl<R: Rng> RandomMinefieldGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            start: (0, 0),
            start_tile: StartTile::Random,
        }
    }

    pub fn with_start(mut self, start: Coord2, start_tile: StartTile) -> Self {
        self.start = start;
        self.start_tile = start_tile;
        self
    }
}

impl RandomMinefieldGenerator<SmallRng> {
    /// Same seed and config always yield the same layout.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MinefieldGenerator for RandomMinefieldGenerator<R> {
    fn generate(mut self, config: GameConfig) -> Result<MineLayout> {
        use StartTile::*;

        config.validate()?;
        if self.start_tile != Random && !config.contains(self.start) {
            return Err(GameError::OutOfBounds);
        }

        let total_cells = usize::from(config.total_cells());
        let mines = usize::from(config.mines);
        let start_neighbors = NeighborIter::new(self.start, config.size);

        let actual_start_tile = match self.start_tile {
            AlwaysZero if mines + 1 + start_neighbors.clone().count() > total_cells => {
                log::warn!("Cannot make start tile zero, fallback to simple safe");
                SimpleSafe
            }
            start_tile => start_tile,
        };

        let mut reserved = Neighbors::new();
        match actual_start_tile {
            Random => {}
            SimpleSafe => reserved.push(self.start),
            AlwaysZero => {
                reserved.push(self.start);
                reserved.extend(start_neighbors);
            }
        }

        let columns = usize::from(config.columns());
        let flat_index = |(row, column): Coord2| usize::from(row) * columns + usize::from(column);
        let candidates: Vec<usize> = (0..total_cells)
            .filter(|&i| !reserved.iter().any(|&coords| flat_index(coords) == i))
            .collect();

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        for pick in index::sample(&mut self.rng, candidates.len(), mines) {
            let i = candidates[pick];
            mine_mask[[i / columns, i % columns]] = true;
        }

        let layout = MineLayout::from_mine_mask(mine_mask)?;
        log::debug!(
            "Generated {} mines on a {}x{} board, start policy {:?}",
            layout.mine_count(),
            config.rows(),
            config.columns(),
            actual_start_tile
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(config: GameConfig, seed: u64, start: Coord2, tile: StartTile) -> MineLayout {
        RandomMinefieldGenerator::from_seed(seed)
            .with_start(start, tile)
            .generate(config)
            .unwrap()
    }

    #[test]
    fn places_exactly_the_requested_mines() {
        for seed in 0..32 {
            for mines in [0, 1, 10, 40, 63] {
                let config = GameConfig::new(8, 8, mines).unwrap();
                let layout = generate(config, seed, (0, 0), StartTile::Random);

                assert_eq!(layout.mine_count(), mines);
                assert_eq!(layout.size(), (8, 8));
            }
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let config = GameConfig::new(16, 30, 99).unwrap();

        let a = generate(config, 42, (0, 0), StartTile::Random);
        let b = generate(config, 42, (0, 0), StartTile::Random);

        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let config = GameConfig::new(16, 30, 99).unwrap();

        let a = generate(config, 1, (0, 0), StartTile::Random);
        let b = generate(config, 2, (0, 0), StartTile::Random);

        assert_ne!(a, b);
    }

    #[test]
    fn accepts_borrowed_rng() {
        let config = GameConfig::new(5, 5, 5).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);

        let layout = RandomMinefieldGenerator::new(&mut rng)
            .generate(config)
            .unwrap();

        assert_eq!(layout.mine_count(), 5);
    }

    #[test]
    fn simple_safe_keeps_start_clear() {
        let config = GameConfig::new(3, 3, 8).unwrap();

        for seed in 0..16 {
            let layout = generate(config, seed, (1, 2), StartTile::SimpleSafe);

            assert!(!layout.contains_mine((1, 2)));
            assert_eq!(layout.mine_count(), 8);
        }
    }

    #[test]
    fn always_zero_keeps_neighborhood_clear() {
        let config = GameConfig::new(9, 9, 60).unwrap();

        for seed in 0..16 {
            let layout = generate(config, seed, (4, 4), StartTile::AlwaysZero);

            assert!(!layout.contains_mine((4, 4)));
            assert_eq!(layout.adjacent_mine_count((4, 4)), 0);
            assert_eq!(layout.mine_count(), 60);
        }
    }

    #[test]
    fn always_zero_falls_back_when_crowded() {
        let config = GameConfig::new(3, 3, 5).unwrap();

        let layout = generate(config, 3, (1, 1), StartTile::AlwaysZero);

        assert!(!layout.contains_mine((1, 1)));
        assert_eq!(layout.mine_count(), 5);
    }

    #[test]
    fn rejects_start_outside_board() {
        let config = GameConfig::new(3, 3, 1).unwrap();

        let result = RandomMinefieldGenerator::from_seed(0)
            .with_start((3, 0), StartTile::SimpleSafe)
            .generate(config);

        assert_eq!(result, Err(GameError::OutOfBounds));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = GameConfig {
            size: (2, 2),
            mines: 4,
        };

        let result = RandomMinefieldGenerator::from_seed(0).generate(config);

        assert!(result.unwrap_err().is_invalid_config());
    }
}
