use serde::{Deserialize, Serialize};

use crate::*;

/// Board parameters: `(rows, columns)` and the number of mines to place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    /// Builds a config, rejecting empty boards and boards without a single safe cell.
    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        let config = Self {
            size: (rows, columns),
            mines,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks `rows > 0`, `columns > 0` and `mines < rows * columns`.
    ///
    /// Useful after deserializing a config from an untrusted source.
    pub fn validate(&self) -> Result<()> {
        let (rows, columns) = self.size;
        if rows == 0 || columns == 0 {
            return Err(GameError::EmptyBoard);
        }

        let total = self.total_cells();
        if self.mines >= total {
            return Err(GameError::TooManyMines {
                requested: self.mines,
                max: total - 1,
            });
        }

        Ok(())
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn columns(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub const fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_mines() {
        let config = GameConfig::new(2, 3, 0).unwrap();

        assert_eq!(config.total_cells(), 6);
        assert_eq!(config.safe_cells(), 6);
    }

    #[test]
    fn accepts_all_but_one_cell_mined() {
        let config = GameConfig::new(3, 3, 8).unwrap();

        assert_eq!(config.safe_cells(), 1);
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(GameConfig::new(0, 3, 0), Err(GameError::EmptyBoard));
        assert_eq!(GameConfig::new(3, 0, 0), Err(GameError::EmptyBoard));
    }

    #[test]
    fn rejects_full_board() {
        let err = GameConfig::new(3, 3, 9).unwrap_err();

        assert_eq!(
            err,
            GameError::TooManyMines {
                requested: 9,
                max: 8
            }
        );
        assert!(err.is_invalid_config());
    }

    #[test]
    fn contains_checks_both_axes() {
        let config = GameConfig::new(2, 4, 1).unwrap();

        assert!(config.contains((1, 3)));
        assert!(!config.contains((2, 0)));
        assert!(!config.contains((0, 4)));
    }

    #[test]
    fn deserialized_config_can_be_validated() {
        let config: GameConfig =
            serde_json::from_str(r#"{"size":[2,2],"mines":4}"#).unwrap();

        assert!(config.validate().unwrap_err().is_invalid_config());
    }
}
