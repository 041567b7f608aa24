use alloc::collections::BTreeSet;

use super::*;

/// Replays a predetermined set of mine positions, used for tests and recorded games.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedLayoutGenerator {
    mines: Vec<Coord2>,
}

impl FixedLayoutGenerator {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl LayoutGenerator for FixedLayoutGenerator {
    fn generate(&mut self, config: &GameConfig, safe_center: Coord2) -> Result<Vec<Coord2>> {
        let distinct: BTreeSet<Coord2> = self.mines.iter().copied().collect();

        if distinct.iter().any(|&pos| !config.contains(pos)) {
            return Err(GameError::InvalidCoords);
        }

        if distinct.len() != usize::from(config.mines) {
            return Err(GameError::MineCountMismatch);
        }

        if distinct
            .iter()
            .any(|&pos| is_adjacent_or_same(pos, safe_center))
        {
            return Err(GameError::MineInSafeZone);
        }

        Ok(distinct.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_given_layout() {
        let config = GameConfig::new(3, 3, 1).unwrap();
        let mines = FixedLayoutGenerator::new([(2, 2)]).generate(&config, (0, 0));
        assert_eq!(mines, Ok(alloc::vec![(2, 2)]));
    }

    #[test]
    fn validates_layout_against_config() {
        let config = GameConfig::new(3, 3, 1).unwrap();

        let off_board = FixedLayoutGenerator::new([(3, 0)]).generate(&config, (0, 0));
        assert_eq!(off_board, Err(GameError::InvalidCoords));

        let too_many = FixedLayoutGenerator::new([(2, 2), (2, 1)]).generate(&config, (0, 0));
        assert_eq!(too_many, Err(GameError::MineCountMismatch));

        let unsafe_start = FixedLayoutGenerator::new([(1, 1)]).generate(&config, (0, 0));
        assert_eq!(unsafe_start, Err(GameError::MineInSafeZone));
    }
}
