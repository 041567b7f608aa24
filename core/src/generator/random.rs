use alloc::collections::BTreeSet;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform placement that keeps the first revealed cell and its neighbors free of mines.
///
/// The RNG is owned by the generator and keeps advancing across games, so resetting a session with the same generator
/// deals a fresh board while a given seed still reproduces the whole sequence.
#[derive(Clone, Debug)]
pub struct RandomLayoutGenerator {
    rng: SmallRng,
}

impl RandomLayoutGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: SmallRng) -> Self {
        Self { rng }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(&mut self, config: &GameConfig, safe_center: Coord2) -> Result<Vec<Coord2>> {
        let excluded: BTreeSet<Coord2> = safe_zone(config, safe_center).collect();
        let mut candidates: Vec<Coord2> = all_positions(config)
            .filter(|pos| !excluded.contains(pos))
            .collect();

        let wanted = usize::from(config.mines);
        if wanted > candidates.len() {
            log::error!(
                "Cannot place {} mines, only {} cells outside the safe zone around {:?}",
                wanted,
                candidates.len(),
                safe_center
            );
            return Err(GameError::TooManyMines);
        }

        // each draw removes its pick from the pool, so positions never repeat
        let mut mines = Vec::with_capacity(wanted);
        for _ in 0..wanted {
            let pick = self.rng.random_range(0..candidates.len());
            mines.push(candidates.swap_remove(pick));
        }

        log::debug!(
            "Placed {} mines avoiding {} cells around {:?}",
            mines.len(),
            excluded.len(),
            safe_center
        );
        Ok(mines)
    }
}
