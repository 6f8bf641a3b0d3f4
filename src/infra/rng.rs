use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engine::RandomSource;

/// RNG на основе `thread_rng` – для настоящей игры.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// Источник случайности, выбранный по конфигу:
/// есть seed – детерминированный, нет – системный.
#[derive(Clone, Debug)]
pub enum GameRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl GameRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => GameRng::Seeded(DeterministicRng::from_seed(s)),
            None => GameRng::System(SystemRng),
        }
    }
}

impl RandomSource for GameRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        match self {
            GameRng::System(r) => r.shuffle(slice),
            GameRng::Seeded(r) => r.shuffle(slice),
        }
    }
}
