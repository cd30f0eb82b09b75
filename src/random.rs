use rand::Rng;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// Source of the random choices made by computer players.
pub trait RandomGenerator: Default {
    fn next(&mut self) -> i32;
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Picks a uniform element of `items`, or `None` when it is empty.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len() as i32) as usize)
    }
}

/// Backed by the thread-local generator from `rand`.
#[derive(Debug, Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        rand::random()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// Deterministic linear congruential generator, for reproducible games and tests.
#[derive(Debug)]
pub struct SeededGenerator {
    seed: i64,
}

impl Default for SeededGenerator {
    fn default() -> Self {
        SeededGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for SeededGenerator {
    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % (i32::MAX as i64);
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (self.next() % (to - from)).abs() + from
    }
}

impl SeededGenerator {
    /// Seeds are folded into `0..i32::MAX` so the multiplication cannot overflow.
    pub const fn new(seed: i64) -> Self {
        Self {
            seed: seed.rem_euclid(i32::MAX as i64),
        }
    }
}

/// Either generator, picked at runtime from the config.
#[derive(Debug)]
pub enum AnyGenerator {
    Standard(StandardRandomGenerator),
    Seeded(SeededGenerator),
}

impl AnyGenerator {
    pub fn from_seed(seed: Option<i64>) -> Self {
        match seed {
            Some(seed) => AnyGenerator::Seeded(SeededGenerator::new(seed)),
            None => AnyGenerator::Standard(StandardRandomGenerator),
        }
    }
}

impl Default for AnyGenerator {
    fn default() -> Self {
        AnyGenerator::Standard(StandardRandomGenerator)
    }
}

impl RandomGenerator for AnyGenerator {
    fn next(&mut self) -> i32 {
        match self {
            AnyGenerator::Standard(g) => g.next(),
            AnyGenerator::Seeded(g) => g.next(),
        }
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        match self {
            AnyGenerator::Standard(g) => g.next_range(from, to),
            AnyGenerator::Seeded(g) => g.next_range(from, to),
        }
    }
}
