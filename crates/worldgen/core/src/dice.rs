//! Dice for world generation.
//!
//! Every random decision in the generator goes through the [`Dice`] trait so
//! that a caller can substitute a fixed seed (or a scripted sequence in tests)
//! and get reproducible worlds.
//!
//! # Determinism
//!
//! [`PcgDice`] produces the same sequence for the same seed. Sector generation
//! derives an independent seed for each hex with [`compute_seed`], so one hex
//! never observes rolls consumed by another.

/// Source of die rolls.
///
/// Only [`Dice::next_u32`] is required; the rolls are derived from it.
pub trait Dice {
    /// Generate the next raw random value.
    fn next_u32(&mut self) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn die(&mut self, sides: u32) -> i32 {
        debug_assert!(sides > 0, "a die needs at least one side");
        ((self.next_u32() % sides) + 1) as i32
    }

    /// Roll one six-sided die.
    fn d6(&mut self) -> i32 {
        self.die(6)
    }

    /// Roll two six-sided dice and sum them.
    fn two_d6(&mut self) -> i32 {
        self.d6() + self.d6()
    }

    /// Flux roll: `1d6 - 1d6 + dm`, range `[-5 + dm, 5 + dm]`.
    fn flux(&mut self, dm: i32) -> i32 {
        self.d6() - self.d6() + dm
    }
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn die(&mut self, sides: u32) -> i32 {
        (**self).die(sides)
    }
}

/// PCG dice (Permuted Congruential Generator, XSH-RR variant).
///
/// 64 bits of state, 32 bits of output per step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgDice {
    state: u64,
}

impl PcgDice {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates dice whose roll sequence is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed),
        }
    }

    /// Creates dice seeded from the system clock.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    /// Restarts the roll sequence from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Dice for PcgDice {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// A seed taken from the system clock.
#[cfg(feature = "std")]
pub fn entropy_seed() -> u64 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    tracing::debug!(seed = nanos, "seeding from system clock");
    nanos
}

/// Compute a deterministic seed from a base seed and a hex position.
///
/// # Arguments
///
/// * `base_seed` - Seed chosen for the whole run (e.g. a sector)
/// * `x`, `y` - Hex coordinates
/// * `context` - Distinguishes independent streams for the same hex
pub fn compute_seed(base_seed: u64, x: u32, y: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing constants
    let mut hash = base_seed;

    hash ^= (x as u64).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (y as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Dice that replay a fixed list of faces, for exercising exact table entries.
#[cfg(test)]
pub(crate) mod scripted {
    use super::Dice;
    use std::collections::VecDeque;

    /// Each call to [`Dice::die`] pops the next face; panics when exhausted.
    #[derive(Debug, Default)]
    pub struct ScriptedDice {
        faces: VecDeque<i32>,
    }

    impl ScriptedDice {
        pub fn new(faces: &[i32]) -> Self {
            Self {
                faces: faces.iter().copied().collect(),
            }
        }

        pub fn remaining(&self) -> usize {
            self.faces.len()
        }
    }

    impl Dice for ScriptedDice {
        fn next_u32(&mut self) -> u32 {
            unreachable!("scripted dice only answer die()")
        }

        fn die(&mut self, sides: u32) -> i32 {
            let face = self.faces.pop_front().expect("scripted dice exhausted");
            assert!(
                face >= 1 && face <= sides as i32,
                "scripted face {face} is not on a d{sides}"
            );
            face
        }
    }
}
