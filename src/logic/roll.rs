//! Dice: face sources and the pure roll computation.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Faces on one die. Face indices are `0..FACES`, face values `1..=FACES`.
pub const FACES: u8 = 6;

/// Produces one die face index in `0..=5` per call.
pub trait RollSource {
    fn roll(&mut self) -> u8;
}

/// Uniform face source backed by any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngRollSource<R> {
    rng: R,
}

impl<R: Rng> RngRollSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngRollSource<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngRollSource<StdRng> {
    /// Reproducible source for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RollSource for RngRollSource<R> {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(0..FACES)
    }
}

/// Replays a fixed cycle of face indices. Values above 5 wrap modulo 6.
#[derive(Clone, Debug)]
pub struct ScriptedRolls {
    faces: Vec<u8>,
    next: usize,
}

impl ScriptedRolls {
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        Self {
            faces: faces.into(),
            next: 0,
        }
    }

    /// Always rolls the same face.
    pub fn constant(face: u8) -> Self {
        Self::new(vec![face])
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self) -> u8 {
        if self.faces.is_empty() {
            return 0;
        }
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face % FACES
    }
}

/// Result of one roll: raw face indices (one or two) and the score they add up to.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub faces: Vec<u8>,
    pub sum: u32,
}

impl RollOutcome {
    /// Build from face indices; each die contributes `index + 1`.
    pub fn from_faces(faces: Vec<u8>) -> Self {
        let sum = faces.iter().map(|&f| u32::from(f) + 1).sum();
        Self { faces, sum }
    }

    /// Face values as printed on the dice (1..=6).
    pub fn face_values(&self) -> Vec<u8> {
        self.faces.iter().map(|f| f + 1).collect()
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "+{}", self.sum)
    }
}

/// Draw one face (or two with `two_dice`) and sum them. No player state is touched.
pub fn roll_once<S: RollSource + ?Sized>(source: &mut S, two_dice: bool) -> RollOutcome {
    let count = if two_dice { 2 } else { 1 };
    let faces: Vec<u8> = (0..count).map(|_| source.roll()).collect();
    RollOutcome::from_faces(faces)
}
