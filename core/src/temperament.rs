use crate::tone::Tone;
use serde::{Deserialize, Serialize};

/// Flavour of pure-intonation tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pure {
    Major,
    Minor,
}

/// A system assigning specific frequency ratios to the 12 chromatic tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Temperament {
    /// Each semitone is exactly 2^(1/12) times the previous.
    Equal,
    /// Just intonation, expressed as fixed cent deviations from equal temperament. The `root`
    /// tone is the tonal centre and receives the zero offset.
    Pure { kind: Pure, root: Tone },
    /// Recognized but not implemented. `tune` reports it as such rather than producing an empty
    /// table.
    Pythagorean,
}

// Offsets from equal temperament in cents, indexed by chromatic distance above the root tone.
// Frequency ratio for the reference pitch: r = 2^(n/12 + m/1200)
// n: interval in semitones, m: offset in cents
const PURE_MAJOR_CENTS: [f32; 12] = [
    0.0, -29.3, 3.9, 15.6, -13.7, -2.0, -31.3, 2.0, -27.4, -15.6, 17.6, -11.7,
];
const PURE_MINOR_CENTS: [f32; 12] = [
    0.0, 33.2, 3.9, 15.6, -13.7, -2.0, 31.3, 2.0, 13.7, -15.6, 17.6, -11.7,
];

impl Pure {
    pub(crate) const fn cent_offsets(self) -> &'static [f32; 12] {
        match self {
            Pure::Major => &PURE_MAJOR_CENTS,
            Pure::Minor => &PURE_MINOR_CENTS,
        }
    }
}
