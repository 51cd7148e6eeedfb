//! The 12-tone chromatic cycle using the flat-spelling convention (A, Bb, B, C, Db, ...). Tones
//! carry no octave and no frequency of their own; they are positions on the chromatic circle, with
//! A at position 0. Frequency assignment lives in [`crate::tuning`].
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

pub const TONES_PER_OCTAVE: u8 = 12;

/// One of the 12 chromatic pitch classes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Tone {
    order: u8,
}

impl Tone {
    const fn from_order(order: u8) -> Self {
        assert!(order < TONES_PER_OCTAVE);
        Self { order }
    }

    pub const A: Self = Self::from_order(0);
    pub const B_FLAT: Self = Self::from_order(1);
    pub const B: Self = Self::from_order(2);
    pub const C: Self = Self::from_order(3);
    pub const D_FLAT: Self = Self::from_order(4);
    pub const D: Self = Self::from_order(5);
    pub const E_FLAT: Self = Self::from_order(6);
    pub const E: Self = Self::from_order(7);
    pub const F: Self = Self::from_order(8);
    pub const G_FLAT: Self = Self::from_order(9);
    pub const G: Self = Self::from_order(10);
    pub const A_FLAT: Self = Self::from_order(11);

    /// Stable position of this tone on the chromatic circle, with A at 0.
    pub const fn order(self) -> u8 {
        self.order
    }

    /// Returns a str representation of the tone where all accidentals are flat, formatted like "A"
    /// or "Bb"
    pub const fn to_str_flat(self) -> &'static str {
        match self.order {
            0 => "A",
            1 => "Bb",
            2 => "B",
            3 => "C",
            4 => "Db",
            5 => "D",
            6 => "Eb",
            7 => "E",
            8 => "F",
            9 => "Gb",
            10 => "G",
            11 => "Ab",
            _ => unreachable!(),
        }
    }

    /// Parses a str like "A" or "Bb"
    pub fn from_str_flat(s: &str) -> Option<Self> {
        let order = match s {
            "A" => 0,
            "Bb" => 1,
            "B" => 2,
            "C" => 3,
            "Db" => 4,
            "D" => 5,
            "Eb" => 6,
            "E" => 7,
            "F" => 8,
            "Gb" => 9,
            "G" => 10,
            "Ab" => 11,
            _ => return None,
        };
        Some(Self { order })
    }

    pub const fn wrapping_add_semitones(self, num_semitones: i8) -> Self {
        Self::from_order(
            (self.order as i8 + num_semitones).rem_euclid(TONES_PER_OCTAVE as i8) as u8,
        )
    }

    /// All 12 tones starting at `self`, proceeding through the chromatic cycle and wrapping after
    /// Ab back to A.
    pub fn cycle(self) -> [Tone; TONES_PER_OCTAVE as usize] {
        std::array::from_fn(|i| self.wrapping_add_semitones(i as i8))
    }
}

/// Duplicated from `Tone` so it's possible to bring all tone names into scope by using this
/// module.
pub mod tones {
    pub use super::Tone;
    pub const A: Tone = Tone::A;
    pub const B_FLAT: Tone = Tone::B_FLAT;
    pub const B: Tone = Tone::B;
    pub const C: Tone = Tone::C;
    pub const D_FLAT: Tone = Tone::D_FLAT;
    pub const D: Tone = Tone::D;
    pub const E_FLAT: Tone = Tone::E_FLAT;
    pub const E: Tone = Tone::E;
    pub const F: Tone = Tone::F;
    pub const G_FLAT: Tone = Tone::G_FLAT;
    pub const G: Tone = Tone::G;
    pub const A_FLAT: Tone = Tone::A_FLAT;
}

impl Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str_flat())
    }
}

impl FromStr for Tone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flat(s).ok_or_else(|| Error::UnknownTone(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cycle_starts_at_self_and_wraps() {
        let cycle = Tone::G.cycle();
        assert_eq!(cycle[0], Tone::G);
        assert_eq!(cycle[1], Tone::A_FLAT);
        assert_eq!(cycle[2], Tone::A);
        assert_eq!(cycle[11], Tone::G_FLAT);
    }

    #[test]
    fn cycle_covers_every_tone_once() {
        let cycle = Tone::E_FLAT.cycle();
        for order in 0..TONES_PER_OCTAVE {
            assert_eq!(cycle.iter().filter(|tone| tone.order() == order).count(), 1);
        }
    }

    #[test]
    fn string_round_trip() {
        assert_eq!("Bb".parse::<Tone>().unwrap(), Tone::B_FLAT);
        assert_eq!(Tone::D_FLAT.to_string().parse::<Tone>().unwrap(), Tone::D_FLAT);
        assert!("H".parse::<Tone>().is_err());
    }

    #[test]
    fn wrapping_arithmetic() {
        assert_eq!(Tone::A_FLAT.wrapping_add_semitones(1), Tone::A);
        assert_eq!(Tone::A.wrapping_add_semitones(-1), Tone::A_FLAT);
    }
}
