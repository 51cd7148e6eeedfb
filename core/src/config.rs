use crate::{error::Error, temperament::Temperament, tone::Tone};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Everything a call to [`crate::tune`] needs. Construct one per request; nothing is cached
/// between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Reference pitch in hertz. The octave-1 base table is calibrated so that pitch 442 with
    /// transposition C puts A:1 at 55.25 Hz.
    pub pitch_hz: f32,
    pub temperament: Temperament,
    /// Tone at which the equal-tempered base table is re-anchored. Independent of the pure
    /// temperament's root tone.
    pub transposition: Tone,
    /// Half-open range of octave indices to generate. Octave 1 reproduces the base table
    /// unchanged; each octave up doubles.
    pub octaves: Range<i32>,
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.pitch_hz > 0.0) {
            return Err(Error::NonPositivePitch(self.pitch_hz));
        }
        if self.octaves.start > self.octaves.end {
            return Err(Error::BackwardsOctaveRange {
                start: self.octaves.start,
                end: self.octaves.end,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn config() -> Config {
        Config {
            pitch_hz: 442.0,
            temperament: Temperament::Equal,
            transposition: Tone::C,
            octaves: 1..2,
        }
    }

    #[test]
    fn accepts_valid_input() {
        assert_eq!(config().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_pitch() {
        let mut config = config();
        config.pitch_hz = 0.0;
        assert!(matches!(
            config.validate(),
            Err(Error::NonPositivePitch(_))
        ));
        config.pitch_hz = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(Error::NonPositivePitch(_))
        ));
    }

    #[test]
    fn rejects_backwards_octave_range() {
        let mut config = config();
        config.octaves = 3..1;
        assert_eq!(
            config.validate(),
            Err(Error::BackwardsOctaveRange { start: 3, end: 1 })
        );
    }

    #[test]
    fn empty_octave_range_is_valid() {
        let mut config = config();
        config.octaves = 2..2;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn serde_round_trip() {
        let config = Config {
            temperament: Temperament::Pure {
                kind: crate::temperament::Pure::Major,
                root: Tone::A,
            },
            ..config()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);
    }
}
