use crate::tone::Tone;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display};

/// A tone pinned to a specific octave, carrying the frequency computed for it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Note {
    pub tone: Tone,
    pub octave: i32,
    pub freq_hz: f32,
}

/// Frequencies are compared at whole-hertz resolution. Two notes produced from slightly different
/// arithmetic paths still count as the same note.
impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.tone == other.tone
            && self.octave == other.octave
            && self.freq_hz.trunc() == other.freq_hz.trunc()
    }
}

/// Notes are only partially ordered: a note is below another when its octave is no higher and its
/// tone comes strictly earlier in the chromatic cycle. Pairs straddling an octave boundary (say
/// B:1 and A:2) are ordered by neither rule, so sorting a mixed-octave collection beyond grouping
/// by octave is unspecified.
impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.octave <= other.octave && self.tone < other.tone {
            Some(Ordering::Less)
        } else if other.octave <= self.octave && other.tone < self.tone {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

/// Example formats: "C:1", "Bb:4". The frequency is not part of the rendering.
impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.tone, self.octave)
    }
}
