//! The tuning pipeline: build a single-octave base table anchored at the transposition tone,
//! optionally bend it toward pure intonation around a root tone, then expand it across the
//! requested octave range.
use crate::{
    config::Config,
    error::Error,
    note::Note,
    temperament::Temperament,
    tone::{TONES_PER_OCTAVE, Tone},
};
use itertools::{Itertools, izip};
use std::ops::Range;

/// Base tables are laid out C-first (C, Db, ..., B), matching the named-octave convention where C
/// opens the octave, while `Tone` orders start at A.
const CANONICAL_TONES: [Tone; TONES_PER_OCTAVE as usize] = [
    Tone::C,
    Tone::D_FLAT,
    Tone::D,
    Tone::E_FLAT,
    Tone::E,
    Tone::F,
    Tone::G_FLAT,
    Tone::G,
    Tone::A_FLAT,
    Tone::A,
    Tone::B_FLAT,
    Tone::B,
];

/// Canonical index of Gb. Transposing above it leaves the rotated table a register high, so
/// `equal_base` pulls it back down.
const TRANSPOSITION_BOUNDARY: usize = 6;

const fn canonical_index(tone: Tone) -> usize {
    ((tone.order() + 9) % TONES_PER_OCTAVE) as usize
}

pub fn semitone_ratio(num_semitones: f32) -> f32 {
    2.0_f32.powf(num_semitones / (TONES_PER_OCTAVE as f32))
}

fn cent_ratio(cents: f32) -> f32 {
    2.0_f32.powf(cents / 1200.0)
}

/// One octave of frequencies, one per tone, in canonical C-first order. Octave factor 1; never
/// exposed to callers.
#[derive(Clone, Copy)]
struct BaseTable([f32; TONES_PER_OCTAVE as usize]);

/// Single-octave equal-tempered table re-anchored at `transposition`.
///
/// The untransposed table puts every tone in the register of the named octave 1: C..Ab sit 4
/// octaves below their reference-pitch relatives, A, Bb and B only 3, hence the split divisor.
fn equal_base(pitch_hz: f32, transposition: Tone) -> BaseTable {
    let mut table: [f32; TONES_PER_OCTAVE as usize] = std::array::from_fn(|i| {
        let num_semitones = (i + 3) % TONES_PER_OCTAVE as usize;
        let register_divisor = if i < 9 { 16.0 } else { 8.0 };
        pitch_hz * semitone_ratio(num_semitones as f32) / register_divisor
    });
    let transposition_index = canonical_index(transposition);
    // Tones below the transposition point belong one register up once the table is rotated to
    // start at the transposition tone.
    for freq in &mut table[..transposition_index] {
        *freq *= 2.0;
    }
    table.rotate_left(transposition_index);
    if transposition_index > TRANSPOSITION_BOUNDARY {
        for freq in &mut table {
            *freq /= 2.0;
        }
    }
    BaseTable(table)
}

/// Bends an equal-tempered base toward pure intonation. Offsets are indexed by chromatic distance
/// above `root`, so the root tone itself keeps its equal-tempered frequency.
fn pure_base(equal: &BaseTable, root: Tone, cent_offsets: &[f32; 12]) -> BaseTable {
    let mut table = equal.0;
    for (tone, &cents) in izip!(root.cycle(), cent_offsets) {
        let i = canonical_index(tone);
        table[i] = equal.0[i] * cent_ratio(cents);
    }
    BaseTable(table)
}

/// One `Note` per (tone, octave) pair, scaled by integral powers of two. Octave 1 reproduces the
/// base table unchanged. Octaves at or below zero are allowed and scale by fractional powers.
fn expand_octaves(base: &BaseTable, octaves: Range<i32>) -> Vec<Note> {
    octaves
        .cartesian_product(CANONICAL_TONES.iter().enumerate())
        .map(|(octave, (i, &tone))| Note {
            tone,
            octave,
            freq_hz: base.0[i] * 2.0_f32.powi(octave - 1),
        })
        .collect()
}

/// Generate the frequency of every tone in every octave of `config.octaves`, under the requested
/// temperament. Returns `12 × (end − start)` notes, unordered.
pub fn tune(config: &Config) -> Result<Vec<Note>, Error> {
    config.validate()?;
    let equal = equal_base(config.pitch_hz, config.transposition);
    let base = match config.temperament {
        Temperament::Equal => equal,
        Temperament::Pure { kind, root } => pure_base(&equal, root, kind.cent_offsets()),
        Temperament::Pythagorean => {
            return Err(Error::UnimplementedTemperament(config.temperament));
        }
    };
    log::debug!(
        "tuning {:?} transposed to {} over octaves {:?}",
        config.temperament,
        config.transposition,
        config.octaves
    );
    Ok(expand_octaves(&base, config.octaves.clone()))
}
