//! Tone-name-to-frequency tables for the 12-tone chromatic cycle. Given a reference pitch, a
//! transposition tone and an octave range, [`tune`] produces the frequency of every tone in every
//! requested octave under equal temperament or pure (just) intonation.
pub mod config;
pub use config::Config;
pub mod error;
pub use error::Error;
pub mod note;
pub use note::Note;
pub mod temperament;
pub use temperament::{Pure, Temperament};
pub mod tone;
pub use tone::{TONES_PER_OCTAVE, Tone, tones};
mod tuning;
pub use tuning::{semitone_ratio, tune};
