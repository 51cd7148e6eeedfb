use crate::temperament::Temperament;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The reference pitch must be a positive number of hertz. Also raised for NaN.
    #[error("reference pitch must be positive, got {0} Hz")]
    NonPositivePitch(f32),
    /// The octave range is half-open, so `start` may equal `end` (an empty tuning) but may not
    /// exceed it.
    #[error("octave range starts at {start} but ends at {end}")]
    BackwardsOctaveRange { start: i32, end: i32 },
    /// Raised instead of silently returning an empty table for recognized-but-unimplemented
    /// temperaments.
    #[error("temperament {0:?} is not implemented")]
    UnimplementedTemperament(Temperament),
    #[error("unrecognized tone name {0:?}")]
    UnknownTone(String),
}
