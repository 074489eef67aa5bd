//! Error types for the MIDI subsystem.
//!
//! The stream decoder itself never fails (malformed wire bytes are absorbed,
//! see [`crate::MidiStream`]); these errors come from the checked message
//! constructors.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid MIDI channel {0} (expected 0-15)")]
    InvalidChannel(u8),

    #[error("{field} out of 7-bit range: {value}")]
    ValueOutOfRange { field: &'static str, value: u8 },

    #[error("pitch bend out of 14-bit range: {0}")]
    BendOutOfRange(u16),
}

pub type Result<T> = std::result::Result<T, Error>;
