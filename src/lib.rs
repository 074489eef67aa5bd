//! # Ostinato - Streaming MIDI Decoder
//!
//! Umbrella crate coordinating:
//! - **ostinato-midi** - MIDI subsystem (push-byte stream decoding, running status)
//!
//! ## Quick Start
//!
//! ```
//! use ostinato::prelude::*;
//!
//! let mut stream = MidiStream::new();
//! let messages: Vec<Message> = stream.feed([0x90, 0x3C, 0x40]).collect();
//! assert!(messages[0].is_note_on());
//! ```

/// Re-export of ostinato-midi for direct access
pub use ostinato_midi as midi;

// MIDI subsystem types
pub use ostinato_midi::{Channel, Message, MidiStream, RealTime, Status, VoiceKind};

// Error
mod error;
pub use error::{Error, Result};

/// Common imports for typical use.
pub mod prelude {
    pub use crate::{Channel, Error, Message, MidiStream, RealTime, Result, Status};
}
