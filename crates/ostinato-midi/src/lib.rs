//! MIDI subsystem for the ostinato engine.
//!
//! Reconstructs discrete MIDI messages from a live byte stream, one octet at
//! a time, honoring running status. The decoder is push-driven: callers hand
//! it bytes in wire order and collect at most one completed [`Message`] per
//! byte. Real-time bytes interleaved mid-message are emitted without
//! disturbing the message they interrupt; SysEx payload is discarded.
//!
//! One [`MidiStream`] per physical cable/port; instances share nothing.
//!
//! # Example
//!
//! ```
//! use ostinato_midi::{Channel, Message, MidiStream};
//!
//! let mut stream = MidiStream::new();
//! assert_eq!(stream.receive(0x90), None); // Note On, channel 1
//! assert_eq!(stream.receive(0x3C), None); // note, still incomplete
//! assert_eq!(
//!     stream.receive(0x40),
//!     Some(Message::NoteOn {
//!         channel: Channel::Ch1,
//!         note: 0x3C,
//!         velocity: 0x40,
//!     })
//! );
//!
//! // Running status: the next data-byte pair reuses the Note On status.
//! let more: Vec<_> = stream.feed([0x3E, 0x50]).collect();
//! assert_eq!(more.len(), 1);
//! ```

// Error types
pub mod error;
pub use error::{Error, Result};

// Essential types users need
pub use decoder::MidiStream;
pub use message::{Channel, Message, RealTime};
pub use status::{Status, VoiceKind};

pub(crate) mod decoder;
pub(crate) mod message;
pub(crate) mod status;
