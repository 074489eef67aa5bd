//! Push-one-byte MIDI stream decoder.
//!
//! Reconstructs discrete messages from a live wire, honoring running status:
//! a status byte may be omitted when it is unchanged from the previous
//! message. Real-time bytes may arrive in the middle of another message and
//! must not disturb it; SysEx payload is discarded wholesale.
//!
//! Malformed sequences never fail: the decoder drops the offending byte,
//! clears running status where the protocol says so, and resynchronizes on
//! the next status byte. On a live stream there is no retransmission to ask
//! for, so silence is the only useful error policy.

use tracing::{debug, trace};

use crate::message::{Channel, Message};
use crate::status::{Status, VoiceKind};

/// First data byte of a Control Change that designates a Channel Mode message.
const CHANNEL_MODE_MIN: u8 = 120;

/// Data capture progress for the message class currently in effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    AwaitingFirst,
    AwaitingSecond(u8),
}

/// System common classes that take data bytes (0xF1-0xF3).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CommonKind {
    TimeCodeQuarterFrame,
    SongPositionPointer,
    SongSelect,
}

/// Running-status context. `AwaitingSecond` is only reachable under a
/// two-data-byte class, so "pending byte without a matching status" cannot
/// be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Context {
    /// No running status in effect; data bytes are dropped.
    Idle,
    Voice {
        kind: VoiceKind,
        channel: Channel,
        phase: Phase,
    },
    Common {
        kind: CommonKind,
        phase: Phase,
    },
    /// Inside a SysEx message; every data byte is discarded until EOX.
    SysEx,
}

/// Decoder state for one physical MIDI cable/port.
///
/// One logical owner must feed bytes sequentially in true wire arrival
/// order; running-status correctness depends on it. Independent streams
/// get independent `MidiStream` instances.
///
/// `receive` never blocks, allocates, or performs I/O.
#[derive(Clone, Debug)]
pub struct MidiStream {
    context: Context,
}

impl Default for MidiStream {
    fn default() -> Self {
        Self::new()
    }
}

impl MidiStream {
    /// Fresh stream: no running status, no pending data.
    pub fn new() -> Self {
        Self {
            context: Context::Idle,
        }
    }

    /// Clears running status and any pending data byte.
    ///
    /// Call on detected desynchronization; the next status byte starts clean.
    pub fn reset(&mut self) {
        self.context = Context::Idle;
    }

    /// Consumes one wire byte, yielding a message exactly when that byte
    /// completes one.
    ///
    /// Protocol noise (stray data bytes, undefined status bytes, SysEx
    /// payload) is absorbed silently; there is no error return.
    pub fn receive(&mut self, byte: u8) -> Option<Message> {
        match Status::from_byte(byte) {
            Some(status) => self.receive_status(byte, status),
            None => self.receive_data(byte),
        }
    }

    /// Feeds a sequence of bytes through [`receive`](Self::receive), yielding
    /// the messages that complete along the way.
    pub fn feed<'a, I>(&'a mut self, bytes: I) -> impl Iterator<Item = Message> + 'a
    where
        I: IntoIterator<Item = u8>,
        I::IntoIter: 'a,
    {
        bytes.into_iter().filter_map(move |byte| self.receive(byte))
    }

    fn receive_status(&mut self, byte: u8, status: Status) -> Option<Message> {
        match status {
            Status::Voice { kind, channel } => {
                self.context = Context::Voice {
                    kind,
                    channel,
                    phase: Phase::AwaitingFirst,
                };
                None
            }
            // Transparent to whatever message they interrupt: no state change.
            Status::RealTime(rt) => Some(Message::RealTime(rt)),
            Status::SystemExclusive => {
                self.context = Context::SysEx;
                None
            }
            Status::TimeCodeQuarterFrame => {
                self.set_common(CommonKind::TimeCodeQuarterFrame);
                None
            }
            Status::SongPositionPointer => {
                self.set_common(CommonKind::SongPositionPointer);
                None
            }
            Status::SongSelect => {
                self.set_common(CommonKind::SongSelect);
                None
            }
            Status::Undefined => {
                debug!("undefined status byte 0x{byte:02X}, running status cleared");
                self.context = Context::Idle;
                None
            }
            Status::TuneRequest => {
                self.context = Context::Idle;
                Some(Message::TuneRequest)
            }
            Status::EndOfExclusive => {
                self.context = Context::Idle;
                None
            }
        }
    }

    fn receive_data(&mut self, byte: u8) -> Option<Message> {
        match self.context {
            Context::Idle => {
                trace!("data byte 0x{byte:02X} with no running status, dropped");
                None
            }
            // SysEx payload is not modeled.
            Context::SysEx => None,
            Context::Voice {
                kind,
                channel,
                phase,
            } => self.receive_voice_data(kind, channel, phase, byte),
            Context::Common { kind, phase } => self.receive_common_data(kind, phase, byte),
        }
    }

    fn receive_voice_data(
        &mut self,
        kind: VoiceKind,
        channel: Channel,
        phase: Phase,
        byte: u8,
    ) -> Option<Message> {
        let message = match (kind, phase) {
            // One-data-byte classes complete on every data byte. Kind and
            // channel come from the running status byte, not from capture
            // state (the latter is a known defect in some firmwares).
            (VoiceKind::ProgramChange, _) => Message::ProgramChange {
                channel,
                program: byte,
            },
            (VoiceKind::ChannelAftertouch, _) => Message::ChannelAftertouch {
                channel,
                pressure: byte,
            },
            (_, Phase::AwaitingFirst) => {
                self.context = Context::Voice {
                    kind,
                    channel,
                    phase: Phase::AwaitingSecond(byte),
                };
                return None;
            }
            (VoiceKind::NoteOff, Phase::AwaitingSecond(note)) => Message::NoteOff {
                channel,
                note,
                velocity: byte,
            },
            (VoiceKind::NoteOn, Phase::AwaitingSecond(note)) => Message::NoteOn {
                channel,
                note,
                velocity: byte,
            },
            (VoiceKind::PolyAftertouch, Phase::AwaitingSecond(note)) => Message::PolyAftertouch {
                channel,
                note,
                pressure: byte,
            },
            (VoiceKind::ControlChange, Phase::AwaitingSecond(controller))
                if controller >= CHANNEL_MODE_MIN =>
            {
                Message::ChannelMode {
                    mode: controller,
                    data1: byte,
                    data2: byte,
                }
            }
            (VoiceKind::ControlChange, Phase::AwaitingSecond(controller)) => {
                Message::ControlChange {
                    channel,
                    controller,
                    value: byte,
                }
            }
            (VoiceKind::PitchBend, Phase::AwaitingSecond(lsb)) => Message::PitchBend {
                channel,
                lsb,
                msb: byte,
            },
        };
        // Running status survives a completed voice message.
        self.context = Context::Voice {
            kind,
            channel,
            phase: Phase::AwaitingFirst,
        };
        Some(message)
    }

    fn receive_common_data(
        &mut self,
        kind: CommonKind,
        phase: Phase,
        byte: u8,
    ) -> Option<Message> {
        // System commons do not sustain running status across messages.
        match (kind, phase) {
            (CommonKind::TimeCodeQuarterFrame, _) => {
                self.context = Context::Idle;
                Some(Message::TimeCodeQuarterFrame {
                    message_type: (byte >> 4) & 0x07,
                    value: byte & 0x0F,
                })
            }
            (CommonKind::SongSelect, _) => {
                self.context = Context::Idle;
                Some(Message::SongSelect { song: byte })
            }
            (CommonKind::SongPositionPointer, Phase::AwaitingFirst) => {
                self.context = Context::Common {
                    kind,
                    phase: Phase::AwaitingSecond(byte),
                };
                None
            }
            (CommonKind::SongPositionPointer, Phase::AwaitingSecond(lsb)) => {
                self.context = Context::Idle;
                Some(Message::SongPositionPointer { lsb, msb: byte })
            }
        }
    }

    fn set_common(&mut self, kind: CommonKind) {
        self.context = Context::Common {
            kind,
            phase: Phase::AwaitingFirst,
        };
    }
}
