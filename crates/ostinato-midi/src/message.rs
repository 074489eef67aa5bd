//! Decoded MIDI message types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// MIDI channel, numbered 1-16 on the wire and 0-15 in the status nibble.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Ch1,
    Ch2,
    Ch3,
    Ch4,
    Ch5,
    Ch6,
    Ch7,
    Ch8,
    Ch9,
    Ch10,
    Ch11,
    Ch12,
    Ch13,
    Ch14,
    Ch15,
    Ch16,
}

impl Channel {
    /// Builds a channel from the low nibble of a status byte. High bits are
    /// masked off, so any byte is accepted.
    #[inline]
    pub fn from_nibble(byte: u8) -> Self {
        match byte & 0x0F {
            0 => Channel::Ch1,
            1 => Channel::Ch2,
            2 => Channel::Ch3,
            3 => Channel::Ch4,
            4 => Channel::Ch5,
            5 => Channel::Ch6,
            6 => Channel::Ch7,
            7 => Channel::Ch8,
            8 => Channel::Ch9,
            9 => Channel::Ch10,
            10 => Channel::Ch11,
            11 => Channel::Ch12,
            12 => Channel::Ch13,
            13 => Channel::Ch14,
            14 => Channel::Ch15,
            _ => Channel::Ch16,
        }
    }

    /// Zero-based channel number (0-15), as carried in the status nibble.
    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Channel {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        if value < 16 {
            Ok(Channel::from_nibble(value))
        } else {
            Err(Error::InvalidChannel(value))
        }
    }
}

/// System Real-Time message (status bytes 0xF8-0xFF, zero data bytes).
///
/// 0xF9 and 0xFD are undefined by the MIDI spec but still arrive as
/// real-time bytes; they are carried through so the raw byte round-trips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RealTime {
    /// Timing Clock (0xF8)
    Clock,
    /// Start (0xFA)
    Start,
    /// Continue (0xFB)
    Continue,
    /// Stop (0xFC)
    Stop,
    /// Active Sensing (0xFE)
    ActiveSensing,
    /// System Reset (0xFF)
    Reset,
    /// Undefined real-time byte (0xF9 or 0xFD)
    Undefined(u8),
}

impl RealTime {
    pub(crate) fn from_byte(byte: u8) -> Self {
        match byte {
            0xF8 => RealTime::Clock,
            0xFA => RealTime::Start,
            0xFB => RealTime::Continue,
            0xFC => RealTime::Stop,
            0xFE => RealTime::ActiveSensing,
            0xFF => RealTime::Reset,
            other => RealTime::Undefined(other),
        }
    }

    /// The raw status byte.
    #[inline]
    pub fn byte(self) -> u8 {
        match self {
            RealTime::Clock => 0xF8,
            RealTime::Start => 0xFA,
            RealTime::Continue => 0xFB,
            RealTime::Stop => 0xFC,
            RealTime::ActiveSensing => 0xFE,
            RealTime::Reset => 0xFF,
            RealTime::Undefined(byte) => byte,
        }
    }
}

/// One complete MIDI message, as reconstructed off the wire.
///
/// Channel Mode messages carry no channel field: they are Control Changes
/// whose first data byte (>= 120) designates a mode change, and the mode
/// number itself is the identity that matters to consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    NoteOff {
        channel: Channel,
        note: u8,
        velocity: u8,
    },
    NoteOn {
        channel: Channel,
        note: u8,
        velocity: u8,
    },
    PolyAftertouch {
        channel: Channel,
        note: u8,
        pressure: u8,
    },
    ControlChange {
        channel: Channel,
        controller: u8,
        value: u8,
    },
    ChannelMode {
        mode: u8,
        data1: u8,
        data2: u8,
    },
    ProgramChange {
        channel: Channel,
        program: u8,
    },
    ChannelAftertouch {
        channel: Channel,
        pressure: u8,
    },
    PitchBend {
        channel: Channel,
        lsb: u8,
        msb: u8,
    },
    TimeCodeQuarterFrame {
        /// Bits 6-4 of the data byte.
        message_type: u8,
        /// Bits 3-0 of the data byte.
        value: u8,
    },
    SongPositionPointer {
        lsb: u8,
        msb: u8,
    },
    SongSelect {
        song: u8,
    },
    TuneRequest,
    RealTime(RealTime),
}

impl Message {
    pub fn note_on(channel: Channel, note: u8, velocity: u8) -> Result<Self> {
        Ok(Message::NoteOn {
            channel,
            note: seven_bit("note", note)?,
            velocity: seven_bit("velocity", velocity)?,
        })
    }

    pub fn note_off(channel: Channel, note: u8, velocity: u8) -> Result<Self> {
        Ok(Message::NoteOff {
            channel,
            note: seven_bit("note", note)?,
            velocity: seven_bit("velocity", velocity)?,
        })
    }

    pub fn control_change(channel: Channel, controller: u8, value: u8) -> Result<Self> {
        Ok(Message::ControlChange {
            channel,
            controller: seven_bit("controller", controller)?,
            value: seven_bit("value", value)?,
        })
    }

    pub fn program_change(channel: Channel, program: u8) -> Result<Self> {
        Ok(Message::ProgramChange {
            channel,
            program: seven_bit("program", program)?,
        })
    }

    /// Builds a pitch bend from a combined 14-bit value (0-16383, 8192 = center).
    pub fn pitch_bend(channel: Channel, bend: u16) -> Result<Self> {
        if bend > 0x3FFF {
            return Err(Error::BendOutOfRange(bend));
        }
        Ok(Message::PitchBend {
            channel,
            lsb: (bend & 0x7F) as u8,
            msb: (bend >> 7) as u8,
        })
    }

    /// The channel this message addresses, for channel voice messages.
    #[inline]
    pub fn channel(&self) -> Option<Channel> {
        match *self {
            Message::NoteOff { channel, .. }
            | Message::NoteOn { channel, .. }
            | Message::PolyAftertouch { channel, .. }
            | Message::ControlChange { channel, .. }
            | Message::ProgramChange { channel, .. }
            | Message::ChannelAftertouch { channel, .. }
            | Message::PitchBend { channel, .. } => Some(channel),
            _ => None,
        }
    }

    #[inline]
    pub fn is_note_on(&self) -> bool {
        matches!(self, Message::NoteOn { velocity, .. } if *velocity > 0)
    }

    /// Note On with velocity 0 counts as a note off.
    #[inline]
    pub fn is_note_off(&self) -> bool {
        matches!(
            self,
            Message::NoteOff { .. } | Message::NoteOn { velocity: 0, .. }
        )
    }

    /// Combined 14-bit pitch bend value (8192 = center).
    #[inline]
    pub fn bend(&self) -> Option<u16> {
        match *self {
            Message::PitchBend { lsb, msb, .. } => Some(fourteen_bit(lsb, msb)),
            _ => None,
        }
    }

    /// Combined 14-bit song position, in MIDI beats.
    #[inline]
    pub fn song_position(&self) -> Option<u16> {
        match *self {
            Message::SongPositionPointer { lsb, msb } => Some(fourteen_bit(lsb, msb)),
            _ => None,
        }
    }
}

#[inline]
fn seven_bit(field: &'static str, value: u8) -> Result<u8> {
    if value & 0x80 == 0 {
        Ok(value)
    } else {
        Err(Error::ValueOutOfRange { field, value })
    }
}

#[inline]
fn fourteen_bit(lsb: u8, msb: u8) -> u16 {
    ((msb as u16) << 7) | lsb as u16
}
