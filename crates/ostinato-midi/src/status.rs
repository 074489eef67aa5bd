//! Status byte classification.
//!
//! A single exhaustive match over the whole byte range replaces the usual
//! nibble-switch with literal ranges, so every status byte lands in a named
//! class and data bytes are rejected up front.

use crate::message::{Channel, RealTime};

/// Channel voice/mode message classes (status bytes 0x80-0xEF, by high nibble).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceKind {
    /// 0x8n, two data bytes
    NoteOff,
    /// 0x9n, two data bytes
    NoteOn,
    /// 0xAn, two data bytes
    PolyAftertouch,
    /// 0xBn, two data bytes; first data byte >= 120 makes it a Channel Mode message
    ControlChange,
    /// 0xCn, one data byte
    ProgramChange,
    /// 0xDn, one data byte
    ChannelAftertouch,
    /// 0xEn, two data bytes (LSB then MSB)
    PitchBend,
}

/// Classification of a status byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Voice { kind: VoiceKind, channel: Channel },
    /// 0xF0, opens SysEx payload suppression
    SystemExclusive,
    /// 0xF1, one data byte
    TimeCodeQuarterFrame,
    /// 0xF2, two data bytes
    SongPositionPointer,
    /// 0xF3, one data byte
    SongSelect,
    /// 0xF4 / 0xF5, undefined system common
    Undefined,
    /// 0xF6, zero data bytes
    TuneRequest,
    /// 0xF7, ends SysEx
    EndOfExclusive,
    /// 0xF8-0xFF, zero data bytes, transparent to running status
    RealTime(RealTime),
}

impl Status {
    /// Classifies a raw wire byte. Returns `None` for data bytes (bit 7 clear).
    pub fn from_byte(byte: u8) -> Option<Status> {
        let status = match byte {
            0x00..=0x7F => return None,
            0x80..=0x8F => Status::voice(VoiceKind::NoteOff, byte),
            0x90..=0x9F => Status::voice(VoiceKind::NoteOn, byte),
            0xA0..=0xAF => Status::voice(VoiceKind::PolyAftertouch, byte),
            0xB0..=0xBF => Status::voice(VoiceKind::ControlChange, byte),
            0xC0..=0xCF => Status::voice(VoiceKind::ProgramChange, byte),
            0xD0..=0xDF => Status::voice(VoiceKind::ChannelAftertouch, byte),
            0xE0..=0xEF => Status::voice(VoiceKind::PitchBend, byte),
            0xF0 => Status::SystemExclusive,
            0xF1 => Status::TimeCodeQuarterFrame,
            0xF2 => Status::SongPositionPointer,
            0xF3 => Status::SongSelect,
            0xF4 | 0xF5 => Status::Undefined,
            0xF6 => Status::TuneRequest,
            0xF7 => Status::EndOfExclusive,
            0xF8..=0xFF => Status::RealTime(RealTime::from_byte(byte)),
        };
        Some(status)
    }

    #[inline]
    fn voice(kind: VoiceKind, byte: u8) -> Status {
        Status::Voice {
            kind,
            channel: Channel::from_nibble(byte),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_bytes_are_not_status() {
        for byte in 0x00..=0x7F {
            assert_eq!(Status::from_byte(byte), None);
        }
    }

    #[test]
    fn test_every_high_bit_byte_classifies() {
        for byte in 0x80..=0xFF {
            assert!(Status::from_byte(byte).is_some(), "byte 0x{byte:02X}");
        }
    }

    #[test]
    fn test_voice_classes_carry_channel() {
        assert_eq!(
            Status::from_byte(0x93),
            Some(Status::Voice {
                kind: VoiceKind::NoteOn,
                channel: Channel::Ch4
            })
        );
        assert_eq!(
            Status::from_byte(0xEF),
            Some(Status::Voice {
                kind: VoiceKind::PitchBend,
                channel: Channel::Ch16
            })
        );
    }

    #[test]
    fn test_system_bytes() {
        assert_eq!(Status::from_byte(0xF0), Some(Status::SystemExclusive));
        assert_eq!(Status::from_byte(0xF4), Some(Status::Undefined));
        assert_eq!(Status::from_byte(0xF5), Some(Status::Undefined));
        assert_eq!(Status::from_byte(0xF6), Some(Status::TuneRequest));
        assert_eq!(Status::from_byte(0xF7), Some(Status::EndOfExclusive));
        assert_eq!(
            Status::from_byte(0xF8),
            Some(Status::RealTime(RealTime::Clock))
        );
        assert_eq!(
            Status::from_byte(0xFD),
            Some(Status::RealTime(RealTime::Undefined(0xFD)))
        );
    }
}
