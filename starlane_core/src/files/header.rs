//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! `FileHeader`: the fixed 16-byte plaintext record every file opens with, and the two trivial
//! blocks that close it out, `FileFooter` (type 0) and `FileHash` (type 9).
//!
//! Everything after the header is XOR-encrypted with a [`crate::crypto::Cryptor`] seeded from
//! fields carried here — the header itself is never encrypted.

use bitflags::bitflags;

use crate::binary::{ReadBytes, WriteBytes};
use crate::crypto::CipherSeed;
use crate::error::{CoreError, Result};

const MAGIC_STANDARD: [u8; 4] = *b"J3D1";
const MAGIC_RACE: [u8; 4] = *b"J3J3";

const PLAYER_OR_UNIVERSE_FILE: u8 = 31;

/// Which of the six file dialects a `FileHeader` declares via its `dt` byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// dt=0, universe summary file.
    Universe,
    /// dt=1, host-side master turn file.
    Master,
    /// dt=2, player turn-in (X) file.
    TurnIn,
    /// dt=3, player turn-order (M) file.
    TurnOrder,
    /// dt=4, race file.
    Race,
    /// dt=5, history file.
    History,
}

impl FileKind {
    fn from_byte(byte: u8) -> Result<Self> {
        match byte {
            0 => Ok(Self::Universe),
            1 => Ok(Self::Master),
            2 => Ok(Self::TurnIn),
            3 => Ok(Self::TurnOrder),
            4 => Ok(Self::Race),
            5 => Ok(Self::History),
            other => Err(CoreError::MalformedHeader(format!("file type byte {other} is outside 0..5"))),
        }
    }

    fn to_byte(self) -> u8 {
        match self {
            Self::Universe => 0,
            Self::Master => 1,
            Self::TurnIn => 2,
            Self::TurnOrder => 3,
            Self::Race => 4,
            Self::History => 5,
        }
    }
}

/// The `{incr, minor, major}` triple packed into the header's version word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub incr: u8,
    pub minor: u8,
    pub major: u8,
}

impl Version {
    fn from_word(word: u16) -> Self {
        Self {
            incr: (word & 0x1F) as u8,
            minor: ((word >> 5) & 0x7F) as u8,
            major: ((word >> 12) & 0x0F) as u8,
        }
    }

    fn to_word(self) -> u16 {
        (u16::from(self.incr) & 0x1F) | ((u16::from(self.minor) & 0x7F) << 5) | ((u16::from(self.major) & 0x0F) << 12)
    }
}

bitflags! {
    /// Byte 15's five boolean bits: `{submitted, in_use, multi, game_over, crippled}`. The top
    /// 3 bits of the same byte hold `wgen`, a value rather than a flag, so it's tracked
    /// separately on [`HeaderFlags`] instead of folded into this bitset.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct HeaderFlagBits: u8 {
        const SUBMITTED = 0x01;
        const IN_USE    = 0x02;
        const MULTI     = 0x04;
        const GAME_OVER = 0x08;
        const CRIPPLED  = 0x10;
    }
}

/// Byte 15's bitfield: five boolean flags plus the 3-bit `wgen` value packed into the top bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFlags {
    pub bits: HeaderFlagBits,
    pub wgen: u8,
}

impl HeaderFlags {
    fn from_byte(byte: u8) -> Self {
        Self {
            bits: HeaderFlagBits::from_bits_truncate(byte),
            wgen: (byte >> 5) & 0x07,
        }
    }

    fn to_byte(self) -> u8 {
        self.bits.bits() | ((self.wgen & 0x07) << 5)
    }
}

/// The 16-byte plaintext header every file opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub is_race_file: bool,
    pub game_id: u32,
    pub version: Version,
    pub turn: u16,
    pub player_index: u8,
    pub salt: u16,
    pub kind: FileKind,
    pub flags: HeaderFlags,
}

impl FileHeader {
    /// True when `player_index` is the sentinel 31, meaning "race or universe file" rather than
    /// a specific seat at the table.
    pub fn is_race_or_universe_player(&self) -> bool {
        self.player_index == PLAYER_OR_UNIVERSE_FILE
    }

    /// Derives this header's cipher seed. Race files force `shareware=false` and
    /// `player_index=31` regardless of the stored player index, per the race-file dialect's
    /// slightly different seeding rule.
    pub fn cipher_seed(&self, shareware: bool) -> CipherSeed {
        if self.is_race_file {
            CipherSeed {
                salt: self.salt,
                game_id: self.game_id,
                turn: self.turn,
                player_index: PLAYER_OR_UNIVERSE_FILE,
                shareware: false,
            }
        } else {
            CipherSeed { salt: self.salt, game_id: self.game_id, turn: self.turn, player_index: self.player_index, shareware }
        }
    }

    pub fn decode<R: ReadBytes>(reader: &mut R) -> Result<Self> {
        let magic = reader.read_slice(4, false)?;
        let is_race_file = match magic.as_slice() {
            m if m == MAGIC_STANDARD => false,
            m if m == MAGIC_RACE => true,
            _ => return Err(CoreError::MalformedHeader("magic bytes match neither J3D1 nor J3J3".to_owned())),
        };

        let game_id = reader.read_u32()?;
        let version = Version::from_word(reader.read_u16()?);
        let turn = reader.read_u16()?;

        let packed = reader.read_u16()?;
        let player_index = (packed & 0x1F) as u8;
        let salt = (packed >> 5) & 0x07FF;

        let kind = FileKind::from_byte(reader.read_u8()?)?;
        let flags = HeaderFlags::from_byte(reader.read_u8()?);

        Ok(Self { is_race_file, game_id, version, turn, player_index, salt, kind, flags })
    }

    pub fn encode<W: WriteBytes>(&self, writer: &mut W) -> Result<()> {
        writer.write_slice(if self.is_race_file { &MAGIC_RACE } else { &MAGIC_STANDARD })?;
        writer.write_u32(self.game_id)?;
        writer.write_u16(self.version.to_word())?;
        writer.write_u16(self.turn)?;

        let packed = (u16::from(self.player_index) & 0x1F) | ((self.salt & 0x07FF) << 5);
        writer.write_u16(packed)?;

        writer.write_u8(self.kind.to_byte())?;
        writer.write_u8(self.flags.to_byte())?;
        Ok(())
    }
}

/// The empty block (type 0) that terminates every file.
pub fn footer_body() -> Vec<u8> {
    Vec::new()
}

/// Encodes a race file's integrity hash (type 9) into its 4-byte wire body.
pub fn encode_hash_body(hash: u32) -> Vec<u8> {
    hash.to_le_bytes().to_vec()
}

/// Decodes a race file's integrity hash block body back into its `u32`.
pub fn decode_hash_body(body: &[u8]) -> Result<u32> {
    let bytes: [u8; 4] = body.try_into().map_err(|_| CoreError::InputTruncated { needed: 4, available: body.len() })?;
    Ok(u32::from_le_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample() -> FileHeader {
        FileHeader {
            is_race_file: false,
            game_id: 0xDEAD_BEEF,
            version: Version { major: 3, minor: 1, incr: 0 },
            turn: 12,
            player_index: 4,
            salt: 0x3FF,
            kind: FileKind::TurnOrder,
            flags: HeaderFlags { bits: HeaderFlagBits::SUBMITTED | HeaderFlagBits::MULTI, wgen: 5 },
        }
    }

    #[test]
    fn roundtrip_is_identity() {
        let header = sample();
        let mut bytes = vec![];
        header.encode(&mut bytes).unwrap();
        assert_eq!(bytes.len(), 16);

        let mut cursor = Cursor::new(bytes);
        assert_eq!(FileHeader::decode(&mut cursor).unwrap(), header);
    }

    #[test]
    fn race_magic_selects_race_dialect() {
        let mut header = sample();
        header.is_race_file = true;
        header.kind = FileKind::Race;

        let mut bytes = vec![];
        header.encode(&mut bytes).unwrap();
        assert_eq!(&bytes[0..4], &MAGIC_RACE);

        let mut cursor = Cursor::new(bytes);
        assert!(FileHeader::decode(&mut cursor).unwrap().is_race_file);
    }

    #[test]
    fn unknown_magic_is_rejected() {
        let mut bytes = vec![b'X', b'X', b'X', b'X'];
        bytes.extend_from_slice(&[0u8; 12]);
        let mut cursor = Cursor::new(bytes);
        assert!(matches!(FileHeader::decode(&mut cursor), Err(CoreError::MalformedHeader(_))));
    }

    #[test]
    fn file_type_out_of_range_is_rejected() {
        let mut header = sample();
        let mut bytes = vec![];
        header.encode(&mut bytes).unwrap();
        bytes[14] = 9;

        let mut cursor = Cursor::new(bytes);
        assert!(matches!(FileHeader::decode(&mut cursor), Err(CoreError::MalformedHeader(_))));
    }

    #[test]
    fn race_file_seed_forces_shareware_false_and_player_31() {
        let mut header = sample();
        header.is_race_file = true;
        header.player_index = 4;

        let seed = header.cipher_seed(true);
        assert_eq!(seed.player_index, 31);
        assert!(!seed.shareware);
    }

    #[test]
    fn non_race_file_seed_keeps_player_index_and_shareware() {
        let header = sample();
        let seed = header.cipher_seed(true);
        assert_eq!(seed.player_index, 4);
        assert!(seed.shareware);
    }

    #[test]
    fn player_index_31_is_race_or_universe_sentinel() {
        let mut header = sample();
        header.player_index = 31;
        assert!(header.is_race_or_universe_player());
    }

    #[test]
    fn hash_body_roundtrip() {
        let body = encode_hash_body(0x1234_5678);
        assert_eq!(decode_hash_body(&body).unwrap(), 0x1234_5678);
    }

    #[test]
    fn footer_body_is_empty() {
        assert!(footer_body().is_empty());
    }
}
