//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! Whole-file decode/encode: walks a file's plaintext header, then its encrypted, framed
//! blocks in order, special-casing [`crate::files::block::TYPE_PLANETS`] for its out-of-band
//! trailing bytes.
//!
//! This is deliberately a thin orchestration layer over [`crate::files::header`],
//! [`crate::crypto`] and [`crate::files::block`] rather than a reuse of
//! [`crate::files::framer::unframe`]: the planet table's extra bytes don't fit that function's
//! "one input buffer, one output vector of blocks" contract.

use crate::binary::{ReadBytes, WriteBytes};
use crate::crypto::Cryptor;
use crate::error::{CoreError, Result};
use crate::files::block::{self, Block, TYPE_PLANETS};
use crate::files::header::FileHeader;
use crate::files::planets_table::PlanetsBlock;

const SIZE_MASK: u16 = 0x03FF;
const TYPE_SHIFT: u16 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFile {
    pub header: FileHeader,
    pub blocks: Vec<Block>,
}

/// Decodes a complete file: its plaintext header, then every encrypted block in order.
/// `shareware` only matters for non-race files, where it feeds the cipher seed.
pub fn decode_file(bytes: &[u8], shareware: bool) -> Result<DecodedFile> {
    let mut reader = std::io::Cursor::new(bytes);
    let header = FileHeader::decode(&mut reader)?;

    let mut cryptor = Cryptor::new(header.cipher_seed(shareware))?;
    let mut blocks = Vec::new();

    while (reader.position() as usize) < bytes.len() {
        let word = reader.read_u16()?;
        let kind = (word >> TYPE_SHIFT) as u8;
        let size = (word & SIZE_MASK) as usize;
        let raw_body = reader.read_slice(size, false)?;
        let body = cryptor.decrypt(&raw_body);

        if kind == TYPE_PLANETS {
            let trailing_len = PlanetsBlock::trailing_byte_count(&body)?;
            let raw_trailing = reader.read_slice(trailing_len, false)?;
            let trailing = cryptor.decrypt(&raw_trailing);
            blocks.push(Block::Planets(PlanetsBlock::decode(&body, &trailing)?));
        } else {
            blocks.push(block::decode(kind, &body)?);
        }
    }

    Ok(DecodedFile { header, blocks })
}

/// Re-serializes a [`DecodedFile`], inverse of [`decode_file`] for unmodified input.
pub fn encode_file(file: &DecodedFile, shareware: bool) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    file.header.encode(&mut out)?;

    let mut cryptor = Cryptor::new(file.header.cipher_seed(shareware))?;

    for decoded_block in &file.blocks {
        if let Block::Planets(planets) = decoded_block {
            let (body, trailing) = planets.encode()?;
            write_framed(&mut out, &mut cryptor, TYPE_PLANETS, &body)?;
            out.write_slice(&cryptor.encrypt(&trailing))?;
        } else {
            let (kind, body) = block::encode(decoded_block)?;
            write_framed(&mut out, &mut cryptor, kind, &body)?;
        }
    }

    Ok(out)
}

fn write_framed(out: &mut Vec<u8>, cryptor: &mut Cryptor, kind: u8, body: &[u8]) -> Result<()> {
    if body.len() > SIZE_MASK as usize {
        return Err(CoreError::EncodingRejection { field: "block body length".to_owned(), value: body.len() as u64, max: u64::from(SIZE_MASK) });
    }
    let header_word = (u16::from(kind) << TYPE_SHIFT) | (body.len() as u16 & SIZE_MASK);
    out.write_u16(header_word)?;
    out.write_slice(&cryptor.encrypt(body))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::header::{FileKind, HeaderFlagBits, HeaderFlags, Version};
    use crate::files::planets_table::PlanetCoordinates;

    fn sample_header() -> FileHeader {
        FileHeader {
            is_race_file: false,
            game_id: 7,
            version: Version { major: 2, minor: 3, incr: 1 },
            turn: 5,
            player_index: 0,
            salt: 0x55,
            kind: FileKind::TurnOrder,
            flags: HeaderFlags { bits: HeaderFlagBits::IN_USE, wgen: 0 },
        }
    }

    #[test]
    fn header_plus_footer_roundtrips() {
        let file = DecodedFile { header: sample_header(), blocks: vec![Block::Footer] };
        let bytes = encode_file(&file, false).unwrap();
        assert_eq!(decode_file(&bytes, false).unwrap(), file);
    }

    #[test]
    fn diplomacy_block_survives_encryption_round_trip() {
        use crate::files::diplomacy::{DiplomacyBlock, Relation};
        let file = DecodedFile {
            header: sample_header(),
            blocks: vec![
                Block::Diplomacy(DiplomacyBlock { relation: Relation::Enemy, target_player: 2 }),
                Block::Footer,
            ],
        };
        let bytes = encode_file(&file, false).unwrap();
        assert_eq!(decode_file(&bytes, false).unwrap(), file);
    }

    #[test]
    fn planets_block_trailing_table_survives_round_trip() {
        let planets = PlanetsBlock {
            names: vec!["Earth".to_owned(), "Mars".to_owned()],
            coordinates: vec![PlanetCoordinates { x: 1, y: 2 }, PlanetCoordinates { x: 3, y: 4 }],
        };
        let file = DecodedFile { header: sample_header(), blocks: vec![Block::Planets(planets), Block::Footer] };
        let bytes = encode_file(&file, false).unwrap();
        assert_eq!(decode_file(&bytes, false).unwrap(), file);
    }

    #[test]
    fn race_file_seeding_ignores_shareware_argument() {
        let mut header = sample_header();
        header.is_race_file = true;
        header.kind = FileKind::Race;
        let file = DecodedFile { header, blocks: vec![Block::Footer] };

        let with_shareware_true = encode_file(&file, true).unwrap();
        let with_shareware_false = encode_file(&file, false).unwrap();
        assert_eq!(with_shareware_true, with_shareware_false);
    }
}
