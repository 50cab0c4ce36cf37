//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! Splits a file's byte stream into `(type, body)` blocks and back.
//!
//! A block header is one little-endian `u16`: the top 6 bits are the block type, the bottom 10
//! bits are the body's length. This module only handles that outer shape — it knows nothing
//! about encryption or what a given type's body means, so it runs identically over a plaintext
//! [`crate::files::header`] and an encrypted block body.

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::{CoreError, Result};

const SIZE_MASK: u16 = 0x03FF;
const TYPE_SHIFT: u16 = 10;

/// One `(type, body)` pair as it appears framed on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: u8,
    pub body: Vec<u8>,
}

/// Splits `bytes` into framed blocks, reading from offset 0 until the input is exhausted.
pub fn unframe(bytes: &[u8]) -> Result<Vec<Block>> {
    let mut reader = std::io::Cursor::new(bytes);
    let mut blocks = Vec::new();

    while (reader.position() as usize) < bytes.len() {
        let header = reader.read_u16()?;
        let kind = (header >> TYPE_SHIFT) as u8;
        let size = (header & SIZE_MASK) as usize;

        let body = reader.read_slice(size, false)?;

        blocks.push(Block { kind, body });
    }

    Ok(blocks)
}

/// Re-serializes `blocks` back into a flat byte stream, inverse of [`unframe`].
pub fn frame(blocks: &[Block]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for block in blocks {
        if block.body.len() > SIZE_MASK as usize {
            return Err(CoreError::EncodingRejection {
                field: "block body length".to_owned(),
                value: block.body.len() as u64,
                max: u64::from(SIZE_MASK),
            });
        }

        let header = (u16::from(block.kind) << TYPE_SHIFT) | (block.body.len() as u16 & SIZE_MASK);
        out.write_u16(header)?;
        out.write_slice(&block.body)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_is_identity_for_well_formed_input() {
        let blocks = vec![
            Block { kind: 3, body: vec![1, 2, 3, 4] },
            Block { kind: 0, body: vec![] },
        ];
        let bytes = frame(&blocks).unwrap();
        assert_eq!(unframe(&bytes).unwrap(), blocks);
    }

    #[test]
    fn empty_body_is_legal() {
        let blocks = vec![Block { kind: 0, body: vec![] }];
        let bytes = frame(&blocks).unwrap();
        assert_eq!(bytes, vec![0x00, 0x00]);
        assert_eq!(unframe(&bytes).unwrap(), blocks);
    }

    #[test]
    fn type_and_size_share_one_word() {
        let blocks = vec![Block { kind: 9, body: vec![0xAA, 0xBB] }];
        let bytes = frame(&blocks).unwrap();
        // kind=9 (0b001001) in top 6 bits, size=2 in bottom 10 bits.
        assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), (9 << 10) | 2);
    }

    #[test]
    fn truncated_body_is_rejected() {
        // Header declares 4 bytes but only 1 follows.
        let bytes = vec![0x04, 0x00, 0xFF];
        let err = unframe(&bytes).unwrap_err();
        assert!(matches!(err, CoreError::InputTruncated { .. }));
    }

    #[test]
    fn body_over_size_limit_is_rejected() {
        let blocks = vec![Block { kind: 1, body: vec![0u8; 1024] }];
        assert!(frame(&blocks).is_err());
    }

    #[test]
    fn multiple_blocks_advance_by_header_plus_size() {
        let blocks = vec![
            Block { kind: 1, body: vec![1] },
            Block { kind: 2, body: vec![2, 2] },
            Block { kind: 0, body: vec![] },
        ];
        let bytes = frame(&blocks).unwrap();
        let decoded = unframe(&bytes).unwrap();
        assert_eq!(decoded, blocks);
    }
}
