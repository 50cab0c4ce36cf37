//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! `PlanetsBlock` (type 7): the galaxy's planet-name table. The lone block type whose payload
//! isn't fully bounded by the framer's 10-bit size field — a coordinate table trails the
//! declared body, 4 bytes per planet, outside the block's own size. Callers walking a file must
//! special-case type 7 the way [`crate::files::document`] does.

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::Result;
use crate::files::strings::{decode_name_prefix, encode_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetCoordinates {
    pub x: u16,
    pub y: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetsBlock {
    pub names: Vec<String>,
    pub coordinates: Vec<PlanetCoordinates>,
}

impl PlanetsBlock {
    /// How many trailing out-of-band bytes this block's `body` demands, once decoded: 4 bytes
    /// per planet. Read this many additional bytes from the file right after the framed body
    /// before resuming normal block-by-block decoding.
    pub fn trailing_byte_count(body: &[u8]) -> Result<usize> {
        let mut reader = std::io::Cursor::new(body);
        let count = reader.read_u16()? as usize;
        Ok(count * 4)
    }

    /// Decodes the in-body planet count and name table, plus the out-of-band coordinate table
    /// `trailing` read separately (see [`Self::trailing_byte_count`]).
    pub fn decode(body: &[u8], trailing: &[u8]) -> Result<Self> {
        let mut reader = std::io::Cursor::new(body);
        let count = reader.read_u16()? as usize;

        let mut names = Vec::with_capacity(count);
        for _ in 0..count {
            let start = reader.position() as usize;
            let (name, len) = decode_name_prefix(&body[start..])?;
            reader.set_position((start + len) as u64);
            names.push(name);
        }

        let mut coordinates = Vec::with_capacity(count);
        let mut trailing_reader = std::io::Cursor::new(trailing);
        for _ in 0..count {
            coordinates.push(PlanetCoordinates { x: trailing_reader.read_u16()?, y: trailing_reader.read_u16()? });
        }

        Ok(Self { names, coordinates })
    }

    /// Encodes the in-body portion (count + names) and the out-of-band trailing coordinate
    /// table separately, mirroring how [`Self::decode`] consumes them.
    pub fn encode(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        let mut body = Vec::new();
        body.write_u16(self.names.len() as u16)?;
        for name in &self.names {
            body.write_slice(&encode_name(name)?)?;
        }

        let mut trailing = Vec::new();
        for coordinate in &self.coordinates {
            trailing.write_u16(coordinate.x)?;
            trailing.write_u16(coordinate.y)?;
        }

        Ok((body, trailing))
    }
}
