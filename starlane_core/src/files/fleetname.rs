//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! `FleetNameBlock` (type 21): a nibble-packed name immediately following the `FleetBlock` it
//! names. Positional association only — see [`crate::aggregator`] for the pending-name buffer
//! that links this block back to its fleet.

use crate::binary::WriteBytes;
use crate::error::Result;
use crate::files::strings::{decode_name, encode_name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetNameBlock {
    pub name: String,
}

impl FleetNameBlock {
    pub fn decode(body: &[u8]) -> Result<Self> {
        Ok(Self { name: decode_name(body)? })
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.write_slice(&encode_name(&self.name)?)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let block = FleetNameBlock { name: "Death Star".to_owned() };
        let encoded = block.encode().unwrap();
        assert_eq!(FleetNameBlock::decode(&encoded).unwrap(), block);
    }
}
