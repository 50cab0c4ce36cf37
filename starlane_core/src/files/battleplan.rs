//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! `BattlePlanBlock` (type 30): a player's named battle plan.
//!
//! Phase-level decoding of `actions`/`stacks` is out of scope — the source's own decoding of
//! these sections is partial, so this codec only guarantees they round-trip as opaque blobs.

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::{CoreError, Result};
use crate::files::strings::{decode_name_prefix, encode_name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattlePlanBlock {
    pub player: u8,
    pub plan_id: u8,
    pub name: String,
    pub actions: Vec<u8>,
    pub stacks: Vec<u8>,
}

impl BattlePlanBlock {
    pub fn decode(body: &[u8]) -> Result<Self> {
        let mut reader = std::io::Cursor::new(body);
        let player = reader.read_u8()?;
        let plan_id = reader.read_u8()?;

        let name_start = reader.position() as usize;
        let (name, name_len) = decode_name_prefix(&body[name_start..])?;
        reader.set_position((name_start + name_len) as u64);

        let actions_len = reader.read_u16()? as usize;
        let actions = reader.read_slice(actions_len, false)?;

        let stacks_len = reader.read_u16()? as usize;
        let stacks = reader.read_slice(stacks_len, false)?;

        Ok(Self { player, plan_id, name, actions, stacks })
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.actions.len() > u16::MAX as usize || self.stacks.len() > u16::MAX as usize {
            return Err(CoreError::EncodingRejection {
                field: "battle plan actions/stacks length".to_owned(),
                value: self.actions.len().max(self.stacks.len()) as u64,
                max: u64::from(u16::MAX),
            });
        }

        let mut out = Vec::new();
        out.write_u8(self.player)?;
        out.write_u8(self.plan_id)?;
        out.write_slice(&encode_name(&self.name)?)?;
        out.write_u16(self.actions.len() as u16)?;
        out.write_slice(&self.actions)?;
        out.write_u16(self.stacks.len() as u16)?;
        out.write_slice(&self.stacks)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_preserves_opaque_actions_and_stacks() {
        let plan = BattlePlanBlock {
            player: 1,
            plan_id: 2,
            name: "Alpha Strike".to_owned(),
            actions: vec![1, 2, 3, 4, 5],
            stacks: vec![9, 9],
        };
        let encoded = plan.encode().unwrap();
        assert_eq!(BattlePlanBlock::decode(&encoded).unwrap(), plan);
    }

    #[test]
    fn empty_actions_and_stacks_roundtrip() {
        let plan = BattlePlanBlock { player: 0, plan_id: 0, name: "".to_owned(), actions: vec![], stacks: vec![] };
        let encoded = plan.encode().unwrap();
        assert_eq!(BattlePlanBlock::decode(&encoded).unwrap(), plan);
    }
}
