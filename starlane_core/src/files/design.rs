//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! `DesignBlock` (type 26): a player's ship or starbase design — hull, name, and component
//! loadout.

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::Result;
use crate::files::strings::{decode_name_prefix, encode_name};

/// One `(category, item_id) → count` slot in the design's component loadout. Categories and
/// item ids are opaque here; looking up their meaning is [`crate::rules::RuleBook`]'s job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSlot {
    pub category: u8,
    pub item_id: u8,
    pub count: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignBlock {
    pub player: u8,
    pub slot: u8,
    pub hull_id: u8,
    pub name: String,
    pub components: Vec<ComponentSlot>,
}

impl DesignBlock {
    pub fn decode(body: &[u8]) -> Result<Self> {
        let mut reader = std::io::Cursor::new(body);
        let player = reader.read_u8()?;
        let slot = reader.read_u8()?;
        let hull_id = reader.read_u8()?;

        let name_start = reader.position() as usize;
        let (name, name_len) = decode_name_prefix(&body[name_start..])?;
        reader.set_position((name_start + name_len) as u64);

        let mut components = Vec::new();
        while reader.remaining()? >= 3 {
            components.push(ComponentSlot {
                category: reader.read_u8()?,
                item_id: reader.read_u8()?,
                count: reader.read_u8()?,
            });
        }

        Ok(Self { player, slot, hull_id, name, components })
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.write_u8(self.player)?;
        out.write_u8(self.slot)?;
        out.write_u8(self.hull_id)?;
        out.write_slice(&encode_name(&self.name)?)?;
        for component in &self.components {
            out.write_u8(component.category)?;
            out.write_u8(component.item_id)?;
            out.write_u8(component.count)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_with_components() {
        let design = DesignBlock {
            player: 2,
            slot: 5,
            hull_id: 9,
            name: "Warhawk".to_owned(),
            components: vec![
                ComponentSlot { category: 1, item_id: 3, count: 2 },
                ComponentSlot { category: 4, item_id: 0, count: 1 },
            ],
        };
        let encoded = design.encode().unwrap();
        assert_eq!(DesignBlock::decode(&encoded).unwrap(), design);
    }

    #[test]
    fn roundtrip_with_no_components() {
        let design = DesignBlock { player: 0, slot: 0, hull_id: 1, name: "Scout".to_owned(), components: vec![] };
        let encoded = design.encode().unwrap();
        assert_eq!(DesignBlock::decode(&encoded).unwrap(), design);
    }
}
