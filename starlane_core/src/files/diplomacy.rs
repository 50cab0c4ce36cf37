//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! `DiplomacyBlock` (type 38): a single relation change between the owning player and a target.
//!
//! The wire encoding (`0=friend, 1=neutral, 2=enemy`) differs from the encoding `PlayerBlock`
//! stores its relation array in (`0=neutral, 1=friend, 2=enemy`); this module is the one place
//! that translates between them.

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Friend,
    Neutral,
    Enemy,
}

impl Relation {
    pub fn from_wire(byte: u8) -> Result<Self> {
        match byte {
            0 => Ok(Self::Friend),
            1 => Ok(Self::Neutral),
            2 => Ok(Self::Enemy),
            other => Err(CoreError::MalformedHeader(format!("diplomacy relation byte {other} is not one of 0, 1, 2"))),
        }
    }

    pub fn to_wire(self) -> u8 {
        match self {
            Self::Friend => 0,
            Self::Neutral => 1,
            Self::Enemy => 2,
        }
    }

    pub fn from_stored(byte: u8) -> Result<Self> {
        match byte {
            0 => Ok(Self::Neutral),
            1 => Ok(Self::Friend),
            2 => Ok(Self::Enemy),
            other => Err(CoreError::MalformedHeader(format!("stored relation byte {other} is not one of 0, 1, 2"))),
        }
    }

    pub fn to_stored(self) -> u8 {
        match self {
            Self::Neutral => 0,
            Self::Friend => 1,
            Self::Enemy => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiplomacyBlock {
    pub relation: Relation,
    pub target_player: u8,
}

impl DiplomacyBlock {
    pub fn decode(body: &[u8]) -> Result<Self> {
        let mut reader = std::io::Cursor::new(body);
        let relation = Relation::from_wire(reader.read_u8()?)?;
        let target_player = reader.read_u8()?;
        Ok(Self { relation, target_player })
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.write_u8(self.relation.to_wire())?;
        out.write_u8(self.target_player)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_s6_friend_translates_to_stored_one_and_back() {
        let body = [0x00, 0x01];
        let block = DiplomacyBlock::decode(&body).unwrap();
        assert_eq!(block.relation, Relation::Friend);
        assert_eq!(block.target_player, 1);

        let stored = block.relation.to_stored();
        assert_eq!(stored, 1);

        let restored_relation = Relation::from_stored(stored).unwrap();
        let re_encoded = DiplomacyBlock { relation: restored_relation, target_player: block.target_player }.encode().unwrap();
        assert_eq!(re_encoded, body);
    }

    #[test]
    fn all_relations_roundtrip_through_wire_and_stored_encodings() {
        for relation in [Relation::Friend, Relation::Neutral, Relation::Enemy] {
            assert_eq!(Relation::from_wire(relation.to_wire()).unwrap(), relation);
            assert_eq!(Relation::from_stored(relation.to_stored()).unwrap(), relation);
        }
    }

    #[test]
    fn block_roundtrip() {
        let block = DiplomacyBlock { relation: Relation::Enemy, target_player: 9 };
        let encoded = block.encode().unwrap();
        assert_eq!(DiplomacyBlock::decode(&encoded).unwrap(), block);
    }
}
