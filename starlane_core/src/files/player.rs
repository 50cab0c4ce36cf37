//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! `PlayerBlock` (type 6): a player's seat in the game — status, password, and the per-player
//! relation array that [`crate::files::diplomacy`] blocks mutate one entry at a time.

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::{CoreError, Result};
use crate::files::diplomacy::Relation;

const RELATION_SLOTS: usize = 16;
const NO_PASSWORD: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    Human,
    Ai,
    Inactive,
}

impl PlayerStatus {
    fn from_byte(byte: u8) -> Result<Self> {
        match byte {
            0 => Ok(Self::Human),
            1 => Ok(Self::Ai),
            2 => Ok(Self::Inactive),
            other => Err(CoreError::MalformedHeader(format!("player status byte {other} is not one of 0, 1, 2"))),
        }
    }

    fn to_byte(self) -> u8 {
        match self {
            Self::Human => 0,
            Self::Ai => 1,
            Self::Inactive => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerBlock {
    pub player_index: u8,
    pub status: PlayerStatus,
    /// Stored in the clear; a nonzero value means a turn-order password is set. The race repair
    /// tool's password-removal feature just writes [`NO_PASSWORD`] here and re-hashes.
    pub password: u8,
    pub relations: [Relation; RELATION_SLOTS],
}

impl PlayerBlock {
    pub fn decode(body: &[u8]) -> Result<Self> {
        let mut reader = std::io::Cursor::new(body);
        let player_index = reader.read_u8()?;
        let status = PlayerStatus::from_byte(reader.read_u8()?)?;
        let password = reader.read_u8()?;

        let mut relations = [Relation::Neutral; RELATION_SLOTS];
        for slot in relations.iter_mut() {
            *slot = Relation::from_stored(reader.read_u8()?)?;
        }

        Ok(Self { player_index, status, password, relations })
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.write_u8(self.player_index)?;
        out.write_u8(self.status.to_byte())?;
        out.write_u8(self.password)?;
        for relation in self.relations {
            out.write_u8(relation.to_stored())?;
        }
        Ok(out)
    }

    pub fn with_password_removed(&self) -> Self {
        Self { password: NO_PASSWORD, ..self.clone() }
    }
}
