//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! `MessageBlock` (type 40): a single in-game message. The aggregator assigns its identity
//! (append-order index) positionally — the block itself carries no number.

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::Result;
use crate::files::strings::{decode_name_prefix, encode_name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBlock {
    pub target_player: u8,
    pub text: String,
}

impl MessageBlock {
    pub fn decode(body: &[u8]) -> Result<Self> {
        let mut reader = std::io::Cursor::new(body);
        let target_player = reader.read_u8()?;
        let text_start = reader.position() as usize;
        let (text, _) = decode_name_prefix(&body[text_start..])?;
        Ok(Self { target_player, text })
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.write_u8(self.target_player)?;
        out.write_slice(&encode_name(&self.text)?)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let message = MessageBlock { target_player: 3, text: "enemy fleet sighted".to_owned() };
        let encoded = message.encode().unwrap();
        assert_eq!(MessageBlock::decode(&encoded).unwrap(), message);
    }
}
