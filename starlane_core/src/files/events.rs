//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! `EventsBlock` (type 12): a per-turn container of fixed-width event entries.

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventEntry {
    pub event_type: u8,
    pub data: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsBlock {
    pub turn: u16,
    pub events: Vec<EventEntry>,
}

impl EventsBlock {
    pub fn decode(body: &[u8]) -> Result<Self> {
        let mut reader = std::io::Cursor::new(body);
        let turn = reader.read_u16()?;

        let mut events = Vec::new();
        while reader.remaining()? >= 4 {
            let event_type = reader.read_u8()?;
            let mut data = [0u8; 3];
            for byte in data.iter_mut() {
                *byte = reader.read_u8()?;
            }
            events.push(EventEntry { event_type, data });
        }

        Ok(Self { turn, events })
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.write_u16(self.turn)?;
        for event in &self.events {
            out.write_u8(event.event_type)?;
            out.write_slice(&event.data)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_with_several_events() {
        let block = EventsBlock {
            turn: 15,
            events: vec![
                EventEntry { event_type: 1, data: [1, 2, 3] },
                EventEntry { event_type: 7, data: [0, 0, 0] },
            ],
        };
        let encoded = block.encode().unwrap();
        assert_eq!(EventsBlock::decode(&encoded).unwrap(), block);
    }

    #[test]
    fn roundtrip_with_no_events() {
        let block = EventsBlock { turn: 1, events: vec![] };
        let encoded = block.encode().unwrap();
        assert_eq!(EventsBlock::decode(&encoded).unwrap(), block);
    }
}
