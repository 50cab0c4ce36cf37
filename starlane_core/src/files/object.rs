//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! `ObjectBlock` (type 43): a polymorphic map object — minefield, packet/salvage, wormhole, or
//! mystery trader — plus the degenerate "count" shape used when the body is just a running
//! total.
//!
//! Every non-count variant shares a 6-byte prefix: `{number:9, owner:4, object_type:3}` packed
//! into one word, then `x`, `y`. The `object_type` field in that prefix picks the variant below.

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::{CoreError, Result};

const SALVAGE_MARKER: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectPrefix {
    pub number: u16,
    pub owner: u8,
    pub x: u16,
    pub y: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinefieldKind {
    Standard,
    Heavy,
    SpeedBump,
}

impl MinefieldKind {
    fn from_byte(byte: u8) -> Result<Self> {
        match byte {
            0 => Ok(Self::Standard),
            1 => Ok(Self::Heavy),
            2 => Ok(Self::SpeedBump),
            other => Err(CoreError::MalformedHeader(format!("minefield kind byte {other} is not one of 0, 1, 2"))),
        }
    }

    fn to_byte(self) -> u8 {
        match self {
            Self::Standard => 0,
            Self::Heavy => 1,
            Self::SpeedBump => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minefield {
    pub prefix: ObjectPrefix,
    pub mine_count: u32,
    pub visibility_mask: u16,
    pub kind: MinefieldKind,
    pub detonating: u8,
    pub current_turn_visibility: u16,
    pub turn: u16,
}

/// Either a packet en route to a planet, or salvage left behind by a source fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketDestination {
    Planet { planet_id: u8, warp: i8 },
    Salvage { source_fleet_id: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet {
    pub prefix: ObjectPrefix,
    pub destination: PacketDestination,
    pub ironium: u16,
    pub boranium: u16,
    pub germanium: u16,
    pub max_weight: u16,
    pub decay_rate: u8,
    pub turn: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wormhole {
    pub prefix: ObjectPrefix,
    pub stability: u8,
    pub turns_since_move: u16,
    pub dest_known: bool,
    pub include_in_display: bool,
    pub visibility_mask: u16,
    pub traversal_mask: u16,
    pub partner_id: u16,
    /// Undocumented word after `partner_id`; carries no known meaning but is preserved
    /// verbatim across decode/encode rather than zeroed.
    pub padding: u16,
    pub turn: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MysteryTrader {
    pub prefix: ObjectPrefix,
    pub dest_x: u16,
    pub dest_y: u16,
    pub warp: u8,
    pub met_player_mask: u16,
    pub item_possession_mask: u16,
    pub turn: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectBlock {
    Count(u16),
    Minefield(Minefield),
    Packet(Packet),
    Wormhole(Wormhole),
    MysteryTrader(MysteryTrader),
}

fn decode_prefix<R: ReadBytes>(reader: &mut R) -> Result<(ObjectPrefix, u8)> {
    let word = reader.read_u16()?;
    let number = word & 0x01FF;
    let owner = ((word >> 9) & 0x0F) as u8;
    let object_type = ((word >> 13) & 0x07) as u8;
    let x = reader.read_u16()?;
    let y = reader.read_u16()?;
    Ok((ObjectPrefix { number, owner, x, y }, object_type))
}

fn encode_prefix<W: WriteBytes>(writer: &mut W, prefix: &ObjectPrefix, object_type: u8) -> Result<()> {
    if prefix.number > 0x01FF {
        return Err(CoreError::EncodingRejection { field: "object number".to_owned(), value: u64::from(prefix.number), max: 0x01FF });
    }
    let word = (prefix.number & 0x01FF) | (u16::from(prefix.owner & 0x0F) << 9) | (u16::from(object_type & 0x07) << 13);
    writer.write_u16(word)?;
    writer.write_u16(prefix.x)?;
    writer.write_u16(prefix.y)?;
    Ok(())
}

impl ObjectBlock {
    pub fn decode(body: &[u8]) -> Result<Self> {
        if body.len() == 2 {
            let mut reader = std::io::Cursor::new(body);
            return Ok(Self::Count(reader.read_u16()?));
        }

        let mut reader = std::io::Cursor::new(body);
        let (prefix, object_type) = decode_prefix(&mut reader)?;

        match object_type {
            0 => {
                let mine_count = reader.read_u32()?;
                let visibility_mask = reader.read_u16()?;
                let kind = MinefieldKind::from_byte(reader.read_u8()?)?;
                let detonating = reader.read_u8()?;
                let current_turn_visibility = reader.read_u16()?;
                let turn = reader.read_u16()?;
                Ok(Self::Minefield(Minefield { prefix, mine_count, visibility_mask, kind, detonating, current_turn_visibility, turn }))
            }
            1 => {
                let marker = reader.read_u8()?;
                let second = reader.read_u8()?;
                let destination = if marker == SALVAGE_MARKER {
                    PacketDestination::Salvage { source_fleet_id: second & 0x0F }
                } else {
                    let warp = (second as i16 >> 2) - 44;
                    PacketDestination::Planet { planet_id: marker, warp: warp as i8 }
                };
                let ironium = reader.read_u16()?;
                let boranium = reader.read_u16()?;
                let germanium = reader.read_u16()?;
                let packed = reader.read_u16()?;
                let max_weight = packed & 0x3FFF;
                let decay_rate = ((packed >> 14) & 0x03) as u8;
                let turn = reader.read_u16()?;
                Ok(Self::Packet(Packet { prefix, destination, ironium, boranium, germanium, max_weight, decay_rate, turn }))
            }
            2 => {
                let packed = reader.read_u16()?;
                let stability = (packed & 0x03) as u8;
                let turns_since_move = (packed >> 2) & 0x03FF;
                let dest_known = packed & 0x1000 != 0;
                let include_in_display = packed & 0x2000 != 0;
                let visibility_mask = reader.read_u16()?;
                let traversal_mask = reader.read_u16()?;
                let partner_id = reader.read_u16()?;
                let padding = reader.read_u16()?;
                let turn = reader.read_u16()?;
                Ok(Self::Wormhole(Wormhole { prefix, stability, turns_since_move, dest_known, include_in_display, visibility_mask, traversal_mask, partner_id, padding, turn }))
            }
            3 => {
                let dest_x = reader.read_u16()?;
                let dest_y = reader.read_u16()?;
                let warp = reader.read_u8()?;
                let met_player_mask = reader.read_u16()?;
                let item_possession_mask = reader.read_u16()?;
                let turn = reader.read_u16()?;
                Ok(Self::MysteryTrader(MysteryTrader { prefix, dest_x, dest_y, warp, met_player_mask, item_possession_mask, turn }))
            }
            other => Err(CoreError::MalformedHeader(format!("object type {other} is not one of 0..3"))),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        match self {
            Self::Count(count) => {
                out.write_u16(*count)?;
            }
            Self::Minefield(m) => {
                encode_prefix(&mut out, &m.prefix, 0)?;
                out.write_u32(m.mine_count)?;
                out.write_u16(m.visibility_mask)?;
                out.write_u8(m.kind.to_byte())?;
                out.write_u8(m.detonating)?;
                out.write_u16(m.current_turn_visibility)?;
                out.write_u16(m.turn)?;
            }
            Self::Packet(p) => {
                encode_prefix(&mut out, &p.prefix, 1)?;
                match p.destination {
                    PacketDestination::Salvage { source_fleet_id } => {
                        out.write_u8(SALVAGE_MARKER)?;
                        out.write_u8(source_fleet_id & 0x0F)?;
                    }
                    PacketDestination::Planet { planet_id, warp } => {
                        out.write_u8(planet_id)?;
                        let speed = ((i16::from(warp) + 44) << 2) as u8;
                        out.write_u8(speed)?;
                    }
                }
                out.write_u16(p.ironium)?;
                out.write_u16(p.boranium)?;
                out.write_u16(p.germanium)?;
                let packed = (p.max_weight & 0x3FFF) | (u16::from(p.decay_rate & 0x03) << 14);
                out.write_u16(packed)?;
                out.write_u16(p.turn)?;
            }
            Self::Wormhole(w) => {
                encode_prefix(&mut out, &w.prefix, 2)?;
                let mut packed = u16::from(w.stability & 0x03) | ((w.turns_since_move & 0x03FF) << 2);
                if w.dest_known { packed |= 0x1000; }
                if w.include_in_display { packed |= 0x2000; }
                out.write_u16(packed)?;
                out.write_u16(w.visibility_mask)?;
                out.write_u16(w.traversal_mask)?;
                out.write_u16(w.partner_id)?;
                out.write_u16(w.padding)?;
                out.write_u16(w.turn)?;
            }
            Self::MysteryTrader(t) => {
                encode_prefix(&mut out, &t.prefix, 3)?;
                out.write_u16(t.dest_x)?;
                out.write_u16(t.dest_y)?;
                out.write_u8(t.warp)?;
                out.write_u16(t.met_player_mask)?;
                out.write_u16(t.item_possession_mask)?;
                out.write_u16(t.turn)?;
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix() -> ObjectPrefix {
        ObjectPrefix { number: 300, owner: 5, x: 111, y: 222 }
    }

    #[test]
    fn count_variant_roundtrip() {
        let object = ObjectBlock::Count(777);
        let encoded = object.encode().unwrap();
        assert_eq!(encoded.len(), 2);
        assert_eq!(ObjectBlock::decode(&encoded).unwrap(), object);
    }

    #[test]
    fn minefield_roundtrip() {
        let object = ObjectBlock::Minefield(Minefield {
            prefix: prefix(), mine_count: 5000, visibility_mask: 0x00FF, kind: MinefieldKind::Heavy,
            detonating: 1, current_turn_visibility: 0x0F0F, turn: 10,
        });
        let encoded = object.encode().unwrap();
        assert_eq!(ObjectBlock::decode(&encoded).unwrap(), object);
    }

    #[test]
    fn minefield_detonating_byte_above_one_is_not_a_bool_decode_error() {
        let object = ObjectBlock::Minefield(Minefield {
            prefix: prefix(), mine_count: 1, visibility_mask: 0, kind: MinefieldKind::Standard,
            detonating: 2, current_turn_visibility: 0, turn: 0,
        });
        let encoded = object.encode().unwrap();
        assert_eq!(ObjectBlock::decode(&encoded).unwrap(), object);
    }

    #[test]
    fn packet_to_planet_roundtrip() {
        let object = ObjectBlock::Packet(Packet {
            prefix: prefix(), destination: PacketDestination::Planet { planet_id: 12, warp: 6 },
            ironium: 10, boranium: 20, germanium: 30, max_weight: 9000, decay_rate: 2, turn: 4,
        });
        let encoded = object.encode().unwrap();
        assert_eq!(ObjectBlock::decode(&encoded).unwrap(), object);
    }

    #[test]
    fn salvage_roundtrip() {
        let object = ObjectBlock::Packet(Packet {
            prefix: prefix(), destination: PacketDestination::Salvage { source_fleet_id: 7 },
            ironium: 1, boranium: 2, germanium: 3, max_weight: 1, decay_rate: 0, turn: 1,
        });
        let encoded = object.encode().unwrap();
        assert_eq!(ObjectBlock::decode(&encoded).unwrap(), object);
    }

    #[test]
    fn wormhole_roundtrip() {
        let object = ObjectBlock::Wormhole(Wormhole {
            prefix: prefix(), stability: 2, turns_since_move: 500, dest_known: true, include_in_display: false,
            visibility_mask: 0xABCD, traversal_mask: 0x1234, partner_id: 99, padding: 0xBEEF, turn: 12,
        });
        let encoded = object.encode().unwrap();
        assert_eq!(ObjectBlock::decode(&encoded).unwrap(), object);
    }

    #[test]
    fn mystery_trader_roundtrip() {
        let object = ObjectBlock::MysteryTrader(MysteryTrader {
            prefix: prefix(), dest_x: 10, dest_y: 20, warp: 9, met_player_mask: 0x00FF, item_possession_mask: 0xFF00, turn: 2,
        });
        let encoded = object.encode().unwrap();
        assert_eq!(ObjectBlock::decode(&encoded).unwrap(), object);
    }
}
