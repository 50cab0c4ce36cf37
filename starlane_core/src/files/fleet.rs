//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! `FleetBlock` (block types 16, 17): a fleet's ship composition, cargo, damage and orders.
//!
//! The body's shape past the ship-composition mask branches on the fleet's own `kind` byte
//! rather than on the outer block type — a "full" fleet carries cargo and damage, anything
//! else carries movement deltas instead. See [`FleetKind`].

use bitflags::bitflags;

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::{CoreError, Result};
use crate::files::varint::{decode_varint_pack, encode_varint_pack};

/// The fleet's `kind` byte (offset 4), selecting which trailing section follows the ship
/// composition: cargo + damage for a full fleet, movement deltas for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetKind {
    Partial,
    Pickpocket,
    Full,
}

impl FleetKind {
    fn from_byte(byte: u8) -> Result<Self> {
        match byte {
            3 => Ok(Self::Partial),
            4 => Ok(Self::Pickpocket),
            7 => Ok(Self::Full),
            other => Err(CoreError::MalformedHeader(format!("fleet kind byte {other} is not one of 3, 4, 7"))),
        }
    }

    fn to_byte(self) -> u8 {
        match self {
            Self::Partial => 3,
            Self::Pickpocket => 4,
            Self::Full => 7,
        }
    }

    fn carries_cargo(self) -> bool {
        matches!(self, Self::Full | Self::Pickpocket)
    }
}

bitflags! {
    /// The flag byte (offset 5). `BYTE_COUNTS_RAW` keeps the RAW stored bit, not its logical
    /// meaning: clear means 2-byte ship counts, set means 1-byte counts — the inverse of what
    /// the name suggests. The four high "runtime-only" bits are always zeroed on encode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FleetFlags: u8 {
        const INCLUDE         = 0x01;
        const REPEAT_ORDERS   = 0x02;
        const DEAD            = 0x04;
        const BYTE_COUNTS_RAW = 0x08;
    }
}

impl FleetFlags {
    fn from_byte(byte: u8) -> Self {
        Self::from_bits_truncate(byte)
    }

    fn to_byte(self) -> u8 {
        self.bits()
    }

    /// Width in bytes of each ship-count field, accounting for the bit's inversion.
    fn count_width(self) -> usize {
        if self.contains(Self::BYTE_COUNTS_RAW) { 1 } else { 2 }
    }
}

bitflags! {
    /// A warp-move order byte's four boolean bits, occupying the top nibble alongside the
    /// `warp` value packed into the bottom nibble (see [`WarpOrder`]).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WarpOrderFlags: u8 {
        const DIR_VALID = 0x10;
        const COMP_CHG  = 0x20;
        const TARGETED  = 0x40;
        const SKIPPED   = 0x80;
    }
}

/// A single warp-move's order byte (offset varies): `warp` in the bottom nibble, four flags in
/// the top nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarpOrder {
    pub warp: u8,
    pub flags: WarpOrderFlags,
}

impl WarpOrder {
    fn from_byte(byte: u8) -> Self {
        Self {
            warp: byte & 0x0F,
            flags: WarpOrderFlags::from_bits_truncate(byte),
        }
    }

    fn to_byte(self) -> u8 {
        (self.warp & 0x0F) | self.flags.bits()
    }
}

/// The movement section present on any non-full fleet block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetMovement {
    pub delta_x: i16,
    pub delta_y: i16,
    pub warp_order: WarpOrder,
    pub mass: u32,
}

const DELTA_BIAS: i16 = 127;

/// Five tradeable cargo kinds, in their fixed on-wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FleetCargo {
    pub ironium: u64,
    pub boranium: u64,
    pub germanium: u64,
    pub population: u64,
    pub fuel: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetBlock {
    pub fleet_num: u16,
    pub owner: u8,
    pub unused_word0: u8,
    pub kind: FleetKind,
    pub flags: FleetFlags,
    pub position_object_id: u16,
    pub x: u16,
    pub y: u16,
    pub ship_counts: Vec<(u8, u32)>,
    pub cargo: Option<FleetCargo>,
    pub damage: Vec<(u8, u16)>,
    pub battle_plan: Option<u8>,
    pub waypoint_count: Option<u8>,
    pub movement: Option<FleetMovement>,
}

impl FleetBlock {
    pub fn decode(body: &[u8]) -> Result<Self> {
        let mut reader = std::io::Cursor::new(body);

        let word0 = reader.read_u16()?;
        let fleet_num = word0 & 0x01FF;
        let owner = ((word0 >> 9) & 0x0F) as u8;
        let unused_word0 = ((word0 >> 13) & 0x07) as u8;

        let redundant_owner = reader.read_u16()?;
        if redundant_owner != owner as u16 {
            return Err(CoreError::MalformedHeader(format!(
                "fleet owner mismatch: word0 says {owner}, redundant field says {redundant_owner}"
            )));
        }

        let kind = FleetKind::from_byte(reader.read_u8()?)?;
        let flags = FleetFlags::from_byte(reader.read_u8()?);

        let position_object_id = reader.read_u16()?;
        let x = reader.read_u16()?;
        let y = reader.read_u16()?;

        let ship_types = reader.read_u16()?;
        let width = flags.count_width();
        let mut ship_counts = Vec::new();
        for slot in 0..16u8 {
            if ship_types & (1 << slot) != 0 {
                let count = if width == 1 { u32::from(reader.read_u8()?) } else { u32::from(reader.read_u16()?) };
                ship_counts.push((slot, count));
            }
        }

        let cargo = if kind.carries_cargo() {
            let values = decode_varint_pack(&mut reader, 5)?;
            Some(FleetCargo { ironium: values[0], boranium: values[1], germanium: values[2], population: values[3], fuel: values[4] })
        } else {
            None
        };

        let (damage, battle_plan, waypoint_count, movement) = if matches!(kind, FleetKind::Full) {
            let damaged_mask = reader.read_u16()?;
            let mut damage = Vec::new();
            for slot in 0..16u8 {
                if damaged_mask & (1 << slot) != 0 {
                    damage.push((slot, reader.read_u16()?));
                }
            }
            let battle_plan = reader.read_u8()?;
            let waypoint_count = reader.read_u8()?;
            (damage, Some(battle_plan), Some(waypoint_count), None)
        } else {
            let delta_x = i16::from(reader.read_u8()?) - DELTA_BIAS;
            let delta_y = i16::from(reader.read_u8()?) - DELTA_BIAS;
            let warp_order = WarpOrder::from_byte(reader.read_u8()?);
            let _padding = reader.read_u8()?;
            let mass = reader.read_u32()?;
            (Vec::new(), None, None, Some(FleetMovement { delta_x, delta_y, warp_order, mass }))
        };

        Ok(Self {
            fleet_num, owner, unused_word0, kind, flags, position_object_id, x, y,
            ship_counts, cargo, damage, battle_plan, waypoint_count, movement,
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.fleet_num > 0x01FF {
            return Err(CoreError::EncodingRejection { field: "fleet_num".to_owned(), value: u64::from(self.fleet_num), max: 0x01FF });
        }
        if self.owner > 0x0F {
            return Err(CoreError::EncodingRejection { field: "owner".to_owned(), value: u64::from(self.owner), max: 0x0F });
        }

        let mut out = Vec::new();
        let word0 = (self.fleet_num & 0x01FF) | (u16::from(self.owner) << 9) | (u16::from(self.unused_word0 & 0x07) << 13);
        out.write_u16(word0)?;
        out.write_u16(u16::from(self.owner))?;

        out.write_u8(self.kind.to_byte())?;
        out.write_u8(self.flags.to_byte())?;

        out.write_u16(self.position_object_id)?;
        out.write_u16(self.x)?;
        out.write_u16(self.y)?;

        let mut ship_types: u16 = 0;
        for &(slot, _) in &self.ship_counts {
            ship_types |= 1 << slot;
        }
        out.write_u16(ship_types)?;

        let width = self.flags.count_width();
        for &(_, count) in &self.ship_counts {
            if width == 1 {
                out.write_u8(count as u8)?;
            } else {
                out.write_u16(count as u16)?;
            }
        }

        if self.kind.carries_cargo() {
            let cargo = self.cargo.unwrap_or_default();
            encode_varint_pack(&mut out, &[cargo.ironium, cargo.boranium, cargo.germanium, cargo.population, cargo.fuel])?;
        }

        if matches!(self.kind, FleetKind::Full) {
            let mut damaged_mask: u16 = 0;
            for &(slot, _) in &self.damage {
                damaged_mask |= 1 << slot;
            }
            out.write_u16(damaged_mask)?;
            for &(_, amount) in &self.damage {
                out.write_u16(amount)?;
            }
            out.write_u8(self.battle_plan.unwrap_or(0))?;
            out.write_u8(self.waypoint_count.unwrap_or(0))?;
        } else if let Some(movement) = self.movement {
            out.write_u8((movement.delta_x + DELTA_BIAS) as u8)?;
            out.write_u8((movement.delta_y + DELTA_BIAS) as u8)?;
            out.write_u8(movement.warp_order.to_byte())?;
            out.write_u8(0)?;
            out.write_u32(movement.mass)?;
        }

        Ok(out)
    }
}
