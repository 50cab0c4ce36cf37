//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! Waypoint task blocks (types 5, 19, 20): a fleet's next navigation/cargo/patrol order.
//!
//! The 12-byte base record is common to every task; `task` selects which, if any, trailing
//! extension follows it (transport cargo actions, or a patrol intercept range).

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::{CoreError, Result};

const STARGATE_WARP: u8 = 11;

/// One of the nine semantics a transport cargo action's high nibble can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportAction {
    None,
    LoadAll,
    UnloadAll,
    LoadExact,
    UnloadExact,
    FillToPercent,
    WaitForPercent,
    DropAndLoad,
    SetToExact,
}

impl TransportAction {
    fn from_nibble(nibble: u8) -> Result<Self> {
        match nibble {
            0 => Ok(Self::None),
            1 => Ok(Self::LoadAll),
            2 => Ok(Self::UnloadAll),
            3 => Ok(Self::LoadExact),
            4 => Ok(Self::UnloadExact),
            5 => Ok(Self::FillToPercent),
            6 => Ok(Self::WaitForPercent),
            7 => Ok(Self::DropAndLoad),
            8 => Ok(Self::SetToExact),
            other => Err(CoreError::MalformedHeader(format!("transport action nibble {other} is not one of 0..8"))),
        }
    }

    fn to_nibble(self) -> u8 {
        match self {
            Self::None => 0,
            Self::LoadAll => 1,
            Self::UnloadAll => 2,
            Self::LoadExact => 3,
            Self::UnloadExact => 4,
            Self::FillToPercent => 5,
            Self::WaitForPercent => 6,
            Self::DropAndLoad => 7,
            Self::SetToExact => 8,
        }
    }
}

/// A single `(value, action)` cargo instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CargoAction {
    pub value: u8,
    pub action: TransportAction,
}

/// Four cargo actions in their fixed wire order: ironium, boranium, germanium, colonists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportExtension {
    pub ironium: CargoAction,
    pub boranium: CargoAction,
    pub germanium: CargoAction,
    pub colonists: CargoAction,
}

/// A patrol's intercept range, either a fixed light-year band or "any enemy".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolRange {
    LightYears(u16),
    AnyEnemy,
}

impl PatrolRange {
    fn from_index(index: u8) -> Self {
        if index >= 11 { Self::AnyEnemy } else { Self::LightYears((u16::from(index) + 1) * 50) }
    }

    fn to_index(self) -> u8 {
        match self {
            Self::AnyEnemy => 11,
            Self::LightYears(ly) => (ly / 50).saturating_sub(1) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaypointExtension {
    None,
    Transport(TransportExtension),
    Patrol(PatrolRange),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaypointBlock {
    pub fleet_num: u16,
    pub waypoint_index: u16,
    pub x: u16,
    pub y: u16,
    pub target_id: u16,
    pub warp: u8,
    pub task: u8,
    pub target_type: u8,
    pub extension: WaypointExtension,
}

impl WaypointBlock {
    pub fn uses_stargate(&self) -> bool {
        self.warp == STARGATE_WARP
    }

    pub fn decode(body: &[u8]) -> Result<Self> {
        let mut reader = std::io::Cursor::new(body);

        let fleet_num = reader.read_u16()? & 0x01FF;
        let waypoint_index = reader.read_u16()?;
        let x = reader.read_u16()?;
        let y = reader.read_u16()?;
        let target_id = reader.read_u16()? & 0x01FF;

        let warp_task = reader.read_u8()?;
        let warp = warp_task >> 4;
        let task = warp_task & 0x0F;

        let target_type = reader.read_u8()? & 0x0F;

        let extension = match task {
            1 => {
                let mut action = || -> Result<CargoAction> {
                    let value = reader.read_u8()?;
                    let action_byte = reader.read_u8()?;
                    Ok(CargoAction { value, action: TransportAction::from_nibble(action_byte >> 4)? })
                };
                WaypointExtension::Transport(TransportExtension {
                    ironium: action()?, boranium: action()?, germanium: action()?, colonists: action()?,
                })
            }
            7 => WaypointExtension::Patrol(PatrolRange::from_index(reader.read_u8()?)),
            _ => WaypointExtension::None,
        };

        Ok(Self { fleet_num, waypoint_index, x, y, target_id, warp, task, target_type, extension })
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.fleet_num > 0x01FF {
            return Err(CoreError::EncodingRejection { field: "fleet_num".to_owned(), value: u64::from(self.fleet_num), max: 0x01FF });
        }

        let mut out = Vec::new();
        out.write_u16(self.fleet_num)?;
        out.write_u16(self.waypoint_index)?;
        out.write_u16(self.x)?;
        out.write_u16(self.y)?;
        out.write_u16(self.target_id)?;
        out.write_u8((self.warp << 4) | (self.task & 0x0F))?;
        out.write_u8(self.target_type & 0x0F)?;

        match self.extension {
            WaypointExtension::None => {}
            WaypointExtension::Transport(t) => {
                for cargo in [t.ironium, t.boranium, t.germanium, t.colonists] {
                    out.write_u8(cargo.value)?;
                    out.write_u8(cargo.action.to_nibble() << 4)?;
                }
            }
            WaypointExtension::Patrol(range) => {
                out.write_u8(range.to_index())?;
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_s5_transport_cargo_decodes_in_fixed_order() {
        let body = [
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // fleet_num, waypoint_index, x, y, target_id
            1 << 4, 0, // warp=1, task=1 (transport); target_type=0
            0x12, 0x30, 0x00, 0x10, 0x32, 0x50, 0x00, 0x00,
        ];
        let waypoint = WaypointBlock::decode(&body).unwrap();
        match waypoint.extension {
            WaypointExtension::Transport(t) => {
                assert_eq!(t.ironium, CargoAction { value: 0x12, action: TransportAction::LoadExact });
                assert_eq!(t.boranium, CargoAction { value: 0x00, action: TransportAction::LoadAll });
                assert_eq!(t.germanium, CargoAction { value: 0x32, action: TransportAction::FillToPercent });
                assert_eq!(t.colonists, CargoAction { value: 0x00, action: TransportAction::None });
            }
            _ => panic!("expected a transport extension"),
        }
    }

    #[test]
    fn transport_roundtrip() {
        let waypoint = WaypointBlock {
            fleet_num: 12, waypoint_index: 2, x: 100, y: 200, target_id: 50, warp: 6, task: 1, target_type: 2,
            extension: WaypointExtension::Transport(TransportExtension {
                ironium: CargoAction { value: 18, action: TransportAction::LoadExact },
                boranium: CargoAction { value: 0, action: TransportAction::LoadAll },
                germanium: CargoAction { value: 50, action: TransportAction::FillToPercent },
                colonists: CargoAction { value: 0, action: TransportAction::None },
            }),
        };
        let encoded = waypoint.encode().unwrap();
        assert_eq!(WaypointBlock::decode(&encoded).unwrap(), waypoint);
    }

    #[test]
    fn patrol_range_roundtrips_for_fixed_bands_and_any_enemy() {
        for index in 0..=11u8 {
            let waypoint = WaypointBlock {
                fleet_num: 1, waypoint_index: 0, x: 0, y: 0, target_id: 0, warp: 5, task: 7, target_type: 0,
                extension: WaypointExtension::Patrol(PatrolRange::from_index(index)),
            };
            let encoded = waypoint.encode().unwrap();
            let decoded = WaypointBlock::decode(&encoded).unwrap();
            if index >= 11 {
                assert_eq!(decoded.extension, WaypointExtension::Patrol(PatrolRange::AnyEnemy));
            } else {
                assert_eq!(decoded.extension, WaypointExtension::Patrol(PatrolRange::LightYears((u16::from(index) + 1) * 50)));
            }
        }
    }

    #[test]
    fn warp_11_is_the_stargate_sentinel() {
        let waypoint = WaypointBlock {
            fleet_num: 1, waypoint_index: 0, x: 0, y: 0, target_id: 0, warp: STARGATE_WARP, task: 0, target_type: 0,
            extension: WaypointExtension::None,
        };
        assert!(waypoint.uses_stargate());
    }
}
