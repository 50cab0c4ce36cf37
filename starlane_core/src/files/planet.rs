//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! `PlanetBlock` (type 13, full) and its scanned counterpart (type 14, partial).
//!
//! Environment values (gravity, temperature, radiation) are stored in an internal 0..100
//! integer scale; converting that to the game's displayed units (a 101-entry gravity curve,
//! linear -200..+200 °C, linear 0..100 mR) is a presentation concern outside this codec.

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::{CoreError, Result};

const UNOWNED: i8 = -1;
const NO_SCANNER: u16 = 0xFFFF;

const FLAG_STARBASE: u8 = 0x01;
const FLAG_MASS_DRIVER: u8 = 0x02;
const FLAG_PACKET_DEST: u8 = 0x04;
const FLAG_SURFACE_MINERALS: u8 = 0x08;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    pub gravity: u8,
    pub temperature: u8,
    pub radiation: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MineralConcentration {
    pub ironium: u8,
    pub boranium: u8,
    pub germanium: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceMinerals {
    pub ironium: u16,
    pub boranium: u16,
    pub germanium: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Installations {
    pub mines: u16,
    pub factories: u16,
    pub defenses: u16,
}

/// The fully-owned planet record (type 13).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetBlock {
    pub planet_id: u16,
    pub owner: i8,
    pub environment: Environment,
    pub concentration: MineralConcentration,
    pub surface: SurfaceMinerals,
    pub population: u32,
    pub installations: Installations,
    pub scanner_id: Option<u16>,
    pub starbase_design: Option<u8>,
    pub mass_driver_destination: Option<u16>,
    pub packet_destination: Option<u16>,
}

impl PlanetBlock {
    pub fn decode(body: &[u8]) -> Result<Self> {
        let mut reader = std::io::Cursor::new(body);

        let planet_id = reader.read_u16()? & 0x07FF;
        let owner = reader.read_i8()?;

        let environment = Environment {
            gravity: reader.read_u8()?,
            temperature: reader.read_u8()?,
            radiation: reader.read_u8()?,
        };
        let concentration = MineralConcentration {
            ironium: reader.read_u8()?,
            boranium: reader.read_u8()?,
            germanium: reader.read_u8()?,
        };
        let surface = SurfaceMinerals {
            ironium: reader.read_u16()?,
            boranium: reader.read_u16()?,
            germanium: reader.read_u16()?,
        };
        let population = reader.read_u32()?;
        let installations = Installations {
            mines: reader.read_u16()?,
            factories: reader.read_u16()?,
            defenses: reader.read_u16()?,
        };

        let scanner_raw = reader.read_u16()?;
        let scanner_id = if scanner_raw == NO_SCANNER { None } else { Some(scanner_raw) };

        let flags = reader.read_u8()?;
        let starbase_design = if flags & FLAG_STARBASE != 0 { Some(reader.read_u8()?) } else { None };
        let mass_driver_destination = if flags & FLAG_MASS_DRIVER != 0 { Some(reader.read_u16()?) } else { None };
        let packet_destination = if flags & FLAG_PACKET_DEST != 0 { Some(reader.read_u16()?) } else { None };

        Ok(Self {
            planet_id, owner, environment, concentration, surface, population, installations,
            scanner_id, starbase_design, mass_driver_destination, packet_destination,
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.planet_id > 0x07FF {
            return Err(CoreError::EncodingRejection { field: "planet_id".to_owned(), value: u64::from(self.planet_id), max: 0x07FF });
        }

        let mut out = Vec::new();
        out.write_u16(self.planet_id)?;
        out.write_i8(self.owner)?;
        out.write_u8(self.environment.gravity)?;
        out.write_u8(self.environment.temperature)?;
        out.write_u8(self.environment.radiation)?;
        out.write_u8(self.concentration.ironium)?;
        out.write_u8(self.concentration.boranium)?;
        out.write_u8(self.concentration.germanium)?;
        out.write_u16(self.surface.ironium)?;
        out.write_u16(self.surface.boranium)?;
        out.write_u16(self.surface.germanium)?;
        out.write_u32(self.population)?;
        out.write_u16(self.installations.mines)?;
        out.write_u16(self.installations.factories)?;
        out.write_u16(self.installations.defenses)?;
        out.write_u16(self.scanner_id.unwrap_or(NO_SCANNER))?;

        let mut flags = 0u8;
        if self.starbase_design.is_some() { flags |= FLAG_STARBASE; }
        if self.mass_driver_destination.is_some() { flags |= FLAG_MASS_DRIVER; }
        if self.packet_destination.is_some() { flags |= FLAG_PACKET_DEST; }
        out.write_u8(flags)?;

        if let Some(design) = self.starbase_design { out.write_u8(design)?; }
        if let Some(dest) = self.mass_driver_destination { out.write_u16(dest)?; }
        if let Some(dest) = self.packet_destination { out.write_u16(dest)?; }

        Ok(out)
    }
}

/// A scanned-but-unowned planet record (type 14): environment and concentrations are always
/// known, surface minerals are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialPlanetBlock {
    pub planet_id: u16,
    pub environment: Environment,
    pub concentration: MineralConcentration,
    pub surface: Option<SurfaceMinerals>,
}

impl PartialPlanetBlock {
    pub fn decode(body: &[u8]) -> Result<Self> {
        let mut reader = std::io::Cursor::new(body);

        let planet_id = reader.read_u16()? & 0x07FF;
        let environment = Environment {
            gravity: reader.read_u8()?,
            temperature: reader.read_u8()?,
            radiation: reader.read_u8()?,
        };
        let concentration = MineralConcentration {
            ironium: reader.read_u8()?,
            boranium: reader.read_u8()?,
            germanium: reader.read_u8()?,
        };

        let flags = reader.read_u8()?;
        let surface = if flags & FLAG_SURFACE_MINERALS != 0 {
            Some(SurfaceMinerals { ironium: reader.read_u16()?, boranium: reader.read_u16()?, germanium: reader.read_u16()? })
        } else {
            None
        };

        Ok(Self { planet_id, environment, concentration, surface })
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.write_u16(self.planet_id)?;
        out.write_u8(self.environment.gravity)?;
        out.write_u8(self.environment.temperature)?;
        out.write_u8(self.environment.radiation)?;
        out.write_u8(self.concentration.ironium)?;
        out.write_u8(self.concentration.boranium)?;
        out.write_u8(self.concentration.germanium)?;

        let flags = if self.surface.is_some() { FLAG_SURFACE_MINERALS } else { 0 };
        out.write_u8(flags)?;

        if let Some(surface) = self.surface {
            out.write_u16(surface.ironium)?;
            out.write_u16(surface.boranium)?;
            out.write_u16(surface.germanium)?;
        }

        Ok(out)
    }
}

/// `UNOWNED`'s value for a planet's `owner` field: no player controls this planet.
pub fn unowned() -> i8 {
    UNOWNED
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_planet() -> PlanetBlock {
        PlanetBlock {
            planet_id: 42,
            owner: 3,
            environment: Environment { gravity: 50, temperature: 60, radiation: 20 },
            concentration: MineralConcentration { ironium: 10, boranium: 20, germanium: 30 },
            surface: SurfaceMinerals { ironium: 1000, boranium: 2000, germanium: 3000 },
            population: 123_456,
            installations: Installations { mines: 10, factories: 20, defenses: 5 },
            scanner_id: Some(7),
            starbase_design: Some(2),
            mass_driver_destination: Some(99),
            packet_destination: None,
        }
    }

    #[test]
    fn full_planet_roundtrip() {
        let planet = full_planet();
        let encoded = planet.encode().unwrap();
        assert_eq!(PlanetBlock::decode(&encoded).unwrap(), planet);
    }

    #[test]
    fn unowned_planet_has_no_optional_fields() {
        let planet = PlanetBlock {
            owner: unowned(),
            scanner_id: None,
            starbase_design: None,
            mass_driver_destination: None,
            packet_destination: None,
            ..full_planet()
        };
        let encoded = planet.encode().unwrap();
        let decoded = PlanetBlock::decode(&encoded).unwrap();
        assert_eq!(decoded.owner, UNOWNED);
        assert!(decoded.starbase_design.is_none());
    }

    #[test]
    fn partial_planet_without_surface_minerals_roundtrips() {
        let planet = PartialPlanetBlock {
            planet_id: 9,
            environment: Environment { gravity: 1, temperature: 2, radiation: 3 },
            concentration: MineralConcentration { ironium: 4, boranium: 5, germanium: 6 },
            surface: None,
        };
        let encoded = planet.encode().unwrap();
        assert_eq!(PartialPlanetBlock::decode(&encoded).unwrap(), planet);
    }

    #[test]
    fn partial_planet_with_surface_minerals_roundtrips() {
        let planet = PartialPlanetBlock {
            planet_id: 9,
            environment: Environment { gravity: 1, temperature: 2, radiation: 3 },
            concentration: MineralConcentration { ironium: 4, boranium: 5, germanium: 6 },
            surface: Some(SurfaceMinerals { ironium: 11, boranium: 22, germanium: 33 }),
        };
        let encoded = planet.encode().unwrap();
        assert_eq!(PartialPlanetBlock::decode(&encoded).unwrap(), planet);
    }

    #[test]
    fn planet_id_over_11_bits_is_rejected_on_encode() {
        let mut planet = full_planet();
        planet.planet_id = 0x0800;
        assert!(planet.encode().is_err());
    }
}
