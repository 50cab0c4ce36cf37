//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! This module contains the `map` command's functions.
//!
//! PNG rendering is out of scope: this prints the same planet table a real renderer would
//! consume, and stops there.

use std::path::Path;

use log::info;

use starlane_core::files::block::Block;
use starlane_core::files::document;

use crate::config::Config;
use crate::error::Result;

pub fn run(config: &Config, file: &Path, shareware: bool) -> Result<()> {
    let bytes = std::fs::read(file)?;
    let decoded = document::decode_file(&bytes, shareware)?;

    if config.verbosity_level > 0 {
        info!("Loaded {} ({} blocks), turn {}", file.display(), decoded.blocks.len(), decoded.header.turn);
    }

    let mut planet_names = Vec::new();
    let mut planet_count = 0usize;

    for block in &decoded.blocks {
        match block {
            Block::Planets(planets) => planet_names = planets.names.clone(),
            Block::PlanetFull(planet) => {
                planet_count += 1;
                let name = planet_names.get(planet.planet_id as usize).map(String::as_str).unwrap_or("<unnamed>");
                println!("planet {:>4} {:<20} owner={:>3} pop={}", planet.planet_id, name, planet.owner, planet.population);
            }
            Block::PlanetPartial(planet) => {
                planet_count += 1;
                let name = planet_names.get(planet.planet_id as usize).map(String::as_str).unwrap_or("<unnamed>");
                println!("planet {:>4} {:<20} owner=unknown (scanned only)", planet.planet_id, name);
            }
            _ => {}
        }
    }

    println!("{planet_count} planet record(s) in {}", file.display());
    Ok(())
}
