//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! This module contains the `turn-order` command's functions: a pretty-printer over an X-file's
//! blocks, useful for spot-checking a decode without writing anything back out.

use std::path::Path;

use starlane_core::files::block::Block;
use starlane_core::files::document;

use crate::config::Config;
use crate::error::Result;

pub fn run(config: &Config, file: &Path, shareware: bool) -> Result<()> {
    let bytes = std::fs::read(file)?;
    let decoded = document::decode_file(&bytes, shareware)?;

    println!("header: game_id={} turn={} player_index={} kind={:?}", decoded.header.game_id, decoded.header.turn, decoded.header.player_index, decoded.header.kind);
    if config.verbosity_level > 0 {
        println!("version: {}.{}.{}", decoded.header.version.major, decoded.header.version.minor, decoded.header.version.incr);
    }

    for (index, block) in decoded.blocks.iter().enumerate() {
        println!("[{index:>4}] {}", describe(block));
    }

    Ok(())
}

fn describe(block: &Block) -> String {
    match block {
        Block::Footer => "Footer".to_owned(),
        Block::Hash(hash) => format!("Hash({hash:#010x})"),
        Block::Player(p) => format!("Player(index={}, status={:?})", p.player_index, p.status),
        Block::Events(e) => format!("Events(turn={}, count={})", e.turn, e.events.len()),
        Block::PlanetFull(p) => format!("Planet(id={}, owner={})", p.planet_id, p.owner),
        Block::PlanetPartial(p) => format!("PartialPlanet(id={})", p.planet_id),
        Block::Planets(p) => format!("Planets(count={})", p.names.len()),
        Block::Fleet { wire_type, fleet } => format!("Fleet(type={wire_type}, num={}, owner={}, kind={:?})", fleet.fleet_num, fleet.owner, fleet.kind),
        Block::Waypoint { wire_type, waypoint } => format!("Waypoint(type={wire_type}, fleet={}, index={})", waypoint.fleet_num, waypoint.waypoint_index),
        Block::FleetName(n) => format!("FleetName({:?})", n.name),
        Block::Design(d) => format!("Design(player={}, slot={}, name={:?})", d.player, d.slot, d.name),
        Block::Production { wire_type, queue } => format!("Production(type={wire_type}, planet={}, items={})", queue.planet_id, queue.items.len()),
        Block::BattlePlan(b) => format!("BattlePlan(player={}, id={}, name={:?})", b.player, b.plan_id, b.name),
        Block::Diplomacy(d) => format!("Diplomacy(relation={:?}, target={})", d.relation, d.target_player),
        Block::Message(m) => format!("Message(target={}, text={:?})", m.target_player, m.text),
        Block::Object(_) => "Object(..)".to_owned(),
        Block::Opaque { kind, body } => format!("Opaque(type={kind}, len={})", body.len()),
    }
}
