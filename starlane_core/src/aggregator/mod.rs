//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! `GameStore`: merges multiple files (universe, per-player turns, history) of the same game
//! into one entity-keyed view, resolving conflicts between overlapping records.

pub mod entity;

use std::collections::HashMap;

use getset::Getters;

use crate::error::{CoreError, Result};
use crate::files::block::Block;
use crate::files::document::{self, DecodedFile};
use crate::files::fleet::FleetKind;

use entity::{EntityKey, EntityKind, EntityRecord, Quality, NO_OWNER};

/// A single file ingested into the store, in the order it was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub header: crate::files::header::FileHeader,
}

#[derive(Debug, Default, Getters)]
pub struct GameStore {
    /// The game id every ingested source must agree on, set by the first file added.
    #[getset(get_copy = "pub")]
    game_id: Option<u32>,
    sources: Vec<Source>,
    entities: HashMap<EntityKey, EntityRecord>,
    /// Names from the most recently ingested `PlanetsBlock`'s trailing coordinate table.
    #[getset(get = "pub")]
    planet_names: Vec<String>,
    fleet_names: HashMap<EntityKey, String>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity(&self, key: EntityKey) -> Option<&EntityRecord> {
        self.entities.get(&key)
    }

    pub fn fleet_name(&self, key: EntityKey) -> Option<&str> {
        self.fleet_names.get(&key).map(String::as_str)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Decodes `bytes` as a file and folds it into the store, per the add-file protocol:
    /// validate game id, record the source, then ingest in two passes so positional
    /// associations (fleet names, production-queue/planet binding) see blocks in file order.
    pub fn add_file(&mut self, bytes: &[u8], shareware: bool) -> Result<()> {
        let file = document::decode_file(bytes, shareware)?;

        match self.game_id {
            None => self.game_id = Some(file.header.game_id),
            Some(expected) if expected != file.header.game_id => {
                return Err(CoreError::GameIdMismatch { expected, found: file.header.game_id });
            }
            Some(_) => {}
        }

        let source_index = self.sources.len();
        let turn = file.header.turn;
        self.sources.push(Source { header: file.header });

        self.ingest_first_pass(&file, source_index, turn);
        self.ingest_second_pass(&file, source_index, turn);

        Ok(())
    }

    fn insert(&mut self, key: EntityKey, record: EntityRecord) {
        match self.entities.get(&key) {
            Some(existing) if !existing.should_replace(&record) => {}
            _ => {
                self.entities.insert(key, record);
            }
        }
    }

    fn ingest_first_pass(&mut self, file: &DecodedFile, source_index: usize, turn: u16) {
        for block in &file.blocks {
            match block {
                Block::Planets(planets) => {
                    self.planet_names = planets.names.clone();
                }
                Block::Design(design) => {
                    let key = EntityKey { kind: EntityKind::Design, owner: i32::from(design.player), number: i32::from(design.slot) };
                    self.insert(key, EntityRecord::new(Quality::Full, turn, source_index, block.clone()));
                }
                Block::Player(player) => {
                    let key = EntityKey { kind: EntityKind::Player, owner: i32::from(player.player_index), number: i32::from(player.player_index) };
                    self.insert(key, EntityRecord::new(Quality::Full, turn, source_index, block.clone()));
                }
                Block::BattlePlan(plan) => {
                    let key = EntityKey { kind: EntityKind::BattlePlan, owner: i32::from(plan.player), number: i32::from(plan.plan_id) };
                    self.insert(key, EntityRecord::new(Quality::Full, turn, source_index, block.clone()));
                }
                Block::Message(_) => {
                    let number = self.entities.keys().filter(|k| k.kind == EntityKind::Message).count() as i32;
                    let key = EntityKey { kind: EntityKind::Message, owner: NO_OWNER, number };
                    self.insert(key, EntityRecord::new(Quality::Full, turn, source_index, block.clone()));
                }
                Block::Events(events) => {
                    let key = EntityKey { kind: EntityKind::Event, owner: NO_OWNER, number: i32::from(events.turn) };
                    self.insert(key, EntityRecord::new(Quality::Full, turn, source_index, block.clone()));
                }
                _ => {}
            }
        }
    }

    fn ingest_second_pass(&mut self, file: &DecodedFile, source_index: usize, turn: u16) {
        let mut pending_fleet_key: Option<EntityKey> = None;
        let mut pending_planet_id: Option<u16> = None;

        for block in &file.blocks {
            match block {
                Block::Fleet { fleet, .. } => {
                    let key = EntityKey { kind: EntityKind::Fleet, owner: i32::from(fleet.owner), number: i32::from(fleet.fleet_num) };
                    let quality = if matches!(fleet.kind, FleetKind::Partial) { Quality::Partial } else { Quality::Full };
                    self.insert(key, EntityRecord::new(quality, turn, source_index, block.clone()));
                    pending_fleet_key = Some(key);
                }
                Block::FleetName(name) => {
                    if let Some(key) = pending_fleet_key.take() {
                        self.fleet_names.insert(key, name.name.clone());
                    }
                }
                Block::PlanetFull(planet) => {
                    let key = EntityKey { kind: EntityKind::Planet, owner: i32::from(planet.owner), number: i32::from(planet.planet_id) };
                    self.insert(key, EntityRecord::new(Quality::Full, turn, source_index, block.clone()));
                    pending_planet_id = Some(planet.planet_id);
                    pending_fleet_key = None;
                }
                Block::PlanetPartial(planet) => {
                    let key = EntityKey { kind: EntityKind::Planet, owner: NO_OWNER, number: i32::from(planet.planet_id) };
                    self.insert(key, EntityRecord::new(Quality::Partial, turn, source_index, block.clone()));
                    pending_planet_id = Some(planet.planet_id);
                    pending_fleet_key = None;
                }
                Block::Object(object) => {
                    if let Some(key) = object_entity_key(object) {
                        self.insert(key, EntityRecord::new(Quality::Full, turn, source_index, block.clone()));
                    }
                    pending_fleet_key = None;
                }
                Block::Production { queue, .. } => {
                    let planet_id = pending_planet_id.unwrap_or(queue.planet_id);
                    let key = EntityKey { kind: EntityKind::ProductionQueue, owner: NO_OWNER, number: i32::from(planet_id) };
                    self.insert(key, EntityRecord::new(Quality::Full, turn, source_index, block.clone()));
                    pending_fleet_key = None;
                }
                _ => {
                    pending_fleet_key = None;
                }
            }
        }
    }
}

fn object_entity_key(object: &crate::files::object::ObjectBlock) -> Option<EntityKey> {
    use crate::files::object::ObjectBlock;
    let prefix = match object {
        ObjectBlock::Count(_) => return None,
        ObjectBlock::Minefield(m) => &m.prefix,
        ObjectBlock::Packet(p) => &p.prefix,
        ObjectBlock::Wormhole(w) => &w.prefix,
        ObjectBlock::MysteryTrader(t) => &t.prefix,
    };
    Some(EntityKey { kind: EntityKind::MapObject, owner: i32::from(prefix.owner), number: i32::from(prefix.number) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::block::{TYPE_FLEET_A, TYPE_PLAYER};
    use crate::files::diplomacy::Relation;
    use crate::files::fleet::{FleetBlock, FleetFlags, FleetKind};
    use crate::files::fleetname::FleetNameBlock;
    use crate::files::header::{FileHeader, FileKind, HeaderFlagBits, HeaderFlags, Version};
    use crate::files::player::{PlayerBlock, PlayerStatus};

    fn header(turn: u16) -> FileHeader {
        FileHeader {
            is_race_file: false,
            game_id: 99,
            version: Version { major: 1, minor: 0, incr: 0 },
            turn,
            player_index: 0,
            salt: 0x10,
            kind: FileKind::TurnOrder,
            flags: HeaderFlags { bits: HeaderFlagBits::IN_USE, wgen: 0 },
        }
    }

    fn encode(file: &DecodedFile) -> Vec<u8> {
        document::encode_file(file, false).unwrap()
    }

    fn sample_fleet_block(num: u16, owner: u8) -> Block {
        Block::Fleet { wire_type: TYPE_FLEET_A, fleet: sample_fleet(num, owner) }
    }

    fn sample_fleet(num: u16, owner: u8) -> FleetBlock {
        FleetBlock {
            fleet_num: num,
            owner,
            unused_word0: 0,
            kind: FleetKind::Full,
            flags: FleetFlags::INCLUDE,
            position_object_id: 0,
            x: 0,
            y: 0,
            ship_counts: vec![],
            cargo: Some(Default::default()),
            damage: vec![],
            battle_plan: Some(0),
            waypoint_count: Some(0),
            movement: None,
        }
    }

    #[test]
    fn second_file_with_mismatched_game_id_is_rejected() {
        let mut store = GameStore::new();
        let file_a = DecodedFile { header: header(1), blocks: vec![Block::Footer] };
        store.add_file(&encode(&file_a), false).unwrap();

        let mut other_header = header(1);
        other_header.game_id = 1234;
        let file_b = DecodedFile { header: other_header, blocks: vec![Block::Footer] };
        assert!(matches!(store.add_file(&encode(&file_b), false), Err(CoreError::GameIdMismatch { .. })));
    }

    #[test]
    fn fleet_name_attaches_only_to_the_immediately_preceding_fleet() {
        let mut store = GameStore::new();
        let file = DecodedFile {
            header: header(1),
            blocks: vec![
                sample_fleet_block(1, 0),
                Block::FleetName(FleetNameBlock { name: "Avenger".to_owned() }),
                sample_fleet_block(2, 0),
                Block::Footer,
            ],
        };
        store.add_file(&encode(&file), false).unwrap();

        let named = EntityKey { kind: EntityKind::Fleet, owner: 0, number: 1 };
        let unnamed = EntityKey { kind: EntityKind::Fleet, owner: 0, number: 2 };
        assert_eq!(store.fleet_name(named), Some("Avenger"));
        assert_eq!(store.fleet_name(unnamed), None);
    }

    #[test]
    fn intervening_block_discards_the_pending_fleet_name() {
        let mut store = GameStore::new();
        let file = DecodedFile {
            header: header(1),
            blocks: vec![
                sample_fleet_block(1, 0),
                Block::Diplomacy(crate::files::diplomacy::DiplomacyBlock { relation: Relation::Friend, target_player: 1 }),
                Block::FleetName(FleetNameBlock { name: "Orphan".to_owned() }),
                Block::Footer,
            ],
        };
        store.add_file(&encode(&file), false).unwrap();

        let key = EntityKey { kind: EntityKind::Fleet, owner: 0, number: 1 };
        assert_eq!(store.fleet_name(key), None);
    }

    #[test]
    fn higher_quality_record_replaces_a_lower_quality_one_from_an_earlier_source() {
        let mut store = GameStore::new();

        let mut partial_fleet = sample_fleet(5, 1);
        partial_fleet.kind = FleetKind::Partial;
        partial_fleet.cargo = None;
        partial_fleet.movement = Some(crate::files::fleet::FleetMovement {
            delta_x: 0, delta_y: 0,
            warp_order: crate::files::fleet::WarpOrder { warp: 0, flags: crate::files::fleet::WarpOrderFlags::empty() },
            mass: 0,
        });
        let file_a = DecodedFile { header: header(1), blocks: vec![Block::Fleet { wire_type: TYPE_FLEET_A, fleet: partial_fleet }, Block::Footer] };
        store.add_file(&encode(&file_a), false).unwrap();

        let file_b = DecodedFile { header: header(1), blocks: vec![sample_fleet_block(5, 1), Block::Footer] };
        store.add_file(&encode(&file_b), false).unwrap();

        let key = EntityKey { kind: EntityKind::Fleet, owner: 1, number: 5 };
        assert_eq!(store.entity(key).unwrap().quality, Quality::Full);
    }

    #[test]
    fn player_block_is_ingested_in_the_first_pass() {
        let mut store = GameStore::new();
        let player = PlayerBlock { player_index: 2, status: PlayerStatus::Human, password: 0, relations: [Relation::Neutral; 16] };
        let file = DecodedFile { header: header(1), blocks: vec![Block::Player(player.clone()), Block::Footer] };
        store.add_file(&encode(&file), false).unwrap();

        let key = EntityKey { kind: EntityKind::Player, owner: 2, number: 2 };
        match &store.entity(key).unwrap().data {
            Block::Player(stored) => assert_eq!(*stored, player),
            _ => panic!("expected a player entity"),
        }
        let _ = TYPE_PLAYER;
    }
}
