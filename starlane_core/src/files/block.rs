//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! The tagged sum of every known block kind, plus an `Opaque` catch-all for anything this crate
//! doesn't recognise. Decoding never fails on an unknown type: the raw decrypted bytes are kept
//! and passed through untouched on re-encode (see [`crate::error::CoreError`]'s
//! `UnknownBlockType` kind, folded here into [`Block::Opaque`] rather than an error).

use crate::error::Result;
use crate::files::battleplan::BattlePlanBlock;
use crate::files::design::DesignBlock;
use crate::files::diplomacy::DiplomacyBlock;
use crate::files::events::EventsBlock;
use crate::files::fleet::FleetBlock;
use crate::files::fleetname::FleetNameBlock;
use crate::files::header::{decode_hash_body, encode_hash_body, footer_body};
use crate::files::message::MessageBlock;
use crate::files::object::ObjectBlock;
use crate::files::planet::{PartialPlanetBlock, PlanetBlock};
use crate::files::player::PlayerBlock;
use crate::files::production::ProductionQueueBlock;
use crate::files::waypoint::WaypointBlock;

pub const TYPE_FOOTER: u8 = 0;
pub const TYPE_WAYPOINT_A: u8 = 5;
pub const TYPE_PLANETS: u8 = 7;
pub const TYPE_HASH: u8 = 9;
pub const TYPE_EVENTS: u8 = 12;
pub const TYPE_PLANET_FULL: u8 = 13;
pub const TYPE_PLANET_PARTIAL: u8 = 14;
pub const TYPE_FLEET_A: u8 = 16;
pub const TYPE_FLEET_B: u8 = 17;
pub const TYPE_WAYPOINT_B: u8 = 19;
pub const TYPE_WAYPOINT_C: u8 = 20;
pub const TYPE_FLEET_NAME: u8 = 21;
pub const TYPE_DESIGN: u8 = 26;
pub const TYPE_PRODUCTION_A: u8 = 28;
pub const TYPE_PRODUCTION_B: u8 = 29;
pub const TYPE_BATTLE_PLAN: u8 = 30;
pub const TYPE_DIPLOMACY: u8 = 38;
pub const TYPE_MESSAGE: u8 = 40;
pub const TYPE_OBJECT: u8 = 43;
pub const TYPE_PLAYER: u8 = 6;

/// A decoded block body, dispatched by its framer-reported type. [`Block::Planets`] is never
/// produced by [`decode`] — `PlanetsBlock` needs the file's out-of-band trailing bytes, so
/// [`crate::files::document`] decodes type 7 itself and wraps the result here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Footer,
    Hash(u32),
    Player(PlayerBlock),
    Events(EventsBlock),
    PlanetFull(PlanetBlock),
    PlanetPartial(PartialPlanetBlock),
    Planets(crate::files::planets_table::PlanetsBlock),
    /// `wire_type` is the framer-reported type this instance was decoded from (16 or 17) and is
    /// re-emitted verbatim on encode, since both ids share this same body layout.
    Fleet { wire_type: u8, fleet: FleetBlock },
    /// `wire_type` is one of 5, 19 or 20; re-emitted verbatim on encode.
    Waypoint { wire_type: u8, waypoint: WaypointBlock },
    FleetName(FleetNameBlock),
    Design(DesignBlock),
    /// `wire_type` is 28 or 29; re-emitted verbatim on encode.
    Production { wire_type: u8, queue: ProductionQueueBlock },
    BattlePlan(BattlePlanBlock),
    Diplomacy(DiplomacyBlock),
    Message(MessageBlock),
    Object(ObjectBlock),
    /// An unrecognised block type, preserved byte-exact for round-trip.
    Opaque { kind: u8, body: Vec<u8> },
}

/// Decodes a single block body given its framer-reported type. Returns [`Block::Opaque`]
/// instead of an error for any type this crate doesn't model — callers that need to special-case
/// [`TYPE_PLANETS`] (for its trailing bytes) should do so before calling this function.
pub fn decode(kind: u8, body: &[u8]) -> Result<Block> {
    Ok(match kind {
        TYPE_FOOTER => Block::Footer,
        TYPE_HASH => Block::Hash(decode_hash_body(body)?),
        TYPE_PLAYER => Block::Player(PlayerBlock::decode(body)?),
        TYPE_EVENTS => Block::Events(EventsBlock::decode(body)?),
        TYPE_PLANET_FULL => Block::PlanetFull(PlanetBlock::decode(body)?),
        TYPE_PLANET_PARTIAL => Block::PlanetPartial(PartialPlanetBlock::decode(body)?),
        TYPE_FLEET_A | TYPE_FLEET_B => Block::Fleet { wire_type: kind, fleet: FleetBlock::decode(body)? },
        TYPE_WAYPOINT_A | TYPE_WAYPOINT_B | TYPE_WAYPOINT_C => Block::Waypoint { wire_type: kind, waypoint: WaypointBlock::decode(body)? },
        TYPE_FLEET_NAME => Block::FleetName(FleetNameBlock::decode(body)?),
        TYPE_DESIGN => Block::Design(DesignBlock::decode(body)?),
        TYPE_PRODUCTION_A | TYPE_PRODUCTION_B => Block::Production { wire_type: kind, queue: ProductionQueueBlock::decode(body)? },
        TYPE_BATTLE_PLAN => Block::BattlePlan(BattlePlanBlock::decode(body)?),
        TYPE_DIPLOMACY => Block::Diplomacy(DiplomacyBlock::decode(body)?),
        TYPE_MESSAGE => Block::Message(MessageBlock::decode(body)?),
        TYPE_OBJECT => Block::Object(ObjectBlock::decode(body)?),
        other => Block::Opaque { kind: other, body: body.to_vec() },
    })
}

/// Encodes a block back into its `(type, body)` pair, inverse of [`decode`]. [`Block::Planets`]
/// yields only its in-body portion; callers are responsible for appending the trailing
/// coordinate table (see [`crate::files::planets_table::PlanetsBlock::encode`]).
pub fn encode(block: &Block) -> Result<(u8, Vec<u8>)> {
    Ok(match block {
        Block::Footer => (TYPE_FOOTER, footer_body()),
        Block::Hash(hash) => (TYPE_HASH, encode_hash_body(*hash)),
        Block::Player(player) => (TYPE_PLAYER, player.encode()?),
        Block::Events(events) => (TYPE_EVENTS, events.encode()?),
        Block::PlanetFull(planet) => (TYPE_PLANET_FULL, planet.encode()?),
        Block::PlanetPartial(planet) => (TYPE_PLANET_PARTIAL, planet.encode()?),
        Block::Planets(planets) => (TYPE_PLANETS, planets.encode()?.0),
        Block::Fleet { wire_type, fleet } => (*wire_type, fleet.encode()?),
        Block::Waypoint { wire_type, waypoint } => (*wire_type, waypoint.encode()?),
        Block::FleetName(name) => (TYPE_FLEET_NAME, name.encode()?),
        Block::Design(design) => (TYPE_DESIGN, design.encode()?),
        Block::Production { wire_type, queue } => (*wire_type, queue.encode()?),
        Block::BattlePlan(plan) => (TYPE_BATTLE_PLAN, plan.encode()?),
        Block::Diplomacy(diplomacy) => (TYPE_DIPLOMACY, diplomacy.encode()?),
        Block::Message(message) => (TYPE_MESSAGE, message.encode()?),
        Block::Object(object) => (TYPE_OBJECT, object.encode()?),
        Block::Opaque { kind, body } => (*kind, body.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_round_trips_as_opaque() {
        let block = decode(62, &[1, 2, 3]).unwrap();
        assert_eq!(block, Block::Opaque { kind: 62, body: vec![1, 2, 3] });
        assert_eq!(encode(&block).unwrap(), (62, vec![1, 2, 3]));
    }

    #[test]
    fn footer_decodes_from_an_empty_body() {
        assert_eq!(decode(TYPE_FOOTER, &[]).unwrap(), Block::Footer);
    }

    #[test]
    fn hash_roundtrips_through_dispatch() {
        let block = decode(TYPE_HASH, &0x1122_3344u32.to_le_bytes()).unwrap();
        assert_eq!(block, Block::Hash(0x1122_3344));
        assert_eq!(encode(&block).unwrap(), (TYPE_HASH, 0x1122_3344u32.to_le_bytes().to_vec()));
    }

    #[test]
    fn waypoint_decode_then_encode_preserves_its_non_default_wire_type() {
        let body = vec![0u8; 12];
        let block = decode(TYPE_WAYPOINT_C, &body).unwrap();
        assert!(matches!(block, Block::Waypoint { wire_type: TYPE_WAYPOINT_C, .. }));
        let (kind, _) = encode(&block).unwrap();
        assert_eq!(kind, TYPE_WAYPOINT_C);
    }
}
