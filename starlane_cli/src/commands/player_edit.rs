//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! This module contains the `player-edit` command's functions.

use std::path::Path;

use log::info;

use starlane_core::files::block::Block;
use starlane_core::files::document;
use starlane_core::files::player::PlayerStatus;

use crate::app::PlayerStatusArg;
use crate::config::Config;
use crate::error::{CliError, Result};

pub fn run(config: &Config, file: &Path, player: u8, status: PlayerStatusArg, output: Option<&Path>, shareware: bool) -> Result<()> {
    let bytes = std::fs::read(file)?;
    let mut decoded = document::decode_file(&bytes, shareware)?;

    let new_status = match status {
        PlayerStatusArg::Human => PlayerStatus::Human,
        PlayerStatusArg::Ai => PlayerStatus::Ai,
        PlayerStatusArg::Inactive => PlayerStatus::Inactive,
    };

    let mut found = false;
    for block in &mut decoded.blocks {
        if let Block::Player(player_block) = block {
            if player_block.player_index == player {
                player_block.status = new_status;
                found = true;
            }
        }
    }

    if !found {
        return Err(CliError::Usage(format!("no PlayerBlock for player index {player} in {}", file.display())));
    }

    let out_path = output.unwrap_or(file);
    let out_bytes = document::encode_file(&decoded, shareware)?;
    std::fs::write(out_path, out_bytes)?;

    if config.verbosity_level > 0 {
        info!("Player {player} status updated, written to {}", out_path.display());
    }
    Ok(())
}
