//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! Command dispatch: one module per subcommand, matching the four drivers `starlane`'s `app`
//! module wires up.

mod map;
mod player_edit;
mod race_repair;
mod turn_order;

use crate::app::Command;
use crate::config::Config;
use crate::error::Result;

pub fn dispatch(config: &Config, command: Command) -> Result<()> {
    match command {
        Command::Map { file, shareware } => map::run(config, &file, shareware),
        Command::PlayerEdit { file, player, status, output, shareware } => {
            player_edit::run(config, &file, player, status, output.as_deref(), shareware)
        }
        Command::TurnOrder { file, shareware } => turn_order::run(config, &file, shareware),
        Command::RaceRepair { file, output, strip_password } => race_repair::run(config, &file, output.as_deref(), strip_password),
    }
}
