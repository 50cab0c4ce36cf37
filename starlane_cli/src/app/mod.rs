//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! App module for the CLI tool: the clap command tree. Every command that touches a save file
//! goes through one of these four subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "starlane", about = "CLI driver over starlane_core's save-file codec.", version)]
pub struct Cli {
    /// Sets the level of verbosity. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding rule-book data (component names, tech tables). Optional; commands that
    /// need it degrade to printing raw ids when it's absent.
    #[arg(long, value_name = "DIR")]
    pub rules_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Loads a universe/host file and prints a structured summary of its planets.
    Map {
        /// Path of the file to summarize.
        file: PathBuf,

        /// Treat the file as shareware-seeded when deriving the cipher key.
        #[arg(long)]
        shareware: bool,
    },

    /// Toggles a player's human/AI/inactive status.
    PlayerEdit {
        /// Path of the file containing the player block.
        file: PathBuf,

        /// Index of the player to edit.
        #[arg(long)]
        player: u8,

        /// New status: human, ai, or inactive.
        #[arg(long, value_enum)]
        status: PlayerStatusArg,

        /// Where to write the edited file. Defaults to overwriting the input.
        #[arg(long)]
        output: Option<PathBuf>,

        #[arg(long)]
        shareware: bool,
    },

    /// Pretty-prints the blocks of a turn-order (X) file.
    TurnOrder {
        file: PathBuf,

        #[arg(long)]
        shareware: bool,
    },

    /// Recomputes a race file's integrity hash, optionally stripping its password.
    RaceRepair {
        file: PathBuf,

        /// Where to write the repaired file. Defaults to overwriting the input.
        #[arg(long)]
        output: Option<PathBuf>,

        #[arg(long)]
        strip_password: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum PlayerStatusArg {
    Human,
    Ai,
    Inactive,
}
