//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

// This is the CLI version of Starlane.

use std::process::exit;

use clap::Parser;
use log::error;

mod app;
mod commands;
mod config;
mod error;
mod logger;

use app::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();

    if let Err(error) = logger::initialize_logs(cli.verbose) {
        eprintln!("failed to initialize logging: {error}");
        exit(1);
    }

    let config = Config::new(cli.verbose, cli.rules_dir);

    match commands::dispatch(&config, cli.command) {
        Ok(()) => exit(0),
        Err(error) => {
            error!("{error}");
            exit(1);
        }
    }
}
