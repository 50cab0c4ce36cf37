//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! Logging module for the CLI tool.

use simplelog::{ColorChoice, Config as SimpleLogConfig, LevelFilter, TermLogger, TerminalMode};

use crate::error::Result;

/// Initializes the logger. Verbosity 0 logs warnings and errors only; each `-v` raises it by
/// one level, capping at `Trace`.
pub fn initialize_logs(verbosity_level: u8) -> Result<()> {
    let level = match verbosity_level {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    TermLogger::init(level, SimpleLogConfig::default(), TerminalMode::Mixed, ColorChoice::Auto)?;
    Ok(())
}
