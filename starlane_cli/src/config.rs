//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! Struct `Config`: holds the configuration used during the execution of the program.

use std::path::PathBuf;

pub struct Config {
    pub verbosity_level: u8,
    pub rules_dir: Option<PathBuf>,
}

impl Config {
    pub fn new(verbosity_level: u8, rules_dir: Option<PathBuf>) -> Self {
        Self { verbosity_level, rules_dir }
    }
}
