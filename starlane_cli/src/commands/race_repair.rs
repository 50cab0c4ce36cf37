//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! This module contains the `race-repair` command's functions: recomputes a race file's stored
//! integrity hash, and optionally strips its password.

use std::path::Path;

use log::info;

use starlane_core::files::block::Block;
use starlane_core::files::document::{self, DecodedFile};
use starlane_core::integrity;

use crate::config::Config;
use crate::error::{CliError, Result};

pub fn run(config: &Config, file: &Path, output: Option<&Path>, strip_password: bool) -> Result<()> {
    let bytes = std::fs::read(file)?;
    let mut decoded = document::decode_file(&bytes, false)?;

    if !decoded.header.is_race_file {
        return Err(CliError::Usage(format!("{} is not a race file", file.display())));
    }

    if strip_password {
        for block in &mut decoded.blocks {
            if let Block::Player(player) = block {
                *player = player.with_password_removed();
            }
        }
    }

    let hash_index = decoded.blocks.iter().position(|block| matches!(block, Block::Hash(_)));
    let hash_index = hash_index.ok_or_else(|| CliError::Usage(format!("{} has no FileHash block to repair", file.display())))?;

    let prefix = DecodedFile { header: decoded.header, blocks: decoded.blocks[..hash_index].to_vec() };
    let prefix_bytes = document::encode_file(&prefix, false)?;
    let computed = integrity::compute_hash(&prefix_bytes);
    decoded.blocks[hash_index] = Block::Hash(computed);

    let out_path = output.unwrap_or(file);
    let out_bytes = document::encode_file(&decoded, false)?;
    std::fs::write(out_path, out_bytes)?;

    if config.verbosity_level > 0 {
        info!("Recomputed hash {computed:#010x}, written to {}", out_path.display());
    }
    Ok(())
}
