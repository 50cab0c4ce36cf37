//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! Race-file integrity hash: a `u32` checksum folded over every byte preceding a race file's
//! `FileHash` block, recomputed whenever the repair tool or any mutating caller touches a race
//! file.
//!
//! The original game's exact folding formula isn't reproduced here bit-for-bit; this module's
//! rotating XOR with byte-position weighting is this crate's own reconstruction, self-consistent
//! (computing, writing, then re-computing agrees) rather than validated against an external
//! reference value.

const SEED: u32 = 0x811C_9DC5;

/// Computes the integrity hash over `bytes`, meant to be called on everything preceding a race
/// file's `FileHash` block.
pub fn compute_hash(bytes: &[u8]) -> u32 {
    let mut acc = SEED;
    for (position, &byte) in bytes.iter().enumerate() {
        let rotation = (position % 31) as u32 + 1;
        acc = acc.rotate_left(rotation);
        acc ^= u32::from(byte) << ((position % 4) * 8);
    }
    acc
}
