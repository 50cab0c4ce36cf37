//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! This module contains all kind of errors used inside this crate.
//!
//! Not much to say appart of that, really.

use thiserror::Error;

/// Custom `Result` type, to always return our custom error.
pub type Result<T, E = CoreError> = core::result::Result<T, E>;

/// Custom error type for the lib.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Block header or body extends past the end of the buffer (needed {needed} bytes, {available} available).")]
    InputTruncated { needed: usize, available: usize },

    #[error("File has no FileHeader, its magic does not match a known dialect, or its declared file type is out of 0..5: {0}.")]
    MalformedHeader(String),

    #[error("Cipher seed parameter out of range: salt={salt:#x} (max 0x7ff), player_index={player_index} (max 31).")]
    SeedOutOfRange { salt: u16, player_index: u8 },

    #[error("File's game id {found} does not match the store's game id {expected}.")]
    GameIdMismatch { expected: u32, found: u32 },

    #[error("Race file's stored hash {stored:#010x} does not match the computed hash {computed:#010x}.")]
    HashMismatch { stored: u32, computed: u32 },

    #[error("Encoder was asked to produce a value too large for its wire slot: {field} = {value} (max {max}).")]
    EncodingRejection { field: String, value: u64, max: u64 },

    #[error("There are no more bytes to decode in the data provided.")]
    DecodingNoBytesLeftError,

    #[error("Error trying to decode an {0} value: required {1} bytes, only {2} available.")]
    DecodingNotEnoughBytesToDecodeForType(String, usize, usize),

    #[error("Error trying to decode \"{0}\" as boolean: invalid value.")]
    DecodingBoolError(u8),

    #[error("Nibble-packed string is missing its terminator nibble.")]
    DecodingStringUnterminated,

    #[error("Nibble {0:#x} is not a valid fast-alphabet or slow-alphabet lead nibble.")]
    DecodingStringInvalidNibble(u8),

    #[error("Character {0:?} has no representation in the nibble-packed alphabet.")]
    EncodingStringUnrepresentableChar(char),

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Represents all other cases of `std::array::TryFromSliceError`.
    #[error(transparent)]
    TryFromSliceError(#[from] std::array::TryFromSliceError),
}
