//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! Codec core for a 1990s turn-based 4X space strategy game's save-file format: the keyed
//! stream cipher, block framer, bit-packed domain records and the cross-file aggregator.

pub mod aggregator;
pub mod binary;
pub mod crypto;
pub mod error;
pub mod files;
pub mod integrity;
pub mod rules;
