//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! This module contains the traits [`ReadBytes`] and [`WriteBytes`], used to decode binary data
//! into usable values and encode it back to binary.
//!
//! Every value on the wire is little-endian. Higher layers (the block framer, the typed block
//! codecs, the nibble-packed string codec) build on top of these two traits instead of calling
//! `byteorder` directly, so truncation is reported uniformly as [`crate::error::CoreError::InputTruncated`].

mod reader;
mod writer;

pub use reader::ReadBytes;
pub use writer::WriteBytes;

#[cfg(test)] mod reader_test;
#[cfg(test)] mod writer_test;
