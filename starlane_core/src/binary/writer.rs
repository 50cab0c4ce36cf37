//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! Module with the [`WriteBytes`] trait, to write bytes from known types to a [`Writer`].
//!
//! [`Writer`]: std::io::Write

use byteorder::{LittleEndian, WriteBytesExt};

use std::io::Write;

use crate::error::Result;

//---------------------------------------------------------------------------//
//                            Trait Definition
//---------------------------------------------------------------------------//

/// This trait allow us to easily write all kind of data types to something that implements [`Write`].
pub trait WriteBytes: Write {

    /// This function tries to write a bool value to `self`.
    ///
    /// ```rust
    /// use starlane_core::binary::WriteBytes;
    ///
    /// let mut data = vec![];
    /// assert!(data.write_bool(true).is_ok());
    /// assert_eq!(data, vec![1]);
    /// ```
    fn write_bool(&mut self, boolean: bool) -> Result<()> {
        self.write_u8(u8::from(boolean))
    }

    /// This function tries to write a byte value to `self`.
    fn write_u8(&mut self, value: u8) -> Result<()> {
        WriteBytesExt::write_u8(self, value).map_err(From::from)
    }

    /// This function tries to write an u16 value, little-endian, to `self`.
    fn write_u16(&mut self, integer: u16) -> Result<()> {
        WriteBytesExt::write_u16::<LittleEndian>(self, integer).map_err(From::from)
    }

    /// This function tries to write an u32 value, little-endian, to `self`.
    fn write_u32(&mut self, integer: u32) -> Result<()> {
        WriteBytesExt::write_u32::<LittleEndian>(self, integer).map_err(From::from)
    }

    /// This function tries to write an u64 value, little-endian, to `self`.
    fn write_u64(&mut self, integer: u64) -> Result<()> {
        WriteBytesExt::write_u64::<LittleEndian>(self, integer).map_err(From::from)
    }

    /// This function tries to write a signed byte value to `self`.
    fn write_i8(&mut self, value: i8) -> Result<()> {
        WriteBytesExt::write_i8(self, value).map_err(From::from)
    }

    /// This function tries to write an i16 value, little-endian, to `self`.
    fn write_i16(&mut self, integer: i16) -> Result<()> {
        WriteBytesExt::write_i16::<LittleEndian>(self, integer).map_err(From::from)
    }

    /// This function tries to write an i32 value, little-endian, to `self`.
    fn write_i32(&mut self, integer: i32) -> Result<()> {
        WriteBytesExt::write_i32::<LittleEndian>(self, integer).map_err(From::from)
    }

    /// This function tries to write a whole slice of bytes to `self`, unmodified.
    fn write_slice(&mut self, data: &[u8]) -> Result<()> {
        self.write_all(data).map_err(From::from)
    }
}

// Automatic implementation for everything that implements `Write`.
impl<W: Write> WriteBytes for W {}
