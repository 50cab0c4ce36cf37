//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! Module with the [`ReadBytes`] trait, to read bytes to known types.

use byteorder::{LittleEndian, ReadBytesExt};

use std::io::{Read, Seek, SeekFrom};

use crate::error::{CoreError, Result};

//---------------------------------------------------------------------------//
//                            Trait Definition
//---------------------------------------------------------------------------//

/// This trait allow us to easily read all kind of data from a source that implements [`Read`] + [`Seek`].
///
/// Every block decoder in [`crate::files`] reads through this trait rather than calling
/// `byteorder` directly, so a single place controls error reporting when a buffer runs short.
pub trait ReadBytes: Read + Seek {

    /// This function returns the lenght of the data we're reading.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use starlane_core::binary::ReadBytes;
    ///
    /// let data = vec![1, 2, 3, 4];
    /// let mut cursor = Cursor::new(data);
    /// let len = cursor.len().unwrap();
    /// assert_eq!(len, 4);
    /// ```
    fn len(&mut self) -> Result<u64> {
        let old_pos = self.stream_position()?;
        let len = self.seek(SeekFrom::End(0))?;
        if old_pos != len {
            self.seek(SeekFrom::Start(old_pos))?;
        }
        Ok(len)
    }

    /// This function returns if the data is empty.
    fn is_empty(&mut self) -> Result<bool> {
        self.len().map(|len| len == 0)
    }

    /// This function returns the number of bytes remaining to be read from the current position.
    fn remaining(&mut self) -> Result<u64> {
        let pos = self.stream_position()?;
        let len = self.len()?;
        Ok(len.saturating_sub(pos))
    }

    /// This function returns the amount of bytes specified in the `size` argument as a [`Vec<u8>`].
    ///
    /// If `rewind` is true, the cursor will be reset to its original position once the data is returned.
    fn read_slice(&mut self, size: usize, rewind: bool) -> Result<Vec<u8>> {
        let mut data = vec![0; size];
        if size == 0 {
            return Ok(data);
        }

        let remaining = self.remaining()? as usize;
        if remaining < size {
            return Err(CoreError::InputTruncated { needed: size, available: remaining });
        }

        self.read_exact(&mut data)?;

        if rewind {
            self.seek(SeekFrom::Current(-(size as i64)))?;
        }

        Ok(data)
    }

    /// This function tries to read a bool value from `self`. 0 is false, 1 is true.
    fn read_bool(&mut self) -> Result<bool> {
        let value = self.read_u8()?;
        match value {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(CoreError::DecodingBoolError(value)),
        }
    }

    /// This function tries to read an unsigned byte value from `self`.
    fn read_u8(&mut self) -> Result<u8> {
        self.require(1)?;
        ReadBytesExt::read_u8(self).map_err(From::from)
    }

    /// This function tries to read an u16 value, little-endian, from `self`.
    fn read_u16(&mut self) -> Result<u16> {
        self.require(2)?;
        ReadBytesExt::read_u16::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read an u32 value, little-endian, from `self`.
    fn read_u32(&mut self) -> Result<u32> {
        self.require(4)?;
        ReadBytesExt::read_u32::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read an u64 value, little-endian, from `self`.
    fn read_u64(&mut self) -> Result<u64> {
        self.require(8)?;
        ReadBytesExt::read_u64::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read a signed byte value from `self`.
    fn read_i8(&mut self) -> Result<i8> {
        self.require(1)?;
        ReadBytesExt::read_i8(self).map_err(From::from)
    }

    /// This function tries to read an i16 value, little-endian, from `self`.
    fn read_i16(&mut self) -> Result<i16> {
        self.require(2)?;
        ReadBytesExt::read_i16::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read an i32 value, little-endian, from `self`.
    fn read_i32(&mut self) -> Result<i32> {
        self.require(4)?;
        ReadBytesExt::read_i32::<LittleEndian>(self).map_err(From::from)
    }

    /// Checks that at least `needed` bytes remain, translating a short buffer into
    /// [`CoreError::InputTruncated`] instead of letting the underlying read fail generically.
    fn require(&mut self, needed: usize) -> Result<()> {
        let available = self.remaining()? as usize;
        if available < needed {
            Err(CoreError::InputTruncated { needed, available })
        } else {
            Ok(())
        }
    }
}

// Automatic implementation for everything that implements `Read + Seek`.
impl<R: Read + Seek> ReadBytes for R {}
