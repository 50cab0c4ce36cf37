//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! The variable-length integer substrate used pervasively by fleets, planets and production
//! queues to compress cargo amounts and counts without a schema change: up to eight fields
//! share one packed 16-bit control word, each field's 2-bit indicator choosing a 0/1/2/4-byte
//! width for that field.

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::{CoreError, Result};

/// Widths a single var-len field may take, smallest-fits-first.
const WIDTHS: [u8; 4] = [0, 1, 2, 4];

/// Picks the smallest indicator/width pair that can hold `value` unsigned.
fn width_for(value: u64) -> Result<(u8, u8)> {
    if value == 0 {
        Ok((0, 0))
    } else if value <= u64::from(u8::MAX) {
        Ok((1, 1))
    } else if value <= u64::from(u16::MAX) {
        Ok((2, 2))
    } else if value <= u64::from(u32::MAX) {
        Ok((3, 4))
    } else {
        Err(CoreError::EncodingRejection { field: "varint field".to_owned(), value, max: u64::from(u32::MAX) })
    }
}

/// Reads `count` (at most 8) var-len fields: the shared control word, then each field's bytes
/// in order, zero-extended to a `u64`.
pub fn decode_varint_pack<R: ReadBytes>(reader: &mut R, count: usize) -> Result<Vec<u64>> {
    debug_assert!(count <= 8, "a single control word only carries 8 indicators");

    let control = reader.read_u16()?;
    let mut values = Vec::with_capacity(count);
    for i in 0..count {
        let indicator = (control >> (i * 2)) & 0b11;
        let width = WIDTHS[indicator as usize];
        let value = match width {
            0 => 0u64,
            1 => u64::from(reader.read_u8()?),
            2 => u64::from(reader.read_u16()?),
            4 => u64::from(reader.read_u32()?),
            _ => unreachable!(),
        };
        values.push(value);
    }

    Ok(values)
}

/// Writes `values` (at most 8) as a var-len pack: picks the smallest width for each value,
/// packs the indicators into the control word, then emits each value's bytes.
pub fn encode_varint_pack<W: WriteBytes>(writer: &mut W, values: &[u64]) -> Result<()> {
    debug_assert!(values.len() <= 8, "a single control word only carries 8 indicators");

    let mut classes = Vec::with_capacity(values.len());
    for &value in values {
        classes.push(width_for(value)?);
    }

    let mut control: u16 = 0;
    for (i, (indicator, _)) in classes.iter().enumerate() {
        control |= u16::from(*indicator) << (i * 2);
    }
    writer.write_u16(control)?;

    for (&value, (_, width)) in values.iter().zip(classes.iter()) {
        match width {
            0 => {}
            1 => writer.write_u8(value as u8)?,
            2 => writer.write_u16(value as u16)?,
            4 => writer.write_u32(value as u32)?,
            _ => unreachable!(),
        }
    }

    Ok(())
}
