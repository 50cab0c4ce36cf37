//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

use super::WriteBytes;

#[test]
fn write_bool_emits_single_byte() {
    let mut data = vec![];
    data.write_bool(true).unwrap();
    data.write_bool(false).unwrap();
    assert_eq!(data, vec![1, 0]);
}

#[test]
fn write_u16_is_little_endian() {
    let mut data = vec![];
    data.write_u16(0x0102).unwrap();
    assert_eq!(data, vec![0x02, 0x01]);
}

#[test]
fn write_u32_is_little_endian() {
    let mut data = vec![];
    data.write_u32(0x0102_0304).unwrap();
    assert_eq!(data, vec![0x04, 0x03, 0x02, 0x01]);
}

#[test]
fn write_slice_is_verbatim() {
    let mut data = vec![];
    data.write_slice(&[9, 8, 7]).unwrap();
    assert_eq!(data, vec![9, 8, 7]);
}
