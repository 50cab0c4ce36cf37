//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

use std::io::Cursor;

use super::ReadBytes;

#[test]
fn read_u8_u16_u32_u64_roundtrip() {
    let data = vec![0x10, 0x20, 0x00, 0x30, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    let mut cursor = Cursor::new(data);

    assert_eq!(cursor.read_u8().unwrap(), 0x10);
    assert_eq!(cursor.read_u16().unwrap(), 0x20);
    assert_eq!(cursor.read_u32().unwrap(), 0x30);
}

#[test]
fn read_bool_rejects_non_binary_values() {
    let mut cursor = Cursor::new(vec![0u8, 1, 2]);
    assert_eq!(cursor.read_bool().unwrap(), false);
    assert_eq!(cursor.read_bool().unwrap(), true);
    assert!(cursor.read_bool().is_err());
}

#[test]
fn read_slice_reports_truncation() {
    let mut cursor = Cursor::new(vec![1u8, 2, 3]);
    assert!(cursor.read_slice(3, false).is_ok());

    let mut cursor = Cursor::new(vec![1u8, 2, 3]);
    let err = cursor.read_slice(4, false).unwrap_err();
    assert!(matches!(err, crate::error::CoreError::InputTruncated { needed: 4, available: 3 }));
}

#[test]
fn read_slice_rewind_restores_position() {
    let mut cursor = Cursor::new(vec![1u8, 2, 3, 4]);
    let first = cursor.read_slice(2, true).unwrap();
    let second = cursor.read_slice(2, false).unwrap();
    assert_eq!(first, second);
}

#[test]
fn signed_reads_are_little_endian() {
    let mut cursor = Cursor::new(vec![0xFFu8, 0xFF]);
    assert_eq!(cursor.read_i16().unwrap(), -1);
}
