//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! Nibble-packed codec for player-authored short strings (fleet names, race names, messages).
//!
//! Nibbles `0x0..=0xA` are the "fast" alphabet (one nibble per character: a space plus the ten
//! most common English letters). Nibbles `0xB..=0xE` lead a two-nibble "slow" code, the second
//! nibble selecting one of 16 characters from that lead's table. `0xF` is the terminator.
//!
//! Which letters land in the fast alphabet, and exactly which characters the four slow tables
//! cover, aren't pinned by any upstream byte-for-byte reference — what's pinned is the *shape*:
//! 11 fast slots, 4 slow leads of 16 each, 1 terminator. This module's tables are this crate's
//! own choice, kept internally consistent so `decode_name(encode_name(s)) == s` holds for
//! anything they can represent.

use crate::error::{CoreError, Result};

const TERMINATOR: u8 = 0xF;

const FAST_ALPHABET: [char; 11] = [' ', 'e', 't', 'a', 'o', 'i', 'n', 's', 'h', 'r', 'd'];

// Four slow tables, one per lead nibble 0xB..=0xE, 16 entries each.
const SLOW_B: [char; 16] = ['B', 'C', 'F', 'G', 'J', 'K', 'L', 'M', 'P', 'Q', 'U', 'V', 'W', 'X', 'Y', 'Z'];
const SLOW_C: [char; 16] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '-', '\'', '.', ',', '!', '?'];
const SLOW_D: [char; 16] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p'];
const SLOW_E: [char; 16] = ['q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', ':', ';', '(', ')', '_', '"'];

fn slow_table(lead: u8) -> Option<&'static [char; 16]> {
    match lead {
        0xB => Some(&SLOW_B),
        0xC => Some(&SLOW_C),
        0xD => Some(&SLOW_D),
        0xE => Some(&SLOW_E),
        _ => None,
    }
}

fn fast_nibble_for(c: char) -> Option<u8> {
    FAST_ALPHABET.iter().position(|&f| f == c).map(|p| p as u8)
}

fn slow_nibbles_for(c: char) -> Option<(u8, u8)> {
    for (lead, table) in [(0xB, &SLOW_B), (0xC, &SLOW_C), (0xD, &SLOW_D), (0xE, &SLOW_E)] {
        if let Some(pos) = table.iter().position(|&t| t == c) {
            return Some((lead, pos as u8));
        }
    }
    None
}

/// Splits `bytes` into a nibble stream, low nibble of each byte first, then the high nibble.
fn unpack_nibbles(bytes: &[u8]) -> Vec<u8> {
    let mut nibbles = Vec::with_capacity(bytes.len() * 2);
    for byte in bytes {
        nibbles.push(byte & 0x0F);
        nibbles.push(byte >> 4);
    }
    nibbles
}

/// Decodes a player-authored name from its nibble-packed wire bytes.
pub fn decode_name(bytes: &[u8]) -> Result<String> {
    decode_name_prefix(bytes).map(|(name, _)| name)
}

/// Decodes a name from the start of `bytes`, which may carry more data after the name's
/// terminator. Returns the name and how many bytes of `bytes` it occupied, so a caller
/// embedding a name inside a larger record can resume reading right after it.
pub fn decode_name_prefix(bytes: &[u8]) -> Result<(String, usize)> {
    let nibbles = unpack_nibbles(bytes);
    let mut out = String::new();
    let mut i = 0;

    while i < nibbles.len() {
        let nibble = nibbles[i];
        if nibble == TERMINATOR {
            return Ok((out, i / 2 + 1));
        } else if (nibble as usize) < FAST_ALPHABET.len() {
            out.push(FAST_ALPHABET[nibble as usize]);
            i += 1;
        } else if let Some(table) = slow_table(nibble) {
            let second = *nibbles.get(i + 1).ok_or(CoreError::DecodingStringUnterminated)?;
            out.push(table[second as usize]);
            i += 2;
        } else {
            return Err(CoreError::DecodingStringInvalidNibble(nibble));
        }
    }

    Err(CoreError::DecodingStringUnterminated)
}

/// Encodes `s` into its nibble-packed wire form. Fails if `s` contains a character outside
/// both the fast and slow alphabets.
pub fn encode_name(s: &str) -> Result<Vec<u8>> {
    let mut nibbles = Vec::with_capacity(s.len() + 2);

    for c in s.chars() {
        if let Some(n) = fast_nibble_for(c) {
            nibbles.push(n);
        } else if let Some((lead, second)) = slow_nibbles_for(c) {
            nibbles.push(lead);
            nibbles.push(second);
        } else {
            return Err(CoreError::EncodingStringUnrepresentableChar(c));
        }
    }

    nibbles.push(TERMINATOR);
    if nibbles.len() % 2 != 0 {
        nibbles.push(TERMINATOR);
    }

    let mut bytes = Vec::with_capacity(nibbles.len() / 2);
    for pair in nibbles.chunks_exact(2) {
        bytes.push(pair[0] | (pair[1] << 4));
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_alphabet_roundtrip() {
        let s = "the rat ate a tin ration";
        let encoded = encode_name(s).unwrap();
        assert_eq!(decode_name(&encoded).unwrap(), s);
    }

    #[test]
    fn slow_alphabet_roundtrip() {
        let s = "Zorg's Fleet 9!";
        let encoded = encode_name(s).unwrap();
        assert_eq!(decode_name(&encoded).unwrap(), s);
    }

    #[test]
    fn empty_string_roundtrip() {
        let encoded = encode_name("").unwrap();
        assert_eq!(encoded, vec![0xFF]);
        assert_eq!(decode_name(&encoded).unwrap(), "");
    }

    #[test]
    fn odd_nibble_count_gets_padded_to_a_whole_byte() {
        // One fast-alphabet char (1 nibble) + terminator (1 nibble) = 2 nibbles already even.
        let encoded = encode_name("a").unwrap();
        assert_eq!(encoded.len(), 1);

        // Two fast-alphabet chars (2 nibbles) + terminator (1) = 3, odd, needs a padding nibble.
        let encoded = encode_name("at").unwrap();
        assert_eq!(encoded.len(), 2);
        assert_eq!(decode_name(&encoded).unwrap(), "at");
    }

    #[test]
    fn unrepresentable_char_is_rejected() {
        assert!(encode_name("\u{1F680}").is_err());
    }

    #[test]
    fn unterminated_bytes_error_instead_of_panicking() {
        // A single slow-alphabet lead nibble with nothing after it and no terminator.
        assert!(decode_name(&[0x0B]).is_err());
    }
}
