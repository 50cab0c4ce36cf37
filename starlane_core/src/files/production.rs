//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! `ProductionQueueBlock` (types 28, 29): a planet's build queue.
//!
//! Binds positionally to the most recently seen planet record during aggregation rather than
//! carrying its own owner field — see [`crate::aggregator`].

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::{CoreError, Result};

/// `item_type`'s two documented values; anything else is preserved as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    StockGameItem,
    CustomDesign,
    Other(u8),
}

impl ItemType {
    fn from_nibble(nibble: u8) -> Self {
        match nibble {
            2 => Self::StockGameItem,
            4 => Self::CustomDesign,
            other => Self::Other(other),
        }
    }

    fn to_nibble(self) -> u8 {
        match self {
            Self::StockGameItem => 2,
            Self::CustomDesign => 4,
            Self::Other(n) => n & 0x0F,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductionItem {
    pub item_id: u8,
    pub count: u16,
    pub complete_percent: u16,
    pub item_type: ItemType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionQueueBlock {
    pub planet_id: u16,
    pub items: Vec<ProductionItem>,
}

impl ProductionQueueBlock {
    pub fn decode(body: &[u8]) -> Result<Self> {
        let mut reader = std::io::Cursor::new(body);
        let planet_id = reader.read_u16()? & 0x07FF;

        let mut items = Vec::new();
        while reader.remaining()? >= 4 {
            let first = reader.read_u16()?;
            let item_id = (first & 0x3F) as u8;
            let count = (first >> 6) & 0x03FF;

            let second = reader.read_u16()?;
            let complete_percent = second & 0x0FFF;
            let item_type = ItemType::from_nibble(((second >> 12) & 0x0F) as u8);

            items.push(ProductionItem { item_id, count, complete_percent, item_type });
        }

        Ok(Self { planet_id, items })
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.planet_id > 0x07FF {
            return Err(CoreError::EncodingRejection { field: "planet_id".to_owned(), value: u64::from(self.planet_id), max: 0x07FF });
        }

        let mut out = Vec::new();
        out.write_u16(self.planet_id)?;

        for item in &self.items {
            if item.item_id > 0x3F {
                return Err(CoreError::EncodingRejection { field: "item_id".to_owned(), value: u64::from(item.item_id), max: 0x3F });
            }
            if item.count > 0x03FF {
                return Err(CoreError::EncodingRejection { field: "count".to_owned(), value: u64::from(item.count), max: 0x03FF });
            }
            if item.complete_percent > 0x0FFF {
                return Err(CoreError::EncodingRejection { field: "complete_percent".to_owned(), value: u64::from(item.complete_percent), max: 0x0FFF });
            }

            let first = u16::from(item.item_id) | (item.count << 6);
            out.write_u16(first)?;

            let second = item.complete_percent | (u16::from(item.item_type.to_nibble()) << 12);
            out.write_u16(second)?;
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queue_roundtrip() {
        let queue = ProductionQueueBlock { planet_id: 10, items: vec![] };
        let encoded = queue.encode().unwrap();
        assert_eq!(encoded.len(), 2);
        assert_eq!(ProductionQueueBlock::decode(&encoded).unwrap(), queue);
    }

    #[test]
    fn mixed_item_types_roundtrip() {
        let queue = ProductionQueueBlock {
            planet_id: 300,
            items: vec![
                ProductionItem { item_id: 5, count: 10, complete_percent: 400, item_type: ItemType::StockGameItem },
                ProductionItem { item_id: 2, count: 1, complete_percent: 0, item_type: ItemType::CustomDesign },
            ],
        };
        let encoded = queue.encode().unwrap();
        assert_eq!(ProductionQueueBlock::decode(&encoded).unwrap(), queue);
    }

    #[test]
    fn item_id_over_six_bits_is_rejected_on_encode() {
        let queue = ProductionQueueBlock {
            planet_id: 1,
            items: vec![ProductionItem { item_id: 0x40, count: 0, complete_percent: 0, item_type: ItemType::StockGameItem }],
        };
        assert!(queue.encode().is_err());
    }
}
