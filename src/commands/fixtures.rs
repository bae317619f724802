//! Default data each command sends when no input is given.

use alloy::primitives::Address;

use crate::contracts::records::{ChapterMetadata, CreatorRecord, LocalizedText, ReaderRecord};

pub const MINT_RECIPIENT: &str = "0x12E2C1e3A8CA617689A4E4E6d6a098Faf08B8189";
pub const MINT_TOKEN_ID: &str =
    "87972445196974322379145804029982711346002445201520251042340119774833874900476";

pub const UPLOAD_MONTH: &str = "202405";
pub const UPLOAD_CREATOR: &str = "0x1E86A3da7301AC98DD170278E2c5cF9D6d9616C7";
pub const UPLOAD_READER: &str = "0x9d7D6b191255919A608027F138B577bE8b701509";

pub const BATCH_MONTH: &str = "202502";

pub const QUERY_MONTH: &str = "202501";
pub const QUERY_CREATOR: &str = "0xC001000000000000000000000000000000000001";
pub const QUERY_READER: &str = "0xC002000000000000000000000000000000000001";

pub fn upload_creator_record() -> CreatorRecord {
    CreatorRecord::new(12, 30, 4800, 15)
}

pub fn upload_reader_record() -> ReaderRecord {
    ReaderRecord::new(200, 50)
}

/// `0xC0{tag}00…00{index}`, the placeholder accounts used for batch uploads.
fn placeholder_address(tag: u8, index: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[0] = 0xC0;
    bytes[1] = tag;
    bytes[19] = index;
    Address::from(bytes)
}

/// Ten creators `0xC001…0001` to `0xC001…000A` with their statistics.
pub fn batch_creators() -> Vec<(Address, CreatorRecord)> {
    [
        (10, 25, 4000, 14),
        (8, 20, 3100, 10),
        (15, 35, 5200, 18),
        (12, 28, 4600, 16),
        (6, 12, 2100, 7),
        (20, 40, 8500, 25),
        (13, 27, 4800, 17),
        (9, 18, 3000, 12),
        (17, 33, 6900, 21),
        (5, 10, 1600, 6),
    ]
    .into_iter()
    .zip(1u8..)
    .map(|((published, shared, value, transactions), index)| {
        (
            placeholder_address(0x01, index),
            CreatorRecord::new(published, shared, value, transactions),
        )
    })
    .collect()
}

/// Ten readers `0xC002…0001` to `0xC002…000A` with their balances.
pub fn batch_readers() -> Vec<(Address, ReaderRecord)> {
    [
        (200, 50),
        (150, 40),
        (100, 30),
        (80, 20),
        (300, 60),
        (250, 70),
        (120, 35),
        (400, 90),
        (350, 80),
        (180, 45),
    ]
    .into_iter()
    .zip(1u8..)
    .map(|((charged, balance), index)| {
        (placeholder_address(0x02, index), ReaderRecord::new(charged, balance))
    })
    .collect()
}

/// One Piece chapter 1, published with the minimum copy count.
pub fn one_piece_chapter() -> ChapterMetadata {
    ChapterMetadata {
        title: LocalizedText {
            zh: "海贼王 第一话 冒险的黎明".to_string(),
            en: "One Piece Chapter 1: Dawn of the Adventure".to_string(),
            jp: "ワンピース 第1話 冒険の夜明け".to_string(),
        },
        description: LocalizedText {
            zh: "伟大的冒险开始了！路飞踏上旅程的第一步。".to_string(),
            en: "The grand adventure begins! Luffy sets off on his journey.".to_string(),
            jp: "壮大な冒険が始まる！ルフィの旅の第一歩。".to_string(),
        },
        max_copies: 5,
        uri: "https://gateway.pinata.cloud/ipfs/bafkreihepqt2p3szkcjfwiipmtgsgmyoz6vtpxiulcc3agv4zw6ezkfhvq"
            .to_string(),
    }
}
