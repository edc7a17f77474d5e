//! Gen 5 cartridge saves.
//!
//! Box storage is a fixed table of 24 boxes. Every 136 byte record keeps its
//! personality value, flags and checksum in the clear; the 64 payload words are XORed
//! with a stream from the game's LCG seeded with the checksum, and then split into
//! four shuffled 16-word blocks.
//!
//! Each box block is followed by a footer whose CRC-16/CCITT of the block doubles as
//! the format signature.

use std::ops::Range;

use byteorder::{ByteOrder, LittleEndian};

use crate::{
    reader::SaveReader,
    resolver::Resolver,
    shuffle::{self, Block},
    BoxGrid, DecodeError, Generation, PcBox, SlotValue,
};

const GENERATION: Generation = Generation::Gen5;

const SAVE_SIZE: Range<usize> = 0x80000..0x80100;
pub const BOX_TABLE_OFFSET: usize = 0x400;
pub const BOX_STRIDE: usize = 0x1000;
const NUMBER_OF_BOXES: usize = 24;
const SLOTS_PER_BOX: usize = 30;
const BOX_DATA_SIZE: usize = SLOTS_PER_BOX * PK5_SIZE_BOX;
pub const BOX_CHECKSUM_OFFSET: usize = BOX_DATA_SIZE + 2;

pub const PK5_SIZE_BOX: usize = 0x88;
const HEADER_SIZE: usize = 8;
pub const PAYLOAD_WORDS: usize = (PK5_SIZE_BOX - HEADER_SIZE) / 2;
const BLOCK_WORDS: usize = 16;
const EGG_WORD: usize = 9;
const EGG_FLAG_BIT: u16 = 14;
const FORM_WORD: usize = 12;

pub const LCG_MULTIPLIER: u32 = 0x41C6_4E6D;
pub const LCG_INCREMENT: u32 = 0x0000_6073;

/// The game's linear congruential generator. Each step yields the upper half of the
/// new state as a 16-bit mask.
#[derive(Clone, Copy, Debug)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Lcg { state: seed }
    }
}

impl Iterator for Lcg {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        Some((self.state >> 16) as u16)
    }
}

/// CRC-16/CCITT (polynomial 0x1021, initial value 0xFFFF) used by the block footers.
pub fn block_checksum(data: &[u8]) -> u16 {
    data.iter().fold(0xFFFF, |crc, byte| {
        let mut crc = crc ^ (u16::from(*byte) << 8);
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
        crc
    })
}

/// XORs `words` with the LCG stream seeded by `seed`. Applying it twice is the identity.
pub fn crypt_words(words: &mut [u16], seed: u16) {
    for (word, mask) in words.iter_mut().zip(Lcg::new(u32::from(seed))) {
        *word ^= mask;
    }
}

pub fn decode(data: &[u8]) -> Result<BoxGrid, DecodeError> {
    if !SAVE_SIZE.contains(&data.len()) {
        return Err(DecodeError::unrecognized(format!(
            "{} bytes is not a gen5 save size",
            data.len()
        )));
    }

    let mut reader = SaveReader::new(data, GENERATION);
    verify_box_checksums(&mut reader)?;

    let resolver = Resolver::new(GENERATION);
    (0..NUMBER_OF_BOXES)
        .map(|box_index| {
            let offset = BOX_TABLE_OFFSET + box_index * BOX_STRIDE;
            log::trace!("Box {} at {offset:#x}", box_index + 1);
            reader
                .bytes_at(offset, BOX_DATA_SIZE)?
                .chunks_exact(PK5_SIZE_BOX)
                .enumerate()
                .map(|(slot, pk5)| {
                    decode_pk5(pk5, &resolver).map_err(|err| err.in_slot(box_index, slot))
                })
                .collect::<Result<PcBox, _>>()
        })
        .collect()
}

/// A file where no box footer matches is not a gen5 save. Some but not all matching
/// means a damaged one.
fn verify_box_checksums(reader: &mut SaveReader) -> Result<(), DecodeError> {
    let mut mismatched = Vec::new();
    for box_index in 0..NUMBER_OF_BOXES {
        let offset = BOX_TABLE_OFFSET + box_index * BOX_STRIDE;
        let computed = block_checksum(reader.bytes_at(offset, BOX_DATA_SIZE)?);
        let stored = reader.read_u16_at(offset + BOX_CHECKSUM_OFFSET)?;
        if computed != stored {
            log::debug!(
                "Box {} block checksum {computed:#06x}, footer has {stored:#06x}",
                box_index + 1
            );
            mismatched.push(box_index + 1);
        }
    }

    match mismatched.len() {
        0 => Ok(()),
        NUMBER_OF_BOXES => Err(DecodeError::unrecognized(
            "no box block matches its gen5 footer checksum",
        )),
        _ => Err(DecodeError::corrupt(
            GENERATION,
            format!("box block checksum mismatch in boxes {mismatched:?}"),
        )),
    }
}

fn decode_pk5(pk5: &[u8], resolver: &Resolver) -> Result<SlotValue, DecodeError> {
    let pk5 = Pk5::decrypt(pk5);
    if pk5.is_empty() {
        return Ok(SlotValue::Empty);
    }

    let computed = pk5.compute_checksum();
    if computed != pk5.checksum {
        return Err(DecodeError::corrupt(
            GENERATION,
            format!(
                "computed checksum {computed:#06x} but record has {:#06x}",
                pk5.checksum
            ),
        ));
    }

    if pk5.is_egg() {
        return Ok(SlotValue::Egg);
    }

    log::trace!(
        "PK5 {:#010x}: species {} form {}",
        pk5.personality_value,
        pk5.species(),
        pk5.form()
    );
    resolver.species(pk5.species(), pk5.form())
}

/// A boxed record with its payload decrypted.
#[derive(Clone, Debug)]
pub struct Pk5 {
    pub personality_value: u32,
    pub flags: u16,
    pub checksum: u16,
    words: [u16; PAYLOAD_WORDS],
}

impl Pk5 {
    /// `pk5` must hold at least `PK5_SIZE_BOX` bytes.
    pub fn decrypt(pk5: &[u8]) -> Self {
        let personality_value = LittleEndian::read_u32(&pk5[0..4]);
        let flags = LittleEndian::read_u16(&pk5[4..6]);
        let checksum = LittleEndian::read_u16(&pk5[6..8]);

        let mut words = [0u16; PAYLOAD_WORDS];
        LittleEndian::read_u16_into(&pk5[HEADER_SIZE..PK5_SIZE_BOX], &mut words);
        crypt_words(&mut words, checksum);

        Pk5 {
            personality_value,
            flags,
            checksum,
            words,
        }
    }

    /// The game clears empty slots entirely, so only an all-zero header and payload
    /// count as empty.
    pub fn is_empty(&self) -> bool {
        self.personality_value == 0
            && self.flags == 0
            && self.checksum == 0
            && self.words.iter().all(|word| *word == 0)
    }

    pub fn compute_checksum(&self) -> u16 {
        self.words
            .iter()
            .fold(0u16, |checksum, word| checksum.wrapping_add(*word))
    }

    pub fn shuffle_selector(&self) -> u32 {
        (self.personality_value >> 13) & 0x1F
    }

    pub fn block(&self, block: Block) -> &[u16] {
        let offset = shuffle::block_offset(self.shuffle_selector(), block, BLOCK_WORDS);
        &self.words[offset..offset + BLOCK_WORDS]
    }

    pub fn species(&self) -> u16 {
        self.block(Block::A)[0]
    }

    pub fn is_egg(&self) -> bool {
        (self.block(Block::B)[EGG_WORD] >> EGG_FLAG_BIT) & 0b1 != 0
    }

    /// Alternate form index, stored above the fateful-encounter and gender bits.
    pub fn form(&self) -> u8 {
        (self.block(Block::B)[FORM_WORD] & 0xFF) as u8 >> 3
    }
}
