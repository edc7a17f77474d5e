//! Gen 3 flash saves.
//!
//! The flash holds two complete copies of the game, each made of 14 rotated sections
//! with a footer carrying the section id and a save counter. The copy with the newer
//! counter wins. Box storage lives in sections 5 to 13, and each boxed creature is an
//! 80 byte record whose data area is XOR encrypted and sub-block shuffled.

use std::ops::Range;

use byteorder::{ByteOrder, LittleEndian};

use crate::{
    reader::SaveReader,
    resolver::Resolver,
    shuffle::{self, Block},
    tables::{UNOWN, UNOWN_LETTERS},
    BoxGrid, DecodeError, Generation, PcBox, SlotValue,
};

const GENERATION: Generation = Generation::Gen3;

const GAME_SAVE_DATA_LENGTH: usize = 131072;
const SAVE_SIZE: Range<usize> = GAME_SAVE_DATA_LENGTH..2 * GAME_SAVE_DATA_LENGTH;
pub const SAVE_A_OFFSET: usize = 0x0000;
pub const SAVE_B_OFFSET: usize = 0xE000;
/// Footer counter of the last section of a save copy.
const SAVE_INDEX_OFFSET: usize = 0xDFFC;
pub const SECTION_SIZE: usize = 0x1000;
pub const SECTION_DATA_SIZE: usize = 3968;
pub const SECTION_ID_OFFSET: usize = 0x0FF4;
pub const SECTION_SIGNATURE_OFFSET: usize = 0x0FF8;
pub const SECTION_SIGNATURE: u32 = 0x0801_2025;
const NUMBER_OF_SECTIONS: usize = 14;
const FIRST_BOX_SECTION: u16 = 5;
const BOX_SECTION_COUNT: usize = 9;
/// The box buffer starts with the current box number.
const BOX_BUFFER_HEADER_SIZE: usize = 4;
const NUMBER_OF_BOXES: usize = 14;
const SLOTS_PER_BOX: usize = 30;

pub const PK3_SIZE_BOX: usize = 80;
const CHECKSUM_OFFSET: usize = 28;
const SUBSTRUCTURE_OFFSET: usize = 32;
const SUBSTRUCTURE_SIZE: usize = 12;
const GROWTH: Block = Block::A;
const MISCELLANEOUS: Block = Block::D;
const EGG_FLAG_BIT: u32 = 30;

/// Which of the two save copies holds the most recent save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveSlot {
    A,
    B,
}

impl SaveSlot {
    pub fn offset(self) -> usize {
        match self {
            SaveSlot::A => SAVE_A_OFFSET,
            SaveSlot::B => SAVE_B_OFFSET,
        }
    }
}

/// Picks the newer copy from the two save counters. A counter about to wrap bumps
/// both counters by one so that the copy written after the wrap still wins.
pub fn select_save_slot(save_index_a: u32, save_index_b: u32) -> SaveSlot {
    let (save_index_a, save_index_b) = if save_index_a == u32::MAX || save_index_b == u32::MAX {
        (save_index_a.wrapping_add(1), save_index_b.wrapping_add(1))
    } else {
        (save_index_a, save_index_b)
    };

    if save_index_a > save_index_b {
        SaveSlot::A
    } else {
        SaveSlot::B
    }
}

pub fn decode(data: &[u8]) -> Result<BoxGrid, DecodeError> {
    if !SAVE_SIZE.contains(&data.len()) {
        return Err(DecodeError::unrecognized(format!(
            "{} bytes is not a gen3 save size",
            data.len()
        )));
    }

    let mut reader = SaveReader::new(data, GENERATION);
    let save_index_a = reader.read_u32_at(SAVE_A_OFFSET + SAVE_INDEX_OFFSET)?;
    let save_index_b = reader.read_u32_at(SAVE_B_OFFSET + SAVE_INDEX_OFFSET)?;
    log::debug!("Save Index A: {save_index_a}");
    log::debug!("Save Index B: {save_index_b}");

    let save_slot = select_save_slot(save_index_a, save_index_b);
    log::debug!("Reading save {save_slot:?} at {:#x}", save_slot.offset());
    verify_signatures(&mut reader, save_slot.offset())?;

    let box_buffer = assemble_box_buffer(&mut reader, save_slot.offset())?;
    log::debug!(
        "Current box number is {}",
        LittleEndian::read_u32(&box_buffer[..BOX_BUFFER_HEADER_SIZE])
    );

    let resolver = Resolver::new(GENERATION);
    box_buffer[BOX_BUFFER_HEADER_SIZE..]
        .chunks_exact(PK3_SIZE_BOX * SLOTS_PER_BOX)
        .take(NUMBER_OF_BOXES)
        .enumerate()
        .map(|(box_index, box_data)| {
            box_data
                .chunks_exact(PK3_SIZE_BOX)
                .enumerate()
                .map(|(slot, pk3)| {
                    decode_pk3(pk3, &resolver).map_err(|err| err.in_slot(box_index, slot))
                })
                .collect::<Result<PcBox, _>>()
        })
        .collect()
}

fn verify_signatures(reader: &mut SaveReader, save_offset: usize) -> Result<(), DecodeError> {
    for section in 0..NUMBER_OF_SECTIONS {
        let footer = save_offset + section * SECTION_SIZE + SECTION_SIGNATURE_OFFSET;
        let signature = reader.read_u32_at(footer)?;
        if signature != SECTION_SIGNATURE {
            return Err(DecodeError::unrecognized(format!(
                "gen3 section {section} has signature {signature:#010x}"
            )));
        }
    }
    Ok(())
}

/// Concatenates the box sections in section id order, whatever their physical rotation.
fn assemble_box_buffer(reader: &mut SaveReader, save_offset: usize) -> Result<Vec<u8>, DecodeError> {
    let mut box_sections: [Option<&[u8]>; BOX_SECTION_COUNT] = [None; BOX_SECTION_COUNT];
    for section in 0..NUMBER_OF_SECTIONS {
        let section_offset = save_offset + section * SECTION_SIZE;
        let section_id = reader.read_u16_at(section_offset + SECTION_ID_OFFSET)?;
        if section_id < FIRST_BOX_SECTION {
            continue;
        }

        let entry = box_sections
            .get_mut(usize::from(section_id - FIRST_BOX_SECTION))
            .ok_or_else(|| {
                DecodeError::corrupt(GENERATION, format!("invalid section id {section_id}"))
            })?;
        if entry.is_some() {
            return Err(DecodeError::corrupt(
                GENERATION,
                format!("section id {section_id} appears twice"),
            ));
        }
        log::trace!("Section {section_id} is at {section_offset:#x}");
        *entry = Some(reader.bytes_at(section_offset, SECTION_DATA_SIZE)?);
    }

    let mut box_buffer = Vec::with_capacity(BOX_SECTION_COUNT * SECTION_DATA_SIZE);
    for (index, section) in box_sections.iter().enumerate() {
        let section = section.ok_or_else(|| {
            DecodeError::corrupt(
                GENERATION,
                format!("section id {} is missing", index + usize::from(FIRST_BOX_SECTION)),
            )
        })?;
        box_buffer.extend_from_slice(section);
    }
    Ok(box_buffer)
}

fn decode_pk3(pk3: &[u8], resolver: &Resolver) -> Result<SlotValue, DecodeError> {
    if pk3.iter().all(|byte| *byte == 0x00) {
        return Ok(SlotValue::Empty);
    }

    let pk3 = Pk3::decrypt(pk3);
    let computed = pk3.compute_checksum();
    if computed != pk3.checksum {
        return Err(DecodeError::corrupt(
            GENERATION,
            format!(
                "computed checksum {computed:#06x} but record has {:#06x}",
                pk3.checksum
            ),
        ));
    }

    if pk3.is_egg() {
        return Ok(SlotValue::Egg);
    }

    let species = pk3.species();
    let form = if species == UNOWN {
        pk3.unown_letter()
    } else {
        0
    };
    log::trace!(
        "PK3 {:#010x}: species {species:#05x} form {form}",
        pk3.personality_value
    );
    resolver.species(species, form)
}

/// A boxed record with its data area decrypted.
#[derive(Clone, Debug)]
pub struct Pk3 {
    pub personality_value: u32,
    pub original_trainer_id: u32,
    pub checksum: u16,
    data: [u8; PK3_SIZE_BOX - SUBSTRUCTURE_OFFSET],
}

impl Pk3 {
    /// `pk3` must hold at least `PK3_SIZE_BOX` bytes.
    pub fn decrypt(pk3: &[u8]) -> Self {
        let personality_value = LittleEndian::read_u32(&pk3[0..4]);
        let original_trainer_id = LittleEndian::read_u32(&pk3[4..8]);
        let checksum = LittleEndian::read_u16(&pk3[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 2]);

        let mut decryption_key_buf = [0u8; 4];
        LittleEndian::write_u32(
            &mut decryption_key_buf,
            personality_value ^ original_trainer_id,
        );
        let mut data = [0u8; PK3_SIZE_BOX - SUBSTRUCTURE_OFFSET];
        data.copy_from_slice(&pk3[SUBSTRUCTURE_OFFSET..PK3_SIZE_BOX]);
        for (idx, byte) in data.iter_mut().enumerate() {
            *byte ^= decryption_key_buf[idx % 4];
        }

        Pk3 {
            personality_value,
            original_trainer_id,
            checksum,
            data,
        }
    }

    /// Wrapping sum of the decrypted data area as 16-bit words.
    pub fn compute_checksum(&self) -> u16 {
        self.data
            .chunks_exact(2)
            .fold(0u16, |checksum, word| {
                checksum.wrapping_add(LittleEndian::read_u16(word))
            })
    }

    pub fn substructure(&self, block: Block) -> &[u8] {
        let offset = shuffle::block_offset(self.personality_value, block, SUBSTRUCTURE_SIZE);
        &self.data[offset..offset + SUBSTRUCTURE_SIZE]
    }

    pub fn species(&self) -> u16 {
        LittleEndian::read_u16(&self.substructure(GROWTH)[0..2])
    }

    pub fn is_egg(&self) -> bool {
        let ivs_egg_ability_blob = LittleEndian::read_u32(&self.substructure(MISCELLANEOUS)[4..8]);
        (ivs_egg_ability_blob >> EGG_FLAG_BIT) & 0b1 != 0
    }

    /// Unown's letter comes from the low two bits of each personality value byte.
    pub fn unown_letter(&self) -> u8 {
        unown_letter(self.personality_value)
    }
}

pub fn unown_letter(personality_value: u32) -> u8 {
    let pv = personality_value;
    let letter = ((pv >> 24) & 0b11) << 6
        | ((pv >> 16) & 0b11) << 4
        | ((pv >> 8) & 0b11) << 2
        | (pv & 0b11);
    (letter % UNOWN_LETTERS.len() as u32) as u8
}
