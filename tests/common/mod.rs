//! Builders for synthetic save images.
#![allow(dead_code)]

use byteorder::{ByteOrder, LittleEndian};

/// Physical block order for each shuffle selector, written out as the lexicographic
/// permutations of the four logical blocks.
#[rustfmt::skip]
pub const BLOCK_ORDERS: [&str; 24] = [
    "ABCD", "ABDC", "ACBD", "ACDB", "ADBC", "ADCB",
    "BACD", "BADC", "BCAD", "BCDA", "BDAC", "BDCA",
    "CABD", "CADB", "CBAD", "CBDA", "CDAB", "CDBA",
    "DABC", "DACB", "DBAC", "DBCA", "DCAB", "DCBA",
];

pub fn physical_position(selector: u32, block: char) -> usize {
    BLOCK_ORDERS[(selector % 24) as usize]
        .find(block)
        .expect("block letter")
}

pub struct Gen1Save {
    data: Vec<u8>,
}

impl Gen1Save {
    pub const SIZE: usize = 0x8000;
    const CURRENT_BOX_OFFSET: usize = 0x30C0;
    const CURRENT_BOX_NUMBER_OFFSET: usize = 0x284C;

    /// Empty boxes everywhere, box 1 selected.
    pub fn new() -> Self {
        let mut save = Gen1Save {
            data: vec![0u8; Self::SIZE],
        };
        save.write_list(Self::CURRENT_BOX_OFFSET, &[]);
        save
    }

    pub fn current_box(mut self, box_index: u8) -> Self {
        // The high bit is a flag unrelated to the box number.
        self.data[Self::CURRENT_BOX_NUMBER_OFFSET] = 0x80 | box_index;
        self
    }

    pub fn current_box_contents(mut self, species: &[u8]) -> Self {
        self.write_list(Self::CURRENT_BOX_OFFSET, species);
        self
    }

    pub fn bank_box(mut self, box_index: usize, species: &[u8]) -> Self {
        self.write_list(livingdex::gen1::box_offset(box_index), species);
        self
    }

    pub fn raw(mut self, offset: usize, byte: u8) -> Self {
        self.data[offset] = byte;
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }

    fn write_list(&mut self, offset: usize, species: &[u8]) {
        self.data[offset] = species.len() as u8;
        self.data[offset + 1..offset + 1 + species.len()].copy_from_slice(species);
        self.data[offset + 1 + species.len()] = 0xFF;
    }
}

/// A boxed gen3 record before encryption.
#[derive(Clone, Copy, Debug)]
pub struct Pk3Builder {
    pub personality_value: u32,
    pub original_trainer_id: u32,
    pub species: u16,
    pub is_egg: bool,
}

impl Pk3Builder {
    pub fn new(personality_value: u32, species: u16) -> Self {
        Pk3Builder {
            personality_value,
            original_trainer_id: 0x1234_5678,
            species,
            is_egg: false,
        }
    }

    pub fn egg(mut self) -> Self {
        self.is_egg = true;
        self
    }

    pub fn encode(&self) -> [u8; 80] {
        let mut data = [0u8; 48];
        let growth = physical_position(self.personality_value, 'A') * 12;
        let misc = physical_position(self.personality_value, 'D') * 12;
        LittleEndian::write_u16(&mut data[growth..growth + 2], self.species);
        // Filler so every block carries something through the cipher.
        data[growth + 8] = 0x46;
        if self.is_egg {
            LittleEndian::write_u32(&mut data[misc + 4..misc + 8], 1 << 30);
        }
        let checksum = data
            .chunks_exact(2)
            .fold(0u16, |sum, word| sum.wrapping_add(LittleEndian::read_u16(word)));

        let mut key = [0u8; 4];
        LittleEndian::write_u32(&mut key, self.personality_value ^ self.original_trainer_id);
        for (idx, byte) in data.iter_mut().enumerate() {
            *byte ^= key[idx % 4];
        }

        let mut record = [0u8; 80];
        LittleEndian::write_u32(&mut record[0..4], self.personality_value);
        LittleEndian::write_u32(&mut record[4..8], self.original_trainer_id);
        LittleEndian::write_u16(&mut record[0x1C..0x1E], checksum);
        record[0x20..].copy_from_slice(&data);
        record
    }
}

/// One copy of the gen3 save: a counter and the box records, laid out over 14
/// sections starting at `rotation`.
#[derive(Clone, Debug)]
pub struct Gen3Slot {
    pub counter: u32,
    pub rotation: usize,
    pub box_buffer: Vec<u8>,
    pub signature: u32,
}

impl Gen3Slot {
    pub const BOX_BUFFER_SIZE: usize = 9 * 3968;

    pub fn new(counter: u32) -> Self {
        Gen3Slot {
            counter,
            rotation: 0,
            box_buffer: vec![0u8; Self::BOX_BUFFER_SIZE],
            signature: 0x0801_2025,
        }
    }

    pub fn rotated(mut self, rotation: usize) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_record(mut self, box_index: usize, slot: usize, record: &[u8; 80]) -> Self {
        let offset = 4 + (box_index * 30 + slot) * 80;
        self.box_buffer[offset..offset + 80].copy_from_slice(record);
        self
    }

    fn write_into(&self, data: &mut [u8], base: usize) {
        for physical in 0..14 {
            let section_id = (physical + self.rotation) % 14;
            let section = base + physical * 0x1000;
            if section_id >= 5 {
                let start = (section_id - 5) * 3968;
                data[section..section + 3968]
                    .copy_from_slice(&self.box_buffer[start..start + 3968]);
            }
            LittleEndian::write_u16(&mut data[section + 0xFF4..], section_id as u16);
            LittleEndian::write_u32(&mut data[section + 0xFF8..], self.signature);
            LittleEndian::write_u32(&mut data[section + 0xFFC..], self.counter);
        }
    }
}

pub fn gen3_save(slot_a: &Gen3Slot, slot_b: &Gen3Slot) -> Vec<u8> {
    let mut data = vec![0u8; 0x20000];
    slot_a.write_into(&mut data, 0x0000);
    slot_b.write_into(&mut data, 0xE000);
    data
}

/// A boxed gen5 record before encryption.
#[derive(Clone, Copy, Debug)]
pub struct Pk5Builder {
    pub personality_value: u32,
    pub species: u16,
    pub form: u8,
    pub is_egg: bool,
}

impl Pk5Builder {
    pub fn new(personality_value: u32, species: u16) -> Self {
        Pk5Builder {
            personality_value,
            species,
            form: 0,
            is_egg: false,
        }
    }

    pub fn form(mut self, form: u8) -> Self {
        self.form = form;
        self
    }

    pub fn egg(mut self) -> Self {
        self.is_egg = true;
        self
    }

    pub fn encode(&self) -> [u8; 0x88] {
        let selector = (self.personality_value >> 13) & 0x1F;
        let a = physical_position(selector, 'A') * 16;
        let b = physical_position(selector, 'B') * 16;

        let mut words = [0u16; 64];
        words[a] = self.species;
        // Gender bits below the form must be ignored.
        words[b + 12] = u16::from(self.form) << 3 | 0b100;
        if self.is_egg {
            words[b + 9] = 1 << 14;
        }
        let checksum = words.iter().fold(0u16, |sum, word| sum.wrapping_add(*word));
        encrypt_pk5(self.personality_value, 0, checksum, words)
    }
}

/// The game's own encoding of an empty slot: zero header, zero payload, encrypted.
pub fn empty_pk5() -> [u8; 0x88] {
    encrypt_pk5(0, 0, 0, [0u16; 64])
}

fn encrypt_pk5(
    personality_value: u32,
    flags: u16,
    checksum: u16,
    mut words: [u16; 64],
) -> [u8; 0x88] {
    let mut key = u32::from(checksum);
    for word in words.iter_mut() {
        key = key.wrapping_mul(0x41C6_4E6D).wrapping_add(0x6073);
        *word ^= (key >> 16) as u16;
    }

    let mut record = [0u8; 0x88];
    LittleEndian::write_u32(&mut record[0..4], personality_value);
    LittleEndian::write_u16(&mut record[4..6], flags);
    LittleEndian::write_u16(&mut record[6..8], checksum);
    LittleEndian::write_u16_into(&words, &mut record[8..]);
    record
}

pub struct Gen5Save {
    data: Vec<u8>,
    stale_footers: Vec<usize>,
}

impl Gen5Save {
    pub const SIZE: usize = 0x80000;

    /// Every slot holds the encrypted empty record.
    pub fn new() -> Self {
        let mut save = Gen5Save {
            data: vec![0u8; Self::SIZE],
            stale_footers: Vec::new(),
        };
        let empty = empty_pk5();
        for box_index in 0..24 {
            for slot in 0..30 {
                save = save.with_record(box_index, slot, &empty);
            }
        }
        save
    }

    pub fn with_record(mut self, box_index: usize, slot: usize, record: &[u8; 0x88]) -> Self {
        let offset = 0x400 + box_index * 0x1000 + slot * 0x88;
        self.data[offset..offset + 0x88].copy_from_slice(record);
        self
    }

    /// Leaves the footer checksum of `box_index` at zero.
    pub fn stale_footer(mut self, box_index: usize) -> Self {
        self.stale_footers.push(box_index);
        self
    }

    /// Writes each box block's footer checksum, then returns the image.
    pub fn build(mut self) -> Vec<u8> {
        for box_index in 0..24 {
            if self.stale_footers.contains(&box_index) {
                continue;
            }
            let block = 0x400 + box_index * 0x1000;
            let checksum = ccitt(&self.data[block..block + 0xFF0]);
            LittleEndian::write_u16(&mut self.data[block + 0xFF2..], checksum);
        }
        self.data
    }
}

/// Bit-serial CRC-16/CCITT, written separately from the decoder's.
fn ccitt(data: &[u8]) -> u16 {
    let mut crc: u16 = 0xFFFF;
    for byte in data {
        for bit in (0..8).rev() {
            let input = (byte >> bit) & 1 == 1;
            let top = crc & 0x8000 != 0;
            crc <<= 1;
            if input != top {
                crc ^= 0x1021;
            }
        }
    }
    crc
}
