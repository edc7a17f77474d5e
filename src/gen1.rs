//! Gen 1 cartridge saves.
//!
//! Boxes are plain species lists: a count byte, one internal index per creature and
//! an `0xFF` terminator. Two SRAM banks hold six boxes each, except the box the
//! player has selected, which the game keeps in the working area at
//! `CURRENT_BOX_OFFSET` instead of its bank slot.

use std::ops::RangeInclusive;

use crate::{
    reader::SaveReader, resolver::Resolver, BoxGrid, DecodeError, Generation, PcBox, SlotValue,
};

const GENERATION: Generation = Generation::Gen1;

const SAVE_SIZE: RangeInclusive<usize> = 0x8000..=0x8030;
const CURRENT_BOX_OFFSET: usize = 0x30C0;
const CURRENT_BOX_NUMBER_OFFSET: usize = 0x284C;
const CURRENT_BOX_NUMBER_MASK: u8 = 0x7F;
const BANK_2_OFFSET: usize = 0x4000;
const BANK_3_OFFSET: usize = 0x6000;
const BOXES_PER_BANK: usize = 6;
const BOX_SIZE: usize = 0x462;
const LIST_TERMINATOR: u8 = 0xFF;
const NUMBER_OF_BOXES: usize = 12;
const SLOTS_PER_BOX: usize = 20;

pub fn decode(data: &[u8]) -> Result<BoxGrid, DecodeError> {
    if !SAVE_SIZE.contains(&data.len()) {
        return Err(DecodeError::unrecognized(format!(
            "{} bytes is not a gen1 save size",
            data.len()
        )));
    }

    let mut reader = SaveReader::new(data, GENERATION);
    validate_current_box(&mut reader)?;

    let current_box =
        usize::from(reader.read_u8_at(CURRENT_BOX_NUMBER_OFFSET)? & CURRENT_BOX_NUMBER_MASK);
    log::debug!("Current box index is {current_box}");
    if current_box >= NUMBER_OF_BOXES {
        log::warn!("Current box index {current_box} is out of range, reading all boxes from banks");
    }

    let resolver = Resolver::new(GENERATION);
    (0..NUMBER_OF_BOXES)
        .map(|box_index| {
            let offset = if box_index == current_box {
                CURRENT_BOX_OFFSET
            } else {
                box_offset(box_index)
            };
            read_box(&mut reader, &resolver, box_index, offset)
        })
        .collect()
}

/// Location of a box in its SRAM bank.
pub fn box_offset(box_index: usize) -> usize {
    let bank = if box_index < BOXES_PER_BANK {
        BANK_2_OFFSET
    } else {
        BANK_3_OFFSET
    };
    bank + BOX_SIZE * (box_index % BOXES_PER_BANK)
}

/// The working copy of the current box is the signature of this format: a count
/// within range followed directly by the list terminator.
fn validate_current_box(reader: &mut SaveReader) -> Result<(), DecodeError> {
    let count = usize::from(reader.read_u8_at(CURRENT_BOX_OFFSET)?);
    if count > SLOTS_PER_BOX {
        return Err(DecodeError::unrecognized(format!(
            "gen1 current box holds {count} entries"
        )));
    }
    if reader.read_u8_at(CURRENT_BOX_OFFSET + 1 + count)? != LIST_TERMINATOR {
        return Err(DecodeError::unrecognized(
            "gen1 current box list is not terminated",
        ));
    }
    Ok(())
}

fn read_box(
    reader: &mut SaveReader,
    resolver: &Resolver,
    box_index: usize,
    offset: usize,
) -> Result<PcBox, DecodeError> {
    let count = usize::from(reader.read_u8_at(offset)?);
    if count > SLOTS_PER_BOX {
        return Err(DecodeError::corrupt(
            GENERATION,
            format!("box {} at {offset:#x} claims {count} entries", box_index + 1),
        ));
    }
    log::trace!("Box {} at {offset:#x} holds {count} entries", box_index + 1);

    let mut pc_box = reader
        .bytes_at(offset + 1, count)?
        .iter()
        .map(|&index| resolver.species(u16::from(index), 0))
        .collect::<Result<PcBox, _>>()?;
    pc_box.resize(SLOTS_PER_BOX, SlotValue::Empty);
    Ok(pc_box)
}
