mod common;

use common::{physical_position, Gen5Save, Pk5Builder};
use livingdex::{gen5, DecodeError, Generation, SlotValue};

const UNOWN: u16 = 201;
const DEOXYS: u16 = 386;
const ROTOM: u16 = 479;
const ARCEUS: u16 = 493;
const DEERLING: u16 = 585;
const KYUREM: u16 = 646;
const GENESECT: u16 = 649;

#[test]
fn test_empty_save_decodes_to_empty_grid() {
    let boxes = gen5::decode(&Gen5Save::new().build()).unwrap();
    assert_eq!(boxes.len(), 24);
    assert!(boxes.iter().all(|pc_box| pc_box.len() == 30));
    assert!(boxes.iter().flatten().all(SlotValue::is_empty));
}

#[test]
fn test_species_and_forms() {
    let data = Gen5Save::new()
        .with_record(0, 0, &Pk5Builder::new(0x1111_1111, 1).encode())
        .with_record(0, 1, &Pk5Builder::new(0x2222_2222, ROTOM).form(5).encode())
        .with_record(0, 2, &Pk5Builder::new(0x3333_3333, ROTOM).encode())
        .with_record(3, 29, &Pk5Builder::new(0x4444_4444, DEERLING).form(2).encode())
        .with_record(23, 0, &Pk5Builder::new(0x5555_5555, DEOXYS).form(3).encode())
        .with_record(23, 29, &Pk5Builder::new(0x6666_6666, 649).egg().encode())
        .build();

    let boxes = gen5::decode(&data).unwrap();
    assert_eq!(boxes[0][0].to_string(), "bulbasaur");
    assert_eq!(boxes[0][1].to_string(), "rotom-mow");
    assert_eq!(boxes[0][2].to_string(), "rotom");
    assert_eq!(boxes[3][29].to_string(), "deerling-autumn");
    assert_eq!(boxes[23][0].to_string(), "deoxys-speed");
    assert_eq!(boxes[23][29], SlotValue::Egg);
}

#[test]
fn test_ignored_forms_are_not_distinguished() {
    let data = Gen5Save::new()
        .with_record(0, 0, &Pk5Builder::new(0x100, KYUREM).form(1).encode())
        .with_record(0, 1, &Pk5Builder::new(0x200, KYUREM).encode())
        .with_record(0, 2, &Pk5Builder::new(0x300, GENESECT).form(4).encode())
        .with_record(0, 3, &Pk5Builder::new(0x400, ARCEUS).form(9).encode())
        .build();

    let boxes = gen5::decode(&data).unwrap();
    assert_eq!(boxes[0][2].to_string(), "genesect");
    // The stored form is still available to callers that want it.
    assert_eq!(boxes[0][2].species().map(|s| s.form()), Some(4));
    assert_eq!(boxes[0][3].to_string(), "arceus");

    // Kyurem fusions are real box forms.
    assert_eq!(boxes[0][0].to_string(), "kyurem-white");
    assert_eq!(boxes[0][1].to_string(), "kyurem");
    assert_ne!(boxes[0][0], boxes[0][1]);
}

#[test]
fn test_black_kyurem() {
    let data = Gen5Save::new()
        .with_record(5, 5, &Pk5Builder::new(0x700, KYUREM).form(2).encode())
        .build();
    assert_eq!(gen5::decode(&data).unwrap()[5][5].to_string(), "kyurem-black");
}

#[test]
fn test_every_shuffle_order() {
    // Selectors 24 to 31 wrap around to the start of the table.
    for selector in 0..32u32 {
        let personality_value = selector << 13 | 0xA500_00A5;
        let species = 100 + selector as u16;
        let record = Pk5Builder::new(personality_value, species).encode();

        let mut words = [0u16; gen5::PAYLOAD_WORDS];
        for (word, bytes) in words.iter_mut().zip(record[8..].chunks_exact(2)) {
            *word = u16::from_le_bytes([bytes[0], bytes[1]]);
        }
        gen5::crypt_words(&mut words, u16::from_le_bytes([record[6], record[7]]));
        assert_eq!(words[physical_position(selector, 'A') * 16], species);

        let data = Gen5Save::new()
            .with_record(1, 0, &record)
            .with_record(1, 1, &Pk5Builder::new(personality_value, species).egg().encode())
            .build();
        let boxes = gen5::decode(&data).unwrap();

        let expected = livingdex::tables::species_name(species).unwrap();
        assert_eq!(boxes[1][0].to_string(), expected, "selector {selector}");
        assert_eq!(boxes[1][1], SlotValue::Egg, "selector {selector}");
    }
}

#[test]
fn test_unown_forms() {
    let mut save = Gen5Save::new();
    for letter in 0..28u8 {
        let record = Pk5Builder::new(0x1000 * u32::from(letter), UNOWN)
            .form(letter)
            .encode();
        save = save.with_record(2, usize::from(letter), &record);
    }
    let boxes = gen5::decode(&save.build()).unwrap();
    assert_eq!(boxes[2][0].to_string(), "unown-a");
    assert_eq!(boxes[2][25].to_string(), "unown-z");
    assert_eq!(boxes[2][26].to_string(), "unown-exclamation");
    assert_eq!(boxes[2][27].to_string(), "unown-question");
}

#[test]
fn test_out_of_range_form_is_corrupt() {
    let data = Gen5Save::new()
        .with_record(0, 0, &Pk5Builder::new(0x100, ROTOM).form(6).encode())
        .build();
    assert!(matches!(
        gen5::decode(&data),
        Err(DecodeError::CorruptSave {
            generation: Generation::Gen5,
            ..
        })
    ));
}

#[test]
fn test_checksum_mismatch_is_corrupt() {
    let mut record = Pk5Builder::new(0xABCD, 25).encode();
    record[0x40] ^= 0x80;
    let data = Gen5Save::new().with_record(4, 9, &record).build();

    match gen5::decode(&data).unwrap_err() {
        DecodeError::CorruptSave { generation, reason } => {
            assert_eq!(generation, Generation::Gen5);
            assert!(reason.starts_with("box 5 slot 10"), "{reason}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_raw_zero_slot_is_corrupt() {
    // Empty slots are stored encrypted; plain zero bytes decrypt to noise.
    let data = Gen5Save::new().with_record(0, 0, &[0u8; 0x88]).build();
    assert!(matches!(
        gen5::decode(&data),
        Err(DecodeError::CorruptSave { .. })
    ));
}

#[test]
fn test_blank_image_is_not_gen5() {
    for fill in [0x00u8, 0xFF] {
        let data = vec![fill; Gen5Save::SIZE];
        assert!(
            matches!(gen5::decode(&data), Err(DecodeError::UnrecognizedFormat(_))),
            "fill {fill:#04x}"
        );
    }
}

#[test]
fn test_no_valid_footer_is_not_gen5() {
    let mut save = Gen5Save::new();
    for box_index in 0..24 {
        save = save.stale_footer(box_index);
    }
    assert!(gen5::decode(&save.build()).unwrap_err().is_unrecognized());
}

#[test]
fn test_one_stale_footer_is_corrupt() {
    let data = Gen5Save::new()
        .with_record(0, 0, &Pk5Builder::new(0x55, 25).encode())
        .stale_footer(6)
        .build();
    match gen5::decode(&data).unwrap_err() {
        DecodeError::CorruptSave { generation, reason } => {
            assert_eq!(generation, Generation::Gen5);
            assert!(reason.contains("[7]"), "{reason}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_footer_covers_record_bytes() {
    let mut data = Gen5Save::new()
        .with_record(2, 3, &Pk5Builder::new(0x55, 25).encode())
        .build();
    // A flipped bit after the footer was written.
    data[0x400 + 2 * gen5::BOX_STRIDE + 3 * gen5::PK5_SIZE_BOX + 0x10] ^= 0x01;
    assert!(matches!(
        gen5::decode(&data),
        Err(DecodeError::CorruptSave { .. })
    ));
}

#[test]
fn test_size_bounds() {
    let mut data = Gen5Save::new().build();
    data.extend_from_slice(&[0u8; 0x7A]);
    assert!(gen5::decode(&data).is_ok());

    data.resize(0x80100, 0);
    assert!(gen5::decode(&data).unwrap_err().is_unrecognized());
    data.truncate(0x7FFFF);
    assert!(gen5::decode(&data).unwrap_err().is_unrecognized());
}

#[test]
fn test_decoding_is_deterministic() {
    let data = Gen5Save::new()
        .with_record(7, 7, &Pk5Builder::new(0xFEED_F00D, DEERLING).form(3).encode())
        .build();
    assert_eq!(gen5::decode(&data).unwrap(), gen5::decode(&data).unwrap());
}
