use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Serialize, Serializer};

use crate::{
    tables::{self, SpeciesTable},
    Generation,
};

/// One storage box, in slot order.
pub type PcBox = Vec<SlotValue>;

/// Every box of a save, in in-game box order.
pub type BoxGrid = Vec<PcBox>;

/// The content of one box slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlotValue {
    Empty,
    Egg,
    /// Occupied, but by something that could not be identified. Produced by slot
    /// recognizers outside the save decoders.
    Unknown,
    Species(Species),
}

impl SlotValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, SlotValue::Empty)
    }

    pub fn species(&self) -> Option<&Species> {
        match self {
            SlotValue::Species(species) => Some(species),
            _ => None,
        }
    }
}

/// Canonical interchange form: `""`, `"egg"`, `"unknown"`, or a hyphenated species
/// name with an optional `-<form>` suffix.
impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Empty => Ok(()),
            SlotValue::Egg => f.write_str("egg"),
            SlotValue::Unknown => f.write_str("unknown"),
            SlotValue::Species(species) => species.fmt(f),
        }
    }
}

impl Serialize for SlotValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A decoded creature. `national` is always a valid national dex number for
/// `generation`, and `form` is always inside that generation's form list.
#[derive(Clone, Copy, Debug)]
pub struct Species {
    generation: Generation,
    national: u16,
    form: u8,
    form_argument: u32,
}

impl Species {
    pub(crate) fn new(generation: Generation, national: u16, form: u8, form_argument: u32) -> Self {
        Species {
            generation,
            national,
            form,
            form_argument,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn national(&self) -> u16 {
        self.national
    }

    /// The form index exactly as stored in the save.
    pub fn form(&self) -> u8 {
        self.form
    }

    pub fn form_argument(&self) -> u32 {
        self.form_argument
    }

    pub fn name(&self) -> &'static str {
        tables::species_name(self.national).unwrap_or_default()
    }

    /// The form as far as living dex completion is concerned: zero for species whose
    /// alternate forms are ignored in this generation.
    pub fn normalized_form(&self) -> u8 {
        if tables::ignores_alternate_forms(self.generation, self.national) {
            0
        } else {
            self.form
        }
    }

    /// Name of the distinguishing form, if any.
    pub fn form_name(&self) -> Option<&'static str> {
        let entry = SpeciesTable::for_generation(self.generation).by_national(self.national)?;
        entry
            .forms()
            .get(usize::from(self.normalized_form()))
            .copied()
            .filter(|form| !form.is_empty())
    }

    /// Human readable name, e.g. `Unown Question` or `Rotom Wash`.
    pub fn display_name(&self) -> String {
        let mut name = title_case(self.name());
        if let Some(form) = self.form_name() {
            name.push(' ');
            name.push_str(&title_case(form));
        }
        if self.form_argument != 0 {
            name.push_str(&format!(" #{}", self.form_argument));
        }
        name
    }

    fn key(&self) -> (u16, u8, u32) {
        (self.national, self.normalized_form(), self.form_argument)
    }
}

impl PartialEq for Species {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Species {}

impl Hash for Species {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        if let Some(form) = self.form_name() {
            write!(f, "-{form}")?;
        }
        Ok(())
    }
}

fn title_case(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
