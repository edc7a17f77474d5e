//! Static species and form tables.
//!
//! Every generation resolves its own numeric species identifier to a national dex
//! number first; names and form lists are then looked up by national number. The
//! tables are plain constant data and are never mutated.

mod forms;
mod gen1;
mod gen3;
mod national;

pub(crate) use forms::{ignores_alternate_forms, UNOWN, UNOWN_LETTERS};

use crate::Generation;
use gen1::GEN1_TO_NATIONAL;
use gen3::GEN3_TO_NATIONAL;
use national::{NATIONAL_DEX_SIZE, SPECIES_NAMES};

/// What a generation's species identifier resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeciesEntry {
    Simple {
        national: u16,
        name: &'static str,
    },
    WithForms {
        national: u16,
        name: &'static str,
        forms: &'static [&'static str],
    },
}

impl SpeciesEntry {
    pub fn national(&self) -> u16 {
        match *self {
            SpeciesEntry::Simple { national, .. } | SpeciesEntry::WithForms { national, .. } => {
                national
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            SpeciesEntry::Simple { name, .. } | SpeciesEntry::WithForms { name, .. } => name,
        }
    }

    pub fn forms(&self) -> &'static [&'static str] {
        match *self {
            SpeciesEntry::Simple { .. } => &[],
            SpeciesEntry::WithForms { forms, .. } => forms,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Index {
    Mapped(&'static [u16]),
    National,
}

/// Species lookup for one generation.
#[derive(Clone, Copy, Debug)]
pub struct SpeciesTable {
    generation: Generation,
    index: Index,
}

impl SpeciesTable {
    pub fn for_generation(generation: Generation) -> Self {
        let index = match generation {
            Generation::Gen1 => Index::Mapped(&GEN1_TO_NATIONAL),
            Generation::Gen3 => Index::Mapped(&GEN3_TO_NATIONAL),
            Generation::Gen5 => Index::National,
        };
        SpeciesTable { generation, index }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Resolves an identifier as stored in this generation's saves.
    pub fn get(&self, id: u16) -> Option<SpeciesEntry> {
        let national = match self.index {
            Index::Mapped(table) => *table.get(usize::from(id))?,
            Index::National => id,
        };
        self.by_national(national)
    }

    /// Resolves a national dex number within this generation.
    pub fn by_national(&self, national: u16) -> Option<SpeciesEntry> {
        let name = species_name(national)?;
        Some(match forms::forms(self.generation, national) {
            Some(forms) => SpeciesEntry::WithForms {
                national,
                name,
                forms,
            },
            None => SpeciesEntry::Simple { national, name },
        })
    }
}

/// Canonical lowercase, hyphenated name of a national dex species.
pub fn species_name(national: u16) -> Option<&'static str> {
    let national = usize::from(national);
    if national == 0 || national >= NATIONAL_DEX_SIZE {
        return None;
    }
    Some(SPECIES_NAMES[national])
}
