use crate::{
    slot::{SlotValue, Species},
    tables::{SpeciesEntry, SpeciesTable},
    DecodeError, Generation,
};

/// Turns decoded species and form numbers into slot values for one generation.
#[derive(Clone, Copy, Debug)]
pub struct Resolver {
    table: SpeciesTable,
}

impl Resolver {
    pub fn new(generation: Generation) -> Self {
        Resolver {
            table: SpeciesTable::for_generation(generation),
        }
    }

    pub fn generation(&self) -> Generation {
        self.table.generation()
    }

    /// Resolves a stored species identifier and form index. Unknown identifiers and
    /// out-of-range forms are corruption; form bits on single-form species are dropped.
    pub fn species(&self, id: u16, form: u8) -> Result<SlotValue, DecodeError> {
        let generation = self.generation();
        let entry = self.table.get(id).ok_or_else(|| {
            DecodeError::corrupt(generation, format!("unknown species id {id:#05x}"))
        })?;

        let form = match entry {
            SpeciesEntry::Simple { .. } => 0,
            SpeciesEntry::WithForms { name, forms, .. } => {
                if usize::from(form) >= forms.len() {
                    return Err(DecodeError::corrupt(
                        generation,
                        format!("form {form} out of range for {name}"),
                    ));
                }
                form
            }
        };

        Ok(SlotValue::Species(Species::new(
            generation,
            entry.national(),
            form,
            0,
        )))
    }
}
