//! Comparison of a decoded box grid against an expected checklist.
//!
//! A checklist has one line per box and comma-separated canonical slot strings. An
//! empty expected slot is filler: nothing needs to go there.

use serde::Serialize;

use crate::{BoxGrid, SlotValue};

/// Parses checklist text. An empty line is a box with no slots; a single trailing
/// newline is ignored.
pub fn parse_expected(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_suffix('\r').unwrap_or(text);
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| {
            if line.is_empty() {
                Vec::new()
            } else {
                line.split(',').map(str::to_owned).collect()
            }
        })
        .collect()
}

/// Renders a grid in checklist form, the inverse of [`parse_expected`].
pub fn to_checklist(boxes: &BoxGrid) -> String {
    boxes
        .iter()
        .map(|pc_box| {
            pc_box
                .iter()
                .map(SlotValue::to_string)
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SlotStatus {
    Filler,
    Caught,
    Missing,
    Wrong { found: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub caught: usize,
    pub total: usize,
    pub boxes: Vec<Vec<SlotStatus>>,
}

impl Progress {
    pub fn compute(expected: &[Vec<String>], boxes: &BoxGrid) -> Self {
        let statuses: Vec<Vec<SlotStatus>> = expected
            .iter()
            .enumerate()
            .map(|(box_index, expected_box)| {
                expected_box
                    .iter()
                    .enumerate()
                    .map(|(slot, wanted)| {
                        let found = boxes.get(box_index).and_then(|b| b.get(slot));
                        slot_status(wanted, found)
                    })
                    .collect()
            })
            .collect();

        let (caught, total) = statuses
            .iter()
            .flatten()
            .fold((0, 0), |(caught, total), status| match status {
                SlotStatus::Filler => (caught, total),
                SlotStatus::Caught => (caught + 1, total + 1),
                _ => (caught, total + 1),
            });

        Progress {
            caught,
            total,
            boxes: statuses,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.caught == self.total
    }
}

fn slot_status(wanted: &str, found: Option<&SlotValue>) -> SlotStatus {
    if wanted.is_empty() {
        return SlotStatus::Filler;
    }
    match found {
        None | Some(SlotValue::Empty) => SlotStatus::Missing,
        Some(value) => {
            let found = value.to_string();
            if found == wanted {
                SlotStatus::Caught
            } else {
                SlotStatus::Wrong { found }
            }
        }
    }
}
