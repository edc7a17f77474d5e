use std::{io, path::PathBuf};

use thiserror::Error;

use crate::Generation;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// No decoder accepts the input, or the requested format tag is unknown.
    #[error("unrecognized save format: {0}")]
    UnrecognizedFormat(String),
    /// A decoder accepted the overall shape of the file but its contents are inconsistent.
    #[error("corrupt {generation} save: {reason}")]
    CorruptSave {
        generation: Generation,
        reason: String,
    },
    #[error("failed to read save file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DecodeError {
    pub(crate) fn unrecognized(reason: impl Into<String>) -> Self {
        DecodeError::UnrecognizedFormat(reason.into())
    }

    pub(crate) fn corrupt(generation: Generation, reason: impl Into<String>) -> Self {
        DecodeError::CorruptSave {
            generation,
            reason: reason.into(),
        }
    }

    /// Prefixes a corruption reason with the box and slot it was found in.
    pub(crate) fn in_slot(self, box_index: usize, slot: usize) -> Self {
        match self {
            DecodeError::CorruptSave { generation, reason } => DecodeError::CorruptSave {
                generation,
                reason: format!("box {} slot {}: {reason}", box_index + 1, slot + 1),
            },
            other => other,
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, DecodeError::UnrecognizedFormat(_))
    }
}
