//! Decoders for the PC box storage of handheld save files.
//!
//! Each supported save family has a pure `decode` function that turns the raw image
//! into a [`BoxGrid`]. [`decode_file`] and [`decode_bytes`] pick the decoder from a
//! format tag or by probing.

mod completion;
mod dispatch;
mod error;
mod generation;
mod reader;
mod resolver;
mod slot;

pub mod gen1;
pub mod gen3;
pub mod gen5;
pub mod shuffle;
pub mod tables;

pub use completion::{parse_expected, to_checklist, Progress, SlotStatus};
pub use dispatch::{decode_bytes, decode_file, parse_tag, Decoded, PROBE_ORDER};
pub use error::DecodeError;
pub use generation::Generation;
pub use resolver::Resolver;
pub use slot::{BoxGrid, PcBox, SlotValue, Species};
