use std::{
    io::{self, Read},
    path::Path,
};

use num_traits::FromPrimitive;
use serde::Serialize;

use crate::{gen1, gen3, gen5, BoxGrid, DecodeError, Generation};

type DecodeFn = fn(&[u8]) -> Result<BoxGrid, DecodeError>;

/// Decoders tried, in order, when no format tag is given.
pub const PROBE_ORDER: [Generation; 3] = [Generation::Gen1, Generation::Gen3, Generation::Gen5];

/// A decoded save and the format that accepted it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub format: Generation,
    pub boxes: BoxGrid,
}

fn decoder(generation: Generation) -> DecodeFn {
    match generation {
        Generation::Gen1 => gen1::decode,
        Generation::Gen3 => gen3::decode,
        Generation::Gen5 => gen5::decode,
    }
}

/// Parses a format tag such as `gen3` or `gen5-<variant>`. No sub-variants are
/// defined, so any variant suffix is rejected.
pub fn parse_tag(tag: &str) -> Result<Generation, DecodeError> {
    let (family, variant) = match tag.split_once('-') {
        Some((family, variant)) => (family, Some(variant)),
        None => (tag, None),
    };

    let generation = family
        .strip_prefix("gen")
        .and_then(|number| number.parse::<u8>().ok())
        .and_then(Generation::from_u8)
        .ok_or_else(|| DecodeError::unrecognized(format!("unknown format tag '{tag}'")))?;

    match variant {
        None | Some("") => Ok(generation),
        Some(variant) => Err(DecodeError::unrecognized(format!(
            "{generation} has no variant '{variant}'"
        ))),
    }
}

/// Decodes a save image. With a tag only that decoder runs; without one each decoder
/// is probed in `PROBE_ORDER` and the first to accept the input wins.
pub fn decode_bytes(bytes: &[u8], tag: Option<&str>) -> Result<Decoded, DecodeError> {
    if let Some(tag) = tag {
        let format = parse_tag(tag)?;
        let boxes = decoder(format)(bytes)?;
        return Ok(Decoded { format, boxes });
    }

    for format in PROBE_ORDER {
        match decoder(format)(bytes) {
            Ok(boxes) => {
                log::debug!("Save accepted by the {format} decoder");
                return Ok(Decoded { format, boxes });
            }
            Err(err) if err.is_unrecognized() => {
                log::debug!("{format} decoder declined: {err}");
            }
            Err(err) => return Err(err),
        }
    }

    Err(DecodeError::unrecognized(format!(
        "no decoder accepts a {} byte file",
        bytes.len()
    )))
}

pub fn decode_file(path: impl AsRef<Path>, tag: Option<&str>) -> Result<Decoded, DecodeError> {
    let path = path.as_ref();
    let read_error = |source: io::Error| DecodeError::Read {
        path: path.to_path_buf(),
        source,
    };

    if !path.is_file() {
        return Err(read_error(io::ErrorKind::NotFound.into()));
    }
    let file = std::fs::File::open(path).map_err(read_error)?;
    let mut reader = io::BufReader::new(file);
    let mut full_contents = Vec::new();
    let read_len = reader.read_to_end(&mut full_contents).map_err(read_error)?;
    log::info!("Read {read_len} bytes from {}", path.display());

    decode_bytes(&full_contents, tag)
}
