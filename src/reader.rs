use std::io::{Cursor, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::{DecodeError, Generation};

/// Little-endian random access over a save image. Any read past the end of the
/// image is reported as a corrupt save of `generation`.
pub(crate) struct SaveReader<'a> {
    cursor: Cursor<&'a [u8]>,
    generation: Generation,
}

impl<'a> SaveReader<'a> {
    pub fn new(data: &'a [u8], generation: Generation) -> Self {
        SaveReader {
            cursor: Cursor::new(data),
            generation,
        }
    }

    pub fn len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    pub fn read_u8_at(&mut self, offset: usize) -> Result<u8, DecodeError> {
        self.seek(offset)?;
        self.cursor.read_u8().map_err(|_| self.overrun(offset, 1))
    }

    pub fn read_u16_at(&mut self, offset: usize) -> Result<u16, DecodeError> {
        self.seek(offset)?;
        self.cursor
            .read_u16::<LittleEndian>()
            .map_err(|_| self.overrun(offset, 2))
    }

    pub fn read_u32_at(&mut self, offset: usize) -> Result<u32, DecodeError> {
        self.seek(offset)?;
        self.cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| self.overrun(offset, 4))
    }

    pub fn bytes_at(&self, offset: usize, len: usize) -> Result<&'a [u8], DecodeError> {
        let data: &'a [u8] = *self.cursor.get_ref();
        offset
            .checked_add(len)
            .and_then(|end| data.get(offset..end))
            .ok_or_else(|| self.overrun(offset, len))
    }

    fn seek(&mut self, offset: usize) -> Result<(), DecodeError> {
        self.cursor
            .seek(SeekFrom::Start(offset as u64))
            .map(|_| ())
            .map_err(|_| self.overrun(offset, 0))
    }

    fn overrun(&self, offset: usize, len: usize) -> DecodeError {
        DecodeError::corrupt(
            self.generation,
            format!(
                "read of {len} bytes at {offset:#x} runs past the end of a {} byte file",
                self.len()
            ),
        )
    }
}
