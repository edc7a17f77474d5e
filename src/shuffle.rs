//! Sub-block ordering shared by the encrypted record formats.
//!
//! A record's data area holds four equally sized sub-blocks whose physical order is
//! one of the 24 permutations of four items. Each entry gives the physical position
//! of logical block A, B, C and D, in that order.

/// Logical sub-blocks. Gen 3 calls them growth, attacks, EVs/condition and misc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

#[rustfmt::skip]
pub const SHUFFLE_TABLE: [[u8; 4]; 24] = [
    [0, 1, 2, 3], [0, 1, 3, 2], [0, 2, 1, 3], [0, 3, 1, 2], [0, 2, 3, 1], [0, 3, 2, 1],
    [1, 0, 2, 3], [1, 0, 3, 2], [2, 0, 1, 3], [3, 0, 1, 2], [2, 0, 3, 1], [3, 0, 2, 1],
    [1, 2, 0, 3], [1, 3, 0, 2], [2, 1, 0, 3], [3, 1, 0, 2], [2, 3, 0, 1], [3, 2, 0, 1],
    [1, 2, 3, 0], [1, 3, 2, 0], [2, 1, 3, 0], [3, 1, 2, 0], [2, 3, 1, 0], [3, 2, 1, 0],
];

/// Physical position (0-3) of `block` for a shuffle selector. The selector is reduced
/// mod 24 here, so callers pass whatever their format derives from the personality value.
pub fn block_position(selector: u32, block: Block) -> usize {
    usize::from(SHUFFLE_TABLE[(selector % 24) as usize][block as usize])
}

/// Byte offset of `block` within the data area.
pub fn block_offset(selector: u32, block: Block, block_size: usize) -> usize {
    block_position(selector, block) * block_size
}
