//! Gen 1 internal species index to national dex number. Zero marks an index
//! with no species behind it.

#[rustfmt::skip]
pub(crate) const GEN1_TO_NATIONAL: [u16; 0x100] = [
    /* 0x00 */   0, 112, 115,  32,  35,  21, 100,  34,
    /* 0x08 */  80,   2, 103, 108, 102,  88,  94,  29,
    /* 0x10 */  31, 104, 111, 131,  59, 151, 130,  90,
    /* 0x18 */  72,  92, 123, 120,   9, 127, 114,   0,
    /* 0x20 */   0,  58,  95,  22,  16,  79,  64,  75,
    /* 0x28 */ 113,  67, 122, 106, 107,  24,  47,  54,
    /* 0x30 */  96,  76,   0, 126,   0, 125,  82, 109,
    /* 0x38 */   0,  56,  86,  50, 128,   0,   0,   0,
    /* 0x40 */  83,  48, 149,   0,   0,   0,  84,  60,
    /* 0x48 */ 124, 146, 144, 145, 132,  52,  98,   0,
    /* 0x50 */   0,   0,  37,  38,  25,  26,   0,   0,
    /* 0x58 */ 147, 148, 140, 141, 116, 117,   0,   0,
    /* 0x60 */  27,  28, 138, 139,  39,  40, 133, 136,
    /* 0x68 */ 135, 134,  66,  41,  23,  46,  61,  62,
    /* 0x70 */  13,  14,  15,   0,  85,  57,  51,  49,
    /* 0x78 */  87,   0,   0,  10,  11,  12,  68,   0,
    /* 0x80 */  55,  97,  42, 150, 143, 129,   0,   0,
    /* 0x88 */  89,   0,  99,  91,   0, 101,  36, 110,
    /* 0x90 */  53, 105,   0,  93,  63,  65,  17,  18,
    /* 0x98 */ 121,   1,   3,  73,   0, 118, 119,   0,
    /* 0xA0 */   0,   0,   0,  77,  78,  19,  20,  33,
    /* 0xA8 */  30,  74, 137, 142,   0,  81,   0,   0,
    /* 0xB0 */   4,   7,   5,   8,   6,   0,   0,   0,
    /* 0xB8 */   0,  43,  44,  45,  69,  70,  71,   0,
    /* 0xC0 */   0,   0,   0,   0,   0,   0,   0,   0,
    /* 0xC8 */   0,   0,   0,   0,   0,   0,   0,   0,
    /* 0xD0 */   0,   0,   0,   0,   0,   0,   0,   0,
    /* 0xD8 */   0,   0,   0,   0,   0,   0,   0,   0,
    /* 0xE0 */   0,   0,   0,   0,   0,   0,   0,   0,
    /* 0xE8 */   0,   0,   0,   0,   0,   0,   0,   0,
    /* 0xF0 */   0,   0,   0,   0,   0,   0,   0,   0,
    /* 0xF8 */   0,   0,   0,   0,   0,   0,   0,   0,
];
