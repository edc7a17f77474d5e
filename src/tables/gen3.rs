//! Gen 3 internal species index to national dex number. Indices 252 to 276 are
//! placeholder entries the games never use, so they map to zero.

#[rustfmt::skip]
pub(crate) const GEN3_TO_NATIONAL: [u16; 0x19C] = [
    /* 0x000 */   0,   1,   2,   3,   4,   5,   6,   7,
    /* 0x008 */   8,   9,  10,  11,  12,  13,  14,  15,
    /* 0x010 */  16,  17,  18,  19,  20,  21,  22,  23,
    /* 0x018 */  24,  25,  26,  27,  28,  29,  30,  31,
    /* 0x020 */  32,  33,  34,  35,  36,  37,  38,  39,
    /* 0x028 */  40,  41,  42,  43,  44,  45,  46,  47,
    /* 0x030 */  48,  49,  50,  51,  52,  53,  54,  55,
    /* 0x038 */  56,  57,  58,  59,  60,  61,  62,  63,
    /* 0x040 */  64,  65,  66,  67,  68,  69,  70,  71,
    /* 0x048 */  72,  73,  74,  75,  76,  77,  78,  79,
    /* 0x050 */  80,  81,  82,  83,  84,  85,  86,  87,
    /* 0x058 */  88,  89,  90,  91,  92,  93,  94,  95,
    /* 0x060 */  96,  97,  98,  99, 100, 101, 102, 103,
    /* 0x068 */ 104, 105, 106, 107, 108, 109, 110, 111,
    /* 0x070 */ 112, 113, 114, 115, 116, 117, 118, 119,
    /* 0x078 */ 120, 121, 122, 123, 124, 125, 126, 127,
    /* 0x080 */ 128, 129, 130, 131, 132, 133, 134, 135,
    /* 0x088 */ 136, 137, 138, 139, 140, 141, 142, 143,
    /* 0x090 */ 144, 145, 146, 147, 148, 149, 150, 151,
    /* 0x098 */ 152, 153, 154, 155, 156, 157, 158, 159,
    /* 0x0A0 */ 160, 161, 162, 163, 164, 165, 166, 167,
    /* 0x0A8 */ 168, 169, 170, 171, 172, 173, 174, 175,
    /* 0x0B0 */ 176, 177, 178, 179, 180, 181, 182, 183,
    /* 0x0B8 */ 184, 185, 186, 187, 188, 189, 190, 191,
    /* 0x0C0 */ 192, 193, 194, 195, 196, 197, 198, 199,
    /* 0x0C8 */ 200, 201, 202, 203, 204, 205, 206, 207,
    /* 0x0D0 */ 208, 209, 210, 211, 212, 213, 214, 215,
    /* 0x0D8 */ 216, 217, 218, 219, 220, 221, 222, 223,
    /* 0x0E0 */ 224, 225, 226, 227, 228, 229, 230, 231,
    /* 0x0E8 */ 232, 233, 234, 235, 236, 237, 238, 239,
    /* 0x0F0 */ 240, 241, 242, 243, 244, 245, 246, 247,
    /* 0x0F8 */ 248, 249, 250, 251,   0,   0,   0,   0,
    /* 0x100 */   0,   0,   0,   0,   0,   0,   0,   0,
    /* 0x108 */   0,   0,   0,   0,   0,   0,   0,   0,
    /* 0x110 */   0,   0,   0,   0,   0, 252, 253, 254,
    /* 0x118 */ 255, 256, 257, 258, 259, 260, 261, 262,
    /* 0x120 */ 263, 264, 265, 266, 267, 268, 269, 270,
    /* 0x128 */ 271, 272, 273, 274, 275, 290, 291, 292,
    /* 0x130 */ 276, 277, 285, 286, 327, 278, 279, 283,
    /* 0x138 */ 284, 320, 321, 300, 301, 352, 343, 344,
    /* 0x140 */ 299, 324, 302, 339, 340, 370, 341, 342,
    /* 0x148 */ 349, 350, 318, 319, 328, 329, 330, 296,
    /* 0x150 */ 297, 309, 310, 322, 323, 363, 364, 365,
    /* 0x158 */ 331, 332, 361, 362, 337, 338, 298, 325,
    /* 0x160 */ 326, 311, 312, 303, 307, 308, 333, 334,
    /* 0x168 */ 360, 355, 356, 315, 287, 288, 289, 316,
    /* 0x170 */ 317, 357, 293, 294, 295, 366, 367, 368,
    /* 0x178 */ 359, 353, 354, 336, 335, 369, 304, 305,
    /* 0x180 */ 306, 351, 313, 314, 345, 346, 347, 348,
    /* 0x188 */ 280, 281, 282, 371, 372, 373, 374, 375,
    /* 0x190 */ 376, 377, 378, 379, 382, 383, 384, 380,
    /* 0x198 */ 381, 385, 386, 358,
];
