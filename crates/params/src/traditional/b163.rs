//! NIST B-163: Y^2 + XY = X^3 + X^2 + B over GF(2^163)
//!
//! Reduction polynomial x^163 + x^7 + x^6 + x^3 + 1.

/// Field degree m
pub const M: usize = 163;
/// Reduction polynomial exponent a
pub const A_EXP: usize = 7;
/// Reduction polynomial exponent b
pub const B_EXP: usize = 6;
/// Reduction polynomial exponent c
pub const C_EXP: usize = 3;

/// 32-bit words per field element (6 * 32 > 163)
pub const WORDS: usize = 6;

/// Curve coefficient A (the constant 1)
pub const COEFF_A: [u32; WORDS] = [1, 0, 0, 0, 0, 0];

/// Curve ROM: B, the group order q, then the generator G(x, y).
/// Each value is `WORDS` little-endian words.
pub const ROM: [u32; 4 * WORDS] = [
    0x4A3205FD, 0x512F7874, 0x1481EB10, 0xB8C953CA, 0x0A601907, 0x00000002,
    0xA4234C33, 0x77E70C12, 0x000292FE, 0x00000000, 0x00000000, 0x00000004,
    0xE8343E36, 0xD4994637, 0xA0991168, 0x86A2D57E, 0xF0EBA162, 0x00000003,
    0x797324F1, 0xB11C5C0C, 0xA2CDD545, 0x71A0094F, 0xD51FBC6C, 0x00000000,
];

/// Brick window size in bits
pub const WINDOW: usize = 4;

/// Brick comb length in bits; scalars must be below 2^COMB_LENGTH
pub const COMB_LENGTH: usize = M;

/// Entries in the brick table (2^WINDOW)
pub const BRICK_ENTRIES: usize = 1 << WINDOW;

/// Fixed-base comb table for G with a window of 4 over 163 bits.
///
/// Entry `i` is `x` followed by `y`, each `WORDS` little-endian words, and
/// holds `sum_j bit_j(i) * 2^(41 j) * G`.
pub const BRICK_ROM: [u32; 2 * WORDS * BRICK_ENTRIES] = [
    // entry 0: point at infinity sentinel
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    // entry 1: G
    0xE8343E36, 0xD4994637, 0xA0991168, 0x86A2D57E, 0xF0EBA162, 0x00000003,
    0x797324F1, 0xB11C5C0C, 0xA2CDD545, 0x71A0094F, 0xD51FBC6C, 0x00000000,
    0x05FD9372, 0xAA17FDF2, 0x6648E974, 0x31DD5C03, 0x75F1F527, 0x00000002,
    0xDCF990E0, 0x79117C6A, 0x5D2FF662, 0x9865BDB2, 0xB0914960, 0x00000000,
    0x78A887A6, 0xE478FE58, 0x3D3D2364, 0x3B85B263, 0x34C6885E, 0x00000005,
    0xEF273598, 0xA6D7E436, 0x53001BD9, 0x75CC731C, 0xBF414F74, 0x00000003,
    0x4F685F08, 0x6F8DAF88, 0xD1C71B1F, 0x6F4913FF, 0xBAA8682A, 0x00000002,
    0xD5301336, 0xB4F6DD1E, 0x6454423B, 0x04EBAF45, 0x65C6E401, 0x00000002,
    0xA700C73D, 0x6F842A26, 0xE8F5F5FD, 0x04DB6DA9, 0x48FCDC95, 0x00000006,
    0x1DB757CB, 0xB5BF42BA, 0xABFD25B4, 0x466E5BE3, 0x2CF27012, 0x00000007,
    0xEB7AD12E, 0x47E38E87, 0x5F9C4EF1, 0x2FCD5483, 0x3893822E, 0x00000000,
    0x7C98BF09, 0xA41F9589, 0x680CA2A3, 0xDFA83842, 0xEDD41659, 0x00000001,
    0xA3463D19, 0xAF8C4BB0, 0x2288658A, 0x84B3C40D, 0x90CD449B, 0x00000002,
    0x6BB4BF11, 0x5E996AFA, 0x9B2AE97A, 0xFF211307, 0xFBF58239, 0x00000005,
    0x4AB8C649, 0x2FCF02EE, 0x3C7EFB85, 0x76F09AD9, 0xDBCA45DA, 0x00000007,
    0xEEBA93AF, 0x59ADF276, 0xD25E3760, 0x3292B2C1, 0x271D1B84, 0x00000004,
    0x37F9391C, 0xF423FD60, 0xBF079624, 0x4C9036E0, 0x63075E19, 0x00000004,
    0xB726DFB5, 0x38C349B3, 0x6E0988B7, 0x87B54141, 0x0CB8D73B, 0x00000002,
    0xD1ACDB88, 0x64CA1FCC, 0x690DFA73, 0xC6708B6F, 0xB44B3919, 0x00000002,
    0x2B3F67D9, 0xC01CCB1E, 0x5311DCC8, 0xDB9FDD9A, 0x9118031E, 0x00000000,
    0x9A5C0D6E, 0x4E99152F, 0xAF853232, 0x8DB0DCCC, 0xEF0F58D7, 0x00000005,
    0x6DB63148, 0xEFDD7E0A, 0xCC819E67, 0x56A979BC, 0x8D1169B4, 0x00000003,
    0x8670B917, 0x3D61A2AC, 0x6ED8588A, 0x5CC94655, 0x8096413E, 0x00000002,
    0xD8715F72, 0xC2CE06E6, 0xD50C5C77, 0x1553A69B, 0x8A20FADC, 0x00000002,
    0x9DD077B2, 0xB2978893, 0x7AA617BB, 0xADBAC172, 0xF57DA9A2, 0x00000001,
    0x6800BBE2, 0x837AD74E, 0xDAC7CD95, 0x1082C382, 0xB5EC04B2, 0x00000000,
    0x43835328, 0xA986D58B, 0x8D7F7C4E, 0xFD642A8D, 0x6D4462D4, 0x00000003,
    0xF19901E9, 0x60993930, 0x67C98E9B, 0x1AB9C90D, 0x5D7F4593, 0x00000006,
    0x39E10752, 0xDE366730, 0xA867DB73, 0x5BCB53B5, 0x6B5E56C0, 0x00000003,
    0xAF59DCAA, 0x8BDBF9FF, 0x2221C861, 0x52B45C1A, 0x221A9B1F, 0x00000006,
];
