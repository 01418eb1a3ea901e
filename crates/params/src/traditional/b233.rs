//! NIST B-233: Y^2 + XY = X^3 + X^2 + B over GF(2^233)
//!
//! Reduction trinomial x^233 + x^74 + 1. No brick table is shipped for this
//! curve; it is generated from G when a context is built.

/// Field degree m
pub const M: usize = 233;
/// Reduction polynomial exponent a
pub const A_EXP: usize = 74;
/// Unused for a trinomial
pub const B_EXP: usize = 0;
/// Unused for a trinomial
pub const C_EXP: usize = 0;

/// 32-bit words per field element (8 * 32 > 233)
pub const WORDS: usize = 8;

/// Curve coefficient A (the constant 1)
pub const COEFF_A: [u32; WORDS] = [1, 0, 0, 0, 0, 0, 0, 0];

/// Curve ROM: B, the group order q, then the generator G(x, y).
pub const ROM: [u32; 4 * WORDS] = [
    0x7D8F90AD, 0x81FE115F, 0x20E9CE42, 0x213B333B, 0x0923BB58, 0x332C7F8C, 0x647EDE6C, 0x00000066,
    0x03CFE0D7, 0x22031D26, 0xE72F8A69, 0x0013E974, 0x00000000, 0x00000000, 0x00000000, 0x00000100,
    0x71FD558B, 0xF8F8EB73, 0x391F8B36, 0x5FEF65BC, 0x39F1BB75, 0x8313BB21, 0xC9DFCBAC, 0x000000FA,
    0x01F81052, 0x36716F7E, 0xF867A7CA, 0xBF8A0BEF, 0xE58528BE, 0x03350678, 0x6A08A419, 0x00000100,
];

/// Brick window size in bits
pub const WINDOW: usize = 4;

/// Brick comb length in bits
pub const COMB_LENGTH: usize = M;

/// Entries in the brick table (2^WINDOW)
pub const BRICK_ENTRIES: usize = 1 << WINDOW;
