//! Sizes for ECDH over the named binary curves

/// Bytes in a B-163 field element or scalar (⌈163 / 8⌉)
pub const ECDH_B163_FIELD_ELEMENT_SIZE: usize = 21;

/// Bytes in a compressed B-163 public value: tag byte + x-coordinate
pub const ECDH_B163_PUBLIC_KEY_SIZE: usize = 1 + ECDH_B163_FIELD_ELEMENT_SIZE;

/// Bytes in a B-163 private scalar
pub const ECDH_B163_PRIVATE_KEY_SIZE: usize = ECDH_B163_FIELD_ELEMENT_SIZE;

/// Bytes in a B-163 shared secret (the shared x-coordinate)
pub const ECDH_B163_SHARED_SECRET_SIZE: usize = ECDH_B163_FIELD_ELEMENT_SIZE;

/// Bytes in a B-233 field element or scalar (⌈233 / 8⌉)
pub const ECDH_B233_FIELD_ELEMENT_SIZE: usize = 30;

/// Bytes in a compressed B-233 public value: tag byte + x-coordinate
pub const ECDH_B233_PUBLIC_KEY_SIZE: usize = 1 + ECDH_B233_FIELD_ELEMENT_SIZE;
