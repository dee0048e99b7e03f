pub mod constants;
pub(crate) mod radix;
pub mod tables;

pub use constants::{
    ALPHABET, AXIS_DIGITS, BASE, CODE_DIGITS, CODE_LEN, MAX_DEGREE, MAX_SCALED,
    SEPARATOR, SHORT_CODE_DIGITS,
};
pub use tables::CodecTables;
