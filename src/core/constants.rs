/// Tripcode digit symbols, ordered by digit value.
///
/// Vowels, `0`, `1` and the letters easily mistaken for them are left out so codes
/// survive being read aloud or typed by hand.
pub const ALPHABET: &[u8; 28] = b"23456789BCDFGHJKLMNPQRSTVWXZ";

/// Numeral base of a tripcode digit
pub const BASE: u64 = ALPHABET.len() as u64;

/// Number of digits in a full tripcode (latitude and longitude interleaved)
pub const CODE_DIGITS: usize = 10;

/// Number of digits per axis
pub const AXIS_DIGITS: usize = (CODE_DIGITS + 1) / 2;

/// Number of digits in a short tripcode
pub const SHORT_CODE_DIGITS: usize = CODE_DIGITS - 2;

/// Length of a formatted tripcode, `XXX-XXX-XXXX`
pub const CODE_LEN: usize = CODE_DIGITS + 2;

/// Separator inserted between digit groups
pub const SEPARATOR: char = '-';

/// Digit counts after which a separator is emitted in a full code
pub(crate) const CODE_GROUPS: [usize; 2] = [3, 6];

/// Digit counts after which a separator is emitted in a short code
pub(crate) const SHORT_CODE_GROUPS: [usize; 1] = [4];

/// Longitude span covered by the scaled domain, in degrees
pub const MAX_DEGREE: f64 = 360.0;

/// Offset that moves latitude into `[0, 180]`
pub const LATITUDE_OFFSET: f64 = 90.0;

/// Offset that moves longitude into `[0, 360]`
pub const LONGITUDE_OFFSET: f64 = 180.0;

/// Largest scaled value a tripcode can represent (`BASE^5 - 1`)
pub const MAX_SCALED: u64 = BASE.pow(AXIS_DIGITS as u32) - 1;
