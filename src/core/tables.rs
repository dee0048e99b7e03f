use crate::core::constants::{ALPHABET, AXIS_DIGITS, BASE, MAX_DEGREE};
use log::debug;

/// Precomputed lookup tables shared by every codec operation.
///
/// Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CodecTables {
    /// `place[i] = BASE^i`
    pub place: [u64; AXIS_DIGITS],
    /// Degrees per longitude step; latitude uses half of it.
    pub accuracy: f64,
    reverse: [Option<u8>; 128],
}

impl CodecTables {
    pub fn new() -> Self {
        let mut place = [0u64; AXIS_DIGITS];
        let mut factor = 1u64;
        for slot in place.iter_mut() {
            *slot = factor;
            factor *= BASE;
        }

        let accuracy = snap_accuracy(MAX_DEGREE / (factor as f64 - 1.0));

        let mut reverse = [None; 128];
        for (value, &symbol) in ALPHABET.iter().enumerate() {
            reverse[symbol as usize] = Some(value as u8);
            if symbol.is_ascii_uppercase() {
                reverse[symbol.to_ascii_lowercase() as usize] = Some(value as u8);
            }
        }

        debug!(
            "tripcode tables ready: base={}, factor={}, accuracy={}",
            BASE, factor, accuracy
        );

        Self {
            place,
            accuracy,
            reverse,
        }
    }

    /// Degrees per latitude step.
    pub fn latitude_step(&self) -> f64 {
        self.accuracy / 2.0
    }

    /// Degrees per longitude step.
    pub fn longitude_step(&self) -> f64 {
        self.accuracy
    }

    /// Digit value of `symbol`, accepting lowercase letters.
    pub fn digit_value(&self, symbol: char) -> Option<u8> {
        if symbol.is_ascii() {
            self.reverse[symbol as usize]
        } else {
            None
        }
    }

    /// Alphabet symbol for a digit value below `BASE`.
    pub fn symbol(&self, value: u8) -> char {
        ALPHABET[value as usize] as char
    }
}

impl Default for CodecTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Rounds `raw` up at two decimals finer than its magnitude.
///
/// Every port computes the same constant this way, so codes stay portable
/// across floating-point implementations.
pub(crate) fn snap_accuracy(raw: f64) -> f64 {
    let decimals = (-raw.log10()).floor() as i32 + 2;
    let scale = 10f64.powi(decimals);
    (raw * scale).ceil() / scale
}
