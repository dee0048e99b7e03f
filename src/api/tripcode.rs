use crate::api::codec::TripcodeCodec;
use crate::util::coord::Coordinate;
use crate::util::error::TripcodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated tripcode in canonical `XXX-XXX-XXXX` form.
///
/// Parsing accepts anything [`TripcodeCodec::decode`] accepts and normalizes
/// it, so two `Tripcode`s compare equal exactly when they name the same cell.
/// Serializes as its string.
///
/// ```
/// use tripcode_rs::Tripcode;
///
/// # fn main() -> Result<(), tripcode_rs::TripcodeError> {
/// let code: Tripcode = "nll-cj-zqzns".parse()?;
/// assert_eq!(code.as_str(), "NLL-CJZ-QZNS");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tripcode(String);

impl Tripcode {
    pub fn from_wgs84(coord: &impl Coordinate) -> Result<Self, TripcodeError> {
        TripcodeCodec::shared().encode_point(coord).map(Tripcode)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes to `(latitude, longitude)`.
    pub fn coordinate(&self) -> Result<(f64, f64), TripcodeError> {
        TripcodeCodec::shared().decode(&self.0)
    }

    pub fn shift(&self, offset: i64) -> Result<Self, TripcodeError> {
        TripcodeCodec::shared().shift(&self.0, offset).map(Tripcode)
    }
}

impl FromStr for Tripcode {
    type Err = TripcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let codec = TripcodeCodec::shared();
        codec.format_scaled(codec.scaled(s)?).map(Tripcode)
    }
}

impl TryFrom<String> for Tripcode {
    type Error = TripcodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tripcode> for String {
    fn from(code: Tripcode) -> Self {
        code.0
    }
}

impl AsRef<str> for Tripcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tripcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonicalizes() -> Result<(), TripcodeError> {
        let a: Tripcode = "NLL-CJZ-QZNS".parse()?;
        let b: Tripcode = "nllcjzqzns".parse()?;
        let c: Tripcode = "N-L-L-C-J-Z-Q-Z-N-S".parse()?;

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.to_string(), "NLL-CJZ-QZNS");
        Ok(())
    }

    #[test]
    fn test_parse_short_code_expands() -> Result<(), TripcodeError> {
        let code: Tripcode = "HHXX-GGXX".parse()?;
        assert_eq!(code.as_str(), "HHX-XGG-XX22");
        Ok(())
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(
            "!!!-!!!-!!!!".parse::<Tripcode>(),
            Err(TripcodeError::InvalidCodeCharacter('!'))
        );
        assert!("HHX".parse::<Tripcode>().is_err());
    }

    #[test]
    fn test_from_wgs84_and_coordinate() -> Result<(), TripcodeError> {
        let code = Tripcode::from_wgs84(&(31.134202, 29.979235))?;
        assert_eq!(code.as_ref(), "NLL-CJZ-QZNS");

        let (lat, lng) = code.coordinate()?;
        assert!((lat - 29.979235).abs() < 0.000021);
        assert!((lng - 31.134202).abs() < 0.000021);
        Ok(())
    }

    #[test]
    fn test_shift() -> Result<(), TripcodeError> {
        let code: Tripcode = "HHX-XGG-XXHH".parse()?;
        assert_eq!(code.shift(-1)?.as_str(), "HHX-XGG-XXGG");
        Ok(())
    }

    #[test]
    fn test_serde_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let code: Tripcode = "RJJ-5GG-5BFN".parse()?;
        let json = serde_json::to_string(&code)?;
        assert_eq!(json, "\"RJJ-5GG-5BFN\"");

        let back: Tripcode = serde_json::from_str("\"rjj5gg5bfn\"")?;
        assert_eq!(back, code);

        assert!(serde_json::from_str::<Tripcode>("\"RJJ-5GG-5BF!\"").is_err());
        Ok(())
    }
}
