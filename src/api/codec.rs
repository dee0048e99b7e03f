use crate::core::constants::{
    BASE, CODE_DIGITS, CODE_GROUPS, LATITUDE_OFFSET, LONGITUDE_OFFSET, MAX_SCALED,
    SHORT_CODE_DIGITS, SHORT_CODE_GROUPS,
};
use crate::core::radix::{format_scaled, parse_scaled};
use crate::core::tables::CodecTables;
use crate::util::coord::{Coordinate, validate_wgs84};
use crate::util::error::TripcodeError;
use geo_types::Point;
use lazy_static::lazy_static;
use log::trace;

lazy_static! {
    static ref SHARED_CODEC: TripcodeCodec = TripcodeCodec::new();
}

/// Converts WGS84 coordinates to and from tripcodes.
///
/// A codec owns its precomputed tables and is read-only once built, so a single
/// instance can be shared freely between threads. [`TripcodeCodec::shared`] hands
/// out a lazily built process-wide instance.
///
/// # Example
///
/// ```
/// use tripcode_rs::TripcodeCodec;
///
/// # fn main() -> Result<(), tripcode_rs::TripcodeError> {
/// let codec = TripcodeCodec::shared();
/// let code = codec.encode(29.979235, 31.134202)?;
/// assert_eq!(code, "NLL-CJZ-QZNS");
///
/// let (lat, lng) = codec.decode(&code)?;
/// assert!((lat - 29.979235).abs() < codec.accuracy());
/// assert!((lng - 31.134202).abs() < codec.accuracy());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TripcodeCodec {
    tables: CodecTables,
}

impl TripcodeCodec {
    pub fn new() -> Self {
        Self {
            tables: CodecTables::new(),
        }
    }

    /// Process-wide codec, built on first use.
    pub fn shared() -> &'static TripcodeCodec {
        &SHARED_CODEC
    }

    pub fn tables(&self) -> &CodecTables {
        &self.tables
    }

    /// Degrees per longitude step (latitude steps are half as wide).
    pub fn accuracy(&self) -> f64 {
        self.tables.accuracy
    }

    /// Encodes a latitude/longitude pair as a 12-character tripcode.
    ///
    /// # Errors
    ///
    /// [`TripcodeError::OutOfRangeInput`] if latitude is outside [-90, 90] or
    /// longitude is outside [-180, 180]. Nothing is clamped.
    pub fn encode(&self, latitude: f64, longitude: f64) -> Result<String, TripcodeError> {
        let scaled = self.to_scaled(latitude, longitude)?;
        let code = format_scaled(&self.tables, scaled, CODE_DIGITS, &CODE_GROUPS)?;
        trace!("encoded ({}, {}) as {}", latitude, longitude, code);
        Ok(code)
    }

    /// Encodes any [`Coordinate`], reading x as longitude and y as latitude.
    ///
    /// ```
    /// use tripcode_rs::TripcodeCodec;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), tripcode_rs::TripcodeError> {
    /// let codec = TripcodeCodec::shared();
    /// let from_point = codec.encode_point(&Point::new(31.134202, 29.979235))?;
    /// let from_tuple = codec.encode_point(&(31.134202, 29.979235))?;
    /// assert_eq!(from_point, from_tuple);
    /// # Ok(())
    /// # }
    /// ```
    pub fn encode_point(&self, coord: &impl Coordinate) -> Result<String, TripcodeError> {
        self.encode(coord.y(), coord.x())
    }

    /// Encodes a coordinate as an 8-digit short code (`XXXX-XXXX`).
    ///
    /// The scaled values are rounded to the nearest multiple of the base, which
    /// zeroes the least significant pair, and that pair is left off.
    pub fn encode_short(&self, latitude: f64, longitude: f64) -> Result<String, TripcodeError> {
        let scaled = self.to_scaled(latitude, longitude)?;
        self.format_short(scaled)
    }

    /// Decodes a tripcode into `(latitude, longitude)`.
    ///
    /// Dashes are ignored wherever they appear and lowercase letters are
    /// accepted. Eight- and nine-digit codes are read as if padded with zero
    /// digits.
    ///
    /// # Errors
    ///
    /// - [`TripcodeError::InvalidCodeCharacter`] - a character outside the alphabet
    /// - [`TripcodeError::TruncatedCode`] - fewer than 8 digits
    /// - [`TripcodeError::CodeTooLong`] - more than 10 digits
    pub fn decode(&self, code: &str) -> Result<(f64, f64), TripcodeError> {
        let scaled = self.scaled(code)?;
        let coord = self.from_scaled(scaled);
        trace!("decoded {} as {:?}", code, coord);
        Ok(coord)
    }

    /// Decodes a tripcode into a point with x = longitude, y = latitude.
    pub fn decode_point(&self, code: &str) -> Result<Point<f64>, TripcodeError> {
        let (latitude, longitude) = self.decode(code)?;
        Ok(Point::new(longitude, latitude))
    }

    /// Moves both axes of `code` by `offset` steps and re-encodes the result.
    ///
    /// Works on the scaled integers directly, so no precision is lost to a
    /// round trip through degrees.
    ///
    /// # Errors
    ///
    /// Any decode error, or [`TripcodeError::OffsetOverflow`] when a shifted
    /// value falls outside `[0, BASE^5 - 1]`. Values never wrap around.
    ///
    /// ```
    /// use tripcode_rs::TripcodeCodec;
    ///
    /// # fn main() -> Result<(), tripcode_rs::TripcodeError> {
    /// let codec = TripcodeCodec::shared();
    /// assert_eq!(codec.shift("HHX-XGG-XXHH", 1)?, "HHX-XGG-XXJJ");
    /// assert!(codec.shift("222-222-2222", -1).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn shift(&self, code: &str, offset: i64) -> Result<String, TripcodeError> {
        let (lat, lng) = self.scaled(code)?;
        let shifted = (offset_scaled(lat, offset)?, offset_scaled(lng, offset)?);
        format_scaled(&self.tables, shifted, CODE_DIGITS, &CODE_GROUPS)
    }

    /// Reduces any accepted code to its 8-digit short form.
    pub fn shorten(&self, code: &str) -> Result<String, TripcodeError> {
        let scaled = self.scaled(code)?;
        self.format_short(scaled)
    }

    /// Scaled `(lat, lng)` integers encoded by `code`.
    pub fn scaled(&self, code: &str) -> Result<(u64, u64), TripcodeError> {
        parse_scaled(&self.tables, code)
    }

    /// Formats a scaled `(lat, lng)` pair as a full tripcode.
    pub fn format_scaled(&self, scaled: (u64, u64)) -> Result<String, TripcodeError> {
        format_scaled(&self.tables, scaled, CODE_DIGITS, &CODE_GROUPS)
    }

    /// Quantizes a coordinate onto the scaled integer grid.
    pub fn to_scaled(&self, latitude: f64, longitude: f64) -> Result<(u64, u64), TripcodeError> {
        validate_wgs84(latitude, longitude)?;
        let lat = ((latitude + LATITUDE_OFFSET) / self.tables.latitude_step()).round() as u64;
        let lng = ((longitude + LONGITUDE_OFFSET) / self.tables.longitude_step()).round() as u64;
        Ok((lat, lng))
    }

    /// Converts a scaled pair back to `(latitude, longitude)` in degrees.
    pub fn from_scaled(&self, (lat, lng): (u64, u64)) -> (f64, f64) {
        (
            lat as f64 * self.tables.latitude_step() - LATITUDE_OFFSET,
            lng as f64 * self.tables.longitude_step() - LONGITUDE_OFFSET,
        )
    }

    fn format_short(&self, (lat, lng): (u64, u64)) -> Result<String, TripcodeError> {
        let rounded = (round_to_base(lat)?, round_to_base(lng)?);
        format_scaled(&self.tables, rounded, SHORT_CODE_DIGITS, &SHORT_CODE_GROUPS)
    }
}

impl Default for TripcodeCodec {
    fn default() -> Self {
        Self::new()
    }
}

fn offset_scaled(value: u64, offset: i64) -> Result<u64, TripcodeError> {
    let shifted = (value as i64)
        .checked_add(offset)
        .ok_or(TripcodeError::OffsetOverflow(offset))?;
    if shifted < 0 || shifted as u64 > MAX_SCALED {
        return Err(TripcodeError::OffsetOverflow(shifted));
    }
    Ok(shifted as u64)
}

// half up
fn round_to_base(value: u64) -> Result<u64, TripcodeError> {
    let rounded = (value + BASE / 2) / BASE * BASE;
    if rounded > MAX_SCALED {
        return Err(TripcodeError::OffsetOverflow(rounded as i64));
    }
    Ok(rounded)
}

/// Encodes with the shared codec. See [`TripcodeCodec::encode`].
pub fn encode(latitude: f64, longitude: f64) -> Result<String, TripcodeError> {
    TripcodeCodec::shared().encode(latitude, longitude)
}

/// Decodes with the shared codec. See [`TripcodeCodec::decode`].
pub fn decode(code: &str) -> Result<(f64, f64), TripcodeError> {
    TripcodeCodec::shared().decode(code)
}

/// Shifts with the shared codec. See [`TripcodeCodec::shift`].
pub fn shift(code: &str, offset: i64) -> Result<String, TripcodeError> {
    TripcodeCodec::shared().shift(code, offset)
}

/// Short code with the shared codec. See [`TripcodeCodec::encode_short`].
pub fn encode_short(latitude: f64, longitude: f64) -> Result<String, TripcodeError> {
    TripcodeCodec::shared().encode_short(latitude, longitude)
}
